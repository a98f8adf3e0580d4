//! Binding string parser.
//!
//! Parses human-readable chains like "Ctrl+Shift+ArrowUp" into the list of
//! triggers that make up a combo chain. The last token is the base trigger;
//! the tokens before it are modifiers, each one refining the next.

use crate::trigger::{Key, MetaKey, MouseButton, ScrollDirection, Trigger};

/// Error type for binding string parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub(crate) String);

impl ParseError {
    /// The failure message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Parse a binding string into its chain of triggers, base first.
///
/// `"Ctrl+Shift+ArrowUp"` yields `[ArrowUp, Control, Shift]`: ArrowUp is
/// the base, Control modifies it and Shift modifies Control.
///
/// Tokens are case-insensitive. Besides every trigger token (see
/// [`Trigger::token`]) the following aliases are accepted:
/// - `Control`, `Option`, `Any`
/// - `Esc`, `Up`, `Down`, `Left`, `Right`, `PgUp`, `PgDn`, `Del`, `Ins`
/// - `Plus`, `LMB`, `MMB`, `RMB`, `ScrollUp`, `ScrollDown`
pub fn parse_combo_chain(s: &str) -> Result<Vec<Trigger>, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let mut chain = s
        .split('+')
        .map(str::trim)
        .map(|part| {
            if part.is_empty() {
                Err(ParseError(format!("Empty token in '{}'", s)))
            } else {
                parse_trigger(part)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Base last in written form, first in the chain.
    chain.rotate_right(1);
    Ok(chain)
}

/// Parse a single trigger token.
pub fn parse_trigger(s: &str) -> Result<Trigger, ParseError> {
    let lower = s.to_ascii_lowercase();

    if let Some(trigger) = parse_alias(&lower) {
        return Ok(trigger);
    }

    if let Some(key) = Key::ALL.iter().find(|k| k.token().eq_ignore_ascii_case(s)) {
        return Ok(Trigger::Key(*key));
    }
    if let Some(meta) = MetaKey::ALL.iter().find(|m| m.token().eq_ignore_ascii_case(s)) {
        return Ok(Trigger::Meta(*meta));
    }
    if let Some(button) = MouseButton::ALL
        .iter()
        .find(|b| b.token().eq_ignore_ascii_case(s))
    {
        return Ok(Trigger::Button(*button));
    }
    if let Some(dir) = ScrollDirection::ALL
        .iter()
        .find(|d| d.token().eq_ignore_ascii_case(s))
    {
        return Ok(Trigger::Scroll(*dir));
    }

    Err(ParseError(format!("Unknown key: '{}'", s)))
}

fn parse_alias(lower: &str) -> Option<Trigger> {
    let trigger = match lower {
        // Meta keys
        "control" => Trigger::Meta(MetaKey::Control),
        "option" => Trigger::Meta(MetaKey::Alt),
        "any" => Trigger::Meta(MetaKey::AnyKey),

        // Named keys
        "esc" => Trigger::Key(Key::Escape),
        "up" => Trigger::Key(Key::ArrowUp),
        "down" => Trigger::Key(Key::ArrowDown),
        "left" => Trigger::Key(Key::ArrowLeft),
        "right" => Trigger::Key(Key::ArrowRight),
        "pgup" => Trigger::Key(Key::PageUp),
        "pgdn" | "pgdown" => Trigger::Key(Key::PageDown),
        "del" => Trigger::Key(Key::Delete),
        "ins" => Trigger::Key(Key::Insert),
        "plus" => Trigger::Key(Key::Add),
        "menu" => Trigger::Key(Key::AppMenu),

        // Mouse
        "lmb" => Trigger::Button(MouseButton::Left),
        "mmb" => Trigger::Button(MouseButton::Middle),
        "rmb" => Trigger::Button(MouseButton::Right),
        "scrollup" => Trigger::Scroll(ScrollDirection::Up),
        "scrolldown" => Trigger::Scroll(ScrollDirection::Down),
        "scrollleft" => Trigger::Scroll(ScrollDirection::Left),
        "scrollright" => Trigger::Scroll(ScrollDirection::Right),

        _ => return None,
    };
    Some(trigger)
}

/// Render a chain back into binding string form (`Ctrl+Shift+ArrowUp`).
pub fn format_combo_chain(chain: &[Trigger]) -> String {
    let Some((base, modifiers)) = chain.split_first() else {
        return String::new();
    };
    let mut parts: Vec<&str> = modifiers.iter().map(|t| t.token()).collect();
    parts.push(base.token());
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let chain = parse_combo_chain("Escape").unwrap();
        assert_eq!(chain, vec![Trigger::Key(Key::Escape)]);
    }

    #[test]
    fn test_parse_chain_order() {
        let chain = parse_combo_chain("Ctrl+Shift+ArrowUp").unwrap();
        assert_eq!(
            chain,
            vec![
                Trigger::Key(Key::ArrowUp),
                Trigger::Meta(MetaKey::Control),
                Trigger::Meta(MetaKey::Shift),
            ]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            parse_combo_chain("ctrl+a").unwrap(),
            parse_combo_chain("CTRL+A").unwrap()
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_trigger("Control").unwrap(), Trigger::Meta(MetaKey::Control));
        assert_eq!(parse_trigger("Esc").unwrap(), Trigger::Key(Key::Escape));
        assert_eq!(parse_trigger("PgUp").unwrap(), Trigger::Key(Key::PageUp));
        assert_eq!(parse_trigger("Up").unwrap(), Trigger::Key(Key::ArrowUp));
        assert_eq!(parse_trigger("Option").unwrap(), Trigger::Meta(MetaKey::Alt));
    }

    #[test]
    fn test_enter_is_meta_and_return_is_physical() {
        assert_eq!(parse_trigger("Enter").unwrap(), Trigger::Meta(MetaKey::Enter));
        assert_eq!(parse_trigger("Return").unwrap(), Trigger::Key(Key::Return));
        assert_eq!(
            parse_trigger("NumpadEnter").unwrap(),
            Trigger::Key(Key::NumpadEnter)
        );
    }

    #[test]
    fn test_parse_mouse_and_scroll() {
        assert_eq!(
            parse_trigger("AnyButton").unwrap(),
            Trigger::Button(MouseButton::Any)
        );
        assert_eq!(
            parse_trigger("button4").unwrap(),
            Trigger::Button(MouseButton::Fourth)
        );
        assert_eq!(
            parse_trigger("WheelUp").unwrap(),
            Trigger::Scroll(ScrollDirection::Up)
        );
        assert_eq!(
            parse_trigger("ScrollDown").unwrap(),
            Trigger::Scroll(ScrollDirection::Down)
        );
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_trigger("1").unwrap(), Trigger::Key(Key::One));
        assert_eq!(parse_trigger("0").unwrap(), Trigger::Key(Key::Zero));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_combo_chain("").is_err());
        assert!(parse_combo_chain("   ").is_err());
        assert!(parse_combo_chain("Ctrl++A").is_err());
        assert!(parse_combo_chain("Ctrl+").is_err());
        let err = parse_combo_chain("Ctrl+Bogus").unwrap_err();
        assert!(err.message().contains("Bogus"));
    }

    #[test]
    fn test_format_round_trip() {
        let text = "Ctrl+Shift+ArrowUp";
        let chain = parse_combo_chain(text).unwrap();
        assert_eq!(format_combo_chain(&chain), text);
    }
}
