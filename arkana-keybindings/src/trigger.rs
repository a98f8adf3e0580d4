//! Trigger codes.
//!
//! Every physical key, meta key, mouse button and scroll direction maps to a
//! small dense integer so the registry can bucket combos in a plain array.
//! The numbering is contiguous: physical keys first, then meta keys, then
//! mouse buttons, then scroll directions.

use std::fmt;

use crate::state::TriggerState;

macro_rules! define_keys {
    ($($variant:ident => $token:literal, $name:literal;)+) => {
        /// A physical keyboard key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Key {
            $($variant,)+
        }

        impl Key {
            /// Every physical key, in code order.
            pub const ALL: &'static [Key] = &[$(Key::$variant,)+];

            /// Token used in binding strings (e.g. `LeftShift`).
            pub fn token(self) -> &'static str {
                match self {
                    $(Key::$variant => $token,)+
                }
            }

            /// Human-readable name (e.g. "left shift").
            pub fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)+
                }
            }
        }
    };
}

define_keys! {
    A => "A", "a";
    B => "B", "b";
    C => "C", "c";
    D => "D", "d";
    E => "E", "e";
    F => "F", "f";
    G => "G", "g";
    H => "H", "h";
    I => "I", "i";
    J => "J", "j";
    K => "K", "k";
    L => "L", "l";
    M => "M", "m";
    N => "N", "n";
    O => "O", "o";
    P => "P", "p";
    Q => "Q", "q";
    R => "R", "r";
    S => "S", "s";
    T => "T", "t";
    U => "U", "u";
    V => "V", "v";
    W => "W", "w";
    X => "X", "x";
    Y => "Y", "y";
    Z => "Z", "z";
    Zero => "0", "0";
    One => "1", "1";
    Two => "2", "2";
    Three => "3", "3";
    Four => "4", "4";
    Five => "5", "5";
    Six => "6", "6";
    Seven => "7", "7";
    Eight => "8", "8";
    Nine => "9", "9";
    Backspace => "Backspace", "backspace";
    Tab => "Tab", "tabulation";
    Return => "Return", "return";
    Pause => "Pause", "pause";
    Escape => "Escape", "escape";
    Space => "Space", "space";
    Comma => "Comma", "comma";
    Minus => "Minus", "minus";
    Period => "Period", "point";
    Slash => "Slash", "slash";
    Colon => "Colon", "colon";
    Semicolon => "Semicolon", "semicolon";
    Equals => "Equals", "equals";
    LeftBracket => "LeftBracket", "left bracket";
    Backslash => "Backslash", "backslash";
    RightBracket => "RightBracket", "right bracket";
    Delete => "Delete", "delete";
    Numpad0 => "Numpad0", "keypad 0";
    Numpad1 => "Numpad1", "keypad 1";
    Numpad2 => "Numpad2", "keypad 2";
    Numpad3 => "Numpad3", "keypad 3";
    Numpad4 => "Numpad4", "keypad 4";
    Numpad5 => "Numpad5", "keypad 5";
    Numpad6 => "Numpad6", "keypad 6";
    Numpad7 => "Numpad7", "keypad 7";
    Numpad8 => "Numpad8", "keypad 8";
    Numpad9 => "Numpad9", "keypad 9";
    Decimal => "Decimal", "keypad period";
    Divide => "Divide", "keypad divide";
    Multiply => "Multiply", "keypad multiply";
    Subtract => "Subtract", "keypad minus";
    Add => "Add", "keypad plus";
    NumpadEnter => "NumpadEnter", "keypad enter";
    NumpadEquals => "NumpadEquals", "equals to";
    ArrowUp => "ArrowUp", "up";
    ArrowDown => "ArrowDown", "down";
    ArrowRight => "ArrowRight", "right";
    ArrowLeft => "ArrowLeft", "left";
    Insert => "Insert", "insert";
    Home => "Home", "home";
    End => "End", "end";
    PageUp => "PageUp", "page up";
    PageDown => "PageDown", "page down";
    F1 => "F1", "function 1";
    F2 => "F2", "function 2";
    F3 => "F3", "function 3";
    F4 => "F4", "function 4";
    F5 => "F5", "function 5";
    F6 => "F6", "function 6";
    F7 => "F7", "function 7";
    F8 => "F8", "function 8";
    F9 => "F9", "function 9";
    F10 => "F10", "function 10";
    F11 => "F11", "function 11";
    F12 => "F12", "function 12";
    F13 => "F13", "function 13";
    F14 => "F14", "function 14";
    F15 => "F15", "function 15";
    NumLock => "NumLock", "numlock";
    ScrollLock => "ScrollLock", "scroll lock";
    RightShift => "RightShift", "right shift";
    LeftShift => "LeftShift", "left shift";
    RightControl => "RightControl", "right control";
    LeftControl => "LeftControl", "left control";
    RightAlt => "RightAlt", "right alt";
    LeftAlt => "LeftAlt", "left alt";
    LeftWindows => "LeftWindows", "left windows";
    RightWindows => "RightWindows", "right windows";
    SysRq => "SysRq", "SysRq";
    AppMenu => "AppMenu", "menu";
    Power => "Power", "power";
}

impl Key {
    /// Number of physical keys.
    pub const COUNT: usize = Key::ALL.len();

    /// Dense index of this key, suitable for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The meta key this physical key is one half of, if any.
    ///
    /// Left/right Alt, Control and Shift map to their meta kind; Return and
    /// keypad Enter both map to [`MetaKey::Enter`].
    pub fn meta(self) -> Option<MetaKey> {
        match self {
            Key::LeftAlt | Key::RightAlt => Some(MetaKey::Alt),
            Key::LeftControl | Key::RightControl => Some(MetaKey::Control),
            Key::LeftShift | Key::RightShift => Some(MetaKey::Shift),
            Key::Return | Key::NumpadEnter => Some(MetaKey::Enter),
            _ => None,
        }
    }
}

/// A logical key resolved against the live state of several physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKey {
    /// Left or right Alt.
    Alt,
    /// Left or right Control.
    Control,
    /// Left or right Shift.
    Shift,
    /// Return or keypad Enter.
    Enter,
    /// Any key at all.
    AnyKey,
}

impl MetaKey {
    pub const ALL: &'static [MetaKey] = &[
        MetaKey::Alt,
        MetaKey::Control,
        MetaKey::Shift,
        MetaKey::Enter,
        MetaKey::AnyKey,
    ];

    /// The two physical keys backing this meta key. `None` for `AnyKey`.
    pub fn physical_pair(self) -> Option<(Key, Key)> {
        match self {
            MetaKey::Alt => Some((Key::LeftAlt, Key::RightAlt)),
            MetaKey::Control => Some((Key::LeftControl, Key::RightControl)),
            MetaKey::Shift => Some((Key::LeftShift, Key::RightShift)),
            MetaKey::Enter => Some((Key::Return, Key::NumpadEnter)),
            MetaKey::AnyKey => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            MetaKey::Alt => "Alt",
            MetaKey::Control => "Ctrl",
            MetaKey::Shift => "Shift",
            MetaKey::Enter => "Enter",
            MetaKey::AnyKey => "AnyKey",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetaKey::Alt => "left or right Alt key",
            MetaKey::Control => "left or right Ctrl key",
            MetaKey::Shift => "left or right Shift key",
            MetaKey::Enter => "enter key",
            MetaKey::AnyKey => "any key",
        }
    }
}

/// A mouse button, including the synthetic "any button".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    /// Matches whenever any button is held.
    Any,
}

impl MouseButton {
    pub const ALL: &'static [MouseButton] = &[
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Fourth,
        MouseButton::Fifth,
        MouseButton::Sixth,
        MouseButton::Seventh,
        MouseButton::Eighth,
        MouseButton::Any,
    ];

    pub fn token(self) -> &'static str {
        match self {
            MouseButton::Left => "LeftButton",
            MouseButton::Middle => "MiddleButton",
            MouseButton::Right => "RightButton",
            MouseButton::Fourth => "Button4",
            MouseButton::Fifth => "Button5",
            MouseButton::Sixth => "Button6",
            MouseButton::Seventh => "Button7",
            MouseButton::Eighth => "Button8",
            MouseButton::Any => "AnyButton",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "left mouse button",
            MouseButton::Middle => "middle mouse button",
            MouseButton::Right => "right mouse button",
            MouseButton::Fourth => "fourth mouse button",
            MouseButton::Fifth => "fifth mouse button",
            MouseButton::Sixth => "sixth mouse button",
            MouseButton::Seventh => "seventh mouse button",
            MouseButton::Eighth => "eighth mouse button",
            MouseButton::Any => "any mouse button",
        }
    }
}

/// A mouse wheel direction. Scrolling has no held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    pub const ALL: &'static [ScrollDirection] = &[
        ScrollDirection::Up,
        ScrollDirection::Down,
        ScrollDirection::Left,
        ScrollDirection::Right,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ScrollDirection::Up => "WheelUp",
            ScrollDirection::Down => "WheelDown",
            ScrollDirection::Left => "WheelLeft",
            ScrollDirection::Right => "WheelRight",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScrollDirection::Up => "mouse scroll up",
            ScrollDirection::Down => "mouse scroll down",
            ScrollDirection::Left => "mouse scroll left",
            ScrollDirection::Right => "mouse scroll right",
        }
    }
}

const META_BASE: usize = Key::COUNT;
const BUTTON_BASE: usize = META_BASE + MetaKey::ALL.len();
const SCROLL_BASE: usize = BUTTON_BASE + MouseButton::ALL.len();

/// Total number of distinct trigger codes.
pub const TRIGGER_COUNT: usize = SCROLL_BASE + ScrollDirection::ALL.len();

/// Anything a combo can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(Key),
    Meta(MetaKey),
    Button(MouseButton),
    Scroll(ScrollDirection),
}

impl Trigger {
    /// Dense trigger code in `0..TRIGGER_COUNT`.
    pub fn code(self) -> usize {
        match self {
            Trigger::Key(k) => k.index(),
            Trigger::Meta(m) => META_BASE + m as usize,
            Trigger::Button(b) => BUTTON_BASE + b as usize,
            Trigger::Scroll(s) => SCROLL_BASE + s as usize,
        }
    }

    /// Inverse of [`Trigger::code`].
    pub fn from_code(code: usize) -> Option<Self> {
        if code < META_BASE {
            Key::ALL.get(code).copied().map(Trigger::Key)
        } else if code < BUTTON_BASE {
            MetaKey::ALL.get(code - META_BASE).copied().map(Trigger::Meta)
        } else if code < SCROLL_BASE {
            MouseButton::ALL
                .get(code - BUTTON_BASE)
                .copied()
                .map(Trigger::Button)
        } else {
            ScrollDirection::ALL
                .get(code - SCROLL_BASE)
                .copied()
                .map(Trigger::Scroll)
        }
    }

    /// Token used in binding strings.
    pub fn token(self) -> &'static str {
        match self {
            Trigger::Key(k) => k.token(),
            Trigger::Meta(m) => m.token(),
            Trigger::Button(b) => b.token(),
            Trigger::Scroll(s) => s.token(),
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Trigger::Key(k) => k.name(),
            Trigger::Meta(m) => m.name(),
            Trigger::Button(b) => b.name(),
            Trigger::Scroll(s) => s.name(),
        }
    }

    /// Activation predicate.
    ///
    /// Held triggers are compared against `fires_on_press`, so an on-release
    /// combo is active while its trigger is up. Scroll triggers are momentary
    /// and only active when `scroll` names the same direction.
    pub fn is_active(
        self,
        fires_on_press: bool,
        state: &dyn TriggerState,
        scroll: Option<ScrollDirection>,
    ) -> bool {
        match self {
            Trigger::Key(k) => state.is_key_pressed(k) == fires_on_press,
            Trigger::Meta(MetaKey::AnyKey) => state.any_key_pressed() == fires_on_press,
            Trigger::Meta(meta) => match meta.physical_pair() {
                // Each half is compared on its own, then OR-ed.
                Some((left, right)) => {
                    state.is_key_pressed(left) == fires_on_press
                        || state.is_key_pressed(right) == fires_on_press
                }
                None => false,
            },
            Trigger::Button(MouseButton::Any) => state.any_button_pressed() == fires_on_press,
            Trigger::Button(b) => state.is_button_pressed(b) == fires_on_press,
            Trigger::Scroll(dir) => scroll == Some(dir),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Key> for Trigger {
    fn from(k: Key) -> Self {
        Trigger::Key(k)
    }
}

impl From<MetaKey> for Trigger {
    fn from(m: MetaKey) -> Self {
        Trigger::Meta(m)
    }
}

impl From<MouseButton> for Trigger {
    fn from(b: MouseButton) -> Self {
        Trigger::Button(b)
    }
}

impl From<ScrollDirection> for Trigger {
    fn from(s: ScrollDirection) -> Self {
        Trigger::Scroll(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PressedTriggers;

    #[test]
    fn test_codes_are_dense_and_round_trip() {
        for code in 0..TRIGGER_COUNT {
            let trigger = Trigger::from_code(code).unwrap();
            assert_eq!(trigger.code(), code);
        }
        assert!(Trigger::from_code(TRIGGER_COUNT).is_none());
    }

    #[test]
    fn test_meta_mapping() {
        assert_eq!(Key::LeftControl.meta(), Some(MetaKey::Control));
        assert_eq!(Key::NumpadEnter.meta(), Some(MetaKey::Enter));
        assert_eq!(Key::A.meta(), None);
    }

    #[test]
    fn test_meta_active_on_either_side() {
        let mut state = PressedTriggers::new();
        state.press_key(Key::RightAlt);
        let alt = Trigger::Meta(MetaKey::Alt);
        assert!(alt.is_active(true, &state, None));
        // An on-release Alt combo is also active: the left Alt is up.
        assert!(alt.is_active(false, &state, None));
    }

    #[test]
    fn test_any_key_and_any_button() {
        let mut state = PressedTriggers::new();
        let any_key = Trigger::Meta(MetaKey::AnyKey);
        let any_button = Trigger::Button(MouseButton::Any);
        assert!(!any_key.is_active(true, &state, None));
        assert!(!any_button.is_active(true, &state, None));

        state.press_key(Key::Q);
        state.press_button(MouseButton::Middle);
        assert!(any_key.is_active(true, &state, None));
        assert!(any_button.is_active(true, &state, None));
    }

    #[test]
    fn test_scroll_only_active_with_matching_hint() {
        let state = PressedTriggers::new();
        let up = Trigger::Scroll(ScrollDirection::Up);
        assert!(!up.is_active(true, &state, None));
        assert!(!up.is_active(true, &state, Some(ScrollDirection::Down)));
        assert!(up.is_active(true, &state, Some(ScrollDirection::Up)));
        // Press/release flavor does not matter for scrolling.
        assert!(up.is_active(false, &state, Some(ScrollDirection::Up)));
    }

    #[test]
    fn test_release_combo_active_when_key_up() {
        let state = PressedTriggers::new();
        assert!(Trigger::Key(Key::F5).is_active(false, &state, None));
        assert!(!Trigger::Key(Key::F5).is_active(true, &state, None));
    }
}
