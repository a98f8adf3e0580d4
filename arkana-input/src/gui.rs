//! The GUI collaborator.
//!
//! The input manager offers events to a GUI before or after shortcut
//! dispatch. Every method reports whether the GUI consumed the event.

use arkana_keybindings::{Key, MouseButton, ScrollDirection};

/// What kind of widget currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedWidget {
    #[default]
    None,
    /// A single-line text field.
    SingleLineEdit,
    /// A multi-line text area.
    MultiLineEdit,
    /// Any other focusable widget.
    Other,
}

impl FocusedWidget {
    /// Whether a key-down should be offered to the GUI at all.
    ///
    /// Edit boxes would swallow Enter and Tab to validate themselves, but
    /// those keys belong to the dialog's shortcuts. Single-line edits never
    /// see Return, Tab or keypad Enter; multi-line edits keep Enter but
    /// never see Tab.
    pub fn accepts_key(self, key: Key) -> bool {
        match self {
            FocusedWidget::SingleLineEdit => {
                !matches!(key, Key::Return | Key::Tab | Key::NumpadEnter)
            }
            FocusedWidget::MultiLineEdit => key != Key::Tab,
            FocusedWidget::None | FocusedWidget::Other => true,
        }
    }
}

/// Receives input events the shortcuts did not claim.
pub trait GuiHandler {
    fn focused_widget(&self) -> FocusedWidget {
        FocusedWidget::None
    }

    fn key_down(&mut self, _key: Key) -> bool {
        false
    }

    fn key_up(&mut self, _key: Key) -> bool {
        false
    }

    fn text_input(&mut self, _ch: char) -> bool {
        false
    }

    fn mouse_button(&mut self, _button: MouseButton, _pressed: bool) -> bool {
        false
    }

    fn scroll(&mut self, _direction: ScrollDirection) -> bool {
        false
    }

    fn mouse_move(&mut self, _x: f64, _y: f64) -> bool {
        false
    }
}
