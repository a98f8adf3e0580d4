//! Translation from winit window events.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use arkana_keybindings::{Key, MouseButton, ScrollDirection};

use crate::manager::InputManager;

/// Map a winit physical key code to a [`Key`].
///
/// Keys with no counterpart (media keys, IME keys, ...) return `None`.
pub fn key_from_winit(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Zero,
        KeyCode::Digit1 => Key::One,
        KeyCode::Digit2 => Key::Two,
        KeyCode::Digit3 => Key::Three,
        KeyCode::Digit4 => Key::Four,
        KeyCode::Digit5 => Key::Five,
        KeyCode::Digit6 => Key::Six,
        KeyCode::Digit7 => Key::Seven,
        KeyCode::Digit8 => Key::Eight,
        KeyCode::Digit9 => Key::Nine,

        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Return,
        KeyCode::Pause => Key::Pause,
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::Comma => Key::Comma,
        KeyCode::Minus => Key::Minus,
        KeyCode::Period => Key::Period,
        KeyCode::Slash => Key::Slash,
        KeyCode::Semicolon => Key::Semicolon,
        KeyCode::Equal => Key::Equals,
        KeyCode::BracketLeft => Key::LeftBracket,
        KeyCode::Backslash => Key::Backslash,
        KeyCode::BracketRight => Key::RightBracket,
        KeyCode::Delete => Key::Delete,

        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::Numpad1 => Key::Numpad1,
        KeyCode::Numpad2 => Key::Numpad2,
        KeyCode::Numpad3 => Key::Numpad3,
        KeyCode::Numpad4 => Key::Numpad4,
        KeyCode::Numpad5 => Key::Numpad5,
        KeyCode::Numpad6 => Key::Numpad6,
        KeyCode::Numpad7 => Key::Numpad7,
        KeyCode::Numpad8 => Key::Numpad8,
        KeyCode::Numpad9 => Key::Numpad9,
        KeyCode::NumpadDecimal => Key::Decimal,
        KeyCode::NumpadDivide => Key::Divide,
        KeyCode::NumpadMultiply => Key::Multiply,
        KeyCode::NumpadSubtract => Key::Subtract,
        KeyCode::NumpadAdd => Key::Add,
        KeyCode::NumpadEnter => Key::NumpadEnter,
        KeyCode::NumpadEqual => Key::NumpadEquals,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::Insert => Key::Insert,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::F13 => Key::F13,
        KeyCode::F14 => Key::F14,
        KeyCode::F15 => Key::F15,

        KeyCode::NumLock => Key::NumLock,
        KeyCode::ScrollLock => Key::ScrollLock,
        KeyCode::ShiftRight => Key::RightShift,
        KeyCode::ShiftLeft => Key::LeftShift,
        KeyCode::ControlRight => Key::RightControl,
        KeyCode::ControlLeft => Key::LeftControl,
        KeyCode::AltRight => Key::RightAlt,
        KeyCode::AltLeft => Key::LeftAlt,
        KeyCode::SuperLeft => Key::LeftWindows,
        KeyCode::SuperRight => Key::RightWindows,
        KeyCode::PrintScreen => Key::SysRq,
        KeyCode::ContextMenu => Key::AppMenu,
        KeyCode::Power => Key::Power,

        _ => return None,
    };
    Some(key)
}

/// Map a winit mouse button. Back and Forward are buttons 4 and 5.
pub fn button_from_winit(button: winit::event::MouseButton) -> Option<MouseButton> {
    use winit::event::MouseButton as W;

    match button {
        W::Left => Some(MouseButton::Left),
        W::Middle => Some(MouseButton::Middle),
        W::Right => Some(MouseButton::Right),
        W::Back => Some(MouseButton::Fourth),
        W::Forward => Some(MouseButton::Fifth),
        W::Other(5) => Some(MouseButton::Sixth),
        W::Other(6) => Some(MouseButton::Seventh),
        W::Other(7) => Some(MouseButton::Eighth),
        W::Other(_) => None,
    }
}

/// The dominant scroll direction of a wheel delta. Vertical wins ties.
pub fn scroll_from_winit(delta: &MouseScrollDelta) -> Option<ScrollDirection> {
    let (x, y) = match delta {
        MouseScrollDelta::LineDelta(x, y) => (f64::from(*x), f64::from(*y)),
        MouseScrollDelta::PixelDelta(pos) => (pos.x, pos.y),
    };

    if y != 0.0 && y.abs() >= x.abs() {
        Some(if y > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        })
    } else if x != 0.0 {
        Some(if x > 0.0 {
            ScrollDirection::Right
        } else {
            ScrollDirection::Left
        })
    } else {
        None
    }
}

impl InputManager {
    /// Feed a winit window event. Returns `true` when a shortcut or the GUI
    /// consumed it.
    ///
    /// OS key repeats are dropped; repeats are synthesized by
    /// [`InputManager::update`] instead.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return false;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = key_from_winit(code) else {
                    log::trace!("Ignoring unmapped key {:?}", code);
                    return false;
                };

                match event.state {
                    ElementState::Pressed => {
                        let mut handled = self.key_down(key);
                        if let Some(text) = &event.text {
                            for ch in text.chars() {
                                handled |= self.text_input(ch);
                            }
                        }
                        handled
                    }
                    ElementState::Released => self.key_up(key),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = button_from_winit(*button) else {
                    return false;
                };
                match state {
                    ElementState::Pressed => self.mouse_button_down(button),
                    ElementState::Released => self.mouse_button_up(button),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => match scroll_from_winit(delta) {
                Some(direction) => self.mouse_scroll(direction),
                None => false,
            },
            WindowEvent::CursorMoved { position, .. } => self.mouse_move(position.x, position.y),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque id in synthetic events.
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_winit(KeyCode::KeyA), Some(Key::A));
        assert_eq!(key_from_winit(KeyCode::Digit7), Some(Key::Seven));
        assert_eq!(key_from_winit(KeyCode::Enter), Some(Key::Return));
        assert_eq!(key_from_winit(KeyCode::ControlRight), Some(Key::RightControl));
        assert_eq!(key_from_winit(KeyCode::NumpadAdd), Some(Key::Add));
        assert_eq!(key_from_winit(KeyCode::MediaPlayPause), None);
    }

    #[test]
    fn test_button_mapping() {
        use winit::event::MouseButton as W;
        assert_eq!(button_from_winit(W::Left), Some(MouseButton::Left));
        assert_eq!(button_from_winit(W::Back), Some(MouseButton::Fourth));
        assert_eq!(button_from_winit(W::Forward), Some(MouseButton::Fifth));
        assert_eq!(button_from_winit(W::Other(7)), Some(MouseButton::Eighth));
        assert_eq!(button_from_winit(W::Other(42)), None);
    }

    #[test]
    fn test_scroll_direction() {
        assert_eq!(
            scroll_from_winit(&MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(ScrollDirection::Up)
        );
        assert_eq!(
            scroll_from_winit(&MouseScrollDelta::LineDelta(0.5, -2.0)),
            Some(ScrollDirection::Down)
        );
        assert_eq!(
            scroll_from_winit(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(-30.0, 4.0))),
            Some(ScrollDirection::Left)
        );
        assert_eq!(scroll_from_winit(&MouseScrollDelta::LineDelta(0.0, 0.0)), None);
    }

    #[test]
    fn test_window_events_drive_shortcuts() {
        let mut manager = InputManager::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        manager
            .add_scroll("zoom in", ScrollDirection::Up, move || {
                counter.set(counter.get() + 1);
                true
            })
            .unwrap();

        let wheel = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, 3.0),
            phase: TouchPhase::Moved,
        };
        assert!(manager.handle_window_event(&wheel));
        assert_eq!(hits.get(), 1);

        let click = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: winit::event::MouseButton::Right,
        };
        assert!(!manager.handle_window_event(&click));
        assert_eq!(manager.state().pressed_buttons().count(), 1);

        let moved = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(10.0, 20.0),
        };
        manager.handle_window_event(&moved);
        assert_eq!(manager.cursor(), (10.0, 20.0));

        assert!(!manager.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(1, 1))));
    }
}
