//! Input dispatch for arkana.
//!
//! [`InputManager`] tracks which keys and buttons are held, synthesizes key
//! repeats and routes each event to the active shortcut registry and the
//! GUI. Shortcut registries can be stacked so a modal screen gets its own
//! set of bindings and the previous set comes back when it closes.

mod error;
mod gui;
mod manager;
mod state;
mod winit_events;

pub use error::InputError;
pub use gui::{FocusedWidget, GuiHandler};
pub use manager::{ContextGuard, InputManager};
pub use state::InputState;
pub use winit_events::{button_from_winit, key_from_winit, scroll_from_winit};
