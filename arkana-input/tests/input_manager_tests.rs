//! Integration tests for the input manager: context stack, key repeat,
//! GUI routing and shortcut fan-out.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use arkana_config::{InputConfig, KeyRepeatConfig, ShortcutBinding};
use arkana_input::{FocusedWidget, GuiHandler, InputError, InputManager};
use arkana_keybindings::{BoxedCommand, Key, MetaKey, MouseButton};

type Log = Rc<RefCell<Vec<String>>>;

fn recorder(log: &Log, label: &str) -> impl FnMut() -> bool + 'static {
    let log = Rc::clone(log);
    let label = label.to_string();
    move || {
        log.borrow_mut().push(label.clone());
        true
    }
}

fn taken(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

struct RecordingGui {
    focus: FocusedWidget,
    consume_keys: bool,
    log: Log,
}

impl GuiHandler for RecordingGui {
    fn focused_widget(&self) -> FocusedWidget {
        self.focus
    }

    fn key_down(&mut self, key: Key) -> bool {
        self.log.borrow_mut().push(format!("gui down {}", key.token()));
        self.consume_keys
    }

    fn text_input(&mut self, ch: char) -> bool {
        self.log.borrow_mut().push(format!("gui char {}", ch));
        true
    }

    fn mouse_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        self.log
            .borrow_mut()
            .push(format!("gui {} {}", button.token(), pressed));
        false
    }
}

#[test]
fn test_pushed_context_hides_previous_shortcuts() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("leave", Key::Escape, recorder(&log, "leave"), true)
        .unwrap();

    manager.push_context();
    assert_eq!(manager.context_depth(), 1);
    assert!(!manager.simulate_key_press(Key::Escape));
    assert!(taken(&log).is_empty());

    manager
        .add_key("close dialog", Key::Escape, recorder(&log, "close"), true)
        .unwrap();
    // Names only need to be unique within a context.
    manager
        .add_key("leave", Key::Q, recorder(&log, "inner leave"), true)
        .unwrap();
    assert!(manager.simulate_key_press(Key::Escape));
    assert_eq!(taken(&log), vec!["close"]);

    manager.pop_context().unwrap();
    assert!(manager.simulate_key_press(Key::Escape));
    assert_eq!(taken(&log), vec!["leave"]);
    assert!(!manager.shortcuts().contains("close dialog"));
}

#[test]
fn test_unbalanced_pop_is_an_error() {
    let mut manager = InputManager::default();
    manager.push_context();
    manager.pop_context().unwrap();
    assert_eq!(manager.pop_context(), Err(InputError::UnbalancedPop));
    assert_eq!(manager.context_depth(), 0);
}

#[test]
fn test_key_repeat_delay_then_interval() {
    let log = Log::default();
    let mut manager = InputManager::new(&KeyRepeatConfig::default());
    manager
        .add_key("forward", Key::W, recorder(&log, "forward"), true)
        .unwrap();

    let t0 = Instant::now();
    assert!(manager.key_down(Key::W));
    assert_eq!(taken(&log).len(), 1);

    // First tick only starts the wait.
    assert_eq!(manager.update(t0), 0);
    assert_eq!(manager.update(t0 + Duration::from_millis(300)), 0);

    let t1 = t0 + Duration::from_millis(600);
    assert_eq!(manager.update(t1), 1);
    assert_eq!(taken(&log), vec!["forward"]);
    assert!(manager.state().is_repeating(Key::W));

    // The repeat restarted the wait; now the short interval applies.
    assert_eq!(manager.update(t1), 0);
    assert_eq!(manager.update(t1 + Duration::from_millis(100)), 1);
    assert_eq!(taken(&log), vec!["forward"]);

    manager.key_up(Key::W);
    assert_eq!(manager.update(t1 + Duration::from_secs(5)), 0);
    assert!(taken(&log).is_empty());
}

#[test]
fn test_key_repeat_disabled() {
    let repeat = KeyRepeatConfig {
        enabled: false,
        ..KeyRepeatConfig::default()
    };
    let mut manager = InputManager::new(&repeat);
    let t0 = Instant::now();
    manager.key_down(Key::W);
    manager.update(t0);
    assert_eq!(manager.update(t0 + Duration::from_secs(2)), 0);
}

#[test]
fn test_key_repeat_reinjects_character() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager.set_gui(Box::new(RecordingGui {
        focus: FocusedWidget::MultiLineEdit,
        consume_keys: true,
        log: Rc::clone(&log),
    }));

    let t0 = Instant::now();
    manager.key_down(Key::A);
    manager.text_input('a');
    assert_eq!(taken(&log), vec!["gui down A", "gui char a"]);

    manager.update(t0);
    assert_eq!(manager.update(t0 + Duration::from_secs(1)), 1);
    assert_eq!(taken(&log), vec!["gui down A", "gui char a"]);
}

#[test]
fn test_single_line_edit_leaves_return_to_shortcuts() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("validate", Key::Return, recorder(&log, "validate"), true)
        .unwrap();
    manager
        .add_key("autopilot", Key::A, recorder(&log, "autopilot"), true)
        .unwrap();
    manager.set_gui(Box::new(RecordingGui {
        focus: FocusedWidget::SingleLineEdit,
        consume_keys: true,
        log: Rc::clone(&log),
    }));

    // Typing goes to the edit box and never reaches shortcuts.
    assert!(manager.simulate_key_press(Key::A));
    assert_eq!(taken(&log), vec!["gui down A"]);

    // Return is withheld from the edit box.
    assert!(manager.simulate_key_press(Key::Return));
    assert_eq!(taken(&log), vec!["validate"]);
}

#[test]
fn test_multi_line_edit_keeps_return_but_not_tab() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("next field", Key::Tab, recorder(&log, "tab"), true)
        .unwrap();
    manager.set_gui(Box::new(RecordingGui {
        focus: FocusedWidget::MultiLineEdit,
        consume_keys: true,
        log: Rc::clone(&log),
    }));

    manager.simulate_key_press(Key::Return);
    assert_eq!(taken(&log), vec!["gui down Return"]);

    manager.simulate_key_press(Key::Tab);
    assert_eq!(taken(&log), vec!["tab"]);
}

#[test]
fn test_gui_without_focus_still_falls_through_to_shortcuts() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("map", Key::M, recorder(&log, "map"), true)
        .unwrap();
    manager.set_gui(Box::new(RecordingGui {
        focus: FocusedWidget::None,
        consume_keys: false,
        log: Rc::clone(&log),
    }));

    assert!(manager.key_down(Key::M));
    assert_eq!(taken(&log), vec!["gui down M", "map"]);
    assert!(manager.take_gui().is_some());
}

#[test]
fn test_meta_and_any_fan_out() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_meta("boost", MetaKey::Control, recorder(&log, "boost"), true)
        .unwrap();
    manager
        .add_meta("wake", MetaKey::AnyKey, recorder(&log, "wake"), true)
        .unwrap();
    manager
        .add_button("stop tabbing", MouseButton::Any, recorder(&log, "stop"), true)
        .unwrap();

    // The meta combo claims the event before AnyKey is consulted.
    assert!(manager.key_down(Key::RightControl));
    assert_eq!(taken(&log), vec!["boost"]);

    assert!(manager.key_down(Key::F));
    assert_eq!(taken(&log), vec!["wake"]);

    assert!(manager.mouse_button_down(MouseButton::Middle));
    assert_eq!(taken(&log), vec!["stop"]);
}

#[test]
fn test_button_events_reach_gui_when_unclaimed() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager.set_gui(Box::new(RecordingGui {
        focus: FocusedWidget::Other,
        consume_keys: false,
        log: Rc::clone(&log),
    }));

    assert!(!manager.simulate_click(MouseButton::Left));
    assert_eq!(
        taken(&log),
        vec!["gui LeftButton true", "gui LeftButton false"]
    );
}

#[test]
fn test_release_shortcut_fires_on_key_up() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("console", Key::F9, recorder(&log, "console"), false)
        .unwrap();

    assert!(!manager.key_down(Key::F9));
    assert!(taken(&log).is_empty());
    assert!(manager.key_up(Key::F9));
    assert_eq!(taken(&log), vec!["console"]);
}

#[test]
fn test_detach_and_attach_through_manager() {
    let log = Log::default();
    let mut manager = InputManager::default();
    manager
        .add_key("pause", Key::P, recorder(&log, "pause"), true)
        .unwrap();

    assert!(manager.detach_shortcut("pause"));
    assert!(!manager.simulate_key_press(Key::P));
    manager.attach_shortcut("pause").unwrap();
    assert!(manager.simulate_key_press(Key::P));
    assert_eq!(taken(&log), vec!["pause"]);

    assert!(manager.remove_shortcut("pause"));
    assert!(!manager.remove_shortcut("pause"));
    manager.remove_all_shortcuts();
    assert!(manager.shortcuts().is_empty());
}

#[test]
fn test_from_config_registers_bindings() {
    let log = Log::default();
    let config = InputConfig {
        shortcuts: vec![
            ShortcutBinding::new("copy", "Ctrl+C", "copy"),
            ShortcutBinding::new("paste", "Ctrl+V", "paste"),
            ShortcutBinding::new("mystery", "Ctrl+M", "no_such_action"),
        ],
        ..InputConfig::default()
    };

    let resolve_log = Rc::clone(&log);
    let mut manager = InputManager::from_config(&config, |binding| {
        if binding.action == "no_such_action" {
            return None;
        }
        Some(Box::new(recorder(&resolve_log, &binding.action)) as BoxedCommand)
    });
    assert!(manager.shortcuts().contains("copy"));
    assert!(manager.shortcuts().contains("paste"));
    assert!(!manager.shortcuts().contains("mystery"));

    // C alone lands on the command-less prefix node.
    assert!(!manager.simulate_key_press(Key::C));
    manager.key_down(Key::LeftControl);
    assert!(manager.key_down(Key::V));
    assert_eq!(taken(&log), vec!["paste"]);
}
