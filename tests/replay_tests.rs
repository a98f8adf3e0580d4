//! Replays synthetic input against the default binding set.

use arkana::InputConfig;
use arkana::cli::replay_lines;
use arkana::replay::{ReplayEvent, Replayer, dump};

fn events(list: &[&str]) -> Vec<ReplayEvent> {
    list.iter().map(|e| e.parse().unwrap()).collect()
}

fn replay(list: &[&str]) -> Vec<String> {
    replay_lines(&InputConfig::default(), &events(list))
}

#[test]
fn test_every_default_binding_registers() {
    let config = InputConfig::default();
    let replayer = Replayer::new(&config);
    assert_eq!(replayer.registered(), config.shortcuts.len());
}

#[test]
fn test_camera_chain_follows_held_modifiers() {
    let lines = replay(&[
        "press:ArrowUp",
        "down:Ctrl",
        "press:ArrowUp",
        "down:Shift",
        "press:ArrowUp",
        "up:Ctrl",
        "press:ArrowUp",
    ]);
    assert_eq!(
        lines,
        vec![
            "press:ArrowUp: cam/up (camera_move_up)",
            "down:LeftControl: -",
            "press:ArrowUp: cam/up/rot (camera_rotate_up)",
            "down:LeftShift: -",
            "press:ArrowUp: cam/up/rot/slow (camera_rotate_up_slow)",
            "up:LeftControl: -",
            "press:ArrowUp: cam/up/slow (camera_move_up_slow)",
        ]
    );
}

#[test]
fn test_clipboard_prefix_node_does_nothing_alone() {
    let lines = replay(&["press:C", "down:RightControl", "press:C", "up:RightControl"]);
    assert_eq!(lines[0], "press:C: -");
    assert_eq!(lines[2], "press:C: Copy by Ctrl+c (copy)");

    let lines = replay(&["down:Shift", "press:Insert"]);
    assert_eq!(lines[1], "press:Insert: Paste by Shift+Ins (paste)");
}

#[test]
fn test_script_console_fires_on_release() {
    let lines = replay(&["down:F9", "up:F9"]);
    assert_eq!(
        lines,
        vec!["down:F9: -", "up:F9: Script Console (open_script_console)"]
    );
}

#[test]
fn test_any_button_stops_tabbing() {
    let lines = replay(&["press:Tab", "click:RMB"]);
    assert_eq!(
        lines,
        vec![
            "press:Tab: Happily tabbing (tab_navigation)",
            "click:RightButton: Happily Stop tabbing (tab_navigation_stop)",
        ]
    );
}

#[test]
fn test_scroll_without_bindings() {
    assert_eq!(replay(&["scroll:WheelUp"]), vec!["scroll:WheelUp: -"]);
}

#[test]
fn test_dump_lists_camera_tree() {
    let text = dump(&InputConfig::default());
    assert!(text.contains("cam/up [up] on press"));
    assert!(text.contains("    cam/up/rot/slow [left or right Shift key] on press"));
    assert!(text.contains("Script Console [function 9] on release"));
    assert!(!text.contains("(detached)"));
}
