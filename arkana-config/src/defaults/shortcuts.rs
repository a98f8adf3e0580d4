//! Default shortcut set used by the menus.

use crate::types::ShortcutBinding;

/// Camera trees for one movement key: plain move, `Ctrl` rotate, `Shift`
/// slow move and `Ctrl+Shift` slow rotate.
fn camera(dir: &str, key: &str) -> [ShortcutBinding; 4] {
    [
        ShortcutBinding::new(&format!("cam/{dir}"), key, &format!("camera_move_{dir}")),
        ShortcutBinding::new(
            &format!("cam/{dir}/rot"),
            &format!("Ctrl+{key}"),
            &format!("camera_rotate_{dir}"),
        ),
        ShortcutBinding::new(
            &format!("cam/{dir}/slow"),
            &format!("Shift+{key}"),
            &format!("camera_move_{dir}_slow"),
        ),
        ShortcutBinding::new(
            &format!("cam/{dir}/rot/slow"),
            &format!("Ctrl+Shift+{key}"),
            &format!("camera_rotate_{dir}_slow"),
        ),
    ]
}

pub fn shortcuts() -> Vec<ShortcutBinding> {
    let mut bindings = Vec::new();

    // Widget navigation. Must stay ahead of the camera block: the root
    // registered last answers a bare key and adopts its modifier chains.
    for (name, keys, action) in [
        ("pushActiveButton", "Space", "push_active_button"),
        ("toggleActiveCheckbox", "Space", "toggle_active_checkbox"),
        ("selectActiveRadiobtn", "Space", "select_active_radiobutton"),
        ("comboboxDown", "ArrowDown", "combobox_next"),
        ("comboboxUp", "ArrowUp", "combobox_prev"),
        ("listboxDown", "ArrowDown", "listbox_next"),
        ("listboxUp", "ArrowUp", "listbox_prev"),
        ("SpinnerDown", "ArrowDown", "spinner_down"),
        ("SpinnerUp", "ArrowUp", "spinner_up"),
        ("SpinnerMinus", "Minus", "spinner_down"),
        ("SpinnerPlus", "Add", "spinner_up"),
        ("ScrollbarVUp", "ArrowUp", "scrollbar_vertical_up"),
        ("ScrollbarVDown", "ArrowDown", "scrollbar_vertical_down"),
        ("ScrollbarHDown", "ArrowDown", "scrollbar_horizontal_back"),
        ("ScrollbarHUp", "ArrowUp", "scrollbar_horizontal_forward"),
        ("ScrollbarHRight", "ArrowRight", "scrollbar_horizontal_forward"),
        ("ScrollbarHLeft", "ArrowLeft", "scrollbar_horizontal_back"),
        ("ScrollbarVPgUp", "PageUp", "scrollbar_vertical_page_up"),
        ("ScrollbarVPgDown", "PageDown", "scrollbar_vertical_page_down"),
        ("ScrollbarHPgUp", "PageUp", "scrollbar_horizontal_page_forward"),
        ("ScrollbarHPgDown", "PageDown", "scrollbar_horizontal_page_back"),
        ("ScrollbarHPlus", "Add", "scrollbar_horizontal_forward"),
        ("ScrollbarHMinus", "Minus", "scrollbar_horizontal_back"),
        ("Happily tabbing", "Tab", "tab_navigation"),
        ("Happily Stop tabbing", "AnyButton", "tab_navigation_stop"),
    ] {
        bindings.push(ShortcutBinding::new(name, keys, action));
    }

    // Camera
    for (dir, key) in [
        ("up", "ArrowUp"),
        ("down", "ArrowDown"),
        ("left", "ArrowLeft"),
        ("right", "ArrowRight"),
        ("pgup", "PageUp"),
        ("pgdown", "PageDown"),
    ] {
        bindings.extend(camera(dir, key));
    }
    bindings.push(ShortcutBinding::new("cam/home", "1", "camera_home"));
    bindings.push(ShortcutBinding::new("cam/lookatzero", "2", "camera_look_at_zero"));

    // Display
    bindings.push(ShortcutBinding::new("polygonmode", "F11", "next_polygon_mode"));
    bindings.push(ShortcutBinding::new("nextGuiInfo", "F12", "next_gui_info"));

    // Clipboard
    for (name, keys, action) in [
        ("Copy by Ctrl+c", "Ctrl+C", "copy"),
        ("Copy by Ctrl+Ins", "Ctrl+Insert", "copy"),
        ("Cut by Ctrl+x", "Ctrl+X", "cut"),
        ("Paste by Ctrl+v", "Ctrl+V", "paste"),
        ("Paste by Shift+Ins", "Shift+Insert", "paste"),
    ] {
        bindings.push(ShortcutBinding::new(name, keys, action));
    }

    bindings.push(ShortcutBinding::new("Script Console", "F9", "open_script_console").released());

    bindings
}
