pub mod properties;
pub mod scene_preview;
pub mod status_bar;
pub mod tool_panel;

use egui::Ui;

/// `#RRGGBB` to sRGB bytes; unparsable strings become mid gray
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let c = crate::canvas::parse_color(hex);
    [c.r(), c.g(), c.b()]
}

pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Color button bound to a hex string. Returns the new hex when the user changed it.
pub fn hex_color_edit(ui: &mut Ui, label: &str, hex: &str) -> Option<String> {
    let mut rgb = hex_to_rgb(hex);
    let mut changed = None;
    ui.horizontal(|ui| {
        ui.label(label);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            changed = Some(rgb_to_hex(rgb));
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        assert_eq!(hex_to_rgb("#8b4513"), [0x8b, 0x45, 0x13]);
        assert_eq!(rgb_to_hex([0x8b, 0x45, 0x13]), "#8b4513");
        assert_eq!(hex_to_rgb("not a color"), [160, 160, 160]);
    }
}
