//! Keyboard shortcut handling

use crate::state::EditorState;

/// Handle keyboard shortcuts for the editor
pub fn handle_keyboard(ctx: &egui::Context, editor: &mut EditorState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+Z: undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            editor.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y: redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            editor.redo();
        }
        // Escape: drop the pending wall or drag, then the selection
        if i.key_pressed(egui::Key::Escape) {
            editor.cancel();
        }
        if i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace) {
            editor.delete_selected();
        }
        // R: rotate selected furniture by one step
        if i.key_pressed(egui::Key::R) && !i.modifiers.command {
            editor.rotate_selected();
        }
    });
}
