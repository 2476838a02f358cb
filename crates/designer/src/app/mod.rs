//! Main application module

mod keyboard;

use crate::canvas::PlanCanvas;
use crate::state::{AppSettings, EditorState};
use crate::ui::{properties, scene_preview, status_bar, tool_panel};

/// Main application
pub struct RoomApp {
    editor: EditorState,
    canvas: PlanCanvas,
    /// Settings as last written to disk (to detect changes)
    saved_settings: AppSettings,
}

impl RoomApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();
        tracing::info!(
            snap = settings.grid.snap_size,
            history = settings.history.max_entries,
            "Starting room planner"
        );

        Self {
            editor: EditorState::new(settings.clone()),
            canvas: PlanCanvas::default(),
            saved_settings: settings,
        }
    }

    fn persist_settings(&mut self) {
        if self.editor.settings == self.saved_settings {
            return;
        }
        match self.editor.settings.save() {
            Ok(()) => tracing::debug!("Settings saved"),
            Err(e) => tracing::warn!("Failed to save settings: {e}"),
        }
        self.saved_settings = self.editor.settings.clone();
    }
}

impl eframe::App for RoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.editor);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                tool_panel::show(ui, &mut self.editor);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.editor, self.canvas.hover);
            });

        // ── Right panel: properties + 3D preview ─────────────
        egui::SidePanel::right("right_panel")
            .default_width(300.0)
            .width_range(220.0..=480.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("props_scroll")
                    .max_height(ui.available_height() * 0.55)
                    .show(ui, |ui| {
                        properties::show(ui, &mut self.editor);
                    });
                ui.separator();
                scene_preview::show(ui, &mut self.editor);
            });

        // ── Central panel: floor plan ────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.editor);
            });

        self.persist_settings();
    }
}
