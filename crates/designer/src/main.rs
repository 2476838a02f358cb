mod app;
mod canvas;
mod ui;

// Re-export library modules so that `crate::state`, `crate::viewport`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use roomplan_lib::geometry;
pub use roomplan_lib::state;
pub use roomplan_lib::viewport;

use app::RoomApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomplan=info,roomplan_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Room Planner")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "roomplan",
        native_options,
        Box::new(|cc| Ok(Box::new(RoomApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
