// Library crate: room engine exposed for integration tests and the JSON command interface.
// Presentation modules (app, ui, canvas) remain in the binary crate.

pub mod command;
pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod harness;
pub mod helpers;
pub mod state;

/// Projection and hit-testing shared by the 2D canvas, 3D scene and AR overlay.
pub mod viewport {
    pub mod picking;
    pub mod projector;
}
