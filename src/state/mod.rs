// State management module.
// Per-view state for the gallery and the admin studio.

pub mod gallery;
pub mod studio;

pub use gallery::GalleryState;
pub use studio::{AdminSession, StudioState, UploadField};
