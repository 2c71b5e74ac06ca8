//! Dioxus UI components for chromify.
//!
//! Provides the drag-and-drop upload zone and the original/colorized
//! comparison widget with its three view modes.

mod comparison;
mod upload;

pub use comparison::Comparison;
pub use upload::ImageUploader;
