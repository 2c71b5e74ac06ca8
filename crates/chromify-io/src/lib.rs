//! chromify-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, Blob-URL lifecycle, the colorize HTTP call,
//! file downloads, and provides the upload and comparison components
//! for the chromify web application.

pub mod blob;
pub mod colorize;
pub mod components;
pub mod download;

pub use blob::BlobUrl;
pub use colorize::colorize;
pub use components::{Comparison, ImageUploader};
