//! chromify-server: mock colorization backend.
//!
//! Stands in for the real inference service during development. It
//! accepts the same multipart upload the production API would, waits an
//! artificial processing delay, and echoes the image back unchanged.
//! No model, no persistence, no authentication.

pub mod server;
