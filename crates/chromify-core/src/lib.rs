//! chromify-core: Pure colorization session logic (sans-IO).
//!
//! Models the upload-to-comparison flow as plain data: the intake
//! allow-list, the processing state machine with its staleness guard,
//! and the comparison widget's view mode and reveal position.
//!
//! This crate has **no I/O dependencies** -- it never touches the
//! network or the DOM. All browser interaction (Blob URLs, fetch,
//! file intake, rendering) lives in `chromify-io`.

pub mod media;
pub mod reveal;
pub mod session;
pub mod view;

pub use media::MediaType;
pub use reveal::RevealPosition;
pub use session::{Phase, Session, SessionError, Ticket, PROCESSING_ERROR_MESSAGE};
pub use view::{Direction, ViewMode};
