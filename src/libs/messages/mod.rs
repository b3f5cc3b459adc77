//! User-facing text.
//!
//! All strings printed by the CLI are variants of [`Message`]; their wording
//! lives in one `Display` impl (see `display.rs`) and they are printed through
//! the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

