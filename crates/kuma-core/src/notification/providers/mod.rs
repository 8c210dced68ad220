//! Provider detail schemas. Field names follow the server's wire casing.

mod chat;
mod email;
mod incident;
mod push;
mod sms;
mod webhook;

pub use chat::*;
pub use email::*;
pub use incident::*;
pub use push::*;
pub use sms::*;
pub use webhook::*;
