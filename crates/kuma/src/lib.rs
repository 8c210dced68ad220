//! Typed Rust data model for the Uptime Kuma monitoring server.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use kuma::{Envelope, Notification, TypedNotification};
//! use kuma::notification::Slack;
//!
//! fn main() -> kuma::Result<()> {
//!     // Build a Slack notification and produce the server wire format
//!     let slack = Slack {
//!         webhook_url: Some("https://hooks.slack.com/services/xxx".into()),
//!         ..Slack::default()
//!     };
//!     let typed = TypedNotification::new(Envelope::new("My Slack Alert"), slack);
//!     let bytes = typed.encode()?;
//!
//!     // Decode without knowing the provider up front
//!     let any = Notification::decode(&bytes)?;
//!     println!("{any}");
//!
//!     Ok(())
//! }
//! ```

pub use kuma_core::*;

/// Commonly used items in one import.
pub mod prelude {
    pub use kuma_core::notification::Provider;
    pub use kuma_core::{
        Details, Envelope, GenericDetails, KumaError, Notification, Result, TypedNotification,
    };
}

pub use serde;
pub use serde_json;
