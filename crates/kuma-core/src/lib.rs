//! Core data model and wire codec for Uptime Kuma resources.
//!
//! This crate provides the typed representation of what an Uptime Kuma
//! server stores and returns:
//!
//! - **Notifications**: an [`Envelope`] of shared fields plus provider
//!   [`Details`] for every supported provider, decoded from the server's
//!   double-encoded `config` string
//! - **Types**: docker hosts, proxies, tags, maintenance windows, status
//!   pages and settings
//! - **Errors**: [`KumaError`], tagged with the wire [`Layer`] that failed
//!
//! # Example
//!
//! ```rust,ignore
//! use kuma_core::{Details, Notification, Result};
//!
//! fn describe(bytes: &[u8]) -> Result<()> {
//!     let notification = Notification::decode(bytes)?;
//!     if let Details::Slack(slack) = &notification.details {
//!         println!("slack hook: {:?}", slack.webhook_url);
//!     }
//!     println!("{notification}");
//!     Ok(())
//! }
//! ```

mod coerce;
mod error;
pub mod notification;
pub mod pretty;
pub mod types;

pub use error::{KumaError, Layer, Result};
pub use notification::{
    Details, Envelope, GenericDetails, Notification, Provider, TypedNotification, PROVIDER_TYPES,
};
pub use types::*;
