//! Typed navigation stack for immediate-mode UIs.
//!
//! [`NavigationManager`] owns an ordered stack of [`Destination`]s and
//! notifies subscribers on every change. [`view::NavigationContainer`]
//! binds it to an egui frame.

pub mod config;
pub mod destination;
pub mod layout;
pub mod logging;
pub mod message;
pub mod state;
pub mod style;
pub mod view;

pub use destination::Destination;
pub use message::NavRequest;
pub use state::{NavigationManager, SubscriptionId};
