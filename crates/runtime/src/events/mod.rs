//! Change notifications for display widgets.
//!
//! Events are published to a kind, and consumers subscribe only to the kinds
//! they render. Delivery is synchronous and single-threaded.

mod bus;
mod types;

pub use bus::{EventBus, SubscriptionHandle};
pub use types::{Event, EventKind};
