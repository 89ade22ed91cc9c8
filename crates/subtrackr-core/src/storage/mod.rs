//! Subscription records and the persistence port that holds them.

mod memory;
mod sqlite;
mod traits;
mod types;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{KeyValueStore, SUBSCRIPTIONS_KEY};
pub use types::{BillingCycle, Category, Cost, Subscription, SubscriptionId, SubscriptionInput};
