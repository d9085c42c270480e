//! Mortality Engine
//!
//! Turns ages into lifespan statistics: weeks lived and left, time shared
//! with relatives, and how pets' lifespans line up with the user's.

pub mod calculations;
pub mod components;
pub mod error;
pub mod ids;
pub mod store;
pub mod views;

pub use calculations::{FutureChildTime, PersonStats, PetStats, TimeRemaining};
pub use components::*;
pub use error::{MortalityError, Result};
pub use store::{MortalityStore, StoreEvent, SubscriptionId};
pub use views::StatsSnapshot;
