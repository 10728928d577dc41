//! Topic-based event bus for runtime events.
//!
//! Every admission, eviction, release and dispatch cycle is published to a
//! topic. Observers subscribe only to the topics they need; publishing never
//! blocks and having no subscriber is normal.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DispatchEvent, SlotEvent};
