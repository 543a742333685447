//! Notification protocol between the engine and its observers.
//!
//! ## Key Types
//!
//! - `GameEvent`: One value per kind of state change
//! - `GameObserver`: Callback trait with no-op defaults
//! - `Observers`: Ordered registry the engine publishes through
//! - `EventRecorder`: Observer that records everything

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventRecorder, GameObserver, Observers};
