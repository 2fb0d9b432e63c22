//! Facades translating guest and staff intents into store operations.
//!
//! Both resources hold shared handles to the same directory and store; they
//! add no state of their own.

pub mod admin;
pub mod hotel;

pub use admin::AdminResource;
pub use hotel::{HotelResource, RoomSearch};
