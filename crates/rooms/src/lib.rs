//! Rooms and reservations domain module.
//!
//! This crate owns the availability engine: the room set, the append-only
//! reservation sequence, the availability search and conflict-checked booking.

pub mod reservation;
pub mod room;
pub mod store;

pub use reservation::Reservation;
pub use room::{Room, RoomType};
pub use store::ReservationStore;
