//! `hotelres-core` — shared domain kernel for the reservation engine.
//!
//! This crate contains **pure domain** primitives (no storage, no IO): the
//! error taxonomy, entity identity, key newtypes and the closed date interval
//! used to decide booking conflicts.

pub mod date_range;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use date_range::{DateRange, overlaps};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{Email, RoomNumber};
pub use value_object::ValueObject;
