//! Customers domain module.
//!
//! Holds the `Customer` entity and the directory that keeps customers unique by
//! email. No IO; the directory is an in-memory service object.

pub mod customer;
pub mod directory;

pub use customer::Customer;
pub use directory::CustomerDirectory;
