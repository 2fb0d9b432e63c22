//! Staff-facing facade for room setup and listings.

use std::io;
use std::sync::Arc;

use hotelres_core::DomainResult;
use hotelres_customers::{Customer, CustomerDirectory};
use hotelres_rooms::{ReservationStore, Room};

/// Staff-facing operations.
#[derive(Debug, Clone)]
pub struct AdminResource {
    customers: Arc<CustomerDirectory>,
    store: Arc<ReservationStore>,
}

impl AdminResource {
    pub fn new(customers: Arc<CustomerDirectory>, store: Arc<ReservationStore>) -> Self {
        Self { customers, store }
    }

    pub fn get_customer(&self, email: &str) -> Option<Arc<Customer>> {
        self.customers.get_customer(email)
    }

    pub fn add_room(&self, room: Room) -> DomainResult<Arc<Room>> {
        self.store.add_room(room)
    }

    /// Add every room whose number is not taken yet; duplicates are skipped.
    ///
    /// Returns the rooms that were actually added, in input order.
    pub fn add_rooms(&self, rooms: impl IntoIterator<Item = Room>) -> Vec<Arc<Room>> {
        rooms
            .into_iter()
            .filter_map(|room| match self.store.add_room(room) {
                Ok(added) => Some(added),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping room");
                    None
                }
            })
            .collect()
    }

    pub fn get_all_rooms(&self) -> Vec<Arc<Room>> {
        self.store.get_all_rooms()
    }

    pub fn get_all_customers(&self) -> Vec<Arc<Customer>> {
        self.customers.get_all_customers()
    }

    pub fn display_all_reservations<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.store.print_all_reservations(out)
    }
}
