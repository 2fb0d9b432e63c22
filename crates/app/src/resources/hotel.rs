//! Guest-facing facade over the customer directory and reservation store.

use std::sync::Arc;

use chrono::NaiveDate;

use hotelres_core::{DateRange, DomainError, DomainResult};
use hotelres_customers::{Customer, CustomerDirectory};
use hotelres_rooms::{Reservation, ReservationStore, Room};

/// Outcome of a guest's room search.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomSearch {
    /// Rooms free for the requested stay.
    Available { stay: DateRange, rooms: Vec<Arc<Room>> },
    /// Nothing was free for the requested stay; these rooms are free for the
    /// same stay moved later.
    Recommended { stay: DateRange, rooms: Vec<Arc<Room>> },
    /// Nothing free for either stay.
    Unavailable,
}

impl RoomSearch {
    pub fn rooms(&self) -> &[Arc<Room>] {
        match self {
            RoomSearch::Available { rooms, .. } | RoomSearch::Recommended { rooms, .. } => rooms,
            RoomSearch::Unavailable => &[],
        }
    }
}

/// Guest-facing operations.
#[derive(Debug, Clone)]
pub struct HotelResource {
    customers: Arc<CustomerDirectory>,
    store: Arc<ReservationStore>,
    recommendation_days: u64,
}

impl HotelResource {
    pub fn new(customers: Arc<CustomerDirectory>, store: Arc<ReservationStore>, recommendation_days: u64) -> Self {
        Self {
            customers,
            store,
            recommendation_days,
        }
    }

    pub fn get_customer(&self, email: &str) -> Option<Arc<Customer>> {
        self.customers.get_customer(email)
    }

    pub fn create_a_customer(&self, email: &str, first_name: &str, last_name: &str) -> DomainResult<Arc<Customer>> {
        self.customers.add_customer(first_name, last_name, email)
    }

    pub fn get_room(&self, room_number: &str) -> Option<Arc<Room>> {
        self.store.get_room(room_number)
    }

    /// Resolve the customer by email, then book.
    ///
    /// The lookup and the booking are two separate steps against two stores.
    pub fn book_a_room(
        &self,
        email: &str,
        room: Arc<Room>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Arc<Reservation>> {
        let customer = self.customer_or_not_found(email)?;
        self.store.reserve_a_room(customer, room, check_in, check_out)
    }

    pub fn get_customer_reservations(&self, email: &str) -> DomainResult<Vec<Arc<Reservation>>> {
        let customer = self.customer_or_not_found(email)?;
        Ok(self.store.get_customer_reservations(&customer))
    }

    pub fn find_rooms(&self, check_in: NaiveDate, check_out: NaiveDate) -> Vec<Arc<Room>> {
        self.store.find_rooms(check_in, check_out)
    }

    /// Search the requested stay, falling back to the same stay pushed
    /// `recommendation_days` later when nothing is free.
    pub fn find_recommended_rooms(&self, check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<RoomSearch> {
        let stay = DateRange::new(check_in, check_out)?;

        let rooms = self.find_rooms(stay.check_in(), stay.check_out());
        if !rooms.is_empty() {
            return Ok(RoomSearch::Available { stay, rooms });
        }

        let Some(later) = stay.shifted_by_days(self.recommendation_days) else {
            return Ok(RoomSearch::Unavailable);
        };
        let rooms = self.find_rooms(later.check_in(), later.check_out());
        if rooms.is_empty() {
            return Ok(RoomSearch::Unavailable);
        }

        tracing::info!(requested = %stay, recommended = %later, rooms = rooms.len(), "recommending later stay");
        Ok(RoomSearch::Recommended { stay: later, rooms })
    }

    fn customer_or_not_found(&self, email: &str) -> DomainResult<Arc<Customer>> {
        self.get_customer(email)
            .ok_or_else(|| DomainError::customer_not_found(email))
    }
}
