//! In-memory room and reservation store.
//!
//! The store is the single source of truth for booking conflicts. Rooms and
//! reservations live behind one `RwLock`, so the overlap check and the append
//! in [`ReservationStore::reserve_a_room`] happen under the same write guard.
//! Readers take the read guard and never see a half-finished booking.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use hotelres_core::{DomainError, DomainResult, RoomNumber};
use hotelres_customers::Customer;

use crate::reservation::Reservation;
use crate::room::Room;

#[derive(Debug, Default)]
struct StoreState {
    rooms: HashMap<RoomNumber, Arc<Room>>,
    /// Append-only, in booking order.
    reservations: Vec<Arc<Reservation>>,
}

impl StoreState {
    fn is_room_reserved(&self, room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.reservations
            .iter()
            .any(|r| Arc::as_ref(r.room()) == room && r.stay().overlaps_dates(check_in, check_out))
    }
}

/// Room set plus append-only reservation sequence.
///
/// One instance per application; share it through `Arc`.
#[derive(Debug, Default)]
pub struct ReservationStore {
    inner: RwLock<StoreState>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room. Fails with `RoomAlreadyExists` if the room number is taken,
    /// regardless of price or type.
    pub fn add_room(&self, room: impl Into<Arc<Room>>) -> DomainResult<Arc<Room>> {
        let room = room.into();

        let mut state = self.write();
        if state.rooms.contains_key(room.number()) {
            tracing::warn!(room = %room.number(), "room already exists");
            return Err(DomainError::room_already_exists(room.number().as_str()));
        }

        state.rooms.insert(room.number().clone(), Arc::clone(&room));
        tracing::info!(room = %room.number(), price = room.price(), room_type = %room.room_type(), "room added");
        Ok(room)
    }

    pub fn get_room(&self, room_number: &str) -> Option<Arc<Room>> {
        self.read().rooms.get(room_number).cloned()
    }

    /// Snapshot of every room, in no particular order.
    pub fn get_all_rooms(&self) -> Vec<Arc<Room>> {
        self.read().rooms.values().cloned().collect()
    }

    /// Rooms with no reservation overlapping `[check_in, check_out]`.
    ///
    /// The date order is not re-validated here; callers pass an ordered range.
    pub fn find_rooms(&self, check_in: NaiveDate, check_out: NaiveDate) -> Vec<Arc<Room>> {
        let state = self.read();
        let available: Vec<_> = state
            .rooms
            .values()
            .filter(|room| !state.is_room_reserved(room, check_in, check_out))
            .cloned()
            .collect();

        tracing::debug!(%check_in, %check_out, available = available.len(), "room search");
        available
    }

    /// Book `room` for `customer` over `[check_in, check_out]`.
    ///
    /// Fails with `RoomAlreadyReserved` when any reservation of the same room
    /// overlaps the requested stay (a shared endpoint day counts), and with
    /// `InvalidArgument` when `check_in` is after `check_out`. On failure the
    /// reservation sequence is unchanged.
    pub fn reserve_a_room(
        &self,
        customer: Arc<Customer>,
        room: Arc<Room>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Arc<Reservation>> {
        let mut state = self.write();

        if state.is_room_reserved(&room, check_in, check_out) {
            tracing::warn!(room = %room.number(), %check_in, %check_out, "room already reserved");
            return Err(DomainError::room_already_reserved(format!(
                "room {} is booked between {check_in} and {check_out}",
                room.number()
            )));
        }

        let reservation = Arc::new(Reservation::new(customer, room, check_in, check_out)?);
        state.reservations.push(Arc::clone(&reservation));

        tracing::info!(
            room = %reservation.room().number(),
            customer = %reservation.customer().email(),
            %check_in,
            %check_out,
            "room reserved"
        );
        Ok(reservation)
    }

    /// Reservations made by `customer` (matched by email), in booking order.
    pub fn get_customer_reservations(&self, customer: &Customer) -> Vec<Arc<Reservation>> {
        self.read()
            .reservations
            .iter()
            .filter(|r| Arc::as_ref(r.customer()) == customer)
            .cloned()
            .collect()
    }

    /// Every reservation in booking order, or `None` when nothing is booked yet.
    pub fn list_all_reservations(&self) -> Option<Vec<Arc<Reservation>>> {
        let state = self.read();
        if state.reservations.is_empty() {
            return None;
        }
        Some(state.reservations.clone())
    }

    /// Render the reservation listing as text.
    pub fn print_all_reservations<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(reservations) = self.list_all_reservations() else {
            return writeln!(out, "There are currently no reservations.");
        };

        writeln!(out, "Current reservations:")?;
        for reservation in &reservations {
            writeln!(out, "{reservation}")?;
        }
        Ok(())
    }

    // Writers mutate only after every check has passed, so a poisoned state is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
