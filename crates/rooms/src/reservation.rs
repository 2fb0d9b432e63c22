//! Reservation entity binding a customer to a room for an inclusive stay.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use hotelres_core::{DateRange, DomainResult};
use hotelres_customers::Customer;

use crate::room::Room;

/// A booking of one room by one customer for an inclusive stay.
///
/// Equality is by the full `(customer, room, check-in, check-out)` tuple, with
/// customer and room compared by their keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reservation {
    customer: Arc<Customer>,
    room: Arc<Room>,
    stay: DateRange,
}

impl Reservation {
    /// Fails with `InvalidArgument` when `check_in` is after `check_out`.
    pub fn new(
        customer: Arc<Customer>,
        room: Arc<Room>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Self> {
        Ok(Self {
            customer,
            room,
            stay: DateRange::new(check_in, check_out)?,
        })
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn room(&self) -> &Arc<Room> {
        &self.room
    }

    pub fn stay(&self) -> DateRange {
        self.stay
    }

    pub fn check_in(&self) -> NaiveDate {
        self.stay.check_in()
    }

    pub fn check_out(&self) -> NaiveDate {
        self.stay.check_out()
    }
}

impl core::fmt::Display for Reservation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reservation: {} - {} [{}]", self.customer, self.room, self.stay)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::room::RoomType;
    use hotelres_core::DomainError;
    use proptest::prelude::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_customer() -> Arc<Customer> {
        Arc::new(Customer::new("Zechariah", "O'Lunney", "zolunney2@unc.edu").unwrap())
    }

    fn test_room() -> Arc<Room> {
        Arc::new(Room::new("101", 99.5, RoomType::Single).unwrap())
    }

    #[test]
    fn reservation_shares_customer_and_room() {
        let customer = test_customer();
        let room = test_room();
        let reservation =
            Reservation::new(Arc::clone(&customer), Arc::clone(&room), day("2024-01-01"), day("2024-01-05")).unwrap();

        assert!(Arc::ptr_eq(reservation.customer(), &customer));
        assert!(Arc::ptr_eq(reservation.room(), &room));
        assert_eq!(reservation.check_in(), day("2024-01-01"));
        assert_eq!(reservation.check_out(), day("2024-01-05"));
    }

    #[test]
    fn equal_tuples_are_equal_reservations() {
        let a = Reservation::new(test_customer(), test_room(), day("2024-01-01"), day("2024-01-05")).unwrap();
        let b = Reservation::new(test_customer(), test_room(), day("2024-01-01"), day("2024-01-05")).unwrap();
        let c = Reservation::new(test_customer(), test_room(), day("2024-01-01"), day("2024-01-06")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_renders_customer_room_and_stay() {
        let reservation = Reservation::new(test_customer(), test_room(), day("2024-01-01"), day("2024-01-05")).unwrap();
        assert_eq!(
            reservation.to_string(),
            "Reservation: Zechariah O'Lunney <zolunney2@unc.edu> - Room 101 - Single - $99.5 [2024-01-01 to 2024-01-05]"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: a check-in after the check-out always fails with InvalidArgument.
        #[test]
        fn inverted_stay_is_invalid(start in 0i64..3_000, gap in 1i64..400) {
            let check_out = day("2020-01-01") + chrono::Duration::days(start);
            let check_in = check_out + chrono::Duration::days(gap);

            let result = Reservation::new(test_customer(), test_room(), check_in, check_out);
            prop_assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        }
    }
}
