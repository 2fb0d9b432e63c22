//! Deterministic mock data for demos and manual testing.

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use hotelres_rooms::{Reservation, Room, RoomType};

use crate::app::HotelApp;

const MOCK_CUSTOMERS: [(&str, &str, &str); 15] = [
    ("Amberly", "Atmore", "aatmore0@gizmodo.com"),
    ("Willa", "Kyllford", "wkyllford1@merriam-webster.com"),
    ("Zechariah", "O'Lunney", "zolunney2@unc.edu"),
    ("Pace", "Buttwell", "pbuttwell3@tiny.cc"),
    ("Loralee", "Inett", "linett4@yolasite.com"),
    ("Emiline", "Boteman", "eboteman0@netvibes.com"),
    ("Aristotle", "Helder", "ahelder1@businessinsider.com"),
    ("Lyle", "Worge", "lworge2@histats.com"),
    ("Costanza", "Cunniam", "ccunniam3@pcworld.com"),
    ("Ardene", "Loft", "aloft4@desdev.cn"),
    ("Joann", "Strotone", "jstrotone5@wp.com"),
    ("Gabbie", "Dannell", "gdannell6@wix.com"),
    ("Vyky", "Reye", "vreye7@tinyurl.com"),
    ("Stacee", "Mutter", "smutter8@auda.org.au"),
    ("Karil", "Rumgay", "krumgay9@blog.com"),
];

pub const FLOORS: u32 = 5;
pub const ROOMS_PER_FLOOR: u32 = 12;
pub const RESERVATIONS_TO_BOOK: usize = 32;
const MAX_BOOKING_ATTEMPTS: usize = 256;
/// Bookings start up to this many days either side of the anchor date.
const DATE_SPREAD_DAYS: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub customers_added: usize,
    pub rooms_added: usize,
    pub reservations: Vec<Arc<Reservation>>,
}

/// Mock rooms `101..=512`: every third room free, others priced below $256.
pub fn mock_rooms() -> Vec<Room> {
    (1..=FLOORS)
        .flat_map(|floor| (1..=ROOMS_PER_FLOOR).map(move |index| (floor, index)))
        .filter_map(|(floor, index)| {
            let number = format!("{floor}{index:02}");
            let room_type = if index % 2 == 0 { RoomType::Double } else { RoomType::Single };
            if (floor + index) % 3 == 0 {
                return Some(Room::free(number, room_type));
            }
            let cents = (floor * 1_009 + index * 1_373) % 25_600;
            Room::new(number, f64::from(cents) / 100.0, room_type).ok()
        })
        .collect()
}

/// Register mock customers and rooms, then book stays around `anchor`.
///
/// Existing customers and rooms are skipped, and booking conflicts are
/// silently retried with the next candidate, so seeding twice is harmless.
pub fn populate_test_data(app: &HotelApp, anchor: NaiveDate) -> SeedReport {
    let mut report = SeedReport::default();

    for (first_name, last_name, email) in MOCK_CUSTOMERS {
        match app.hotel().create_a_customer(email, first_name, last_name) {
            Ok(_) => report.customers_added += 1,
            Err(e) => tracing::debug!(%email, error = %e, "skipping mock customer"),
        }
    }

    let rooms = mock_rooms();
    report.rooms_added = app.admin().add_rooms(rooms.iter().cloned()).len();

    for attempt in 0..MAX_BOOKING_ATTEMPTS {
        if report.reservations.len() >= RESERVATIONS_TO_BOOK {
            break;
        }

        let (_, _, email) = MOCK_CUSTOMERS[attempt * 7 % MOCK_CUSTOMERS.len()];
        let Some(room) = app.hotel().get_room(rooms[attempt * 13 % rooms.len()].number().as_str()) else {
            continue;
        };
        let Some((check_in, check_out)) = mock_stay(anchor, attempt) else {
            continue;
        };

        match app.hotel().book_a_room(email, room, check_in, check_out) {
            Ok(reservation) => report.reservations.push(reservation),
            Err(e) if e.is_conflict() => continue,
            Err(e) => tracing::warn!(error = %e, "unexpected failure while seeding"),
        }
    }

    tracing::info!(
        customers = report.customers_added,
        rooms = report.rooms_added,
        reservations = report.reservations.len(),
        "test data populated"
    );
    report
}

fn mock_stay(anchor: NaiveDate, attempt: usize) -> Option<(NaiveDate, NaiveDate)> {
    let spread = 2 * DATE_SPREAD_DAYS;
    let offset = (attempt as u64 * 5) % spread;
    let start = anchor
        .checked_sub_days(Days::new(DATE_SPREAD_DAYS))?
        .checked_add_days(Days::new(offset))?;
    let end = start.checked_add_days(Days::new(attempt as u64 % 6))?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn mock_rooms_cover_every_floor() {
        let rooms = mock_rooms();
        assert_eq!(rooms.len(), 60);
        assert_eq!(rooms[0].number().as_str(), "101");
        assert_eq!(rooms[59].number().as_str(), "512");
        assert!(rooms.iter().any(Room::is_free));
        assert!(rooms.iter().all(|r| r.price() < 256.0));
    }

    #[test]
    fn seeding_populates_every_store() {
        let app = HotelApp::new(&AppConfig::default());
        let report = populate_test_data(&app, anchor());

        assert_eq!(report.customers_added, 15);
        assert_eq!(report.rooms_added, 60);
        assert_eq!(report.reservations.len(), RESERVATIONS_TO_BOOK);
        assert_eq!(app.admin().get_all_customers().len(), 15);
        assert_eq!(app.store().list_all_reservations().unwrap().len(), RESERVATIONS_TO_BOOK);
    }

    #[test]
    fn seeding_skips_rooms_that_are_already_booked() {
        let app = HotelApp::new(&AppConfig::default());
        app.hotel().create_a_customer("early@hotel.com", "Early", "Bird").unwrap();
        let room = app.admin().add_room(mock_rooms().remove(0)).unwrap();
        app.hotel()
            .book_a_room(
                "early@hotel.com",
                room,
                anchor().checked_sub_days(Days::new(60)).unwrap(),
                anchor().checked_add_days(Days::new(60)).unwrap(),
            )
            .unwrap();

        let report = populate_test_data(&app, anchor());

        assert_eq!(report.rooms_added, 59);
        assert_eq!(report.reservations.len(), RESERVATIONS_TO_BOOK);
        assert!(report.reservations.iter().all(|r| r.room().number().as_str() != "101"));
    }

    #[test]
    fn reseeding_adds_nothing_new_but_keeps_invariants() {
        let app = HotelApp::new(&AppConfig::default());
        populate_test_data(&app, anchor());
        let second = populate_test_data(&app, anchor());

        assert_eq!(second.customers_added, 0);
        assert_eq!(second.rooms_added, 0);

        let all = app.store().list_all_reservations().unwrap();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(a.room() != b.room() || !a.stay().overlaps(&b.stay()));
            }
        }
    }
}
