//! Application layer: facades over the customer directory and the reservation
//! store, configuration, input helpers and test-data seeding.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod resources;
pub mod seed;

pub use app::HotelApp;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use resources::{AdminResource, HotelResource, RoomSearch};

/// Counts printed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub customers: usize,
    pub rooms: usize,
    pub free_rooms_today: usize,
    pub reservations: usize,
}

/// Build the application, optionally seed it, and write a JSON summary
/// followed by the reservation listing.
pub fn run<W: Write>(config: &AppConfig, today: NaiveDate, out: &mut W) -> AppResult<HotelApp> {
    let app = HotelApp::new(config);

    if config.seed_test_data {
        seed::populate_test_data(&app, today);
    } else {
        tracing::info!("starting with empty stores; set {} to populate mock data", config::SEED_TEST_DATA_VAR);
    }

    let summary = Summary {
        customers: app.admin().get_all_customers().len(),
        rooms: app.admin().get_all_rooms().len(),
        free_rooms_today: app.hotel().find_rooms(today, today).len(),
        reservations: app.store().list_all_reservations().map_or(0, |r| r.len()),
    };

    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    app.admin().display_all_reservations(out)?;
    Ok(app)
}
