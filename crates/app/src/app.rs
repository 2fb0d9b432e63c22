//! Application wiring: one directory and one store, shared by both facades.

use std::sync::Arc;

use hotelres_customers::CustomerDirectory;
use hotelres_rooms::ReservationStore;

use crate::config::AppConfig;
use crate::resources::{AdminResource, HotelResource};

/// Owns the single customer directory and reservation store of a process and
/// hands them to the facades.
#[derive(Debug, Clone)]
pub struct HotelApp {
    customers: Arc<CustomerDirectory>,
    store: Arc<ReservationStore>,
    hotel: HotelResource,
    admin: AdminResource,
}

impl HotelApp {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_stores(
            Arc::new(CustomerDirectory::new()),
            Arc::new(ReservationStore::new()),
            config,
        )
    }

    /// Build around existing stores (tests share them across facades).
    pub fn with_stores(customers: Arc<CustomerDirectory>, store: Arc<ReservationStore>, config: &AppConfig) -> Self {
        let hotel = HotelResource::new(
            Arc::clone(&customers),
            Arc::clone(&store),
            config.recommendation_days,
        );
        let admin = AdminResource::new(Arc::clone(&customers), Arc::clone(&store));

        Self {
            customers,
            store,
            hotel,
            admin,
        }
    }

    pub fn hotel(&self) -> &HotelResource {
        &self.hotel
    }

    pub fn admin(&self) -> &AdminResource {
        &self.admin
    }

    pub fn customers(&self) -> &Arc<CustomerDirectory> {
        &self.customers
    }

    pub fn store(&self) -> &Arc<ReservationStore> {
        &self.store
    }
}
