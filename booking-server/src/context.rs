use crate::booking::store::{BookingStore, InMemoryBookingStore};
use crate::configuration::Configuration;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub booking_store: Arc<dyn BookingStore>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration) -> ApplicationContext {
		Self::with_booking_store(configuration, Arc::new(InMemoryBookingStore::default()))
	}

	pub fn with_booking_store(configuration: Configuration, booking_store: Arc<dyn BookingStore>) -> ApplicationContext {
		Self {
			configuration,
			booking_store,
		}
	}
}
