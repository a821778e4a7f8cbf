use crate::booking::model::Booking;
use crate::booking::store::BookingStore;
use crate::booking::store::in_memory::InMemoryBookingStore;
use crate::booking::store::test::TestFactory;
use std::sync::Arc;

pub struct InMemoryTestFactory;

impl TestFactory for InMemoryTestFactory {
	fn store() -> Arc<dyn BookingStore> {
		Arc::new(InMemoryBookingStore::default())
	}

	fn seeded_store(bookings: Vec<Booking>) -> Arc<dyn BookingStore> {
		Arc::new(InMemoryBookingStore::with_bookings(bookings))
	}
}
