use crate::booking::error::BookingError;
use crate::booking::model::{Booking, BookingId, BookingUpdate, NewBooking};
use static_assertions::assert_obj_safe;

pub mod in_memory;


pub use in_memory::InMemoryBookingStore;

/// Sole authority over the booking collection.
///
/// Implementations must serialize all operations with respect to each other, so that readers
/// never observe a partially applied mutation.
pub trait BookingStore: Send + Sync + 'static {
	/// Appends a new booking with a freshly generated, unique id.
	///
	/// Fails with [`BookingError::InvalidInput`] if the room type or guest name is empty or
	/// whitespace-only. [`BookingStore::update`] does not apply this check and stores any value.
	fn create(&self, new_booking: NewBooking) -> Result<Booking, BookingError>;

	/// Snapshot of all bookings in insertion order.
	fn list(&self) -> Vec<Booking>;

	fn get(&self, id: &BookingId) -> Result<Booking, BookingError>;

	/// Replaces all mutable fields, including with empty values. The id is kept.
	fn update(&self, id: &BookingId, update: BookingUpdate) -> Result<Booking, BookingError>;

	/// Removes the booking with the given id. Succeeds even if there is none.
	fn delete(&self, id: &BookingId);
}

assert_obj_safe!(BookingStore);
