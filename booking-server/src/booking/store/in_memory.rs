use crate::booking::error::BookingError;
use crate::booking::model::{Booking, BookingId, BookingUpdate, NewBooking};
use crate::booking::store::BookingStore;
use parking_lot::Mutex;

#[cfg(test)]
pub mod test_utils;

/// Keeps bookings in a `Vec` behind a single lock.
///
/// The collection is expected to stay small, so lookups are linear scans.
#[derive(Default)]
pub struct InMemoryBookingStore {
	bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingStore {
	#[cfg(test)]
	pub fn with_bookings(bookings: Vec<Booking>) -> Self {
		Self {
			bookings: Mutex::new(bookings),
		}
	}
}

impl BookingStore for InMemoryBookingStore {
	fn create(&self, new_booking: NewBooking) -> Result<Booking, BookingError> {
		if new_booking.room_type.trim().is_empty() {
			return Err(BookingError::InvalidInput("room type is required"));
		}

		if new_booking.guest_name.trim().is_empty() {
			return Err(BookingError::InvalidInput("guest name is required"));
		}

		let mut bookings = self.bookings.lock();

		let id = loop {
			let id = BookingId::new_v4();
			if !bookings.iter().any(|booking| booking.id == id) {
				break id;
			}
		};

		let booking = Booking::new(id, new_booking);
		bookings.push(booking.clone());
		Ok(booking)
	}

	fn list(&self) -> Vec<Booking> {
		self.bookings.lock().clone()
	}

	fn get(&self, id: &BookingId) -> Result<Booking, BookingError> {
		self.bookings
			.lock()
			.iter()
			.find(|booking| &booking.id == id)
			.cloned()
			.ok_or_else(|| BookingError::NotFound(id.clone()))
	}

	fn update(&self, id: &BookingId, update: BookingUpdate) -> Result<Booking, BookingError> {
		let mut bookings = self.bookings.lock();
		let Some(booking) = bookings.iter_mut().find(|booking| &booking.id == id) else {
			return Err(BookingError::NotFound(id.clone()));
		};

		booking.apply(update);
		Ok(booking.clone())
	}

	fn delete(&self, id: &BookingId) {
		self.bookings.lock().retain(|booking| &booking.id != id);
	}
}
