use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a booking, assigned by the store on creation.
#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Deref,
	derive_more::Display,
	Debug,
	Clone,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	JsonSchema,
)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
	pub fn new_v4() -> Self {
		Self(uuid::Uuid::new_v4().to_string())
	}
}

impl From<&str> for BookingId {
	fn from(id: &str) -> Self {
		Self(id.to_owned())
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
	pub id: BookingId,
	pub room_type: String,
	pub guest_name: String,
	pub number_of_guests: u32,
}

/// Input for creating a booking. The id is never supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBooking {
	pub room_type: String,
	pub guest_name: String,
	pub number_of_guests: u32,
}

/// Replaces every mutable field of an existing booking, including with empty values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingUpdate {
	pub room_type: String,
	pub guest_name: String,
	pub number_of_guests: u32,
}

impl Booking {
	pub(super) fn new(id: BookingId, new_booking: NewBooking) -> Self {
		let NewBooking {
			room_type,
			guest_name,
			number_of_guests,
		} = new_booking;

		Self {
			id,
			room_type,
			guest_name,
			number_of_guests,
		}
	}

	pub(super) fn apply(&mut self, update: BookingUpdate) {
		let BookingUpdate {
			room_type,
			guest_name,
			number_of_guests,
		} = update;

		self.room_type = room_type;
		self.guest_name = guest_name;
		self.number_of_guests = number_of_guests;
	}
}
