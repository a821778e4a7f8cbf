use crate::booking::{Booking, BookingError, BookingId, BookingUpdate, NewBooking};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, JsonSchema)]
pub struct BookingPath {
	pub id: BookingId,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
	pub room_type: Option<String>,
	pub guest_name: Option<String>,
	/// Defaults to 0 if omitted.
	pub number_of_guests: Option<u32>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
	type Error = BookingError;

	fn try_from(request: CreateBookingRequest) -> Result<Self, Self::Error> {
		let CreateBookingRequest {
			room_type,
			guest_name,
			number_of_guests,
		} = request;

		let (room_type, guest_name) = match (room_type, guest_name) {
			(None, None) if number_of_guests.is_none() => {
				return Err(BookingError::InvalidInput("booking request is empty"));
			}
			(None, _) => return Err(BookingError::InvalidInput("room type is required")),
			(_, None) => return Err(BookingError::InvalidInput("guest name is required")),
			(Some(room_type), Some(guest_name)) => (room_type, guest_name),
		};

		Ok(NewBooking {
			room_type,
			guest_name,
			number_of_guests: number_of_guests.unwrap_or_default(),
		})
	}
}

/// Full replacement of a booking's mutable fields. Missing fields become empty or zero.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBookingRequest {
	pub room_type: String,
	pub guest_name: String,
	pub number_of_guests: u32,
}

impl From<UpdateBookingRequest> for BookingUpdate {
	fn from(request: UpdateBookingRequest) -> Self {
		let UpdateBookingRequest {
			room_type,
			guest_name,
			number_of_guests,
		} = request;

		Self {
			room_type,
			guest_name,
			number_of_guests,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
	pub id: BookingId,
	pub room_type: String,
	pub guest_name: String,
	pub number_of_guests: u32,
}

impl From<Booking> for BookingResponse {
	fn from(booking: Booking) -> Self {
		let Booking {
			id,
			room_type,
			guest_name,
			number_of_guests,
		} = booking;

		Self {
			id,
			room_type,
			guest_name,
			number_of_guests,
		}
	}
}
