use crate::booking::model::BookingId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
	#[error("Invalid booking: {0}")]
	InvalidInput(&'static str),
	#[error("Booking with ID '{0}' not found.")]
	NotFound(BookingId),
}
