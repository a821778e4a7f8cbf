pub mod error;
pub mod model;
pub mod store;

pub use error::BookingError;
pub use model::{Booking, BookingId, BookingUpdate, NewBooking};
pub use store::BookingStore;
