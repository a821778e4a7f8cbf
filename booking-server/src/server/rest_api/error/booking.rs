use crate::booking::BookingError;
use crate::server::rest_api::error::ApiErrorResponse;
use aide::OperationOutput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl From<BookingError> for ApiErrorResponse {
	fn from(error: BookingError) -> Self {
		use BookingError::*;
		match error {
			InvalidInput(_) => ApiErrorResponse {
				r#type: "booking-invalid-input",
				status: StatusCode::BAD_REQUEST.as_u16(),
				message: error.to_string(),
			},
			NotFound(_) => ApiErrorResponse {
				r#type: "booking-not-found",
				status: StatusCode::NOT_FOUND.as_u16(),
				message: error.to_string(),
			},
		}
	}
}

impl OperationOutput for BookingError {
	type Inner = ApiErrorResponse;

	fn operation_response(ctx: &mut GenContext, _operation: &mut Operation) -> Option<aide::openapi::Response> {
		Some(ApiErrorResponse::openapi_response(ctx, "Booking was invalid or could not be found."))
	}
}

impl IntoResponse for BookingError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
