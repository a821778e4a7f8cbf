use crate::server::rest_api::error::ApiErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

impl From<JsonRejection> for ApiErrorResponse {
	fn from(rejection: JsonRejection) -> Self {
		ApiErrorResponse {
			r#type: "malformed-request",
			status: StatusCode::BAD_REQUEST.as_u16(),
			message: rejection.body_text(),
		}
	}
}
