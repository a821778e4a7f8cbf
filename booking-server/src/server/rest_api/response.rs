use aide::OperationOutput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

/// Response wrapper for HTTP Status Code 201 CREATED
///
/// Just returning a tuple of (`StatusCode`, `Response`) would not be reflected in the aide generated
/// documentation.
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
	fn into_response(self) -> Response {
		(StatusCode::CREATED, self.0).into_response()
	}
}

impl<T: OperationOutput> OperationOutput for Created<T> {
	type Inner = T::Inner;

	fn operation_response(ctx: &mut GenContext, operation: &mut Operation) -> Option<aide::openapi::Response> {
		T::operation_response(ctx, operation)
	}
}

/// HTTP Status Code 204 NO CONTENT with an empty body.
pub struct NoContent;

impl IntoResponse for NoContent {
	fn into_response(self) -> Response {
		StatusCode::NO_CONTENT.into_response()
	}
}

impl OperationOutput for NoContent {
	type Inner = ();

	fn operation_response(_ctx: &mut GenContext, _operation: &mut Operation) -> Option<aide::openapi::Response> {
		Some(aide::openapi::Response {
			description: "No content".to_string(),
			..Default::default()
		})
	}
}
