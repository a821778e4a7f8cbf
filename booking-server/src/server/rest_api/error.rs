use aide::OperationOutput;
use aide::generate::GenContext;
use aide::openapi::{MediaType, Operation, SchemaObject};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;

mod booking;
mod malformed_request;

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details to avoid complexity.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
	r#type: &'static str,
	status: u16,
	message: String,
}

impl ApiErrorResponse {
	/// `OpenAPI` description of an error response, shared by all error types of the REST API.
	fn openapi_response(ctx: &mut GenContext, description: &str) -> aide::openapi::Response {
		let schema = SchemaObject {
			json_schema: ApiErrorResponse::json_schema(&mut ctx.schema),
			external_docs: None,
			example: None,
		};

		aide::openapi::Response {
			description: description.to_string(),
			content: IndexMap::from_iter([(
				mime::APPLICATION_JSON.to_string(),
				MediaType {
					schema: Some(schema),
					..Default::default()
				},
			)]),
			..Default::default()
		}
	}
}

impl OperationOutput for ApiErrorResponse {
	type Inner = Self;

	fn operation_response(ctx: &mut GenContext, _operation: &mut Operation) -> Option<aide::openapi::Response> {
		Some(Self::openapi_response(ctx, "Request body was malformed or invalid."))
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}
