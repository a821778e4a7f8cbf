use crate::server::rest_api::error::ApiErrorResponse;
use aide::OperationInput;
use aide::generate::GenContext;
use aide::openapi::Operation;
use axum::Json;
use axum::extract::{FromRequest, Request};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// JSON request body that reports rejections as [`ApiErrorResponse`] with status 400.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = ApiErrorResponse;

	async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(request, state).await?;
		Ok(Self(value))
	}
}

impl<T: JsonSchema> OperationInput for ApiJson<T> {
	fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
		Json::<T>::operation_input(ctx, operation);
	}
}
