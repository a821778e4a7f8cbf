use crate::booking::{BookingError, BookingStore, NewBooking};
use crate::context::ApplicationContext;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::json::ApiJson;
use crate::server::rest_api::models::{BookingPath, BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::server::rest_api::response::{Created, NoContent};
use aide::axum::ApiRouter;
use aide::axum::routing::get_with;
use aide::openapi::OpenApi;
use aide::transform::{TransformOpenApi, TransformOperation};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::{info, warn};

mod error;
mod json;
pub mod models;
mod response;

pub fn rest_api() -> ApiRouter<ApplicationContext> {
	ApiRouter::new()
		.api_route(
			"/bookings",
			get_with(list_bookings, list_bookings_docs).post_with(create_booking, create_booking_docs),
		)
		.api_route("/bookings/search", get_with(search_bookings, search_bookings_docs))
		.api_route(
			"/bookings/{id}",
			get_with(get_booking, get_booking_docs)
				.put_with(update_booking, update_booking_docs)
				.delete_with(delete_booking, delete_booking_docs),
		)
}

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Hotel Booking API")
		.description("Create, read, update and delete hotel room bookings.")
}

pub async fn openapi_json(Extension(open_api): Extension<Arc<OpenApi>>) -> Response {
	Json(open_api.as_ref()).into_response()
}

async fn list_bookings(State(booking_store): State<Arc<dyn BookingStore>>) -> Json<Vec<BookingResponse>> {
	info!("Fetching all bookings.");
	Json(all_bookings(booking_store.as_ref()))
}

fn list_bookings_docs(operation: TransformOperation) -> TransformOperation {
	operation.summary("List all bookings in the order they were created.")
}

async fn search_bookings(State(booking_store): State<Arc<dyn BookingStore>>) -> Json<Vec<BookingResponse>> {
	info!("Searching available rooms.");
	Json(all_bookings(booking_store.as_ref()))
}

fn search_bookings_docs(operation: TransformOperation) -> TransformOperation {
	operation.summary("Search bookings. Currently returns every booking.")
}

fn all_bookings(booking_store: &dyn BookingStore) -> Vec<BookingResponse> {
	booking_store.list().into_iter().map(BookingResponse::from).collect()
}

async fn create_booking(
	State(booking_store): State<Arc<dyn BookingStore>>,
	ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<Created<Json<BookingResponse>>, BookingError> {
	let booking = NewBooking::try_from(request)
		.and_then(|new_booking| booking_store.create(new_booking))
		.inspect_err(|error| warn!("Rejected booking: {error}"))?;

	info!("New booking created with ID: {}", booking.id);
	Ok(Created(Json(booking.into())))
}

fn create_booking_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.summary("Create a booking. The id is generated by the server.")
		.response::<201, Json<BookingResponse>>()
		.response::<400, BookingError>()
}

async fn get_booking(
	State(booking_store): State<Arc<dyn BookingStore>>,
	Path(BookingPath { id }): Path<BookingPath>,
) -> Result<Json<BookingResponse>, BookingError> {
	info!("Fetching booking with ID: {id}");
	let booking = booking_store
		.get(&id)
		.inspect_err(|_| warn!("Booking with ID: {id} not found."))?;

	Ok(Json(booking.into()))
}

fn get_booking_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.summary("Get a single booking.")
		.response::<404, BookingError>()
}

async fn update_booking(
	State(booking_store): State<Arc<dyn BookingStore>>,
	Path(BookingPath { id }): Path<BookingPath>,
	ApiJson(request): ApiJson<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, BookingError> {
	info!("Updating booking with ID: {id}");
	let booking = booking_store
		.update(&id, request.into())
		.inspect_err(|_| warn!("Booking with ID: {id} not found for updating."))?;

	info!("Booking with ID: {id} updated successfully.");
	Ok(Json(booking.into()))
}

fn update_booking_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.summary("Replace room type, guest name and number of guests of a booking.")
		.description("Fields missing from the request body are reset to an empty string or zero.")
		.response::<400, ApiErrorResponse>()
		.response::<404, BookingError>()
}

async fn delete_booking(
	State(booking_store): State<Arc<dyn BookingStore>>,
	Path(BookingPath { id }): Path<BookingPath>,
) -> NoContent {
	info!("Deleting booking with ID: {id}");
	booking_store.delete(&id);
	info!("Booking with ID: {id} deleted successfully.");
	NoContent
}

fn delete_booking_docs(operation: TransformOperation) -> TransformOperation {
	operation
		.summary("Delete a booking. Succeeds even if the booking doesn't exist.")
		.response::<204, NoContent>()
}
