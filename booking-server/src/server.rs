use crate::context::ApplicationContext;
use aide::openapi::OpenApi;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	let shutdown_timeout = application_context.configuration.shutdown_timeout;

	let handle = axum_server::Handle::new();
	tokio::spawn(shutdown_on_ctrl_c(handle.clone(), shutdown_timeout));

	axum_server::bind(address)
		.handle(handle)
		.serve(create_router(application_context).into_make_service())
		.await
}

async fn shutdown_on_ctrl_c(handle: axum_server::Handle<std::net::SocketAddr>, timeout: Duration) {
	if let Err(error) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for Ctrl-C, graceful shutdown is unavailable: {error}");
		return;
	}

	info!("Shutting down. Waiting up to {timeout:?} for open requests.");
	handle.graceful_shutdown(Some(timeout));
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let mut open_api = OpenApi::default();
	let router = rest_api::rest_api().finish_api_with(&mut open_api, rest_api::api_docs);

	router
		.route("/openapi.json", get(rest_api::openapi_json))
		.layer(Extension(Arc::new(open_api)))
		.layer(TraceLayer::new_for_http())
		.with_state(application_context)
}
