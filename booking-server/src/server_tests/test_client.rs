use crate::server::rest_api::models::BookingResponse;
use axum::Router;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};
use std::time::Duration;

/// HTTP client talking to a booking server that runs on a random local port.
///
/// The server is shut down when the client is dropped.
pub struct TestClient {
	server_handle: axum_server::Handle<SocketAddr>,
	client: reqwest::Client,
	server_address: SocketAddr,
}

impl TestClient {
	pub async fn start(router: Router) -> anyhow::Result<Self> {
		// NOTE: port 0 assigns a random available port
		let socket_address = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 0, 0, 0);

		let (server_address, server_handle) = loop {
			let handle = axum_server::Handle::new();
			let server = axum_server::Server::bind(socket_address.into()).handle(handle.clone());

			tokio::spawn(server.serve(router.clone().into_make_service()));

			if let Some(address) = handle.listening().await {
				break (address, handle);
			}
		};

		let client = reqwest::Client::builder()
			.connect_timeout(Duration::from_secs(10))
			.timeout(Duration::from_secs(10))
			.build()?;

		Ok(Self {
			server_handle,
			client,
			server_address,
		})
	}

	pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let path = path.trim_start_matches('/');
		self.client
			.request(method, format!("http://{}/{path}", self.server_address))
	}

	pub fn get(&self, path: &str) -> RequestBuilder {
		self.request(Method::GET, path)
	}

	pub fn post(&self, path: &str) -> RequestBuilder {
		self.request(Method::POST, path)
	}

	/// Creates a booking and expects the server to accept it.
	pub async fn create_booking(&self, booking: &Value) -> BookingResponse {
		let response = self.try_create_booking(booking).await;
		assert_eq!(StatusCode::CREATED, response.status(), "Booking was not created");
		deserialize(response).await
	}

	pub async fn try_create_booking(&self, booking: &Value) -> Response {
		send(self.post("/bookings").json(booking)).await
	}

	pub async fn list_bookings(&self) -> Vec<BookingResponse> {
		let response = send(self.get("/bookings")).await;
		assert_eq!(StatusCode::OK, response.status(), "Bookings could not be listed");
		deserialize(response).await
	}

	pub async fn get_booking(&self, id: &str) -> Response {
		send(self.get(&format!("/bookings/{id}"))).await
	}

	pub async fn update_booking(&self, id: &str, booking: &Value) -> Response {
		send(self.request(Method::PUT, &format!("/bookings/{id}")).json(booking)).await
	}

	pub async fn delete_booking(&self, id: &str) -> Response {
		send(self.request(Method::DELETE, &format!("/bookings/{id}"))).await
	}
}

impl Drop for TestClient {
	fn drop(&mut self) {
		self.server_handle.graceful_shutdown(Some(Duration::from_secs(5)));
	}
}

async fn send(request: RequestBuilder) -> Response {
	request.send().await.expect("Request failed.")
}

pub async fn deserialize<T: DeserializeOwned>(response: Response) -> T {
	response.json::<T>().await.expect("Failed to deserialize response JSON")
}
