use crate::commandline::Commandline;
use crate::error::BookingServerError;
use clap::Parser;

mod booking;
mod commandline;
mod configuration;
mod context;
mod error;
mod server;

#[tokio::main]
async fn main() -> Result<(), BookingServerError> {
	Commandline::parse().run().await
}
