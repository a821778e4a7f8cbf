use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::BookingServerError;
use crate::server::run_server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Run the booking server
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), BookingServerError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				tracing_subscriber::fmt()
					.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
					.init();

				let application_context = ApplicationContext::new(configuration);
				info!(
					"Starting server. Bookings are served at 'http://{}/bookings'.",
					application_context.configuration.address
				);
				run_server(application_context).await?;
			}
			BaseCommand::Configuration => println!("{configuration:#?}"),
		}
		Ok(())
	}
}
