use std::{fs::File, io::Write, process::ExitCode};

use tracing::{error, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

mod adapters;
mod config;
mod index;
mod model;
mod ncdu;
mod scan;
mod util;

use model::error::ExportError;
use util::object::Provider;

async fn client_for(provider: Provider) -> Result<Box<dyn adapters::ObjectLister>, ExportError> {
    match provider {
        Provider::AWS => {
            let config = aws_config::load_from_env().await;
            Ok(Box::new(aws_sdk_s3::Client::new(&config)))
        }
        Provider::GCS => {
            let config = google_cloud_storage::client::ClientConfig::default()
                .with_auth()
                .await
                .map_err(|err| ExportError::Client(err.to_string()))?;
            Ok(Box::new(google_cloud_storage::client::Client::new(config)))
        }
    }
}

fn open_output(config: &config::Config) -> Result<Box<dyn Write>, ExportError> {
    match &config.output {
        None => Ok(Box::new(std::io::stdout())),
        Some(path) => {
            let f = File::create(path).map_err(|err| ExportError::Output {
                path: path.display().to_string(),
                source: err,
            })?;
            Ok(Box::new(f))
        }
    }
}

async fn run(config: config::Config) -> Result<(), ExportError> {
    let mut out = open_output(&config)?;
    let client = client_for(config.location.provider).await?;

    let tree = scan::scan(client.as_ref(), &config.location, config.inode_seed).await?;

    let document = ncdu::export(&tree, &config.location.uri, ncdu::now_timestamp());
    let raw_data = ncdu::encode(&document)?;

    ncdu::write_document(&mut out, &raw_data)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let span = info_span!("main", context = "main");

    async move {
        info!("called");

        let matches = config::command().get_matches();
        let config = match config::Config::from_matches(&matches) {
            Err(err) => {
                error!(error_message=%err, error_group="config");
                return ExitCode::FAILURE;
            }
            Ok(config) => config,
        };
        info!(
            source = %config.location.uri,
            bucket = %config.location.bucket,
            prefix = %config.location.prefix,
            "args"
        );

        match run(config).await {
            Err(err) => {
                error!(error_message=%err, error_group="export");
                ExitCode::FAILURE
            }
            Ok(()) => ExitCode::SUCCESS,
        }
    }
    .instrument(span)
    .await
}
