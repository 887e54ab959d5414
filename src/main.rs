use clap::Parser;
use iris_classifier_rs::config::{DEFAULT_MODEL_PATH, ServerConfig};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iris-classifier")]
#[command(about = "Iris Classifier API - serves predictions from a pre-trained pipeline")]
struct CliArgs {
    /// Host address to bind the server
    #[arg(long, env = "IRIS_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server
    #[arg(long, env = "IRIS_PORT", default_value_t = 8000)]
    port: u16,

    /// Path to the serialized model pipeline
    #[arg(long, env = "IRIS_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    model_path: PathBuf,

    /// Log level
    #[arg(long, env = "IRIS_LOG_LEVEL", default_value = "info", value_parser = ["off", "error", "warn", "info", "debug", "trace"])]
    log_level: String,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = 64 * 1024)]
    max_payload_size: usize,

    /// Number of HTTP worker threads (defaults to the CPU count)
    #[arg(long)]
    workers: Option<usize>,
}

impl CliArgs {
    fn to_server_config(&self) -> anyhow::Result<ServerConfig> {
        Ok(ServerConfig {
            host: self.host.clone(),
            port: self.port,
            model_path: self.model_path.clone(),
            log_level: self.log_level.parse::<LevelFilter>()?,
            max_payload_size: self.max_payload_size,
            workers: self.workers,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.to_server_config()?;
    iris_classifier_rs::launch(config)
}
