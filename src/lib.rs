pub mod app_state;
pub mod config;
pub mod error;
pub mod io_struct;
pub mod logging;
pub mod model;
pub mod server;

use actix_web::web;
use anyhow::Context;
use app_state::AppState;
use config::ServerConfig;
use log::info;
use tokio::signal;

/// Loads the model and serves until the server stops or Ctrl+C arrives.
///
/// The model is loaded before the listener is bound, so a missing or broken
/// artifact fails here and nothing is ever served without a model.
pub fn launch(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;
    logging::init_logging(config.log_level);

    let app_state = AppState::new(&config).with_context(|| {
        format!(
            "Failed to load model from {}",
            config.model_path.display()
        )
    })?;
    let app_state = web::Data::new(app_state);

    actix_web::rt::System::new().block_on(async move {
        tokio::select! {
            res = server::startup(config, app_state) => {
                res.context("HTTP server failed")
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down");
                Ok(())
            }
        }
    })
}
