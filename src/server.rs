use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::io_struct::{FieldError, IrisInput, MessageResponse, PredictResponse};
use actix_web::{HttpRequest, HttpResponse, HttpServer, error, get, post, web};
use log::{error, info, warn};
use serde_json::Value;

pub const SERVICE_MESSAGE: &str = "Iris classifier is running!";

// Maps extractor failures onto the same error bodies the handlers produce.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match &err {
        error::JsonPayloadError::OverflowKnownLength { length, limit } => {
            warn!(
                "Payload too large: {} bytes exceeds limit of {} bytes",
                length, limit
            );
            ApiError::PayloadTooLarge { limit: *limit }.into()
        }
        error::JsonPayloadError::Overflow { limit } => {
            warn!("Payload overflow: exceeds limit of {} bytes", limit);
            ApiError::PayloadTooLarge { limit: *limit }.into()
        }
        _ => {
            warn!("Invalid JSON payload: {}", err);
            ApiError::Validation(vec![FieldError::json_invalid(&err.to_string())]).into()
        }
    }
}

pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

#[get("/")]
pub async fn home(_req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: SERVICE_MESSAGE.to_string(),
    })
}

#[get("/health")]
pub async fn health(_req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

#[get("/model_info")]
pub async fn model_info(_req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.model_info())
}

#[post("/predict")]
pub async fn predict(
    _req: HttpRequest,
    body: web::Json<Value>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = IrisInput::from_json(&body).map_err(|errors| {
        let fields = errors
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.kind))
            .collect::<Vec<_>>();
        warn!("Rejected prediction request: {}", fields.join(", "));
        ApiError::Validation(errors)
    })?;
    let label = app_state.predict(&input).map_err(|e| {
        error!("Inference failed for {:?}: {}", input, e);
        ApiError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(PredictResponse {
        prediction: label.to_string(),
    }))
}

pub async fn startup(config: ServerConfig, app_state: web::Data<AppState>) -> std::io::Result<()> {
    let max_payload_size = config.max_payload_size;

    info!("Serving iris classifier on {}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .app_data(json_config(max_payload_size))
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .service(home)
            .service(health)
            .service(model_info)
            .service(predict)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host, config.port))?.run().await
}
