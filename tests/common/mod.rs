// Shared by every integration test binary; not all of them use every helper.
#![allow(dead_code)]

use actix_web::{App, test as actix_test, web};
use iris_classifier_rs::app_state::AppState;
use iris_classifier_rs::config::{DEFAULT_MODEL_PATH, ServerConfig};
use iris_classifier_rs::server::{health, home, json_config, model_info, predict};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// The artifact shipped with the repository.
pub fn shipped_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_MODEL_PATH)
}

pub fn test_config(model_path: PathBuf) -> ServerConfig {
    ServerConfig {
        model_path,
        port: 0,
        ..Default::default()
    }
}

pub fn create_test_state() -> web::Data<AppState> {
    let config = test_config(shipped_model_path());
    web::Data::new(AppState::new(&config).expect("Failed to load shipped model in test"))
}

pub async fn create_app(
    app_state: web::Data<AppState>,
    max_payload_size: usize,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    actix_test::init_service(
        App::new()
            .app_data(app_state)
            .app_data(json_config(max_payload_size))
            .service(home)
            .service(health)
            .service(model_info)
            .service(predict),
    )
    .await
}

/// Writes `contents` to a fresh temporary artifact file.
pub fn write_artifact(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp artifact");
    file
}

/// A single-leaf tree that always answers `label`.
pub fn constant_model_json(label: Value) -> String {
    json!({
        "type": "DecisionTreeClassifier",
        "n_features": 4,
        "classes": [label],
        "nodes": [{"kind": "leaf", "value": [1.0]}]
    })
    .to_string()
}

pub fn setosa_body() -> Value {
    json!({
        "sepal_length": 5.1,
        "sepal_width": 3.5,
        "petal_length": 1.4,
        "petal_width": 0.2
    })
}
