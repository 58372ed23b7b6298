use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};

use loan_inference::{InferenceError, LoanInput};

use crate::inference::ModelState;
use crate::models::{ErrorDetail, LiveMessage, PredictionResponse};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(LiveMessage::default())
}

#[post("/predict")]
pub async fn predict(
    state: web::Data<ModelState>,
    input: web::Json<LoanInput>,
) -> impl Responder {
    let predictor = match state.predictor() {
        Ok(predictor) => predictor,
        Err(reason) => {
            warn!("Prediction requested but model is unavailable: {}", reason);
            return HttpResponse::ServiceUnavailable()
                .json(ErrorDetail::new(format!("Model artifacts are not loaded: {}", reason)));
        }
    };

    match predictor.predict(&input) {
        Ok(prediction) => {
            info!(
                "Prediction: {} (p={:.3})",
                prediction.status.as_str(),
                prediction.probability
            );
            HttpResponse::Ok().json(PredictionResponse::new(&prediction, predictor.model_name()))
        }
        Err(e @ InferenceError::NonFinite { .. }) => {
            warn!("Rejected prediction input: {}", e);
            HttpResponse::UnprocessableEntity().json(ErrorDetail::new(e.to_string()))
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorDetail::new(format!("Prediction failed: {}", e)))
        }
    }
}

#[get("/model-info")]
pub async fn model_info(state: web::Data<ModelState>) -> impl Responder {
    match state.info() {
        Some(info) => HttpResponse::Ok().json(info),
        None => HttpResponse::ServiceUnavailable()
            .json(ErrorDetail::new("Model artifacts are not loaded")),
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDetail::new("Not Found"))
}

/// Body errors become JSON: unparseable or ill-typed payloads are 422,
/// everything else (size, content type) keeps a 4xx of its own.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Deserialize(e) => {
            warn!("Rejected request body: {}", e);
            HttpResponse::UnprocessableEntity().json(ErrorDetail::new(e.to_string()))
        }
        JsonPayloadError::ContentType => {
            HttpResponse::UnsupportedMediaType().json(ErrorDetail::new(err.to_string()))
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorDetail::new(err.to_string()))
        }
        _ => HttpResponse::BadRequest().json(ErrorDetail::new(err.to_string())),
    };
    InternalError::from_response(err, response).into()
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(json_error)
}

/// Front-ends are served from other origins.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(predict)
        .service(model_info)
        .default_service(web::route().to(not_found));
}
