use crate::constants::{INTERNAL_SERVER_ERROR_MESSAGE, NO_FILE_UPLOADED_MESSAGE};
use crate::{generate_boarding_sequence, read_booking_rows_from_string, BoardingSequence, Error};
use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use log::{error, info, warn};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Name of the multipart field carrying the manifest.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Router exposing `POST /api/generate`.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/generate", post(generate_sequence))
        .layer(cors)
}

#[derive(Debug)]
pub enum ApiError {
    MissingUpload,
    Sequencing(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingUpload => (StatusCode::BAD_REQUEST, NO_FILE_UPLOADED_MESSAGE.to_string()),
            ApiError::Sequencing(err) if err.is_client_error() => {
                warn!("Rejected manifest: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Sequencing(err) => {
                error!("Processing Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Sequencing(err)
    }
}

async fn generate_sequence(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BoardingSequence>, ApiError> {
    let mut multipart = multipart.map_err(|_| ApiError::MissingUpload)?;

    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::ParserError(e.body_text()))?
    {
        if field.name() == Some(UPLOAD_FIELD_NAME) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::ParserError(e.body_text()))?;
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload.ok_or(ApiError::MissingUpload)?;
    let csv = std::str::from_utf8(&bytes)
        .map_err(|e| Error::ParserError(format!("Manifest is not valid UTF-8: {}", e)))?;

    let rows = read_booking_rows_from_string(csv)?;
    let sequence = generate_boarding_sequence(&rows)?;

    info!(
        "Generated boarding sequence of {} bookings from {} rows",
        sequence.len(),
        rows.len()
    );

    Ok(Json(sequence))
}
