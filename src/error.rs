use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Errors surfaced to HTTP clients.
///
/// The lookup itself cannot fail; only body extraction can.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidBody(JsonRejection::JsonSyntaxError(_)) => "json_syntax_error",
            AppError::InvalidBody(JsonRejection::JsonDataError(_)) => "json_data_error",
            AppError::InvalidBody(JsonRejection::MissingJsonContentType(_)) => {
                "unsupported_media_type"
            }
            AppError::InvalidBody(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                "payload_too_large"
            }
            AppError::InvalidBody(_) => "bad_request",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, reason) = match self {
            AppError::InvalidBody(rejection) => {
                let status = rejection.status();
                tracing::debug!(status = status.as_u16(), error = %rejection, "Rejected request body");
                (status, rejection.body_text())
            }
        };

        let body = serde_json::json!({
            "error": kind,
            "reason": reason,
        });

        (status, Json(body)).into_response()
    }
}
