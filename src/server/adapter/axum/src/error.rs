/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use seam_i18n::I18nError;

/// Error responses produced by the i18n middleware and extractors.
/// A newtype-style enum because `IntoResponse` cannot be implemented on the foreign `I18nError`.
#[derive(Debug)]
pub enum AxumError {
  I18n(I18nError),
  /// The page is not served in the locale carried by the URL prefix.
  NotFound(String),
  /// A locale extractor ran without the i18n middleware in front of it.
  MissingContext,
}

impl AxumError {
  fn parts(&self) -> (StatusCode, &'static str, String) {
    match self {
      Self::I18n(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string()),
      Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
      Self::MissingContext => (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "locale context missing; is the i18n middleware installed?".to_string(),
      ),
    }
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let (status, code, message) = self.parts();
    if status.is_server_error() {
      tracing::error!(code, %message, "i18n request failed");
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": code,
        "message": message,
        "transient": false,
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<I18nError> for AxumError {
  fn from(err: I18nError) -> Self {
    Self::I18n(err)
  }
}
