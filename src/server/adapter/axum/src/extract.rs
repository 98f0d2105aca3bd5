/* src/server/adapter/axum/src/extract.rs */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AxumError;
use crate::middleware::LocaleContext;

/// Locale resolved by the i18n middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for LocaleContext {
  type Rejection = AxumError;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    parts.extensions.get::<LocaleContext>().cloned().ok_or(AxumError::MissingContext)
  }
}

impl<S: Send + Sync> FromRequestParts<S> for Locale {
  type Rejection = AxumError;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    parts
      .extensions
      .get::<LocaleContext>()
      .and_then(|ctx| ctx.locale.clone())
      .map(Locale)
      .ok_or(AxumError::MissingContext)
  }
}
