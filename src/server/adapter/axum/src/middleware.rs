/* src/server/adapter/axum/src/middleware.rs */

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, COOKIE, HOST};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use seam_i18n::{
  HostSource, I18n, LocaleSource, PageRouting, RequestInfo, RouteDescriptor, RouteLocaleMatcher,
  Store,
};

use crate::error::AxumError;

/// Resolved i18n state for one request, stored in request extensions.
#[derive(Clone)]
pub struct LocaleContext {
  pub locale: Option<String>,
  pub source: LocaleSource,
  pub page: PageRouting,
  /// Per-request store, already synced with `locale`.
  pub store: Option<Arc<dyn Store>>,
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

/// Raw `Host` / `X-Forwarded-Host` values for domain resolution.
pub fn host_source(headers: &HeaderMap) -> HostSource {
  HostSource::Request {
    host: header_str(headers, HOST.as_str()).map(String::from),
    forwarded_host: header_str(headers, "x-forwarded-host").map(String::from),
  }
}

/// Route descriptor for a request path. The page key (`chunk_name`) is the
/// path without its locale prefix and slashes; the site root maps to "index".
pub fn route_descriptor(path: &str, matcher: &RouteLocaleMatcher) -> RouteDescriptor {
  let probe = RouteDescriptor::with_path(path);
  let unprefixed = match matcher.locale_of(&probe) {
    // The captured code is a slice of `path`: "/fr/about" -> "/about".
    Some(loc) => path.get(loc.len() + 1..).unwrap_or_default(),
    None => path,
  };
  let key = unprefixed.trim_matches('/');
  RouteDescriptor {
    name: None,
    path: Some(path.to_string()),
    chunk_name: Some(if key.is_empty() { "index".to_string() } else { key.to_string() }),
  }
}

/// Resolve the request locale, sync the per-request store and expose a
/// [`LocaleContext`] to handlers. A locale-prefixed URL for a page that is not
/// served in that locale is answered with 404.
pub async fn i18n_middleware(
  State(i18n): State<Arc<I18n>>,
  mut req: Request,
  next: Next,
) -> Result<Response, AxumError> {
  let headers = req.headers();
  let host = host_source(headers);
  let route = route_descriptor(req.uri().path(), i18n.matcher());

  let resolved = i18n.resolve(&RequestInfo {
    route: Some(&route),
    host: Some(&host),
    cookie_header: header_str(headers, COOKIE.as_str()),
    accept_language: header_str(headers, ACCEPT_LANGUAGE.as_str()),
  });

  if resolved.source == LocaleSource::Route {
    if let Some(ref loc) = resolved.locale {
      if !resolved.page.allows(loc) {
        tracing::debug!(path = %req.uri().path(), locale = %loc, "page not served in locale");
        return Err(AxumError::NotFound(format!("Page not available in locale '{loc}'")));
      }
    }
  }

  let store = i18n.new_store();
  if let (Some(store), Some(loc)) = (&store, &resolved.locale) {
    i18n.sync(store.as_ref(), loc).await?;
  }

  let locale = resolved.locale.clone();
  req.extensions_mut().insert(LocaleContext {
    locale: resolved.locale,
    source: resolved.source,
    page: resolved.page,
    store,
  });

  let mut response = next.run(req).await;
  if let Some(loc) = locale {
    if !response.headers().contains_key(CONTENT_LANGUAGE) {
      if let Ok(value) = HeaderValue::from_str(&loc) {
        response.headers_mut().insert(CONTENT_LANGUAGE, value);
      }
    }
  }
  Ok(response)
}
