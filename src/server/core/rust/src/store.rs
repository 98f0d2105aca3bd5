/* src/server/core/rust/src/store.rs */

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use serde_json::Value;

use crate::errors::I18nError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Dispatch-capable application store, e.g. a per-request state container.
/// Actions are namespaced as "{module}/{action}".
pub trait Store: Send + Sync {
  fn dispatch(&self, action: &str, payload: Value) -> BoxFuture<Result<(), I18nError>>;
}

/// Which pieces of i18n state are mirrored into the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSyncOptions {
  pub module_name: String,
  pub sync_locale: bool,
  pub sync_messages: bool,
  pub sync_route_params: bool,
}

impl Default for StoreSyncOptions {
  fn default() -> Self {
    Self {
      module_name: "i18n".to_string(),
      sync_locale: true,
      sync_messages: true,
      sync_route_params: true,
    }
  }
}

impl StoreSyncOptions {
  pub fn action(&self, name: &str) -> String {
    format!("{}/{name}", self.module_name)
  }
}

/// Push locale, then messages, into the store. Nothing happens without
/// both a store and sync options. A failed dispatch is returned as-is and
/// any later dispatch is skipped.
pub async fn sync_store(
  store: Option<&dyn Store>,
  options: Option<&StoreSyncOptions>,
  locale: Option<&str>,
  messages: Option<&Value>,
) -> Result<(), I18nError> {
  let (Some(store), Some(options)) = (store, options) else {
    return Ok(());
  };

  if let Some(locale) = locale {
    if options.sync_locale {
      store.dispatch(&options.action("setLocale"), Value::String(locale.to_string())).await?;
    }
  }

  if let Some(messages) = messages {
    if options.sync_messages {
      store.dispatch(&options.action("setMessages"), messages.clone()).await?;
    }
  }

  Ok(())
}

/// Mirror the current route params (locale -> params) into the store.
pub async fn sync_route_params(
  store: Option<&dyn Store>,
  options: Option<&StoreSyncOptions>,
  params: &Value,
) -> Result<(), I18nError> {
  let (Some(store), Some(options)) = (store, options) else {
    return Ok(());
  };
  if options.sync_route_params {
    store.dispatch(&options.action("setRouteParams"), params.clone()).await?;
  }
  Ok(())
}

/// State held by the i18n store module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct I18nState {
  pub locale: Option<String>,
  pub messages: Option<Value>,
  pub route_params: Option<Value>,
}

/// In-process store exposing only the i18n module.
#[derive(Debug, Clone)]
pub struct MemoryStore {
  module_name: String,
  state: Arc<Mutex<I18nState>>,
}

impl MemoryStore {
  pub fn new(module_name: impl Into<String>) -> Self {
    Self { module_name: module_name.into(), state: Arc::new(Mutex::new(I18nState::default())) }
  }

  pub fn state(&self) -> I18nState {
    self.lock().clone()
  }

  fn lock(&self) -> MutexGuard<'_, I18nState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn apply(&self, action: &str, payload: Value) -> Result<(), I18nError> {
    let Some((module, name)) = action.split_once('/') else {
      return Err(I18nError::dispatch(action, "action is not namespaced"));
    };
    if module != self.module_name {
      return Err(I18nError::dispatch(action, format!("unknown module '{module}'")));
    }

    let mut state = self.lock();
    match name {
      "setLocale" => match payload {
        Value::String(locale) => state.locale = Some(locale),
        _ => return Err(I18nError::dispatch(action, "locale must be a string")),
      },
      "setMessages" => state.messages = Some(payload),
      "setRouteParams" => state.route_params = Some(payload),
      _ => return Err(I18nError::dispatch(action, format!("unknown action '{name}'"))),
    }
    Ok(())
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new(StoreSyncOptions::default().module_name)
  }
}

impl Store for MemoryStore {
  fn dispatch(&self, action: &str, payload: Value) -> BoxFuture<Result<(), I18nError>> {
    let result = self.apply(action, payload);
    if let Err(ref e) = result {
      tracing::warn!(action, error = %e, "store dispatch rejected");
    }
    Box::pin(async move { result })
  }
}

#[cfg(test)]
mod tests;
