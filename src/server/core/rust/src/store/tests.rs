/* src/server/core/rust/src/store/tests.rs */

use std::sync::Mutex;

use serde_json::json;

use super::*;

/// Records every dispatch; fails the ones whose action is listed in `fail_on`.
#[derive(Default)]
struct RecordingStore {
  calls: Mutex<Vec<(String, Value)>>,
  fail_on: Vec<String>,
}

impl RecordingStore {
  fn failing(action: &str) -> Self {
    Self { fail_on: vec![action.to_string()], ..Self::default() }
  }

  fn actions(&self) -> Vec<String> {
    self.calls.lock().unwrap().iter().map(|(a, _)| a.clone()).collect()
  }
}

impl Store for RecordingStore {
  fn dispatch(&self, action: &str, payload: Value) -> BoxFuture<Result<(), I18nError>> {
    self.calls.lock().unwrap().push((action.to_string(), payload));
    let fail = self.fail_on.iter().any(|a| a == action);
    let action = action.to_string();
    Box::pin(async move { if fail { Err(I18nError::dispatch(action, "handler failed")) } else { Ok(()) } })
  }
}

fn no_sync() -> StoreSyncOptions {
  StoreSyncOptions { sync_locale: false, sync_messages: false, ..StoreSyncOptions::default() }
}

#[tokio::test]
async fn sync_disabled_dispatches_nothing() {
  let store = RecordingStore::default();
  let messages = json!({ "hello": "Bonjour" });
  sync_store(Some(&store), Some(&no_sync()), Some("fr"), Some(&messages)).await.unwrap();
  assert!(store.actions().is_empty());
}

#[tokio::test]
async fn locale_dispatched_before_messages() {
  let store = RecordingStore::default();
  let messages = json!({ "hello": "Bonjour" });
  let opts = StoreSyncOptions::default();
  sync_store(Some(&store), Some(&opts), Some("fr"), Some(&messages)).await.unwrap();
  assert_eq!(store.actions(), vec!["i18n/setLocale", "i18n/setMessages"]);
  let calls = store.calls.lock().unwrap();
  assert_eq!(calls[0].1, json!("fr"));
  assert_eq!(calls[1].1, messages);
}

#[tokio::test]
async fn missing_values_are_skipped() {
  let store = RecordingStore::default();
  let opts = StoreSyncOptions::default();
  sync_store(Some(&store), Some(&opts), None, None).await.unwrap();
  assert!(store.actions().is_empty());

  sync_store(Some(&store), Some(&opts), None, Some(&json!({}))).await.unwrap();
  assert_eq!(store.actions(), vec!["i18n/setMessages"]);
}

#[tokio::test]
async fn no_store_or_options_is_noop() {
  let store = RecordingStore::default();
  sync_store(None, Some(&StoreSyncOptions::default()), Some("fr"), None).await.unwrap();
  sync_store(Some(&store), None, Some("fr"), None).await.unwrap();
  assert!(store.actions().is_empty());
}

#[tokio::test]
async fn first_failure_stops_second_dispatch() {
  let store = RecordingStore::failing("i18n/setLocale");
  let opts = StoreSyncOptions::default();
  let err = sync_store(Some(&store), Some(&opts), Some("fr"), Some(&json!({})))
    .await
    .unwrap_err();
  assert!(matches!(err, I18nError::Dispatch { ref action, .. } if action == "i18n/setLocale"));
  assert_eq!(store.actions(), vec!["i18n/setLocale"]);
}

#[tokio::test]
async fn custom_module_name() {
  let store = RecordingStore::default();
  let opts = StoreSyncOptions { module_name: "lang".into(), ..StoreSyncOptions::default() };
  sync_store(Some(&store), Some(&opts), Some("en"), None).await.unwrap();
  assert_eq!(store.actions(), vec!["lang/setLocale"]);
}

#[tokio::test]
async fn memory_store_holds_synced_state() {
  let store = MemoryStore::default();
  let messages = json!({ "title": "Accueil" });
  let opts = StoreSyncOptions::default();
  sync_store(Some(&store), Some(&opts), Some("fr"), Some(&messages)).await.unwrap();
  sync_route_params(Some(&store), Some(&opts), &json!({ "fr": { "slug": "bonjour" } }))
    .await
    .unwrap();

  let state = store.state();
  assert_eq!(state.locale.as_deref(), Some("fr"));
  assert_eq!(state.messages, Some(messages));
  assert_eq!(state.route_params, Some(json!({ "fr": { "slug": "bonjour" } })));
}

#[tokio::test]
async fn memory_store_rejects_foreign_actions() {
  let store = MemoryStore::default();
  assert!(store.dispatch("cart/add", json!(1)).await.is_err());
  assert!(store.dispatch("i18n/unknown", json!(1)).await.is_err());
  assert!(store.dispatch("setLocale", json!("fr")).await.is_err());
  assert!(store.dispatch("i18n/setLocale", json!(3)).await.is_err());
  assert_eq!(store.state(), I18nState::default());
}

#[tokio::test]
async fn route_params_respect_flag() {
  let store = RecordingStore::default();
  let opts = StoreSyncOptions { sync_route_params: false, ..StoreSyncOptions::default() };
  sync_route_params(Some(&store), Some(&opts), &json!({})).await.unwrap();
  assert!(store.actions().is_empty());
}

#[test]
fn sync_options_deserialize_with_defaults() {
  let opts: StoreSyncOptions = serde_json::from_value(json!({ "syncMessages": false })).unwrap();
  assert_eq!(opts.module_name, "i18n");
  assert!(opts.sync_locale);
  assert!(!opts.sync_messages);
}
