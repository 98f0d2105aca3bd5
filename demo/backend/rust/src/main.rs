/* demo/backend/rust/src/main.rs */

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use seam_i18n_axum::seam_i18n::{I18n, load_i18n_options};
use seam_i18n_axum::{LocaleContext, WithI18n};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

type Catalog = Arc<HashMap<String, Value>>;

/// Read `{dir}/{code}.json` for every configured locale. Missing files are skipped.
fn load_catalog(dir: &Path, codes: &[String]) -> Result<Catalog> {
  let mut catalog = HashMap::new();
  for code in codes {
    let path = dir.join(format!("{code}.json"));
    let Ok(content) = std::fs::read_to_string(&path) else {
      tracing::warn!(path = %path.display(), "no messages for locale");
      continue;
    };
    let messages: Value =
      serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    catalog.insert(code.clone(), messages);
  }
  Ok(Arc::new(catalog))
}

async fn page(State(catalog): State<Catalog>, ctx: LocaleContext) -> axum::Json<Value> {
  let messages = ctx.locale.as_ref().and_then(|l| catalog.get(l)).cloned().unwrap_or(Value::Null);
  axum::Json(json!({
    "locale": ctx.locale,
    "source": format!("{:?}", ctx.source),
    "alternates": ctx.page.options().map(|p| p.locales.clone()).unwrap_or_default(),
    "paths": ctx.page.options().map(|p| p.paths.clone()).unwrap_or_default(),
    "messages": messages,
  }))
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,seam_i18n=debug")),
    )
    .init();

  let config = env::var("I18N_CONFIG").unwrap_or_else(|_| "i18n.json".to_string());
  let messages_dir = env::var("I18N_MESSAGES_DIR").unwrap_or_else(|_| "locales".to_string());
  let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

  let options = load_i18n_options(&config).with_context(|| format!("loading {config}"))?;
  let catalog = load_catalog(Path::new(&messages_dir), &options.locale_codes())?;
  tracing::info!(locales = catalog.len(), dir = %messages_dir, "message catalog loaded");

  let lookup = catalog.clone();
  let i18n = I18n::new(options)
    .messages(Arc::new(move |locale: &str| lookup.get(locale).cloned()))
    .memory_store();

  let router = Router::new()
    .route("/", get(page))
    .route("/{*rest}", get(page))
    .with_state(catalog)
    .with_i18n(i18n);

  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
  tracing::info!(addr = %listener.local_addr()?, "i18n demo listening");
  axum::serve(listener, router).await?;
  Ok(())
}
