/* src/server/core/rust/src/options.rs */

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::detect::DetectBrowserLanguage;
use crate::errors::I18nError;
use crate::locale::{LocaleList, get_locale_codes};
use crate::page::PageOptions;
use crate::store::StoreSyncOptions;

/// Plugin options as written in `i18n.json` / `i18n.toml` (camelCase keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nOptions {
  #[serde(default)]
  pub locales: LocaleList,
  #[serde(default)]
  pub default_locale: Option<String>,
  #[serde(default = "default_separator")]
  pub routes_name_separator: String,
  #[serde(default = "default_suffix")]
  pub default_locale_route_name_suffix: String,
  #[serde(default = "default_pages_dir")]
  pub pages_dir: String,
  #[serde(default)]
  pub pages: PageOptions,
  #[serde(default)]
  pub different_domains: bool,
  #[serde(default)]
  pub forwarded_host: bool,
  /// `false` turns store sync off.
  #[serde(default = "enabled", deserialize_with = "toggle", alias = "vuex")]
  pub store: Option<StoreSyncOptions>,
  /// `true` enables detection with defaults; absent or `false` leaves it off.
  #[serde(default, deserialize_with = "toggle")]
  pub detect_browser_language: Option<DetectBrowserLanguage>,
}

fn default_separator() -> String {
  "___".to_string()
}

fn default_suffix() -> String {
  "default".to_string()
}

fn default_pages_dir() -> String {
  "pages".to_string()
}

fn enabled<T: Default>() -> Option<T> {
  Some(T::default())
}

/// `false`/`null` -> None, `true` -> defaults, object -> parsed.
fn toggle<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  match Value::deserialize(deserializer)? {
    Value::Null | Value::Bool(false) => Ok(None),
    Value::Bool(true) => Ok(Some(T::default())),
    other => serde_json::from_value(other).map(Some).map_err(serde::de::Error::custom),
  }
}

impl Default for I18nOptions {
  fn default() -> Self {
    Self {
      locales: LocaleList::default(),
      default_locale: None,
      routes_name_separator: default_separator(),
      default_locale_route_name_suffix: default_suffix(),
      pages_dir: default_pages_dir(),
      pages: PageOptions::new(),
      different_domains: false,
      forwarded_host: false,
      store: enabled(),
      detect_browser_language: None,
    }
  }
}

impl I18nOptions {
  pub fn locale_codes(&self) -> Vec<String> {
    get_locale_codes(&self.locales)
  }

  /// Configured default locale, else the first configured code.
  pub fn fallback_locale(&self) -> Option<String> {
    self.default_locale.clone().or_else(|| self.locale_codes().into_iter().next())
  }

  pub fn validate(&self) -> Result<(), I18nError> {
    if let Some(ref default) = self.default_locale {
      if !self.locales.contains_code(default) {
        return Err(I18nError::config(format!(
          "defaultLocale \"{default}\" is not in locales {:?}",
          self.locale_codes()
        )));
      }
    }

    if self.different_domains {
      if let LocaleList::Codes(ref codes) = self.locales {
        if !codes.is_empty() {
          return Err(I18nError::config("differentDomains requires locale objects with a domain"));
        }
      }
      if let Some(entry) = self.locales.records().iter().find(|r| r.domain.is_none()) {
        return Err(I18nError::config(format!(
          "differentDomains is on but locale \"{}\" has no domain",
          entry.code
        )));
      }
    }

    if self.routes_name_separator.is_empty() {
      return Err(I18nError::config("routesNameSeparator must not be empty"));
    }
    Ok(())
  }

  pub fn from_json_str(src: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(src)
  }

  pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(src)
  }
}

/// Read and validate options from a `.json` or `.toml` file.
pub fn load_i18n_options(path: impl AsRef<Path>) -> Result<I18nOptions, I18nError> {
  let path = path.as_ref();
  let content = std::fs::read_to_string(path)
    .map_err(|source| I18nError::Io { path: path.to_path_buf(), source })?;

  let parse_err = |message: String| I18nError::Parse { path: path.to_path_buf(), message };
  let options = match path.extension().and_then(|e| e.to_str()) {
    Some("toml") => I18nOptions::from_toml_str(&content).map_err(|e| parse_err(e.to_string()))?,
    _ => I18nOptions::from_json_str(&content).map_err(|e| parse_err(e.to_string()))?,
  };

  options.validate()?;
  tracing::debug!(
    path = %path.display(),
    locales = options.locale_codes().len(),
    default = ?options.default_locale,
    "loaded i18n options"
  );
  Ok(options)
}

#[cfg(test)]
mod tests;
