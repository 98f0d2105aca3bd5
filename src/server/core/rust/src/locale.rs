/* src/server/core/rust/src/locale.rs */

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A configured locale given as a record rather than a bare code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
  pub code: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub domain: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub iso: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
}

impl LocaleEntry {
  pub fn new(code: impl Into<String>) -> Self {
    Self { code: code.into(), domain: None, iso: None, file: None }
  }

  pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
    self.domain = Some(domain.into());
    self
  }
}

/// Locale list with its shape fixed at load time: all bare codes, or all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleList {
  Codes(Vec<String>),
  Records(Vec<LocaleEntry>),
}

impl Default for LocaleList {
  fn default() -> Self {
    Self::Codes(Vec::new())
  }
}

impl LocaleList {
  /// Build from untyped config. Only element zero decides the shape:
  /// a string means codes, an object with a string `code` means records,
  /// anything else yields an empty list.
  pub fn from_value(value: &Value) -> Self {
    let Some(items) = value.as_array() else {
      return Self::default();
    };
    match items.first() {
      Some(Value::String(_)) => {
        Self::Codes(items.iter().filter_map(|v| v.as_str().map(String::from)).collect())
      }
      Some(Value::Object(first)) if first.get("code").is_some_and(Value::is_string) => {
        Self::Records(items.iter().filter_map(entry_from_value).collect())
      }
      _ => Self::default(),
    }
  }

  pub fn is_empty(&self) -> bool {
    match self {
      Self::Codes(codes) => codes.is_empty(),
      Self::Records(records) => records.is_empty(),
    }
  }

  /// Records, if the list carries them. Code lists have no per-locale metadata.
  pub fn records(&self) -> &[LocaleEntry] {
    match self {
      Self::Codes(_) => &[],
      Self::Records(records) => records,
    }
  }

  pub fn contains_code(&self, code: &str) -> bool {
    match self {
      Self::Codes(codes) => codes.iter().any(|c| c == code),
      Self::Records(records) => records.iter().any(|r| r.code == code),
    }
  }
}

impl From<Vec<String>> for LocaleList {
  fn from(codes: Vec<String>) -> Self {
    Self::Codes(codes)
  }
}

impl From<Vec<LocaleEntry>> for LocaleList {
  fn from(records: Vec<LocaleEntry>) -> Self {
    Self::Records(records)
  }
}

impl<'de> Deserialize<'de> for LocaleList {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(Self::from_value(&raw))
  }
}

fn entry_from_value(value: &Value) -> Option<LocaleEntry> {
  let obj = value.as_object()?;
  let field = |key: &str| obj.get(key).and_then(Value::as_str).map(String::from);
  Some(LocaleEntry {
    code: field("code")?,
    domain: field("domain"),
    iso: field("iso"),
    file: field("file"),
  })
}

/// Flatten a locale list into its codes, preserving order.
pub fn get_locale_codes(locales: &LocaleList) -> Vec<String> {
  match locales {
    LocaleList::Codes(codes) => codes.clone(),
    LocaleList::Records(records) => records.iter().map(|r| r.code.clone()).collect(),
  }
}

/// The configured spelling of `raw`, compared ASCII case-insensitively.
pub fn canonical_code<'a>(codes: &'a [String], raw: &str) -> Option<&'a str> {
  codes.iter().map(String::as_str).find(|c| c.eq_ignore_ascii_case(raw))
}
