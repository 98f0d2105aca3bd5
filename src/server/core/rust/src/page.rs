/* src/server/core/rust/src/page.rs */

use std::collections::{BTreeMap, HashMap};

use regex::RegexBuilder;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::locale::{LocaleList, get_locale_codes};

/// Route as seen by the resolvers. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDescriptor {
  pub name: Option<String>,
  pub path: Option<String>,
  /// Build-time bundle id, e.g. "pages/about". Preferred over `name` as a page key.
  pub chunk_name: Option<String>,
}

impl RouteDescriptor {
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Self::default() }
  }

  pub fn with_path(path: impl Into<String>) -> Self {
    Self { path: Some(path.into()), ..Self::default() }
  }

  pub fn chunk(chunk_name: impl Into<String>) -> Self {
    Self { chunk_name: Some(chunk_name.into()), ..Self::default() }
  }
}

/// Per-locale setting inside a page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalePageEntry {
  /// `false`: the page is not served in this locale.
  Disabled,
  /// Custom path for this locale.
  Path(String),
  /// Any other value; the locale stays enabled without a custom path.
  Unset,
}

impl From<&Value> for LocalePageEntry {
  fn from(value: &Value) -> Self {
    match value {
      Value::Bool(false) => Self::Disabled,
      Value::String(path) => Self::Path(path.clone()),
      _ => Self::Unset,
    }
  }
}

/// Page-level setting in the page options map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEntry {
  /// `false`: locale routing is off for the page.
  Disabled,
  Locales(HashMap<String, LocalePageEntry>),
  /// Any other value; behaves like an object without entries.
  Enabled,
}

impl PageEntry {
  fn locale(&self, code: &str) -> Option<&LocalePageEntry> {
    match self {
      Self::Locales(map) => map.get(code),
      Self::Disabled | Self::Enabled => None,
    }
  }

  fn path_for(&self, code: &str) -> Option<&str> {
    match self.locale(code) {
      Some(LocalePageEntry::Path(path)) => Some(path),
      _ => None,
    }
  }
}

impl From<&Value> for PageEntry {
  fn from(value: &Value) -> Self {
    match value {
      Value::Bool(false) => Self::Disabled,
      Value::Object(obj) => {
        Self::Locales(obj.iter().map(|(k, v)| (k.clone(), LocalePageEntry::from(v))).collect())
      }
      _ => Self::Enabled,
    }
  }
}

impl<'de> Deserialize<'de> for PageEntry {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(Self::from(&raw))
  }
}

/// Page key -> page entry.
pub type PageOptions = HashMap<String, PageEntry>;

/// Locales enabled for one page plus their custom paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPageOptions {
  pub locales: Vec<String>,
  pub paths: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRouting {
  Disabled,
  Localized(ResolvedPageOptions),
}

impl PageRouting {
  pub fn is_disabled(&self) -> bool {
    matches!(self, Self::Disabled)
  }

  pub fn options(&self) -> Option<&ResolvedPageOptions> {
    match self {
      Self::Disabled => None,
      Self::Localized(opts) => Some(opts),
    }
  }

  pub fn allows(&self, code: &str) -> bool {
    self.options().is_some_and(|o| o.locales.iter().any(|l| l == code))
  }
}

/// Key used to look a route up in the page options map.
/// Chunk names lose their first case-insensitive "{pages_dir}/" occurrence.
pub fn page_key(route: &RouteDescriptor, pages_dir: &str) -> Option<String> {
  if let Some(chunk) = route.chunk_name.as_deref().filter(|c| !c.is_empty()) {
    let pattern = format!("{}/", regex::escape(pages_dir));
    return match RegexBuilder::new(&pattern).case_insensitive(true).build() {
      Ok(re) => Some(re.replace(chunk, "").into_owned()),
      Err(e) => {
        tracing::warn!(pages_dir, error = %e, "pages dir pattern rejected, using raw chunk name");
        Some(chunk.to_string())
      }
    };
  }
  route.name.clone().filter(|n| !n.is_empty())
}

/// Compute which locales a page is served in and under which custom paths.
pub fn get_page_options(
  route: &RouteDescriptor,
  pages: &PageOptions,
  locales: &LocaleList,
  pages_dir: &str,
  default_locale: &str,
) -> PageRouting {
  let codes = get_locale_codes(locales);
  let key = page_key(route, pages_dir);

  let Some(entry) = key.as_deref().and_then(|k| pages.get(k)) else {
    return PageRouting::Localized(ResolvedPageOptions { locales: codes, paths: BTreeMap::new() });
  };

  if *entry == PageEntry::Disabled {
    tracing::debug!(page = ?key, "locale routing disabled for page");
    return PageRouting::Disabled;
  }

  let fallback = entry.path_for(default_locale);
  let mut paths = BTreeMap::new();
  let enabled: Vec<String> = codes
    .into_iter()
    .filter(|code| entry.locale(code) != Some(&LocalePageEntry::Disabled))
    .collect();

  for code in &enabled {
    if let Some(path) = entry.path_for(code).or(fallback) {
      paths.insert(code.clone(), path.to_string());
    }
  }

  PageRouting::Localized(ResolvedPageOptions { locales: enabled, paths })
}
