/* src/server/core/rust/src/detect.rs */

use serde::Deserialize;

use crate::locale::canonical_code;

/// Browser-language detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectBrowserLanguage {
  pub cookie_key: String,
  pub use_cookie: bool,
  pub fallback_locale: Option<String>,
}

impl Default for DetectBrowserLanguage {
  fn default() -> Self {
    Self { cookie_key: "i18n_redirected".to_string(), use_cookie: true, fallback_locale: None }
  }
}

/// Detection chain: cookie -> Accept-Language -> fallback locale.
/// Every step answers with a configured code, in its configured spelling;
/// a fallback that is not configured is ignored.
pub fn detect_browser_locale(
  cookie_header: Option<&str>,
  accept_language: Option<&str>,
  codes: &[String],
  config: &DetectBrowserLanguage,
) -> Option<String> {
  let from_cookie = || {
    let header = cookie_header.filter(|_| config.use_cookie)?;
    cookie_value(header, &config.cookie_key).and_then(|v| canonical_code(codes, v))
  };
  let from_header =
    || ranked_languages(accept_language?).into_iter().find_map(|tag| match_tag(codes, tag));
  let fallback = || config.fallback_locale.as_deref().and_then(|f| canonical_code(codes, f));

  from_cookie().or_else(from_header).or_else(fallback).map(str::to_string)
}

fn cookie_value<'h>(header: &'h str, key: &str) -> Option<&'h str> {
  header
    .split(';')
    .filter_map(|pair| pair.split_once('='))
    .find(|(k, _)| k.trim() == key)
    .map(|(_, v)| v.trim().trim_matches('"'))
}

/// Language tags by descending weight; ties keep header order. Zero weights are dropped.
fn ranked_languages(header: &str) -> Vec<&str> {
  let mut weighted: Vec<(&str, f32)> = header
    .split(',')
    .filter_map(|item| {
      let mut params = item.split(';').map(str::trim);
      let tag = params.next().filter(|t| !t.is_empty() && *t != "*")?;
      let weight = match params.find_map(|p| p.strip_prefix("q=")) {
        Some(q) => q.parse::<f32>().ok()?,
        None => 1.0,
      };
      (weight > 0.0).then_some((tag, weight))
    })
    .collect();
  weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
  weighted.into_iter().map(|(tag, _)| tag).collect()
}

// "fr-CA" matches "fr-CA" first, then its primary subtag "fr".
fn match_tag<'c>(codes: &'c [String], tag: &str) -> Option<&'c str> {
  canonical_code(codes, tag)
    .or_else(|| tag.split_once('-').and_then(|(primary, _)| canonical_code(codes, primary)))
}
