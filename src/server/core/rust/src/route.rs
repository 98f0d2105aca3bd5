/* src/server/core/rust/src/route.rs */

use regex::{Regex, RegexBuilder};

use crate::locale::{LocaleList, get_locale_codes};
use crate::page::RouteDescriptor;

/// Precompiled name/path patterns for recovering a route's locale.
///
/// Name pattern: `{sep}(codes)(?:{sep}{suffix})?$`, e.g. "about___fr" or "about___en___default".
/// Path pattern: `^/(codes)/`, e.g. "/fr/about".
/// Both are case-insensitive; separator, suffix and codes are matched literally.
#[derive(Debug, Clone)]
pub struct RouteLocaleMatcher {
  name_re: Option<Regex>,
  path_re: Option<Regex>,
}

impl RouteLocaleMatcher {
  pub fn new(separator: &str, default_suffix: &str, locales: &LocaleList) -> Self {
    let codes = get_locale_codes(locales);
    let alternation = codes.iter().map(String::as_str).map(regex::escape).collect::<Vec<_>>().join("|");
    let sep = regex::escape(separator);
    let suffix = regex::escape(default_suffix);

    let name_re = build(&format!("{sep}({alternation})(?:{sep}{suffix})?$"));
    let path_re = build(&format!("^/({alternation})/"));
    Self { name_re, path_re }
  }

  /// The route name wins when present; the path is only consulted for unnamed routes.
  /// An empty name or path counts as absent.
  pub fn locale_of(&self, route: &RouteDescriptor) -> Option<String> {
    if let Some(name) = non_empty(route.name.as_deref()) {
      return capture(self.name_re.as_ref()?, name);
    }
    if let Some(path) = non_empty(route.path.as_deref()) {
      return capture(self.path_re.as_ref()?, path);
    }
    None
  }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
  s.filter(|s| !s.is_empty())
}

fn build(pattern: &str) -> Option<Regex> {
  match RegexBuilder::new(pattern).case_insensitive(true).build() {
    Ok(re) => Some(re),
    Err(e) => {
      tracing::warn!(pattern, error = %e, "route locale pattern rejected");
      None
    }
  }
}

// An empty locale list compiles to `()`, whose empty capture is no locale.
fn capture(re: &Regex, haystack: &str) -> Option<String> {
  let m = re.captures(haystack)?.get(1)?;
  if m.as_str().is_empty() { None } else { Some(m.as_str().to_string()) }
}

/// One-shot form of [`RouteLocaleMatcher::locale_of`].
pub fn get_locale_from_route(
  route: &RouteDescriptor,
  separator: &str,
  default_suffix: &str,
  locales: &LocaleList,
) -> Option<String> {
  RouteLocaleMatcher::new(separator, default_suffix, locales).locale_of(route)
}
