/* src/server/core/rust/src/domain.rs */

use http::Uri;

use crate::locale::LocaleList;

/// Where the current hostname comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
  /// Server-side rendering: raw `Host` and `X-Forwarded-Host` header values.
  Request { host: Option<String>, forwarded_host: Option<String> },
  /// Client-side: the full document URL.
  Document { href: String },
}

/// Hostname (with port, if any) for domain lookups.
/// With `use_forwarded_host`, requests report only the forwarded header.
pub fn resolve_hostname(source: &HostSource, use_forwarded_host: bool) -> Option<String> {
  match source {
    HostSource::Request { host, forwarded_host } => {
      if use_forwarded_host { forwarded_host.clone() } else { host.clone() }
    }
    HostSource::Document { href } => {
      let uri: Uri = href.parse().ok()?;
      let authority = uri.authority()?;
      Some(match authority.port_u16() {
        Some(port) => format!("{}:{port}", authority.host()),
        None => authority.host().to_string(),
      })
    }
  }
}

/// Code of the first locale record whose `domain` equals `hostname`.
pub fn get_locale_domain(locales: &LocaleList, hostname: Option<&str>) -> Option<String> {
  let hostname = hostname?;
  let found = locales.records().iter().find(|r| r.domain.as_deref() == Some(hostname));
  match found {
    Some(entry) => Some(entry.code.clone()),
    None => {
      tracing::debug!(hostname, "no locale configured for domain");
      None
    }
  }
}
