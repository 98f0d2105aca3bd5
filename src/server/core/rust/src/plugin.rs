/* src/server/core/rust/src/plugin.rs */

use std::sync::Arc;

use serde_json::Value;

use crate::detect::detect_browser_locale;
use crate::domain::{HostSource, get_locale_domain, resolve_hostname};
use crate::errors::I18nError;
use crate::locale::canonical_code;
use crate::options::I18nOptions;
use crate::page::{PageRouting, RouteDescriptor, get_page_options};
use crate::route::RouteLocaleMatcher;
use crate::store::{MemoryStore, Store, sync_store};

/// Looks up translation messages for a locale. Storage and formatting stay with the caller.
pub type MessagesFn = Arc<dyn Fn(&str) -> Option<Value> + Send + Sync>;

/// Builds a fresh store for each request.
pub type StoreFactory = Arc<dyn Fn() -> Arc<dyn Store> + Send + Sync>;

/// Request-derived inputs for locale resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestInfo<'a> {
  pub route: Option<&'a RouteDescriptor>,
  pub host: Option<&'a HostSource>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
  Domain,
  Route,
  Browser,
  Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
  /// None only when no locales are configured at all.
  pub locale: Option<String>,
  pub source: LocaleSource,
  pub page: PageRouting,
}

/// Configured i18n plugin: options plus the hooks the host application supplies.
pub struct I18n {
  options: I18nOptions,
  matcher: RouteLocaleMatcher,
  messages: Option<MessagesFn>,
  store_factory: Option<StoreFactory>,
}

impl I18n {
  pub fn new(options: I18nOptions) -> Self {
    let matcher = RouteLocaleMatcher::new(
      &options.routes_name_separator,
      &options.default_locale_route_name_suffix,
      &options.locales,
    );
    Self { options, matcher, messages: None, store_factory: None }
  }

  pub fn messages(mut self, f: MessagesFn) -> Self {
    self.messages = Some(f);
    self
  }

  pub fn store_factory(mut self, f: StoreFactory) -> Self {
    self.store_factory = Some(f);
    self
  }

  /// Use a fresh [`MemoryStore`] per request, named after the configured store module.
  pub fn memory_store(self) -> Self {
    let module = self.options.store.as_ref().map(|v| v.module_name.clone()).unwrap_or_default();
    self.store_factory(Arc::new(move || Arc::new(MemoryStore::new(module.clone())) as Arc<dyn Store>))
  }

  pub fn options(&self) -> &I18nOptions {
    &self.options
  }

  pub fn matcher(&self) -> &RouteLocaleMatcher {
    &self.matcher
  }

  pub fn new_store(&self) -> Option<Arc<dyn Store>> {
    self.store_factory.as_ref().map(|f| f())
  }

  /// Resolution order: domain (differentDomains) or route, then browser
  /// detection when enabled, then the default locale.
  pub fn resolve(&self, req: &RequestInfo<'_>) -> ResolvedLocale {
    let opts = &self.options;
    let default_route = RouteDescriptor::default();
    let route = req.route.unwrap_or(&default_route);

    let page = get_page_options(
      route,
      &opts.pages,
      &opts.locales,
      &opts.pages_dir,
      opts.default_locale.as_deref().unwrap_or_default(),
    );

    let (locale, source) = self.primary_locale(route, req.host);
    if let Some(locale) = locale {
      return ResolvedLocale { locale: Some(locale), source, page };
    }

    if let Some(ref detect) = opts.detect_browser_language {
      let codes = opts.locale_codes();
      if let Some(locale) =
        detect_browser_locale(req.cookie_header, req.accept_language, &codes, detect)
      {
        tracing::debug!(%locale, "locale from browser detection");
        return ResolvedLocale { locale: Some(locale), source: LocaleSource::Browser, page };
      }
    }

    ResolvedLocale { locale: opts.fallback_locale(), source: LocaleSource::Default, page }
  }

  fn primary_locale(
    &self,
    route: &RouteDescriptor,
    host: Option<&HostSource>,
  ) -> (Option<String>, LocaleSource) {
    if self.options.different_domains {
      let hostname = host.and_then(|h| resolve_hostname(h, self.options.forwarded_host));
      let locale = get_locale_domain(&self.options.locales, hostname.as_deref());
      tracing::debug!(?hostname, ?locale, "locale from domain");
      (locale, LocaleSource::Domain)
    } else {
      // Matching ignores case; page rules and messages are keyed by the configured code.
      let codes = self.options.locale_codes();
      let locale = self.matcher.locale_of(route).map(|raw| match canonical_code(&codes, &raw) {
        Some(code) => code.to_string(),
        None => raw,
      });
      tracing::debug!(?route.name, ?route.path, ?locale, "locale from route");
      (locale, LocaleSource::Route)
    }
  }

  /// Push `locale` and its messages into `store` per the configured sync flags.
  pub async fn sync(&self, store: &dyn Store, locale: &str) -> Result<(), I18nError> {
    let messages = self.messages.as_ref().and_then(|f| f(locale));
    sync_store(Some(store), self.options.store.as_ref(), Some(locale), messages.as_ref()).await
  }
}

/// Locale from the request host alone, honouring `forwardedHost`.
pub fn locale_from_host(options: &I18nOptions, source: &HostSource) -> Option<String> {
  let hostname = resolve_hostname(source, options.forwarded_host);
  get_locale_domain(&options.locales, hostname.as_deref())
}
