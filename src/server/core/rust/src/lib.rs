/* src/server/core/rust/src/lib.rs */

pub mod detect;
pub mod domain;
pub mod errors;
pub mod locale;
pub mod options;
pub mod page;
pub mod plugin;
pub mod route;
pub mod store;

// Re-exports for ergonomic use
pub use detect::{DetectBrowserLanguage, detect_browser_locale};
pub use domain::{HostSource, get_locale_domain, resolve_hostname};
pub use errors::I18nError;
pub use locale::{LocaleEntry, LocaleList, canonical_code, get_locale_codes};
pub use options::{I18nOptions, load_i18n_options};
pub use page::{
  LocalePageEntry, PageEntry, PageOptions, PageRouting, ResolvedPageOptions, RouteDescriptor,
  get_page_options,
};
pub use plugin::{
  I18n, LocaleSource, MessagesFn, RequestInfo, ResolvedLocale, StoreFactory, locale_from_host,
};
pub use route::{RouteLocaleMatcher, get_locale_from_route};
pub use store::{
  BoxFuture, I18nState, MemoryStore, Store, StoreSyncOptions, sync_route_params, sync_store,
};
