/* src/server/adapter/axum/src/lib.rs */

mod error;
mod extract;
mod middleware;

use std::sync::Arc;

use seam_i18n::I18n;

pub use error::AxumError;
pub use extract::Locale;
pub use middleware::{LocaleContext, host_source, i18n_middleware, route_descriptor};
/// Re-export seam-i18n core for convenience
pub use seam_i18n;

/// Extension trait that installs the i18n middleware on an Axum router.
pub trait WithI18n {
  fn with_i18n(self, i18n: I18n) -> Self;
}

impl<S> WithI18n for axum::Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  fn with_i18n(self, i18n: I18n) -> Self {
    let opts = i18n.options();
    tracing::info!(
      locales = ?opts.locale_codes(),
      default = ?opts.default_locale,
      different_domains = opts.different_domains,
      "i18n middleware installed"
    );
    self.layer(axum::middleware::from_fn_with_state(Arc::new(i18n), i18n_middleware))
  }
}
