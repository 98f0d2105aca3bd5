/* src/server/core/rust/src/options/tests.rs */

use std::io::Write;

use super::*;
use crate::page::PageEntry;

#[test]
fn defaults_from_empty_object() {
  let opts = I18nOptions::from_json_str("{}").unwrap();
  assert!(opts.locales.is_empty());
  assert_eq!(opts.routes_name_separator, "___");
  assert_eq!(opts.default_locale_route_name_suffix, "default");
  assert_eq!(opts.pages_dir, "pages");
  assert_eq!(opts.store, Some(StoreSyncOptions::default()));
  assert_eq!(opts.detect_browser_language, None);
  assert!(!opts.different_domains);
}

#[test]
fn parse_full_json() {
  let opts = I18nOptions::from_json_str(
    r#"{
      "locales": [
        { "code": "en", "domain": "example.com", "iso": "en-US" },
        { "code": "fr", "domain": "fr.example.com" }
      ],
      "defaultLocale": "en",
      "differentDomains": true,
      "forwardedHost": true,
      "vuex": { "moduleName": "lang", "syncMessages": false },
      "detectBrowserLanguage": { "cookieKey": "lang" },
      "pages": { "about": { "fr": "/a-propos" }, "admin": false }
    }"#,
  )
  .unwrap();
  assert_eq!(opts.locale_codes(), vec!["en", "fr"]);
  assert!(opts.forwarded_host);
  let store = opts.store.as_ref().unwrap();
  assert_eq!(store.module_name, "lang");
  assert!(!store.sync_messages);
  assert_eq!(opts.detect_browser_language.as_ref().unwrap().cookie_key, "lang");
  assert_eq!(opts.pages.get("admin"), Some(&PageEntry::Disabled));
  opts.validate().unwrap();
}

#[test]
fn store_false_disables_sync() {
  let opts = I18nOptions::from_json_str(r#"{ "store": false, "detectBrowserLanguage": true }"#).unwrap();
  assert_eq!(opts.store, None);
  assert_eq!(opts.detect_browser_language, Some(DetectBrowserLanguage::default()));
}

#[test]
fn parse_toml() {
  let opts = I18nOptions::from_toml_str(
    r#"
locales = ["en", "fr"]
defaultLocale = "fr"
routesNameSeparator = "-"

[pages.about]
en = "/about-us"
fr = false
"#,
  )
  .unwrap();
  assert_eq!(opts.locale_codes(), vec!["en", "fr"]);
  assert_eq!(opts.routes_name_separator, "-");
  assert_eq!(opts.fallback_locale().as_deref(), Some("fr"));
  assert!(matches!(opts.pages.get("about"), Some(PageEntry::Locales(_))));
}

#[test]
fn validate_default_not_in_locales() {
  let opts =
    I18nOptions::from_json_str(r#"{ "locales": ["en"], "defaultLocale": "de" }"#).unwrap();
  let err = opts.validate().unwrap_err();
  assert!(err.to_string().contains("defaultLocale \"de\""));
}

#[test]
fn validate_different_domains_needs_domains() {
  let opts = I18nOptions::from_json_str(
    r#"{ "locales": [{ "code": "en", "domain": "example.com" }, { "code": "fr" }], "differentDomains": true }"#,
  )
  .unwrap();
  assert!(opts.validate().unwrap_err().to_string().contains("\"fr\" has no domain"));

  let opts =
    I18nOptions::from_json_str(r#"{ "locales": ["en"], "differentDomains": true }"#).unwrap();
  assert!(opts.validate().is_err());
}

#[test]
fn fallback_locale_uses_first_code() {
  let opts = I18nOptions::from_json_str(r#"{ "locales": ["ja", "en"] }"#).unwrap();
  assert_eq!(opts.fallback_locale().as_deref(), Some("ja"));
  assert_eq!(I18nOptions::default().fallback_locale(), None);
}

#[test]
fn load_from_files() {
  let dir = tempfile::tempdir().unwrap();

  let json_path = dir.path().join("i18n.json");
  let mut f = std::fs::File::create(&json_path).unwrap();
  f.write_all(br#"{ "locales": ["en", "fr"], "defaultLocale": "en" }"#).unwrap();
  assert_eq!(load_i18n_options(&json_path).unwrap().locale_codes(), vec!["en", "fr"]);

  let toml_path = dir.path().join("i18n.toml");
  std::fs::write(&toml_path, "locales = [\"de\"]\ndefaultLocale = \"de\"\n").unwrap();
  assert_eq!(load_i18n_options(&toml_path).unwrap().default_locale.as_deref(), Some("de"));
}

#[test]
fn load_errors() {
  let dir = tempfile::tempdir().unwrap();
  let missing = load_i18n_options(dir.path().join("nope.json")).unwrap_err();
  assert!(matches!(missing, I18nError::Io { .. }));

  let bad = dir.path().join("bad.json");
  std::fs::write(&bad, "{ not json").unwrap();
  assert!(matches!(load_i18n_options(&bad).unwrap_err(), I18nError::Parse { .. }));

  let invalid = dir.path().join("invalid.json");
  std::fs::write(&invalid, r#"{ "locales": ["en"], "defaultLocale": "fr" }"#).unwrap();
  assert!(matches!(load_i18n_options(&invalid).unwrap_err(), I18nError::Config(_)));
}
