//! Localization: embedded message catalogs and lookup.
//!
//! Catalogs for English, German, and French are compiled into the binary
//! and parsed once on first use. Messages are addressed by dot path
//! (`"auth.loginTitle"`); a key missing from the active catalog falls back
//! to English, and a key missing everywhere comes back verbatim so the UI
//! shows something searchable instead of a blank.


use once_cell::sync::Lazy;
use serde_json::Value;

/// A supported interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
}

/// All supported locales, in menu order.
pub const SUPPORTED: [Locale; 3] = [Locale::En, Locale::De, Locale::Fr];

impl Locale {
    /// BCP 47 primary language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// Native display name, for the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Fr => "Français",
        }
    }

    /// Parse a language tag, accepting region-qualified forms (`de-DE`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

static EN: Lazy<Value> = Lazy::new(|| parse_catalog(include_str!("locales/en.json"), "en"));
static DE: Lazy<Value> = Lazy::new(|| parse_catalog(include_str!("locales/de.json"), "de"));
static FR: Lazy<Value> = Lazy::new(|| parse_catalog(include_str!("locales/fr.json"), "fr"));

fn parse_catalog(raw: &str, tag: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("embedded {tag} catalog is invalid: {e}"))
}

fn catalog(locale: Locale) -> &'static Value {
    match locale {
        Locale::En => &EN,
        Locale::De => &DE,
        Locale::Fr => &FR,
    }
}

/// Walk a dot-path (`"nav.logout"`) through a nested catalog.
fn lookup<'a>(catalog: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = catalog;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

/// Resolve a message key for a locale, falling back to English and then to
/// the key itself.
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(catalog(locale), key)
        .or_else(|| lookup(&EN, key))
        .map_or_else(|| key.to_owned(), ToOwned::to_owned)
}
