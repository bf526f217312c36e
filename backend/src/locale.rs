use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;
use utoipa::ToSchema;

/// A display language the site can carry content for.
///
/// Arabic is the base locale: content tables store it unsuffixed and every
/// other locale is an optional alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
    Es,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub const BASE: Locale = Locale::Ar;
    pub const ALL: [Locale; 3] = [Locale::Ar, Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En | Locale::Es => Direction::Ltr,
        }
    }

    /// Native display name, used by the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Ar => "العربية",
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Open Graph `og:locale` value.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Ar => "ar_EG",
            Locale::En => "en_US",
            Locale::Es => "es_ES",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    /// Accepts bare codes and region-qualified tags (`en-US`, `ar_EG`),
    /// case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lang = raw
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(anyhow::anyhow!("unsupported locale: {:?}", raw)),
        }
    }
}

/// The locales a deployment actually serves, with the one used when nothing
/// else resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
    locales: Vec<Locale>,
    default: Locale,
}

impl Default for SupportedLocales {
    fn default() -> Self {
        Self {
            locales: vec![Locale::Ar, Locale::En],
            default: Locale::Ar,
        }
    }
}

impl SupportedLocales {
    pub fn new(locales: Vec<Locale>, default: Locale) -> anyhow::Result<Self> {
        let mut deduped: Vec<Locale> = Vec::with_capacity(locales.len());
        for locale in locales {
            if !deduped.contains(&locale) {
                deduped.push(locale);
            }
        }
        if !deduped.contains(&default) {
            anyhow::bail!(
                "default locale {} is not in the supported set {:?}",
                default,
                deduped.iter().map(|l| l.code()).collect::<Vec<_>>()
            );
        }
        Ok(Self {
            locales: deduped,
            default,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().copied()
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }

    /// Matches a path segment exactly against the supported codes. Region
    /// tags and other casing are ordinary path segments, not locales.
    pub fn match_segment(&self, segment: &str) -> Option<Locale> {
        self.iter().find(|l| l.code() == segment)
    }

    /// Parses a stored preference, ignoring anything outside the set.
    pub fn parse_supported(&self, raw: &str) -> Option<Locale> {
        raw.parse::<Locale>().ok().filter(|l| self.contains(*l))
    }
}
