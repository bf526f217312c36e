use crate::locale::{Locale, SupportedLocales};
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Public origin used for canonical links and the sitemap, no trailing `/`.
    pub site_url: String,
    /// Served locales. The default is always [`Locale::BASE`], the locale
    /// whose record fields carry no suffix.
    pub locales: SupportedLocales,
    /// When off, unprefixed paths always go to the default locale and stored
    /// preferences never redirect.
    pub locale_detection: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            site_url: "http://localhost:8080".to_string(),
            locales: SupportedLocales::default(),
            locale_detection: true,
        }
    }
}

/**
 * normalize_base_url
 * 规范化站点 base url（去掉末尾的 /），便于拼接 path。
 */
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT {:?}", raw))?,
            None => defaults.port,
        };
        let site_url = get("SITE_URL")
            .map(|raw| normalize_base_url(&raw))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| format!("http://{}:{}", host, port));

        let supported = match get("SUPPORTED_LOCALES") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(|code| {
                    code.parse::<Locale>()
                        .with_context(|| "invalid SUPPORTED_LOCALES".to_string())
                })
                .collect::<Result<Vec<_>>>()?,
            None => defaults.locales.iter().collect(),
        };
        let default_locale = match get("DEFAULT_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .context("invalid DEFAULT_LOCALE")?,
            None => defaults.locales.default_locale(),
        };
        if default_locale != Locale::BASE {
            anyhow::bail!(
                "DEFAULT_LOCALE must be {}: content base values are written in it",
                Locale::BASE
            );
        }
        let locales = SupportedLocales::new(supported, default_locale)?;

        let locale_detection = match get("LOCALE_DETECTION") {
            Some(raw) => parse_flag(&raw).context("invalid LOCALE_DETECTION")?,
            None => defaults.locale_detection,
        };

        Ok(Self {
            host,
            port,
            site_url,
            locales,
            locale_detection,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
