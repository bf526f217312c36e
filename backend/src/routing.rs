//! Locale-prefixed URL routing.
//!
//! Every page lives under `/{locale}/...`. Requests without a supported
//! prefix are redirected, and a stored preference that disagrees with the URL
//! redirects once per browser session.

use crate::config::SiteConfig;
use crate::locale::{Locale, SupportedLocales};
use fluent_langneg::{
    accepted_languages, convert_vec_str_to_langids_lossy, negotiate_languages, NegotiationStrategy,
};

/// Long-lived cookie holding the visitor's chosen locale.
pub const PREFERENCE_COOKIE: &str = "NEXT_LOCALE";
/// Session cookie: set once the preference has been applied (or explicitly
/// overridden) in this session.
pub const SYNCED_COOKIE: &str = "locale_synced";

/// What the request carries besides its path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleHints<'a> {
    pub accept_language: Option<&'a str>,
    pub preference: Option<&'a str>,
    pub synced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: Locale,
    /// `Some(location)` when the request must be redirected.
    pub redirect: Option<String>,
    /// Locale to persist in the preference cookie.
    pub remember: Option<Locale>,
    pub mark_synced: bool,
}

/// Paths that are never locale-prefixed: the API, health checks, SEO files
/// and anything that looks like a static asset.
pub fn is_localizable(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return false;
    }
    if matches!(path, "/health" | "/robots.txt" | "/sitemap.xml" | "/favicon.ico") {
        return false;
    }
    let last = path.rsplit('/').next().unwrap_or("");
    !last.contains('.')
}

/// Splits a leading supported locale segment off `path`. The remainder keeps
/// its leading `/` (or is empty for `/ar`).
pub fn split_locale<'p>(path: &'p str, locales: &SupportedLocales) -> (Option<Locale>, &'p str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };
    match locales.match_segment(segment) {
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

/// `/{locale}{rest}`, with `/` collapsing to `/{locale}`.
pub fn localized_path(locale: Locale, rest: &str) -> String {
    let rest = if rest == "/" { "" } else { rest };
    if rest.is_empty() || rest.starts_with('/') {
        format!("/{}{}", locale.code(), rest)
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}

fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    }
}

/// Slash-less form of a page path that ends in `/`, query kept. `None` for
/// `/` itself and for paths that are already canonical.
pub fn strip_trailing_slash(path: &str, query: &str) -> Option<String> {
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    Some(with_query(trimmed.to_string(), query))
}

/// Rewrites a (possibly unprefixed) path into `target`'s prefix, for the
/// language switcher.
pub fn switch_locale_path(path: &str, target: Locale, locales: &SupportedLocales) -> String {
    let (_, rest) = split_locale(path, locales);
    localized_path(target, rest)
}

/**
 * safe_return_path
 * 只接受站内相对路径（以单个 / 开头），避免开放重定向。
 */
pub fn safe_return_path(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if !raw.starts_with('/') || raw.starts_with("//") || raw.contains('\\') {
        return None;
    }
    Some(raw)
}

/// Best supported match for an `Accept-Language` header.
pub fn negotiate(accept_language: &str, locales: &SupportedLocales) -> Option<Locale> {
    if accept_language.trim().is_empty() {
        return None;
    }
    let requested = accepted_languages::parse(accept_language);
    if requested.is_empty() {
        return None;
    }
    let codes: Vec<&str> = locales.iter().map(|l| l.code()).collect();
    let available = convert_vec_str_to_langids_lossy(codes);
    let matched = negotiate_languages(
        &requested,
        &available,
        None,
        NegotiationStrategy::Filtering,
    );
    matched
        .first()
        .and_then(|langid| locales.parse_supported(&langid.to_string()))
}

/// Decides the effective locale for a page request and whether to redirect.
///
/// Resolving the redirect target with the cookies it sets never redirects
/// again, and neither does resolving it without any cookies.
pub fn resolve(config: &SiteConfig, path: &str, query: &str, hints: &LocaleHints) -> Resolution {
    let locales = &config.locales;
    let detection = config.locale_detection;
    let preferred = if detection {
        hints.preference.and_then(|raw| locales.parse_supported(raw))
    } else {
        None
    };

    match split_locale(path, locales) {
        (Some(url_locale), rest) => match preferred {
            Some(pref) if pref != url_locale && !hints.synced => Resolution {
                locale: pref,
                redirect: Some(with_query(localized_path(pref, rest), query)),
                remember: None,
                mark_synced: true,
            },
            _ => Resolution {
                locale: url_locale,
                redirect: None,
                remember: if detection && preferred.is_none() {
                    Some(url_locale)
                } else {
                    None
                },
                mark_synced: detection && !hints.synced,
            },
        },
        (None, _) => {
            let locale = preferred
                .or_else(|| {
                    if detection {
                        hints
                            .accept_language
                            .and_then(|header| negotiate(header, locales))
                    } else {
                        None
                    }
                })
                .unwrap_or_else(|| locales.default_locale());
            Resolution {
                locale,
                redirect: Some(with_query(localized_path(locale, path), query)),
                remember: if detection && preferred.is_none() {
                    Some(locale)
                } else {
                    None
                },
                mark_synced: detection && !hints.synced,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    fn no_hints() -> LocaleHints<'static> {
        LocaleHints::default()
    }

    #[test]
    fn test_unprefixed_path_redirects_to_default() {
        let r = resolve(&config(), "/products", "", &no_hints());
        assert_eq!(r.locale, Locale::Ar);
        assert_eq!(r.redirect.as_deref(), Some("/ar/products"));
    }

    #[test]
    fn test_root_redirects_to_locale_root() {
        let r = resolve(&config(), "/", "", &no_hints());
        assert_eq!(r.redirect.as_deref(), Some("/ar"));
    }

    #[test]
    fn test_redirect_target_does_not_redirect() {
        for path in ["/", "/products", "/news/3", "/fr/products"] {
            let first = resolve(&config(), path, "", &no_hints());
            let target = first.redirect.unwrap();
            let second = resolve(&config(), &target, "", &no_hints());
            assert!(second.redirect.is_none(), "{} redirected twice", path);
        }
    }

    #[test]
    fn test_redirect_target_with_cookies_does_not_redirect() {
        let hints = LocaleHints {
            accept_language: Some("en-US,en;q=0.9"),
            preference: None,
            synced: false,
        };
        let first = resolve(&config(), "/products", "", &hints);
        assert_eq!(first.redirect.as_deref(), Some("/en/products"));

        let remembered = first.remember.map(|l| l.code());
        let second = resolve(
            &config(),
            "/en/products",
            "",
            &LocaleHints {
                accept_language: hints.accept_language,
                preference: remembered,
                synced: first.mark_synced,
            },
        );
        assert!(second.redirect.is_none());
        assert_eq!(second.locale, Locale::En);
    }

    #[test]
    fn test_unknown_locale_segment_is_a_path_segment() {
        let r = resolve(&config(), "/fr/products", "", &no_hints());
        assert_eq!(r.redirect.as_deref(), Some("/ar/fr/products"));
    }

    #[test]
    fn test_query_is_preserved() {
        let r = resolve(&config(), "/products", "category=river", &no_hints());
        assert_eq!(r.redirect.as_deref(), Some("/ar/products?category=river"));
    }

    #[test]
    fn test_prefixed_path_is_served() {
        let r = resolve(&config(), "/en/news", "", &no_hints());
        assert_eq!(r.locale, Locale::En);
        assert!(r.redirect.is_none());
        assert_eq!(r.remember, Some(Locale::En));
        assert!(r.mark_synced);
    }

    #[test]
    fn test_preference_redirects_once_per_session() {
        let hints = LocaleHints {
            accept_language: None,
            preference: Some("en"),
            synced: false,
        };
        let r = resolve(&config(), "/ar/products", "", &hints);
        assert_eq!(r.redirect.as_deref(), Some("/en/products"));
        assert!(r.mark_synced);

        let later = LocaleHints {
            synced: true,
            ..hints
        };
        let r = resolve(&config(), "/ar/products", "", &later);
        assert!(r.redirect.is_none());
        assert_eq!(r.locale, Locale::Ar);
    }

    #[test]
    fn test_preference_beats_accept_language() {
        let hints = LocaleHints {
            accept_language: Some("ar"),
            preference: Some("en"),
            synced: false,
        };
        let r = resolve(&config(), "/about", "", &hints);
        assert_eq!(r.redirect.as_deref(), Some("/en/about"));
        assert_eq!(r.remember, None);
    }

    #[test]
    fn test_unsupported_preference_is_ignored() {
        let hints = LocaleHints {
            accept_language: None,
            preference: Some("es"),
            synced: false,
        };
        let r = resolve(&config(), "/ar", "", &hints);
        assert!(r.redirect.is_none());
        assert_eq!(r.locale, Locale::Ar);
    }

    #[test]
    fn test_strip_trailing_slash() {
        assert_eq!(strip_trailing_slash("/en/products/", ""), Some("/en/products".to_string()));
        assert_eq!(
            strip_trailing_slash("/ar//", "category=sea"),
            Some("/ar?category=sea".to_string())
        );
        assert_eq!(strip_trailing_slash("/", ""), None);
        assert_eq!(strip_trailing_slash("/en/news", ""), None);
    }

    #[test]
    fn test_detection_disabled_uses_default_only() {
        let config = SiteConfig {
            locale_detection: false,
            ..SiteConfig::default()
        };
        let hints = LocaleHints {
            accept_language: Some("en"),
            preference: Some("en"),
            synced: false,
        };
        let r = resolve(&config, "/products", "", &hints);
        assert_eq!(r.redirect.as_deref(), Some("/ar/products"));
        let r = resolve(&config, "/ar/products", "", &hints);
        assert!(r.redirect.is_none());
        assert_eq!(r.remember, None);
        assert!(!r.mark_synced);
    }

    #[test]
    fn test_negotiate() {
        let locales = SupportedLocales::default();
        assert_eq!(negotiate("en-GB,en;q=0.8", &locales), Some(Locale::En));
        assert_eq!(negotiate("fr-FR,ar;q=0.5", &locales), Some(Locale::Ar));
        assert_eq!(negotiate("fr-FR,de", &locales), None);
        assert_eq!(negotiate("", &locales), None);
    }

    #[test]
    fn test_split_locale() {
        let locales = SupportedLocales::default();
        assert_eq!(split_locale("/ar", &locales), (Some(Locale::Ar), ""));
        assert_eq!(split_locale("/en/products/2", &locales), (Some(Locale::En), "/products/2"));
        assert_eq!(split_locale("/english/x", &locales), (None, "/english/x"));
    }

    #[test]
    fn test_switch_locale_path() {
        let locales = SupportedLocales::default();
        assert_eq!(switch_locale_path("/ar/products/2", Locale::En, &locales), "/en/products/2");
        assert_eq!(switch_locale_path("/en", Locale::Ar, &locales), "/ar");
        assert_eq!(switch_locale_path("/news", Locale::En, &locales), "/en/news");
    }

    #[test]
    fn test_is_localizable() {
        assert!(is_localizable("/products"));
        assert!(is_localizable("/"));
        assert!(!is_localizable("/api/locales"));
        assert!(!is_localizable("/sitemap.xml"));
        assert!(!is_localizable("/images/tilapia.jpg"));
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path("/ar/news"), Some("/ar/news"));
        assert_eq!(safe_return_path("//evil.example"), None);
        assert_eq!(safe_return_path("https://evil.example"), None);
    }
}
