// Internationalization module: UI strings for every page, loaded from Fluent resources

use crate::locale::Locale;
use fluent::concurrent::FluentBundle;
use fluent::{FluentArgs, FluentResource};
use std::collections::{BTreeMap, HashMap};

const RESOURCES: [(Locale, &str); 3] = [
    (Locale::Ar, include_str!("../locales/ar.ftl")),
    (Locale::En, include_str!("../locales/en.ftl")),
    (Locale::Es, include_str!("../locales/es.ftl")),
];

const FALLBACK: Locale = Locale::En;

/// Every message id the site uses. `/api/{locale}/messages` exports exactly
/// these, and the tests check each resource defines all of them.
pub const MESSAGE_KEYS: &[&str] = &[
    "site_name",
    "site_tagline",
    "nav_home",
    "nav_about",
    "nav_products",
    "nav_certificates",
    "nav_markets",
    "nav_news",
    "nav_contact",
    "page_home_title",
    "page_home_description",
    "page_about_title",
    "page_about_description",
    "page_products_title",
    "page_products_description",
    "page_certificates_title",
    "page_certificates_description",
    "page_markets_title",
    "page_markets_description",
    "page_news_title",
    "page_news_description",
    "page_contact_title",
    "page_contact_description",
    "filter_all",
    "category_river",
    "category_sea",
    "category_farmed",
    "products_empty",
    "product_sizes",
    "product_packaging",
    "product_season",
    "certificate_kind_quality",
    "certificate_kind_safety",
    "certificate_kind_export",
    "certificates_empty",
    "market_status_active",
    "market_status_expanding",
    "markets_empty",
    "news_category_company",
    "news_category_industry",
    "news_category_events",
    "news_empty",
    "error_not_found",
    "error_product_not_found",
    "error_article_not_found",
    "error_unsupported_locale",
    "error_invalid_request",
    "error_server",
];

/// Navigation labels, included in every page payload.
pub const NAV_KEYS: &[&str] = &[
    "site_name",
    "site_tagline",
    "nav_home",
    "nav_about",
    "nav_products",
    "nav_certificates",
    "nav_markets",
    "nav_news",
    "nav_contact",
];

pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl I18n {
    pub fn new() -> anyhow::Result<Self> {
        let mut bundles = HashMap::new();

        for (locale, source) in RESOURCES {
            let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
                anyhow::anyhow!("failed to parse {}.ftl: {:?}", locale, errors)
            })?;
            let mut bundle = FluentBundle::new_concurrent(vec![locale.langid()]);
            // Values are embedded in JSON, not mixed into bidi text here.
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                anyhow::anyhow!("failed to load {}.ftl: {:?}", locale, errors)
            })?;
            bundles.insert(locale, bundle);
        }

        Ok(Self { bundles })
    }

    fn lookup(&self, locale: Locale, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::warn!("fluent errors formatting {} for {}: {:?}", key, locale, errors);
        }
        Some(value.into_owned())
    }

    /**
     * get
     * 按 locale 取翻译；缺失时回退英文，再缺失返回 key 本身。
     */
    pub fn get(&self, locale: Locale, key: &str) -> String {
        self.format(locale, key, None)
    }

    pub fn format(&self, locale: Locale, key: &str, args: Option<&FluentArgs>) -> String {
        self.lookup(locale, key, args)
            .or_else(|| self.lookup(FALLBACK, key, args))
            .unwrap_or_else(|| key.to_string())
    }

    pub fn select(&self, locale: Locale, keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .map(|key| (key.to_string(), self.get(locale, key)))
            .collect()
    }

    pub fn all(&self, locale: Locale) -> BTreeMap<String, String> {
        self.select(locale, MESSAGE_KEYS)
    }
}
