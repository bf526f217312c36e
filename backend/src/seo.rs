//! Page metadata, schema.org structured data, sitemap and robots.txt.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::locale::{Direction, Locale};
use crate::models::{NewsArticle, Product};
use crate::routing::localized_path;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

/// Locale-independent page paths, relative to the locale prefix.
pub const STATIC_PAGES: &[&str] = &[
    "",
    "/about",
    "/products",
    "/certificates",
    "/markets",
    "/news",
    "/contact",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub og_locale: String,
    pub og_locale_alternates: Vec<String>,
    pub og_image: Option<String>,
    pub dir: Direction,
    /// JSON-LD documents, one per `<script type="application/ld+json">`.
    #[schema(value_type = Vec<Object>)]
    pub structured_data: Vec<Value>,
}

pub fn absolute_url(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.site_url, path)
}

pub fn page_url(config: &SiteConfig, locale: Locale, rest: &str) -> String {
    absolute_url(config, &localized_path(locale, rest))
}

/// `hreflang` links for every supported locale plus `x-default`.
pub fn alternates(config: &SiteConfig, rest: &str) -> Vec<AlternateLink> {
    let mut links: Vec<AlternateLink> = config
        .locales
        .iter()
        .map(|l| AlternateLink {
            hreflang: l.code().to_string(),
            href: page_url(config, l, rest),
        })
        .collect();
    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: page_url(config, config.locales.default_locale(), rest),
    });
    links
}

/**
 * page_meta
 * 生成页面 SEO 元信息；首页标题仅使用站点名，其余页面为 "页面 | 站点名"。
 */
pub fn page_meta(
    config: &SiteConfig,
    i18n: &I18n,
    locale: Locale,
    rest: &str,
    title: &str,
    description: &str,
) -> SeoMeta {
    let site_name = i18n.get(locale, "site_name");
    let title = if rest.is_empty() || title.is_empty() {
        format!("{} | {}", site_name, i18n.get(locale, "site_tagline"))
    } else {
        format!("{} | {}", title, site_name)
    };

    SeoMeta {
        title,
        description: description.to_string(),
        canonical: page_url(config, locale, rest),
        alternates: alternates(config, rest),
        og_locale: locale.og_locale().to_string(),
        og_locale_alternates: config
            .locales
            .iter()
            .filter(|l| *l != locale)
            .map(|l| l.og_locale().to_string())
            .collect(),
        og_image: None,
        dir: locale.direction(),
        structured_data: Vec::new(),
    }
}

impl SeoMeta {
    pub fn with_image(mut self, url: String) -> Self {
        self.og_image = Some(url);
        self
    }

    pub fn with_structured_data(mut self, value: Value) -> Self {
        self.structured_data.push(value);
        self
    }
}

fn organization_id(config: &SiteConfig) -> String {
    format!("{}/#organization", config.site_url)
}

pub fn organization_ld(config: &SiteConfig, catalog: &Catalog, locale: Locale) -> Value {
    let company = catalog.company();
    let languages: Vec<&str> = config.locales.iter().map(|l| l.code()).collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "@id": organization_id(config),
        "name": company.name.get(locale),
        "legalName": company.legal_name,
        "url": page_url(config, locale, ""),
        "logo": absolute_url(config, "/images/logo.png"),
        "foundingDate": company.founded.to_string(),
        "email": company.email,
        "telephone": company.phone,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": company.address.get(locale),
            "addressCountry": "EG"
        },
        "contactPoint": [{
            "@type": "ContactPoint",
            "telephone": company.phone,
            "email": company.email,
            "contactType": "sales",
            "availableLanguage": languages
        }]
    })
}

pub fn product_ld(
    config: &SiteConfig,
    catalog: &Catalog,
    i18n: &I18n,
    locale: Locale,
    product: &Product,
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name.get(locale),
        "description": product.description.get(locale),
        "sku": product.slug,
        "image": absolute_url(config, product.image),
        "url": page_url(config, locale, &format!("/products/{}", product.slug)),
        "category": i18n.get(locale, product.category.message_key()),
        "brand": {
            "@type": "Brand",
            "name": catalog.company().name.get(locale)
        },
        "manufacturer": { "@id": organization_id(config) },
        "countryOfOrigin": "EG",
        "additionalProperty": [{
            "@type": "PropertyValue",
            "name": "scientificName",
            "value": product.scientific_name
        }]
    })
}

pub fn article_ld(config: &SiteConfig, catalog: &Catalog, locale: Locale, article: &NewsArticle) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": article.title.get(locale),
        "description": article.excerpt.get(locale),
        "image": [absolute_url(config, article.image)],
        "datePublished": article.published,
        "inLanguage": locale.code(),
        "mainEntityOfPage": page_url(config, locale, &format!("/news/{}", article.slug)),
        "publisher": {
            "@type": "Organization",
            "@id": organization_id(config),
            "name": catalog.company().name.get(locale)
        }
    })
}

/// `ItemList` for listing pages: `(name, absolute url)` in display order.
pub fn item_list_ld(items: &[(String, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(idx, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": name,
                "url": url
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": elements
    })
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn sitemap_paths(catalog: &Catalog) -> Vec<String> {
    let mut paths: Vec<String> = STATIC_PAGES.iter().map(|p| p.to_string()).collect();
    paths.extend(
        catalog
            .all_products()
            .iter()
            .map(|p| format!("/products/{}", urlencoding::encode(p.slug))),
    );
    paths.extend(
        catalog
            .all_news()
            .iter()
            .map(|n| format!("/news/{}", urlencoding::encode(n.slug))),
    );
    paths
}

/// One `<url>` per page and locale, each listing its `hreflang` siblings.
pub fn sitemap_xml(config: &SiteConfig, catalog: &Catalog) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for rest in sitemap_paths(catalog) {
        let links = alternates(config, &rest);
        for locale in config.locales.iter() {
            out.push_str("  <url>\n");
            out.push_str(&format!(
                "    <loc>{}</loc>\n",
                xml_escape(&page_url(config, locale, &rest))
            ));
            for link in &links {
                out.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    xml_escape(&link.hreflang),
                    xml_escape(&link.href)
                ));
            }
            out.push_str("  </url>\n");
        }
    }

    out.push_str("</urlset>\n");
    out
}

pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
        absolute_url(config, "/sitemap.xml")
    )
}
