use crate::locale::{Direction, Locale};
use crate::localize::{owned_list, Localize, LocalizedList, LocalizedText};
use crate::seo::SeoMeta;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    River,
    Sea,
    Farmed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CertificateKind {
    Quality,
    Safety,
    Export,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Active,
    Expanding,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Company,
    Industry,
    Events,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::River,
        ProductCategory::Sea,
        ProductCategory::Farmed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ProductCategory::River => "river",
            ProductCategory::Sea => "sea",
            ProductCategory::Farmed => "farmed",
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            ProductCategory::River => "category_river",
            ProductCategory::Sea => "category_sea",
            ProductCategory::Farmed => "category_farmed",
        }
    }
}

impl CertificateKind {
    pub const ALL: [CertificateKind; 3] = [
        CertificateKind::Quality,
        CertificateKind::Safety,
        CertificateKind::Export,
    ];

    pub fn code(self) -> &'static str {
        match self {
            CertificateKind::Quality => "quality",
            CertificateKind::Safety => "safety",
            CertificateKind::Export => "export",
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            CertificateKind::Quality => "certificate_kind_quality",
            CertificateKind::Safety => "certificate_kind_safety",
            CertificateKind::Export => "certificate_kind_export",
        }
    }
}

impl MarketStatus {
    pub const ALL: [MarketStatus; 2] = [MarketStatus::Active, MarketStatus::Expanding];

    pub fn code(self) -> &'static str {
        match self {
            MarketStatus::Active => "active",
            MarketStatus::Expanding => "expanding",
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            MarketStatus::Active => "market_status_active",
            MarketStatus::Expanding => "market_status_expanding",
        }
    }
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 3] = [
        NewsCategory::Company,
        NewsCategory::Industry,
        NewsCategory::Events,
    ];

    pub fn code(self) -> &'static str {
        match self {
            NewsCategory::Company => "company",
            NewsCategory::Industry => "industry",
            NewsCategory::Events => "events",
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            NewsCategory::Company => "news_category_company",
            NewsCategory::Industry => "news_category_industry",
            NewsCategory::Events => "news_category_events",
        }
    }
}

/// A filterable enum: parsed from its lowercase code.
pub trait Facet: Copy + PartialEq + Sized + 'static {
    const VALUES: &'static [Self];

    fn code(self) -> &'static str;
    fn message_key(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.code().eq_ignore_ascii_case(raw))
    }
}

macro_rules! impl_facet {
    ($($ty:ident),*) => {
        $(
            impl Facet for $ty {
                const VALUES: &'static [Self] = &$ty::ALL;

                fn code(self) -> &'static str {
                    $ty::code(self)
                }

                fn message_key(self) -> &'static str {
                    $ty::message_key(self)
                }
            }

            impl FromStr for $ty {
                type Err = anyhow::Error;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    <$ty as Facet>::parse(raw)
                        .ok_or_else(|| anyhow::anyhow!("unknown {}: {:?}", stringify!($ty), raw))
                }
            }
        )*
    };
}

impl_facet!(ProductCategory, CertificateKind, MarketStatus, NewsCategory);

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: u32,
    pub slug: &'static str,
    pub name: LocalizedText,
    pub scientific_name: &'static str,
    pub description: LocalizedText,
    pub category: ProductCategory,
    pub origin: LocalizedText,
    pub season: LocalizedText,
    pub sizes: LocalizedList,
    pub packaging: LocalizedList,
    pub image: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Certificate {
    pub id: u32,
    pub name: LocalizedText,
    pub issuer: LocalizedText,
    pub description: LocalizedText,
    pub kind: CertificateKind,
    /// ISO `YYYY-MM-DD`.
    pub valid_until: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Market {
    pub id: u32,
    pub region: LocalizedText,
    pub countries: LocalizedList,
    pub description: LocalizedText,
    pub status: MarketStatus,
    pub since: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct NewsArticle {
    pub id: u32,
    pub slug: &'static str,
    pub title: LocalizedText,
    pub excerpt: LocalizedText,
    pub body: LocalizedText,
    pub category: NewsCategory,
    /// ISO `YYYY-MM-DD`.
    pub published: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CompanyStat {
    pub label: LocalizedText,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CompanyProfile {
    pub name: LocalizedText,
    pub legal_name: &'static str,
    pub about: LocalizedText,
    pub address: LocalizedText,
    pub founded: u16,
    pub phone: &'static str,
    pub email: &'static str,
    /// International format without `+`, as used by wa.me links.
    pub whatsapp: &'static str,
    pub working_hours: LocalizedText,
    pub stats: &'static [CompanyStat],
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ProductView {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub category: ProductCategory,
    pub origin: String,
    pub season: String,
    pub sizes: Vec<String>,
    pub packaging: Vec<String>,
    pub image: String,
    pub featured: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CertificateView {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub description: String,
    pub kind: CertificateKind,
    pub valid_until: Option<NaiveDate>,
    /// "Valid until ..." in the page locale; filled in by page handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until_label: Option<String>,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct MarketView {
    pub id: u32,
    pub region: String,
    pub countries: Vec<String>,
    pub description: String,
    pub status: MarketStatus,
    pub since: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct NewsView {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub category: NewsCategory,
    pub published: Option<NaiveDate>,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CompanyStatView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CompanyView {
    pub name: String,
    pub about: String,
    pub address: String,
    pub founded: u16,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    pub stats: Vec<CompanyStatView>,
}

impl Localize for Product {
    type View = ProductView;

    fn localize(&self, locale: Locale) -> ProductView {
        ProductView {
            id: self.id,
            slug: self.slug.to_string(),
            name: self.name.get(locale).to_string(),
            scientific_name: self.scientific_name.to_string(),
            description: self.description.get(locale).to_string(),
            category: self.category,
            origin: self.origin.get(locale).to_string(),
            season: self.season.get(locale).to_string(),
            sizes: owned_list(self.sizes.get(locale)),
            packaging: owned_list(self.packaging.get(locale)),
            image: self.image.to_string(),
            featured: self.featured,
        }
    }
}

impl Localize for Certificate {
    type View = CertificateView;

    fn localize(&self, locale: Locale) -> CertificateView {
        CertificateView {
            id: self.id,
            name: self.name.get(locale).to_string(),
            issuer: self.issuer.get(locale).to_string(),
            description: self.description.get(locale).to_string(),
            kind: self.kind,
            valid_until: parse_iso_date(self.valid_until),
            valid_until_label: None,
            image: self.image.to_string(),
        }
    }
}

impl Localize for Market {
    type View = MarketView;

    fn localize(&self, locale: Locale) -> MarketView {
        MarketView {
            id: self.id,
            region: self.region.get(locale).to_string(),
            countries: owned_list(self.countries.get(locale)),
            description: self.description.get(locale).to_string(),
            status: self.status,
            since: self.since,
            since_label: None,
        }
    }
}

/// List views leave the body out; detail pages fill it in with
/// `NewsArticle::localize_full`.
impl Localize for NewsArticle {
    type View = NewsView;

    fn localize(&self, locale: Locale) -> NewsView {
        NewsView {
            id: self.id,
            slug: self.slug.to_string(),
            title: self.title.get(locale).to_string(),
            excerpt: self.excerpt.get(locale).to_string(),
            body: None,
            category: self.category,
            published: parse_iso_date(self.published),
            image: self.image.to_string(),
        }
    }
}

impl NewsArticle {
    pub fn localize_full(&self, locale: Locale) -> NewsView {
        NewsView {
            body: Some(self.body.get(locale).to_string()),
            ..self.localize(locale)
        }
    }
}

impl Localize for CompanyProfile {
    type View = CompanyView;

    fn localize(&self, locale: Locale) -> CompanyView {
        CompanyView {
            name: self.name.get(locale).to_string(),
            about: self.about.get(locale).to_string(),
            address: self.address.get(locale).to_string(),
            founded: self.founded,
            phone: self.phone.to_string(),
            email: self.email.to_string(),
            working_hours: self.working_hours.get(locale).to_string(),
            stats: self
                .stats
                .iter()
                .map(|s| CompanyStatView {
                    label: s.label.get(locale).to_string(),
                    value: s.value.to_string(),
                })
                .collect(),
        }
    }
}

/// One entry of a filter bar: the code to send back and its label.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ListContent<T> {
    pub items: Vec<T>,
    /// Matches before any `limit` is applied.
    pub total: usize,
    pub filters: Vec<FilterOption>,
    /// Localized "no results" text, present only when `items` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct HomeContent {
    pub company: CompanyView,
    pub featured_products: Vec<ProductView>,
    pub latest_news: Vec<NewsView>,
    pub markets: Vec<MarketView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AboutContent {
    pub company: CompanyView,
    pub certificates: Vec<CertificateView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductDetailContent {
    pub product: ProductView,
    pub category_label: String,
    pub related: Vec<ProductView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct NewsDetailContent {
    pub article: NewsView,
    pub published_label: Option<String>,
    pub related: Vec<NewsView>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ContactContent {
    pub company: CompanyView,
    pub whatsapp_url: String,
    pub mailto_url: String,
}

/// Everything a localized page needs besides its own content.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Page<T> {
    pub locale: Locale,
    pub dir: Direction,
    pub meta: SeoMeta,
    pub messages: BTreeMap<String, String>,
    pub content: T,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LocaleInfo {
    pub code: Locale,
    pub name: String,
    pub dir: Direction,
    pub is_default: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LocalesResponse {
    pub default: Locale,
    pub locales: Vec<LocaleInfo>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocaleChoiceRequest {
    pub locale: String,
    /// Current page path; the response points at its equivalent in the new
    /// locale.
    pub return_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocaleChoiceResponse {
    pub locale: Locale,
    pub redirect_to: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn error(code: &str, message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            error: Some(ApiError {
                code: code.to_string(),
                trace_id: uuid::Uuid::new_v4().to_string(),
                hint: None,
                detail: None,
            }),
        }
    }
}

/// Documentation shape of error responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmptyApiResponse {
    pub success: bool,
    pub data: Option<()>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessagesApiResponse {
    pub success: bool,
    pub data: Option<BTreeMap<String, String>>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// `river`, `sea`, `farmed` or `all`.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CertificateQuery {
    /// `quality`, `safety`, `export` or `all`.
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MarketQuery {
    /// `active`, `expanding` or `all`.
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NewsQuery {
    /// `company`, `industry`, `events` or `all`.
    pub category: Option<String>,
    pub limit: Option<usize>,
}
