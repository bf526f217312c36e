use crate::content::{CERTIFICATES, COMPANY, MARKETS, NEWS, PRODUCTS};
use crate::models::{
    parse_iso_date, Certificate, CertificateKind, CompanyProfile, Facet, Market, MarketStatus,
    NewsArticle, NewsCategory, Product, ProductCategory,
};

/// A filter parsed from a query parameter. Missing, empty and `all` select
/// everything; a value that names no facet selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
    Unknown,
}

impl<T: Facet> Filter<T> {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Filter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => Filter::All,
            Some(v) => T::parse(v).map(Filter::Only).unwrap_or(Filter::Unknown),
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == value,
            Filter::Unknown => false,
        }
    }

    pub fn selected(&self) -> Option<T> {
        match self {
            Filter::Only(v) => Some(*v),
            _ => None,
        }
    }
}

/// Matching records in their original order.
pub fn filter_by<'a, T, P>(items: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).collect()
}

/// Read-only access to the compiled-in content tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    certificates: &'static [Certificate],
    markets: &'static [Market],
    news: &'static [NewsArticle],
    company: &'static CompanyProfile,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: PRODUCTS,
            certificates: CERTIFICATES,
            markets: MARKETS,
            news: NEWS,
            company: &COMPANY,
        }
    }

    pub fn company(&self) -> &'static CompanyProfile {
        self.company
    }

    pub fn products(&self, filter: &Filter<ProductCategory>) -> Vec<&'static Product> {
        filter_by(self.products, |p| filter.matches(p.category))
    }

    pub fn featured_products(&self) -> Vec<&'static Product> {
        filter_by(self.products, |p| p.featured)
    }

    /**
     * find_product
     * 按数字 id 或 slug 查找产品（slug 忽略大小写）。
     */
    pub fn find_product(&self, key: &str) -> Option<&'static Product> {
        let key = key.trim();
        match key.parse::<u32>() {
            Ok(id) => self.products.iter().find(|p| p.id == id),
            Err(_) => self
                .products
                .iter()
                .find(|p| p.slug.eq_ignore_ascii_case(key)),
        }
    }

    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    pub fn certificates(&self, filter: &Filter<CertificateKind>) -> Vec<&'static Certificate> {
        filter_by(self.certificates, |c| filter.matches(c.kind))
    }

    pub fn markets(&self, filter: &Filter<MarketStatus>) -> Vec<&'static Market> {
        filter_by(self.markets, |m| filter.matches(m.status))
    }

    pub fn news(&self, filter: &Filter<NewsCategory>) -> Vec<&'static NewsArticle> {
        filter_by(self.news, |n| filter.matches(n.category))
    }

    /// Like [`Catalog::news`] but newest first; ties keep table order.
    pub fn latest_news(&self, filter: &Filter<NewsCategory>, limit: usize) -> Vec<&'static NewsArticle> {
        let mut articles = self.news(filter);
        articles.sort_by(|a, b| parse_iso_date(b.published).cmp(&parse_iso_date(a.published)));
        articles.truncate(limit);
        articles
    }

    pub fn find_article(&self, key: &str) -> Option<&'static NewsArticle> {
        let key = key.trim();
        match key.parse::<u32>() {
            Ok(id) => self.news.iter().find(|n| n.id == id),
            Err(_) => self.news.iter().find(|n| n.slug.eq_ignore_ascii_case(key)),
        }
    }

    pub fn all_products(&self) -> &'static [Product] {
        self.products
    }

    pub fn all_news(&self) -> &'static [NewsArticle] {
        self.news
    }
}
