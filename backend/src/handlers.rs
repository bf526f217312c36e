use crate::catalog::{Catalog, Filter};
use crate::config::SiteConfig;
use crate::i18n::{I18n, NAV_KEYS};
use crate::locale::Locale;
use crate::localize::{localize_all, Localize};
use crate::models::{
    AboutContent, ApiResponse, CertificateQuery, CertificateView, ContactContent,
    EmptyApiResponse, Facet, FilterOption, HomeContent, ListContent, LocaleChoiceRequest,
    LocaleChoiceResponse, LocaleInfo, LocalesResponse, MarketQuery, MarketView,
    MessagesApiResponse, NewsDetailContent, NewsQuery, NewsView, Page, ProductDetailContent,
    ProductQuery, ProductView,
};
use crate::routing::{
    self, is_localizable, safe_return_path, strip_trailing_slash, switch_locale_path, LocaleHints,
    Resolution, PREFERENCE_COOKIE, SYNCED_COOKIE,
};
use crate::seo::{self, SeoMeta};
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::{get, web, HttpRequest, HttpResponse, HttpResponseBuilder, Responder};
use chrono::{NaiveDate, Utc};
use fluent::FluentArgs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

const FEATURED_LIMIT: usize = 4;
const HOME_NEWS_LIMIT: usize = 3;
const RELATED_LIMIT: usize = 3;
const NEWS_PAGE_LIMIT: usize = 20;

/// Shared, read-only state for every worker.
pub struct AppState {
    pub config: SiteConfig,
    pub i18n: I18n,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            i18n: I18n::new()?,
            catalog: Catalog::new(),
        })
    }
}

/// Locale inputs carried by a request, owned so they outlive the cookie
/// lookups.
struct RequestHints {
    accept_language: Option<String>,
    preference: Option<String>,
    synced: bool,
}

impl RequestHints {
    /**
     * from_request
     * 从请求头和 cookie 提取语言线索（Accept-Language、偏好语言、本会话是否已同步）。
     */
    fn from_request(req: &HttpRequest) -> Self {
        Self {
            accept_language: req
                .headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string()),
            preference: req.cookie(PREFERENCE_COOKIE).map(|c| c.value().to_string()),
            synced: req.cookie(SYNCED_COOKIE).is_some(),
        }
    }

    fn as_hints(&self) -> LocaleHints<'_> {
        LocaleHints {
            accept_language: self.accept_language.as_deref(),
            preference: self.preference.as_deref(),
            synced: self.synced,
        }
    }
}

fn preference_cookie(locale: Locale) -> Cookie<'static> {
    Cookie::build(PREFERENCE_COOKIE, locale.code())
        .path("/")
        .max_age(CookieDuration::days(365))
        .same_site(SameSite::Lax)
        .finish()
}

fn synced_cookie() -> Cookie<'static> {
    Cookie::build(SYNCED_COOKIE, "1")
        .path("/")
        .same_site(SameSite::Lax)
        .finish()
}

fn apply_locale_cookies(builder: &mut HttpResponseBuilder, resolution: &Resolution) {
    if let Some(locale) = resolution.remember {
        builder.cookie(preference_cookie(locale));
    }
    if resolution.mark_synced {
        builder.cookie(synced_cookie());
    }
}

fn redirect_response(location: &str, resolution: &Resolution) -> HttpResponse {
    let mut builder = HttpResponse::TemporaryRedirect();
    builder.insert_header((header::LOCATION, location.to_string()));
    builder.insert_header((header::VARY, "Accept-Language, Cookie"));
    apply_locale_cookies(&mut builder, resolution);
    builder.finish()
}

fn error_response(
    status: StatusCode,
    state: &AppState,
    locale: Locale,
    code: &str,
    key: &str,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()>::error(code, state.i18n.get(locale, key)))
}

/// Locale used for responses to requests that have no locale in their path.
fn fallback_locale(req: &HttpRequest, state: &AppState) -> Locale {
    let hints = RequestHints::from_request(req);
    hints
        .preference
        .as_deref()
        .and_then(|raw| state.config.locales.parse_supported(raw))
        .or_else(|| {
            hints
                .accept_language
                .as_deref()
                .and_then(|h| routing::negotiate(h, &state.config.locales))
        })
        .unwrap_or_else(|| state.config.locales.default_locale())
}

/// Runs the locale resolver for a page request. `Err` carries the response
/// to return as-is (a redirect, or 404 for non-page paths).
fn resolve_page(req: &HttpRequest, state: &AppState) -> Result<Resolution, HttpResponse> {
    let path = req.path();
    if !is_localizable(path) {
        return Err(error_response(
            StatusCode::NOT_FOUND,
            state,
            fallback_locale(req, state),
            "not_found",
            "error_not_found",
        ));
    }

    let hints = RequestHints::from_request(req);
    let resolution = routing::resolve(&state.config, path, req.query_string(), &hints.as_hints());
    match &resolution.redirect {
        Some(location) => {
            log::debug!("locale redirect {} -> {}", path, location);
            Err(redirect_response(location, &resolution))
        }
        None => Ok(resolution),
    }
}

fn page_response<T: Serialize>(resolution: &Resolution, page: Page<T>) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    apply_locale_cookies(&mut builder, resolution);
    builder.insert_header((header::CONTENT_LANGUAGE, page.locale.code()));
    builder.json(ApiResponse::success(page))
}

fn build_page<T>(state: &AppState, locale: Locale, meta: SeoMeta, keys: &[&str], content: T) -> Page<T> {
    let mut messages = state.i18n.select(locale, NAV_KEYS);
    messages.extend(state.i18n.select(locale, keys));
    Page {
        locale,
        dir: locale.direction(),
        meta,
        messages,
        content,
    }
}

fn filter_options<T: Facet>(state: &AppState, locale: Locale, filter: &Filter<T>) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        value: "all".to_string(),
        label: state.i18n.get(locale, "filter_all"),
        active: matches!(filter, Filter::All),
    }];
    options.extend(T::VALUES.iter().map(|v| FilterOption {
        value: v.code().to_string(),
        label: state.i18n.get(locale, v.message_key()),
        active: filter.selected() == Some(*v),
    }));
    options
}

fn list_content<T>(
    state: &AppState,
    locale: Locale,
    items: Vec<T>,
    total: usize,
    filters: Vec<FilterOption>,
    empty_key: &str,
) -> ListContent<T> {
    let empty_message = if items.is_empty() {
        Some(state.i18n.get(locale, empty_key))
    } else {
        None
    };
    ListContent {
        items,
        total,
        filters,
        empty_message,
    }
}

/// Query parameters are read only after the locale gate, so a bad locale
/// always redirects before a bad parameter is rejected.
fn page_query<Q: DeserializeOwned>(
    req: &HttpRequest,
    state: &AppState,
    locale: Locale,
) -> Result<Q, HttpResponse> {
    web::Query::<Q>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|err| {
            log::warn!("rejected query {:?}: {}", req.query_string(), err);
            error_response(
                StatusCode::BAD_REQUEST,
                state,
                locale,
                "invalid_request",
                "error_invalid_request",
            )
        })
}

fn date_label(state: &AppState, locale: Locale, key: &str, date: NaiveDate) -> String {
    let mut args = FluentArgs::new();
    args.set("date", date.format("%Y-%m-%d").to_string());
    state.i18n.format(locale, key, Some(&args))
}

fn label_certificates(state: &AppState, locale: Locale, certificates: &mut [CertificateView]) {
    for certificate in certificates.iter_mut() {
        certificate.valid_until_label = certificate
            .valid_until
            .map(|date| date_label(state, locale, "certificate_valid_until", date));
    }
}

fn label_markets(state: &AppState, locale: Locale, markets: &mut [MarketView]) {
    for market in markets.iter_mut() {
        let mut args = FluentArgs::new();
        args.set("year", market.since.to_string());
        market.since_label = Some(state.i18n.format(locale, "market_since", Some(&args)));
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: String,
}

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthCheckResponse)))]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[utoipa::path(
    get,
    path = "/api/locales",
    responses((status = 200, body = ApiResponse<LocalesResponse>))
)]
pub async fn get_locales(state: web::Data<Arc<AppState>>) -> impl Responder {
    let default = state.config.locales.default_locale();
    let locales = state
        .config
        .locales
        .iter()
        .map(|l| LocaleInfo {
            code: l,
            name: l.native_name().to_string(),
            dir: l.direction(),
            is_default: l == default,
        })
        .collect();
    HttpResponse::Ok().json(ApiResponse::success(LocalesResponse { default, locales }))
}

#[utoipa::path(
    post,
    path = "/api/locale",
    request_body = LocaleChoiceRequest,
    responses(
        (status = 200, body = ApiResponse<LocaleChoiceResponse>),
        (status = 400, body = EmptyApiResponse)
    )
)]
pub async fn choose_locale(
    req: HttpRequest,
    body: web::Json<LocaleChoiceRequest>,
    state: web::Data<Arc<AppState>>,
) -> impl Responder {
    let body = body.into_inner();
    let locale = match state.config.locales.parse_supported(&body.locale) {
        Some(l) => l,
        None => {
            log::warn!("rejected locale choice {:?}", body.locale);
            return error_response(
                StatusCode::BAD_REQUEST,
                &state,
                fallback_locale(&req, &state),
                "unsupported_locale",
                "error_unsupported_locale",
            );
        }
    };

    let return_to = body
        .return_to
        .as_deref()
        .and_then(safe_return_path)
        .unwrap_or("/");
    let (path, query) = match return_to.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (return_to, None),
    };
    let mut redirect_to = switch_locale_path(path, locale, &state.config.locales);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        redirect_to = format!("{}?{}", redirect_to, query);
    }

    HttpResponse::Ok()
        .cookie(preference_cookie(locale))
        .cookie(synced_cookie())
        .json(ApiResponse::success(LocaleChoiceResponse {
            locale,
            redirect_to,
        }))
}

#[utoipa::path(
    get,
    path = "/api/{locale}/messages",
    params(("locale" = String, Path, description = "Supported locale code")),
    responses(
        (status = 200, body = MessagesApiResponse),
        (status = 307, description = "Unsupported locale, redirected to the default locale")
    )
)]
pub async fn get_messages(
    path: web::Path<String>,
    state: web::Data<Arc<AppState>>,
) -> impl Responder {
    let raw = path.into_inner();
    match state.config.locales.match_segment(&raw) {
        Some(locale) => HttpResponse::Ok()
            .insert_header((header::CONTENT_LANGUAGE, locale.code()))
            .json(ApiResponse::success(state.i18n.all(locale))),
        None => {
            let default = state.config.locales.default_locale();
            HttpResponse::TemporaryRedirect()
                .insert_header((
                    header::LOCATION,
                    format!("/api/{}/messages", default.code()),
                ))
                .finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/{locale}",
    params(("locale" = String, Path, description = "Locale prefix")),
    responses(
        (status = 200, body = ApiResponse<Page<HomeContent>>),
        (status = 307, description = "Locale redirect")
    )
)]
pub async fn home_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let catalog = &state.catalog;

    let featured = catalog.featured_products();
    let latest = catalog.latest_news(&Filter::All, HOME_NEWS_LIMIT);
    let mut markets = localize_all(&catalog.markets(&Filter::All), locale);
    label_markets(&state, locale, &mut markets);
    let content = HomeContent {
        company: catalog.company().localize(locale),
        featured_products: localize_all(&featured[..featured.len().min(FEATURED_LIMIT)], locale),
        latest_news: localize_all(&latest, locale),
        markets,
    };

    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "",
        "",
        &state.i18n.get(locale, "page_home_description"),
    )
    .with_structured_data(seo::organization_ld(&state.config, catalog, locale));

    let page = build_page(&state, locale, meta, &["page_home_title"], content);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/about",
    params(("locale" = String, Path, description = "Locale prefix")),
    responses((status = 200, body = ApiResponse<Page<AboutContent>>))
)]
pub async fn about_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let catalog = &state.catalog;

    let mut certificates = localize_all(&catalog.certificates(&Filter::All), locale);
    label_certificates(&state, locale, &mut certificates);
    let content = AboutContent {
        company: catalog.company().localize(locale),
        certificates,
    };
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/about",
        &state.i18n.get(locale, "page_about_title"),
        &state.i18n.get(locale, "page_about_description"),
    )
    .with_structured_data(seo::organization_ld(&state.config, catalog, locale));

    let page = build_page(&state, locale, meta, &["page_about_title"], content);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/products",
    params(("locale" = String, Path, description = "Locale prefix"), ProductQuery),
    responses((status = 200, body = ApiResponse<Page<ListContent<ProductView>>>))
)]
pub async fn products_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let query: ProductQuery = match page_query(&req, &state, locale) {
        Ok(q) => q,
        Err(resp) => return resp,
    };

    let filter = Filter::parse(query.category.as_deref());
    let products = state.catalog.products(&filter);
    let items: Vec<ProductView> = localize_all(&products, locale);

    let listing: Vec<(String, String)> = items
        .iter()
        .map(|p| {
            (
                p.name.clone(),
                seo::page_url(&state.config, locale, &format!("/products/{}", p.slug)),
            )
        })
        .collect();
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/products",
        &state.i18n.get(locale, "page_products_title"),
        &state.i18n.get(locale, "page_products_description"),
    )
    .with_structured_data(seo::item_list_ld(&listing));

    let mut args = FluentArgs::new();
    args.set("count", items.len());
    let count_label = state.i18n.format(locale, "products_count", Some(&args));

    let filters = filter_options(&state, locale, &filter);
    let total = items.len();
    let content = list_content(&state, locale, items, total, filters, "products_empty");
    let mut page = build_page(
        &state,
        locale,
        meta,
        &["page_products_title", "product_sizes", "product_packaging", "product_season"],
        content,
    );
    page.messages.insert("products_count".to_string(), count_label);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/products/{id}",
    params(
        ("locale" = String, Path, description = "Locale prefix"),
        ("id" = String, Path, description = "Product id or slug")
    ),
    responses(
        (status = 200, body = ApiResponse<Page<ProductDetailContent>>),
        (status = 404, body = EmptyApiResponse)
    )
)]
pub async fn product_detail_page(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<Arc<AppState>>,
) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let (_, key) = path.into_inner();

    let product = match state.catalog.find_product(&key) {
        Some(p) => p,
        None => {
            log::warn!("product not found: {}", key);
            return error_response(
                StatusCode::NOT_FOUND,
                &state,
                locale,
                "product_not_found",
                "error_product_not_found",
            );
        }
    };

    let view = product.localize(locale);
    let rest = format!("/products/{}", product.slug);
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        &rest,
        &view.name,
        &view.description,
    )
    .with_image(seo::absolute_url(&state.config, product.image))
    .with_structured_data(seo::product_ld(
        &state.config,
        &state.catalog,
        &state.i18n,
        locale,
        product,
    ));

    let content = ProductDetailContent {
        category_label: state.i18n.get(locale, product.category.message_key()),
        related: localize_all(&state.catalog.related_products(product, RELATED_LIMIT), locale),
        product: view,
    };
    let page = build_page(
        &state,
        locale,
        meta,
        &["product_sizes", "product_packaging", "product_season"],
        content,
    );
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/certificates",
    params(("locale" = String, Path, description = "Locale prefix"), CertificateQuery),
    responses((status = 200, body = ApiResponse<Page<ListContent<CertificateView>>>))
)]
pub async fn certificates_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let query: CertificateQuery = match page_query(&req, &state, locale) {
        Ok(q) => q,
        Err(resp) => return resp,
    };

    let filter = Filter::parse(query.kind.as_deref());
    let mut items: Vec<CertificateView> =
        localize_all(&state.catalog.certificates(&filter), locale);
    label_certificates(&state, locale, &mut items);
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/certificates",
        &state.i18n.get(locale, "page_certificates_title"),
        &state.i18n.get(locale, "page_certificates_description"),
    );

    let filters = filter_options(&state, locale, &filter);
    let total = items.len();
    let content = list_content(&state, locale, items, total, filters, "certificates_empty");
    let page = build_page(&state, locale, meta, &["page_certificates_title"], content);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/markets",
    params(("locale" = String, Path, description = "Locale prefix"), MarketQuery),
    responses((status = 200, body = ApiResponse<Page<ListContent<MarketView>>>))
)]
pub async fn markets_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let query: MarketQuery = match page_query(&req, &state, locale) {
        Ok(q) => q,
        Err(resp) => return resp,
    };

    let filter = Filter::parse(query.status.as_deref());
    let mut items: Vec<MarketView> = localize_all(&state.catalog.markets(&filter), locale);
    label_markets(&state, locale, &mut items);
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/markets",
        &state.i18n.get(locale, "page_markets_title"),
        &state.i18n.get(locale, "page_markets_description"),
    );

    let filters = filter_options(&state, locale, &filter);
    let total = items.len();
    let content = list_content(&state, locale, items, total, filters, "markets_empty");
    let page = build_page(&state, locale, meta, &["page_markets_title"], content);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/news",
    params(("locale" = String, Path, description = "Locale prefix"), NewsQuery),
    responses((status = 200, body = ApiResponse<Page<ListContent<NewsView>>>))
)]
pub async fn news_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let query: NewsQuery = match page_query(&req, &state, locale) {
        Ok(q) => q,
        Err(resp) => return resp,
    };

    let filter = Filter::parse(query.category.as_deref());
    let limit = query.limit.unwrap_or(NEWS_PAGE_LIMIT).clamp(1, 50);
    let total = state.catalog.news(&filter).len();
    let items: Vec<NewsView> = localize_all(&state.catalog.latest_news(&filter, limit), locale);

    let listing: Vec<(String, String)> = items
        .iter()
        .map(|n| {
            (
                n.title.clone(),
                seo::page_url(&state.config, locale, &format!("/news/{}", n.slug)),
            )
        })
        .collect();
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/news",
        &state.i18n.get(locale, "page_news_title"),
        &state.i18n.get(locale, "page_news_description"),
    )
    .with_structured_data(seo::item_list_ld(&listing));

    let filters = filter_options(&state, locale, &filter);
    let content = list_content(&state, locale, items, total, filters, "news_empty");
    let page = build_page(&state, locale, meta, &["page_news_title"], content);
    page_response(&resolution, page)
}

#[utoipa::path(
    get,
    path = "/{locale}/news/{id}",
    params(
        ("locale" = String, Path, description = "Locale prefix"),
        ("id" = String, Path, description = "Article id or slug")
    ),
    responses(
        (status = 200, body = ApiResponse<Page<NewsDetailContent>>),
        (status = 404, body = EmptyApiResponse)
    )
)]
pub async fn news_detail_page(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<Arc<AppState>>,
) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let (_, key) = path.into_inner();

    let article = match state.catalog.find_article(&key) {
        Some(a) => a,
        None => {
            log::warn!("article not found: {}", key);
            return error_response(
                StatusCode::NOT_FOUND,
                &state,
                locale,
                "article_not_found",
                "error_article_not_found",
            );
        }
    };

    let view = article.localize_full(locale);
    let published_label = view
        .published
        .map(|date| date_label(&state, locale, "news_published", date));
    let related: Vec<NewsView> = state
        .catalog
        .latest_news(&Filter::Only(article.category), RELATED_LIMIT + 1)
        .into_iter()
        .filter(|n| n.id != article.id)
        .take(RELATED_LIMIT)
        .map(|n| n.localize(locale))
        .collect();

    let rest = format!("/news/{}", article.slug);
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        &rest,
        &view.title,
        &view.excerpt,
    )
    .with_image(seo::absolute_url(&state.config, article.image))
    .with_structured_data(seo::article_ld(&state.config, &state.catalog, locale, article));

    let content = NewsDetailContent {
        article: view,
        published_label,
        related,
    };
    let page = build_page(&state, locale, meta, &["page_news_title"], content);
    page_response(&resolution, page)
}

/**
 * whatsapp_url
 * 生成 wa.me 深链，预填本地化的咨询文案。
 */
fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[utoipa::path(
    get,
    path = "/{locale}/contact",
    params(("locale" = String, Path, description = "Locale prefix")),
    responses((status = 200, body = ApiResponse<Page<ContactContent>>))
)]
pub async fn contact_page(req: HttpRequest, state: web::Data<Arc<AppState>>) -> impl Responder {
    let resolution = match resolve_page(&req, &state) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let locale = resolution.locale;
    let company = state.catalog.company();

    let mut args = FluentArgs::new();
    args.set("company", company.name.get(locale));
    let greeting = state.i18n.format(locale, "contact_whatsapp_message", Some(&args));

    let content = ContactContent {
        company: company.localize(locale),
        whatsapp_url: whatsapp_url(company.whatsapp, &greeting),
        mailto_url: format!("mailto:{}", company.email),
    };
    let meta = seo::page_meta(
        &state.config,
        &state.i18n,
        locale,
        "/contact",
        &state.i18n.get(locale, "page_contact_title"),
        &state.i18n.get(locale, "page_contact_description"),
    )
    .with_structured_data(seo::organization_ld(&state.config, &state.catalog, locale));

    let page = build_page(&state, locale, meta, &["page_contact_title"], content);
    page_response(&resolution, page)
}

pub async fn sitemap(state: web::Data<Arc<AppState>>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(seo::sitemap_xml(&state.config, &state.catalog))
}

pub async fn robots(state: web::Data<Arc<AppState>>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(seo::robots_txt(&state.config))
}

/// Anything no route claimed: page paths with a trailing slash go to their
/// slash-less form, unprefixed page paths get their locale redirect,
/// everything else is a localized 404.
pub async fn fallback(req: HttpRequest, state: web::Data<Arc<AppState>>) -> HttpResponse {
    if is_localizable(req.path()) {
        if let Some(location) = strip_trailing_slash(req.path(), req.query_string()) {
            return HttpResponse::PermanentRedirect()
                .insert_header((header::LOCATION, location))
                .finish();
        }
    }
    match resolve_page(&req, &state) {
        Ok(resolution) => error_response(
            StatusCode::NOT_FOUND,
            &state,
            resolution.locale,
            "not_found",
            "error_not_found",
        ),
        Err(resp) => resp,
    }
}

/// Malformed JSON bodies get the same envelope as every other error.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected request body: {}", err);
    let message = req
        .app_data::<web::Data<Arc<AppState>>>()
        .map(|state| state.i18n.get(fallback_locale(req, state), "error_invalid_request"))
        .unwrap_or_else(|| err.to_string());
    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error("invalid_request", message));
    InternalError::from_response(err, response).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(health_check)
        .route("/robots.txt", web::get().to(robots))
        .route("/sitemap.xml", web::get().to(sitemap))
        .service(
            web::scope("/api")
                .route("/locales", web::get().to(get_locales))
                .route("/locale", web::post().to(choose_locale))
                .route("/{locale}/messages", web::get().to(get_messages)),
        )
        .service(
            web::scope("/{locale}")
                .route("", web::get().to(home_page))
                .route("/about", web::get().to(about_page))
                .route("/products", web::get().to(products_page))
                .route("/products/{id}", web::get().to(product_detail_page))
                .route("/certificates", web::get().to(certificates_page))
                .route("/markets", web::get().to(markets_page))
                .route("/news", web::get().to(news_page))
                .route("/news/{id}", web::get().to(news_detail_page))
                .route("/contact", web::get().to(contact_page)),
        )
        .default_service(web::to(fallback));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Direction;
    use crate::models::{CertificateKind, MarketStatus, NewsCategory, ProductCategory};
    use actix_web::{test, App};

    fn test_state() -> Arc<AppState> {
        let config = SiteConfig {
            site_url: "https://fish.example".to_string(),
            ..SiteConfig::default()
        };
        Arc::new(AppState::new(config).unwrap())
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state()))
                    .configure(configure),
            )
            .await
        };
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    }

    fn response_cookie(resp: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
        resp.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string())
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unprefixed_path_redirects_to_default_locale() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/ar/products");
        assert_eq!(response_cookie(&resp, PREFERENCE_COOKIE).as_deref(), Some("ar"));
    }

    #[actix_web::test]
    async fn test_root_redirect_uses_accept_language() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ACCEPT_LANGUAGE, "en-GB,en;q=0.9"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/en");
    }

    #[actix_web::test]
    async fn test_unknown_locale_segment_redirects_under_default() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/fr/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/ar/fr/products");

        let req = test::TestRequest::get().uri("/ar/fr/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_products_page_filters_by_category() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/en/products?category=river")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CONTENT_LANGUAGE).unwrap(), "en");

        let body: ApiResponse<Page<ListContent<ProductView>>> = test::read_body_json(resp).await;
        let page = body.data.unwrap();
        assert_eq!(page.locale, Locale::En);
        assert!(!page.content.items.is_empty());
        assert!(page
            .content
            .items
            .iter()
            .all(|p| p.category == ProductCategory::River));
        assert_eq!(page.content.items[0].name, "Tilapia");
        assert_eq!(page.meta.canonical, "https://fish.example/en/products");
        let active: Vec<&str> = page
            .content
            .filters
            .iter()
            .filter(|f| f.active)
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(active, vec!["river"]);
        assert_eq!(page.messages["nav_products"], "Products");
    }

    #[actix_web::test]
    async fn test_unknown_category_is_empty_with_message() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/ar/products?category=lake")
            .to_request();
        let body: ApiResponse<Page<ListContent<ProductView>>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert!(page.content.items.is_empty());
        assert_eq!(page.content.total, 0);
        assert_eq!(
            page.content.empty_message.as_deref(),
            Some("لا توجد منتجات في هذا التصنيف.")
        );
    }

    #[actix_web::test]
    async fn test_product_detail_by_slug_and_missing() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/ar/products/sea-bream")
            .to_request();
        let body: ApiResponse<Page<ProductDetailContent>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.content.product.name, "دنيس");
        assert_eq!(page.content.category_label, "أسماك بحرية");
        assert_eq!(page.meta.structured_data[0]["@type"], "Product");

        let req = test::TestRequest::get().uri("/en/products/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ApiResponse<()> = test::read_body_json(resp).await;
        assert_eq!(body.message.as_deref(), Some("Product not found"));
        assert_eq!(body.error.unwrap().code, "product_not_found");
    }

    #[actix_web::test]
    async fn test_stored_preference_redirects_once() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/ar/news")
            .cookie(Cookie::new(PREFERENCE_COOKIE, "en"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/en/news");
        assert_eq!(response_cookie(&resp, SYNCED_COOKIE).as_deref(), Some("1"));

        let req = test::TestRequest::get()
            .uri("/ar/news")
            .cookie(Cookie::new(PREFERENCE_COOKIE, "en"))
            .cookie(Cookie::new(SYNCED_COOKIE, "1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_choose_locale_sets_cookies() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/locale")
            .set_json(serde_json::json!({
                "locale": "en",
                "return_to": "/ar/products?category=sea"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(response_cookie(&resp, PREFERENCE_COOKIE).as_deref(), Some("en"));
        assert_eq!(response_cookie(&resp, SYNCED_COOKIE).as_deref(), Some("1"));
        let body: ApiResponse<LocaleChoiceResponse> = test::read_body_json(resp).await;
        assert_eq!(body.data.unwrap().redirect_to, "/en/products?category=sea");
    }

    #[actix_web::test]
    async fn test_choose_unsupported_locale_is_rejected() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/locale")
            .set_json(serde_json::json!({ "locale": "fr", "return_to": "//evil.example" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_locale_choice_gets_envelope() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/locale")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .insert_header((header::ACCEPT_LANGUAGE, "en"))
            .set_payload("{\"locale\":")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = test::read_body_json(resp).await;
        assert_eq!(body.error.unwrap().code, "invalid_request");
        assert!(!body.success);
    }

    #[actix_web::test]
    async fn test_messages_endpoint() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/en/messages").to_request();
        let body: ApiResponse<std::collections::BTreeMap<String, String>> =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.unwrap()["nav_contact"], "Contact us");

        let req = test::TestRequest::get().uri("/api/fr/messages").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/api/ar/messages");
    }

    #[actix_web::test]
    async fn test_api_paths_are_not_redirected() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/logo.png").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_contact_page_whatsapp_link() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/en/contact").to_request();
        let body: ApiResponse<Page<ContactContent>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert!(page
            .content
            .whatsapp_url
            .starts_with("https://wa.me/201001234567?text=Hello%20Nile%20Delta%20Fisheries"));
    }

    #[actix_web::test]
    async fn test_news_detail_has_published_label() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/en/news/new-iqf-line").to_request();
        let body: ApiResponse<Page<NewsDetailContent>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.content.published_label.as_deref(), Some("Published on 2026-02-10"));
        assert!(page.content.article.body.is_some());
        assert!(page.content.related.iter().all(|n| n.id != 1));
    }

    #[actix_web::test]
    async fn test_sitemap_and_robots() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/sitemap.xml").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<urlset"));

        let req = test::TestRequest::get().uri("/robots.txt").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_locales_endpoint_flags_default() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/locales").to_request();
        let body: ApiResponse<LocalesResponse> = test::call_and_read_body_json(&app, req).await;
        let locales = body.data.unwrap();
        assert_eq!(locales.default, Locale::Ar);
        let flags: Vec<(Locale, bool, Direction)> = locales
            .locales
            .iter()
            .map(|l| (l.code, l.is_default, l.dir))
            .collect();
        assert_eq!(
            flags,
            vec![
                (Locale::Ar, true, Direction::Rtl),
                (Locale::En, false, Direction::Ltr),
            ]
        );
    }

    #[actix_web::test]
    async fn test_certificates_page_filters_by_kind() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/ar/certificates?kind=quality")
            .to_request();
        let body: ApiResponse<Page<ListContent<CertificateView>>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.content.total, 2);
        assert!(page
            .content
            .items
            .iter()
            .all(|c| c.kind == CertificateKind::Quality));
        assert_eq!(
            page.content.items[0].valid_until_label.as_deref(),
            Some("سارية حتى 2027-03-15")
        );
        assert!(page.content.empty_message.is_none());
        let active: Vec<&str> = page
            .content
            .filters
            .iter()
            .filter(|f| f.active)
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(active, vec!["quality"]);
    }

    #[actix_web::test]
    async fn test_empty_certificates_and_markets_show_no_results_text() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/en/certificates?kind=organic")
            .to_request();
        let body: ApiResponse<Page<ListContent<CertificateView>>> =
            test::call_and_read_body_json(&app, req).await;
        let content = body.data.unwrap().content;
        assert!(content.items.is_empty());
        assert_eq!(content.empty_message.as_deref(), Some("No certificates of this kind."));

        let req = test::TestRequest::get()
            .uri("/en/markets?status=closed")
            .to_request();
        let body: ApiResponse<Page<ListContent<MarketView>>> =
            test::call_and_read_body_json(&app, req).await;
        let content = body.data.unwrap().content;
        assert!(content.items.is_empty());
        assert_eq!(content.empty_message.as_deref(), Some("No markets with this status."));
    }

    #[actix_web::test]
    async fn test_markets_page_filters_by_status() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/en/markets?status=expanding")
            .to_request();
        let body: ApiResponse<Page<ListContent<MarketView>>> =
            test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.content.items.len(), 2);
        assert!(page
            .content
            .items
            .iter()
            .all(|m| m.status == MarketStatus::Expanding));
        let first = &page.content.items[0];
        assert_eq!(
            first.since_label.as_deref(),
            Some(format!("Exporting since {}", first.since).as_str())
        );
    }

    #[actix_web::test]
    async fn test_news_page_category_and_limit() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/en/news?category=events&limit=1")
            .to_request();
        let body: ApiResponse<Page<ListContent<NewsView>>> =
            test::call_and_read_body_json(&app, req).await;
        let content = body.data.unwrap().content;
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.items[0].category, NewsCategory::Events);
        assert!(content.items[0].body.is_none());
    }

    #[actix_web::test]
    async fn test_news_total_counts_before_limit() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/en/news?category=company&limit=1")
            .to_request();
        let body: ApiResponse<Page<ListContent<NewsView>>> =
            test::call_and_read_body_json(&app, req).await;
        let content = body.data.unwrap().content;
        assert_eq!(content.items.len(), 1);
        assert_eq!(content.total, 3);
        assert_eq!(content.items[0].slug, "west-africa-office");
    }

    #[actix_web::test]
    async fn test_bad_query_on_unsupported_locale_still_redirects() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/fr/news?limit=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/ar/fr/news?limit=abc");

        let req = test::TestRequest::get().uri("/en/news?limit=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse<()> = test::read_body_json(resp).await;
        assert_eq!(body.error.unwrap().code, "invalid_request");
    }

    #[actix_web::test]
    async fn test_home_page_content() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/en").to_request();
        let body: ApiResponse<Page<HomeContent>> = test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.content.company.name, "Nile Delta Fisheries");
        assert!(!page.content.featured_products.is_empty());
        assert!(page.content.featured_products.len() <= FEATURED_LIMIT);
        assert!(page.content.featured_products.iter().all(|p| p.featured));
        assert_eq!(page.content.latest_news.len(), HOME_NEWS_LIMIT);
        assert!(page.content.markets.iter().all(|m| m.since_label.is_some()));
        assert_eq!(page.meta.canonical, "https://fish.example/en");
        assert_eq!(page.meta.structured_data[0]["@type"], "Organization");
    }

    #[actix_web::test]
    async fn test_about_page_lists_labelled_certificates() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/ar/about").to_request();
        let body: ApiResponse<Page<AboutContent>> = test::call_and_read_body_json(&app, req).await;
        let page = body.data.unwrap();
        assert_eq!(page.dir, Direction::Rtl);
        assert_eq!(page.content.certificates.len(), 5);
        assert!(page
            .content
            .certificates
            .iter()
            .all(|c| c.valid_until_label.is_some()));
    }
}
