mod catalog;
mod config;
mod content;
mod handlers;
mod i18n;
mod locale;
mod localize;
mod models;
mod routing;
mod seo;

use crate::config::SiteConfig;
use crate::handlers::AppState;

use actix_cors::Cors;
use actix_web::{
    middleware::{Logger, NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::get_locales,
        handlers::choose_locale,
        handlers::get_messages,
        handlers::home_page,
        handlers::about_page,
        handlers::products_page,
        handlers::product_detail_page,
        handlers::certificates_page,
        handlers::markets_page,
        handlers::news_page,
        handlers::news_detail_page,
        handlers::contact_page
    ),
    components(schemas(
        models::ApiError,
        models::EmptyApiResponse,
        models::MessagesApiResponse,
        models::ProductView,
        models::CertificateView,
        models::MarketView,
        models::NewsView,
        models::CompanyView,
        models::FilterOption,
        models::LocaleInfo,
        models::LocaleChoiceRequest,
        models::LocaleChoiceResponse,
        seo::SeoMeta,
        seo::AlternateLink,
        handlers::HealthCheckResponse
    ))
)]
struct ApiDoc;

fn api_docs() -> SwaggerUi {
    SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", ApiDoc::openapi())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    dotenv::from_filename(format!("{}/.env.local", manifest_dir)).ok();
    dotenv::from_filename(format!("{}/.env", manifest_dir)).ok();
    dotenv::from_filename(".env.local").ok();
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SiteConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {:#}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let bind_address = config.bind_address();
    let locales: Vec<&str> = config.locales.iter().map(|l| l.code()).collect();
    log::info!(
        "Serving locales {:?} (default {}, detection {})",
        locales,
        config.locales.default_locale(),
        config.locale_detection
    );

    let state = Arc::new(AppState::new(config).map_err(|e| {
        log::error!("Failed to load message catalogs: {:#}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?);

    log::info!("Starting Nile Delta Fisheries site at http://{}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(NormalizePath::new(TrailingSlash::MergeOnly))
            .wrap(Logger::default())
            .wrap(cors)
            .service(api_docs())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    macro_rules! site_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Arc::new(
                        AppState::new(SiteConfig::default()).unwrap(),
                    )))
                    .wrap(NormalizePath::new(TrailingSlash::MergeOnly))
                    .service(api_docs())
                    .configure(handlers::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_api_docs_are_served() {
        let app = site_app!();
        for uri in ["/api/docs/", "/api/docs/index.html", "/api/openapi.json"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_trailing_slash_page_redirects_to_canonical_path() {
        let app = site_app!();
        let req = test::TestRequest::get()
            .uri("/en/products/?category=sea")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/en/products?category=sea"
        );

        let req = test::TestRequest::get().uri("/en//products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
