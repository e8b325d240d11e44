use std::borrow::Cow;

use actix_cors::Cors;
use actix_web::http::header::{self, AcceptEncoding, ContentEncoding, Encoding, Header};
use actix_web::middleware::Logger;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use log::{debug, info};

use crate::variant::Variant;

/// What a request path resolves to.
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Api,
    /// Asset path relative to the bundle root, e.g. `snippets/web-1a2b/inline0.js`.
    Asset(&'a str),
    Index,
    Invalid,
}

pub fn classify(path: &str) -> Route<'_> {
    if path == "/api" || path.starts_with("/api/") {
        return Route::Api;
    }
    if path.split('/').any(|segment| segment == ".." || segment == ".") {
        return Route::Invalid;
    }
    let file_type = mime_guess::from_path(path).first_raw().unwrap_or("text/html");
    if file_type.contains("text/html") {
        return Route::Index;
    }
    match path.trim_start_matches('/') {
        "" => Route::Invalid,
        asset => Route::Asset(asset),
    }
}

/// Whether content negotiation on `Accept-Encoding` picks gzip over identity.
pub fn negotiates_gzip(req: &HttpRequest) -> bool {
    let gzip = Encoding::Known(ContentEncoding::Gzip);
    let identity = Encoding::Known(ContentEncoding::Identity);
    AcceptEncoding::parse(req)
        .ok()
        .and_then(|accept| accept.negotiate([gzip.clone(), identity].iter()))
        .is_some_and(|chosen| chosen == gzip)
}

fn index(variant: Variant) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(variant.index_html())
}

fn serve_frontend_asset<F>(lookup: F, path: &str, gzip: bool) -> HttpResponse
where
    F: Fn(&str) -> Option<Cow<'static, [u8]>>,
{
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    if gzip {
        if let Some(data) = lookup(&format!("{path}.gz")) {
            return HttpResponse::Ok()
                .content_type(content_type.as_ref())
                .append_header((header::CONTENT_ENCODING, "gzip"))
                .append_header((header::VARY, "Accept-Encoding"))
                .append_header((header::CACHE_CONTROL, "public, max-age=604800"))
                .body(data);
        }
    }
    match lookup(path) {
        Some(data) => HttpResponse::Ok()
            .content_type(content_type.as_ref())
            .append_header((header::CACHE_CONTROL, "public, max-age=604800"))
            .body(data),
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}

async fn catch_all(req: HttpRequest, variant: web::Data<Variant>) -> HttpResponse {
    let variant = **variant;
    let route = classify(req.path());
    debug!("{} -> {:?}", req.path(), route);
    match route {
        Route::Api => HttpResponse::NotFound().finish(),
        Route::Invalid => HttpResponse::BadRequest().body("400 Bad Request"),
        Route::Index => index(variant),
        Route::Asset(path) => serve_frontend_asset(
            |file| variant.asset(file).map(|asset| asset.data),
            path,
            negotiates_gzip(&req),
        ),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(catch_all));
}

pub async fn run(bind: &str, variant: Variant) -> std::io::Result<()> {
    info!("serving the {variant} template on http://{bind}");
    let variant = web::Data::new(variant);

    HttpServer::new(move || {
        let cors = Cors::default().allow_any_origin().allow_any_method().allow_any_header();
        App::new()
            .app_data(variant.clone())
            .wrap(cors)
            .wrap(Logger::new("%a %{User-Agent}i %r %s %D"))
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
