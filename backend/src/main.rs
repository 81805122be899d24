mod config;
mod services;
mod store;

use crate::config::ServerConfig;
use crate::services::names::spell::NameSpellChecker;
use crate::store::CertificateStore;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::path::Path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend build. Unknown paths fall back to
/// `index.html` so SPA deep links like `/verify/<certificate_id>` load the
/// app instead of a 404.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    let certificates = CertificateStore::new();
    let spell_checker =
        web::Data::new(NameSpellChecker::load(Path::new("./data/names_corpus.txt")));

    info!("Server running at {}", url);
    info!("Available endpoints:");
    info!("- POST /api/certificates/generate");
    info!("- GET  /api/certificates/verify/{{id}}");
    info!("- GET  /api/certificates/download/{{id}}");
    info!("- POST /api/names/validate");
    info!("- GET  /api/health");

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(certificates.clone()))
            .app_data(spell_checker.clone())
            .service(services::certificates::configure_routes())
            .service(services::names::configure_routes())
            .route("/api/health", web::get().to(services::health::process))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
