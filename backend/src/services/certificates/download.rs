use actix_web::{web, HttpResponse, Responder};
use common::share::{download_file_name, DownloadFormat, DOWNLOAD_PLACEHOLDER};
use serde::Deserialize;
use serde_json::json;

use crate::store::CertificateStore;

#[derive(Deserialize)]
pub struct DownloadQuery {
    format: Option<String>,
}

/// Actix web handler for `GET /api/certificates/download/{certificate_id}`.
///
/// Serves the placeholder payload as an attachment. No real PDF or PNG is
/// rendered; the body is the fixed placeholder text under the requested
/// content type, fingerprinted into an `ETag`.
pub async fn process(
    store: web::Data<CertificateStore>,
    certificate_id: web::Path<String>,
    query: web::Query<DownloadQuery>,
) -> impl Responder {
    let certificate_id = certificate_id.into_inner();

    let format = match DownloadFormat::parse(query.format.as_deref().unwrap_or("pdf")) {
        Some(format) => format,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "error": "Invalid format",
                "supportedFormats": DownloadFormat::SUPPORTED,
            }));
        }
    };

    if store.get(&certificate_id).await.is_none() {
        return HttpResponse::NotFound().json(json!({
            "error": "Certificate not found",
            "id": certificate_id,
        }));
    }

    log::info!("Downloaded certificate {} as {}", certificate_id, format.extension());
    HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header(("ETag", format!("\"{:x}\"", md5::compute(DOWNLOAD_PLACEHOLDER))))
        .insert_header((
            "Content-Disposition",
            format!(
                "attachment; filename=\"{}\"",
                download_file_name(&certificate_id, format)
            ),
        ))
        .body(DOWNLOAD_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::certificates::{configure_routes, test_support};
    use actix_web::{test, App};

    async fn seeded_store() -> (CertificateStore, String) {
        let store = CertificateStore::new();
        let certificate = common::issue::issue_certificate(test_support::draft()).unwrap();
        let id = certificate.certificate_id.clone();
        store.insert(certificate).await;
        (store, id)
    }

    #[actix_web::test]
    async fn download_serves_named_attachment() {
        let (store, id) = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/download/{}?format=png", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
            "image/png"
        );
        assert_eq!(
            resp.headers().get("Content-Disposition").unwrap().to_str().unwrap(),
            format!("attachment; filename=\"certificate_{}.png\"", id)
        );

        let body = test::read_body(resp).await;
        assert_eq!(body, DOWNLOAD_PLACEHOLDER.as_bytes());
    }

    #[actix_web::test]
    async fn format_defaults_to_pdf() {
        let (store, id) = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/download/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
            "application/pdf"
        );
    }

    #[actix_web::test]
    async fn unknown_format_and_unknown_id_are_rejected() {
        let (store, id) = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/download/{}?format=docx", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/certificates/download/cert-missing00")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
