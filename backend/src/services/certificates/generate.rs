use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Duration, Utc};
use common::model::certificate::{CertificateDraft, GeneratedCertificate};
use serde::Serialize;
use serde_json::json;

use crate::store::CertificateStore;

/// How long an issued certificate is advertised as valid.
const VALIDITY_DAYS: i64 = 365;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    certificate_id: String,
    message: String,
    download_url: String,
    verify_url: String,
    valid_until: DateTime<Utc>,
    certificate: GeneratedCertificate,
}

/// Actix web handler for `POST /api/certificates/generate`.
///
/// Rejects drafts with blank mandatory fields (`400`, listing them) and
/// unparseable completion dates (`400` with the reason); otherwise issues
/// the certificate, stores it and answers `201`.
pub async fn process(
    store: web::Data<CertificateStore>,
    payload: web::Json<CertificateDraft>,
) -> impl Responder {
    let draft = payload.into_inner();

    let missing = draft.missing_required();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Invalid request",
            "requiredFields": missing,
        }));
    }

    match issue_and_store(&store, draft).await {
        Ok(response) => {
            log::info!("Issued certificate {}", response.certificate_id);
            HttpResponse::Created().json(response)
        }
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": e })),
    }
}

async fn issue_and_store(
    store: &CertificateStore,
    draft: CertificateDraft,
) -> Result<GenerateResponse, String> {
    let certificate = common::issue::issue_certificate(draft)?;
    store.insert(certificate.clone()).await;

    Ok(GenerateResponse {
        certificate_id: certificate.certificate_id.clone(),
        message: "Certificate generated successfully".to_string(),
        download_url: format!("/api/certificates/download/{}", certificate.certificate_id),
        verify_url: format!("/api/certificates/verify/{}", certificate.certificate_id),
        valid_until: certificate.issued_at + Duration::days(VALIDITY_DAYS),
        certificate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::certificates::{configure_routes, test_support};
    use actix_web::{test, App};
    use common::issue::CERTIFICATE_ID_PREFIX;

    macro_rules! app_with {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn valid_draft_is_issued_and_stored() {
        let store = CertificateStore::new();
        let app = app_with!(store.clone());

        let req = test::TestRequest::post()
            .uri("/api/certificates/generate")
            .set_json(test_support::draft())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let id = body["certificateId"].as_str().unwrap().to_string();
        assert!(id.starts_with(CERTIFICATE_ID_PREFIX));
        assert_eq!(body["certificate"]["formattedDate"], "May 15, 2023");
        assert_eq!(
            body["verifyUrl"],
            format!("/api/certificates/verify/{}", id)
        );
        assert!(store.get(&id).await.is_some());
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected() {
        let app = app_with!(CertificateStore::new());

        let mut draft = test_support::draft();
        draft.participant_name = String::new();
        draft.completion_date = "  ".to_string();

        let req = test::TestRequest::post()
            .uri("/api/certificates/generate")
            .set_json(draft)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["requiredFields"],
            serde_json::json!(["participantName", "completionDate"])
        );
    }

    #[actix_web::test]
    async fn unparseable_completion_date_is_rejected() {
        let app = app_with!(CertificateStore::new());

        let mut draft = test_support::draft();
        draft.completion_date = "15/05/2023".to_string();

        let req = test::TestRequest::post()
            .uri("/api/certificates/generate")
            .set_json(draft)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn concurrent_generations_mint_distinct_ids() {
        let store = CertificateStore::new();
        let app = app_with!(store.clone());

        let first = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/certificates/generate")
                .set_json(test_support::draft())
                .to_request(),
        );
        let second = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/certificates/generate")
                .set_json(test_support::draft())
                .to_request(),
        );
        let (first, second) = tokio::join!(first, second);

        let a: serde_json::Value = test::read_body_json(first).await;
        let b: serde_json::Value = test::read_body_json(second).await;
        let (id_a, id_b) = (a["certificateId"].as_str().unwrap(), b["certificateId"].as_str().unwrap());
        assert_ne!(id_a, id_b);
        assert!(id_a.starts_with(CERTIFICATE_ID_PREFIX));
        assert!(id_b.starts_with(CERTIFICATE_ID_PREFIX));
        assert_eq!(store.len().await, 2);
    }
}
