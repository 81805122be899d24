use actix_web::{web, HttpResponse, Responder};
use common::model::verification::{VerificationRecord, VerificationResponse};

use crate::store::CertificateStore;

/// Actix web handler for `GET /api/certificates/verify/{certificate_id}`.
///
/// Unlike the client-side mock, this consults the issuance store: only ids
/// actually generated by this server verify as valid. Unknown ids answer
/// `200` with `valid: false` so the client renders a result, not an error.
pub async fn process(
    store: web::Data<CertificateStore>,
    certificate_id: web::Path<String>,
) -> impl Responder {
    let certificate_id = certificate_id.into_inner();
    let response = match store.get(&certificate_id).await {
        Some(certificate) => VerificationResponse {
            valid: true,
            message: common::verify::VALID_MESSAGE.to_string(),
            certificate: Some(VerificationRecord::from(&certificate)),
        },
        None => VerificationResponse {
            valid: false,
            message: "Certificate not found".to_string(),
            certificate: None,
        },
    };

    log::info!(
        "Verified certificate {}: valid={}",
        certificate_id,
        response.valid
    );
    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::certificates::{configure_routes, test_support};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn stored_certificate_verifies_with_its_details() {
        let store = CertificateStore::new();
        let certificate = common::issue::issue_certificate(test_support::draft()).unwrap();
        let id = certificate.certificate_id.clone();
        store.insert(certificate).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/certificates/verify/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: VerificationResponse = test::read_body_json(resp).await;
        assert!(body.valid);
        let record = body.certificate.unwrap();
        assert_eq!(record.participant_name, "Jane Roe");
        assert_eq!(record.course_name, "Rust Fundamentals");
    }

    #[actix_web::test]
    async fn unknown_id_is_invalid_not_an_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CertificateStore::new()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/certificates/verify/cert-unknown00")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: VerificationResponse = test::read_body_json(resp).await;
        assert!(!body.valid);
        assert_eq!(body.message, "Certificate not found");
        assert!(body.certificate.is_none());
    }
}
