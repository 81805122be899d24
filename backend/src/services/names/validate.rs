use actix_web::{web, HttpResponse, Responder};
use common::model::names::{NameValidationRequest, NameValidationResponse};
use serde_json::json;

use super::spell::{is_plausible_name, NameSpellChecker};

/// Actix web handler for `POST /api/names/validate`.
///
/// The corpus scan is CPU-bound, so it runs on a blocking task. Suggestion
/// failures never reach the client as anything more specific than a generic
/// error; the frontend just keeps its suggestion panel hidden.
pub async fn process(
    checker: web::Data<NameSpellChecker>,
    payload: web::Json<NameValidationRequest>,
) -> impl Responder {
    let name = payload.into_inner().name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Name parameter is required",
        }));
    }

    log::info!("Validating name: {}", name);
    let checker = checker.clone();
    let lookup = name.clone();
    match tokio::task::spawn_blocking(move || checker.suggestions_for(&lookup)).await {
        Ok(suggestions) => HttpResponse::Ok().json(NameValidationResponse {
            is_valid: !suggestions.is_empty() || is_plausible_name(&name),
            original: name,
            suggestions,
        }),
        Err(e) => {
            log::error!("Name suggestion task failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error",
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::names::configure_routes;
    use actix_web::{test, App};

    macro_rules! names_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(NameSpellChecker::from_words([
                        "john", "mary", "robert",
                    ])))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn misspelled_name_gets_suggestions() {
        let app = names_app!();

        let req = test::TestRequest::post()
            .uri("/api/names/validate")
            .set_json(NameValidationRequest {
                name: "Jhon Smith".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: NameValidationResponse = test::read_body_json(resp).await;
        assert_eq!(body.original, "Jhon Smith");
        assert_eq!(body.suggestions, vec!["John Smith".to_string()]);
        assert!(body.is_valid);
    }

    #[actix_web::test]
    async fn blank_name_is_a_client_error() {
        let app = names_app!();

        let req = test::TestRequest::post()
            .uri("/api/names/validate")
            .set_json(NameValidationRequest {
                name: "   ".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
