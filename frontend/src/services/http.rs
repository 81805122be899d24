use async_trait::async_trait;
use common::model::certificate::{CertificateDraft, GeneratedCertificate};
use common::model::names::{NameValidationRequest, NameValidationResponse};
use common::model::verification::VerificationResponse;
use gloo_net::http::{Request, Response};
use serde::Deserialize;

use super::CertificateService;

/// Client for the real certificate API served by the backend.
pub struct HttpCertificateService {
    base_url: String,
}

impl HttpCertificateService {
    /// `base_url` may be empty for same-origin requests.
    pub fn new(base_url: &str) -> HttpCertificateService {
        HttpCertificateService {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pulls the `error` field out of a failure body, falling back to the status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("request failed with status {}", status))
}

#[async_trait(?Send)]
impl CertificateService for HttpCertificateService {
    async fn generate(&self, draft: CertificateDraft) -> Result<GeneratedCertificate, String> {
        #[derive(Deserialize)]
        struct Envelope {
            certificate: GeneratedCertificate,
        }

        let response = Request::post(&self.url("/api/certificates/generate"))
            .json(&draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status() != 201 {
            return Err(error_message(response).await);
        }
        let envelope: Envelope = response.json().await.map_err(|e| e.to_string())?;
        Ok(envelope.certificate)
    }

    async fn verify(&self, certificate_id: &str) -> Result<VerificationResponse, String> {
        let response = Request::get(
            &self.url(&format!("/api/certificates/verify/{}", certificate_id)),
        )
        .send()
        .await
        .map_err(|e| e.to_string())?;

        if response.status() != 200 {
            return Err(error_message(response).await);
        }
        response.json().await.map_err(|e| e.to_string())
    }

    async fn suggest_names(&self, name: &str) -> Result<Vec<String>, String> {
        let response = Request::post(&self.url("/api/names/validate"))
            .json(&NameValidationRequest {
                name: name.to_string(),
            })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status() != 200 {
            return Err(error_message(response).await);
        }
        let validation: NameValidationResponse =
            response.json().await.map_err(|e| e.to_string())?;
        Ok(validation.suggestions)
    }
}
