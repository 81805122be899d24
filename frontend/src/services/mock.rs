use async_trait::async_trait;
use common::model::certificate::{CertificateDraft, GeneratedCertificate};
use common::model::verification::VerificationResponse;
use gloo_timers::future::TimeoutFuture;

use super::CertificateService;

/// Simulated backend: fixed delays standing in for network round trips, the
/// shared fabrication logic for generation and the prefix-based mock
/// decision for verification. Delays are configurable so tests and demos can
/// tighten them.
pub struct MockCertificateService {
    pub generate_delay_ms: u32,
    pub verify_delay_ms: u32,
}

impl Default for MockCertificateService {
    fn default() -> MockCertificateService {
        MockCertificateService {
            generate_delay_ms: 1500,
            verify_delay_ms: 1000,
        }
    }
}

#[async_trait(?Send)]
impl CertificateService for MockCertificateService {
    async fn generate(&self, draft: CertificateDraft) -> Result<GeneratedCertificate, String> {
        TimeoutFuture::new(self.generate_delay_ms).await;
        common::issue::issue_certificate(draft)
    }

    async fn verify(&self, certificate_id: &str) -> Result<VerificationResponse, String> {
        TimeoutFuture::new(self.verify_delay_ms).await;
        Ok(common::verify::decide(certificate_id))
    }

    async fn suggest_names(&self, _name: &str) -> Result<Vec<String>, String> {
        // The mock has no corpus to suggest from; the panel stays hidden.
        Ok(Vec::new())
    }
}
