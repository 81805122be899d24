//! The asynchronous certificate service seam.
//!
//! Everything the page treats as "backend" goes through the
//! [`CertificateService`] trait: certificate generation, verification and
//! name suggestions. The components only ever see a [`ServiceHandle`], so the
//! timed mock (the behavior of the original demo page) and the real HTTP
//! client are interchangeable, and tests can substitute a fake with
//! controllable latency and outcomes.

use std::rc::Rc;

use async_trait::async_trait;
use common::model::certificate::{CertificateDraft, GeneratedCertificate};
use common::model::verification::VerificationResponse;

mod http;
mod mock;

pub use http::HttpCertificateService;
pub use mock::MockCertificateService;

#[async_trait(?Send)]
pub trait CertificateService {
    /// Accepts a draft and asynchronously returns a generated record or
    /// fails. Callers do not get to see how the record is fabricated.
    async fn generate(&self, draft: CertificateDraft) -> Result<GeneratedCertificate, String>;

    /// Checks a certificate id. A negative result is a successful call with
    /// `valid: false`; `Err` means the check itself could not run.
    async fn verify(&self, certificate_id: &str) -> Result<VerificationResponse, String>;

    /// Spelling suggestions for a participant name. An empty list keeps the
    /// suggestions panel hidden.
    async fn suggest_names(&self, name: &str) -> Result<Vec<String>, String>;
}

/// Shared, prop-friendly handle to a [`CertificateService`]. Equality is
/// pointer identity, which is what Yew's change detection needs.
#[derive(Clone)]
pub struct ServiceHandle(Rc<dyn CertificateService>);

impl ServiceHandle {
    /// The simulated service the page runs with by default.
    pub fn mock() -> ServiceHandle {
        ServiceHandle(Rc::new(MockCertificateService::default()))
    }

    /// A service backed by the real HTTP API.
    pub fn http(base_url: &str) -> ServiceHandle {
        ServiceHandle(Rc::new(HttpCertificateService::new(base_url)))
    }

    /// Picks the implementation for this page load: `?service=http` switches
    /// to the same-origin API, anything else runs the simulated service.
    pub fn from_page_query() -> ServiceHandle {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if search.contains("service=http") {
            ServiceHandle::http("")
        } else {
            ServiceHandle::mock()
        }
    }
}

impl std::ops::Deref for ServiceHandle {
    type Target = Rc<dyn CertificateService>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &ServiceHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
