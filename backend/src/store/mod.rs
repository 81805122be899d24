//! In-memory registry of issued certificates.
//!
//! The store is the single source of truth the verification and download
//! endpoints consult. It is a clonable handle around shared state, created
//! once in `main.rs` and injected into the Actix application as `web::Data`;
//! concurrent reads (verify/download) and exclusive writes (generate) go
//! through the `RwLock`. Nothing survives a restart: persistence is out of
//! scope for this service.

use common::model::certificate::GeneratedCertificate;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct CertificateStore {
    certificates: Arc<RwLock<HashMap<String, GeneratedCertificate>>>,
}

impl CertificateStore {
    pub fn new() -> CertificateStore {
        CertificateStore::default()
    }

    /// Registers an issued certificate under its id. A duplicate id simply
    /// overwrites; ids are minted from UUIDs so collisions are not expected.
    pub async fn insert(&self, certificate: GeneratedCertificate) {
        let mut certificates = self.certificates.write().await;
        certificates.insert(certificate.certificate_id.clone(), certificate);
    }

    pub async fn get(&self, certificate_id: &str) -> Option<GeneratedCertificate> {
        let certificates = self.certificates.read().await;
        certificates.get(certificate_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.certificates.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog;
    use common::issue;
    use common::model::certificate::CertificateDraft;

    fn issued() -> GeneratedCertificate {
        issue::issue_certificate(CertificateDraft {
            participant_name: "Jane Roe".to_string(),
            participant_email: "jane@example.com".to_string(),
            certificate_title: "Certificate of Completion".to_string(),
            course_name: "Rust Fundamentals".to_string(),
            completion_date: "2023-05-15".to_string(),
            expiry_date: String::new(),
            issuer_name: "Acme Academy".to_string(),
            issuer_signature: "A. Instructor".to_string(),
            template: catalog::builtin_templates().remove(0),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = CertificateStore::new();
        let certificate = issued();
        let id = certificate.certificate_id.clone();

        store.insert(certificate.clone()).await;
        assert_eq!(store.get(&id).await, Some(certificate));
        assert!(store.get("cert-unknown00").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_inserts_register_both_certificates() {
        let store = CertificateStore::new();
        let (a, b) = (issued(), issued());
        assert_ne!(a.certificate_id, b.certificate_id);

        let (s1, s2) = (store.clone(), store.clone());
        let (ca, cb) = (a.clone(), b.clone());
        let first = tokio::spawn(async move { s1.insert(ca).await });
        let second = tokio::spawn(async move { s2.insert(cb).await });
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.get(&a.certificate_id).await.is_some());
        assert!(store.get(&b.certificate_id).await.is_some());
    }
}
