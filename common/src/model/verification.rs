use serde::{Deserialize, Serialize};

use crate::model::certificate::GeneratedCertificate;

/// The certificate details shown when a verification succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub participant_name: String,
    pub course_name: String,
    pub completion_date: String,
    pub issuer_name: String,
}

impl From<&GeneratedCertificate> for VerificationRecord {
    fn from(certificate: &GeneratedCertificate) -> VerificationRecord {
        VerificationRecord {
            participant_name: certificate.draft.participant_name.clone(),
            course_name: certificate.draft.course_name.clone(),
            completion_date: certificate.draft.completion_date.clone(),
            issuer_name: certificate.draft.issuer_name.clone(),
        }
    }
}

/// Envelope answered by a verification check, whether mocked or served by
/// the backend. `certificate` is present only when `valid` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<VerificationRecord>,
}
