use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::template::Template;

/// User-entered certificate data prior to generation, plus the template
/// snapshot taken at submission time. Lives only for the duration of one
/// generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDraft {
    pub participant_name: String,
    pub participant_email: String,
    pub certificate_title: String,
    pub course_name: String,
    /// Completion date as entered, ISO `YYYY-MM-DD`.
    pub completion_date: String,
    pub expiry_date: String,
    pub issuer_name: String,
    pub issuer_signature: String,
    pub template: Template,
}

impl CertificateDraft {
    /// Names of the mandatory fields that are blank, in a fixed order.
    /// Empty means the draft is acceptable for generation.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.participant_name.trim().is_empty() {
            missing.push("participantName");
        }
        if self.course_name.trim().is_empty() {
            missing.push("courseName");
        }
        if self.completion_date.trim().is_empty() {
            missing.push("completionDate");
        }
        if self.issuer_name.trim().is_empty() {
            missing.push("issuerName");
        }
        missing
    }
}

/// A draft augmented with a fabricated id, a human-formatted completion
/// date, a verification URL and the issue timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCertificate {
    pub certificate_id: String,
    #[serde(flatten)]
    pub draft: CertificateDraft,
    pub formatted_date: String,
    pub verification_url: String,
    pub issued_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn draft() -> CertificateDraft {
        CertificateDraft {
            participant_name: "Jane Roe".to_string(),
            participant_email: "jane@example.com".to_string(),
            certificate_title: "Certificate of Completion".to_string(),
            course_name: "Rust Fundamentals".to_string(),
            completion_date: "2023-05-15".to_string(),
            expiry_date: String::new(),
            issuer_name: "Acme Academy".to_string(),
            issuer_signature: "A. Instructor".to_string(),
            template: catalog::builtin_templates().remove(0),
        }
    }

    #[test]
    fn complete_draft_has_no_missing_fields() {
        assert!(draft().missing_required().is_empty());
    }

    #[test]
    fn blank_mandatory_fields_are_reported() {
        let mut d = draft();
        d.participant_name = "   ".to_string();
        d.issuer_name = String::new();
        assert_eq!(d.missing_required(), vec!["participantName", "issuerName"]);
    }
}
