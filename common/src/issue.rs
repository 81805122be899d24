//! Certificate issuance: id minting, date formatting and record assembly.
//!
//! This is the fabrication half of the generation contract. Callers treat
//! "accepts a draft, asynchronously returns a generated record or fails" as
//! the interface; the mock frontend service and the backend endpoint both
//! delegate here so the two halves fabricate identical records.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::model::certificate::{CertificateDraft, GeneratedCertificate};

/// Every issued certificate id carries this prefix; the mock verifier
/// recognizes ids solely by it.
pub const CERTIFICATE_ID_PREFIX: &str = "cert-";

/// Number of random characters after the prefix.
const ID_SUFFIX_LEN: usize = 9;

/// Base URL embedded in verification links and QR payloads.
pub const VERIFICATION_BASE_URL: &str = "https://certiai.example.com/verify";

/// Mints a fresh certificate id: the fixed prefix followed by nine random
/// lowercase hex characters drawn from a v4 UUID.
pub fn mint_certificate_id() -> String {
    let entropy = Uuid::new_v4().simple().to_string();
    format!("{}{}", CERTIFICATE_ID_PREFIX, &entropy[..ID_SUFFIX_LEN])
}

/// Renders an ISO `YYYY-MM-DD` completion date for display, e.g.
/// `2023-05-15` becomes `May 15, 2023`.
pub fn format_completion_date(iso_date: &str) -> Result<String, String> {
    let date = NaiveDate::parse_from_str(iso_date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid completion date '{}': {}", iso_date, e))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

/// The public verification URL for a certificate id.
pub fn verification_url(certificate_id: &str) -> String {
    format!("{}/{}", VERIFICATION_BASE_URL, certificate_id)
}

/// Assembles a [`GeneratedCertificate`] from a draft. Fails only when the
/// completion date cannot be parsed.
pub fn issue_certificate(draft: CertificateDraft) -> Result<GeneratedCertificate, String> {
    let certificate_id = mint_certificate_id();
    let formatted_date = format_completion_date(&draft.completion_date)?;
    Ok(GeneratedCertificate {
        verification_url: verification_url(&certificate_id),
        certificate_id,
        draft,
        formatted_date,
        issued_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::certificate::CertificateDraft;

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

    fn is_well_formed(id: &str) -> bool {
        id.strip_prefix(CERTIFICATE_ID_PREFIX).is_some_and(|suffix| {
            suffix.len() == 9 && suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase())
        })
    }

    #[test]
    fn minted_ids_carry_prefix_and_are_distinct() {
        let first = mint_certificate_id();
        let second = mint_certificate_id();
        assert!(is_well_formed(&first), "malformed id: {}", first);
        assert!(is_well_formed(&second), "malformed id: {}", second);
        assert_ne!(first, second);
    }

    #[test]
    fn completion_date_renders_long_form() {
        assert_eq!(
            format_completion_date("2023-05-15").unwrap(),
            "May 15, 2023"
        );
        // Single-digit days are not zero padded.
        assert_eq!(format_completion_date("2024-01-03").unwrap(), "January 3, 2024");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(format_completion_date("yesterday").is_err());
        assert!(format_completion_date("").is_err());
    }

    #[test]
    fn issued_certificate_embeds_id_in_verification_url() {
        let generated = issue_certificate(draft()).unwrap();
        assert!(is_well_formed(&generated.certificate_id));
        assert_eq!(
            generated.verification_url,
            format!("{}/{}", VERIFICATION_BASE_URL, generated.certificate_id)
        );
        assert_eq!(generated.formatted_date, "May 15, 2023");
    }

    #[test]
    fn concurrent_issuance_produces_independent_records() {
        // Two generations from the same draft must not share an id.
        let a = issue_certificate(draft()).unwrap();
        let b = issue_certificate(draft()).unwrap();
        assert_ne!(a.certificate_id, b.certificate_id);
    }
}
