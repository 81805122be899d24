//! The simulated verification decision.
//!
//! Validity is decided purely by the id prefix and a successful check always
//! answers the same demo record; a real deployment swaps this for a lookup
//! against the issuance store (the backend endpoint does exactly that).

use crate::issue::CERTIFICATE_ID_PREFIX;
use crate::model::verification::{VerificationRecord, VerificationResponse};

pub const VALID_MESSAGE: &str = "Certificate is valid";
pub const INVALID_MESSAGE: &str = "Certificate not found or invalid";
pub const MISSING_ID_MESSAGE: &str = "Please enter a certificate ID or upload QR code";

/// The fixed record returned for any id the mock check accepts.
pub fn demo_record() -> VerificationRecord {
    VerificationRecord {
        participant_name: "John Doe".to_string(),
        course_name: "Advanced AI Programming".to_string(),
        completion_date: "2023-05-15".to_string(),
        issuer_name: "Dr. Sarah Smith".to_string(),
    }
}

/// Whether the mock check recognizes `certificate_id` at all.
pub fn is_recognized(certificate_id: &str) -> bool {
    certificate_id.starts_with(CERTIFICATE_ID_PREFIX)
}

/// The full mock decision for a non-empty id.
pub fn decide(certificate_id: &str) -> VerificationResponse {
    if is_recognized(certificate_id) {
        VerificationResponse {
            valid: true,
            message: VALID_MESSAGE.to_string(),
            certificate: Some(demo_record()),
        }
    } else {
        VerificationResponse {
            valid: false,
            message: INVALID_MESSAGE.to_string(),
            certificate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_id_is_valid_with_demo_record() {
        let response = decide("cert-abc123xyz");
        assert!(response.valid);
        assert_eq!(response.message, VALID_MESSAGE);
        let record = response.certificate.expect("valid response carries record");
        assert_eq!(record.participant_name, "John Doe");
        assert_eq!(record.course_name, "Advanced AI Programming");
        assert_eq!(record.completion_date, "2023-05-15");
        assert_eq!(record.issuer_name, "Dr. Sarah Smith");
    }

    #[test]
    fn unprefixed_id_is_invalid() {
        let response = decide("not-a-cert");
        assert!(!response.valid);
        assert_eq!(response.message, INVALID_MESSAGE);
        assert!(response.certificate.is_none());
    }

    #[test]
    fn empty_id_is_invalid_too() {
        // The UI short-circuits before the delayed check, but the decision
        // itself must still reject an empty id.
        assert!(!decide("").valid);
    }

    #[test]
    fn record_is_fixed_regardless_of_id() {
        let a = decide("cert-000000000");
        let b = decide("cert-fffffffff");
        assert_eq!(a.certificate, b.certificate);
    }
}
