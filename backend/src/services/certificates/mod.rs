//! # Certificate Service Module
//!
//! This module aggregates all API endpoints related to certificate issuance
//! and lookup. It acts as a router, directing incoming HTTP requests under
//! the `/api/certificates` path to the handler logic defined in its
//! sub-modules.
//!
//! ## Sub-modules:
//! - `generate`: Validates a certificate draft, issues a certificate and
//!   registers it in the in-memory store.
//! - `verify`: Answers whether a certificate id is known and returns its
//!   public details.
//! - `download`: Serves the placeholder certificate payload as a named
//!   attachment in the requested format.

mod download;
mod generate;
mod verify;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all certificate-related API endpoints.
const API_PATH: &str = "/api/certificates";

/// Configures and returns the Actix `Scope` for all certificate routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**:
///     - **Handler**: `generate::process`
///     - **Description**: Accepts a JSON `CertificateDraft`. Rejects drafts
///       whose mandatory fields (participant name, course name, completion
///       date, issuer name) are blank, otherwise mints an id, formats the
///       completion date, stores the generated record and answers `201` with
///       the record plus its download and verification URLs.
///
/// *   **`GET /verify/{certificate_id}`**:
///     - **Handler**: `verify::process`
///     - **Description**: Looks the id up in the store and answers the
///       `{valid, message, certificate}` envelope; unknown ids are reported
///       as invalid with a `200`, not as an HTTP error.
///
/// *   **`GET /download/{certificate_id}`**:
///     - **Handler**: `download::process`
///     - **Description**: Serves the certificate payload for a stored id in
///       the format given by the `format` query parameter (`pdf` or `png`),
///       with the canonical attachment filename.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::process))
        .route("/verify/{certificate_id}", get().to(verify::process))
        .route("/download/{certificate_id}", get().to(download::process))
}

#[cfg(test)]
pub(crate) mod test_support {
    use common::catalog;
    use common::model::certificate::CertificateDraft;

    pub fn draft() -> CertificateDraft {
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
}
