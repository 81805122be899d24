//! Component state for the certificate verifier.

use common::model::verification::VerificationResponse;
use yew::prelude::*;

/// How the certificate id is being provided.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum VerifyMethod {
    ManualId,
    QrUpload,
}

/// The verification submission state machine. One submission at a time:
/// `Idle` → `Submitting` → (`Complete` | `Errored`), and back to a fresh
/// cycle on the next submit. Submits while `Submitting` are ignored.
pub enum VerifyState {
    Idle,
    Submitting,
    /// The check ran; `VerificationResponse::valid` distinguishes the valid
    /// and invalid outcomes. Input-validation failures (no id entered) land
    /// here too, as an invalid result with its own message.
    Complete(VerificationResponse),
    /// The check itself could not run.
    Errored(String),
}

pub struct VerifierComponent {
    pub method: VerifyMethod,
    pub certificate_id: String,
    /// Data URL of the uploaded QR image, shown as a thumbnail.
    pub qr_preview_url: Option<String>,
    /// Whether a drag is currently hovering the drop zone.
    pub drop_active: bool,
    pub state: VerifyState,
    /// Reference to the hidden file input behind the Browse button.
    pub file_input_ref: NodeRef,
}

impl VerifierComponent {
    pub fn new() -> Self {
        VerifierComponent {
            method: VerifyMethod::ManualId,
            certificate_id: String::new(),
            qr_preview_url: None,
            drop_active: false,
            state: VerifyState::Idle,
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn submitting(&self) -> bool {
        matches!(self.state, VerifyState::Submitting)
    }
}

/// Extracts the simulated certificate id from an uploaded image's filename:
/// the stem before the first dot. This is a stand-in for QR decoding, which
/// never happens; a real decoder would replace this single call.
pub fn certificate_id_from_filename(filename: &str) -> String {
    filename.split('.').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_stem_is_the_simulated_id() {
        assert_eq!(certificate_id_from_filename("cert-abc123xyz.png"), "cert-abc123xyz");
        assert_eq!(certificate_id_from_filename("photo.2023.jpg"), "photo");
        assert_eq!(certificate_id_from_filename("noextension"), "noextension");
        assert_eq!(certificate_id_from_filename(""), "");
    }
}
