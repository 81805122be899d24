//! Component state for the certificate generator.

use common::catalog;
use common::model::certificate::{CertificateDraft, GeneratedCertificate};
use common::model::template::Template;

use super::messages::FormField;

/// Main state container for the `GeneratorComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct GeneratorComponent {
    pub participant_name: String,
    pub participant_email: String,
    pub certificate_title: String,
    pub course_name: String,
    pub completion_date: String,
    pub expiry_date: String,
    pub issuer_name: String,
    pub issuer_signature: String,

    /// The working template: the last applied catalog selection plus
    /// customization. Owned here, not ambient; the picker only reports into
    /// it through a callback.
    pub current_template: Template,

    /// Current name suggestions; empty keeps the panel hidden.
    pub suggestions: Vec<String>,
    /// Monotonic counter pairing debounce timers and suggestion responses
    /// with the newest edit; stale ones are dropped.
    pub name_probe_seq: u32,

    /// Single-in-flight guard: a submit while a generation is pending is
    /// ignored rather than racing it.
    pub generating: bool,
    /// Text of the full-page loading overlay, when shown.
    pub loading_message: Option<String>,

    /// The most recently generated certificate, kept for the preview modal
    /// and the download/share actions until the page reloads.
    pub certificate: Option<GeneratedCertificate>,
    pub modal_open: bool,
}

impl GeneratorComponent {
    pub fn new() -> Self {
        GeneratorComponent {
            participant_name: String::new(),
            participant_email: String::new(),
            certificate_title: String::new(),
            course_name: String::new(),
            completion_date: String::new(),
            expiry_date: String::new(),
            issuer_name: String::new(),
            issuer_signature: String::new(),
            current_template: catalog::builtin_templates().remove(0),
            suggestions: Vec::new(),
            name_probe_seq: 0,
            generating: false,
            loading_message: None,
            certificate: None,
            modal_open: false,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::ParticipantEmail => self.participant_email = value,
            FormField::CertificateTitle => self.certificate_title = value,
            FormField::CourseName => self.course_name = value,
            FormField::CompletionDate => self.completion_date = value,
            FormField::ExpiryDate => self.expiry_date = value,
            FormField::IssuerName => self.issuer_name = value,
            FormField::IssuerSignature => self.issuer_signature = value,
        }
    }

    /// Bundles the form fields with a snapshot of the working template.
    pub fn draft(&self) -> CertificateDraft {
        CertificateDraft {
            participant_name: self.participant_name.clone(),
            participant_email: self.participant_email.clone(),
            certificate_title: self.certificate_title.clone(),
            course_name: self.course_name.clone(),
            completion_date: self.completion_date.clone(),
            expiry_date: self.expiry_date.clone(),
            issuer_name: self.issuer_name.clone(),
            issuer_signature: self.issuer_signature.clone(),
            template: self.current_template.clone(),
        }
    }
}
