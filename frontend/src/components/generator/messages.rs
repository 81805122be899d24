use common::model::certificate::GeneratedCertificate;
use common::model::template::Template;
use common::share::{DownloadFormat, SharePlatform};

/// Plain form fields. The participant name is not listed here: it rides its
/// own message so edits can drive the suggestion debounce.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ParticipantEmail,
    CertificateTitle,
    CourseName,
    CompletionDate,
    ExpiryDate,
    IssuerName,
    IssuerSignature,
}

pub enum Msg {
    FieldEdited(FormField, String),
    NameEdited(String),
    /// The suggestion debounce window elapsed for the given sequence number.
    NameProbeElapsed(u32),
    SuggestionsLoaded(u32, Vec<String>),
    SuggestionPicked(String),
    TemplateApplied(Template),
    Submit,
    Generated(GeneratedCertificate),
    GenerationFailed(String),
    CloseModal,
    Download(DownloadFormat),
    DownloadPrepared(DownloadFormat),
    Share(SharePlatform),
}
