use common::model::verification::VerificationResponse;

use super::state::VerifyMethod;

pub enum Msg {
    SetMethod(VerifyMethod),
    IdEdited(String),
    /// Open the hidden file input.
    BrowseRequested,
    /// A file arrived from the input or the drop zone; `None` when the
    /// selection or drop carried no file.
    FileChosen(Option<web_sys::File>),
    DragStateChanged(bool),
    /// The uploaded image was read: preview data URL plus the id extracted
    /// from the filename.
    QrLoaded {
        preview_url: String,
        certificate_id: String,
    },
    Submit,
    Completed(VerificationResponse),
    Failed(String),
}
