//! Update function for the certificate verifier component.
//!
//! Key behaviors
//! - Empty-id submits short-circuit to an invalid result with the
//!   input-validation message; the delayed check is never invoked.
//! - At most one check is in flight; submits while `Submitting` are ignored.
//! - Uploaded images are read to a base64 data URL for the thumbnail and the
//!   certificate id is taken from the filename stem.

use base64::{engine::general_purpose, Engine as _};
use common::model::verification::VerificationResponse;
use common::verify::MISSING_ID_MESSAGE;
use gloo_console::error;
use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{certificate_id_from_filename, VerifierComponent, VerifyState};

pub fn update(
    component: &mut VerifierComponent,
    ctx: &Context<VerifierComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetMethod(method) => {
            component.method = method;
            true
        }
        Msg::IdEdited(value) => {
            component.certificate_id = value;
            false
        }
        Msg::BrowseRequested => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(file) => {
            component.drop_active = false;
            let Some(file) = file else { return true };
            if !file.type_().starts_with("image") {
                return true;
            }

            let certificate_id = certificate_id_from_filename(&file.name());
            let mime = file.type_();
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => {
                        let preview_url = format!(
                            "data:{};base64,{}",
                            mime,
                            general_purpose::STANDARD.encode(&bytes)
                        );
                        link.send_message(Msg::QrLoaded {
                            preview_url,
                            certificate_id,
                        });
                    }
                    Err(e) => error!(format!("Error reading QR image: {}", e)),
                }
            });
            true
        }
        Msg::QrLoaded {
            preview_url,
            certificate_id,
        } => {
            component.qr_preview_url = Some(preview_url);
            component.certificate_id = certificate_id;
            true
        }
        Msg::DragStateChanged(active) => {
            let changed = component.drop_active != active;
            component.drop_active = active;
            changed
        }
        Msg::Submit => {
            if component.submitting() {
                return false;
            }

            let certificate_id = component.certificate_id.trim().to_string();
            if certificate_id.is_empty() {
                // User-input validation, not an error; the service is never
                // consulted.
                component.state = VerifyState::Complete(VerificationResponse {
                    valid: false,
                    message: MISSING_ID_MESSAGE.to_string(),
                    certificate: None,
                });
                return true;
            }

            component.state = VerifyState::Submitting;
            let service = ctx.props().service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match service.verify(&certificate_id).await {
                    Ok(response) => link.send_message(Msg::Completed(response)),
                    Err(e) => link.send_message(Msg::Failed(e)),
                }
            });
            true
        }
        Msg::Completed(response) => {
            component.state = VerifyState::Complete(response);
            true
        }
        Msg::Failed(e) => {
            error!(format!("Error verifying certificate: {}", e));
            component.state = VerifyState::Errored("Error verifying certificate".to_string());
            true
        }
    }
}
