//! Update function for the certificate generator component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Debounced name suggestions through the service interface, with a
//!   sequence counter so stale timers and responses are dropped.
//! - Submit bundles the form and the working template into a draft and runs
//!   it through `service.generate`; at most one generation is in flight and
//!   re-submits during it are ignored.
//! - Download shows the timed overlay, then clicks the placeholder `data:`
//!   link; share opens the platform URL in a new tab.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{show_toast, trigger_download};
use super::messages::Msg;
use super::state::GeneratorComponent;

/// Typing pause before the name is sent for suggestions.
const NAME_DEBOUNCE_MS: u32 = 500;

/// Simulated preparation time before a download link is clicked.
const DOWNLOAD_DELAY_MS: u32 = 1000;

pub fn update(
    component: &mut GeneratorComponent,
    ctx: &Context<GeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FieldEdited(field, value) => {
            component.set_field(field, value);
            true
        }
        Msg::NameEdited(value) => {
            component.participant_name = value;
            if component.participant_name.trim().len() > 2 {
                component.name_probe_seq = component.name_probe_seq.wrapping_add(1);
                let seq = component.name_probe_seq;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(NAME_DEBOUNCE_MS).await;
                    link.send_message(Msg::NameProbeElapsed(seq));
                });
                true
            } else {
                let had_suggestions = !component.suggestions.is_empty();
                component.suggestions.clear();
                had_suggestions
            }
        }
        Msg::NameProbeElapsed(seq) => {
            // Only the newest debounce timer is allowed to fire a lookup.
            if seq != component.name_probe_seq {
                return false;
            }
            let name = component.participant_name.trim().to_string();
            let service = ctx.props().service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match service.suggest_names(&name).await {
                    Ok(suggestions) => link.send_message(Msg::SuggestionsLoaded(seq, suggestions)),
                    Err(e) => {
                        // Suggestion failures are logged and otherwise ignored.
                        error!(format!("Error validating name: {}", e));
                        link.send_message(Msg::SuggestionsLoaded(seq, Vec::new()));
                    }
                }
            });
            false
        }
        Msg::SuggestionsLoaded(seq, suggestions) => {
            if seq != component.name_probe_seq {
                return false;
            }
            component.suggestions = suggestions;
            true
        }
        Msg::SuggestionPicked(name) => {
            component.participant_name = name;
            component.suggestions.clear();
            true
        }
        Msg::TemplateApplied(template) => {
            component.current_template = template;
            true
        }
        Msg::Submit => {
            if component.generating {
                return false;
            }
            component.generating = true;
            component.loading_message = Some("Generating certificate...".to_string());

            let service = ctx.props().service.clone();
            let draft = component.draft();
            let link = ctx.link().clone();
            spawn_local(async move {
                match service.generate(draft).await {
                    Ok(certificate) => link.send_message(Msg::Generated(certificate)),
                    Err(e) => link.send_message(Msg::GenerationFailed(e)),
                }
            });
            true
        }
        Msg::Generated(certificate) => {
            component.generating = false;
            component.loading_message = None;
            component.certificate = Some(certificate);
            component.modal_open = true;
            true
        }
        Msg::GenerationFailed(e) => {
            component.generating = false;
            component.loading_message = None;
            error!(format!("Error generating certificate: {}", e));
            show_toast("Failed to generate certificate. Please try again.");
            true
        }
        Msg::CloseModal => {
            component.modal_open = false;
            true
        }
        Msg::Download(format) => {
            if component.certificate.is_none() {
                return false;
            }
            component.loading_message = Some(format!(
                "Preparing {} download...",
                format.extension().to_uppercase()
            ));
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(DOWNLOAD_DELAY_MS).await;
                link.send_message(Msg::DownloadPrepared(format));
            });
            true
        }
        Msg::DownloadPrepared(format) => {
            component.loading_message = None;
            if let Some(certificate) = &component.certificate {
                trigger_download(&certificate.certificate_id, format);
            }
            true
        }
        Msg::Share(platform) => {
            if let Some(certificate) = &component.certificate {
                let url = common::share::share_url(platform, certificate);
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
            false
        }
    }
}
