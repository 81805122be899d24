//! View rendering for the certificate generator component.
//!
//! The Generate tab is a two-column layout: the certificate form on one side
//! and the template picker on the other. Submitting shows the loading
//! overlay; a successful generation opens the preview modal with the
//! download and share actions.

use common::share::{DownloadFormat, SharePlatform};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::certificate_preview_html;
use super::messages::{FormField, Msg};
use super::state::GeneratorComponent;
use crate::components::templates::TemplatePickerComponent;

pub fn view(component: &GeneratorComponent, ctx: &Context<GeneratorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="generate-tab">
            <div class="generate-columns">
                { build_form(component, link) }
                <TemplatePickerComponent on_apply={link.callback(Msg::TemplateApplied)} />
            </div>
            { build_overlay(component) }
            { build_modal(component, link) }
        </div>
    }
}

fn build_form(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let field = |label: &str, input_type: &str, value: &str, target: FormField, required: bool| {
        html! {
            <label class="form-field">
                { label }
                <input
                    type={input_type.to_string()}
                    value={value.to_string()}
                    required={required}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FieldEdited(target, input.value())
                    })}
                />
            </label>
        }
    };

    html! {
        <form
            class="certificate-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { build_name_field(component, link) }
            { field("Email", "email", &component.participant_email, FormField::ParticipantEmail, false) }
            { field("Certificate title", "text", &component.certificate_title, FormField::CertificateTitle, true) }
            { field("Course name", "text", &component.course_name, FormField::CourseName, true) }
            { field("Completion date", "date", &component.completion_date, FormField::CompletionDate, true) }
            { field("Expiry date", "date", &component.expiry_date, FormField::ExpiryDate, false) }
            { field("Issuer name", "text", &component.issuer_name, FormField::IssuerName, true) }
            { field("Issuer signature", "text", &component.issuer_signature, FormField::IssuerSignature, false) }

            <button type="submit" class="btn-generate" disabled={component.generating}>
                { "Generate Certificate" }
            </button>
        </form>
    }
}

/// Participant name input with the suggestions panel underneath. The panel
/// only exists while there are suggestions; picking one fills the input and
/// hides it again.
fn build_name_field(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    html! {
        <label class="form-field name-field">
            { "Participant name" }
            <input
                type="text"
                value={component.participant_name.clone()}
                required={true}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::NameEdited(input.value())
                })}
            />
            {
                if component.suggestions.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="name-suggestions">
                            { for component.suggestions.iter().map(|suggestion| {
                                let picked = suggestion.clone();
                                html! {
                                    <div
                                        class="suggestion-item"
                                        onclick={link.callback(move |_| Msg::SuggestionPicked(picked.clone()))}
                                    >
                                        { suggestion }
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </label>
    }
}

fn build_overlay(component: &GeneratorComponent) -> Html {
    match &component.loading_message {
        Some(message) => html! {
            <div class="loading-overlay active">
                <div class="spinner" />
                <p class="loading-text">{ message }</p>
            </div>
        },
        None => html! {},
    }
}

fn build_modal(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    if !component.modal_open {
        return html! {};
    }
    let Some(certificate) = &component.certificate else {
        return html! {};
    };

    let download = |format: DownloadFormat, label: &str| {
        html! {
            <button class="btn-download" onclick={link.callback(move |_| Msg::Download(format))}>
                { label }
            </button>
        }
    };
    let share = |platform: SharePlatform, label: &str| {
        html! {
            <button class="btn-share" onclick={link.callback(move |_| Msg::Share(platform))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="certificate-modal active" onclick={link.callback(|_| Msg::CloseModal)}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="close-modal" onclick={link.callback(|_| Msg::CloseModal)}>
                    { "×" }
                </button>
                <div class="certificate-preview">
                    { Html::from_html_unchecked(certificate_preview_html(certificate).into()) }
                </div>
                <div class="modal-actions">
                    { download(DownloadFormat::Pdf, "Download PDF") }
                    { download(DownloadFormat::Png, "Download PNG") }
                    { share(SharePlatform::Email, "Email") }
                    { share(SharePlatform::LinkedIn, "LinkedIn") }
                    { share(SharePlatform::Twitter, "Twitter") }
                </div>
            </div>
        </div>
    }
}
