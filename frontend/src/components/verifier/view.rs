//! View rendering for the certificate verifier component.
//!
//! Two method cards switch between manual id entry and QR upload; both feed
//! the same id field and the same submit flow. The result panel renders the
//! current [`VerifyState`].

use common::model::verification::VerificationResponse;
use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{VerifierComponent, VerifyMethod, VerifyState};

pub fn view(component: &VerifierComponent, ctx: &Context<VerifierComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="verify-tab">
            <div class="method-cards">
                { method_card(component, link, VerifyMethod::ManualId, "Enter Certificate ID") }
                { method_card(component, link, VerifyMethod::QrUpload, "Upload QR Code") }
            </div>

            {
                match component.method {
                    VerifyMethod::ManualId => html! {},
                    VerifyMethod::QrUpload => build_drop_zone(component, link),
                }
            }

            { build_id_form(component, link) }
            { build_result(component) }
        </div>
    }
}

fn method_card(
    component: &VerifierComponent,
    link: &Scope<VerifierComponent>,
    method: VerifyMethod,
    label: &str,
) -> Html {
    html! {
        <button
            class={classes!("method-card", (component.method == method).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetMethod(method))}
        >
            { label }
        </button>
    }
}

fn build_drop_zone(component: &VerifierComponent, link: &Scope<VerifierComponent>) -> Html {
    let on_drop = link.callback(|e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        let file = e
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        Msg::FileChosen(file)
    });
    let on_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragStateChanged(true)
    });
    let on_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragStateChanged(false)
    });

    html! {
        <div
            class={classes!("qr-drop-zone", component.drop_active.then_some("highlight"))}
            ondrop={on_drop}
            ondragover={on_drag_over}
            ondragenter={link.callback(|e: DragEvent| { e.prevent_default(); Msg::DragStateChanged(true) })}
            ondragleave={on_drag_leave}
        >
            <p>{ "Drag and drop a QR code image here" }</p>
            <button type="button" class="browse-qr" onclick={link.callback(|_| Msg::BrowseRequested)}>
                { "Browse" }
            </button>
            <input
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                style="display: none;"
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                })}
            />
            {
                match &component.qr_preview_url {
                    Some(preview_url) => html! {
                        <div class="qr-preview">
                            <img src={preview_url.clone()} alt="QR code preview" />
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_id_form(component: &VerifierComponent, link: &Scope<VerifierComponent>) -> Html {
    html! {
        <form
            class="verify-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <label class="form-field">
                { "Certificate ID" }
                <input
                    type="text"
                    placeholder="cert-..."
                    value={component.certificate_id.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::IdEdited(input.value())
                    })}
                />
            </label>
            <button type="submit" class="btn-verify" disabled={component.submitting()}>
                { "Verify Certificate" }
            </button>
        </form>
    }
}

fn build_result(component: &VerifierComponent) -> Html {
    match &component.state {
        VerifyState::Idle => html! {},
        VerifyState::Submitting => html! {
            <div class="loading-overlay active">
                <div class="spinner" />
                <p class="loading-text">{ "Verifying certificate..." }</p>
            </div>
        },
        VerifyState::Complete(response) => result_panel(response),
        VerifyState::Errored(message) => result_panel(&VerificationResponse {
            valid: false,
            message: message.clone(),
            certificate: None,
        }),
    }
}

fn result_panel(response: &VerificationResponse) -> Html {
    let detail_row = |label: &str, value: &str| {
        html! {
            <div class="result-detail">
                <span class="result-label">{ label }</span>
                <span class="result-value">{ value }</span>
            </div>
        }
    };

    html! {
        <div class={classes!("verification-result", if response.valid { "valid-result" } else { "invalid-result" })}>
            <div class="result-header">
                <span class="result-icon">{ if response.valid { "✔" } else { "✖" } }</span>
                <span class="result-title">
                    { if response.valid { "Valid Certificate" } else { "Invalid Certificate" } }
                </span>
            </div>
            <div class="result-message">{ &response.message }</div>
            {
                match &response.certificate {
                    Some(record) => html! {
                        <div class="result-details">
                            { detail_row("Name:", &record.participant_name) }
                            { detail_row("Course:", &record.course_name) }
                            { detail_row("Date:", &record.completion_date) }
                            { detail_row("Issued by:", &record.issuer_name) }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
