//! Utility functions for the certificate generator component.
//!
//! - **Preview assembly**: rendering a generated certificate into the HTML
//!   fragment shown in the modal, with all user text escaped.
//! - **User feedback**: temporary toast notifications.
//! - **Download plumbing**: clicking a programmatic `data:` link.

use common::model::certificate::GeneratedCertificate;
use common::share::{download_data_url, download_file_name, qr_image_url, DownloadFormat};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

/// Escapes special HTML characters in a string.
///
/// Everything user-entered that ends up in the preview fragment goes through
/// here first, so names or course titles cannot be misinterpreted as markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the certificate preview fragment.
///
/// The working template drives the border gradient and the font; the QR
/// image is fetched from the third-party renderer keyed by the verification
/// URL. The fragment is injected as raw HTML into the modal, which is why
/// every interpolated value is escaped.
pub fn certificate_preview_html(certificate: &GeneratedCertificate) -> String {
    let draft = &certificate.draft;
    let template = &draft.template;
    format!(
        concat!(
            "<div class=\"certificate border-{border}\" style=\"",
            "border-image: linear-gradient(135deg, {primary}, {secondary}) 1; ",
            "font-family: '{font}', sans-serif;\">",
            "<div class=\"certificate-header\">",
            "<h2>{title}</h2>",
            "<p>This is to certify that</p>",
            "</div>",
            "<div class=\"participant-name\">{participant}</div>",
            "<div class=\"certificate-body\">",
            "<p>has successfully completed the program</p>",
            "<p class=\"course-name\">{course}</p>",
            "<p>on {date}</p>",
            "</div>",
            "<div class=\"certificate-footer\">",
            "<div class=\"issuer-signature\">",
            "<div class=\"signature-line\"></div>",
            "<p>{signature}</p>",
            "<p>{issuer}</p>",
            "</div>",
            "<div class=\"qr-code\">",
            "<img src=\"{qr}\" alt=\"Certificate QR Code\">",
            "</div>",
            "</div>",
            "</div>",
        ),
        border = escape_html(&template.border),
        primary = escape_html(&template.primary_color),
        secondary = escape_html(&template.secondary_color),
        font = escape_html(&template.font),
        title = escape_html(&draft.certificate_title),
        participant = escape_html(&draft.participant_name),
        course = escape_html(&draft.course_name),
        date = escape_html(&certificate.formatted_date),
        signature = escape_html(&draft.issuer_signature),
        issuer = escape_html(&draft.issuer_name),
        qr = escape_html(&qr_image_url(&certificate.verification_url)),
    )
}

/// Displays a temporary notification message at the bottom of the screen.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Builds the `data:` download link for a certificate and clicks it.
///
/// The payload is the literal placeholder; no real file is produced in any
/// format.
pub fn trigger_download(certificate_id: &str, format: DownloadFormat) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(anchor), Some(body)) = (document.create_element("a"), document.body()) {
            let anchor: HtmlAnchorElement = anchor.unchecked_into();
            anchor.set_href(&download_data_url(format));
            anchor.set_download(&download_file_name(certificate_id, format));
            if body.append_child(&anchor).is_ok() {
                anchor.click();
                if let Some(parent) = anchor.parent_node() {
                    parent.remove_child(&anchor).ok();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog;
    use common::model::certificate::CertificateDraft;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b>"J&J's"</b>"#),
            "&lt;b&gt;&quot;J&amp;J&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn preview_embeds_escaped_draft_and_template() {
        let certificate = common::issue::issue_certificate(CertificateDraft {
            participant_name: "Jane <script> Roe".to_string(),
            participant_email: "jane@example.com".to_string(),
            certificate_title: "Certificate of Completion".to_string(),
            course_name: "Rust & WebAssembly".to_string(),
            completion_date: "2023-05-15".to_string(),
            expiry_date: String::new(),
            issuer_name: "Acme Academy".to_string(),
            issuer_signature: "A. Instructor".to_string(),
            template: catalog::builtin_templates().remove(0),
        })
        .unwrap();

        let preview = certificate_preview_html(&certificate);
        assert!(preview.contains("Jane &lt;script&gt; Roe"));
        assert!(!preview.contains("<script>"));
        assert!(preview.contains("Rust &amp; WebAssembly"));
        assert!(preview.contains("on May 15, 2023"));
        assert!(preview.contains("linear-gradient(135deg, #4361ee, #3f37c9)"));
        assert!(preview.contains("api.qrserver.com"));
    }
}
