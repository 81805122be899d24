//! Share, QR and download URL construction for generated certificates.

use crate::model::certificate::GeneratedCertificate;

/// Third-party renderer that turns the verification URL into a QR image.
const QR_RENDERER_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Placeholder body served for downloads; no real file is produced in any
/// format.
pub const DOWNLOAD_PLACEHOLDER: &str = "Certificate content would be here";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Email,
    LinkedIn,
    Twitter,
}

impl SharePlatform {
    pub fn parse(raw: &str) -> Option<SharePlatform> {
        match raw {
            "email" => Some(SharePlatform::Email),
            "linkedin" => Some(SharePlatform::LinkedIn),
            "twitter" => Some(SharePlatform::Twitter),
            _ => None,
        }
    }
}

/// Download formats offered by the UI and the download endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Pdf,
    Png,
}

impl DownloadFormat {
    pub const SUPPORTED: [&'static str; 2] = ["pdf", "png"];

    pub fn parse(raw: &str) -> Option<DownloadFormat> {
        match raw.to_ascii_lowercase().as_str() {
            "pdf" => Some(DownloadFormat::Pdf),
            "png" => Some(DownloadFormat::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Pdf => "pdf",
            DownloadFormat::Png => "png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DownloadFormat::Pdf => "application/pdf",
            DownloadFormat::Png => "image/png",
        }
    }
}

/// URL of the rendered QR image for a verification URL.
pub fn qr_image_url(verification_url: &str) -> String {
    format!(
        "{}?size=150x150&data={}",
        QR_RENDERER_URL,
        urlencoding::encode(verification_url)
    )
}

/// Canonical download filename for a certificate id and format.
pub fn download_file_name(certificate_id: &str, format: DownloadFormat) -> String {
    format!("certificate_{}.{}", certificate_id, format.extension())
}

/// Same-page `data:` link used by the client-side download action.
pub fn download_data_url(format: DownloadFormat) -> String {
    format!(
        "data:application/{};charset=utf-8,{}",
        format.extension(),
        urlencoding::encode(DOWNLOAD_PLACEHOLDER)
    )
}

/// Platform-specific share URL embedding course name, issuer and the
/// verification link.
pub fn share_url(platform: SharePlatform, certificate: &GeneratedCertificate) -> String {
    let course = &certificate.draft.course_name;
    let issuer = &certificate.draft.issuer_name;
    let verify = &certificate.verification_url;

    match platform {
        SharePlatform::Email => format!(
            "mailto:?subject=My Certificate - {}&body=Here's my certificate: {}",
            course, verify
        ),
        SharePlatform::LinkedIn => format!(
            "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}&summary={}",
            verify,
            urlencoding::encode(&format!("I earned a certificate in {}", course)),
            urlencoding::encode(&format!("Check out my certificate from {}", issuer)),
        ),
        SharePlatform::Twitter => {
            let text = format!(
                "I just earned a certificate in {} from {}! Check it out: {}",
                course, issuer, verify
            );
            format!(
                "https://twitter.com/intent/tweet?text={}",
                urlencoding::encode(&text)
            )
        }
    }
}
