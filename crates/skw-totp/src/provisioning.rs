//! Setup payloads for authenticator apps. Nothing here renders images: the QR
//! url points at an external renderer that does.

use serde::{Serialize, Deserialize};

pub const QR_RENDERER: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    pub width: u32,
    pub height: u32,
    pub level: ErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self { width: 200, height: 200, level: ErrorCorrection::M }
    }
}

/// `otpauth://totp/<account>?secret=<secret>[&issuer=<issuer>]`
pub fn key_uri(account: &str, secret: &str, issuer: Option<&str>) -> String {
    let mut uri = format!(
        "otpauth://totp/{}?secret={}",
        urlencoding::encode(account),
        urlencoding::encode(secret),
    );
    if let Some(issuer) = issuer {
        uri.push_str("&issuer=");
        uri.push_str(&urlencoding::encode(issuer));
    }
    uri
}

pub fn qr_code_url(account: &str, secret: &str, issuer: Option<&str>, options: QrOptions) -> String {
    format!(
        "{}?data={}&size={}x{}&ecc={}",
        QR_RENDERER,
        urlencoding::encode(&key_uri(account, secret, issuer)),
        options.width,
        options.height,
        options.level.as_str(),
    )
}
