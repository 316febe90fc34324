//! Payment links and QR image URLs

use reqwest::Url;

/// Public QR image generation endpoint
pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Rendered QR edge length in pixels
pub const QR_SIZE: u32 = 300;

/// Link that opens the pay page for an intent
pub fn payment_link(origin: &str, intent_id: &str) -> String {
    format!("{origin}/payment/{intent_id}")
}

/// Where the processor sends the payer after a successful confirmation
pub fn success_url(origin: &str) -> String {
    format!("{origin}/payment/success")
}

/// Image URL for a QR code encoding `data`
pub fn qr_image_url(data: &str, size: u32) -> String {
    let dimensions = format!("{size}x{size}");
    match Url::parse_with_params(QR_SERVICE_URL, &[("size", dimensions.as_str()), ("data", data)]) {
        Ok(url) => url.to_string(),
        Err(_) => String::new(),
    }
}

pub fn download_file_name(timestamp_ms: i64) -> String {
    format!("payment-qr-{timestamp_ms}.png")
}
