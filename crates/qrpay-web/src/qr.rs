//! QR Renderer
//!
//! Paints a QR image fetched from the public generation service onto a
//! canvas. If the image never loads the canvas stays blank.

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use crate::components::{use_toasts, PaymentSummary};
use crate::links::{download_file_name, qr_image_url, QR_SIZE};

fn draw_remote_image(canvas: &HtmlCanvasElement, src: &str, size: u32) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));

    let target = canvas.clone();
    let loaded = image.clone();
    let on_load = Closure::once_into_js(move || {
        target.set_width(size);
        target.set_height(size);
        let edge = f64::from(size);
        if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(&loaded, 0.0, 0.0, edge, edge) {
            logging::warn!("Error drawing QR code: {:?}", e);
        }
    });

    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_src(src);
    Ok(())
}

fn download_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let href = canvas.to_data_url()?;
    let link = document()
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;

    link.set_download(&download_file_name(chrono::Utc::now().timestamp_millis()));
    link.set_href(&href);
    link.click();
    Ok(())
}

async fn copy_text(text: &str) -> Result<(), JsValue> {
    let clipboard = window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.map(|_| ())
}

/// QR code for a payment link, with copy and download actions
#[component]
pub fn QrCode(url: String, amount: i64, description: String) -> impl IntoView {
    let toasts = use_toasts();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let src = qr_image_url(&url, QR_SIZE);

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = draw_remote_image(&canvas, &src, QR_SIZE) {
                logging::warn!("Error generating QR code: {:?}", e);
            }
        }
    });

    let copy_url = url.clone();
    let copy_link = move |_| {
        let text = copy_url.clone();
        leptos::task::spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => toasts.success("Copied!", "Payment link copied to clipboard"),
                Err(_) => toasts.error("Error", "Failed to copy link"),
            }
        });
    };

    let download = move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = download_canvas(&canvas) {
                logging::warn!("Error downloading QR code: {:?}", e);
            }
        }
    };

    view! {
        <div class="qr">
            <div class="qr-canvas">
                <canvas node_ref=canvas_ref></canvas>
            </div>

            <PaymentSummary amount=amount description=Some(description) />
            <p class="link"><strong>"Link: "</strong>{url}</p>

            <div class="actions">
                <button class="btn" on:click=copy_link>"Copy Link"</button>
                <button class="btn" on:click=download>"Download QR"</button>
            </div>
        </div>
    }
}
