//! Stripe.js bindings
//!
//! Minimal surface of the hosted Stripe.js library (loaded from
//! `index.html`): create the Payment Element and confirm the payment.

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type Stripe;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &Stripe, options: &JsValue) -> Elements;

    #[wasm_bindgen(method, js_name = confirmPayment)]
    fn confirm_payment(this: &Stripe, options: &JsValue) -> Promise;

    #[derive(Clone)]
    type Elements;

    #[wasm_bindgen(method)]
    fn create(this: &Elements, kind: &str) -> PaymentElement;

    type PaymentElement;

    #[wasm_bindgen(method)]
    fn mount(this: &PaymentElement, target: &web_sys::Element);
}

/// A mounted Payment Element bound to one intent
#[derive(Clone)]
pub struct StripeCheckout {
    stripe: Stripe,
    elements: Elements,
}

fn object(entries: &[(&str, &JsValue)]) -> Result<Object, JsValue> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj)
}

fn js_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Stripe.js error".into())
}

impl StripeCheckout {
    /// Mount the Payment Element for `client_secret` into `target`
    pub fn mount(
        publishable_key: &str,
        client_secret: &str,
        target: &web_sys::Element,
    ) -> Result<Self, String> {
        let stripe = stripe(publishable_key).map_err(|e| js_message(&e))?;

        let appearance = object(&[("theme", &JsValue::from_str("stripe"))]).map_err(|e| js_message(&e))?;
        let options = object(&[
            ("clientSecret", &JsValue::from_str(client_secret)),
            ("appearance", &appearance.into()),
        ])
        .map_err(|e| js_message(&e))?;

        let elements = stripe.elements(&options.into());
        elements.create("payment").mount(target);

        Ok(Self { stripe, elements })
    }

    /// Confirm the payment
    ///
    /// On success Stripe.js navigates to `return_url` and this never
    /// resolves with an error. Returns the message Stripe reports otherwise.
    pub async fn confirm(&self, return_url: &str) -> Result<(), Option<String>> {
        let confirm_params = object(&[("return_url", &JsValue::from_str(return_url))])
            .map_err(|e| Some(js_message(&e)))?;
        let options = object(&[
            ("elements", &self.elements.clone().into()),
            ("confirmParams", &confirm_params.into()),
        ])
        .map_err(|e| Some(js_message(&e)))?;

        let result = JsFuture::from(self.stripe.confirm_payment(&options.into()))
            .await
            .map_err(|e| Some(js_message(&e)))?;

        let error = Reflect::get(&result, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            return Ok(());
        }

        Err(Reflect::get(&error, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string()))
    }
}
