//! Pay Page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::PaymentSummary;
use crate::links::success_url;
use crate::state::PayState;
use crate::stripe_js::StripeCheckout;

const CONFIRMATION_FALLBACK: &str = "An unexpected error occurred.";

#[component]
pub fn PayPage() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal(PayState::Loading);
    let (publishable_key, set_publishable_key) = signal(None::<String>);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        set_state.set(PayState::Loading);

        leptos::task::spawn_local(async move {
            let lookup = api::fetch_payment_intent(&id).await;
            let next = PayState::from_lookup(lookup);

            if matches!(next, PayState::AwaitingPayment(_)) {
                match api::fetch_config().await {
                    Ok(config) => set_publishable_key.set(config.publishable_key),
                    Err(e) => leptos::logging::warn!("Failed to load config: {}", e),
                }
            }

            set_state.set(next);
        });
    });

    move || match state.get() {
        PayState::Loading => view! {
            <div class="pay centered">
                <div class="spinner" aria-label="Loading"></div>
            </div>
        }
        .into_any(),

        PayState::Error(message) => view! {
            <div class="pay centered">
                <section class="card">
                    <h2 class="text-error">"Payment Error"</h2>
                    <p>{message}</p>
                </section>
            </div>
        }
        .into_any(),

        PayState::NotFound => view! {
            <div class="pay centered">
                <section class="card">
                    <h2>"Payment Not Found"</h2>
                    <p>"The payment link is invalid or has expired."</p>
                </section>
            </div>
        }
        .into_any(),

        PayState::AlreadySucceeded(info) => view! {
            <div class="pay centered">
                <section class="card">
                    <h2 class="text-success">"Payment Successful"</h2>
                    <p>"Your payment has been processed successfully."</p>
                    <PaymentSummary amount=info.amount description=info.description />
                </section>
            </div>
        }
        .into_any(),

        PayState::AwaitingPayment(info) => view! {
            <div class="pay centered">
                <section class="card">
                    <h2>"Complete Payment"</h2>
                    <p class="subtitle">"Secure payment powered by Stripe"</p>
                    <PaymentSummary amount=info.amount description=info.description />
                    {move || match publishable_key.get() {
                        Some(key) => view! {
                            <PaymentForm publishable_key=key client_secret=info.client_secret.clone() />
                        }
                        .into_any(),
                        None => view! {
                            <p class="text-error">"Payment form unavailable."</p>
                        }
                        .into_any(),
                    }}
                </section>
            </div>
        }
        .into_any(),
    }
}

/// Hosted Payment Element plus the submit button
#[component]
fn PaymentForm(publishable_key: String, client_secret: String) -> impl IntoView {
    let element_ref = NodeRef::<leptos::html::Div>::new();
    let checkout = StoredValue::new_local(None::<StripeCheckout>);
    let (ready, set_ready) = signal(false);
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(target) = element_ref.get() else { return };
        if checkout.with_value(Option::is_some) {
            return;
        }

        match StripeCheckout::mount(&publishable_key, &client_secret, &target) {
            Ok(mounted) => {
                checkout.set_value(Some(mounted));
                set_ready.set(true);
            }
            Err(e) => {
                leptos::logging::error!("Failed to mount payment form: {}", e);
                set_message.set(Some(e));
            }
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(stripe) = checkout.get_value() else { return };
        if loading.get_untracked() {
            return;
        }

        set_loading.set(true);
        leptos::task::spawn_local(async move {
            if let Err(err) = stripe.confirm(&success_url(&api::origin())).await {
                set_message.set(Some(err.unwrap_or_else(|| CONFIRMATION_FALLBACK.into())));
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="payment-form" on:submit=submit>
            <div node_ref=element_ref id="payment-element"></div>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || loading.get() || !ready.get()
            >
                {move || if loading.get() { "Processing..." } else { "Pay Now" }}
            </button>

            {move || message.get().map(|msg| view! { <p class="text-error">{msg}</p> })}
        </form>
    }
}
