//! Create Page

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::components::use_toasts;
use crate::links::payment_link;
use crate::qr::QrCode;
use crate::state::{CreateState, SubmitError};

const DEFAULT_DESCRIPTION: &str = "Payment via QR Code";

#[component]
pub fn CreatePage() -> impl IntoView {
    let toasts = use_toasts();
    let (amount, set_amount) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (state, set_state) = signal(CreateState::Editing);
    let (form_error, set_form_error) = signal(None::<String>);

    let generate = move |_| {
        let (next, cents) = match state.get_untracked().submit(&amount.get_untracked()) {
            Ok(submitted) => submitted,
            Err(SubmitError::Busy) => return,
            Err(SubmitError::InvalidAmount(e)) => {
                toasts.error("Invalid Amount", &e.to_string());
                return;
            }
        };

        set_form_error.set(None);
        set_state.set(next);

        let desc = description.get_untracked();
        leptos::task::spawn_local(async move {
            let desc = if desc.trim().is_empty() { DEFAULT_DESCRIPTION.to_string() } else { desc };

            match api::create_payment_intent(cents, &desc).await {
                Ok(created) => {
                    let link = payment_link(&api::origin(), &created.id);
                    set_state.update(|s| *s = s.clone().succeed(link, cents, desc));
                    toasts.success("Payment Link Created", "QR Code generated successfully!");
                }
                Err(ApiError::Invalid(message)) => {
                    set_state.update(|s| *s = s.clone().fail());
                    set_form_error.set(Some(message));
                }
                Err(e) => {
                    leptos::logging::warn!("Create payment intent failed: {}", e);
                    set_state.update(|s| *s = s.clone().fail());
                    toasts.error("Error", "Failed to create payment link");
                }
            }
        });
    };

    let reset = move |_| {
        set_state.update(|s| *s = s.clone().reset());
        set_amount.set(String::new());
        set_description.set(String::new());
        set_form_error.set(None);
    };

    let submitting = move || state.with(CreateState::is_submitting);

    view! {
        <div class="create">
            <header class="hero">
                <h1>"QR Code Payment System"</h1>
                <p class="tagline">"Create secure payment links with QR codes using Stripe"</p>
            </header>

            <div class="grid">
                <section class="card">
                    <h2>"Create Payment"</h2>
                    <p class="subtitle">"Enter payment details to generate a QR code"</p>

                    <div class="field">
                        <label for="amount">"Amount (USD)"</label>
                        <input
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.50"
                            placeholder="10.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                        {move || form_error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>

                    <div class="field">
                        <label for="description">"Description (Optional)"</label>
                        <input
                            id="description"
                            type="text"
                            placeholder="Payment for services"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="actions">
                        <button class="btn btn-primary" on:click=generate disabled=submitting>
                            {move || if submitting() { "Creating..." } else { "Generate QR Code" }}
                        </button>
                        <Show when=move || state.with(|s| s.link().is_some())>
                            <button class="btn" on:click=reset>"Reset"</button>
                        </Show>
                    </div>
                </section>

                <section class="card">
                    <h2>"Payment QR Code"</h2>
                    <p class="subtitle">"Scan to complete payment"</p>

                    {move || match state.get() {
                        CreateState::LinkReady { link, amount, description } => view! {
                            <QrCode url=link amount=amount description=description />
                        }.into_any(),
                        _ => view! {
                            <div class="qr-placeholder">
                                <p>"QR Code will appear here"</p>
                            </div>
                        }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}
