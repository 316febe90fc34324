//! Success Page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let payment_intent = move || query.read().get("payment_intent").filter(|id| !id.is_empty());

    view! {
        <div class="success centered">
            <section class="card">
                <div class="success-icon">"✓"</div>
                <h2 class="text-success">"Payment Successful!"</h2>
                <p>"Your payment has been processed successfully. Thank you for your purchase!"</p>

                {move || payment_intent().map(|id| view! {
                    <div class="summary">
                        <p><strong>"Payment ID: "</strong>{id}</p>
                    </div>
                })}

                <a href="/" class="btn btn-primary">"Back to Home"</a>
            </section>
        </div>
    }
}
