//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{ToastRegion, Toasts};
use crate::pages::{CreatePage, PayPage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(Toasts::new());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=CreatePage />
                    <Route path=path!("/payment/success") view=SuccessPage />
                    <Route path=path!("/payment/:id") view=PayPage />
                </Routes>
            </main>
            <ToastRegion />
        </Router>
    }
}
