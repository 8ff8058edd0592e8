//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{DeleteAccountPage, HomePage, PrivacyPolicyPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="page">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/privacy-policy") view=PrivacyPolicyPage />
                    <Route path=path!("/delete-account") view=DeleteAccountPage />
                </Routes>
            </main>
        </Router>
    }
}
