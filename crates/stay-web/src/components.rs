//! UI Components

use leptos::ev;
use leptos::prelude::*;
use stay_core::SubmissionResult;

/// Success/error banner for the last attempt
#[component]
pub fn StatusBanner(#[prop(into)] status: Signal<Option<SubmissionResult>>) -> impl IntoView {
    move || {
        status.get().map(|result| {
            let class = if result.is_success() {
                "status status-success"
            } else {
                "status status-error"
            };
            view! { <div class=class role="status">{result.message}</div> }
        })
    }
}

/// Top bar. Gains the `scrolled` class once the page moves past 50px.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(offset > 50.0);
    });
    on_cleanup(move || listener.remove());

    view! {
        <header class="header" class:scrolled=move || scrolled.get()>
            <a href="/" class="logo-text">"Swift Stay"</a>
            <nav>
                <a href="#features">"Features"</a>
                <a href="#benefits">"Benefits"</a>
                <a href="#download">"Download"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <span class="logo-text">"Swift Stay"</span>
                    <p>"Find your perfect stay, anywhere."</p>
                </div>
                <div>
                    <h4>"Product"</h4>
                    <ul>
                        <li><a href="/#features">"Features"</a></li>
                        <li><a href="/#download">"Download"</a></li>
                        <li><a href="/#partner">"List your property"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Contact Us"</h4>
                    <ul>
                        <li><a href="mailto:kwesiselasi476@gmail.com">"kwesiselasi476@gmail.com"</a></li>
                        <li><a href="/privacy-policy">"Privacy Policy"</a></li>
                        <li><a href="/delete-account">"Delete Account"</a></li>
                    </ul>
                </div>
            </div>
            <p>"© 2025 Swift Stay. All rights reserved."</p>
        </footer>
    }
}
