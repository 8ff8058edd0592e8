//! Home Page

use leptos::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::partner::PartnerOnboarding;

const STATS: [(&str, &str); 4] = [
    ("50K+", "Happy Users"),
    ("10K+", "Properties"),
    ("95%", "Satisfaction Rate"),
    ("24/7", "Support"),
];

const FEATURES: [(&str, &str); 6] = [
    ("Smart Search", "Filter by location, price and amenities to find the right place fast."),
    ("Favorites", "Save the stays you love and come back to them any time."),
    ("Instant Notifications", "Booking confirmations and updates as they happen."),
    ("Secure Booking", "Payments handled by trusted providers."),
    ("Mobile First", "Built for your phone from the ground up."),
    ("Global Reach", "Hostels, hotels and apartments wherever you travel."),
];

const BENEFITS: [&str; 4] = [
    "Verified Properties",
    "24/7 Customer Support",
    "Secure Payments",
    "Instant Booking",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <SiteHeader />

            <header class="hero">
                <h1>"Stay Smart. " <span>"Live Better."</span></h1>
                <p class="tagline">"Discover and book accommodation that fits your life."</p>
                <div class="cta">
                    <a href="#download" class="btn btn-primary">"Get the App"</a>
                    <a href="#partner" class="btn">"List Your Property"</a>
                </div>
            </header>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(number, label)| view! {
                        <div class="stat-item">
                            <span class="number">{*number}</span>
                            <div class="label">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section id="features" class="features">
                {FEATURES
                    .iter()
                    .map(|(title, description)| view! {
                        <div class="feature-card">
                            <h3 class="feature-title">{*title}</h3>
                            <p class="feature-description">{*description}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section id="benefits" class="benefits">
                <h2>"Everything You Need for the Perfect Stay"</h2>
                <ul>
                    {BENEFITS.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                </ul>
            </section>

            <section id="download" class="download">
                <h2>"Ready to Start Your Journey?"</h2>
                <a class="btn" href="#download">"App Store"</a>
                <a class="btn" href="#download">"Google Play"</a>
            </section>

            <PartnerOnboarding />

            <SiteFooter />
        </div>
    }
}
