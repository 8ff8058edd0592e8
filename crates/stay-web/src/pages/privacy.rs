//! Privacy Policy Page

use leptos::prelude::*;

use crate::components::SiteFooter;

/// Section heading and bullet points
const SECTIONS: [(&str, &[&str]); 4] = [
    (
        "Information We Collect",
        &[
            "Name and email address",
            "Phone number",
            "Profile information and preferences",
            "Device information and app usage data",
            "Location data (with your permission)",
        ],
    ),
    (
        "How We Use Your Information",
        &[
            "Provide and improve our services",
            "Process bookings and payments",
            "Send you important updates about your bookings",
            "Ensure the security of our platform",
            "Comply with legal obligations",
        ],
    ),
    (
        "Information Sharing",
        &[
            "Service providers who help us operate our app",
            "Property owners when you make a booking",
            "When required by law or to protect our rights",
        ],
    ),
    (
        "Your Rights",
        &[
            "Access to your personal information",
            "Correction of inaccurate information",
            "Deletion of your personal information",
            "Portability of your data",
            "Withdrawal of consent",
        ],
    ),
];

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="page privacy">
            <a href="/">"Back to Home"</a>
            <h1>"Privacy Policy"</h1>

            {SECTIONS
                .iter()
                .map(|(title, items)| view! {
                    <h2>{*title}</h2>
                    <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
                })
                .collect_view()}

            <h2>"Account Deletion"</h2>
            <p>
                "You can delete your account at any time from the "
                <a href="/delete-account">"account deletion page"</a> "."
            </p>

            <h2>"Contact Us"</h2>
            <p>"Email: kwesiselasi476@gmail.com"</p>
            <p>"Phone: +233 24 033 3837"</p>
        </div>
        <SiteFooter />
    }
}
