//! Delete Account Page
//!
//! Explains the manual deletion process and hosts the immediate-deletion
//! form, which runs login then profile deletion through [`delete_account`].

use futures::future::AbortHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use stay_core::{DeletionForm, delete_account};

use crate::client;
use crate::components::StatusBanner;

const CONTACT_EMAIL: &str = "mailto:kwesiselasi476@gmail.com?subject=Account%20Deletion%20Request";
const CONTACT_PHONE: &str = "tel:+233240333837";

const STEPS: [(&str, &str); 4] = [
    ("Contact Us", "Send deletion request"),
    ("Verification", "We verify your identity"),
    ("Processing", "Data deletion begins"),
    ("Confirmation", "Account deleted"),
];

const DELETED_DATA: [&str; 7] = [
    "Personal information (name, email, phone number)",
    "Account credentials and authentication tokens",
    "Booking history and preferences",
    "Location data and search history",
    "Profile photos and uploaded content",
    "Notification preferences and push tokens",
    "App usage analytics and crash reports",
];

const RETAINED_DATA: [&str; 3] = [
    "Financial transaction records (for legal compliance) - 7 years",
    "Anonymized usage statistics (no personal identifiers) - Indefinitely",
    "Security logs and fraud prevention data - 2 years",
];

#[component]
pub fn DeleteAccountPage() -> impl IntoView {
    let (form, set_form) = signal(DeletionForm::new());
    let in_flight = StoredValue::new(None::<AbortHandle>);

    let notice = Signal::derive(move || form.with(|f| f.notice().cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(credentials) = set_form.try_update(DeletionForm::begin).flatten() else {
            return;
        };

        let api = client::api();
        let handle = client::spawn_attempt(
            async move {
                let outcome = delete_account(&api, &credentials, |phase| {
                    set_form.update(|f| f.advance(phase));
                })
                .await;
                set_form.update(|f| {
                    f.finish(outcome);
                });
            },
            move || {
                set_form.try_update(|f| {
                    f.finish(Err(client::timed_out()));
                });
            },
        );
        in_flight.set_value(Some(handle));
    };

    on_cleanup(move || {
        if let Some(Some(handle)) = in_flight.try_get_value() {
            handle.abort();
        }
    });

    view! {
        <div class="page delete-account">
            <a href="/">"Back to Home"</a>

            <h1>"Delete My Account"</h1>
            <p>"Request to permanently delete your Swift Stay account and associated data"</p>

            <div class="card">
                <p class="status status-error">
                    "Account deletion is permanent and cannot be undone. "
                    "Please read all information carefully before proceeding."
                </p>

                <h2>"How to Delete Your Account"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(title, description)| view! {
                            <li><strong>{*title}</strong><br />{*description}</li>
                        })
                        .collect_view()}
                </ol>

                <h3>"Step 1: Contact Us"</h3>
                <p>"To delete your account, contact us and include:"</p>
                <ul>
                    <li>"Your registered phone number"</li>
                    <li>"Your account password"</li>
                    <li>"Subject line: \"Account Deletion Request\" (for email method)"</li>
                    <li>"Confirmation that you want to permanently delete your account"</li>
                </ul>
                <a class="btn btn-danger" href=CONTACT_EMAIL>"Email Us"</a>
                " "
                <a class="btn" href=CONTACT_PHONE>"Call Us"</a>
                " "
                <button class="btn" on:click=move |_| set_form.update(DeletionForm::toggle)>
                    "Delete Account Now"
                </button>
            </div>

            <StatusBanner status=notice />

            <Show when=move || form.with(DeletionForm::is_visible)>
                <div class="card danger">
                    <h3>"Delete Account Immediately"</h3>
                    <p class="status status-error">
                        "Once you delete your account, all your data will be permanently removed and cannot be recovered."
                    </p>
                    <form class="delete-form" on:submit=on_submit>
                        <label>"Phone Number"</label>
                        <input
                            type="tel"
                            placeholder="Enter your phone number"
                            required
                            prop:value=move || form.with(|f| f.phone_number.clone())
                            on:input=move |ev| set_form.update(|f| f.phone_number = event_target_value(&ev))
                        />
                        <label>"Password"</label>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| set_form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-danger"
                            disabled=move || form.with(DeletionForm::is_pending)
                        >
                            {move || form.with(DeletionForm::submit_label)}
                        </button>
                    </form>
                </div>
            </Show>

            <div class="card">
                <h3>"What Data Will Be Deleted"</h3>
                <ul>{DELETED_DATA.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </div>

            <div class="card">
                <h3>"Data We May Retain"</h3>
                <p>"For legal, regulatory, or security purposes, we may retain certain data:"</p>
                <ul>{RETAINED_DATA.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </div>
        </div>
    }
}
