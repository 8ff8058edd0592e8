//! Partner Onboarding Section
//!
//! Lead form for property owners, bound to [`LeadForm`].

use futures::future::AbortHandle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use stay_core::{LeadField, LeadForm, submit_lead};

use crate::client;
use crate::components::StatusBanner;

#[component]
fn LeadInput(
    form: ReadSignal<LeadForm>,
    set_form: WriteSignal<LeadForm>,
    field: LeadField,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            prop:value=move || form.with(|f| f.draft.get(field).to_string())
            on:input=move |ev| set_form.update(|f| f.draft.set(field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn PartnerOnboarding() -> impl IntoView {
    let (form, set_form) = signal(LeadForm::new());
    let in_flight = StoredValue::new(None::<AbortHandle>);

    let status = Signal::derive(move || form.with(|f| f.status().cloned()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = set_form.try_update(LeadForm::begin).flatten() else {
            return;
        };

        let api = client::api();
        let handle = client::spawn_attempt(
            async move {
                let outcome = submit_lead(&api, &submission).await;
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
        <section id="partner">
            <h2>"Partner with Swift Stay"</h2>
            <p>"List your hostel, hotel, or apartment and reach quality guests."</p>

            <StatusBanner status=status />

            <form on:submit=on_submit>
                <div class="field-grid">
                    <LeadInput form=form set_form=set_form field=LeadField::FullName placeholder="Full name" required=true />
                    <LeadInput form=form set_form=set_form field=LeadField::Email placeholder="Email" required=true input_type="email" />
                    <LeadInput form=form set_form=set_form field=LeadField::Phone placeholder="Phone" required=true />
                    <LeadInput form=form set_form=set_form field=LeadField::PropertyName placeholder="Property name" required=true />
                    <LeadInput form=form set_form=set_form field=LeadField::City placeholder="City" required=true />
                    <LeadInput form=form set_form=set_form field=LeadField::Region placeholder="Region/State" required=true />
                    <LeadInput form=form set_form=set_form field=LeadField::PropertyType placeholder="Property type (hostel, hotel...)" />
                    <LeadInput form=form set_form=set_form field=LeadField::UnitsAvailable placeholder="Units available" input_type="number" />
                </div>
                <textarea
                    rows=4
                    placeholder="Tell us about your property (optional)"
                    prop:value=move || form.with(|f| f.draft.message.clone())
                    on:input=move |ev| set_form.update(|f| f.draft.set(LeadField::Message, event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| !f.can_submit())
                >
                    {move || form.with(LeadForm::submit_label)}
                </button>
            </form>
        </section>
    }
}

