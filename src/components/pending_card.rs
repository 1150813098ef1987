//! Card for a booking request awaiting the doctor's decision.

#[cfg(test)]
#[path = "pending_card_test.rs"]
mod pending_card_test;

use leptos::prelude::*;

use crate::net::types::Appointment;
use crate::util::date;

/// Name shown for the requesting patient; the backend omits display fields
/// on some records.
pub(crate) fn patient_display(appointment: &Appointment) -> String {
    appointment
        .patient_name
        .clone()
        .unwrap_or_else(|| format!("Patient {}", appointment.patient_id))
}

/// One pending booking request with approve and reject actions.
#[component]
pub fn PendingRequestCard(
    appointment: Appointment,
    on_approve: Callback<i64>,
    on_reject: Callback<i64>,
) -> impl IntoView {
    let id = appointment.id;
    let patient = patient_display(&appointment);
    let email = appointment.patient_email.clone().unwrap_or_default();
    let date_display = date::format_fr(&appointment.date);

    view! {
        <div class="pending-card">
            <div class="pending-card__who">
                <span class="pending-card__patient">{patient}</span>
                <span class="pending-card__email">{email}</span>
            </div>
            <span class="pending-card__date">{date_display}</span>
            <span class="pending-card__reason">"Demande en ligne"</span>
            <div class="pending-card__actions">
                <button class="btn btn--primary" on:click=move |_| on_approve.run(id)>
                    "Approuver"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_reject.run(id)>
                    "Rejeter"
                </button>
            </div>
        </div>
    }
}
