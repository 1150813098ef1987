//! List-item card for one of the patient's appointments.

use leptos::prelude::*;

use crate::net::types::{Appointment, AppointmentStatus};
use crate::util::date;

/// One appointment row with its status badge and a cancel action.
/// Rejected appointments are terminal and lose the cancel button.
#[component]
pub fn AppointmentCard(appointment: Appointment, on_cancel: Callback<i64>) -> impl IntoView {
    let id = appointment.id;
    let status = appointment.status;
    let date_display = date::format_fr(&appointment.date);
    let doctor_display = format!("Dr. {}", appointment.doctor_id);
    let cancellable = status != AppointmentStatus::Rejected;

    view! {
        <div class="appointment-card">
            <span class="appointment-card__doctor">{doctor_display}</span>
            <span class="appointment-card__date">{date_display}</span>
            <span class=format!("badge badge--{}", status.css_class())>{status.text_fr()}</span>
            <Show when=move || cancellable>
                <button class="btn btn--danger" on:click=move |_| on_cancel.run(id)>
                    "Annuler"
                </button>
            </Show>
        </div>
    }
}
