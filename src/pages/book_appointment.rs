//! Booking page, restricted to patients.
//!
//! The date is validated client-side (today or later) before any network
//! call; the doctor list comes from the public directory with a fallback to
//! the authenticated one.

#[cfg(test)]
#[path = "book_appointment_test.rs"]
mod book_appointment_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::{Doctor, Role};
use crate::state::session::SessionState;
use crate::util::date;
use crate::util::guard::install_role_guard;

const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires.";
const PAST_DATE_MESSAGE: &str = "La date du rendez-vous doit être aujourd'hui ou dans le futur.";

/// Validate the booking form; returns the chosen doctor id on success.
fn validate_booking(doctor_id: &str, date: &str, reason: &str, today: &str) -> Result<i64, String> {
    let Ok(id) = doctor_id.parse::<i64>() else {
        return Err(REQUIRED_FIELDS_MESSAGE.to_owned());
    };
    if date.is_empty() || reason.trim().is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE.to_owned());
    }
    if date::is_past(date, today) {
        return Err(PAST_DATE_MESSAGE.to_owned());
    }
    Ok(id)
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_success_message(doctor_name: Option<&str>, date: &str) -> String {
    format!(
        "Rendez-vous réservé avec succès ! Vous avez un rendez-vous avec {} le {}. \
         Votre demande est en attente d'approbation.",
        doctor_name.unwrap_or("le médecin"),
        date::format_fr(date)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_error_message(err: &ApiError) -> String {
    match err.status() {
        400 => "Données invalides. Veuillez vérifier vos informations.".to_owned(),
        401 => "Vous devez être connecté pour réserver un rendez-vous.".to_owned(),
        404 => "Médecin introuvable. Veuillez sélectionner un autre médecin.".to_owned(),
        0 => "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
            .to_owned(),
        _ => "Erreur lors de la réservation. Veuillez réessayer.".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn doctors_error_message(err: &ApiError) -> String {
    match err.status() {
        0 => "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
            .to_owned(),
        _ => "Erreur lors du chargement des médecins.".to_owned(),
    }
}

/// Booking form. On success the confirmation names the doctor and the
/// formatted date, then the page returns to the patient dashboard after a
/// short delay.
#[component]
pub fn BookAppointmentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_role_guard(session, Role::Patient, navigate.clone());

    let doctors = RwSignal::new(Vec::<Doctor>::new());
    let loading_doctors = RwSignal::new(false);
    let doctor_id = RwSignal::new(String::new());
    let appointment_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        loading_doctors.set(true);
        leptos::task::spawn_local(async move {
            let token = session.get_untracked().token;
            match crate::net::doctor::all_doctors(token.as_deref()).await {
                Ok(list) => doctors.set(list),
                Err(err) => {
                    log::error!("doctor directory load failed: {err}");
                    error.set(doctors_error_message(&err));
                }
            }
            loading_doctors.set(false);
        });
    }

    let navigate_after = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let doctor_value = doctor_id.get();
        let date_value = appointment_date.get();
        let reason_value = reason.get();
        let chosen = match validate_booking(&doctor_value, &date_value, &reason_value, &date::today()) {
            Ok(id) => id,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token else {
                    error.set(booking_error_message(&ApiError::Status(401)));
                    busy.set(false);
                    return;
                };
                let request = crate::net::types::BookAppointmentRequest {
                    doctor_id: chosen,
                    date: date_value,
                    reason: reason_value.trim().to_owned(),
                };
                match crate::net::patient::book_appointment(&token, &request).await {
                    Ok(created) => {
                        let doctor_name = doctors
                            .get_untracked()
                            .into_iter()
                            .find(|d| d.id == Some(chosen))
                            .map(|d| d.name);
                        success.set(booking_success_message(doctor_name.as_deref(), &created.date));
                        doctor_id.set(String::new());
                        appointment_date.set(String::new());
                        reason.set(String::new());
                        gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                        navigate("/patient/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("booking failed: {err}");
                        error.set(booking_error_message(&err));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (chosen, date_value, reason_value, navigate_after.clone());
            busy.set(false);
        }
    };

    view! {
        <Navbar/>
        <div class="booking-page">
            <div class="booking-card">
                <h1>"Prendre rendez-vous"</h1>
                <form class="booking-form" on:submit=on_submit>
                    <label class="booking-form__label">
                        "Médecin"
                        <select
                            class="booking-form__input"
                            prop:value=move || doctor_id.get()
                            on:change=move |ev| doctor_id.set(event_target_value(&ev))
                        >
                            <option value="">
                                {move || {
                                    if loading_doctors.get() {
                                        "Chargement des médecins..."
                                    } else {
                                        "Choisissez un médecin"
                                    }
                                }}
                            </option>
                            {move || {
                                doctors
                                    .get()
                                    .into_iter()
                                    .map(|doctor| {
                                        let value = doctor.id.map(|id| id.to_string()).unwrap_or_default();
                                        let label = if doctor.specialization.is_empty() {
                                            doctor.name
                                        } else {
                                            format!("{} — {}", doctor.name, doctor.specialization)
                                        };
                                        view! { <option value=value>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="booking-form__label">
                        "Date"
                        <input
                            class="booking-form__input"
                            type="date"
                            min=date::today()
                            prop:value=move || appointment_date.get()
                            on:input=move |ev| appointment_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="booking-form__label">
                        "Motif"
                        <input
                            class="booking-form__input"
                            type="text"
                            placeholder="Consultation de suivi"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Réserver"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="booking-message booking-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="booking-message booking-message--success">{move || success.get()}</p>
                </Show>
            </div>
        </div>
    }
}
