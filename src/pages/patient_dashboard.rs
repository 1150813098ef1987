//! Patient dashboard: the signed-in patient's appointments with cancel.

#[cfg(test)]
#[path = "patient_dashboard_test.rs"]
mod patient_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::appointment_card::AppointmentCard;
use crate::components::navbar::Navbar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Role;
use crate::state::appointments::AppointmentsState;
use crate::state::session::SessionState;
use crate::util::guard::install_role_guard;

#[cfg(any(test, feature = "hydrate"))]
fn appointments_error_message(err: &ApiError) -> String {
    match err.status() {
        401 => "Authentication required. Please login again.".to_owned(),
        403 => "Access denied. Please check your patient role.".to_owned(),
        500 => "Server error. Please try again later.".to_owned(),
        0 => "Failed to load appointments (network error).".to_owned(),
        status => format!("Failed to load appointments (error {status})."),
    }
}

/// Patient landing page. Guarded to the PATIENT role; guests land on the
/// login form.
#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let appointments = expect_context::<RwSignal<AppointmentsState>>();
    let navigate = use_navigate();
    install_role_guard(session, Role::Patient, navigate);

    #[cfg(feature = "hydrate")]
    load_appointments(session, appointments);

    let on_cancel = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Voulez-vous vraiment annuler ce rendez-vous ?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token else {
                    return;
                };
                match crate::net::patient::cancel_appointment(&token, id).await {
                    Ok(()) => {
                        appointments.update(|s| {
                            s.notice = Some("Rendez-vous annulé avec succès !".to_owned());
                        });
                        load_appointments(session, appointments);
                    }
                    Err(err) => {
                        log::error!("cancel failed for appointment {id}: {err}");
                        appointments.update(|s| {
                            s.error = Some("Erreur lors de l'annulation du rendez-vous.".to_owned());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let greeting = move || {
        session
            .get()
            .display_name()
            .unwrap_or_else(|| "Patient".to_owned())
    };

    view! {
        <Navbar/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Mes rendez-vous"</h1>
                <span class="dashboard-page__self">{greeting}</span>
                <a class="btn btn--primary" href="/patient/book">"Prendre rendez-vous"</a>
            </header>
            <Show when=move || appointments.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || appointments.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || appointments.get().notice.is_some()>
                <p class="dashboard-page__notice">
                    {move || appointments.get().notice.unwrap_or_default()}
                </p>
            </Show>
            <Show
                when=move || !appointments.get().loading
                fallback=move || view! { <p>"Chargement des rendez-vous..."</p> }
            >
                <Show
                    when=move || !appointments.get().items.is_empty()
                    fallback=move || view! { <p class="dashboard-page__empty">"Aucun rendez-vous."</p> }
                >
                    <div class="dashboard-page__cards">
                        {move || {
                            appointments
                                .get()
                                .items
                                .into_iter()
                                .map(|appointment| {
                                    view! {
                                        <AppointmentCard appointment=appointment on_cancel=on_cancel/>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

/// Refresh the appointment list from the patient service.
#[cfg(feature = "hydrate")]
fn load_appointments(session: RwSignal<SessionState>, appointments: RwSignal<AppointmentsState>) {
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        appointments.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match crate::net::patient::my_appointments(&token).await {
            Ok(items) => appointments.update(|s| s.items = items),
            Err(err) => {
                log::error!("appointment list load failed: {err}");
                appointments.update(|s| s.error = Some(appointments_error_message(&err)));
            }
        }
        appointments.update(|s| s.loading = false);
    });
}
