//! Doctor dashboard: agenda, pending booking requests, and counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Approving or rejecting a request refreshes the pending list, the agenda,
//! and the counters; banners clear themselves after a few seconds.

#[cfg(test)]
#[path = "doctor_dashboard_test.rs"]
mod doctor_dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::pending_card::{PendingRequestCard, patient_display};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::AppointmentStatus;
use crate::net::types::Role;
use crate::state::practice::PracticeState;
use crate::state::session::SessionState;
use crate::util::date;
use crate::util::guard::install_role_guard;

#[cfg(any(test, feature = "hydrate"))]
fn pending_error_message(err: &ApiError) -> String {
    match err.status() {
        403 => "Accès refusé. Problème d'authentification du médecin.".to_owned(),
        500 => "Erreur serveur lors du chargement des demandes.".to_owned(),
        _ => "Erreur lors du chargement des demandes en attente.".to_owned(),
    }
}

/// Doctor landing page. Guarded to the DOCTOR role; guests land on the
/// login form.
#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let practice = expect_context::<RwSignal<PracticeState>>();
    let navigate = use_navigate();
    install_role_guard(session, Role::Doctor, navigate);

    #[cfg(feature = "hydrate")]
    {
        load_agenda(session, practice);
        load_pending(session, practice);
        load_stats(session, practice);
    }

    let on_approve = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm("Voulez-vous approuver ce rendez-vous ?") {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token else {
                    return;
                };
                match crate::net::doctor::approve_appointment(&token, id).await {
                    Ok(_) => {
                        practice.update(|p| {
                            p.notice = Some("Rendez-vous approuvé avec succès !".to_owned());
                        });
                        load_pending(session, practice);
                        load_agenda(session, practice);
                        load_stats(session, practice);
                    }
                    Err(err) => {
                        log::error!("approve failed for appointment {id}: {err}");
                        practice.update(|p| {
                            p.error = Some("Erreur lors de l'approbation du rendez-vous.".to_owned());
                        });
                    }
                }
                clear_banners_later(practice);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_reject = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            if !confirm("Voulez-vous rejeter ce rendez-vous ?") {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token else {
                    return;
                };
                match crate::net::doctor::reject_appointment(&token, id).await {
                    Ok(_) => {
                        practice.update(|p| p.notice = Some("Rendez-vous rejeté.".to_owned()));
                        load_pending(session, practice);
                        load_stats(session, practice);
                    }
                    Err(err) => {
                        log::error!("reject failed for appointment {id}: {err}");
                        practice.update(|p| {
                            p.error = Some("Erreur lors du rejet du rendez-vous.".to_owned());
                        });
                    }
                }
                clear_banners_later(practice);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let greeting = move || {
        session
            .get()
            .display_name()
            .unwrap_or_else(|| "Docteur".to_owned())
    };

    view! {
        <Navbar/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Tableau de bord"</h1>
                <span class="dashboard-page__self">{greeting}</span>
            </header>

            <div class="dashboard-page__stats">
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || practice.get().stats.total_appointments}
                    </span>
                    <span class="stat-card__label">"Rendez-vous"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || practice.get().stats.pending_appointments}
                    </span>
                    <span class="stat-card__label">"Demandes en attente"</span>
                </div>
            </div>

            <Show when=move || practice.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || practice.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || practice.get().notice.is_some()>
                <p class="dashboard-page__notice">
                    {move || practice.get().notice.unwrap_or_default()}
                </p>
            </Show>

            <section class="dashboard-page__section">
                <h2>"Demandes en attente"</h2>
                <Show
                    when=move || !practice.get().pending.is_empty()
                    fallback=move || view! { <p class="dashboard-page__empty">"Aucune demande en attente."</p> }
                >
                    <div class="dashboard-page__cards">
                        {move || {
                            practice
                                .get()
                                .pending
                                .into_iter()
                                .map(|appointment| {
                                    view! {
                                        <PendingRequestCard
                                            appointment=appointment
                                            on_approve=on_approve
                                            on_reject=on_reject
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <section class="dashboard-page__section">
                <h2>"Agenda"</h2>
                <Show
                    when=move || !practice.get().loading
                    fallback=move || view! { <p>"Chargement de l'agenda..."</p> }
                >
                    <Show
                        when=move || !practice.get().appointments.is_empty()
                        fallback=move || view! { <p class="dashboard-page__empty">"Aucun rendez-vous approuvé."</p> }
                    >
                        <ul class="agenda">
                            {move || {
                                practice
                                    .get()
                                    .appointments
                                    .into_iter()
                                    .map(|appointment| {
                                        let patient = patient_display(&appointment);
                                        let date_display = date::format_fr(&appointment.date);
                                        view! {
                                            <li class="agenda__row">
                                                <span class="agenda__patient">{patient}</span>
                                                <span class="agenda__date">{date_display}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Refresh the agenda: the doctor's own appointments, approved only.
#[cfg(feature = "hydrate")]
fn load_agenda(session: RwSignal<SessionState>, practice: RwSignal<PracticeState>) {
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        practice.update(|p| p.loading = true);
        match crate::net::doctor::my_appointments(&token).await {
            Ok(mut items) => {
                items.retain(|a| a.status == AppointmentStatus::Approved);
                practice.update(|p| p.appointments = items);
            }
            Err(err) => {
                log::error!("agenda load failed: {err}");
                practice.update(|p| p.error = Some("Erreur lors du chargement de l'agenda.".to_owned()));
            }
        }
        practice.update(|p| p.loading = false);
    });
}

/// Refresh the pending booking requests.
#[cfg(feature = "hydrate")]
fn load_pending(session: RwSignal<SessionState>, practice: RwSignal<PracticeState>) {
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        match crate::net::doctor::pending_appointments(&token).await {
            Ok(items) => practice.update(|p| p.pending = items),
            Err(err) => {
                log::error!("pending list load failed: {err}");
                practice.update(|p| p.error = Some(pending_error_message(&err)));
                clear_banners_later(practice);
            }
        }
    });
}

/// Refresh the dashboard counters. Failures only reach the console.
#[cfg(feature = "hydrate")]
fn load_stats(session: RwSignal<SessionState>, practice: RwSignal<PracticeState>) {
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        match crate::net::doctor::appointment_stats(&token).await {
            Ok(stats) => practice.update(|p| p.stats = stats),
            Err(err) => log::error!("stats load failed: {err}"),
        }
    });
}

/// Drop both banners after a fixed delay.
#[cfg(feature = "hydrate")]
fn clear_banners_later(practice: RwSignal<PracticeState>) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
        practice.update(|p| {
            p.error = None;
            p.notice = None;
        });
    });
}
