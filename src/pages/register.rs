//! Registration page: account form with role choice, then the same
//! role-routed redirect as login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::{RegisterRequest, Role};
use crate::state::session::SessionState;

const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires.";

fn registration_error(
    first_name: &str,
    last_name: &str,
    user_name: &str,
    email: &str,
    password: &str,
) -> Option<&'static str> {
    let any_empty = first_name.is_empty()
        || last_name.is_empty()
        || user_name.is_empty()
        || email.is_empty()
        || password.is_empty();
    if any_empty || !email.contains('@') {
        return Some(REQUIRED_FIELDS_MESSAGE);
    }
    None
}

#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(err: &ApiError) -> String {
    match err.status() {
        409 => "Un compte existe déjà avec cet email.".to_owned(),
        400 => "Données invalides. Veuillez vérifier vos informations.".to_owned(),
        0 => "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
            .to_owned(),
        _ => "Erreur lors de l'inscription. Veuillez réessayer.".to_owned(),
    }
}

/// Build the registration payload; the specialization only travels for
/// doctors and only when filled in.
fn build_request(
    first_name: String,
    last_name: String,
    user_name: String,
    email: String,
    password: String,
    role: Role,
    specialization: String,
) -> RegisterRequest {
    let specialization = (role == Role::Doctor && !specialization.trim().is_empty())
        .then(|| specialization.trim().to_owned());
    RegisterRequest {
        first_name,
        last_name,
        user_name,
        email,
        password,
        role,
        specialization,
    }
}

/// Registration page. A successful registration signs the new account in
/// immediately and routes by the role claimed in the returned token.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let navigate_init = navigate.clone();
    Effect::new(move || {
        if session.get_untracked().logged_in() {
            navigate_init("/home", NavigateOptions::default());
        }
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let user_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Patient.as_str().to_owned());
    let specialization = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_after = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let first_value = first_name.get().trim().to_owned();
        let last_value = last_name.get().trim().to_owned();
        let user_value = user_name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) = registration_error(
            &first_value,
            &last_value,
            &user_value,
            &email_value,
            &password_value,
        ) {
            error.set(message.to_owned());
            return;
        }
        let role_value = Role::from_claim(&role.get()).unwrap_or(Role::Patient);
        let request = build_request(
            first_value,
            last_value,
            user_value,
            email_value,
            password_value,
            role_value,
            specialization.get(),
        );
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::register(&request).await {
                    Ok(response) => {
                        let role = crate::util::jwt::role(Some(&response.token));
                        crate::state::session::save_token(session, response.token);
                        log::info!("registration succeeded, role {role:?}");
                        navigate(
                            crate::util::guard::landing_route(role),
                            NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        error.set(register_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, navigate_after.clone());
            busy.set(false);
        }
    };

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Inscription"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Prénom"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Nom"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Nom d'utilisateur"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || user_name.get()
                            on:input=move |ev| user_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="vous@exemple.fr"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Mot de passe"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Je suis"
                        <select
                            class="auth-form__input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="PATIENT">"Patient"</option>
                            <option value="DOCTOR">"Médecin"</option>
                        </select>
                    </label>
                    <Show when=move || role.get() == Role::Doctor.as_str()>
                        <label class="auth-form__label">
                            "Spécialisation"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Cardiologie"
                                prop:value=move || specialization.get()
                                on:input=move |ev| specialization.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Créer mon compte"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__hint">
                    "Déjà inscrit ? "
                    <a href="/auth/login">"Connectez-vous"</a>
                </p>
            </div>
        </div>
    }
}
