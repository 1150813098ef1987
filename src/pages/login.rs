//! Login page: credential form, then role-routed redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::session::SessionState;

const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires.";

/// Client-side form validation, mirroring the backend's required rules.
fn credentials_error(email: &str, password: &str) -> Option<&'static str> {
    if email.is_empty() || password.is_empty() || !email.contains('@') {
        return Some(REQUIRED_FIELDS_MESSAGE);
    }
    None
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &ApiError) -> String {
    match err.status() {
        401 => "Email ou mot de passe incorrect.".to_owned(),
        0 => "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
            .to_owned(),
        _ => "Erreur lors de la connexion. Veuillez réessayer.".to_owned(),
    }
}

/// Login page. A DOCTOR token lands on the doctor dashboard, a PATIENT
/// token on the patient dashboard, anything else on the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Already signed in: checked once on entry, like any other page guard.
    let navigate_init = navigate.clone();
    Effect::new(move || {
        if session.get_untracked().logged_in() {
            navigate_init("/home", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_after = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) = credentials_error(&email_value, &password_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(&email_value, &password_value).await {
                    Ok(response) => {
                        let role = crate::util::jwt::role(Some(&response.token));
                        crate::state::session::save_token(session, response.token);
                        log::info!("login succeeded, role {role:?}");
                        navigate(
                            crate::util::guard::landing_route(role),
                            NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        log::error!("login failed: {err}");
                        error.set(login_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, navigate_after.clone());
            busy.set(false);
        }
    };

    view! {
        <Navbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Connexion"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__hint">
                    "Pas encore de compte ? "
                    <a href="/auth/register">"Inscrivez-vous"</a>
                </p>
            </div>
        </div>
    }
}
