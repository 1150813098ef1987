//! Top navigation bar with role-aware links and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::landing_route;

/// Caption shown next to the signed-in name.
pub(crate) fn role_text(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Doctor) => "doctor",
        Some(Role::Patient) => "patient",
        None => "user",
    }
}

/// Navigation bar shown on every page. The dashboard link follows the
/// session's role; logout asks for confirmation, clears the session, and
/// returns to the landing page.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Voulez-vous vraiment vous déconnecter ?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            log::info!("logging out");
            crate::state::session::logout(session);
            menu_open.set(false);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/home");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/home">"Clinique"</a>
            <button
                class="navbar__burger"
                on:click=move |_| menu_open.update(|open| *open = !*open)
                title="Menu"
            >
                "☰"
            </button>
            <div class="navbar__links" class=("navbar__links--open", move || menu_open.get())>
                <a href="/home">"Accueil"</a>
                <a href="/about">"À propos"</a>
                <Show when=move || session.get().logged_in()>
                    <a href=move || landing_route(session.get().role())>"Tableau de bord"</a>
                </Show>
                <Show when=move || session.get().role() == Some(Role::Patient)>
                    <a href="/patient/book">"Prendre rendez-vous"</a>
                </Show>
                <Show
                    when=move || session.get().logged_in()
                    fallback=|| {
                        view! {
                            <a href="/auth/login">"Connexion"</a>
                            <a href="/auth/register">"Inscription"</a>
                        }
                    }
                >
                    <span class="navbar__self">
                        {move || session.get().display_name().unwrap_or_default()}
                        " ("
                        <span class="navbar__self-role">{move || role_text(session.get().role())}</span>
                        ")"
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
