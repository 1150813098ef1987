//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::landing_route;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Navbar/>
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"Clinique"</h1>
                <p>"Prenez rendez-vous avec nos médecins en ligne, suivez vos demandes et gérez votre agenda."</p>
                <div class="home-page__actions">
                    <Show
                        when=move || session.get().logged_in()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/auth/login">"Connexion"</a>
                                <a class="btn" href="/auth/register">"Inscription"</a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href=move || landing_route(session.get().role())>
                            "Tableau de bord"
                        </a>
                        <Show when=move || session.get().role() == Some(Role::Patient)>
                            <a class="btn" href="/patient/book">"Prendre rendez-vous"</a>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
