//! About page, static content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="about-page">
            <h1>"À propos"</h1>
            <p>
                "La Clinique met en relation patients et médecins : réservation en ligne, \
                 validation par le praticien et suivi des rendez-vous depuis un tableau de bord."
            </p>
            <p>
                "Les demandes de rendez-vous restent en attente jusqu'à leur approbation \
                 ou leur rejet par le médecin concerné."
            </p>
        </div>
    }
}
