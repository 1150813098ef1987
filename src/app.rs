//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, book_appointment::BookAppointmentPage, doctor_dashboard::DoctorDashboardPage,
    home::HomePage, login::LoginPage, patient_dashboard::PatientDashboardPage,
    register::RegisterPage,
};
use crate::state::appointments::AppointmentsState;
use crate::state::practice::PracticeState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and dashboard state contexts and sets up
/// client-side routing. Unknown paths redirect home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session is rebuilt from durable storage once per page load; every
    // other state starts empty.
    let session = RwSignal::new(SessionState::restore());
    let appointments = RwSignal::new(AppointmentsState::default());
    let practice = RwSignal::new(PracticeState::default());

    provide_context(session);
    provide_context(appointments);
    provide_context(practice);

    view! {
        <Stylesheet id="leptos" href="/pkg/clinique-client.css"/>
        <Title text="Clinique"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/home"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/home"/> }/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                <Route
                    path=(StaticSegment("doctor"), StaticSegment("dashboard"))
                    view=DoctorDashboardPage
                />
                <Route
                    path=(StaticSegment("patient"), StaticSegment("dashboard"))
                    view=PatientDashboardPage
                />
                <Route
                    path=(StaticSegment("patient"), StaticSegment("book"))
                    view=BookAppointmentPage
                />
            </Routes>
        </Router>
    }
}
