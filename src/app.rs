//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::RequireAuth;
use crate::components::header::Header;
use crate::pages::{
    dashboard::DashboardPage, email::EmailPage, home::HomePage, journal_form::JournalFormPage,
    journal_view::JournalViewPage, login::LoginPage, signup::SignupPage,
};
use crate::state::session::{self, SessionState};

/// Root application component.
///
/// Creates the single session store at startup, settles it from the
/// persistent token store, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_signal = RwSignal::new(SessionState::default());
    provide_context(session_signal);
    session::initialize(session_signal);

    view! {
        <Title text="Journal App"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// App chrome and routes, rendered inside the router so navigation is
/// available to the unauthorized subscription and the header.
#[component]
fn Shell() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // The HTTP client reports a 401 at most once per session; tearing
    // the session down and moving to the login page happens here, not
    // inside the network layer.
    crate::net::api::on_unauthorized(move || {
        session_signal.update(SessionState::clear);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <Header/>
        <main class="app-main">
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("journal"), StaticSegment("new"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <JournalFormPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("journal"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <JournalFormPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("journal"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <JournalViewPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("email")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <EmailPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </main>
    }
}
