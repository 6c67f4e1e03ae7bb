//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::{AppAuthService, AuthService, BrowserStorage, MockAuthBackend, SystemClock};
use crate::components::notice::NoticeBanner;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::employee::{
    dashboard::EmployeeDashboardPage, documents::DocumentsPage, profile::ProfilePage, support::SupportPage,
    task_detail::TaskDetailPage, tasks::EmployeeTasksPage,
};
use crate::pages::hr::{
    dashboard::HrDashboardPage, employees::EmployeesPage, reports::ReportsPage, task_templates::TaskTemplatesPage,
};
use crate::pages::resources::{
    holiday_calendar::HolidayCalendarPage, office_map::OfficeMapPage, policies::PoliciesPage,
};
use crate::pages::{landing::LandingPage, login::LoginPage, not_found::NotFoundPage};
use crate::state::{auth::AuthState, notifications::NotificationsState, ui::UiState};
use crate::util::dark_mode;
use crate::util::delay::MOCK_LATENCY;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the auth service and shared state contexts, restores any stored
/// session once hydrated, and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let service: AppAuthService =
        AuthService::new(BrowserStorage, SystemClock, MockAuthBackend::with_latency(MOCK_LATENCY));
    let auth: Signal<AuthState> = Signal::derive({
        let service = service.clone();
        move || service.state()
    });
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::seeded());

    provide_context(service.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(notifications);

    // Effects only run in the browser, where the token lives.
    Effect::new(move || {
        service.restore();

        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/onboarding-portal.css"/>
        <Title text="Tech Mahindra Onboarding Portal"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                <Route
                    path=(StaticSegment("employee"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute><EmployeeDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("tasks"))
                    view=|| view! { <ProtectedRoute><EmployeeTasksPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("tasks"), ParamSegment("task_id"))
                    view=|| view! { <ProtectedRoute><TaskDetailPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("documents"))
                    view=|| view! { <ProtectedRoute><DocumentsPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("profile"))
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("support"))
                    view=|| view! { <ProtectedRoute><SupportPage/></ProtectedRoute> }
                />

                <Route
                    path=(StaticSegment("hr"), StaticSegment("dashboard"))
                    view=|| view! { <ProtectedRoute><HrDashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("hr"), StaticSegment("employees"))
                    view=|| view! { <ProtectedRoute><EmployeesPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("hr"), StaticSegment("task-templates"))
                    view=|| view! { <ProtectedRoute><TaskTemplatesPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("hr"), StaticSegment("reports"))
                    view=|| view! { <ProtectedRoute><ReportsPage/></ProtectedRoute> }
                />

                <Route
                    path=StaticSegment("office-map")
                    view=|| view! { <ProtectedRoute><OfficeMapPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("holiday-calendar")
                    view=|| view! { <ProtectedRoute><HolidayCalendarPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("company-policies")
                    view=|| view! { <ProtectedRoute><PoliciesPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
