//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__hero">
                <h1>"Tech Mahindra"</h1>
                <h2>"Onboarding Portal"</h2>
                <p>
                    "Everything a new joiner needs in one place: onboarding tasks, "
                    "document submission, company policies, and the people who can help."
                </p>
                <a class="btn btn--primary landing__cta" href="/login">
                    "Get Started"
                </a>
            </header>
            <section class="landing__features">
                <div class="landing__feature">
                    <h3>"Track Progress"</h3>
                    <p>"See every onboarding task and how far along you are."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Submit Documents"</h3>
                    <p>"Upload ID proof, certificates, and bank details for HR review."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Find Resources"</h3>
                    <p>"Office locations, the holiday calendar, and company policies."</p>
                </div>
            </section>
        </div>
    }
}
