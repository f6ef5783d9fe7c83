//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/lcnc-www.css"/>
        <Title text="Pricing · LC/NC Database"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=PricingPage/>
                    <Route path="/pricing" view=PricingPage/>
                </Routes>
            </main>
        </Router>
    }
}
