//! Pricing page

use leptos::*;

use crate::billing::{display_plans, BillingPeriod};
use crate::catalog::{ADD_ONS, FAQS};
use crate::components::*;

#[component]
pub fn PricingPage() -> impl IntoView {
    let billing = create_rw_signal(BillingPeriod::default());

    view! {
        <div class="min-h-screen w-full bg-gray-50 text-gray-900">
            // Hero
            <header class="mx-auto max-w-6xl px-4 pt-16 pb-10">
                <div class="text-center">
                    <h1 class="text-3xl sm:text-4xl md:text-5xl font-bold tracking-tight">
                        "More records. More control. Fewer limits."
                    </h1>
                    <p class="mt-4 text-base sm:text-lg md:text-xl text-gray-600 max-w-3xl mx-auto">
                        "Build your next data workspace without worrying about hitting walls. "
                        "Start free. Upgrade as your team grows — or your workflows get serious."
                    </p>
                    <BillingToggle billing=billing/>
                </div>
            </header>

            // Pricing Cards
            <section class="mx-auto max-w-6xl px-4 pb-12">
                <PlanGrid period=billing.get_untracked()/>
            </section>

            // Add-Ons
            <section class="mx-auto max-w-6xl px-4 pb-16">
                <div class="rounded-3xl bg-white border border-gray-200 shadow-sm p-6">
                    <h3 class="text-xl font-semibold">"Add‑Ons"</h3>
                    <p class="mt-1 text-gray-600 text-sm">"Extend capacity without switching plans."</p>
                    <div class="mt-6 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {ADD_ONS.iter().map(|add_on| view! {
                            <AddOnCard add_on=add_on/>
                        }).collect::<Vec<_>>()}
                    </div>
                    <CreditWallet/>
                </div>
            </section>

            // FAQ
            <section class="mx-auto max-w-4xl px-4 pb-24">
                <h3 class="text-2xl font-bold text-center">"FAQ"</h3>
                <div class="mt-8 divide-y divide-gray-200 rounded-3xl border border-gray-200 bg-white shadow-sm">
                    {FAQS.iter().map(|entry| view! {
                        <FaqItem entry=entry/>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <FooterCta/>
        </div>
    }
}

#[component]
fn BillingToggle(billing: RwSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="mt-6 inline-flex items-center gap-3 rounded-full bg-white shadow p-2">
            {BillingPeriod::ALL.into_iter().map(|period| view! {
                <button
                    class=move || period.toggle_class(billing.get())
                    on:click=move |_| {
                        tracing::debug!(?period, "billing period selected");
                        billing.set(period);
                    }
                >
                    {period.label()}
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Plan cards, rendered once; the period does not change their content.
#[component]
fn PlanGrid(period: BillingPeriod) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {display_plans(period).iter().map(|plan| view! {
                <PlanCard plan=plan/>
            }).collect::<Vec<_>>()}
        </div>
    }
}
