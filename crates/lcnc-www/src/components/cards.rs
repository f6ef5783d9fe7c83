//! Card components for the pricing page

use leptos::*;

use crate::catalog::{AddOn, Plan, CREDIT_WALLET_BALANCE, CREDIT_WALLET_COPY, CREDIT_WALLET_TITLE};

#[component]
pub fn PlanCard(plan: &'static Plan) -> impl IntoView {
    let (frame, button) = if plan.popular {
        ("border-gray-900 ring-2 ring-gray-900", "bg-gray-900 text-white")
    } else {
        ("border-gray-200", "bg-gray-100 hover:bg-gray-200")
    };
    let price = plan.price_label();

    view! {
        <div class=format!("relative rounded-2xl border bg-white shadow-sm flex flex-col {}", frame)>
            {plan.popular.then(|| view! {
                <div class="absolute -top-3 left-1/2 -translate-x-1/2">
                    <span class="rounded-full bg-gray-900 text-white text-xs font-semibold px-3 py-1 shadow">
                        "Most Popular"
                    </span>
                </div>
            })}

            <div class="p-6 flex-1">
                <h3 class="text-xl font-semibold">{plan.name}</h3>
                <div class="mt-3 flex items-baseline gap-1">
                    <span class="text-3xl font-bold">{price.headline()}</span>
                    {price.note().map(|note| view! {
                        <span class="text-sm text-gray-500">{note}</span>
                    })}
                </div>

                <ul class="mt-6 space-y-2 text-sm">
                    {plan.limits().into_iter().map(|(label, value)| view! {
                        <li><strong>{label}</strong>" "{value}</li>
                    }).collect::<Vec<_>>()}
                </ul>

                <div class="mt-6">
                    <h4 class="text-sm font-semibold tracking-wide text-gray-700 uppercase">"Includes"</h4>
                    <ul class="mt-2 space-y-2 text-sm text-gray-700">
                        {plan.features.iter().map(|feature| view! {
                            <li class="flex items-start gap-2">
                                <span class="mt-1 inline-block h-2 w-2 rounded-full bg-gray-900"></span>
                                <span>{*feature}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="p-6 pt-0">
                <button class=format!("w-full rounded-xl px-4 py-2.5 text-center text-sm font-semibold shadow {}", button)>
                    {plan.cta}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AddOnCard(add_on: &'static AddOn) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-gray-200 p-4">
            <div class="text-sm font-semibold">{add_on.title}</div>
            <div class="mt-1 text-sm text-gray-600">{add_on.detail}</div>
        </div>
    }
}

/// Credit wallet explainer with a fixed illustrative balance
#[component]
pub fn CreditWallet() -> impl IntoView {
    view! {
        <div class="mt-6 rounded-2xl bg-gray-50 border border-dashed border-gray-300 p-4">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <div>
                    <div class="text-sm font-semibold">{CREDIT_WALLET_TITLE}</div>
                    <p class="text-sm text-gray-600">{CREDIT_WALLET_COPY}</p>
                </div>
                <div class="flex items-center gap-2">
                    <div class="h-2 w-40 bg-white rounded-full shadow-inner overflow-hidden">
                        <div class="h-full w-2/3 bg-gray-900"></div>
                    </div>
                    <span class="text-xs text-gray-700">{CREDIT_WALLET_BALANCE}</span>
                </div>
            </div>
        </div>
    }
}
