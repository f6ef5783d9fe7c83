//! Footer call-to-action

use leptos::*;

#[component]
pub fn FooterCta() -> impl IntoView {
    view! {
        <footer class="mx-auto max-w-6xl px-4 pb-20">
            <div class="rounded-3xl bg-gray-900 text-white p-8 sm:p-10 flex flex-col sm:flex-row items-start sm:items-center justify-between gap-6 shadow-lg">
                <div>
                    <h4 class="text-xl font-semibold">"Ready to build without limits?"</h4>
                    <p class="text-sm text-gray-300 mt-1">"Start free. Upgrade when your workflows go pro."</p>
                </div>
                <div class="flex gap-3">
                    <button class="rounded-xl bg-white text-gray-900 px-4 py-2.5 text-sm font-semibold shadow">
                        "Get started free"
                    </button>
                    <button class="rounded-xl bg-gray-800 text-white px-4 py-2.5 text-sm font-semibold border border-gray-700">
                        "Talk to sales"
                    </button>
                </div>
            </div>
        </footer>
    }
}
