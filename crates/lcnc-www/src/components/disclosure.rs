//! Collapsible FAQ item

use leptos::*;

use crate::catalog::FaqEntry;

/// Open/closed state owned by a single collapsible item.
#[derive(Debug, Clone, Copy)]
pub struct Disclosure {
    open: RwSignal<bool>,
}

impl Disclosure {
    /// Starts collapsed. Must be created inside a reactive runtime.
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

fn chevron_class(open: bool) -> &'static str {
    if open {
        "h-5 w-5 transition-transform rotate-180"
    } else {
        "h-5 w-5 transition-transform rotate-0"
    }
}

fn answer_class(open: bool) -> &'static str {
    if open {
        "text-sm text-gray-600 pr-8 transition-all mt-2 opacity-100"
    } else {
        "text-sm text-gray-600 pr-8 transition-all max-h-0 overflow-hidden opacity-0"
    }
}

#[component]
pub fn FaqItem(entry: &'static FaqEntry) -> impl IntoView {
    let disclosure = Disclosure::new();

    view! {
        <div class="px-5 py-4">
            <button
                class="w-full flex items-center justify-between text-left"
                on:click=move |_| disclosure.toggle()
            >
                <span class="text-sm font-semibold">{entry.question}</span>
                <svg
                    class=move || chevron_class(disclosure.is_open())
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"/>
                </svg>
            </button>
            <div class=move || answer_class(disclosure.is_open())>
                {entry.answer}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let runtime = create_runtime();
        let items: Vec<Disclosure> = (0..6).map(|_| Disclosure::new()).collect();
        assert!(items.iter().all(|d| !d.is_open()));
        runtime.dispose();
    }

    #[test]
    fn test_toggle_parity() {
        let runtime = create_runtime();
        let item = Disclosure::new();
        for clicks in 1..=6 {
            item.toggle();
            assert_eq!(item.is_open(), clicks % 2 == 1, "after {} clicks", clicks);
        }
        assert!(!item.is_open());
        runtime.dispose();
    }

    #[test]
    fn test_items_are_independent() {
        let runtime = create_runtime();
        let first = Disclosure::new();
        let second = Disclosure::new();

        second.toggle();
        assert!(!first.is_open());
        assert!(second.is_open());

        first.toggle();
        assert!(first.is_open());
        assert!(second.is_open());

        second.toggle();
        assert!(first.is_open());
        assert!(!second.is_open());
        runtime.dispose();
    }

    #[test]
    fn test_classes_follow_state() {
        assert!(chevron_class(true).contains("rotate-180"));
        assert!(chevron_class(false).contains("rotate-0"));
        assert!(answer_class(false).contains("max-h-0"));
        assert!(answer_class(true).contains("opacity-100"));
    }
}
