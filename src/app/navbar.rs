use leptos::{ev::MouseEvent, prelude::*};

use crate::content::BRAND;
use crate::locale::LanguageStore;
use crate::nav::{nav_items, Section};

fn scroll(section: Section) {
    #[cfg(feature = "hydrate")]
    crate::nav::scroll_to(&crate::nav::DocumentSurface, section);
    #[cfg(not(feature = "hydrate"))]
    let _ = section;
}

#[component]
pub fn NavBar(store: ReadSignal<LanguageStore>, set_store: WriteSignal<LanguageStore>) -> impl IntoView {
    let strings = move || store.get().current_strings();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-gray-950/80 backdrop-blur-sm border-b border-purple-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <span class="text-xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 text-transparent bg-clip-text">
                        {BRAND}
                    </span>
                    <div class="flex items-center space-x-4">
                        <div class="hidden md:flex space-x-8">
                            {move || {
                                nav_items(strings())
                                    .into_iter()
                                    .map(|item| {
                                        let section = item.section;
                                        view! {
                                            <a
                                                href=format!("#{}", section.anchor())
                                                on:click=move |ev: MouseEvent| {
                                                    ev.prevent_default();
                                                    scroll(section);
                                                }
                                                class="text-gray-300 hover:text-cyan-400 transition-colors"
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <button
                            on:click=move |_| set_store.update(LanguageStore::toggle)
                            aria-label=move || strings().toggle_language.as_str()
                            title=move || strings().toggle_language.as_str()
                            class="flex items-center justify-center px-3 py-1 rounded-md bg-gray-950/80 border border-purple-900 hover:border-purple-700 transition-all hover:shadow-[0_0_15px_rgba(34,211,238,0.3)]"
                        >
                            {move || store.get().locale().flag()}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
