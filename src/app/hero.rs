use leptos::prelude::*;

use crate::content::BRAND;
use crate::locale::Strings;

#[component]
pub fn Hero(strings: Signal<&'static Strings>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden pt-16">
            <div class="absolute inset-0">
                <div class="absolute inset-0 bg-gradient-to-r from-purple-600/10 via-cyan-600/10 to-purple-600/10 blur-3xl"></div>
                <div class="absolute -inset-2 bg-gray-950 opacity-80"></div>
            </div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24">
                <div class="text-center">
                    <h1 class="text-6xl font-bold mb-6">
                        <span class="animate-pulse bg-gradient-to-r from-purple-400 via-cyan-400 to-purple-400 text-transparent bg-clip-text drop-shadow-[0_0_35px_rgba(168,85,247,0.5)]">
                            {BRAND}
                        </span>
                    </h1>
                    <p class="text-2xl text-gray-300 mb-8 drop-shadow-[0_0_15px_rgba(34,211,238,0.3)]">
                        {move || strings.get().role.as_str()}
                    </p>
                </div>
            </div>
        </div>
    }
}
