use leptos::prelude::*;

use crate::clipboard::{Notice, Notifier};

impl Notifier for WriteSignal<Option<Notice>> {
    fn notify(&self, notice: Notice) {
        self.set(Some(notice));
    }
}

#[component]
pub fn Toast(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let accent = if n.is_error() {
                "border-red-700 text-red-300"
            } else {
                "border-purple-700 text-cyan-300"
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 px-4 py-3 rounded-md bg-gray-950/90 backdrop-blur-sm border shadow-[0_0_25px_rgba(168,85,247,0.2)] {accent}",
                    )
                >
                    {n.message}
                </div>
            }
        })
    }
}
