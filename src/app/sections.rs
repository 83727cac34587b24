use leptos::{ev::MouseEvent, prelude::*};

use crate::clipboard::Notice;
use crate::content::{Icon, DISCORD_HANDLE, EXPERIENCE, PROJECTS, SERVICES, SOCIAL_LINKS};
use crate::locale::Strings;
use crate::nav::Section;

const CARD_CLASS: &str = "p-6 bg-gray-950/80 backdrop-blur-sm rounded-lg border border-purple-900 hover:border-purple-700 transition-colors hover:shadow-[0_0_25px_rgba(168,85,247,0.2)]";
const ROUND_BUTTON_CLASS: &str = "w-12 h-12 flex items-center justify-center rounded-full bg-gray-950/80 border border-purple-900 hover:border-purple-700 transition-colors hover:shadow-[0_0_25px_rgba(168,85,247,0.2)]";

#[component]
fn SectionBlock(section: Section, strings: Signal<&'static Strings>, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class="mb-16 scroll-mt-20">
            <h2 class="text-2xl font-bold text-cyan-400 mb-6 drop-shadow-[0_0_15px_rgba(34,211,238,0.5)]">
                {move || section.heading(strings.get())}
            </h2>
            {children()}
        </section>
    }
}

#[component]
fn CardTitle(icon: Icon, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center mb-4">
            <i class=format!("{} text-2xl text-cyan-400 mr-2", icon.class())></i>
            <h3 class="text-xl font-semibold text-gray-300">{text}</h3>
        </div>
    }
}

#[component]
pub fn About(strings: Signal<&'static Strings>) -> impl IntoView {
    view! {
        <SectionBlock section=Section::About strings>
            <div class=CARD_CLASS>
                <p class="text-gray-300 leading-relaxed">
                    {move || strings.get().about_text.as_str()}
                </p>
            </div>
        </SectionBlock>
    }
}

#[component]
pub fn ExperienceSection(strings: Signal<&'static Strings>) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Experience strings>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {EXPERIENCE
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class=CARD_CLASS>
                                <CardTitle icon=exp.icon text=exp.period />
                                <h4 class="text-lg font-medium text-purple-400 mb-2">{exp.title}</h4>
                                <p class="text-gray-300">{exp.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
pub fn ProjectsSection(strings: Signal<&'static Strings>) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Projects strings>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class=CARD_CLASS>
                                <CardTitle icon=project.icon text=project.name />
                                <p class="text-gray-300 mb-4">{project.summary}</p>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="px-3 py-1 bg-purple-900/50 rounded-full text-sm text-purple-300">
                                                    {*tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
pub fn ServicesSection(strings: Signal<&'static Strings>) -> impl IntoView {
    view! {
        <SectionBlock section=Section::Services strings>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class=CARD_CLASS>
                                <CardTitle icon=service.icon text=service.name />
                                <p class="text-gray-300">{service.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionBlock>
    }
}

#[component]
pub fn Contact(strings: Signal<&'static Strings>, set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    let copy_discord = move |_: MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::clipboard::{copy_and_notify, BrowserClipboard};

            let strings = strings.get_untracked();
            leptos::task::spawn_local(async move {
                // failure is already logged and shown as a notice
                let _ = copy_and_notify(&BrowserClipboard, &set_notice, DISCORD_HANDLE, strings).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = set_notice;
    };

    view! {
        <SectionBlock section=Section::Contact strings>
            <p class="text-xl text-gray-300 mb-8 text-center">
                {move || strings.get().contact_cta.as_str()}
            </p>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4 justify-items-center">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        let new_tab = link.opens_new_tab();
                        view! {
                            <a
                                href=link.href
                                target=new_tab.then_some("_blank")
                                rel=new_tab.then_some("noopener noreferrer")
                                aria-label=link.label
                                class=ROUND_BUTTON_CLASS
                            >
                                <i class=format!("{} text-2xl text-cyan-400", link.icon.class())></i>
                            </a>
                        }
                    })
                    .collect_view()}
                <button
                    on:click=copy_discord
                    aria-label="Discord"
                    title=DISCORD_HANDLE
                    class=ROUND_BUTTON_CLASS
                >
                    <i class=format!("{} text-2xl text-cyan-400", Icon::MessageSquare.class())></i>
                </button>
            </div>
        </SectionBlock>
    }
}
