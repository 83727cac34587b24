mod hero;
mod navbar;
mod sections;
mod toast;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::clipboard::Notice;
use crate::content::BRAND;
use crate::locale::{Catalog, LanguageStore};

use hero::Hero;
use navbar::NavBar;
use sections::{About, Contact, ExperienceSection, ProjectsSection, ServicesSection};
use toast::Toast;

const NOTICE_TIMEOUT_MS: f64 = 4000.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/zylar-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.469.0/font/lucide.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match Catalog::global() {
        Ok(catalog) => Either::Left(view! { <Portfolio catalog /> }),
        Err(e) => Either::Right(
            view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-red-400">{format!("Page unavailable: {e}")}</p>
            },
        ),
    }
}

/// Owns the language state; everything below reads it through `strings`.
#[component]
fn Portfolio(catalog: &'static Catalog) -> impl IntoView {
    let (store, set_store) = signal(LanguageStore::new(catalog));
    view! { <PortfolioView store set_store /> }
}

#[component]
fn PortfolioView(store: ReadSignal<LanguageStore>, set_store: WriteSignal<LanguageStore>) -> impl IntoView {
    let strings = Signal::derive(move || store.get().current_strings());

    let notice = RwSignal::new(None::<Notice>);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| notice.set(None), NOTICE_TIMEOUT_MS);
    Effect::watch(
        move || notice.get(),
        move |current, _, _| {
            if current.is_some() {
                start(());
            }
        },
        false,
    );

    view! {
        <Html {..} lang=move || store.get().locale().code() />
        <Title text=move || format!("{BRAND} - {}", strings.get().role) />
        <div class="min-h-screen bg-gray-950 text-white">
            <NavBar store set_store />
            <Hero strings />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <About strings />
                <ExperienceSection strings />
                <ProjectsSection strings />
                <ServicesSection strings />
                <Contact strings set_notice=notice.write_only() />
            </main>
            <Toast notice=notice.read_only() />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::SERVICES;
    use crate::nav::Section;
    use futures::StreamExt;
    use leptos_meta::ServerMetaContext;

    fn catalog() -> &'static Catalog {
        Catalog::global().expect("embedded locales should be complete")
    }

    fn render_body(store: ReadSignal<LanguageStore>, set_store: WriteSignal<LanguageStore>) -> String {
        view! { <PortfolioView store set_store /> }.to_html()
    }

    // renders a full document so the <html> attributes and <title> get injected
    async fn render_document(
        store: ReadSignal<LanguageStore>,
        set_store: WriteSignal<LanguageStore>,
    ) -> String {
        let (meta, output) = ServerMetaContext::new();
        provide_context(meta);
        let html = view! {
            <html>
                <head>
                    <MetaTags />
                </head>
                <body>
                    <PortfolioView store set_store />
                </body>
            </html>
        }
        .to_html();
        output
            .inject_meta_context(futures::stream::iter([html]))
            .await
            .collect::<String>()
            .await
    }

    #[test]
    fn test_sections_render_with_anchors() {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();

        let (store, set_store) = signal(LanguageStore::new(catalog()));
        let html = render_body(store, set_store);

        for section in Section::ALL {
            let id = format!("id=\"{}\"", section.anchor());
            assert_eq!(html.matches(&id).count(), 1, "{id} should appear once");
        }
        for heading in ["About", "Experience", "Projects", "Services", "Contact"] {
            assert!(html.contains(&format!(">{heading}<")), "missing heading {heading}");
        }
        for service in SERVICES {
            assert!(html.contains(service.name), "missing service {}", service.name);
        }
        assert!(html.contains("LuaU Developer"));
        assert!(html.contains("🇺🇸"));
        assert!(html.contains(r#"aria-label="Discord""#));
    }

    #[tokio::test]
    async fn test_toggle_rerenders_in_portuguese() {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();

        let (store, set_store) = signal(LanguageStore::new(catalog()));
        let before = render_document(store, set_store).await;
        assert!(before.contains(r#"lang="en-US""#));
        assert!(before.contains("Zylar - LuaU Developer"));

        set_store.update(LanguageStore::toggle);
        let after = render_document(store, set_store).await;

        for heading in ["Sobre", "Experiência", "Projetos", "Serviços", "Contato"] {
            assert!(after.contains(&format!(">{heading}<")), "missing heading {heading}");
        }
        assert!(after.contains("Desenvolvedor LuaU"));
        assert!(after.contains("🇧🇷"));
        assert!(!after.contains("🇺🇸"));
        assert!(after.contains("Zylar - Desenvolvedor LuaU"));
        assert_eq!(after.matches("lang=\"").count(), 1, "<html> should carry a single lang");
        assert!(after.contains(r#"lang="pt-BR""#));
    }
}
