use crate::locale::Strings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Projects,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the rendered section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self, strings: &Strings) -> &str {
        match self {
            Section::About => &strings.about,
            Section::Experience => &strings.experience,
            Section::Projects => &strings.projects,
            Section::Services => &strings.services,
            Section::Contact => &strings.contact,
        }
    }

    pub fn heading(self, strings: &Strings) -> &str {
        match self {
            Section::About => &strings.about,
            Section::Experience => &strings.experience_title,
            Section::Projects => &strings.projects_title,
            Section::Services => &strings.services_title,
            Section::Contact => &strings.contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub label: &'a str,
    pub section: Section,
}

pub fn nav_items(strings: &Strings) -> [NavItem<'_>; 5] {
    Section::ALL.map(|section| NavItem {
        label: section.label(strings),
        section,
    })
}

/// Host display surface that can bring an anchor into view.
pub trait ScrollSurface {
    /// Returns false when nothing with that anchor is mounted.
    fn scroll_smooth(&self, anchor: &str) -> bool;
}

pub fn scroll_to(surface: &impl ScrollSurface, section: Section) {
    if !surface.scroll_smooth(section.anchor()) {
        log::debug!("section `{}` is not mounted", section.anchor());
    }
}

#[cfg(feature = "hydrate")]
pub struct DocumentSurface;

#[cfg(feature = "hydrate")]
impl ScrollSurface for DocumentSurface {
    fn scroll_smooth(&self, anchor: &str) -> bool {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        let Some(el) = el else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Catalog, Locale};
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct FakeSurface {
        mounted: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeSurface {
        fn with_all_sections() -> Self {
            Self {
                mounted: Section::ALL.iter().map(|s| s.anchor()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_smooth(&self, anchor: &str) -> bool {
            if !self.mounted.contains(&anchor) {
                return false;
            }
            self.scrolled.borrow_mut().push(anchor.to_string());
            true
        }
    }

    #[test]
    fn test_anchors_are_distinct() {
        let anchors = Section::ALL
            .iter()
            .map(|s| s.anchor())
            .collect::<HashSet<_>>();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_scroll_targets_are_stable() {
        let surface = FakeSurface::with_all_sections();
        for _ in 0..2 {
            for section in Section::ALL {
                scroll_to(&surface, section);
            }
        }
        let scrolled = surface.scrolled.borrow();
        assert_eq!(
            &scrolled[..5],
            &["about", "experience", "projects", "services", "contact"]
        );
        assert_eq!(scrolled[..5], scrolled[5..]);
    }

    #[test]
    fn test_scroll_to_unmounted_is_noop() {
        let surface = FakeSurface {
            mounted: vec!["about"],
            scrolled: RefCell::new(Vec::new()),
        };
        scroll_to(&surface, Section::Services);
        assert!(surface.scrolled.borrow().is_empty());
        scroll_to(&surface, Section::About);
        assert_eq!(*surface.scrolled.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn test_nav_items_follow_locale() {
        let catalog = Catalog::global().expect("embedded locales should be complete");

        let en = nav_items(catalog.strings(Locale::EnUs));
        let labels = en.iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["About", "Experience", "Projects", "Services", "Contact"]
        );

        let pt = nav_items(catalog.strings(Locale::PtBr));
        let labels = pt.iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Sobre", "Experiência", "Projetos", "Serviços", "Contato"]
        );

        for (a, b) in en.iter().zip(pt.iter()) {
            assert_eq!(a.section, b.section);
        }
    }
}
