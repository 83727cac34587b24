pub const BRAND: &str = "Zylar";
pub const DISCORD_HANDLE: &str = "zyl4rcore";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Clock,
    Rocket,
    Code,
    Wrench,
    Cpu,
    Search,
    Twitter,
    Youtube,
    Github,
    Mail,
    MessageSquare,
}

impl Icon {
    /// Class name in the lucide icon font.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Clock => "icon-clock",
            Icon::Rocket => "icon-rocket",
            Icon::Code => "icon-code",
            Icon::Wrench => "icon-wrench",
            Icon::Cpu => "icon-cpu",
            Icon::Search => "icon-search",
            Icon::Twitter => "icon-twitter",
            Icon::Youtube => "icon-youtube",
            Icon::Github => "icon-github",
            Icon::Mail => "icon-mail",
            Icon::MessageSquare => "icon-message-square",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub name: &'static str,
    pub summary: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    /// Web profiles open in a new browsing context, `mailto:` stays in place.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        period: "2019 - Present",
        title: "Freelance Developer",
        summary: "Working on various projects for clients, specializing in game systems and custom solutions.",
        icon: Icon::Clock,
    },
    Experience {
        period: "2020 - Present",
        title: "Independent Developer",
        summary: "Creating and maintaining personal projects, focusing on innovative game mechanics and systems.",
        icon: Icon::Rocket,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Custom Framework",
        summary: "A lightweight game framework built with LuaU, focusing on performance and ease of use.",
        tags: &["LuaU", "Game Development"],
        icon: Icon::Code,
    },
    Project {
        name: "Game Systems",
        summary: "Collection of reusable game systems and mechanics for various projects.",
        tags: &["Systems Design", "Architecture"],
        icon: Icon::Wrench,
    },
];

// TODO: placeholder copy, replace with the real service list once it is written.
pub static SERVICES: &[Service] = &[
    Service {
        name: "Custom Systems",
        summary: "Gameplay, data and UI systems built to your design, from prototype to release.",
        icon: Icon::Cpu,
    },
    Service {
        name: "Game Mechanics",
        summary: "Combat, progression and interaction mechanics tuned for feel and performance.",
        icon: Icon::Rocket,
    },
    Service {
        name: "Code Review and Optimization",
        summary: "Audits of existing LuaU codebases with concrete fixes for performance and maintainability.",
        icon: Icon::Search,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/zylarcore",
        icon: Icon::Twitter,
    },
    SocialLink {
        label: "YouTube",
        href: "https://youtube.com/@ZylarCore",
        icon: Icon::Youtube,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Zyl4r",
        icon: Icon::Github,
    },
    SocialLink {
        label: "Email",
        href: "mailto:zylarcore@gmail.com",
        icon: Icon::Mail,
    },
];
