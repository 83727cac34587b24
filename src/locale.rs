use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

static GLOBAL_CATALOG: LazyLock<Result<Catalog, LocaleError>> = LazyLock::new(Catalog::load);

#[derive(Embed)]
#[folder = "locales"]
pub struct LocaleFiles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::PtBr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::EnUs => "🇺🇸",
            Locale::PtBr => "🇧🇷",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUs => Locale::PtBr,
            Locale::PtBr => Locale::EnUs,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Strings {
    pub about: String,
    pub experience: String,
    pub projects: String,
    pub services: String,
    pub contact: String,
    pub role: String,
    pub about_text: String,
    pub contact_cta: String,
    pub discord_copied: String,
    pub clipboard_failed: String,
    pub experience_title: String,
    pub projects_title: String,
    pub services_title: String,
    pub toggle_language: String,
}

impl Strings {
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, LocaleError> {
        let strings: Strings = serde_json::from_str(json).map_err(|e| LocaleError::Parse {
            locale: locale.code(),
            reason: e.to_string(),
        })?;
        strings.validate(locale)?;
        Ok(strings)
    }

    pub fn fields(&self) -> [(&'static str, &str); 14] {
        [
            ("about", self.about.as_str()),
            ("experience", self.experience.as_str()),
            ("projects", self.projects.as_str()),
            ("services", self.services.as_str()),
            ("contact", self.contact.as_str()),
            ("role", self.role.as_str()),
            ("about_text", self.about_text.as_str()),
            ("contact_cta", self.contact_cta.as_str()),
            ("discord_copied", self.discord_copied.as_str()),
            ("clipboard_failed", self.clipboard_failed.as_str()),
            ("experience_title", self.experience_title.as_str()),
            ("projects_title", self.projects_title.as_str()),
            ("services_title", self.services_title.as_str()),
            ("toggle_language", self.toggle_language.as_str()),
        ]
    }

    fn validate(&self, locale: Locale) -> Result<(), LocaleError> {
        match self.fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(LocaleError::EmptyField {
                locale: locale.code(),
                field,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("no string table found for locale {0}")]
    MissingLocale(&'static str),
    #[error("couldn't parse string table for {locale}: {reason}")]
    Parse {
        locale: &'static str,
        reason: String,
    },
    #[error("string table for {locale} has an empty `{field}`")]
    EmptyField {
        locale: &'static str,
        field: &'static str,
    },
}

/// Every supported locale mapped to its validated string table.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<Locale, Strings>,
}

impl Catalog {
    /// Loads one embedded table per [`Locale`], failing on the first missing or incomplete one.
    pub fn load() -> Result<Self, LocaleError> {
        Self::load_with(|locale| {
            let file = LocaleFiles::get(&format!("{}.json", locale.code()))?;
            String::from_utf8(file.data.into()).ok()
        })
    }

    pub fn load_with<F>(source: F) -> Result<Self, LocaleError>
    where
        F: Fn(Locale) -> Option<String>,
    {
        let tables = Locale::ALL
            .into_iter()
            .map(|locale| {
                let json = source(locale).ok_or(LocaleError::MissingLocale(locale.code()))?;
                Ok::<_, LocaleError>((locale, Strings::from_json(locale, &json)?))
            })
            .collect::<Result<HashMap<_, _>, LocaleError>>()?;
        Ok(Self { tables })
    }

    pub fn global() -> Result<&'static Catalog, LocaleError> {
        GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
    }

    pub fn strings(&self, locale: Locale) -> &Strings {
        // every variant is inserted by `load_with`
        &self.tables[&locale]
    }
}

/// The active locale plus the catalog it reads from.
#[derive(Debug, Clone, Copy)]
pub struct LanguageStore {
    active: Locale,
    catalog: &'static Catalog,
}

impl LanguageStore {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            active: Locale::default(),
            catalog,
        }
    }

    pub fn locale(&self) -> Locale {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = self.active.toggled();
    }

    pub fn current_strings(&self) -> &'static Strings {
        self.catalog.strings(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::global().expect("embedded locales should be complete")
    }

    #[test]
    fn test_every_locale_is_complete() {
        let catalog = catalog();
        for locale in Locale::ALL {
            let strings = catalog.strings(locale);
            for (field, value) in strings.fields() {
                assert!(!value.is_empty(), "{locale} is missing {field}");
            }
        }
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::default(), Locale::EnUs);
        assert_eq!(Locale::EnUs.code(), "en-US");
        assert_eq!(Locale::PtBr.code(), "pt-BR");
        assert_ne!(Locale::EnUs.flag(), Locale::PtBr.flag());
        for locale in Locale::ALL {
            assert!(LocaleFiles::get(&format!("{locale}.json")).is_some());
        }
    }

    #[test]
    fn test_toggle_parity() {
        let mut store = LanguageStore::new(catalog());
        for n in 1..=6 {
            store.toggle();
            let expected = if n % 2 == 0 {
                Locale::EnUs
            } else {
                Locale::PtBr
            };
            assert_eq!(store.locale(), expected, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_switches_headings_and_back() {
        let mut store = LanguageStore::new(catalog());
        let original = store.current_strings().clone();
        assert_eq!(original.about, "About");
        assert_eq!(original.experience_title, "Experience");

        store.toggle();
        let pt = store.current_strings();
        assert_eq!(pt.about, "Sobre");
        assert_eq!(pt.experience_title, "Experiência");
        assert_eq!(pt.projects_title, "Projetos");
        assert_eq!(pt.contact, "Contato");

        store.toggle();
        assert_eq!(store.current_strings(), &original);
    }

    #[test]
    fn test_confirmation_strings() {
        let catalog = catalog();
        assert_eq!(
            catalog.strings(Locale::EnUs).discord_copied,
            "Discord username copied to clipboard!"
        );
        assert_eq!(
            catalog.strings(Locale::PtBr).discord_copied,
            "Nome de usuário do Discord copiado!"
        );
    }

    #[test]
    fn test_missing_locale_fails_load() {
        let res = Catalog::load_with(|locale| match locale {
            Locale::EnUs => LocaleFiles::get("en-US.json")
                .map(|f| String::from_utf8_lossy(&f.data).into_owned()),
            Locale::PtBr => None,
        });
        assert_eq!(res.unwrap_err(), LocaleError::MissingLocale("pt-BR"));
    }

    #[test]
    fn test_missing_field_fails_parse() {
        let res = Strings::from_json(Locale::EnUs, r#"{ "about": "About" }"#);
        match res {
            Err(LocaleError::Parse { locale, reason }) => {
                assert_eq!(locale, "en-US");
                assert!(reason.contains("missing field"), "{reason}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_field_fails_validation() {
        let base = LocaleFiles::get("en-US.json").expect("en-US table should be embedded");
        let mut value: serde_json::Value =
            serde_json::from_slice(&base.data).expect("en-US table should be valid json");
        value["role"] = serde_json::Value::String("  ".to_string());
        let res = Strings::from_json(Locale::EnUs, &value.to_string());
        assert_eq!(
            res.unwrap_err(),
            LocaleError::EmptyField {
                locale: "en-US",
                field: "role",
            }
        );
    }
}
