use super::language::Language;
use log::{error, warn};
use once_cell::sync::Lazy;
use serde_json::Value;

static BUNDLED: Lazy<Dictionaries> = Lazy::new(|| {
    Dictionaries::from_json(
        include_str!("locales/en.json"),
        include_str!("locales/ar.json"),
    )
});

/// The two translation trees, English being the fallback for Arabic.
pub struct Dictionaries {
    en: Value,
    ar: Value,
}

impl Dictionaries {
    pub fn from_json(en: &str, ar: &str) -> Self {
        Self {
            en: parse(Language::En, en),
            ar: parse(Language::Ar, ar),
        }
    }

    fn tree(&self, lang: Language) -> &Value {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    fn find(&self, key: &str, lang: Language) -> Option<&Value> {
        let mut order = vec![lang];
        if lang != Language::default() {
            order.push(Language::default());
        }
        order.into_iter().find_map(|candidate| {
            lookup(self.tree(candidate), key).filter(|value| !is_blank(value))
        })
    }

    pub fn text(&self, key: &str, lang: Language) -> String {
        match self.find(key, lang) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                warn!("Translation '{}' is not a string", key);
                key.to_string()
            }
            None => {
                warn!("Missing translation '{}' ({})", key, lang.code());
                key.to_string()
            }
        }
    }

    pub fn list(&self, key: &str, lang: Language) -> Vec<String> {
        match self.find(key, lang) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Some(_) => {
                warn!("Translation '{}' is not a list", key);
                Vec::new()
            }
            None => {
                warn!("Missing translation list '{}' ({})", key, lang.code());
                Vec::new()
            }
        }
    }
}

fn parse(lang: Language, source: &str) -> Value {
    serde_json::from_str(source).unwrap_or_else(|e| {
        error!("Failed to parse {} dictionary: {}", lang.code(), e);
        Value::Object(Default::default())
    })
}

// Object members by name, array elements by numeric segment.
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Null => true,
        _ => false,
    }
}

pub fn resolve_text(key: &str, lang: Language) -> String {
    BUNDLED.text(key, lang)
}

pub fn resolve_list(key: &str, lang: Language) -> Vec<String> {
    BUNDLED.list(key, lang)
}

/// Like `resolve_text`, substituting `{{name}}` placeholders.
pub fn resolve_text_with(key: &str, lang: Language, args: &[(&str, &str)]) -> String {
    args.iter().fold(resolve_text(key, lang), |text, (name, value)| {
        text.replace(&format!("{{{{{}}}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Service;

    fn sample() -> Dictionaries {
        Dictionaries::from_json(
            r#"{
                "nav": { "home": "Home", "services": "Services" },
                "steps": ["One", "Two"],
                "cards": [{ "title": "First" }]
            }"#,
            r#"{
                "nav": { "home": "الرئيسية", "services": "" }
            }"#,
        )
    }

    fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (name, child) in map {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    leaf_paths(child, &path, out);
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    leaf_paths(child, &format!("{}.{}", prefix, i), out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn resolves_in_requested_language() {
        let dicts = sample();
        assert_eq!(dicts.text("nav.home", Language::En), "Home");
        assert_eq!(dicts.text("nav.home", Language::Ar), "الرئيسية");
    }

    #[test]
    fn missing_or_blank_arabic_falls_back_to_english() {
        let dicts = sample();
        assert_eq!(dicts.text("nav.services", Language::Ar), "Services");
        assert_eq!(dicts.list("steps", Language::Ar), vec!["One", "Two"]);
    }

    #[test]
    fn missing_everywhere_returns_key() {
        let dicts = sample();
        assert_eq!(dicts.text("nav.contact", Language::Ar), "nav.contact");
        assert!(dicts.list("nav.contact", Language::En).is_empty());
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let dicts = sample();
        assert_eq!(dicts.text("cards.0.title", Language::En), "First");
        assert_eq!(dicts.text("steps.1", Language::En), "Two");
        assert_eq!(dicts.text("steps.9", Language::En), "steps.9");
    }

    #[test]
    fn wrong_shape_does_not_panic() {
        let dicts = sample();
        assert_eq!(dicts.text("steps", Language::En), "steps");
        assert!(dicts.list("nav.home", Language::En).is_empty());
    }

    #[test]
    fn broken_dictionary_is_treated_as_empty() {
        let dicts = Dictionaries::from_json("{ not json", "{}");
        assert_eq!(dicts.text("nav.home", Language::En), "nav.home");
    }

    #[test]
    fn bundled_dictionaries_have_matching_keys() {
        let mut en = Vec::new();
        let mut ar = Vec::new();
        leaf_paths(&BUNDLED.en, "", &mut en);
        leaf_paths(&BUNDLED.ar, "", &mut ar);
        assert!(!en.is_empty());
        for key in &en {
            let value = lookup(&BUNDLED.ar, key);
            assert!(
                value.map_or(false, |v| !is_blank(v)),
                "missing Arabic translation for {}",
                key
            );
        }
        for key in &ar {
            assert!(lookup(&BUNDLED.en, key).is_some(), "Arabic-only key {}", key);
        }
    }

    #[test]
    fn every_service_namespace_resolves_in_both_languages() {
        for service in Service::ALL {
            for lang in Language::ALL {
                for field in ["title", "desc", "tagline", "description"] {
                    let key = service.key(field);
                    let text = resolve_text(&key, lang);
                    assert!(!text.is_empty() && text != key, "{} ({})", key, lang.code());
                }
                for field in ["features", "process"] {
                    assert!(!resolve_list(&service.key(field), lang).is_empty());
                }
                for i in 0..service.benefit_icons().len() {
                    let key = service.key(&format!("benefits.{}.title", i));
                    assert_ne!(resolve_text(&key, lang), key);
                }
            }
        }
    }

    fn assert_translated(key: &str) {
        for lang in Language::ALL {
            let value = lookup(BUNDLED.tree(lang), key);
            assert!(
                value.and_then(Value::as_str).map_or(false, |s| !s.trim().is_empty()),
                "{} has no {} text",
                key,
                lang.code()
            );
        }
    }

    #[test]
    fn literal_keys_in_components_are_translated() {
        let sources = [
            include_str!("../main.rs"),
            include_str!("../lead.rs"),
            include_str!("../components/logo.rs"),
            include_str!("../components/header.rs"),
            include_str!("../components/hero.rs"),
            include_str!("../components/services.rs"),
            include_str!("../components/service_modal.rs"),
            include_str!("../components/lead_form.rs"),
            include_str!("../components/footer.rs"),
        ];
        let pattern = regex::Regex::new(
            r#""((?:common|nav|hero|servicesSection|modal|form|footer)\.[A-Za-z0-9.]+)""#,
        )
        .unwrap();
        let keys: Vec<&str> = sources
            .iter()
            .flat_map(|source| pattern.captures_iter(source))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        assert!(keys.len() > 40, "only found {} keys", keys.len());
        for key in keys {
            assert_translated(key);
        }
    }

    #[test]
    fn indexed_component_keys_are_translated() {
        use crate::components::{footer, header, hero, lead_form};
        use crate::lead::FieldError;

        for error in FieldError::ALL {
            assert_translated(error.translation_key());
        }
        for (key, _) in header::NAV_LINKS {
            assert_translated(key);
        }
        for slide in 0..hero::SLIDE_COUNT {
            for field in hero::SLIDE_FIELDS {
                assert_translated(&hero::slide_key(slide, field));
            }
        }
        for stat in hero::STATS {
            assert_translated(&hero::stat_key(stat, "value"));
            assert_translated(&hero::stat_key(stat, "label"));
        }
        for (highlight, _) in lead_form::HIGHLIGHTS {
            assert_translated(&lead_form::highlight_key(highlight, "title"));
            assert_translated(&lead_form::highlight_key(highlight, "desc"));
        }
        for i in 0..footer::TIMELINE_ENTRIES {
            assert_translated(&footer::entry_key("timeline", i, "year"));
            assert_translated(&footer::entry_key("timeline", i, "text"));
        }
        for i in 0..footer::VALUES.len() {
            assert_translated(&footer::entry_key("values", i, "title"));
            assert_translated(&footer::entry_key("values", i, "desc"));
        }
        for i in 0..footer::BRANCHES {
            assert_translated(&footer::entry_key("branches", i, "country"));
            assert_translated(&footer::entry_key("branches", i, "city"));
        }
    }

    #[test]
    fn unknown_key_is_not_translated() {
        let result = std::panic::catch_unwind(|| assert_translated("form.errors.emailInvalud"));
        assert!(result.is_err());
    }

    #[test]
    fn placeholders_are_substituted() {
        let line = resolve_text_with("footer.copyright", Language::En, &[("year", "2026")]);
        assert!(line.contains("2026"));
        assert!(!line.contains("{{"));
    }
}
