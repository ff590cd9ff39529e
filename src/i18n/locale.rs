use std::rc::Rc;

use log::{debug, info};
use web_sys::window;
use yew::prelude::*;

use super::language::Language;
use super::resolver;
use super::storage::{LocalStorage, PreferenceStorage};
use crate::config;

/// Active language; direction is always derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }
}

pub enum LocaleAction {
    Toggle,
    Set(String),
}

impl Reducible for Locale {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LocaleAction::Toggle => self.language.toggled(),
            LocaleAction::Set(code) => Language::from_code_or_default(&code),
        };
        if next == self.language {
            return self;
        }
        Rc::new(Locale::new(next))
    }
}

/// Cached preference, then the browser language, then English.
pub fn detect(storage: &dyn PreferenceStorage, navigator_language: Option<String>) -> Language {
    if let Some(lang) = storage.read().as_deref().and_then(Language::from_code) {
        debug!("Using cached language {}", lang.code());
        return lang;
    }
    if let Some(lang) = navigator_language.as_deref().and_then(Language::from_code) {
        debug!("Using navigator language {}", lang.code());
        return lang;
    }
    Language::default()
}

pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

// The only place that touches the document-level direction state.
fn apply_to_document(lang: Language) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("lang", lang.code());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let (add, remove) = if lang.is_rtl() { ("rtl", "ltr") } else { ("ltr", "rtl") };
        let _ = classes.add_1(add);
        let _ = classes.remove_1(remove);
    }
}

/// Handle shared through context; every section reads text through it.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    handle: UseReducerHandle<Locale>,
}

impl LocaleContext {
    pub fn language(&self) -> Language {
        self.handle.language()
    }

    pub fn is_rtl(&self) -> bool {
        self.handle.is_rtl()
    }

    pub fn toggle(&self) {
        self.handle.dispatch(LocaleAction::Toggle);
    }

    #[allow(dead_code)]
    pub fn set(&self, code: &str) {
        self.handle.dispatch(LocaleAction::Set(code.to_string()));
    }

    pub fn text(&self, key: &str) -> String {
        resolver::resolve_text(key, self.language())
    }

    pub fn text_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        resolver::resolve_text_with(key, self.language(), args)
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        resolver::resolve_list(key, self.language())
    }
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let locale = use_reducer(|| {
        let storage = LocalStorage::new(config::LANGUAGE_STORAGE_KEY);
        Locale::new(detect(&storage, navigator_language()))
    });

    {
        let language = locale.language();
        use_effect_with_deps(
            move |language| {
                info!("Language set to {}", language.code());
                apply_to_document(*language);
                LocalStorage::new(config::LANGUAGE_STORAGE_KEY).write(language.code());
                || ()
            },
            language,
        );
    }

    let context = LocaleContext { handle: locale };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            { props.children.clone() }
        </ContextProvider<LocaleContext>>
    }
}

#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("use_locale must be called inside LocaleProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::storage::testing::{DisabledStorage, MemoryStorage};

    fn apply(locale: Locale, action: LocaleAction) -> Locale {
        *Rc::new(locale).reduce(action)
    }

    #[test]
    fn toggle_twice_is_identity() {
        for lang in Language::ALL {
            let start = Locale::new(lang);
            let once = apply(start, LocaleAction::Toggle);
            assert_ne!(once.language(), start.language());
            assert_eq!(once.is_rtl(), once.language() == Language::Ar);
            let twice = apply(once, LocaleAction::Toggle);
            assert_eq!(twice, start);
            assert_eq!(twice.is_rtl(), start.is_rtl());
        }
    }

    #[test]
    fn set_unknown_code_falls_back_to_english() {
        let locale = apply(Locale::new(Language::Ar), LocaleAction::Set("fr".into()));
        assert_eq!(locale.language(), Language::En);
        assert!(!locale.is_rtl());
    }

    #[test]
    fn set_accepts_full_tags() {
        let locale = apply(Locale::new(Language::En), LocaleAction::Set("ar-SA".into()));
        assert!(locale.is_rtl());
    }

    #[test]
    fn cached_preference_wins() {
        let storage = MemoryStorage::with("ar");
        assert_eq!(detect(&storage, Some("en-US".into())), Language::Ar);
    }

    #[test]
    fn unrecognized_cache_falls_through_to_navigator() {
        let storage = MemoryStorage::with("xx");
        assert_eq!(detect(&storage, Some("ar-EG".into())), Language::Ar);
    }

    #[test]
    fn navigator_language_is_truncated() {
        let storage = MemoryStorage::default();
        assert_eq!(detect(&storage, Some("en-GB".into())), Language::En);
        assert_eq!(detect(&storage, Some("ar".into())), Language::Ar);
    }

    #[test]
    fn disabled_storage_still_detects() {
        assert_eq!(detect(&DisabledStorage, None), Language::En);
        assert_eq!(detect(&DisabledStorage, Some("ar-AE".into())), Language::Ar);
        assert_eq!(detect(&DisabledStorage, Some("ja-JP".into())).code().len(), 2);
    }
}
