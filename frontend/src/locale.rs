use yew::prelude::*;

/// Language the page is currently rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Picks the string for this locale. Deliberately uncached; callers
    /// re-resolve on every render.
    pub fn t<'a>(self, ko: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Ko => ko,
            Locale::En => en,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    /// Value for the document's `lang` attribute.
    pub fn lang_tag(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Label of the toggle button, i.e. the language you switch *to*.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Ko => "EN",
            Locale::En => "한국어",
        }
    }
}

/// Locale handed down from the page container.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub toggle: Callback<()>,
}

impl LocaleContext {
    pub fn t<'a>(&self, ko: &'a str, en: &'a str) -> &'a str {
        self.locale.t(ko, en)
    }
}

/// Reads the page locale, falling back to the default when rendered outside
/// a provider.
#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: Locale::default(),
        toggle: Callback::from(|_| ()),
    })
}
