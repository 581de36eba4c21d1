use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod content;
mod locale;
mod contact {
    pub mod controller;
    pub mod form;
    pub mod handoff;
    pub mod validate;
}
mod reveal {
    pub mod component;
    pub mod machine;
}
mod components {
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use locale::{Locale, LocaleContext};
use pages::landing::Landing;
use reveal::component::MotionPreference;

/// Mirrors the active locale into `<html lang>`.
fn set_document_lang(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("lang", locale.lang_tag()) {
                error!("Failed to set document language: {:?}", e);
            }
        }
        None => error!("No document element to set language on"),
    }
}

fn load_failure_text(locale: Locale) -> &'static str {
    locale.t(
        "페이지를 불러오는 중 문제가 발생했습니다.",
        "Something went wrong loading this page.",
    )
}

#[function_component]
fn App() -> Html {
    let site = use_state(|| SiteContent::bundled().map(Rc::new));
    let locale = use_state(Locale::default);
    // Sampled once; the page does not follow later changes to the setting.
    let motion = use_state(MotionPreference::sample);

    use_effect_with_deps(
        move |locale| {
            set_document_lang(*locale);
            || ()
        },
        *locale,
    );

    let toggle = {
        let locale = locale.clone();
        Callback::from(move |_: ()| {
            let next = locale.toggled();
            info!("Switching locale to {:?}", next);
            locale.set(next);
        })
    };

    let locale_ctx = LocaleContext {
        locale: *locale,
        toggle,
    };

    match &*site {
        Ok(site) => html! {
            <ContextProvider<MotionPreference> context={*motion}>
                <ContextProvider<LocaleContext> context={locale_ctx}>
                    <Landing site={site.clone()} />
                </ContextProvider<LocaleContext>>
            </ContextProvider<MotionPreference>>
        },
        Err(e) => {
            error!("Site content failed to load: {}", e);
            html! { <main><p>{ load_failure_text(*locale) }</p></main> }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
