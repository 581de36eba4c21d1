use yew::prelude::*;

use crate::content::{Brand, Nav};
use crate::locale::use_locale;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub nav: Nav,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let locale = use_locale();
    let menu_open = use_state(|| false);
    let l = locale.locale;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_locale = {
        let toggle = locale.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let Brand { name, since, logo_src, logo_alt, .. } = &props.brand;
    let nav = &props.nav;

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a class="nav-logo" href="#main">
                    <img src={logo_src.clone()} alt={logo_alt.clone()} width="36" height="36" />
                    <span class="nav-brand">
                        <strong>{ name }</strong>
                        <small>{ since }</small>
                    </span>
                </a>

                <button class="burger-menu" aria-label={l.t("메뉴", "Menu").to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}
                    aria-label={nav.label.get(l).to_string()}>
                    { for nav.links.iter().map(|link| html! {
                        <a class="nav-link" href={link.href.clone()} onclick={close_menu.clone()}>
                            { link.label.get(l) }
                        </a>
                    }) }
                </nav>

                <div class="nav-actions">
                    <button class="locale-toggle" lang={l.toggled().lang_tag()} onclick={toggle_locale}>
                        { l.switch_label() }
                    </button>
                    <a class="btn btn-outline hide-mobile" href="#contact">{ nav.diagnose_cta.get(l) }</a>
                    <a class="btn btn-primary" href="#booking">{ nav.start_cta.get(l) }{ " →" }</a>
                </div>
            </div>
        </header>
    }
}
