use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{Brand, Footer as FooterCopy};
use crate::locale::use_locale;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub copy: FooterCopy,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let l = use_locale().locale;
    let brand = &props.brand;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <img src={brand.logo_src.clone()} alt={brand.logo_alt.clone()} width="36" height="36" />
                        <strong>{ &brand.name }</strong>
                    </div>
                    <p>{ props.copy.tagline.get(l) }</p>
                </div>
                <ul>
                    { for props.copy.links.iter().map(|link| html! {
                        <li><a href={link.href.clone()}>{ link.label.get(l) }</a></li>
                    }) }
                </ul>
                <ul>
                    <li>
                        { l.t("이메일: ", "Email: ") }
                        <a href={format!("mailto:{}", brand.email)}>{ &brand.email }</a>
                    </li>
                    <li>{ brand.location.get(l) }</li>
                </ul>
            </div>
            <p class="footer-legal">
                { format!("© {} {}. {}", year, brand.name, props.copy.rights.get(l)) }
            </p>
        </footer>
    }
}
