use std::rc::Rc;

use yew::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::config::{HERO_CARD_DURATION, REVEAL_DURATION};
use crate::contact::form::ContactForm;
use crate::content::SiteContent;
use crate::locale::use_locale;
use crate::reveal::component::{HeroReveal, RevealItem, RevealSection};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteContent>,
}

/// The whole page. Every variant of the site is this template fed with a
/// different `SiteContent`.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let l = use_locale().locale;
    let site = &props.site;
    let brand = &site.brand;
    let hero = &site.hero;

    html! {
        <div class="landing">
            <style>{ STYLES }</style>
            <a class="skip-link" href="#main">{ site.nav.skip.get(l) }</a>
            <Header brand={brand.clone()} nav={site.nav.clone()} />

            <main id="main">
                <section class="hero">
                    <div class="container hero-grid">
                        <HeroReveal duration_ms={REVEAL_DURATION.as_millis() as u64}>
                            <div class="badges">
                                { for hero.badges.iter().enumerate().map(|(i, b)| html! {
                                    <span class={classes!("badge", (i == 0).then_some("badge-solid"))}>
                                        { b.get(l) }
                                    </span>
                                }) }
                            </div>
                            <h1>
                                { hero.title_lead.get(l) }{ " " }
                                <span class="accent">{ hero.title_accent.get(l) }</span>
                            </h1>
                            <p class="lead">{ hero.lead.get(l) }</p>
                            <div class="cta-row">
                                <a class="btn btn-primary btn-lg" href="#booking">{ hero.primary_cta.get(l) }{ " →" }</a>
                                <a class="btn btn-outline btn-lg" href="#curriculum">{ hero.secondary_cta.get(l) }</a>
                            </div>
                            <div class="stats">
                                { for hero.stats.iter().map(|s| html! {
                                    <div class="stat">
                                        <div class="stat-value">{ s.value.get(l) }</div>
                                        <div class="stat-label">{ s.label.get(l) }</div>
                                    </div>
                                }) }
                            </div>
                            <p class="rating">{ "★ " }{ hero.rating_note.get(l) }</p>
                        </HeroReveal>

                        <HeroReveal duration_ms={HERO_CARD_DURATION.as_millis() as u64} class="card profile-card">
                            <div class="profile-head">
                                <strong>{ brand.tutor.get(l) }</strong>
                                <span class="price">{ format!("{} {}", brand.price, brand.period.get(l)) }</span>
                            </div>
                            <div class="badges">
                                { for hero.card_badges.iter().map(|b| html! {
                                    <span class="badge">{ b.get(l) }</span>
                                }) }
                            </div>
                            <img class="profile-photo" src={brand.profile_src.clone()}
                                alt={brand.profile_alt.get(l).to_string()} width="1280" height="960" />
                            <div class="mini-grid">
                                { for hero.card_items.iter().map(|it| html! {
                                    <div class="mini">
                                        <strong>{ it.title.get(l) }</strong>
                                        <p>{ it.desc.get(l) }</p>
                                    </div>
                                }) }
                            </div>
                        </HeroReveal>
                    </div>
                </section>

                <RevealSection id="features" class="band" stagger={1 + site.features.items.len()}>
                    <div class="container">
                        <RevealItem index={0} class="section-head">
                            <h2>{ site.features.title.get(l) }</h2>
                            <p>{ site.features.subtitle.get(l) }</p>
                        </RevealItem>
                        <div class="grid grid-4">
                            { for site.features.items.iter().enumerate().map(|(i, f)| html! {
                                <RevealItem index={i + 1} class="card">
                                    <h3>{ f.title.get(l) }</h3>
                                    <p>{ f.desc.get(l) }</p>
                                </RevealItem>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection id="pricing" class="band band-white" stagger={1 + site.pricing.plans.len()}>
                    <div class="container">
                        <RevealItem index={0} class="section-head">
                            <h2>{ site.pricing.title.get(l) }</h2>
                            <p>{ site.pricing.subtitle.get(l) }</p>
                        </RevealItem>
                        <div class="grid grid-3">
                            { for site.pricing.plans.iter().enumerate().map(|(i, p)| html! {
                                <RevealItem index={i + 1} class={classes!("card", "plan", p.highlight.then_some("plan-highlight"))}>
                                    <div class="plan-head">
                                        <h3>{ p.name.get(l) }</h3>
                                        if p.highlight {
                                            <span class="badge badge-solid">{ site.pricing.recommended.get(l) }</span>
                                        }
                                    </div>
                                    <div class="plan-price">
                                        <strong>{ p.price(brand, l) }</strong>
                                        <span>{ p.period(brand, l) }</span>
                                    </div>
                                    <ul class="checks">
                                        { for p.bullets.iter().map(|b| html! { <li>{ b.get(l) }</li> }) }
                                    </ul>
                                    <a class={classes!("btn", "btn-block", if p.highlight { "btn-primary" } else { "btn-dark" })} href="#booking">
                                        { if p.highlight { site.pricing.highlight_cta.get(l) } else { site.pricing.plan_cta.get(l) } }
                                    </a>
                                </RevealItem>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection id="curriculum" class="band" stagger={1 + site.curriculum.steps.len()}>
                    <div class="container">
                        <RevealItem index={0} class="section-head">
                            <h2>{ site.curriculum.title.get(l) }</h2>
                            <p>{ site.curriculum.subtitle.get(l) }</p>
                        </RevealItem>
                        <div class="grid grid-3">
                            { for site.curriculum.steps.iter().enumerate().map(|(i, s)| html! {
                                <RevealItem index={i + 1} class="card step">
                                    <span class="step-no">{ &s.step }</span>
                                    <h3>{ s.title.get(l) }</h3>
                                    <p>{ s.desc.get(l) }</p>
                                </RevealItem>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection id="reviews" class="band band-white" stagger={1 + site.reviews.items.len()}>
                    <div class="container">
                        <RevealItem index={0} class="section-head">
                            <h2>{ site.reviews.title.get(l) }</h2>
                            <p>{ site.reviews.subtitle.get(l) }</p>
                        </RevealItem>
                        <div class="grid grid-3">
                            { for site.reviews.items.iter().enumerate().map(|(i, r)| html! {
                                <RevealItem index={i + 1} class="card review">
                                    <div class="stars" aria-hidden="true">{ "★★★★★" }</div>
                                    <p>{ format!("“{}”", r.quote.get(l)) }</p>
                                    <span class="who">{ r.who.get(l) }</span>
                                </RevealItem>
                            }) }
                        </div>
                    </div>
                </RevealSection>

                <RevealSection id="booking" class="band band-muted" stagger={2}>
                    <div class="container booking-grid">
                        <RevealItem index={0}>
                            <h2>{ site.booking.title.get(l) }</h2>
                            <p>{ site.booking.subtitle.get(l) }</p>
                            <div class="booking-links">
                                <a class="btn btn-primary btn-block" href={brand.preply.clone()}
                                    target="_blank" rel="noopener noreferrer">
                                    { site.booking.preply_cta.get(l) }
                                </a>
                                <a class="btn btn-outline btn-block" href={brand.calendar.clone()}
                                    target="_blank" rel="noopener noreferrer">
                                    { site.booking.calendar_cta.get(l) }
                                </a>
                            </div>
                            <ul class="checks">
                                { for site.booking.notes.iter().map(|n| html! { <li>{ n.get(l) }</li> }) }
                                <li>{ format!("{}: {} {}", site.booking.price_label.get(l), brand.price, brand.period.get(l)) }</li>
                            </ul>
                        </RevealItem>
                        <RevealItem index={1} id="contact" class="card">
                            <h3>{ site.contact.title.get(l) }</h3>
                            <ContactForm copy={site.contact.clone()} brand={brand.clone()} />
                        </RevealItem>
                    </div>
                </RevealSection>
            </main>

            <Footer brand={brand.clone()} copy={site.footer.clone()} />
        </div>
    }
}

const STYLES: &str = r#"
    .landing {
        min-height: 100vh;
        color: #0f172a;
        background:
            radial-gradient(1200px circle at 18% 6%, rgba(59,130,246,0.20), transparent 55%),
            radial-gradient(900px circle at 85% 20%, rgba(14,165,233,0.16), transparent 50%),
            linear-gradient(to bottom, #ffffff, #f4f9ff);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Noto Sans KR", sans-serif;
    }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .skip-link { position: absolute; left: -9999px; }
    .skip-link:focus { left: 1rem; top: 1rem; z-index: 50; background: #fff; padding: 0.5rem 0.75rem; border-radius: 6px; }

    .top-nav {
        position: sticky; top: 0; z-index: 40;
        background: rgba(255,255,255,0.75);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(226,232,240,0.7);
    }
    .nav-content { max-width: 72rem; margin: 0 auto; padding: 0.75rem 1rem; display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
    .nav-logo { display: flex; align-items: center; gap: 0.75rem; color: inherit; text-decoration: none; }
    .nav-brand { display: flex; flex-direction: column; line-height: 1.2; }
    .nav-brand small { color: #64748b; font-size: 0.75rem; }
    .nav-right { display: flex; gap: 1.75rem; font-size: 0.875rem; }
    .nav-link { color: #475569; text-decoration: none; }
    .nav-link:hover { color: #0f172a; }
    .nav-actions { display: flex; align-items: center; gap: 0.5rem; }
    .locale-toggle { border: 1px solid #bfdbfe; background: #fff; color: #1e40af; border-radius: 1rem; padding: 0.35rem 0.75rem; cursor: pointer; }
    .burger-menu { display: none; background: none; border: 0; cursor: pointer; }
    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: #0f172a; }

    .btn { display: inline-flex; align-items: center; justify-content: center; border-radius: 1rem; padding: 0.55rem 1rem; font-weight: 600; text-decoration: none; border: 1px solid transparent; cursor: pointer; font-size: 0.9rem; }
    .btn-lg { padding: 0.75rem 1.4rem; }
    .btn-block { width: 100%; }
    .btn-primary { background: #1d4ed8; color: #fff; }
    .btn-primary:hover { background: #1e40af; }
    .btn-outline { background: #fff; color: #1e40af; border-color: #bfdbfe; }
    .btn-outline:hover { background: #eff6ff; }
    .btn-dark { background: #0f172a; color: #fff; }

    .hero { padding: 3.5rem 0; }
    .hero-grid { display: grid; grid-template-columns: 1.05fr 0.95fr; gap: 2.5rem; align-items: center; }
    .hero h1 { font-size: 3rem; font-weight: 800; line-height: 1.15; margin: 1.25rem 0 0; }
    .accent { background: linear-gradient(90deg, #172554, #1d4ed8, #0ea5e9); -webkit-background-clip: text; background-clip: text; color: transparent; }
    .lead { font-size: 1.125rem; line-height: 1.75; color: #475569; max-width: 36rem; }
    .cta-row { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1.5rem; }
    .stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-top: 1.75rem; max-width: 28rem; }
    .stat { border: 1px solid #dbeafe; background: rgba(255,255,255,0.7); border-radius: 1rem; padding: 0.75rem 1rem; }
    .stat-value { font-weight: 700; font-size: 1.25rem; }
    .stat-label { color: #64748b; font-size: 0.75rem; }
    .rating { color: #475569; font-size: 0.875rem; margin-top: 1.25rem; }
    .badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .badge { display: inline-flex; align-items: center; border-radius: 0.75rem; padding: 0.2rem 0.6rem; font-size: 0.75rem; background: #eff6ff; color: #1e40af; }
    .badge-solid { background: #1d4ed8; color: #fff; }

    .card { border: 1px solid #e2e8f0; border-radius: 1.25rem; background: rgba(255,255,255,0.85); padding: 1.5rem; }
    .profile-card { border-radius: 1.5rem; box-shadow: 0 10px 30px rgba(15,23,42,0.08); }
    .profile-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
    .profile-photo { width: 100%; height: auto; border-radius: 1rem; margin: 1rem 0; object-fit: cover; }
    .mini-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
    .mini { border: 1px solid #e2e8f0; border-radius: 1rem; padding: 0.75rem 1rem; font-size: 0.875rem; }
    .mini p { margin: 0.25rem 0 0; color: #64748b; }
    .price { font-weight: 600; color: #1e40af; }

    .band { padding: 3.5rem 0; }
    .band-white { background: #fff; border-top: 1px solid #e2e8f0; border-bottom: 1px solid #e2e8f0; }
    .band-muted { background: rgba(248,250,252,0.6); border-top: 1px solid #e2e8f0; }
    .section-head { text-align: center; margin-bottom: 2.25rem; }
    .section-head h2, .booking-grid h2 { font-size: 2rem; font-weight: 700; margin: 0; }
    .section-head p { color: #475569; margin-top: 0.5rem; }
    .grid { display: grid; gap: 1.25rem; }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .plan-head { display: flex; justify-content: space-between; align-items: center; }
    .plan-highlight { border-color: #93c5fd; box-shadow: 0 0 0 1px #dbeafe; }
    .plan-price strong { font-size: 2rem; }
    .plan-price span { color: #64748b; margin-left: 0.25rem; }
    .checks { list-style: none; padding: 0; margin: 1rem 0; font-size: 0.875rem; }
    .checks li::before { content: "✓ "; color: #1d4ed8; }
    .step { background: rgba(239,246,255,0.3); border-color: #dbeafe; }
    .step-no { font-weight: 700; color: #1d4ed8; }
    .stars { color: #f59e0b; }
    .who { color: #64748b; font-size: 0.8rem; }

    .booking-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; align-items: start; }
    .booking-links { display: grid; gap: 0.75rem; margin-top: 1.25rem; }
    .contact-form { display: grid; gap: 1rem; }
    .field { display: grid; gap: 0.35rem; }
    .field label { font-size: 0.875rem; font-weight: 600; }
    .field input, .field textarea { border: 1px solid #cbd5e1; border-radius: 0.75rem; padding: 0.6rem 0.8rem; font: inherit; }
    .field [aria-invalid="true"] { border-color: #dc2626; }
    .field-error { color: #dc2626; font-size: 0.8rem; margin: 0; }
    .form-note { color: #64748b; font-size: 0.75rem; margin: 0; }

    .site-footer { border-top: 1px solid #e2e8f0; padding: 2.5rem 1rem; max-width: 72rem; margin: 0 auto; font-size: 0.875rem; color: #475569; }
    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
    .footer-grid ul { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
    .footer-grid a { color: inherit; }
    .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
    .footer-legal { margin-top: 2rem; font-size: 0.75rem; color: #94a3b8; }

    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0;
            background: #fff; padding: 1rem; border-bottom: 1px solid #e2e8f0;
        }
        .hide-mobile { display: none; }
        .hero-grid, .booking-grid, .footer-grid { grid-template-columns: 1fr; }
        .grid-4, .grid-3 { grid-template-columns: 1fr; }
        .hero h1 { font-size: 2.25rem; }
    }
"#;
