//! Marketing copy and brand settings for the page.
//!
//! Everything here is data: another tutor, price or translation is another
//! JSON file, the template in `pages::landing` stays the same.

use serde::Deserialize;

use crate::locale::Locale;

const BUNDLED: &str = include_str!("../content/site.json");

/// A Korean/English pair.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Text {
    pub ko: String,
    pub en: String,
}

impl Text {
    pub fn get(&self, locale: Locale) -> &str {
        locale.t(&self.ko, &self.en)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Brand {
    pub name: String,
    pub since: String,
    pub email: String,
    pub preply: String,
    pub calendar: String,
    pub price: String,
    pub period: Text,
    pub logo_src: String,
    pub logo_alt: String,
    pub profile_src: String,
    pub profile_alt: Text,
    pub tutor: Text,
    pub location: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub href: String,
    pub label: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Nav {
    pub label: Text,
    pub skip: Text,
    pub links: Vec<Link>,
    pub diagnose_cta: Text,
    pub start_cta: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: Text,
    pub value: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub title: Text,
    pub desc: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub badges: Vec<Text>,
    pub title_lead: Text,
    pub title_accent: Text,
    pub lead: Text,
    pub primary_cta: Text,
    pub secondary_cta: Text,
    pub stats: Vec<Stat>,
    pub rating_note: Text,
    pub card_badges: Vec<Text>,
    pub card_items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Features {
    pub title: Text,
    pub subtitle: Text,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: Text,
    /// Falls back to the brand price when absent.
    pub price: Option<Text>,
    pub period: Option<Text>,
    pub bullets: Vec<Text>,
    pub highlight: bool,
}

impl Plan {
    pub fn price<'a>(&'a self, brand: &'a Brand, locale: Locale) -> &'a str {
        self.price.as_ref().map_or(brand.price.as_str(), |p| p.get(locale))
    }

    pub fn period<'a>(&'a self, brand: &'a Brand, locale: Locale) -> &'a str {
        self.period.as_ref().unwrap_or(&brand.period).get(locale)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pricing {
    pub title: Text,
    pub subtitle: Text,
    pub recommended: Text,
    pub highlight_cta: Text,
    pub plan_cta: Text,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub step: String,
    pub title: Text,
    pub desc: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Curriculum {
    pub title: Text,
    pub subtitle: Text,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub quote: Text,
    pub who: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reviews {
    pub title: Text,
    pub subtitle: Text,
    pub items: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub title: Text,
    pub subtitle: Text,
    pub preply_cta: Text,
    pub calendar_cta: Text,
    pub notes: Vec<Text>,
    pub price_label: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCopy {
    pub title: Text,
    pub name_label: Text,
    pub name_placeholder: Text,
    pub email_label: Text,
    pub email_placeholder: Text,
    pub message_label: Text,
    pub message_placeholder: Text,
    pub submit: Text,
    pub demo_suffix: Text,
    pub demo_note: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub tagline: Text,
    pub links: Vec<Link>,
    pub rights: Text,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Nav,
    pub hero: Hero,
    pub features: Features,
    pub pricing: Pricing,
    pub curriculum: Curriculum,
    pub reviews: Reviews,
    pub booking: Booking,
    pub contact: ContactCopy,
    pub footer: Footer,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The content bundle compiled into this build.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bundled() -> SiteContent {
        SiteContent::bundled().expect("bundled content parses")
    }

    #[test]
    fn bundled_content_has_every_section() {
        let site = bundled();
        assert_eq!(site.brand.name, "KickstartKorean");
        assert_eq!(site.features.items.len(), 4);
        assert_eq!(site.pricing.plans.len(), 3);
        assert_eq!(site.curriculum.steps.len(), 3);
        assert_eq!(site.reviews.items.len(), 3);
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        let site = bundled();
        let highlighted: Vec<_> = site
            .pricing
            .plans
            .iter()
            .filter(|p| p.highlight)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(highlighted, vec!["standard"]);
    }

    #[test]
    fn plan_price_falls_back_to_brand() {
        let site = bundled();
        let trial = &site.pricing.plans[0];
        let intensive = &site.pricing.plans[2];
        assert_eq!(trial.price(&site.brand, Locale::Ko), "$39");
        assert_eq!(trial.period(&site.brand, Locale::En), "/ 50 min");
        assert_eq!(intensive.price(&site.brand, Locale::Ko), "문의");
        assert_eq!(intensive.period(&site.brand, Locale::En), "/ month");
    }

    #[test]
    fn nav_targets_are_in_page_anchors() {
        let site = bundled();
        let anchors = ["#features", "#pricing", "#curriculum", "#reviews", "#booking", "#contact"];
        for link in site.nav.links.iter().chain(&site.footer.links) {
            assert!(anchors.contains(&link.href.as_str()), "{}", link.href);
        }
    }

    #[test]
    fn text_follows_locale() {
        let site = bundled();
        assert_eq!(site.nav.start_cta.get(Locale::Ko), "바로 시작하기");
        assert_eq!(site.nav.start_cta.get(Locale::En), "Get started");
    }

    #[test]
    fn malformed_bundle_is_an_error() {
        assert!(SiteContent::from_json("{\"brand\": {}}").is_err());
    }
}
