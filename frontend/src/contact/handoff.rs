use log::{info, warn};
use urlencoding::encode;

use crate::contact::controller::ContactFormInput;
use crate::content::Brand;
use crate::locale::Locale;

/// What happens to a contact request once every field is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionMode {
    /// No backend to receive submissions: acknowledge and point to booking.
    #[default]
    Demo,
    /// Open the visitor's mail client with a pre-filled draft.
    EmailHandoff,
}

impl SubmissionMode {
    pub fn from_build_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("email") => SubmissionMode::EmailHandoff,
            _ => SubmissionMode::Demo,
        }
    }

    pub fn handoff(self, input: &ContactFormInput, brand: &Brand, locale: Locale) -> Handoff {
        match self {
            SubmissionMode::EmailHandoff => Handoff::Mailto(mailto_href(input, brand, locale)),
            SubmissionMode::Demo => Handoff::Notice(demo_notice(locale).to_string()),
        }
    }
}

/// The single side effect a successful submission produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    Mailto(String),
    Notice(String),
}

pub fn mail_subject(brand: &Brand, locale: Locale) -> String {
    format!("{} {}", brand.name, locale.t("문의", "inquiry"))
}

pub fn mail_body(input: &ContactFormInput, locale: Locale) -> String {
    format!(
        "{}: {}\n{}: {}\n\n{}",
        locale.t("이름", "Name"),
        input.name,
        locale.t("이메일", "Email"),
        input.email,
        input.message
    )
}

pub fn mailto_href(input: &ContactFormInput, brand: &Brand, locale: Locale) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        brand.email,
        encode(&mail_subject(brand, locale)),
        encode(&mail_body(input, locale))
    )
}

pub fn demo_notice(locale: Locale) -> &'static str {
    locale.t(
        "데모 폼입니다. ‘바로 시작하기’로 예약/상담을 진행해 주세요.",
        "This is a demo form. Please use “Get started” to book a lesson or consultation.",
    )
}

/// Carries out a handoff in the browser. Fire and forget: nothing reports back
/// whether a mail was actually sent.
pub fn perform(handoff: &Handoff) {
    let Some(window) = web_sys::window() else {
        warn!("No window available, dropping contact handoff");
        return;
    };
    match handoff {
        Handoff::Mailto(href) => {
            info!("Handing contact request to the mail client");
            if let Err(e) = window.location().set_href(href) {
                warn!("Failed to open mail client: {:?}", e);
            }
        }
        Handoff::Notice(text) => {
            info!("Showing demo acknowledgement");
            if let Err(e) = window.alert_with_message(text) {
                warn!("Failed to show acknowledgement: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> Brand {
        Brand {
            name: "KickstartKorean".to_string(),
            email: "kickstartkorean@gmail.com".to_string(),
            ..Brand::default()
        }
    }

    fn input() -> ContactFormInput {
        ContactFormInput {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Looking for TOPIK prep".to_string(),
        }
    }

    #[test]
    fn build_flag_selects_mode() {
        assert_eq!(SubmissionMode::from_build_flag(None), SubmissionMode::Demo);
        assert_eq!(SubmissionMode::from_build_flag(Some("demo")), SubmissionMode::Demo);
        assert_eq!(SubmissionMode::from_build_flag(Some("bogus")), SubmissionMode::Demo);
        assert_eq!(
            SubmissionMode::from_build_flag(Some(" Email ")),
            SubmissionMode::EmailHandoff
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let href = mailto_href(&input(), &brand(), Locale::En);
        assert_eq!(
            href,
            "mailto:kickstartkorean@gmail.com?subject=KickstartKorean%20inquiry\
             &body=Name%3A%20Jane%0AEmail%3A%20jane%40example.com%0A%0ALooking%20for%20TOPIK%20prep"
        );
    }

    #[test]
    fn korean_subject_is_percent_encoded() {
        let href = mailto_href(&input(), &brand(), Locale::Ko);
        assert!(href.starts_with("mailto:kickstartkorean@gmail.com?subject=KickstartKorean%20%EB%AC%B8%EC%9D%98&body="));
        assert!(!href.contains(' '));
        assert!(!href.contains('\n'));
    }

    #[test]
    fn body_joins_fields_with_newlines() {
        let body = mail_body(&input(), Locale::En);
        assert_eq!(body, "Name: Jane\nEmail: jane@example.com\n\nLooking for TOPIK prep");
    }

    #[test]
    fn demo_mode_only_produces_a_notice() {
        let handoff = SubmissionMode::Demo.handoff(&input(), &brand(), Locale::Ko);
        assert_eq!(handoff, Handoff::Notice(demo_notice(Locale::Ko).to_string()));
    }
}
