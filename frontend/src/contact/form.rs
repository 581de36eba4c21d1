use log::warn;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::controller::{ContactFormInput, FormController, SubmitOutcome};
use crate::contact::handoff::{self, SubmissionMode};
use crate::contact::validate::Field;
use crate::content::{Brand, ContactCopy};
use crate::locale::use_locale;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub copy: ContactCopy,
    pub brand: Brand,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let locale = use_locale();
    let controller = use_state(|| FormController::new(config::submission_mode()));
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let controller = controller.clone();
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        let refs = (name_ref.clone(), email_ref.clone(), message_ref.clone());
        let brand = props.brand.clone();
        let locale = locale.locale;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = ContactFormInput::new(&name, &email, &message);
            let mut next = (*controller).clone();
            let outcome = next.submit(&input, &brand, locale);
            controller.set(next);

            match outcome {
                SubmitOutcome::Rejected(err) => {
                    let node = match err.field() {
                        Field::Name => &refs.0,
                        Field::Email => &refs.1,
                        Field::Message => &refs.2,
                    };
                    if let Some(el) = node.cast::<HtmlElement>() {
                        if let Err(e) = el.focus() {
                            warn!("Could not focus {} field: {:?}", err.field().control_name(), e);
                        }
                    }
                }
                SubmitOutcome::Accepted(handoff) => handoff::perform(&handoff),
            }
        })
    };

    let error_for = |field: Field| -> Html {
        match controller.error(field) {
            Some(err) => html! {
                // Keyed per attempt so a repeated failure re-creates the alert node.
                <p key={format!("{}-{}", field.control_name(), controller.attempts())}
                    id={format!("contact-{}-error", field.control_name())}
                    class="field-error"
                    role={(controller.reported() == Some(field)).then_some("alert")}>
                    { err.message(locale.locale) }
                </p>
            },
            None => html! {},
        }
    };
    let invalid = |field: Field| -> Option<&'static str> {
        controller.error(field).map(|_| "true")
    };
    let described_by = |field: Field| -> Option<String> {
        controller
            .error(field)
            .map(|_| format!("contact-{}-error", field.control_name()))
    };

    let copy = &props.copy;
    let l = locale.locale;
    let demo = controller.mode() == SubmissionMode::Demo;

    html! {
        <form class="contact-form" novalidate={true} onsubmit={onsubmit}>
            <div class="field">
                <label for="contact-name">{ copy.name_label.get(l) }</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    required={true}
                    ref={name_ref}
                    placeholder={copy.name_placeholder.get(l).to_string()}
                    value={(*name).clone()}
                    aria-invalid={invalid(Field::Name)}
                    aria-describedby={described_by(Field::Name)}
                    oninput={
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        })
                    }
                />
                { error_for(Field::Name) }
            </div>
            <div class="field">
                <label for="contact-email">{ copy.email_label.get(l) }</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    inputmode="email"
                    required={true}
                    ref={email_ref}
                    placeholder={copy.email_placeholder.get(l).to_string()}
                    value={(*email).clone()}
                    aria-invalid={invalid(Field::Email)}
                    aria-describedby={described_by(Field::Email)}
                    oninput={
                        let email = email.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        })
                    }
                />
                { error_for(Field::Email) }
            </div>
            <div class="field">
                <label for="contact-message">{ copy.message_label.get(l) }</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    required={true}
                    ref={message_ref}
                    placeholder={copy.message_placeholder.get(l).to_string()}
                    value={(*message).clone()}
                    aria-invalid={invalid(Field::Message)}
                    aria-describedby={described_by(Field::Message)}
                    oninput={
                        let message = message.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(input.value());
                        })
                    }
                />
                { error_for(Field::Message) }
            </div>
            <button type="submit" class="btn btn-primary btn-block">
                { copy.submit.get(l) }
                if demo {
                    <>{ " " }{ copy.demo_suffix.get(l) }</>
                }
            </button>
            if demo {
                <p class="form-note">{ copy.demo_note.get(l) }</p>
            }
        </form>
    }
}
