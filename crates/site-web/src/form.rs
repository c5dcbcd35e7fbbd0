//! Contact form: live validation gating the submit button, field-level error
//! feedback, and the submit/success/failure state machine. Delivery is local;
//! the page never talks to a mail service from here.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::hooks;
use crate::scroll::ScrollAnimator;
use crate::validate;

const SUCCESS_SWAP_MS: i32 = 500;
const FAILURE_RESET_MS: i32 = 2000;

pub fn attach(document: &web::Document, animator: Rc<ScrollAnimator>) {
    let Some(form) = dom::by_id(document, hooks::CONTACT_FORM_ID) else {
        return;
    };
    let (Some(name), Some(email), Some(message)) = (
        dom::by_id(document, hooks::FIELD_NAME_ID),
        dom::by_id(document, hooks::FIELD_EMAIL_ID),
        dom::by_id(document, hooks::FIELD_MESSAGE_ID),
    ) else {
        log::warn!("contact form present but fields missing, skipping");
        return;
    };
    let Some(submit) = dom::query(document, hooks::SUBMIT_BTN) else {
        return;
    };

    let fields = [name.clone(), email.clone(), message.clone()];

    let check_validation = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submit = submit.clone();
        move || {
            let ready = validate::form_ready(
                &field_value(&name),
                &field_value(&email),
                &field_value(&message),
            );
            if ready {
                let _ = submit.remove_attribute("disabled");
                let _ = submit.class_list().add_1("active");
            } else {
                let _ = submit.set_attribute("disabled", "true");
                let _ = submit.class_list().remove_1("active");
            }
        }
    };

    for field in &fields {
        // Blur shows the error, focus clears it, input only re-gates the
        // button (flagging mid-word typing as an error reads as nagging).
        {
            let field_blur = field.clone();
            dom::listen(field, "blur", move || {
                let value = field_value(&field_blur);
                let valid = if field_blur.id() == hooks::FIELD_EMAIL_ID {
                    validate::email_looks_valid(&value)
                } else {
                    validate::required_filled(&value)
                };
                if valid {
                    let _ = field_blur.class_list().remove_1("error");
                } else {
                    let _ = field_blur.class_list().add_1("error");
                }
            });
        }
        {
            let field_focus = field.clone();
            dom::listen(field, "focus", move || {
                let _ = field_focus.class_list().remove_1("error");
            });
        }
        {
            let check_validation = check_validation.clone();
            dom::listen(field, "input", move || check_validation());
        }
    }
    check_validation(); // initial button state

    wire_submit(document, animator, form, submit, name, email, message);
}

fn wire_submit(
    document: &web::Document,
    animator: Rc<ScrollAnimator>,
    form: web::HtmlElement,
    submit: web::HtmlElement,
    name: web::HtmlElement,
    email: web::HtmlElement,
    message: web::HtmlElement,
) {
    let header = dom::query(document, hooks::CONTACT_HEADER);
    let success = dom::by_id(document, hooks::SUCCESS_MESSAGE_ID);
    let original_label = submit.text_content().unwrap_or_default();

    // Success path: the form fades, then 500ms later is swapped for the
    // success message and the scroll driver re-syncs to the new layout.
    let success_swap = {
        let form = form.clone();
        let header = header.clone();
        let document = document.clone();
        Rc::new(dom::OneShot::new(move || {
            dom::set_style(&form, "display", "none");
            if let Some(header) = &header {
                dom::set_style(header, "display", "none");
            }
            if let Some(success) = &success {
                let _ = success.class_list().add_1("visible");
            }
            animator.reconcile(&document);
            animator.kick();
        }))
    };

    let failure_reset = {
        let submit = submit.clone();
        Rc::new(dom::OneShot::new(move || {
            submit.set_text_content(Some(&original_label));
            dom::set_style(&submit, "opacity", "1");
            dom::set_style(&submit, "cursor", "pointer");
        }))
    };

    let form_fade = form.clone();
    dom::listen_event(&form, "submit", move |ev| {
        ev.prevent_default();

        // The button can be enabled stale (e.g. autofill raced the input
        // events), so the submit path validates again.
        let ready = validate::form_ready(
            &field_value(&name),
            &field_value(&email),
            &field_value(&message),
        );
        if !ready {
            submit.set_text_content(Some("Failed. Try again."));
            failure_reset.arm(FAILURE_RESET_MS);
            return;
        }

        submit.set_text_content(Some("Sending..."));
        dom::set_style(&submit, "opacity", "0.7");
        dom::set_style(&submit, "cursor", "wait");

        dom::set_style(&form_fade, "opacity", "0");
        if let Some(header) = &header {
            dom::set_style(header, "opacity", "0");
        }
        success_swap.arm(SUCCESS_SWAP_MS);
    });
}

/// Value of a text input or textarea, empty for anything else.
fn field_value(el: &web::HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
