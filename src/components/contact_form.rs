//! Contact Section Component
//!
//! Contact form with per-field validation. Fields validate on blur, and a
//! field that already shows an error re-validates on every keystroke.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::NotifyKind;
use crate::submit::{outcome_notification, ContactSubmission, FetchChannel, SubmissionChannel};
use crate::validation::{
    ContactRules, ValidationResult, CONTACT_FIELDS, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, FIELD_PHONE,
    FIELD_SUBJECT, MESSAGE_MAX_LENGTH,
};

/// (value, label); the empty value is the unselected placeholder
const SUBJECTS: &[(&str, &str)] = &[
    ("", "Select a subject"),
    ("general", "General Inquiry"),
    ("catering", "Catering"),
    ("feedback", "Feedback"),
    ("careers", "Careers"),
];

const INVALID_FORM_MESSAGE: &str = "Please correct the errors in the form";

/// Form state shared by the field components
#[derive(Clone, Copy)]
struct ContactForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
    errors: RwSignal<ValidationResult>,
    sending: RwSignal<bool>,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            errors: RwSignal::new(ValidationResult::default()),
            sending: RwSignal::new(false),
        }
    }

    /// Value signal of a contact field; `None` for a name outside `CONTACT_FIELDS`
    fn value(&self, field: &str) -> Option<RwSignal<String>> {
        match field {
            FIELD_NAME => Some(self.name),
            FIELD_EMAIL => Some(self.email),
            FIELD_PHONE => Some(self.phone),
            FIELD_SUBJECT => Some(self.subject),
            FIELD_MESSAGE => Some(self.message),
            _ => None,
        }
    }

    fn snapshot(&self) -> Vec<(&'static str, String)> {
        CONTACT_FIELDS
            .iter()
            .filter_map(|&field| self.value(field).map(|value| (field, value.get_untracked())))
            .collect()
    }

    fn validate_one(&self, field: &str) {
        let Some(value) = self.value(field) else {
            log::error!("[CONTACT] No form field named '{}'", field);
            return;
        };
        let error = ContactRules::get().validate_field(field, &value.get_untracked());
        self.errors.update(|e| e.set_field(field, error));
    }

    fn has_error(&self, field: &str) -> bool {
        self.errors.with_untracked(|e| e.error(field).is_some())
    }

    fn reset(&self) {
        for value in CONTACT_FIELDS.iter().filter_map(|field| self.value(field)) {
            value.set(String::new());
        }
        self.errors.set(ValidationResult::default());
    }
}

/// Lines kept in the console history dump after a failed submission
const HISTORY_DUMP_LINES: usize = 20;

/// Replay the last log lines into the console as one block so a failed
/// submission can be reported with its context
fn log_recent_history() {
    let lines = console_logger::recent_lines();
    let tail = &lines[lines.len().saturating_sub(HISTORY_DUMP_LINES)..];
    if !tail.is_empty() {
        web_sys::console::group_collapsed_1(&"[CONTACT] Recent log".into());
        for line in tail {
            web_sys::console::log_1(&line.as_str().into());
        }
        web_sys::console::group_end();
    }
}

fn field_id(field: &str) -> String {
    format!("contact-{}", field)
}

fn focus_field(field: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&field_id(field)))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

/// Error line under a field; empty when the field is valid
#[component]
fn FieldError(form: ContactForm, field: &'static str) -> impl IntoView {
    view! {
        <span class="field-error" id=format!("{}-error", field_id(field))>
            {move || form.errors.with(|e| e.error(field).unwrap_or_default().to_string())}
        </span>
    }
}

/// Single-line input bound to one form field
#[component]
fn InputField(
    form: ContactForm,
    field: &'static str,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = form.value(field).unwrap_or_else(|| {
        log::error!("[CONTACT] Input bound to unknown field '{}'", field);
        RwSignal::new(String::new())
    });

    view! {
        <div class="form-group" class:error=move || form.errors.with(|e| e.error(field).is_some())>
            <label for=field_id(field)>{label}{required.then_some(" *")}</label>
            <input
                id=field_id(field)
                name=field
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if form.has_error(field) {
                        form.validate_one(field);
                    }
                }
                on:blur=move |_| form.validate_one(field)
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();
    let form = ContactForm::new();
    let endpoint = ctx.config().contact_endpoint;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.sending.get_untracked() {
            return;
        }

        let values = form.snapshot();
        let result = ContactRules::get().validate_form(values.iter().map(|(f, v)| (*f, v.as_str())));
        if let Some(first) = result.first_invalid(CONTACT_FIELDS) {
            log::debug!("[CONTACT] {} invalid fields", result.errors().len());
            form.errors.set(result);
            focus_field(first);
            ctx.notifier.show(INVALID_FORM_MESSAGE, NotifyKind::Warning);
            return;
        }
        form.errors.set(result);

        let get = |field: &str| {
            values
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, v)| v.as_str())
                .unwrap_or_default()
        };
        let submission = ContactSubmission::new(
            get(FIELD_NAME),
            get(FIELD_EMAIL),
            get(FIELD_PHONE),
            get(FIELD_SUBJECT),
            get(FIELD_MESSAGE),
        );

        form.sending.set(true);
        let channel = FetchChannel::new(endpoint.clone());
        spawn_local(async move {
            let outcome = channel.submit(&submission).await;
            match &outcome {
                Ok(_) => {
                    log::info!("[CONTACT] Message sent ({})", submission.subject);
                    form.reset();
                }
                Err(e) => {
                    log::error!("[CONTACT] Submission failed: {}", e);
                    log_recent_history();
                }
            }
            let (message, kind) = outcome_notification(&outcome);
            ctx.notifier.show(message, kind);
            form.sending.set(false);
        });
    };

    let message = form.message;
    let subject = form.subject;
    let message_count = move || message.with(|m| m.chars().count());

    view! {
        <section id="contact" class="contact-section reveal">
            <h2 class="section-title">"Get in Touch"</h2>
            <form class="contact-form" novalidate=true on:submit=on_submit>
                <InputField form=form field=FIELD_NAME label="Name" input_type="text" required=true />
                <InputField form=form field=FIELD_EMAIL label="Email" input_type="email" required=true />
                <InputField form=form field=FIELD_PHONE label="Phone" input_type="tel" />

                <div class="form-group" class:error=move || form.errors.with(|e| e.error(FIELD_SUBJECT).is_some())>
                    <label for=field_id(FIELD_SUBJECT)>"Subject *"</label>
                    <select
                        id=field_id(FIELD_SUBJECT)
                        name=FIELD_SUBJECT
                        prop:value=move || subject.get()
                        on:change=move |ev| {
                            subject.set(event_target_value(&ev));
                            form.validate_one(FIELD_SUBJECT);
                        }
                        on:blur=move |_| form.validate_one(FIELD_SUBJECT)
                    >
                        {SUBJECTS.iter().map(|&(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect_view()}
                    </select>
                    <FieldError form=form field=FIELD_SUBJECT />
                </div>

                <div class="form-group" class:error=move || form.errors.with(|e| e.error(FIELD_MESSAGE).is_some())>
                    <label for=field_id(FIELD_MESSAGE)>"Message *"</label>
                    <textarea
                        id=field_id(FIELD_MESSAGE)
                        name=FIELD_MESSAGE
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| {
                            message.set(event_target_value(&ev));
                            if form.has_error(FIELD_MESSAGE) {
                                form.validate_one(FIELD_MESSAGE);
                            }
                        }
                        on:blur=move |_| form.validate_one(FIELD_MESSAGE)
                    ></textarea>
                    <span
                        class="char-counter"
                        class:over-limit=move || { message_count() > MESSAGE_MAX_LENGTH }
                    >
                        {move || format!("{}/{}", message_count(), MESSAGE_MAX_LENGTH)}
                    </span>
                    <FieldError form=form field=FIELD_MESSAGE />
                </div>

                <button type="submit" class="submit-btn" disabled=move || form.sending.get()>
                    {move || if form.sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_contact_field_has_its_own_signal() {
        let form = ContactForm::new();
        for &field in CONTACT_FIELDS {
            form.value(field).expect("contact field signal").set(format!("{} value", field));
        }

        assert_eq!(form.name.get_untracked(), "name value");
        assert_eq!(form.email.get_untracked(), "email value");
        assert_eq!(form.phone.get_untracked(), "phone value");
        assert_eq!(form.subject.get_untracked(), "subject value");
        assert_eq!(form.message.get_untracked(), "message value");
    }

    #[test]
    fn test_unknown_field_has_no_signal() {
        let form = ContactForm::new();
        assert!(form.value("newsletter").is_none());
        assert!(form.value("Name").is_none());

        form.validate_one("newsletter");
        assert!(form.errors.get_untracked().is_valid());
        assert_eq!(form.name.get_untracked(), "");
    }

    #[test]
    fn test_snapshot_and_reset() {
        let form = ContactForm::new();
        form.email.set("ada@example.com".to_string());
        form.validate_one(FIELD_NAME);
        assert!(form.has_error(FIELD_NAME));

        let snapshot = form.snapshot();
        assert_eq!(snapshot.len(), CONTACT_FIELDS.len());
        assert_eq!(snapshot[1], (FIELD_EMAIL, "ada@example.com".to_string()));

        form.reset();
        assert_eq!(form.email.get_untracked(), "");
        assert!(!form.has_error(FIELD_NAME));
    }
}
