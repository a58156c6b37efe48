use std::rc::Rc;

use log::{error, info};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::reveal::{Entrance, Reveal};
use crate::components::layout::{Layout, PageHero};
use crate::content::{Office, BUDGETS, OFFICES, QUICK_CONTACT};
use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        }
    }
}

pub struct FieldChanged(pub ContactField, pub String);

impl Reducible for ContactForm {
    type Action = FieldChanged;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let FieldChanged(field, value) = action;
        if self.get(field) == value {
            return self;
        }
        let mut next = (*self).clone();
        *next.slot(field) = value;
        Rc::new(next)
    }
}

/// Submission has no backend yet; the form is only logged.
/// Logs the submitted form as JSON and returns the logged payload.
fn log_submission(form: &ContactForm) -> Option<String> {
    match serde_json::to_string(form) {
        Ok(json) => {
            info!("contact form submitted: {}", json);
            Some(json)
        }
        Err(e) => {
            error!("failed to serialize contact form: {}", e);
            None
        }
    }
}

fn office_card(office: &'static Office) -> Html {
    html! {
        <div class="office-card">
            <div>
                <h3>{Icon::MapPin.view("icon-sm")}{office.city}</h3>
                <p class="office-address">{office.address}</p>
                <p class="office-phone">{office.phone}</p>
                <p class="office-email">{office.email}</p>
            </div>
            <span class="office-arrow">{Icon::ArrowUpRight.view("icon-sm")}</span>
        </div>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_reducer(ContactForm::default);

    let on_text = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FieldChanged(field, input.value()));
        })
    };

    let on_budget = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FieldChanged(ContactField::Budget, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FieldChanged(ContactField::Message, area.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log_submission(&form);
        })
    };

    html! {
        <Layout>
            <style>
                {r#"
                    .contact-section { padding: 5rem 0; }
                    .contact-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 4rem; }
                    .contact-section h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 2rem; }
                    .contact-form { display: grid; gap: 1.5rem; }
                    .form-row { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    .form-field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .form-field input, .form-field select, .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        color: var(--fg);
                        font: inherit;
                        outline: none;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .form-field textarea { resize: none; }
                    .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                        border-color: var(--primary);
                        box-shadow: 0 0 0 1px var(--primary);
                    }
                    .contact-submit { width: 100%; border-radius: 0.75rem; }
                    .contact-submit:hover { transform: scale(1.02); }
                    .contact-submit:active { transform: scale(0.98); }
                    .contact-info { display: grid; gap: 3rem; }
                    .channel-list, .office-list { display: grid; gap: 1.5rem; }
                    .channel {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .channel-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: rgba(139, 92, 246, 0.1);
                        color: var(--primary);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .channel-label { font-size: 0.875rem; color: var(--muted); margin: 0; }
                    .channel-value { font-weight: 500; margin: 0; }
                    .office-card {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        cursor: pointer;
                        transition: border-color 0.3s ease, transform 0.2s ease;
                    }
                    .office-card:hover { border-color: rgba(139, 92, 246, 0.5); transform: translateX(8px); }
                    .office-card h3 {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    .office-card h3 .icon { color: var(--primary); }
                    .office-card p { margin: 0 0 0.25rem; }
                    .office-address { color: var(--muted); }
                    .office-phone { color: var(--muted); font-size: 0.875rem; }
                    .office-email { color: var(--primary); font-size: 0.875rem; }
                    .office-arrow { color: var(--muted); transition: color 0.3s ease; }
                    .office-card:hover .office-arrow { color: var(--primary); }
                    @media (max-width: 1024px) { .contact-grid { grid-template-columns: 1fr; } }
                    @media (max-width: 640px) { .form-row { grid-template-columns: 1fr; } }
                "#}
            </style>
            <PageHero
                eyebrow="Get in Touch"
                lead="Let's Create"
                highlight="Together"
                blurb="Have a project in mind? We'd love to hear from you. Let's discuss how we can bring your vision to life."
                blob_style="top: 33%; right: 25%; width: 500px; height: 500px; background: rgba(236, 72, 153, 0.2); animation-duration: 30s;"
            />

            <section class="contact-section noise">
                <div class="container contact-grid">
                    <Reveal entrance={Entrance::FromLeft(40)}>
                        <h2>{"Send Us a Message"}</h2>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="contact-name">{"Name *"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        required={true}
                                        placeholder="Your name"
                                        value={form.name.clone()}
                                        oninput={on_text(ContactField::Name)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="contact-email">{"Email *"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        required={true}
                                        placeholder="your@email.com"
                                        value={form.email.clone()}
                                        oninput={on_text(ContactField::Email)}
                                    />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label for="contact-company">{"Company"}</label>
                                    <input
                                        id="contact-company"
                                        type="text"
                                        placeholder="Your company"
                                        value={form.company.clone()}
                                        oninput={on_text(ContactField::Company)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="contact-budget">{"Budget Range"}</label>
                                    <select id="contact-budget" onchange={on_budget}>
                                        { for BUDGETS.iter().map(|(value, label)| html! {
                                            <option value={*value} selected={form.budget == *value}>{*label}</option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="contact-message">{"Project Details *"}</label>
                                <textarea
                                    id="contact-message"
                                    required={true}
                                    rows="6"
                                    placeholder="Tell us about your project, goals, and timeline..."
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                            </div>

                            <button type="submit" class="gradient-button contact-submit">
                                {"Send Message"}
                                {Icon::Send.view("icon-sm")}
                            </button>
                        </form>
                    </Reveal>

                    <Reveal class="contact-info" entrance={Entrance::FromRight(40)}>
                        <div>
                            <h2>{"Quick Contact"}</h2>
                            <div class="channel-list">
                                { for QUICK_CONTACT.iter().map(|channel| html! {
                                    <div class="channel" key={channel.label}>
                                        <div class="channel-icon">{channel.icon.view("icon-sm")}</div>
                                        <div>
                                            <p class="channel-label">{channel.label}</p>
                                            <p class="channel-value">{channel.value}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div>
                            <h2>{"Our Offices"}</h2>
                            <div class="office-list">
                                { for OFFICES.iter().map(office_card) }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="cta-section noise">
                <div class="container">
                    <Reveal>
                        <h2>{"Ready to Start Your "}<span class="text-gradient">{"Project?"}</span></h2>
                        <p>{"Schedule a free 30-minute consultation to discuss your project and explore how we can help."}</p>
                        <button class="gradient-button">{"Schedule a Call"}</button>
                    </Reveal>
                </div>
            </section>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(form: Rc<ContactForm>, field: ContactField, value: &str) -> Rc<ContactForm> {
        form.reduce(FieldChanged(field, value.to_string()))
    }

    #[test]
    fn field_updates_are_last_write_wins() {
        let form = Rc::new(ContactForm::default());
        let form = apply(form, ContactField::Name, "Ada");
        let form = apply(form, ContactField::Name, "Ada Lovelace");
        let form = apply(form, ContactField::Budget, "25k-50k");

        assert_eq!(form.get(ContactField::Name), "Ada Lovelace");
        assert_eq!(form.get(ContactField::Budget), "25k-50k");
        assert_eq!(form.get(ContactField::Email), "");
    }

    #[test]
    fn unchanged_value_keeps_same_state() {
        let form = apply(Rc::new(ContactForm::default()), ContactField::Message, "hello");
        let again = apply(form.clone(), ContactField::Message, "hello");
        assert!(Rc::ptr_eq(&form, &again));
    }

    #[test]
    fn every_field_round_trips_through_get() {
        let fields = [
            ContactField::Name,
            ContactField::Email,
            ContactField::Company,
            ContactField::Budget,
            ContactField::Message,
        ];
        let mut form = Rc::new(ContactForm::default());
        for (i, field) in fields.iter().enumerate() {
            form = apply(form, *field, &format!("value-{}", i));
        }
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(form.get(*field), format!("value-{}", i));
        }
    }

    #[test]
    fn submission_log_is_json() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            budget: "100k+".into(),
            ..ContactForm::default()
        };
        let logged = log_submission(&form).expect("form serializes");
        let json: serde_json::Value = serde_json::from_str(&logged).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["company"], "");
        assert_eq!(json["budget"], "100k+");
    }
}
