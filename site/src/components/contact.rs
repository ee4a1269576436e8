//! Contact details and the externally handled contact form.
//!
//! The form is plain HTML: the browser enforces `required` and
//! `type="email"`, then posts `name`, `email` and `message` to the configured
//! endpoint. Nothing on this side observes the submission.

use leptos::prelude::*;

use super::{Card, Icon, icon_path};
use crate::config::ContactConfig;
use crate::content::{
    CONTACT_COPY, CONTACT_FIELDS, CONTACT_HEADING, CONTACT_NOTE, CONTACT_SUBMIT, CtaStyle,
    FormField, IconKind, MESSAGE_ROWS, SectionId,
};

#[component]
pub fn Contact(contact: ContactConfig) -> impl IntoView {
    let id = SectionId::Contact.as_str();
    let details = [
        (IconKind::Phone, contact.phone),
        (IconKind::Mail, contact.email),
        (IconKind::MapPin, contact.location),
    ];
    let endpoint = contact.form_endpoint;
    let [name_field, email_field, message_field] = CONTACT_FIELDS;

    view! {
        <section id=id class="band band-gray" data-section=id>
            <div class="container section">
                <div class="two-col align-start">
                    <div>
                        <h2 class="section-title">{CONTACT_HEADING}</h2>
                        <p class="narrative">{CONTACT_COPY}</p>
                        <div class="contact-details">
                            {details.into_iter().map(|(icon, text)| {
                                view! {
                                    <p class="contact-line">
                                        <Icon path=icon_path(icon) size="16" />
                                        {text}
                                    </p>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <Card body_class="card-body">
                        <form class="contact-form" action=endpoint method="post">
                            <div class="form-fields">
                                <FormControl field=name_field />
                                <FormControl field=email_field />
                                <FormControl field=message_field />
                            </div>
                            <div class="form-footer">
                                <p class="fine-print">{CONTACT_NOTE}</p>
                                <button class=CtaStyle::Primary.class() type="submit">
                                    {CONTACT_SUBMIT}
                                </button>
                            </div>
                        </form>
                    </Card>
                </div>
            </div>
        </section>
    }
}

/// One required form control; fields without an input type become a textarea.
#[component]
fn FormControl(field: FormField) -> impl IntoView {
    match field.input_type {
        Some(input_type) => view! {
            <input
                class="form-input"
                type=input_type
                name=field.name
                placeholder=field.placeholder
                aria-label=field.placeholder
                required=true
            />
        }
        .into_any(),
        None => view! {
            <textarea
                class="form-input"
                name=field.name
                placeholder=field.placeholder
                aria-label=field.placeholder
                rows=MESSAGE_ROWS
                required=true
            ></textarea>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContactConfig;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn form_markup_has_no_text_separators() {
        let html = view! { <Contact contact=ContactConfig::default() /> }.to_html();
        let start = html.find("<form").expect("form start");
        let end = html.find("</form>").expect("form end");
        let form = &html[start..end];

        assert!(!form.contains("<!>"), "{form}");
        assert!(form.contains(r#"name="name""#));
        assert!(form.contains(r#"name="email""#));
        assert!(form.contains(r#"name="message""#));
    }
}
