use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::models::ContactDraft;
use super::phone::normalize_phone;
use super::store::{BrowserStorage, RecordStore};
use super::submit::{submit_contact, BrowserClock};
use crate::components::notification::use_notifier;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let notifier = use_notifier();

    let on_text = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };
    let on_name = on_text(|d, v| d.name = v);
    let on_email = on_text(|d, v| d.email = v);
    let on_phone = on_text(|d, v| d.phone = normalize_phone(&v));

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let store = RecordStore::new(BrowserStorage);
            let outcome = submit_contact(&draft, &store, &BrowserClock);

            let (message, kind) = outcome.notification();
            notifier.show(message, kind);
            if outcome.clears_form() {
                draft.set(ContactDraft::default());
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-group">
                <label for="name">{"الاسم"}</label>
                <input id="name" name="name" type="text" value={draft.name.clone()} oninput={on_name} />
            </div>
            <div class="form-group">
                <label for="email">{"البريد الإلكتروني"}</label>
                <input id="email" name="email" type="email" value={draft.email.clone()} oninput={on_email} />
            </div>
            <div class="form-group">
                <label for="phone">{"رقم الجوال"}</label>
                <input id="phone" name="phone" type="tel" dir="ltr" value={draft.phone.clone()} oninput={on_phone} />
            </div>
            <div class="form-group">
                <label for="message">{"رسالتك"}</label>
                <textarea id="message" name="message" rows="5" value={draft.message.clone()} oninput={on_message} />
            </div>
            <button type="submit" class="btn btn-primary">{"إرسال"}</button>
        </form>
    }
}
