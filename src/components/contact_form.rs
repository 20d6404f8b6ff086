use log::info;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    // There is no delivery target yet, so submitting only keeps the page
    // from reloading.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted; no delivery target configured");
    });

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" required=true type="text" placeholder="Your name" />
            </div>
            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" required=true type="email" placeholder="you@company.com" />
            </div>
            <div class="form-field">
                <label for="contact-details">{"Project details"}</label>
                <textarea id="contact-details" rows="4" placeholder="What are you building?" />
            </div>
            <button type="submit" class="primary-button">
                {"Send message"}
                <IconView icon={Icon::Mail} />
            </button>
        </form>
    }
}
