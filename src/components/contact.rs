//! Contact form posting to the form-relay endpoint.

use gloo_net::http::Request;
use leptos::prelude::*;

use crate::config;
use crate::core::error::ContactError;
use crate::models::{ContactSubmission, SubmitStatus};

/// POST the submission as JSON and interpret the relay's answer.
///
/// Success is exactly HTTP 200. Any other status carries the response
/// body's `message` field when present; a connection failure maps to the
/// fixed network message. No retries at any layer.
async fn submit(submission: &ContactSubmission) -> Result<(), ContactError> {
    let response = Request::post(config::CONTACT_ENDPOINT)
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|_| ContactError::Network)?
        .send()
        .await
        .map_err(|_| ContactError::Network)?;

    if response.status() == 200 {
        return Ok(());
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .map(String::from)
        });
    Err(ContactError::Rejected(message))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        status.set(SubmitStatus::Sending);

        wasm_bindgen_futures::spawn_local(async move {
            match submit(&submission).await {
                Ok(()) => {
                    status.set(SubmitStatus::Sent);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => status.set(SubmitStatus::Failed(err)),
            }

            // The result banner hides itself after a fixed delay.
            gloo_timers::future::TimeoutFuture::new(config::RESULT_BANNER_HIDE_MS).await;
            status.set(SubmitStatus::Idle);
        });
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Contact"</h2>
            <form class="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    required
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your email"
                    required
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    name="message"
                    placeholder="Your message"
                    required
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    disabled=move || status.get() == SubmitStatus::Sending
                >
                    "Send message"
                </button>
            </form>

            {move || {
                status
                    .get()
                    .banner_text()
                    .map(|text| {
                        let class = if status.get().is_error() {
                            "form-result error"
                        } else {
                            "form-result"
                        };
                        view! { <div class=class role="status">{text}</div> }
                    })
            }}
        </section>
    }
}
