use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::contact::ContactMessage;
use crate::contact::ContactError;

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
    website: String,
) -> Result<Result<(), ContactError>, ServerFnError> {
    // `website` is the honeypot field
    let msg = match ContactMessage::validate(&name, &email, &message, &website) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::info!("rejected contact submission: {e}");
            return Ok(Err(e));
        }
    };
    tracing::info!(
        name = %msg.name,
        email = %msg.email,
        len = msg.message.len(),
        "contact message received"
    );
    Ok(Ok(()))
}

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted/30 bg-surface/40 focus:outline-none focus:ring-2 focus:ring-purple";

#[component]
pub fn ContactForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let result = submit.value();
    let pending = submit.pending();

    let status = move || {
        result.get().map(|res| match res {
            Ok(Ok(())) => view! {
                <p class="text-green">"Thanks, message received. I'll reply within a few days."</p>
            }
            .into_any(),
            Ok(Err(e)) => view! { <p class="text-red">{e.to_string()}</p> }.into_any(),
            Err(_) => view! {
                <p class="text-red">"Something went wrong sending that. Please try again later."</p>
            }
            .into_any(),
        })
    };

    view! {
        <ActionForm action=submit attr:class="grid gap-4">
            <label class="grid gap-1">
                <span class="type-caption text-muted">"Name"</span>
                <input type="text" name="name" required maxlength="100" class=INPUT_CLASS />
            </label>
            <label class="grid gap-1">
                <span class="type-caption text-muted">"Email"</span>
                <input type="email" name="email" required class=INPUT_CLASS />
            </label>
            <label class="grid gap-1">
                <span class="type-caption text-muted">"Message"</span>
                <textarea name="message" required minlength="10" rows="6" class=INPUT_CLASS></textarea>
            </label>
            <input
                type="text"
                name="website"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                class="hidden"
            />
            <button
                type="submit"
                disabled=pending
                class="justify-self-start bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-50"
            >
                {move || if pending.get() { "Sending..." } else { "Send" }}
            </button>
            {status}
        </ActionForm>
    }
}
