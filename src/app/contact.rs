use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

#[cfg(feature = "ssr")]
use crate::contact::ContactForm;

const SEND_FAILED: &str = "Failed to send message. Please try again or email directly.";

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    company: String,
    message: String,
) -> Result<String, ServerFnError> {
    let form = ContactForm {
        name,
        email,
        company,
        message,
    };
    let inquiry = match form.validate() {
        Ok(inquiry) => inquiry,
        Err(e) => {
            if let Some(opts) = use_context::<leptos_axum::ResponseOptions>() {
                opts.set_status(http::StatusCode::BAD_REQUEST);
            }
            tracing::debug!(error = %e, "rejected contact form");
            return Err(ServerFnError::new(e.to_string()));
        }
    };

    // no mailer is wired up; inquiries are read from the server log
    tracing::info!(
        subject = %inquiry.subject(),
        reply_to = %inquiry.email,
        company = %inquiry.company,
        "contact inquiry received"
    );
    tracing::debug!(body = %inquiry.plain_text(), "contact inquiry body");

    Ok(format!("Thanks {}, your message is on its way.", inquiry.name))
}

fn error_text(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg,
        _ => SEND_FAILED.to_string(),
    }
}

#[component]
fn Field(
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block space-y-2">
            <span class="text-sm text-gray-500">{label} {required.then_some(" *")}</span>
            <input
                type=kind
                name=name
                required=required
                class="w-full px-4 py-2 rounded-md border border-gray-300 dark:border-gray-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-gray-400"
            />
        </label>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let result = submit.value();
    let pending = submit.pending();

    view! {
        <Title text="Contact" />
        <section class="min-h-screen flex items-center justify-center px-6 py-12">
            <div class="w-full max-w-2xl space-y-8">
                <h1 class="text-5xl font-light tracking-tighter text-center">
                    "Let's work together"
                </h1>
                <ActionForm action=submit attr:class="space-y-6">
                    <Field name="name" label="Name" required=true />
                    <Field name="email" label="Email" kind="email" required=true />
                    <Field name="company" label="Company" />
                    <label class="block space-y-2">
                        <span class="text-sm text-gray-500">"Message *"</span>
                        <textarea
                            name="message"
                            rows="6"
                            required
                            class="w-full px-4 py-2 rounded-md border border-gray-300 dark:border-gray-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-gray-400"
                        ></textarea>
                    </label>
                    <button
                        type="submit"
                        disabled=pending
                        class="px-6 py-3 rounded-md border border-gray-400 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Sending..." } else { "Send message" }}
                    </button>
                </ActionForm>
                {move || {
                    result
                        .get()
                        .map(|res| match res {
                            Ok(msg) => Either::Left(view! { <p class="text-green-700">{msg}</p> }),
                            Err(e) => {
                                Either::Right(
                                    view! { <p class="text-red-700">{error_text(e)}</p> },
                                )
                            }
                        })
                }}
                <A href="/" attr:class="block text-center text-gray-500 hover:underline">
                    "← Back to the work"
                </A>
            </div>
        </section>
    }
}
