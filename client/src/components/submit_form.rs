//! Plain HTML form whose submit button locks once submitted.

use leptos::prelude::*;

use crate::util::submit_state;

/// Native (non-SPA) form. Submission is left to the browser; the button is
/// disabled and relabeled so the form cannot be sent twice.
#[component]
pub fn SubmitForm(
    #[prop(into)] action: String,
    #[prop(into, default = "post".to_owned())] method: String,
    #[prop(optional, into)] enctype: Option<String>,
    #[prop(into)] submit_label: String,
    children: Children,
) -> impl IntoView {
    let submitting = RwSignal::new(false);
    let idle_label = StoredValue::new(submit_label);

    let on_submit = move |_ev: leptos::ev::SubmitEvent| submitting.set(true);

    let label = move || {
        let busy = submitting.get();
        idle_label.with_value(|idle| submit_state::submit_label(busy, idle).to_owned())
    };

    view! {
        <form class="submit-form" action=action method=method enctype=enctype on:submit=on_submit>
            {children()}
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || submitting.get().then(|| view! { <i class="fas fa-spinner fa-spin me-2"></i> })}
                {label}
            </button>
        </form>
    }
}
