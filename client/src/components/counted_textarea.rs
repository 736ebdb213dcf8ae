//! Textarea with a live character counter.

use leptos::prelude::*;

use crate::util::char_counter;

/// Length-limited textarea that shows `"{len}/{max} characters"` beneath it.
#[component]
pub fn CountedTextarea(
    #[prop(into)] name: String,
    max_length: usize,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let value = RwSignal::new(String::new());

    view! {
        <div class="counted-textarea">
            <textarea
                class="form-control"
                name=name
                rows=rows.to_string()
                maxlength=max_length.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <small class=move || char_counter::counter_class(&value.get(), max_length)>
                {move || char_counter::counter_text(&value.get(), max_length)}
            </small>
        </div>
    }
}
