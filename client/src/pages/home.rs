//! Landing page: featured work, contact form, chat widget, back-to-top.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::chat_widget::ChatWidget;
use crate::components::counted_textarea::CountedTextarea;
use crate::components::search_list::{HubItem, SearchList};
use crate::components::submit_form::SubmitForm;

const CONTACT_ACTION: &str = "mailto:studenthub@andrew.cmu.edu";
const MESSAGE_MAX_LENGTH: usize = 500;

fn featured_items() -> Vec<HubItem> {
    [
        ("Projects", "Student-built software, hardware, and research prototypes.", Some("/img/projects.svg")),
        ("Blog", "Write-ups from students on courses, internships, and campus life.", Some("/img/blog.svg")),
        ("Research", "Ongoing research interests and lab collaborations.", None),
        ("Community", "Profiles and contact details for students in the hub.", None),
    ]
    .into_iter()
    .map(|(title, summary, image)| HubItem {
        title: title.to_owned(),
        summary: summary.to_owned(),
        image_url: image.map(str::to_owned),
    })
    .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="hero" id="top">
                <h1>"Student Project Hub"</h1>
                <p class="hero__subtitle">"Projects, posts, and people from CMU-Africa."</p>
                <a class="btn btn-primary" href="#featured">"Explore"</a>
            </section>

            <section class="featured" id="featured">
                <h2>"Featured"</h2>
                <SearchList items=featured_items()/>
            </section>

            <section class="contact" id="contact">
                <h2>"Get in touch"</h2>
                <SubmitForm action=CONTACT_ACTION enctype="text/plain" submit_label="Send message">
                    <input class="form-control" type="text" name="name" placeholder="Your name" required=true/>
                    <CountedTextarea name="message" max_length=MESSAGE_MAX_LENGTH placeholder="Your message"/>
                </SubmitForm>
            </section>

            <ChatWidget/>
            <BackToTop/>
        </main>
    }
}
