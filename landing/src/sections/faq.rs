use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};
use crate::icons::{ICON_MINUS, ICON_PLUS, Icon};

const QUESTIONS: [(&str, &str); 4] = [
    (
        "Is MettaMate free to join?",
        "MettaMate offers a free membership for basic community access. We also have a premium tier that supports our events, mentorship programs, and scholarships.",
    ),
    (
        "How do you verify members?",
        "We use a combination of social verification and manual review to ensure that everyone joining shares our commitment to a safe, dignified space.",
    ),
    (
        "Is this only for dating?",
        "No! While many find partners here, MettaMate is first and foremost a community platform for friendship, mentorship, networking, and shared cultural celebration.",
    ),
    (
        "Can I stay anonymous?",
        "You can choose how much of your profile is visible to the wider community, but we require real identity verification internally to maintain safety.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section class="faq">
            <div class="container-custom container-narrow">
                <SectionHeader label="FAQ" title="Common Questions" centered=true />
                <div class="faq-list">
                    {QUESTIONS
                        .into_iter()
                        .map(|(question, answer)| view! { <AccordionItem question=question answer=answer /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Question row that expands its answer in place. Starts collapsed.
#[component]
fn AccordionItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class=reveal("faq-item", Stagger::None) class:open=move || open.get()>
            <button
                class="faq-question"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="faq-question-text">{question}</span>
                <span class="faq-toggle">
                    {move || if open.get() {
                        view! { <Icon path=ICON_MINUS size="24" /> }
                    } else {
                        view! { <Icon path=ICON_PLUS size="24" /> }
                    }}
                </span>
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}
