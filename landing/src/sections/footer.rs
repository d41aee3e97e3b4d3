use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use mettamate_site::reveal::Stagger;
use mettamate_site::subscribe::{SubscribeError, Unwired, sign_up};
use tracing::info;

use super::shared::reveal;
use crate::icons::{ICON_ARROW_RIGHT, ICON_USERS, Icon};

const LINK_COLUMNS: [(&str, &[&str]); 3] = [
    ("Platform", &["About Us", "Community Guidelines", "Safety Center"]),
    ("Resources", &["Mentorship", "Events", "Blog"]),
    ("Legal", &["Privacy Policy", "Terms of Service"]),
];

const SOCIALS: [&str; 3] = ["in", "ig", "x"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container-custom">
                <div class=reveal("footer-cta", Stagger::None)>
                    <div class="footer-heading">
                        <h2>"Come Home."</h2>
                        <p>"The community you've been looking for is looking for you."</p>
                    </div>

                    <div class="footer-cards">
                        <div class="join-card">
                            <div class="join-watermark">
                                <Icon path=ICON_USERS size="140" />
                            </div>
                            <div>
                                <h3>"Step In."</h3>
                                <p>
                                    "Claim your place. Full access to events, mentorship, and a safe community of peers."
                                </p>
                            </div>
                            <button class="join-btn">
                                "Become a Member "
                                <Icon path=ICON_ARROW_RIGHT />
                            </button>
                        </div>

                        <Newsletter />
                    </div>
                </div>

                <div class="footer-links">
                    {LINK_COLUMNS
                        .into_iter()
                        .map(|(heading, links)| view! {
                            <div class="footer-col">
                                <h4>{heading}</h4>
                                <ul>
                                    {links
                                        .iter()
                                        .map(|label| view! { <li><a href="#">{*label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}

                    <div class="footer-col">
                        <div class="footer-brand">"MettaMate"</div>
                        <p>"© 2024 MettaMate Inc."<br />"All rights reserved."</p>
                        <div class="socials">
                            {SOCIALS
                                .into_iter()
                                .map(|handle| view! { <div class="social">{handle}</div> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Info(String),
    Problem(String),
}

/// "Stay Close" card: email field plus subscribe button.
#[component]
fn Newsletter() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = email.with_untracked(|input| sign_up(&Unwired, input));
        let notice = match outcome {
            Ok(address) => {
                info!("newsletter sign-up accepted");
                set_email.set(String::new());
                Notice::Info(format!("Subscribed {address}."))
            }
            // Valid address, nowhere to send it yet.
            Err(err @ SubscribeError::Unavailable) => Notice::Info(err.to_string()),
            Err(err) => Notice::Problem(err.to_string()),
        };
        set_notice.set(Some(notice));
    };

    view! {
        <div class="newsletter-card">
            <div>
                <h3>"Stay Close."</h3>
                <p>"Not ready to jump in? Receive weekly stories of joy and history. No commitment."</p>
            </div>
            <form class="newsletter-form" novalidate=true on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email address"
                    class="newsletter-input"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="newsletter-btn">"Subscribe"</button>
            </form>
            {move || notice.get().map(|notice| match notice {
                Notice::Info(text) => view! { <p class="newsletter-notice" role="status">{text}</p> }.into_any(),
                Notice::Problem(text) => view! { <p class="newsletter-notice error" role="alert">{text}</p> }.into_any(),
            })}
        </div>
    }
}
