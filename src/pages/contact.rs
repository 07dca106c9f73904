//! Contact page: portrait plus social link cards.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::utils::constants::{SITE_NAME, SOCIALS};

const LINKEDIN_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#;

const GITHUB_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/></svg>"#;

const X_ICON: &str = r#"<svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#;

fn social_icon(label: &str) -> &'static str {
    match label {
        "LinkedIn" => LINKEDIN_ICON,
        "Github" => GITHUB_ICON,
        _ => X_ICON,
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="contact-screen">
            <div class="card-grid">
                <div class="card portrait-card">
                    <img src="/portrait.jpg" alt=SITE_NAME/>
                </div>
                {SOCIALS
                    .iter()
                    .map(|social| view! {
                        <div class="card">
                            <a
                                class="social-card"
                                href=social.href
                                target="_blank"
                                rel="noreferrer"
                            >
                                <span class="social-icon" inner_html=social_icon(social.label)></span>
                                <span class="social-handle">{social.handle}</span>
                                <span class="social-label">{social.label}</span>
                            </a>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
