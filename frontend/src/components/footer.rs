use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_COMPANY, FOOTER_SERVICES, SOCIAL};

fn copyright(year: i32) -> String {
    format!("© {} Studio. All rights reserved.", year)
}

fn link_column(title: &'static str, links: &'static [&'static str]) -> Html {
    html! {
        <div>
            <h4 class="footer-heading">{title}</h4>
            <ul class="footer-links">
                { for links.iter().map(|link| html! {
                    <li key={*link}><a href="#" class="footer-link">{*link}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer noise">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 4rem 0;
                        border-top: 1px solid var(--border);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                    .footer-brand p { color: var(--muted); max-width: 24rem; margin-bottom: 1.5rem; }
                    .footer-social { display: flex; gap: 1rem; }
                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: var(--secondary);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--muted);
                        transition: color 0.3s ease, background 0.3s ease, transform 0.2s ease;
                    }
                    .social-link:hover {
                        color: var(--primary);
                        background: rgba(139, 92, 246, 0.1);
                        transform: translateY(-2px) scale(1.1);
                    }
                    .social-link:active { transform: scale(0.95); }
                    .footer-heading { font-weight: 600; margin-bottom: 1rem; }
                    .footer-links { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.75rem; }
                    .footer-link { color: var(--muted); text-decoration: none; transition: color 0.3s ease; }
                    .footer-link:hover { color: var(--primary); }
                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .footer-legal { display: flex; gap: 1.5rem; }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="text-gradient">{config::SITE_NAME}</h3>
                        <p>{"Pushing the boundaries of digital creativity to craft experiences that inspire and transform."}</p>
                        <div class="footer-social">
                            { for SOCIAL.iter().map(|icon| html! {
                                <a href="#" class="social-link">{icon.view("icon-sm")}</a>
                            }) }
                        </div>
                    </div>
                    { link_column("Company", FOOTER_COMPANY) }
                    { link_column("Services", FOOTER_SERVICES) }
                </div>

                <div class="footer-bottom">
                    <p>{copyright(year)}</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">{"Privacy Policy"}</a>
                        <a href="#" class="footer-link">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright(2026), "© 2026 Studio. All rights reserved.");
    }
}
