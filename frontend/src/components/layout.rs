use yew::prelude::*;

use crate::animation::reveal::{entrance_style, Entrance};
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Shared chrome around every page: theme, navigation bar and footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                    :root {
                        --bg: #0c0c12;
                        --fg: #f5f5f7;
                        --muted: #9a9aae;
                        --card: #15151e;
                        --secondary: #1e1e2a;
                        --border: rgba(255, 255, 255, 0.08);
                        --primary: #8b5cf6;
                        --accent: #ec4899;
                        --gradient: linear-gradient(to right, var(--primary), var(--accent));
                    }
                    body {
                        margin: 0;
                        background: var(--bg);
                        color: var(--fg);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .site { min-height: 100vh; background: var(--bg); }
                    .container { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; }
                    .text-gradient {
                        background: var(--gradient);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .noise { isolation: isolate; }
                    .icon { display: inline-block; vertical-align: middle; }
                    .icon-xs { width: 1rem; height: 1rem; }
                    .icon-sm { width: 1.25rem; height: 1.25rem; }
                    .icon-md { width: 1.5rem; height: 1.5rem; }
                    .icon-lg { width: 1.75rem; height: 1.75rem; }
                    .icon-xl { width: 2rem; height: 2rem; }
                    .eyebrow {
                        color: var(--primary);
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .section-header { margin-bottom: 4rem; }
                    .section-header.centered { text-align: center; }
                    .section-title { font-size: 3rem; font-weight: 700; margin: 1rem 0 0; }
                    .section-subtitle {
                        color: var(--muted);
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 1.5rem auto 0;
                    }
                    .page-hero { position: relative; padding: 8rem 0 5rem; overflow: hidden; }
                    .page-hero .container { position: relative; z-index: 1; }
                    .page-hero h1 { font-size: 4.5rem; font-weight: 700; margin: 1rem 0 1.5rem; line-height: 1.05; }
                    .page-hero p { color: var(--muted); font-size: 1.25rem; max-width: 42rem; }
                    .hero-blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(120px);
                        pointer-events: none;
                        animation: blobDrift 20s ease-in-out infinite;
                    }
                    @keyframes blobDrift {
                        0%, 100% { transform: scale(1) translate(0, 0); }
                        50% { transform: scale(1.2) translate(50px, -30px); }
                    }
                    .gradient-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--gradient);
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        box-shadow: 0 0 40px rgba(139, 92, 246, 0.3);
                        transition: transform 0.2s ease;
                    }
                    .gradient-button:hover { transform: scale(1.05); }
                    .gradient-button:active { transform: scale(0.95); }
                    .cta-section { padding: 5rem 0; text-align: center; background: rgba(30, 30, 40, 0.3); }
                    .cta-section h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .cta-section p { color: var(--muted); font-size: 1.125rem; max-width: 42rem; margin: 0 auto 2rem; }
                    @media (max-width: 768px) {
                        .page-hero h1 { font-size: 3rem; }
                        .section-title, .cta-section h2 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <Navigation />
            <main>
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub eyebrow: &'static str,
    pub lead: &'static str,
    pub highlight: &'static str,
    #[prop_or_default]
    pub trail: &'static str,
    pub blurb: &'static str,
    /// Inline position/colour of the drifting background blob.
    pub blob_style: &'static str,
}

/// Page-top hero; animates in on mount rather than on scroll.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                shown.set(true);
                || ()
            },
            (),
        );
    }

    let style = entrance_style(*shown, Entrance::Rise(40), 800, 0);

    html! {
        <section class="page-hero noise">
            <div class="hero-blob" style={props.blob_style}></div>
            <div class="container">
                <div style={style}>
                    <span class="eyebrow">{props.eyebrow}</span>
                    <h1>
                        {props.lead}{" "}<span class="text-gradient">{props.highlight}</span>
                        { if props.trail.is_empty() { html! {} } else { html! { <>{" "}{props.trail}</> } } }
                    </h1>
                    <p>{props.blurb}</p>
                </div>
            </div>
        </section>
    }
}
