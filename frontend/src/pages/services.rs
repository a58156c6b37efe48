use yew::prelude::*;

use crate::animation::reveal::{stagger, Reveal};
use crate::components::layout::{Layout, PageHero};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::{Service, PROCESS, SERVICES};
use crate::icons::Icon;

fn service_card(service: &'static Service) -> Html {
    html! {
        <div class="service-card">
            <div class="service-card-icon" style={format!("background: {};", service.accent)}>
                {service.icon.view("icon-lg")}
            </div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li key={*feature}>{Icon::Check.view("icon-xs")}{*feature}</li>
                }) }
            </ul>
        </div>
    }
}

/// Arrows sit between process cards, so the last one has none.
fn has_next(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <Layout>
            <style>
                {r#"
                    .service-cards-section { padding: 5rem 0; }
                    .service-cards, .process-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition: transform 0.5s ease, border-color 0.5s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-8px);
                        border-color: rgba(139, 92, 246, 0.5);
                    }
                    .service-card-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.75rem; }
                    .service-card p { color: var(--muted); margin-bottom: 1.5rem; }
                    .service-features { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
                    .service-features li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .service-features .icon { color: var(--primary); }
                    .process-section { padding: 5rem 0; background: rgba(30, 30, 40, 0.3); }
                    .process-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                    }
                    .process-step { font-size: 3.75rem; font-weight: 700; opacity: 0.2; }
                    .process-card h3 { font-size: 1.25rem; font-weight: 600; margin: 1rem 0 0.5rem; }
                    .process-card p { color: var(--muted); }
                    .process-arrow {
                        position: absolute;
                        right: -1rem;
                        top: 50%;
                        color: rgba(139, 92, 246, 0.3);
                    }
                    @media (max-width: 1024px) {
                        .service-cards, .process-grid { grid-template-columns: repeat(2, 1fr); }
                        .process-arrow { display: none; }
                    }
                    @media (max-width: 768px) {
                        .service-cards, .process-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <PageHero
                eyebrow="What We Do"
                lead="Services That"
                highlight="Elevate"
                blurb="We blend creativity with technical excellence to deliver solutions that push boundaries and exceed expectations."
                blob_style="top: 33%; left: 25%; width: 600px; height: 600px; background: rgba(236, 72, 153, 0.2);"
            />

            <section class="service-cards-section noise">
                <div class="container">
                    <div class="service-cards">
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <Reveal key={service.title} delay_ms={stagger(index, config::STAGGER_MS)}>
                                {service_card(service)}
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="process-section noise">
                <div class="container">
                    <SectionHeader eyebrow="Our Process" title="How We" highlight="Work" />
                    <div class="process-grid">
                        { for PROCESS.iter().enumerate().map(|(index, item)| html! {
                            <Reveal key={item.step} delay_ms={stagger(index, config::STAGGER_MS)}>
                                <div class="process-card">
                                    <span class="process-step text-gradient">{item.step}</span>
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                    {
                                        if has_next(index, PROCESS.len()) {
                                            html! { <span class="process-arrow">{Icon::ArrowRight.view("icon-xl")}</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_process_step_has_no_arrow() {
        let arrows: Vec<bool> = (0..PROCESS.len()).map(|i| has_next(i, PROCESS.len())).collect();
        assert_eq!(arrows, vec![true, true, true, true, true, false]);
    }
}
