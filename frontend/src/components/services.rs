use yew::prelude::*;

use crate::animation::reveal::{stagger, Reveal};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::SERVICES;

/// Compact services grid used on the home page.
#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services-section noise">
            <style>
                {r#"
                    .services-section { position: relative; padding: 8rem 0; overflow: hidden; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .service-tile {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition: transform 0.5s ease, border-color 0.5s ease;
                    }
                    .service-tile:hover {
                        transform: translateY(-8px) scale(1.02);
                        border-color: rgba(139, 92, 246, 0.5);
                    }
                    .service-tile-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--primary);
                        margin-bottom: 1.5rem;
                        transition: transform 0.5s ease;
                    }
                    .service-tile:hover .service-tile-icon { transform: scale(1.1); }
                    .service-tile h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
                    .service-tile p { color: var(--muted); line-height: 1.7; }
                    @media (max-width: 1024px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 768px) { .services-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="container">
                <SectionHeader
                    eyebrow="What We Do"
                    title="Services That"
                    highlight="Elevate"
                    subtitle="We blend creativity with technical excellence to deliver solutions that push boundaries."
                />

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal key={service.title} delay_ms={stagger(index, config::STAGGER_MS)}>
                            <div class="service-tile">
                                <div class="service-tile-icon">{service.icon.view("icon-lg")}</div>
                                <h3>{service.short_title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
