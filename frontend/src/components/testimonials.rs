use yew::prelude::*;

use crate::animation::reveal::{stagger, Reveal};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::TESTIMONIALS;
use crate::icons::Icon;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials-section noise">
            <style>
                {r#"
                    .testimonials-section { position: relative; padding: 8rem 0; overflow: hidden; }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .testimonial-card {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition: transform 0.5s ease, border-color 0.5s ease;
                    }
                    .testimonial-card:hover {
                        transform: translateY(-8px);
                        border-color: rgba(139, 92, 246, 0.3);
                    }
                    .quote-badge {
                        position: absolute;
                        top: -1rem;
                        left: 2rem;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: var(--gradient);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                    }
                    .testimonial-quote { font-size: 1.125rem; line-height: 1.7; margin: 1rem 0 2rem; }
                    .testimonial-author { display: flex; align-items: center; gap: 1rem; }
                    .testimonial-author img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        box-shadow: 0 0 0 2px rgba(139, 92, 246, 0.2);
                    }
                    .testimonial-author h4 { margin: 0; font-weight: 600; }
                    .testimonial-author p { margin: 0; font-size: 0.875rem; color: var(--muted); }
                    @media (max-width: 768px) {
                        .testimonials-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader eyebrow="Testimonials" title="Voices of" highlight="Trust" />

                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <Reveal key={testimonial.author} delay_ms={stagger(index, config::STAGGER_WIDE_MS)}>
                            <div class="testimonial-card">
                                <div class="quote-badge">{Icon::Quote.view("icon-xs")}</div>
                                <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                                <div class="testimonial-author">
                                    <img src={testimonial.avatar} alt={testimonial.author} />
                                    <div>
                                        <h4>{testimonial.author}</h4>
                                        <p>{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
