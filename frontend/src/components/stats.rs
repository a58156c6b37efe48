use yew::prelude::*;

use crate::animation::count_up::{use_count_up, CounterSpec};
use crate::animation::reveal::{stagger, use_in_view, Reveal, RevealOptions};
use crate::config;
use crate::content::STATS;

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub spec: CounterSpec,
}

/// Counts up to `spec.target` once the number scrolls into view.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), RevealOptions::once());
    let frame = use_count_up(props.spec.clone(), in_view);

    html! {
        <span ref={node} class="stat-value text-gradient">
            {props.spec.format(frame.value)}
        </span>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats-section noise">
            <style>
                {r#"
                    .stats-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                        background: linear-gradient(to right, rgba(139, 92, 246, 0.05), transparent, rgba(236, 72, 153, 0.05));
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 4.5rem;
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        color: var(--muted);
                        margin-top: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    @media (max-width: 1024px) {
                        .stats-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                        .stat-value { font-size: 3rem; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal key={stat.label} delay_ms={stagger(index, config::STAGGER_MS)}>
                            <AnimatedNumber spec={stat.counter()} />
                            <p class="stat-label">{stat.label}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
