use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{stagger, Entrance, Reveal};
use crate::components::section_header::SectionHeader;
use crate::config;
use crate::content::{Project, FEATURED_PROJECTS, PROJECTS};
use crate::icons::Icon;
use crate::Route;

fn project_card(project: &'static Project) -> Html {
    html! {
        <div class="work-card">
            <div class="work-card-media">
                <img src={project.image} alt={project.title} />
            </div>
            <div class="work-card-tint" style={format!("background: {};", project.tint)}></div>
            <div class="work-card-shade"></div>
            <div class="work-card-body">
                <span class="work-card-category">{project.category}</span>
                <h3>
                    {project.title}
                    <span class="work-card-arrow">{Icon::ArrowUpRight.view("icon-md")}</span>
                </h3>
            </div>
            <div class="work-card-border"></div>
        </div>
    }
}

/// Home page teaser of the first few projects.
#[function_component(Work)]
pub fn work() -> Html {
    html! {
        <section class="work-section noise">
            <style>
                {r#"
                    .work-section { position: relative; padding: 8rem 0; overflow: hidden; background: rgba(30, 30, 40, 0.3); }
                    .work-section .section-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        text-align: left;
                    }
                    .view-all {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--primary);
                        text-decoration: none;
                        transition: color 0.3s ease, transform 0.2s ease;
                    }
                    .view-all:hover { color: var(--accent); transform: scale(1.05); }
                    .work-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .work-card {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.5s ease;
                    }
                    .work-card:hover { transform: translateY(-12px); }
                    .work-card-media { aspect-ratio: 4 / 3; overflow: hidden; }
                    .work-card-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease;
                    }
                    .work-card:hover .work-card-media img { transform: scale(1.1); }
                    .work-card-tint { position: absolute; inset: 0; opacity: 0.6; }
                    .work-card-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--bg), transparent 60%);
                    }
                    .work-card-body { position: absolute; left: 0; right: 0; bottom: 0; padding: 2rem; }
                    .work-card-category {
                        color: var(--primary);
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .work-card-body h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-top: 0.5rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .work-card-arrow {
                        opacity: 0;
                        transform: translateX(-10px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .work-card:hover .work-card-arrow { opacity: 1; transform: none; }
                    .work-card-border {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        border: 2px solid transparent;
                        transition: border-color 0.3s ease;
                        pointer-events: none;
                    }
                    .work-card:hover .work-card-border { border-color: rgba(139, 92, 246, 0.5); }
                    @media (max-width: 768px) {
                        .work-grid { grid-template-columns: 1fr; }
                        .work-section .section-header { flex-direction: column; align-items: flex-start; gap: 1.5rem; }
                    }
                "#}
            </style>
            <div class="container">
                <SectionHeader eyebrow="Portfolio" title="Selected" highlight="Works" centered={false}>
                    <Link<Route> to={Route::Work} classes="view-all">
                        {"View All Projects"}
                        {Icon::ArrowUpRight.view("icon-sm")}
                    </Link<Route>>
                </SectionHeader>

                <div class="work-grid">
                    { for PROJECTS.iter().take(FEATURED_PROJECTS).enumerate().map(|(index, project)| html! {
                        <Reveal
                            key={project.title}
                            entrance={Entrance::Rise(60)}
                            duration_ms={800}
                            delay_ms={stagger(index, config::STAGGER_WIDE_MS)}
                        >
                            {project_card(project)}
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
