use yew::prelude::*;

use crate::animation::reveal::{stagger, Entrance, Reveal};
use crate::components::layout::{Layout, PageHero};
use crate::config;
use crate::content::{Project, PROJECTS};
use crate::icons::Icon;

fn project_entry(project: &'static Project) -> Html {
    html! {
        <div class="project-card">
            <div class="project-media">
                <img src={project.image} alt={project.title} />
                <div class="project-tint" style={format!("background: {};", project.tint)}></div>
            </div>
            <div class="project-body">
                <div class="project-meta">
                    <span class="project-category">{project.category}</span>
                    <span class="project-year">{project.year}</span>
                </div>
                <h3>
                    {project.title}
                    <span class="project-arrow">{Icon::ArrowUpRight.view("icon-md")}</span>
                </h3>
                <p>{project.description}</p>
            </div>
        </div>
    }
}

#[function_component(WorkPage)]
pub fn work_page() -> Html {
    html! {
        <Layout>
            <style>
                {r#"
                    .projects-section { padding: 5rem 0; }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2.5rem;
                    }
                    .project-card {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition: transform 0.5s ease, border-color 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-12px);
                        border-color: rgba(139, 92, 246, 0.5);
                    }
                    .project-media { position: relative; aspect-ratio: 16 / 10; overflow: hidden; }
                    .project-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease;
                    }
                    .project-card:hover .project-media img { transform: scale(1.1); }
                    .project-tint { position: absolute; inset: 0; opacity: 0.6; }
                    .project-body { padding: 2rem; }
                    .project-meta {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                    }
                    .project-category {
                        color: var(--primary);
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .project-year { color: var(--muted); }
                    .project-body h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .project-arrow { opacity: 0; transition: opacity 0.3s ease; }
                    .project-card:hover .project-arrow { opacity: 1; }
                    .project-body p { color: var(--muted); line-height: 1.7; }
                    @media (max-width: 1024px) { .projects-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <PageHero
                eyebrow="Our Portfolio"
                lead="Selected"
                highlight="Works"
                blurb="Explore our collection of award-winning projects that showcase our commitment to excellence and innovation."
                blob_style="top: 25%; right: 25%; width: 500px; height: 500px; background: rgba(139, 92, 246, 0.2);"
            />
            <section class="projects-section noise">
                <div class="container">
                    <div class="projects-grid">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <Reveal
                                key={project.title}
                                entrance={Entrance::Rise(60)}
                                duration_ms={800}
                                delay_ms={stagger(index, config::STAGGER_MS)}
                            >
                                {project_entry(project)}
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
        </Layout>
    }
}
