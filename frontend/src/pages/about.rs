use yew::prelude::*;

use crate::animation::reveal::{stagger, Entrance, Reveal};
use crate::components::layout::{Layout, PageHero};
use crate::components::section_header::SectionHeader;
use crate::components::stats::Stats;
use crate::config;
use crate::content::{TEAM, VALUES};

const STORY: [&str; 3] = [
    "Founded in 2012, we started as a small team with big dreams. What began in a tiny apartment has grown into a globally recognized creative studio.",
    "Over the years, we've had the privilege of working with startups, Fortune 500 companies, and everything in between. Each project has taught us something new and pushed us to evolve.",
    "Today, we're a diverse team of 45+ talented individuals spread across three continents, united by our passion for creating meaningful digital experiences.",
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <Layout>
            <style>
                {r#"
                    .story-section { padding: 5rem 0; }
                    .story-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 4rem;
                        align-items: center;
                    }
                    .story-copy h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .story-copy p { color: var(--muted); font-size: 1.125rem; line-height: 1.7; }
                    .story-images { position: relative; }
                    .story-main { aspect-ratio: 1; border-radius: 1rem; overflow: hidden; }
                    .story-main img, .story-inset img { width: 100%; height: 100%; object-fit: cover; }
                    .story-inset {
                        position: absolute;
                        bottom: -2rem;
                        left: -2rem;
                        width: 12rem;
                        height: 12rem;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 4px solid var(--bg);
                    }
                    .values-section { padding: 5rem 0; background: rgba(30, 30, 40, 0.3); }
                    .values-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .value-card {
                        text-align: center;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: var(--card);
                        border: 1px solid var(--border);
                        height: 100%;
                    }
                    .value-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--primary);
                    }
                    .value-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
                    .value-card p { color: var(--muted); }
                    .team-section { padding: 5rem 0; }
                    .team-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .member-card {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: var(--card);
                        border: 1px solid var(--border);
                        transition: transform 0.5s ease;
                    }
                    .member-card:hover { transform: translateY(-8px); }
                    .member-photo { aspect-ratio: 1; overflow: hidden; }
                    .member-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease;
                    }
                    .member-card:hover .member-photo img { transform: scale(1.1); }
                    .member-info {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem;
                        background: linear-gradient(to top, var(--bg), transparent);
                    }
                    .member-info h3 { font-size: 1.25rem; font-weight: 600; margin: 0; }
                    .member-role { color: var(--primary); font-size: 0.875rem; margin: 0.25rem 0 0.5rem; }
                    .member-bio {
                        color: var(--muted);
                        font-size: 0.875rem;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .member-card:hover .member-bio { opacity: 1; }
                    @media (max-width: 1024px) {
                        .story-grid { grid-template-columns: 1fr; }
                        .values-grid, .team-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .values-grid, .team-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <PageHero
                eyebrow="About Us"
                lead="We Are"
                highlight="Dreamers"
                trail="& Makers"
                blurb="A collective of passionate creators, strategists, and technologists united by a shared mission: to craft digital experiences that inspire and transform."
                blob_style="top: 25%; left: 33%; width: 700px; height: 700px; background: rgba(139, 92, 246, 0.15); animation-duration: 25s;"
            />

            <section class="story-section noise">
                <div class="container story-grid">
                    <Reveal class="story-copy" entrance={Entrance::FromLeft(40)}>
                        <h2>{"Our "}<span class="text-gradient">{"Story"}</span></h2>
                        { for STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </Reveal>
                    <Reveal class="story-images" entrance={Entrance::FromRight(40)}>
                        <div class="story-main">
                            <img
                                src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&h=800&fit=crop"
                                alt="Team collaboration"
                            />
                        </div>
                        <div class="story-inset">
                            <img
                                src="https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=400&h=400&fit=crop"
                                alt="Office"
                            />
                        </div>
                    </Reveal>
                </div>
            </section>

            <Stats />

            <section class="values-section noise">
                <div class="container">
                    <SectionHeader eyebrow="Our Values" title="What Drives" highlight="Us" />
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <Reveal key={value.title} delay_ms={stagger(index, config::STAGGER_MS)}>
                                <div class="value-card">
                                    <div class="value-icon">{value.icon.view("icon-xl")}</div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="team-section noise">
                <div class="container">
                    <SectionHeader eyebrow="The Team" title="Meet the" highlight="Minds" />
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <Reveal key={member.name} delay_ms={stagger(index, config::STAGGER_MS)}>
                                <div class="member-card">
                                    <div class="member-photo">
                                        <img src={member.image} alt={member.name} />
                                    </div>
                                    <div class="member-info">
                                        <h3>{member.name}</h3>
                                        <p class="member-role">{member.role}</p>
                                        <p class="member-bio">{member.bio}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
        </Layout>
    }
}
