use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{Entrance, Reveal};
use crate::components::layout::{Layout, PageHero};
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;
use crate::components::work::Work;
use crate::icons::Icon;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <PageHero
                eyebrow="Creative Digital Studio"
                lead="We Craft"
                highlight="Digital Experiences"
                trail="That Inspire"
                blurb="Pushing the boundaries of digital creativity to craft experiences that inspire and transform."
                blob_style="top: 20%; left: 30%; width: 600px; height: 600px; background: rgba(139, 92, 246, 0.2);"
            />
            <Work />
            <Services />
            <Stats />
            <Testimonials />
            <section class="cta-section noise">
                <div class="container">
                    <Reveal entrance={Entrance::Fade} duration_ms={800}>
                        <h2>{"Have a Project "}<span class="text-gradient">{"in Mind?"}</span></h2>
                        <p>{"Tell us where you want to go. We'll help you get there."}</p>
                        <Link<Route> to={Route::Contact} classes="gradient-button">
                            {"Let's Talk"}
                            {Icon::ArrowRight.view("icon-sm")}
                        </Link<Route>>
                    </Reveal>
                </div>
            </section>
        </Layout>
    }
}
