use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::{Layout, PageHero};
use crate::icons::Icon;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout>
            <PageHero
                eyebrow="404"
                lead="Nothing"
                highlight="Here"
                blurb="The page you were looking for has moved or never existed."
                blob_style="top: 25%; right: 25%; width: 500px; height: 500px; background: rgba(236, 72, 153, 0.2);"
            />
            <section class="cta-section noise">
                <div class="container">
                    <Link<Route> to={Route::Home} classes="gradient-button">
                        {"Back Home"}
                        {Icon::ArrowRight.view("icon-sm")}
                    </Link<Route>>
                </div>
            </section>
        </Layout>
    }
}
