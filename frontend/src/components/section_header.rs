use yew::prelude::*;

use crate::animation::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: &'static str,
    pub title: &'static str,
    /// Gradient-highlighted tail of the title.
    pub highlight: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
    #[prop_or(true)]
    pub centered: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let class = classes!("section-header", props.centered.then_some("centered"));

    html! {
        <Reveal class={class} duration_ms={800}>
            <div>
                <span class="eyebrow">{props.eyebrow}</span>
                <h2 class="section-title">
                    {props.title}{" "}<span class="text-gradient">{props.highlight}</span>
                </h2>
                {
                    if let Some(subtitle) = props.subtitle {
                        html! { <p class="section-subtitle">{subtitle}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            { for props.children.iter() }
        </Reveal>
    }
}
