use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::scroll::use_scrolled_past;
use crate::config;
use crate::content::NAV_LINKS;
use crate::icons::Icon;
use crate::Route;

pub fn is_active(link: &Route, current: Option<&Route>) -> bool {
    current == Some(link)
}

fn link_classes(base: &'static str, link: &Route, current: Option<&Route>) -> Classes {
    classes!(base, is_active(link, current).then_some("active"))
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLL_THRESHOLD_PX);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let mobile_class = if *menu_open {
        "mobile-menu mobile-menu-open"
    } else {
        "mobile-menu"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease, border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                        animation: navDrop 0.6s ease-out;
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .top-nav.scrolled {
                        background: rgba(12, 12, 18, 0.7);
                        backdrop-filter: blur(16px);
                        border-bottom-color: var(--border);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 5rem;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover { transform: scale(1.05); }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--muted);
                        text-decoration: none;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        transition: color 0.3s ease, transform 0.2s ease;
                        display: inline-block;
                    }
                    .nav-link:hover { color: var(--fg); transform: translateY(-2px); }
                    .nav-link.active { color: var(--primary); }
                    .nav-cta {
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        background: var(--gradient);
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .nav-cta:hover { transform: scale(1.05); }
                    .nav-cta:active { transform: scale(0.95); }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--fg);
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .mobile-menu-inner {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                    }
                    .mobile-menu .nav-link { font-size: 1.125rem; text-transform: none; color: var(--fg); }
                    .mobile-menu .nav-link.active { color: var(--primary); }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                        .mobile-menu {
                            display: block;
                            background: rgba(12, 12, 18, 0.9);
                            backdrop-filter: blur(16px);
                        }
                        .mobile-menu-open {
                            max-height: 24rem;
                            border-top: 1px solid var(--border);
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo text-gradient">
                    {config::SITE_NAME}
                </Link<Route>>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <Link<Route> to={route.clone()} classes={link_classes("nav-link", route, current.as_ref())}>
                            {*label}
                        </Link<Route>>
                    }) }
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Let's Talk"}
                    </Link<Route>>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { Icon::Close.view("icon-md") } else { Icon::Menu.view("icon-md") } }
                </button>
            </div>

            <div class={mobile_class}>
                <div class="mobile-menu-inner">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes={link_classes("nav-link", route, current.as_ref())}>
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Let's Talk"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_path_highlights_only_contact() {
        let current = Route::recognize("/contact");
        assert_eq!(current, Some(Route::Contact));

        let active: Vec<&str> = NAV_LINKS
            .iter()
            .filter(|(route, _)| is_active(route, current.as_ref()))
            .map(|(_, label)| *label)
            .collect();
        assert_eq!(active, vec!["Contact"]);
    }

    #[test]
    fn home_highlights_nothing() {
        let current = Route::recognize("/");
        assert!(NAV_LINKS.iter().all(|(route, _)| !is_active(route, current.as_ref())));
    }

    #[test]
    fn no_route_highlights_nothing() {
        assert!(NAV_LINKS.iter().all(|(route, _)| !is_active(route, None)));
    }

    #[test]
    fn active_class_is_added_to_base() {
        let classes = link_classes("nav-link", &Route::Work, Some(&Route::Work));
        assert!(classes.contains("nav-link"));
        assert!(classes.contains("active"));

        let classes = link_classes("nav-link", &Route::Work, Some(&Route::About));
        assert!(!classes.contains("active"));
    }
}
