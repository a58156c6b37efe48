use yew::prelude::*;

/// Every glyph the site draws. Content tables name icons by variant, never by
/// string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Palette,
    Code,
    Sparkles,
    Layers,
    Zap,
    Globe,
    Target,
    Users,
    Heart,
    Award,
    Quote,
    ArrowUpRight,
    ArrowRight,
    Check,
    Send,
    Mail,
    MapPin,
    Phone,
    Clock,
    Menu,
    Close,
    Github,
    Twitter,
    Linkedin,
    Instagram,
}

impl Icon {
    /// SVG path data on a 24x24 stroked grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Palette => &[
                "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 9.8C22 5.5 17.5 2 12 2z",
                "M7.5 10.5h.01",
                "M10.5 6.5h.01",
                "M15.5 7.5h.01",
            ],
            Icon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Icon::Sparkles => &[
                "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z",
                "M5 3v4",
                "M3 5h4",
                "M19 17v4",
                "M17 19h4",
            ],
            Icon::Layers => &["M12 2l10 5-10 5L2 7z", "M2 12l10 5 10-5", "M2 17l10 5 10-5"],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9z"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15 15 0 0 1 4 10 15 15 0 0 1-4 10 15 15 0 0 1-4-10 15 15 0 0 1 4-10z",
            ],
            Icon::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12z",
                "M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.9",
                "M16 3.1a4 4 0 0 1 0 7.8",
            ],
            Icon::Heart => &[
                "M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7z",
            ],
            Icon::Award => &[
                "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12z",
                "M15.5 12.9L17 22l-5-3-5 3 1.5-9.1",
            ],
            Icon::Quote => &[
                "M3 21c3 0 7-1 7-8V5H3v7h4c0 3-1 5-4 5z",
                "M14 21c3 0 7-1 7-8V5h-7v7h4c0 3-1 5-4 5z",
            ],
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17L17 7"],
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::Check => &["M20 6L9 17l-5-5"],
            Icon::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4z"],
            Icon::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            Icon::Phone => &[
                "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1 1 .4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z",
            ],
            Icon::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1.1-.8 1.7-.2.6-.2 1.2-.2 1.8v4",
                "M9 18c-4.5 2-5-2-7-2",
            ],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            Icon::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4z",
                "M17.5 6.5h.01",
            ],
        }
    }

    pub fn view(self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", class)}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.paths().iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Icon; 25] = [
        Icon::Palette,
        Icon::Code,
        Icon::Sparkles,
        Icon::Layers,
        Icon::Zap,
        Icon::Globe,
        Icon::Target,
        Icon::Users,
        Icon::Heart,
        Icon::Award,
        Icon::Quote,
        Icon::ArrowUpRight,
        Icon::ArrowRight,
        Icon::Check,
        Icon::Send,
        Icon::Mail,
        Icon::MapPin,
        Icon::Phone,
        Icon::Clock,
        Icon::Menu,
        Icon::Close,
        Icon::Github,
        Icon::Twitter,
        Icon::Linkedin,
        Icon::Instagram,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for icon in ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{:?} has no paths", icon);
            assert!(paths.iter().all(|d| d.starts_with('M')), "{:?} path must start with a moveto", icon);
        }
    }

    #[test]
    fn all_lists_each_variant_once() {
        let unique: HashSet<Icon> = ALL.iter().copied().collect();
        assert_eq!(unique.len(), ALL.len());
    }
}
