//! Fixed site copy. Components render these tables in order.

use crate::animation::count_up::CounterSpec;
use crate::icons::Icon;
use crate::Route;

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub year: &'static str,
    /// CSS gradient laid over the cover image.
    pub tint: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Nebula Finance",
        category: "Web App",
        description: "A cutting-edge fintech platform revolutionizing how users manage their digital assets with real-time analytics and AI-powered insights.",
        image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=800&h=600&fit=crop",
        year: "2024",
        tint: "linear-gradient(to top, rgba(139, 92, 246, 0.2), rgba(168, 85, 247, 0.2), transparent)",
    },
    Project {
        title: "Echo Studios",
        category: "Brand Identity",
        description: "Complete brand overhaul for a leading audio production company, including logo design, visual identity, and comprehensive brand guidelines.",
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&h=600&fit=crop",
        year: "2024",
        tint: "linear-gradient(to top, rgba(236, 72, 153, 0.2), rgba(244, 63, 94, 0.2), transparent)",
    },
    Project {
        title: "Quantum Labs",
        category: "Website",
        description: "An immersive website experience for a quantum computing startup, featuring 3D visualizations and interactive data presentations.",
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=600&fit=crop",
        year: "2023",
        tint: "linear-gradient(to top, rgba(59, 130, 246, 0.2), rgba(6, 182, 212, 0.2), transparent)",
    },
    Project {
        title: "Aurora App",
        category: "Mobile App",
        description: "A wellness and meditation app with personalized journeys, sleep stories, and biometric integration for holistic health tracking.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        year: "2023",
        tint: "linear-gradient(to top, rgba(16, 185, 129, 0.2), rgba(20, 184, 166, 0.2), transparent)",
    },
    Project {
        title: "Velocity Motors",
        category: "E-Commerce",
        description: "A premium automotive marketplace with immersive 360° vehicle tours and streamlined purchasing experience.",
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?w=800&h=600&fit=crop",
        year: "2023",
        tint: "linear-gradient(to top, rgba(249, 115, 22, 0.2), rgba(239, 68, 68, 0.2), transparent)",
    },
    Project {
        title: "Synth Records",
        category: "Platform",
        description: "A music distribution platform connecting independent artists with global audiences through innovative streaming technology.",
        image: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=800&h=600&fit=crop",
        year: "2022",
        tint: "linear-gradient(to top, rgba(99, 102, 241, 0.2), rgba(139, 92, 246, 0.2), transparent)",
    },
];

/// How many projects the home page teases.
pub const FEATURED_PROJECTS: usize = 4;

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    /// Shorter title used on the home grid.
    pub short_title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Palette,
        title: "Brand Identity",
        short_title: "Brand Identity",
        description: "Crafting visual languages that resonate with your audience and stand the test of time.",
        features: ["Logo Design", "Brand Guidelines", "Visual Identity", "Brand Strategy"],
        accent: "linear-gradient(135deg, #ec4899, #f43f5e)",
    },
    Service {
        icon: Icon::Code,
        title: "Web Development",
        short_title: "Web Development",
        description: "Building performant, accessible, and beautiful digital experiences from the ground up.",
        features: ["Custom Websites", "Web Applications", "E-Commerce", "CMS Integration"],
        accent: "linear-gradient(135deg, #3b82f6, #06b6d4)",
    },
    Service {
        icon: Icon::Sparkles,
        title: "Motion Design",
        short_title: "Motion Design",
        description: "Breathing life into static designs with captivating animations and micro-interactions.",
        features: ["UI Animations", "Video Production", "3D Motion", "Interactive Experiences"],
        accent: "linear-gradient(135deg, #8b5cf6, #a855f7)",
    },
    Service {
        icon: Icon::Layers,
        title: "UI/UX Design",
        short_title: "UI/UX Design",
        description: "Designing intuitive interfaces that delight users and drive meaningful engagement.",
        features: ["User Research", "Wireframing", "Prototyping", "Usability Testing"],
        accent: "linear-gradient(135deg, #10b981, #14b8a6)",
    },
    Service {
        icon: Icon::Zap,
        title: "Performance Optimization",
        short_title: "Performance",
        description: "Optimizing every millisecond to deliver blazing-fast experiences that users love.",
        features: ["Speed Audits", "Core Web Vitals", "CDN Setup", "Caching Strategies"],
        accent: "linear-gradient(135deg, #f59e0b, #f97316)",
    },
    Service {
        icon: Icon::Globe,
        title: "Digital Strategy",
        short_title: "Digital Strategy",
        description: "Developing comprehensive strategies that align technology with business goals.",
        features: ["Market Research", "Competitor Analysis", "Growth Planning", "ROI Optimization"],
        accent: "linear-gradient(135deg, #6366f1, #8b5cf6)",
    },
];

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep { step: "01", title: "Discovery", description: "We dive deep into understanding your vision, goals, and target audience." },
    ProcessStep { step: "02", title: "Strategy", description: "We craft a comprehensive roadmap tailored to achieve your objectives." },
    ProcessStep { step: "03", title: "Design", description: "Our creative team brings ideas to life with stunning visual concepts." },
    ProcessStep { step: "04", title: "Development", description: "We build robust, scalable solutions using cutting-edge technologies." },
    ProcessStep { step: "05", title: "Launch", description: "We deploy your project and ensure a smooth, successful launch." },
    ProcessStep { step: "06", title: "Growth", description: "We continue to optimize and evolve your digital presence." },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alexandra Chen",
        role: "Founder & CEO",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
        bio: "Visionary leader with 15+ years shaping digital experiences.",
    },
    TeamMember {
        name: "Marcus Williams",
        role: "Creative Director",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        bio: "Award-winning designer pushing creative boundaries.",
    },
    TeamMember {
        name: "Elena Rodriguez",
        role: "Head of Technology",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        bio: "Tech innovator building scalable solutions.",
    },
    TeamMember {
        name: "David Park",
        role: "Lead Developer",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        bio: "Full-stack expert crafting seamless experiences.",
    },
    TeamMember {
        name: "Sarah Mitchell",
        role: "UX Director",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=400&fit=crop",
        bio: "Human-centered design advocate and researcher.",
    },
    TeamMember {
        name: "James Thompson",
        role: "Motion Designer",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop",
        bio: "Bringing brands to life through animation.",
    },
];

pub struct Value {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        icon: Icon::Target,
        title: "Excellence",
        description: "We pursue perfection in every pixel, every line of code, and every interaction we create.",
    },
    Value {
        icon: Icon::Users,
        title: "Collaboration",
        description: "Great work is born from great partnerships. We work alongside our clients as true partners.",
    },
    Value {
        icon: Icon::Heart,
        title: "Passion",
        description: "We're driven by an unwavering love for what we do and the impact we create.",
    },
    Value {
        icon: Icon::Award,
        title: "Innovation",
        description: "We constantly push boundaries, exploring new technologies and creative approaches.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Working with this team transformed our entire digital presence. Their attention to detail and creative vision exceeded all expectations.",
        author: "Sarah Chen",
        role: "CEO, TechVentures",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
    },
    Testimonial {
        quote: "The most innovative and collaborative agency we've ever worked with. They don't just build websites, they craft experiences.",
        author: "Marcus Williams",
        role: "Creative Director, Artisan Co",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
    },
    Testimonial {
        quote: "Their strategic approach combined with flawless execution helped us achieve a 300% increase in user engagement.",
        author: "Elena Rodriguez",
        role: "VP Marketing, GlobalScale",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
    },
];

pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const OFFICES: &[Office] = &[
    Office {
        city: "San Francisco",
        address: "548 Market St, Suite 35000",
        phone: "+1 (555) 123-4567",
        email: "sf@studio.com",
    },
    Office {
        city: "London",
        address: "1 Canada Square, Canary Wharf",
        phone: "+44 20 7946 0958",
        email: "london@studio.com",
    },
    Office {
        city: "Tokyo",
        address: "1-1-2 Otemachi, Chiyoda",
        phone: "+81 3-1234-5678",
        email: "tokyo@studio.com",
    },
];

pub struct Channel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const QUICK_CONTACT: &[Channel] = &[
    Channel { icon: Icon::Mail, label: "Email", value: "hello@studio.com" },
    Channel { icon: Icon::Phone, label: "Phone", value: "+1 (555) 123-4567" },
    Channel { icon: Icon::Clock, label: "Business Hours", value: "Mon - Fri: 9AM - 6PM PST" },
];

pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub fn counter(&self) -> CounterSpec {
        CounterSpec::new(self.target, self.suffix)
    }
}

pub const STATS: &[Stat] = &[
    Stat { target: 150, suffix: "+", label: "Projects Delivered" },
    Stat { target: 98, suffix: "%", label: "Client Satisfaction" },
    Stat { target: 12, suffix: "", label: "Years of Excellence" },
    Stat { target: 45, suffix: "+", label: "Team Members" },
];

/// Links shown in the navigation bar, in order.
pub const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Work, "Work"),
    (Route::Services, "Services"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

pub const FOOTER_COMPANY: &[&str] = &["About", "Careers", "Blog", "Press"];
pub const FOOTER_SERVICES: &[&str] = &["Web Design", "Development", "Branding", "Marketing"];
pub const SOCIAL: &[Icon] = &[Icon::Github, Icon::Twitter, Icon::Linkedin, Icon::Instagram];

/// Budget select options as (value, label). The empty value is the placeholder.
pub const BUDGETS: &[(&str, &str)] = &[
    ("", "Select budget"),
    ("10k-25k", "$10k - $25k"),
    ("25k-50k", "$25k - $50k"),
    ("50k-100k", "$50k - $100k"),
    ("100k+", "$100k+"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_teaser_is_a_prefix_of_the_portfolio() {
        assert!(FEATURED_PROJECTS <= PROJECTS.len());
        assert_eq!(PROJECTS[0].title, "Nebula Finance");
    }

    #[test]
    fn stats_become_counters() {
        let spec = STATS[0].counter();
        assert_eq!(spec.target, 150);
        assert_eq!(spec.suffix, "+");
        assert_eq!(spec.steps, crate::config::COUNT_UP_STEPS);
    }

    #[test]
    fn budget_placeholder_comes_first() {
        assert_eq!(BUDGETS[0].0, "");
        assert_eq!(BUDGETS.len(), 5);
    }
}
