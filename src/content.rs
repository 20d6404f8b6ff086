//! Copy and links shown on the page.

use crate::components::icon::Icon;

pub const BRAND: &str = "NovaIT";

/// Section ids. The page markup uses these as `id=` values and every
/// in-page link is built from them.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const STATISTICS: &str = "statistics";
    pub const WHY: &str = "why";
    pub const EXPERTISE: &str = "expertise";
    pub const WORK: &str = "work";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";

    pub fn href(anchor: &str) -> String {
        format!("#{}", anchor)
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Statistics", anchor: anchor::STATISTICS },
    NavLink { label: "Why Choose Us", anchor: anchor::WHY },
    NavLink { label: "Expertise", anchor: anchor::EXPERTISE },
    NavLink { label: "Work", anchor: anchor::WORK },
    NavLink { label: "Testimonials", anchor: anchor::TESTIMONIALS },
];

pub const FOOTER_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", anchor: anchor::HOME },
    NavLink { label: "Work", anchor: anchor::WORK },
    NavLink { label: "Contact", anchor: anchor::CONTACT },
];

/// Every anchor the page renders a section for.
pub const SECTION_ANCHORS: [&str; 7] = [
    anchor::HOME,
    anchor::STATISTICS,
    anchor::WHY,
    anchor::EXPERTISE,
    anchor::WORK,
    anchor::TESTIMONIALS,
    anchor::CONTACT,
];

#[derive(PartialEq)]
pub struct SectionCopy {
    pub kicker: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

pub struct HeroCopy {
    pub headline: &'static str,
    pub subline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub scroll_hint: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    headline: "We build delightful, scalable digital products.",
    subline: "From concept to launch, our team blends design, engineering, and strategy to ship software that users love.",
    primary_cta: "Start your project",
    secondary_cta: "See our work",
    scroll_hint: "Scroll to explore",
};

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS_SECTION: SectionCopy = SectionCopy {
    kicker: Some("By the numbers"),
    title: "Proven impact",
    subtitle: Some("We measure success by outcomes that matter."),
};

pub const STATS: [Stat; 4] = [
    Stat { value: "150+", label: "Projects delivered" },
    Stat { value: "98%", label: "Client satisfaction" },
    Stat { value: "5x", label: "Avg. ROI improvement" },
    Stat { value: "24/7", label: "Global support" },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_SECTION: SectionCopy = SectionCopy {
    kicker: Some("Why choose us"),
    title: "We ship with quality and speed",
    subtitle: Some("Strategy-led, design-driven, engineering-powered."),
};

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Shield,
        title: "Enterprise-grade security",
        description: "Best practices by default: SSO, encryption, audits.",
    },
    Feature {
        icon: Icon::Cpu,
        title: "Future-proof architecture",
        description: "Modern stacks, cloud-native, scalable from day one.",
    },
    Feature {
        icon: Icon::Clock,
        title: "On-time delivery",
        description: "Agile execution with transparent milestones.",
    },
    Feature {
        icon: Icon::Users,
        title: "Dedicated teams",
        description: "Product, design, and engineering under one roof.",
    },
    Feature {
        icon: Icon::Sparkles,
        title: "Delightful UX",
        description: "Micro-interactions and polish your users will notice.",
    },
    Feature {
        icon: Icon::Code,
        title: "Clean, tested code",
        description: "Maintainable codebases that last and scale.",
    },
];

pub struct ExpertiseBlock {
    pub title: &'static str,
    pub points: [&'static str; 3],
}

pub const EXPERTISE_SECTION: SectionCopy = SectionCopy {
    kicker: Some("Our expertise"),
    title: "From idea to production",
    subtitle: Some("Full-stack capabilities across web, mobile, and cloud."),
};

pub const EXPERTISE: [ExpertiseBlock; 3] = [
    ExpertiseBlock {
        title: "Product & Strategy",
        points: ["Discovery & research", "Roadmapping", "Analytics & insights"],
    },
    ExpertiseBlock {
        title: "Design & Frontend",
        points: ["Design systems", "React / Next.js", "Motion & accessibility"],
    },
    ExpertiseBlock {
        title: "Backend & Cloud",
        points: ["FastAPI / Node", "Databases & DevOps", "Observability"],
    },
];

pub struct Project {
    pub name: &'static str,
    pub tag: &'static str,
    pub image: &'static str,
}

pub const WORK_SECTION: SectionCopy = SectionCopy {
    kicker: Some("Work we have done"),
    title: "Selected projects",
    subtitle: Some("A snapshot of recent collaborations."),
};

pub const PROJECTS: [Project; 3] = [
    Project {
        name: "Fintech dashboard",
        tag: "Web app",
        image: "https://images.unsplash.com/photo-1551281044-8b89a9a5c064?q=80&w=1200&auto=format&fit=crop",
    },
    Project {
        name: "Healthcare portal",
        tag: "Platform",
        image: "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop",
    },
    Project {
        name: "AI analytics",
        tag: "Data",
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?q=80&w=1200&auto=format&fit=crop",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS_SECTION: SectionCopy = SectionCopy {
    kicker: Some("Testimonials"),
    title: "What our clients say",
    subtitle: None,
};

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alex Johnson",
        role: "VP, Growth at FinBank",
        quote: "They shipped a complex MVP in 8 weeks. The polish and performance exceeded expectations.",
    },
    Testimonial {
        name: "Priya Patel",
        role: "CTO, HealthHub",
        quote: "A true partner. Clear communication, strong engineering practices, and beautiful UX.",
    },
    Testimonial {
        name: "Marco Rossi",
        role: "Founder, DataWise",
        quote: "Their team elevated our product experience and set us up with a scalable architecture.",
    },
];

pub const CONTACT_SECTION: SectionCopy = SectionCopy {
    kicker: Some("Contact"),
    title: "Tell us about your project",
    subtitle: Some("We typically respond within one business day."),
};

pub struct ContactDetail {
    pub icon: Icon,
    pub text: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail { icon: Icon::Phone, text: "+1 (555) 123-4567" },
    ContactDetail { icon: Icon::Mail, text: "hello@novait.studio" },
    ContactDetail { icon: Icon::MapPin, text: "Remote • Global" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

// No public profiles yet; the links stay in-page.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Twitter", href: "#", icon: Icon::Twitter },
    SocialLink { label: "LinkedIn", href: "#", icon: Icon::Linkedin },
    SocialLink { label: "GitHub", href: "#", icon: Icon::Github },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_and_footer_point_at_rendered_sections() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()) {
            assert!(
                SECTION_ANCHORS.contains(&link.anchor),
                "{} links to missing section #{}",
                link.label,
                link.anchor
            );
        }
    }

    #[test]
    fn hrefs_target_the_section_ids() {
        assert_eq!(anchor::href(anchor::CONTACT), "#contact");
        for link in NAV_LINKS.iter() {
            assert_eq!(anchor::href(link.anchor), format!("#{}", link.anchor));
        }
    }

    #[test]
    fn section_anchors_are_unique() {
        for (i, a) in SECTION_ANCHORS.iter().enumerate() {
            assert!(!SECTION_ANCHORS[i + 1..].contains(a), "duplicate anchor {}", a);
        }
    }

    #[test]
    fn project_images_are_https() {
        for project in &PROJECTS {
            assert!(project.image.starts_with("https://"), "{}", project.name);
        }
    }

    #[test]
    fn contact_email_is_plausible() {
        let email = CONTACT_DETAILS
            .iter()
            .find(|detail| detail.icon == Icon::Mail)
            .map(|detail| detail.text)
            .unwrap();
        assert!(email.contains('@') && email.ends_with(".studio"));
    }
}
