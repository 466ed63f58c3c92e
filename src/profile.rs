/// Section anchors, shared by the nav bar and the sections themselves.
pub mod anchors {
    pub const ABOUT: &str = "about";
    pub const SERVICES: &str = "services";
    pub const SKILLS: &str = "skills";
    pub const CERTIFICATES: &str = "certificates";
    pub const CONTACT: &str = "contact";

    pub const ALL: &[&str] = &[ABOUT, SERVICES, SKILLS, CERTIFICATES, CONTACT];
}

/// Icon font classes used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Code,
    Cpu,
    Database,
    Globe,
    Layers,
    Mail,
    Smartphone,
    Terminal,
    Github,
    Linkedin,
    Facebook,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Award => "extra-award",
            Icon::Code => "extra-code",
            Icon::Cpu => "extra-cpu",
            Icon::Database => "extra-database",
            Icon::Globe => "extra-globe",
            Icon::Layers => "extra-layers",
            Icon::Mail => "extra-email",
            Icon::Smartphone => "extra-smartphone",
            Icon::Terminal => "extra-terminal",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Facebook => "devicon-facebook-plain",
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub struct SkillGroup {
    pub label: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub struct Principle {
    pub title: &'static str,
    pub blurb: &'static str,
    /// Tailwind opacity class for the accent bar.
    pub accent: &'static str,
}

pub const NAME: &str = "VINZON S. ARELLANO";
pub const EMAIL: &str = "arellanovinzon9@gmail.com";
pub const LOCATION: &str = "Asia plaza, Colon street, Cebu,City";
pub const PORTRAIT_URL: &str = "https://picsum.photos/seed/tech/800/800";
pub const SUMMARY: &str = "Software Development specializing in high-performance distributed systems and immersive web experiences. Bridging the gap between complex logic and human-centric design.";

/// Nav entries in page order; the last one is rendered as the call to action.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "/ABOUT",
        anchor: anchors::ABOUT,
    },
    NavLink {
        label: "/SERVICES",
        anchor: anchors::SERVICES,
    },
    NavLink {
        label: "/SKILLS",
        anchor: anchors::SKILLS,
    },
    NavLink {
        label: "/AWARDS",
        anchor: anchors::CERTIFICATES,
    },
    NavLink {
        label: "CONTACT_INIT",
        anchor: anchors::CONTACT,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/vinzon-arellano-474aaa27b/",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "Facebook Profile",
        href: "https://www.facebook.com/vinzon.salubre",
        icon: Icon::Facebook,
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Full-Stack Dev",
        description: "End-to-end application development using modern frameworks and scalable architectures.",
        icon: Icon::Globe,
    },
    Service {
        title: "System Design",
        description: "Architecting robust, distributed systems capable of handling millions of concurrent requests.",
        icon: Icon::Layers,
    },
    Service {
        title: "Cloud Solutions",
        description: "Optimizing infrastructure on AWS, GCP, and Azure for maximum performance and cost-efficiency.",
        icon: Icon::Database,
    },
    Service {
        title: "Mobile First",
        description: "Crafting high-performance native and cross-platform mobile applications for iOS and Android.",
        icon: Icon::Smartphone,
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "FRONTEND_CORE",
        icon: Icon::Terminal,
        skills: &[
            "React",
            "Angular",
            "TypeScript",
            "Tailwind",
            "Framer Motion",
            "Three.js",
            "Redux",
            "Vue",
        ],
    },
    SkillGroup {
        label: "BACKEND_INFRA",
        icon: Icon::Database,
        skills: &[
            "Node.js",
            "Python",
            "Go",
            "PostgreSQL",
            "Redis",
            "GraphQL",
            "Docker",
            "Kubernetes",
        ],
    },
];

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Performance First",
        blurb: "Every millisecond counts. I optimize for the critical path.",
        accent: "opacity-100",
    },
    Principle {
        title: "Clean Architecture",
        blurb: "Code is for humans first, machines second. Maintainability is key.",
        accent: "opacity-50",
    },
    Principle {
        title: "Security by Design",
        blurb: "Integrating security protocols at the foundation of every build.",
        accent: "opacity-30",
    },
    Principle {
        title: "Continuous Delivery",
        blurb: "Automated pipelines for reliable and rapid deployments.",
        accent: "opacity-10",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_targets_existing_sections() {
        for link in NAV_LINKS {
            assert!(
                anchors::ALL.contains(&link.anchor),
                "{} points at missing section {}",
                link.label,
                link.anchor
            );
        }
        let targets = NAV_LINKS.iter().map(|l| l.anchor).collect::<HashSet<_>>();
        assert_eq!(targets.len(), anchors::ALL.len());
    }

    #[test]
    fn test_content_tables() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PRINCIPLES.len(), 4);
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            let unique = group.skills.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), group.skills.len(), "{}", group.label);
        }
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }
}
