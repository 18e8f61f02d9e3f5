//! Static page content.
//!
//! Sections are presentational only; nothing here depends on theme state.

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Companies,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Companies,
        Section::Contact,
    ];

    /// Label shown in the header navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Companies => "Companies",
            Section::Contact => "Contact",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub availability: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    /// 0..=100
    pub level: u8,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Role {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    headline: "Full-stack developer building digital experiences",
    availability: "Available for opportunities",
    summary: "I build web applications end to end, from data models and APIs to \
              the interfaces people use every day. I care about fast pages, \
              accessible interfaces and code that stays easy to change.",
    email: "hello@example.com",
    links: &[
        ("GitHub", "https://github.com/"),
        ("LinkedIn", "https://www.linkedin.com/"),
    ],
};

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", category: "Frontend", level: 92 },
    Skill { name: "React", category: "Frontend", level: 88 },
    Skill { name: "HTML & CSS", category: "Frontend", level: 94 },
    Skill { name: "Node.js", category: "Backend", level: 90 },
    Skill { name: "Python", category: "Backend", level: 90 },
    Skill { name: "MongoDB", category: "Database", level: 88 },
    Skill { name: "Git", category: "Tools", level: 92 },
    Skill { name: "Figma", category: "Tools", level: 80 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Event Management System",
        description: "Event discovery, ticketing and an organizer dashboard with \
                      live registration tracking.",
        tech: &["Node.js", "Express", "MongoDB", "JWT"],
    },
    Project {
        title: "Expense Tracker",
        description: "Budgets, recurring expenses and monthly reports with charts.",
        tech: &["React", "Chart.js", "Firebase"],
    },
    Project {
        title: "Sentiment Classifier",
        description: "Text classification service exposing a small REST API.",
        tech: &["Python", "scikit-learn", "Flask"],
    },
];

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "Northwind Labs",
        position: "Developer & Consultant",
        period: "2023 - Present",
        highlights: &[
            "Built and customized ERP modules for client workflows",
            "Automated reporting that previously took a day per week",
        ],
    },
    Role {
        company: "Contoso Web Studio",
        position: "Web Development Apprentice",
        period: "2022 - 2023",
        highlights: &["Shipped responsive marketing sites and internal tools"],
    },
];

pub const COMPANIES: &[(&str, &str)] = &[
    ("Northwind Labs", "Developer & Consultant"),
    ("Contoso Web Studio", "Web Development Apprentice"),
    ("Fabrikam Support", "Technical Support"),
];

pub const FOOTER: &str = "Built with Rust and egui.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_every_section_has_nav_label() {
        for section in Section::ALL {
            assert!(!section.nav_label().is_empty());
        }
    }
}
