//! Static portfolio content, fixed at build time

use super::models::{
    ContactItem, Heading, Highlight, Profile, Project, SkillCategory::*, Skill, SocialLink,
};

pub static PROFILE: Profile = Profile {
    first_name: "Pranav",
    last_name: "Mishra",
    tagline: "Learning, building, and growing as a developer, one project at a time.",
    availability: "Open to work",
    headline: "Aspiring Full-Stack Developer & Tech Enthusiast",
    bio: &[
        "I'm a passionate developer exploring the world of web development and AI. \
         I love building projects that solve real-world problems while continuously \
         expanding my technical skills and knowledge.",
        "My journey in tech is driven by curiosity and a strong desire to learn. \
         I believe in learning by doing, which is why I'm always working on new \
         projects to apply and expand my skills.",
    ],
    resume_path: "/projects/Pranav_resume (9).pdf",
    resume_download_name: "Pranav_Mishra_Resume.pdf",
};

/// Badges under the hero tagline
pub static HERO_BADGES: [&str; 3] = ["Full Stack", "AI/ML", "Cloud"];

pub static ABOUT_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Web Development",
        description: "Building responsive and interactive web applications using modern \
                      JavaScript frameworks and libraries.",
    },
    Highlight {
        title: "Problem Solving",
        description: "Breaking down complex problems into smaller, manageable components \
                      and finding efficient solutions.",
    },
    Highlight {
        title: "Continuous Learning",
        description: "Committed to continuous improvement and staying updated with the \
                      latest technologies and best practices.",
    },
];

pub static ABOUT_HEADING: Heading = Heading {
    lead: "About",
    rest: "Me",
    subtitle: "A passionate developer on a journey to create meaningful digital experiences",
};

pub static PROJECTS_HEADING: Heading = Heading {
    lead: "Featured",
    rest: "Projects",
    subtitle: "Each project is a unique challenge that helped me grow as a developer.",
};

pub static SKILLS_HEADING: Heading = Heading {
    lead: "My",
    rest: "Skills",
    subtitle: "Technologies and tools I work with to bring ideas to life",
};

/// Closing line under the skills grid
pub static SKILLS_FOOTER: &str = "Always learning and exploring new technologies";

pub static CONTACT_HEADING: Heading = Heading {
    lead: "Get In",
    rest: "Touch",
    subtitle: "Have a project in mind or want to collaborate? I'm always excited to work on \
               new ideas and opportunities.",
};

pub static SKILLS: [Skill; 15] = [
    Skill { name: "HTML/CSS", level: 95, category: Frontend },
    Skill { name: "JavaScript", level: 90, category: Frontend },
    Skill { name: "React", level: 90, category: Frontend },
    Skill { name: "TypeScript", level: 85, category: Frontend },
    Skill { name: "Tailwind CSS", level: 90, category: Frontend },
    Skill { name: "Next.js", level: 80, category: Frontend },
    Skill { name: "Node.js", level: 80, category: Backend },
    Skill { name: "Express", level: 75, category: Backend },
    Skill { name: "MongoDB", level: 70, category: Backend },
    Skill { name: "PostgreSQL", level: 65, category: Backend },
    Skill { name: "GraphQL", level: 60, category: Backend },
    Skill { name: "Git/GitHub", level: 90, category: Tools },
    Skill { name: "Docker", level: 70, category: Tools },
    Skill { name: "Figma", level: 85, category: Tools },
    Skill { name: "VS Code", level: 95, category: Tools },
];

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Sahara - AI Mental Wellness Companion",
        description: "A comprehensive mental wellness platform featuring an AI companion, \
                      mood tracking, journaling, and stress-relief games. Built with modern \
                      web technologies to provide accessible mental health support.",
        image_path: "/projects/project1.png",
        tags: &["React", "Node.js", "AI/ML", "MongoDB", "TailwindCSS"],
        demo_url: Some("https://saharaindia.vercel.app/"),
        github_url: None,
    },
    Project {
        id: 2,
        title: "Knowledge Weaver (Adobe Hackathon)",
        description: "An intelligent document processing system with AI-powered analysis and \
                      content enhancement capabilities. Features include document \
                      understanding, content summarization, and interactive Q&A. Built for \
                      the Adobe Connecting Dots Challenge.",
        image_path: "/projects/project2.png",
        tags: &["Python", "NLP", "AI/ML", "PDF Processing", "Data Extraction"],
        demo_url: None,
        github_url: Some("https://github.com/prnvmishra/adobe-connecting-dots-challenge"),
    },
    Project {
        id: 3,
        title: "Portfolio Analyzer (1st Place CSI Competition)",
        description: "A prompt-based web application that analyzes and visualizes portfolio \
                      data. Won 1st place in college CSI competition for innovative \
                      implementation and user experience.",
        image_path: "/projects/project3.png",
        tags: &["Web Development", "Data Visualization", "JavaScript"],
        demo_url: Some("https://csi-p1-yk4i.vercel.app/"),
        github_url: Some("https://github.com/prnvmishra/CSI-P1"),
    },
    Project {
        id: 4,
        title: "Personal Portfolio Website",
        description: "A modern, responsive portfolio website built with React and Tailwind \
                      CSS. Features a clean design, project showcase, and contact form. \
                      Demonstrates frontend development skills and UI/UX design principles.",
        image_path: "/projects/project4.png",
        tags: &["React", "Tailwind CSS", "Vite", "Responsive Design"],
        demo_url: Some("https://parnav-port-qv1c.vercel.app/"),
        github_url: Some("https://github.com/prnvmishra/PranavPortfolio"),
    },
];

pub static CONTACT_ITEMS: [ContactItem; 3] = [
    ContactItem {
        title: "Email",
        value: "pvmishra2004@gmail.com",
        href: "mailto:pvmishra2004@gmail.com",
    },
    // Placeholder number; nothing depends on its value
    ContactItem {
        title: "Phone",
        value: "+91 XXXXXXXXXX",
        href: "tel:+91XXXXXXXXXX",
    },
    ContactItem {
        title: "Location",
        value: "Mumbai, India",
        href: "#",
    },
];

pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/pranav-mishra-9a75a8320/",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/prnvmishra",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{filter_skills, CategoryFilter, SkillCategory};

    #[test]
    fn test_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_filter_backend_returns_exactly_backend() {
        let backend = filter_skills(&SKILLS, CategoryFilter::Only(SkillCategory::Backend));
        let names: Vec<_> = backend.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Node.js", "Express", "MongoDB", "PostgreSQL", "GraphQL"]
        );
        assert!(backend.iter().all(|s| s.category == SkillCategory::Backend));
    }

    #[test]
    fn test_filter_all_preserves_order() {
        let all = filter_skills(&SKILLS, CategoryFilter::All);
        assert_eq!(all.len(), SKILLS.len());
        for (filtered, original) in all.iter().zip(SKILLS.iter()) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn test_dead_links_are_absent() {
        assert!(PROJECTS[0].github_url.is_none());
        assert!(PROJECTS[1].demo_url.is_none());
        assert_eq!(PROJECTS[0].preview_tags().len(), 3);
        assert_eq!(PROJECTS[2].primary_tag(), Some("Web Development"));
    }
}
