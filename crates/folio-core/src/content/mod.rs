pub mod catalog;
pub mod models;

pub use catalog::{
    ABOUT_HEADING, ABOUT_HIGHLIGHTS, CONTACT_HEADING, CONTACT_ITEMS, HERO_BADGES, PROFILE, PROJECTS,
    PROJECTS_HEADING, SKILLS, SKILLS_FOOTER, SKILLS_HEADING, SOCIAL_LINKS,
};
pub use models::{
    filter_skills, CategoryFilter, ContactItem, Heading, Highlight, LinkTarget, Profile, Project,
    SectionId, Skill, SkillCategory, SocialLink,
};
