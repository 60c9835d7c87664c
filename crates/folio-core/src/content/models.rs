use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Portfolio sections in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Anchor name used by in-page links (`#projects`)
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a percentage, 0 to 100
    pub level: u8,
    pub category: SkillCategory,
}

/// Active filter on the skills grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    /// Button order in the skills section
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(SkillCategory::Frontend),
        CategoryFilter::Only(SkillCategory::Backend),
        CategoryFilter::Only(SkillCategory::Tools),
    ];

    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => skill.category == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            CategoryFilter::Only(SkillCategory::Frontend) => "💻",
            CategoryFilter::Only(SkillCategory::Backend) => "⚙️",
            CategoryFilter::Only(SkillCategory::Tools) => "🛠️",
            CategoryFilter::All => "🌟",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "frontend" => Ok(CategoryFilter::Only(SkillCategory::Frontend)),
            "backend" => Ok(CategoryFilter::Only(SkillCategory::Backend)),
            "tools" => Ok(CategoryFilter::Only(SkillCategory::Tools)),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Skills matching `filter`, in table order
pub fn filter_skills(skills: &[Skill], filter: CategoryFilter) -> Vec<&Skill> {
    skills.iter().filter(|s| filter.matches(s)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Project {
    /// Tag shown in the card footer
    pub fn primary_tag(&self) -> Option<&'static str> {
        self.tags.first().copied()
    }

    /// Tags shown on the preview overlay
    pub fn preview_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(3)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem {
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Section title split into its accented lead word and the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub lead: &'static str,
    pub rest: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub headline: &'static str,
    pub bio: &'static [&'static str],
    pub resume_path: &'static str,
    pub resume_download_name: &'static str,
}

/// Where a link leads once followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page anchor
    Section(SectionId),
    /// URL handed to the system opener (http, mailto, tel)
    External(String),
    /// Static asset path relative to the assets directory
    Asset(String),
}

impl LinkTarget {
    /// Interpret an href the way the page does; `"#"` is a dead link
    pub fn parse(href: &str) -> Option<Self> {
        let href = href.trim();
        if href.is_empty() || href == "#" {
            return None;
        }
        if let Some(anchor) = href.strip_prefix('#') {
            return SectionId::from_anchor(anchor).map(LinkTarget::Section);
        }
        if href.contains(':') {
            return Some(LinkTarget::External(href.to_string()));
        }
        Some(LinkTarget::Asset(href.trim_start_matches('/').to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_and_anchors() {
        assert_eq!(SectionId::Hero.next(), Some(SectionId::About));
        assert_eq!(SectionId::Contact.next(), None);
        assert_eq!(SectionId::Hero.prev(), None);
        assert_eq!(SectionId::from_anchor("#skills"), Some(SectionId::Skills));
        assert_eq!(SectionId::from_anchor("nowhere"), None);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Backend".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(SkillCategory::Backend)
        );
        assert!(matches!(
            "design".parse::<CategoryFilter>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_filter_cycles() {
        let mut filter = CategoryFilter::All;
        for _ in 0..CategoryFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(
            CategoryFilter::All.prev(),
            CategoryFilter::Only(SkillCategory::Tools)
        );
    }

    #[test]
    fn test_link_target_parse() {
        assert_eq!(LinkTarget::parse("#"), None);
        assert_eq!(
            LinkTarget::parse("#contact"),
            Some(LinkTarget::Section(SectionId::Contact))
        );
        assert_eq!(
            LinkTarget::parse("mailto:someone@example.com"),
            Some(LinkTarget::External("mailto:someone@example.com".to_string()))
        );
        assert_eq!(
            LinkTarget::parse("/projects/resume.pdf"),
            Some(LinkTarget::Asset("projects/resume.pdf".to_string()))
        );
    }
}
