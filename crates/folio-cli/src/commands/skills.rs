use anyhow::Result;

use folio_core::content::{filter_skills, CategoryFilter, SKILLS};

const BAR_WIDTH: usize = 30;

pub fn run(category: &str) -> Result<()> {
    let filter: CategoryFilter = category.parse()?;
    let skills = filter_skills(&SKILLS, filter);

    println!("Skills ({}, {}):\n", filter, skills.len());

    for skill in skills {
        let filled = BAR_WIDTH * skill.level as usize / 100;
        println!(
            "  {:<14} {}{} {:>3}%  [{}]",
            skill.name,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            skill.level,
            skill.category.as_str()
        );
    }

    Ok(())
}
