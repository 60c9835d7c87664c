use anyhow::Result;

use folio_core::content::PROJECTS;

pub fn run() -> Result<()> {
    println!("Projects ({}):\n", PROJECTS.len());

    for project in &PROJECTS {
        println!("  {}", project.title);
        println!("    {}", project.description);
        println!("    Tags: {}", project.tags.join(", "));
        if let Some(url) = project.github_url {
            println!("    GitHub: {}", url);
        }
        if let Some(url) = project.demo_url {
            println!("    Demo: {}", url);
        }
        println!();
    }

    Ok(())
}
