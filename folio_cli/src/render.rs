//! Plain-text rendering of panels for the terminal.
//!
//! Every function returns a `String` so output can be checked in tests
//! without capturing stdout.

use std::fmt::Write;

use folio_core::{ContactLink, Footer, NavigationState, Panel, Profile, Project, Section, Skill, TimelineEntry};

const RULE: &str = "═══════════════════════════════════════";

/// Header: name, title and the navigation bar with the active section marked
pub fn render_header(profile: &Profile, nav: &NavigationState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", profile.title);
    let _ = writeln!(out);

    let labels: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| {
            if nav.is_active(section) {
                format!("[{}]", section.label())
            } else {
                format!(" {} ", section.label())
            }
        })
        .collect();
    let _ = writeln!(out, "{}", labels.join("  "));
    let _ = writeln!(out, "{}", RULE);
    out
}

/// Body of one panel
pub fn render_panel(panel: Panel<'_>) -> String {
    let heading = panel.heading().unwrap_or_default();
    match panel {
        Panel::About(profile) => render_about(heading, profile),
        Panel::Projects(projects) => render_projects(projects),
        Panel::Experience(entries) | Panel::Education(entries) => render_timeline(heading, entries),
        Panel::Skills(skills) => render_skills(heading, skills),
    }
}

fn render_about(heading: &str, profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", profile.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{} | {}", profile.email, profile.location);
    out
}

fn render_projects(projects: &[Project]) -> String {
    let mut out = String::new();
    for project in projects {
        let _ = writeln!(out, "■ {}", project.title);
        let _ = writeln!(out, "  {}", project.description);
        let tags: Vec<String> = project.technologies.iter().map(|t| format!("[{}]", t)).collect();
        let _ = writeln!(out, "  {}", tags.join(" "));
        let _ = writeln!(out);
    }
    out
}

fn render_skills(heading: &str, skills: &[Skill]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out);
    for skill in skills {
        let _ = writeln!(
            out,
            "  {:<4} {:<16} {:>3}%",
            skill.icon.symbol(),
            skill.name,
            skill.proficiency
        );
    }
    out
}

fn render_timeline(heading: &str, entries: &[TimelineEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading);
    for entry in entries {
        let _ = writeln!(out);
        let _ = writeln!(out, "│ {}", entry.heading);
        let _ = writeln!(out, "│ {}", entry.subtitle());
        for highlight in &entry.highlights {
            let _ = writeln!(out, "│   • {}", highlight);
        }
    }
    out
}

/// Footer: links and copyright notice
pub fn render_footer(footer: &Footer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let links: Vec<String> = footer.links.iter().map(render_link).collect();
    let _ = writeln!(out, "{}", links.join("   "));
    let _ = writeln!(out, "{}", footer.notice());
    out
}

fn render_link(link: &ContactLink) -> String {
    format!("{} <{}>", link.label, link.href)
}
