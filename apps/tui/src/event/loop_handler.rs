use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use portfolio_core::{distinct_skills, Navigator, Portfolio};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, handle_mouse, App, AppActions};
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Print portfolio statistics instead of drawing the UI.
pub async fn run_headless(actions: &AppActions, json: bool) -> Result<()> {
    let portfolio = actions.load_portfolio().await?;
    let stats = build_headless_stats(&portfolio);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }
    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nPortfolio Stats");
    println!("===============");
    println!("Total projects: {}", stats.total_projects);
    println!("Total skills: {}", stats.total_skills);
    println!("Distinct tools: {}", stats.distinct_tools);

    for group in &stats.groups {
        println!("\n{}:", group.title);
        for skill in &group.skills {
            println!(
                "- {} | {}% | {} | {} project(s)",
                skill.name, skill.value, skill.tier, skill.projects
            );
        }
    }

    if !stats.skills_without_projects.is_empty() {
        println!("\nSkills without projects:");
        for name in &stats.skills_without_projects {
            println!("- {name}");
        }
    }
}

fn build_headless_stats(portfolio: &Portfolio) -> HeadlessStats {
    let groups: Vec<HeadlessGroup> = portfolio
        .skill_groups
        .iter()
        .map(|group| HeadlessGroup {
            title: group.title.clone(),
            skills: group
                .skills
                .iter()
                .map(|skill| HeadlessSkill {
                    name: skill.name().to_string(),
                    value: skill.value(),
                    tier: skill.tier().label().to_string(),
                    projects: skill.project_ids().len(),
                })
                .collect(),
        })
        .collect();

    let skills_without_projects = portfolio
        .skill_groups
        .iter()
        .flat_map(|group| &group.skills)
        .filter(|skill| !skill.has_projects())
        .map(|skill| skill.name().to_string())
        .collect();

    HeadlessStats {
        total_projects: portfolio.catalog.len(),
        total_skills: groups.iter().map(|group| group.skills.len()).sum(),
        distinct_tools: distinct_skills(&portfolio.catalog).len(),
        groups,
        skills_without_projects,
    }
}

#[derive(Debug, serde::Serialize)]
struct HeadlessStats {
    total_projects: usize,
    total_skills: usize,
    distinct_tools: usize,
    groups: Vec<HeadlessGroup>,
    skills_without_projects: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessGroup {
    title: String,
    skills: Vec<HeadlessSkill>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessSkill {
    name: String,
    value: u8,
    tier: String,
    projects: usize,
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| color_eyre::eyre::eyre!("Terminal draw error: {e}"))?;

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            Event::Resize(_, _) => {
                log::debug!("terminal resized");
            }
            _ => {}
        }
    }
    log::info!("event=app_exit location={}", app.navigator.current());
    Ok(())
}
