//! Interactive board session.

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use projboard_core::dnd::DropOutcome;
use projboard_core::{Board, BoardConfig, BoardError, ProjectStatus};
use tracing::debug;

use crate::output;

const MENU: &[&str] = &["Add project", "Drag project", "Show board", "Quit"];

pub fn execute(config: &BoardConfig) -> Result<()> {
    let mut board = Board::new(config);

    println!();
    println!("  {} {}", "Projboard".cyan().bold(), "interactive session".bold());
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("What next?")
            .items(MENU)
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        match choice {
            0 => add_project(&mut board)?,
            1 => drag_project(&board)?,
            2 => output::print_board(&board),
            _ => break,
        }
        println!();
    }

    Ok(())
}

/// Prompt for the form fields until the project is accepted or the user gives up.
///
/// After a rejected submission the prompts start from the previous values.
fn add_project(board: &mut Board) -> Result<()> {
    loop {
        let title: String = Input::new()
            .with_prompt("Title")
            .with_initial_text(board.input().title())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read title")?;
        let description: String = Input::new()
            .with_prompt("Description")
            .with_initial_text(board.input().description())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read description")?;
        let people: String = Input::new()
            .with_prompt("People")
            .with_initial_text(board.input().people())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read team size")?;

        match board.submit(&title, &description, &people) {
            Ok(id) => {
                println!(
                    "{} Added project: {} ({})",
                    "✓".green().bold(),
                    title.cyan(),
                    output::short_id(id.as_str()).dimmed()
                );
                return Ok(());
            }
            Err(BoardError::InvalidInput(message)) => {
                output::print_alert(&message);
                let retry = Confirm::new()
                    .with_prompt("Edit and try again?")
                    .default(true)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !retry {
                    return Ok(());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Pick a card and a target column, then run the drag gesture.
fn drag_project(board: &Board) -> Result<()> {
    let projects = board.state().borrow().projects();
    if projects.is_empty() {
        println!("{}", "No projects to drag.".dimmed());
        return Ok(());
    }

    let labels: Vec<String> = projects
        .iter()
        .map(|p| format!("[{}] {} ({})", p.status, p.title, output::short_id(p.id.as_str())))
        .collect();
    let picked = Select::new()
        .with_prompt("Project")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read project choice")?;
    let project = &projects[picked];

    let targets: Vec<&str> = ProjectStatus::ALL.iter().map(|s| s.as_str()).collect();
    let default_target = ProjectStatus::ALL
        .iter()
        .position(|s| *s == project.status.flipped())
        .unwrap_or(0);
    let target = Select::new()
        .with_prompt("Drop on column")
        .items(&targets)
        .default(default_target)
        .interact()
        .context("Failed to read column choice")?;
    let target = ProjectStatus::ALL[target];

    match board.drag(&project.id, target) {
        Some(DropOutcome::Dropped) => {
            println!(
                "{} Dropped {} on {}",
                "✓".green().bold(),
                project.title.cyan(),
                target.heading().bold()
            );
            if let Some(moved) = board.state().borrow().get(&project.id) {
                output::print_project(moved);
            }
        }
        Some(DropOutcome::Rejected) => {
            println!("{} {} did not accept the drop", "✗".red(), target.heading());
        }
        None => {
            debug!(project_id = %project.id, "Picked project has no rendered card");
            println!("{}", "That project is not on the board.".dimmed());
        }
    }

    Ok(())
}
