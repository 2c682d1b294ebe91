//! Scripted walkthrough of a board.

use anyhow::Result;
use colored::Colorize;
use projboard_core::{Board, BoardConfig, BoardError, ProjectStatus};

use crate::output;

const SAMPLE_PROJECTS: &[(&str, &str, &str)] = &[
    ("Build API", "Design the API", "3"),
    ("Write docs", "Document every endpoint", "2"),
    ("Load test", "Find the breaking point", "4"),
];

pub fn execute(config: &BoardConfig) -> Result<()> {
    let mut board = Board::new(config);

    let mut ids = Vec::with_capacity(SAMPLE_PROJECTS.len());
    for (title, description, people) in SAMPLE_PROJECTS {
        let id = board.submit(title, description, people)?;
        println!(
            "{} Added project: {} ({})",
            "✓".green().bold(),
            title.cyan(),
            output::short_id(id.as_str()).dimmed()
        );
        ids.push(id);
    }

    // A team of nine is outside the allowed range.
    match board.submit("Rewrite everything", "From scratch", "9") {
        Err(BoardError::InvalidInput(message)) => output::print_alert(&message),
        Err(e) => return Err(e.into()),
        Ok(id) => anyhow::bail!("oversized team was accepted as {}", id),
    }

    println!();
    output::print_board(&board);
    println!();

    if let Some(first) = ids.first() {
        board.drag(first, ProjectStatus::Finished);
        println!(
            "{} Dragged {} to {}",
            "✓".green().bold(),
            SAMPLE_PROJECTS[0].0.cyan(),
            ProjectStatus::Finished.heading().bold()
        );
        println!();
        output::print_board(&board);
    }

    Ok(())
}
