//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use projboard_core::view::{ProjectItem, ProjectList};
use projboard_core::{Board, Project, ProjectStatus};
use unicode_width::UnicodeWidthStr;

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// First characters of an id, for display.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Column header, e.g. `ACTIVE PROJECTS 2`.
fn column_header_plain(column: &ProjectList, max_width: usize) -> String {
    let full = if column.is_empty() {
        column.heading()
    } else {
        format!("{} {}", column.heading(), column.len())
    };
    truncate_visual(&full, max_width)
}

fn column_header_colored(column: &ProjectList, max_width: usize) -> ColoredString {
    let label = column_header_plain(column, max_width);
    match column.status() {
        ProjectStatus::Active => label.yellow().bold(),
        ProjectStatus::Finished => label.green().bold(),
    }
}

/// The two display lines of a card, padded to `width`.
fn card_lines(item: &ProjectItem, status: ProjectStatus, width: usize) -> [String; 2] {
    let text_width = if width > 4 { width - 3 } else { 1 };
    let title = pad_right(&truncate_visual(item.title(), text_width), text_width);
    let meta = format!(
        "{} · {}",
        short_id(item.element_id().as_str()),
        item.persons_assigned()
    );
    let meta = pad_right(&truncate_visual(&meta, text_width), text_width);

    let first = match status {
        ProjectStatus::Active => format!("{} {}", "▪ ".yellow(), title.bold()),
        ProjectStatus::Finished => format!("{} {}", "✓ ".green(), title.green().dimmed()),
    };
    [first, format!("   {}", meta.dimmed())]
}

/// Print the board.
pub fn print_board(board: &Board) {
    let total: usize = board.columns().iter().map(|c| c.len()).sum();

    if total == 0 {
        println!("{}", "No projects yet. Add one to get started.".dimmed());
        return;
    }

    let width = term_width();
    if width < 60 {
        print_board_compact(board);
    } else {
        print_board_wide(board, width);
    }
}

/// Columns side by side.
fn print_board_wide(board: &Board, term_w: usize) {
    let columns = board.columns();
    let num_cols = columns.len();
    let available = if term_w > num_cols + 1 { term_w - num_cols - 1 } else { num_cols * 10 };
    let col_width = (available / num_cols).clamp(16, 40);

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = (0..num_cols).map(|_| "─".repeat(col_width)).collect();
        println!("{}", format!("{}{}{}", left, segments.join(mid), right).dimmed());
    };

    // ── Header ──
    rule("┌", "┬", "┐");
    print!("{}", "│".dimmed());
    for (i, column) in columns.iter().enumerate() {
        let header = column_header_colored(column, col_width);
        let header_width = UnicodeWidthStr::width(column_header_plain(column, col_width).as_str());
        let padding = col_width.saturating_sub(header_width);
        let left_pad = padding / 2;
        print!("{}{}{}", " ".repeat(left_pad), header, " ".repeat(padding - left_pad));
        if i < num_cols - 1 {
            print!("{}", "│".dimmed());
        }
    }
    println!("{}", "│".dimmed());
    rule("├", "┼", "┤");

    // ── Cards ──
    let rendered: Vec<Vec<ProjectItem>> = columns.iter().map(|c| c.items()).collect();
    let max_cards = rendered.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..max_cards {
        for line in 0..2 {
            print!("{}", "│".dimmed());
            for (ci, column) in columns.iter().enumerate() {
                match rendered[ci].get(row) {
                    Some(item) => {
                        let lines = card_lines(item, column.status(), col_width);
                        print!("{}", lines[line]);
                    }
                    None => print!("{}", " ".repeat(col_width)),
                }
                if ci < num_cols - 1 {
                    print!("{}", "│".dimmed());
                }
            }
            println!("{}", "│".dimmed());
        }
    }

    // ── Footer ──
    rule("└", "┴", "┘");

    let total: usize = rendered.iter().map(Vec::len).sum();
    let finished = board.column(ProjectStatus::Finished).len();
    println!(
        " {} {} projects {} {} finished ({}%)",
        "■".cyan(),
        total.to_string().bold(),
        "·".dimmed(),
        finished.to_string().green(),
        (finished * 100) / total.max(1)
    );
}

/// Vertical layout for narrow terminals.
fn print_board_compact(board: &Board) {
    println!("{}", " PROJECT BOARD ".on_blue().white().bold());
    println!();

    for column in board.columns() {
        println!(" {} {}", "▸".dimmed(), column_header_colored(column, 30));
        for item in column.items() {
            println!(
                "   {} {} {}",
                item.title(),
                item.persons_assigned().dimmed(),
                short_id(item.element_id().as_str()).dimmed()
            );
        }
        println!();
    }
}

/// Print a single project.
pub fn print_project(project: &Project) {
    println!(
        "{} {}",
        project.title.cyan().bold(),
        format!("({})", project.id).dimmed()
    );
    println!("{}", project.description);
    println!("{}: {} assigned", "Team".bold(), project.persons_label());
    println!("{}: {}", "Status".bold(), project.status.as_str().yellow());
}

/// Print a blocking alert.
pub fn print_alert(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}
