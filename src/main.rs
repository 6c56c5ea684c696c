use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;

use gantt_schedule_engine::engine::{build_model, ColorMode, TaskModel, ViewOptions};
use gantt_schedule_engine::io::{csv_import, snapshot};
use gantt_schedule_engine::model::{Granularity, Task};

/// Build a render-ready Gantt task model from a schedule CSV.
#[derive(Parser)]
#[command(name = "gantt-schedule", version, about = "Gantt schedule model builder")]
struct Cli {
    /// Schedule CSV (columns: task, project, type, start, finish;
    /// optional completion date and status).
    input: PathBuf,

    /// Time-axis bucketing: daily, weekly, monthly, quarterly, semiannual
    /// or yearly.
    #[arg(long, default_value = "daily")]
    granularity: Granularity,

    /// Only include tasks of these projects (repeatable).
    #[arg(long = "project")]
    projects: Vec<String>,

    /// Only include top-level parent tasks.
    #[arg(long)]
    parents_only: bool,

    /// Bar coloring for the renderer: project or status.
    #[arg(long, default_value = "project")]
    color_mode: ColorMode,

    /// Evaluation date for overdue / due-soon classification
    /// (defaults to the current local date).
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Write the finalized model as JSON to this path.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (rows, skipped) = match csv_import::read_rows(&cli.input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if skipped > 0 {
        eprintln!("Warning: {} unreadable row(s) skipped", skipped);
    }

    let options = ViewOptions {
        granularity: cli.granularity,
        projects: if cli.projects.is_empty() {
            None
        } else {
            Some(cli.projects.iter().cloned().collect::<BTreeSet<_>>())
        },
        parents_only: cli.parents_only,
        color_mode: cli.color_mode,
    };
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let model = build_model(&rows, &options, today);
    print_summary(&model, today);

    if let Some(path) = &cli.output {
        if let Err(e) = snapshot::save_model(&model, path) {
            eprintln!("Error: failed to write snapshot: {}", e);
            return ExitCode::FAILURE;
        }
        println!("\nModel written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn print_summary(model: &TaskModel, today: NaiveDate) {
    if model.is_empty() {
        println!("No tasks matched the current filter.");
        return;
    }

    println!("{} task(s), evaluated at {}", model.tasks.len(), today);
    if let Some(span) = model.span {
        println!("Span: {} .. {}", span.min_start, span.max_finish);
    }
    if model.ticks.is_empty() {
        println!(
            "Axis: {} (renderer-native ticks, format {})",
            model.granularity, model.tick_format
        );
    } else {
        println!(
            "Axis: {} ({} boundaries, {} .. {})",
            model.granularity,
            model.ticks.len(),
            model.ticks[0].label,
            model.ticks[model.ticks.len() - 1].label
        );
    }

    print_view("Due within 7 days", &model.due_soon);
    print_view("Overdue", &model.overdue);
}

fn print_view(title: &str, tasks: &[Task]) {
    println!("\n{}:", title);
    if tasks.is_empty() {
        println!("  (none)");
        return;
    }
    for task in tasks {
        let finish = task
            .finish
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let completed = task
            .completion_date
            .map(|d| format!(", completed {}", d))
            .unwrap_or_default();
        println!("  {} (finish {}{})", task.display_label(), finish, completed);
    }
}
