//! # Suite Placement CLI
//!
//! Generates a building layout from a project file or command-line flags and
//! prints each floor plus the suite summary table.
//!
//! Usage:
//!   suite_cli                                  Default envelope and mix
//!   suite_cli --project tower.json             Load a project document
//!   suite_cli --width 60 --mix 20,40,30,10     Override envelope / mix
//!   suite_cli --json                           Emit layout + summary as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use suite_core::catalog::{Row, SuiteType};
use suite_core::layout::{generate, BuildingLayout};
use suite_core::placer::{FloorPlan, ModuleSlot};
use suite_core::project::Project;
use suite_core::summary::{summarize, LayoutSummary, SummaryRow};
use suite_core::units::Meters;
use suite_core::{LayoutError, LayoutResult};

#[derive(Parser, Debug)]
#[command(name = "suite_cli", version, about = "Modular building suite placement")]
struct Args {
    /// Project document (JSON) to start from
    #[arg(long)]
    project: Option<PathBuf>,

    /// Building width in meters
    #[arg(long)]
    width: Option<f64>,

    /// Building height in meters
    #[arg(long)]
    height: Option<f64>,

    /// Floor-to-floor height in meters (3.048, 3.175 or 3.3528)
    #[arg(long)]
    floor_height: Option<f64>,

    /// Leave stair cores out of the summary
    #[arg(long)]
    no_stairs: bool,

    /// Suite mix as studio,one-bed,two-bed,three-bed percentages
    #[arg(long, value_delimiter = ',')]
    mix: Option<Vec<f64>>,

    /// Print layout and summary as JSON
    #[arg(long)]
    json: bool,

    /// Run even if the envelope or mix fails validation
    #[arg(long)]
    skip_validation: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    layout: &'a BuildingLayout,
    summary: &'a LayoutSummary,
}

fn load_project(args: &Args) -> LayoutResult<Project> {
    let mut project = match &args.project {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                LayoutError::invalid_input("project", path.display().to_string(), e.to_string())
            })?;
            Project::from_json(&json)?
        }
        None => Project::new("CLI"),
    };

    let mut parameters = project.parameters;
    if let Some(width) = args.width {
        parameters.width = Meters(width);
    }
    if let Some(height) = args.height {
        parameters.height = Meters(height);
    }
    if let Some(floor_height) = args.floor_height {
        parameters.floor_height = Meters(floor_height);
    }
    if args.no_stairs {
        parameters.include_stairs = false;
    }
    project.set_parameters(parameters);

    if let Some(values) = &args.mix {
        if values.len() != SuiteType::ALL.len() {
            return Err(LayoutError::invalid_input(
                "mix",
                format!("{:?}", values),
                "Expected four percentages: studio,one-bed,two-bed,three-bed",
            ));
        }
        let mut mix = project.mix;
        for (suite, pct) in [
            SuiteType::Studio,
            SuiteType::OneBed,
            SuiteType::TwoBed,
            SuiteType::ThreeBed,
        ]
        .into_iter()
        .zip(values.iter().copied())
        {
            mix.set(suite, pct);
        }
        project.set_mix(mix);
    }

    if !args.skip_validation {
        project.validate()?;
    }
    Ok(project)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let project = match load_project(&args) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    log::debug!("project '{}' ({})", project.meta.name, project.meta.id);
    let layout = generate(&project.parameters, &project.mix);
    let summary = summarize(&layout);

    if args.json {
        let output = JsonReport {
            layout: &layout,
            summary: &summary,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print_report(&layout, &summary);
    ExitCode::SUCCESS
}

fn print_report(layout: &BuildingLayout, summary: &LayoutSummary) {
    let params = layout.parameters();
    let capacity = layout.capacity();

    println!("═══════════════════════════════════════");
    println!("  SUITE LAYOUT");
    println!("═══════════════════════════════════════");
    println!();
    println!("Envelope:");
    println!("  Width:        {:.2} m", params.width.0);
    println!("  Height:       {:.2} m", params.height.0);
    println!("  Floor height: {:.4} m", params.floor_height.0);
    println!();
    println!("Capacity:");
    println!("  Modules per row:   {}", capacity.single_side_modules);
    println!("  Floors:            {}", capacity.floor_count);
    println!("  Per-floor modules: {}", capacity.per_floor_capacity);
    println!("  Total modules:     {}", capacity.total_residential_modules);
    println!();

    for floor in layout.floors() {
        print_floor(floor);
    }

    println!("Summary:");
    println!(
        "  {:<14} {:>6} {:>8} {:>9} {:>9} {:>10}",
        "Type", "Suites", "Modules", "Desired%", "Actual%", "Area m²"
    );
    for row in summary.rows() {
        print_summary_row(row);
    }

    if !layout.issues().is_empty() {
        println!();
        println!("Placement issues:");
        for issue in layout.issues() {
            println!("  - {}", issue);
        }
    }
    println!("═══════════════════════════════════════");
}

fn print_floor(floor: &FloorPlan) {
    println!("Floor {} (score {}):", floor.level + 1, floor.score());
    for row in Row::ALL {
        let cells: Vec<&str> = floor
            .row(row)
            .iter()
            .map(|slot| match slot {
                ModuleSlot::Empty => "--",
                ModuleSlot::Elevator => "EL",
                ModuleSlot::Suite(id) => floor.suite(*id).map_or("??", |s| s.unit_code()),
            })
            .collect();
        println!("  {:<5} {}", row.to_string(), cells.join(" "));
    }
    println!();
}

fn print_summary_row(row: &SummaryRow) {
    let pct = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v));
    println!(
        "  {:<14} {:>6} {:>8} {:>9} {:>9} {:>10.1}",
        row.label,
        row.suite_count,
        row.module_total,
        pct(row.desired_percentage),
        pct(row.actual_percentage),
        row.total_area.0
    );
}
