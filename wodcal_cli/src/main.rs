use chrono::{NaiveDate, Utc};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use wodcal_core::*;

const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Parser)]
#[command(name = "wodcal")]
#[command(about = "Weekly rotating workout calendar generator", long_about = None)]
struct Cli {
    /// Start the plan with this workout number, show numbers with --list
    startworkout: Option<usize>,

    /// Start calendar at given date, dateformat is dd.mm.yyyy, example:
    /// 08.02.2018 is 8. of February in 2018
    startdate: Option<String>,

    /// End calendar at given date (inclusive), dateformat is dd.mm.yyyy
    enddate: Option<String>,

    /// List available workouts, do this first to have the number for
    /// startworkout
    #[arg(long)]
    list: bool,

    /// Override path of the workout source file
    #[arg(long)]
    workouts: Option<PathBuf>,

    /// Override path of the generated .ics file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    wodcal_core::logging::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let workouts_path = cli.workouts.unwrap_or_else(|| config.files.workouts.clone());
    let output_path = cli.output.unwrap_or_else(|| config.files.output.clone());

    if cli.list {
        let set = load_workout_set(&workouts_path)?;
        print_workouts(&set);
        return Ok(());
    }

    let (Some(startworkout), Some(startdate), Some(enddate)) =
        (cli.startworkout, cli.startdate, cli.enddate)
    else {
        Cli::command().print_help()?;
        std::process::exit(1)
    };

    // The CLI index is 1-based; the rotation offset is 0-based
    let start_offset = startworkout.checked_sub(1).ok_or_else(|| {
        Error::Config("startworkout is 1-based, the first workout is number 1".into())
    })?;

    let start_date = parse_day_month_year(&startdate)?;
    let end_date = parse_day_month_year(&enddate)?;

    let set = load_workout_set(&workouts_path)?;
    let document = calculate_calendar(
        &set,
        start_offset,
        start_date,
        end_date,
        config.calendar.metadata(),
        Utc::now(),
    )?;

    std::fs::write(&output_path, generate_ics(&document))?;

    println!(
        "✓ Wrote {} events to {}",
        document.events.len(),
        output_path.display()
    );

    Ok(())
}

fn parse_day_month_year(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::DateFormat {
        value: value.to_string(),
        expected: "dd.mm.yyyy",
    })
}

fn print_workouts(set: &WorkoutSet) {
    for (number, title) in set.titles().iter().enumerate() {
        println!("{}: {}", number + 1, title);
    }
}
