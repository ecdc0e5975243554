// Shift Grid
// Replays grid events against a day of shifts and prints the outcome

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use shift_grid::interaction::{DaySchedule, GridEvent, InteractionController, ShiftMutation};
use shift_grid::models::shift::Shift;
use shift_grid::services::layout::ShiftLayout;
use shift_grid::services::settings::GridConfigService;

#[derive(Deserialize)]
struct DayFile {
    date: NaiveDate,
    shifts: Vec<Shift>,
}

#[derive(Serialize)]
struct Report {
    mutations: Vec<ShiftMutation>,
    layout: Vec<ShiftLayout>,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {:?}", path))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (day_path, events_path) = match args.as_slice() {
        [day] => (day, None),
        [day, events] => (day, Some(events)),
        _ => bail!("usage: shift-grid <day.json> [events.json]"),
    };

    let config = GridConfigService::from_env().load()?;
    let day: DayFile = read_json(Path::new(day_path))?;
    log::info!("Loaded {} shift(s) for {}", day.shifts.len(), day.date);

    let mut controller = InteractionController::new(config, DaySchedule::new(day.date, day.shifts));
    let mutations = match events_path {
        Some(path) => {
            let events: Vec<GridEvent> = read_json(Path::new(path))?;
            controller.handle_all(events)
        }
        None => Vec::new(),
    };

    let report = Report {
        mutations,
        layout: controller.layout(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
