use std::path::{Path, PathBuf};

use festival_planner::domain::{Event, LineUp};
use festival_planner::ingest::{read_line_up, read_timetable};
use festival_planner::planner::{DayPlanner, PlanVerdict};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn load() -> (DayPlanner, LineUp) {
    let timetable = read_timetable(data_dir().join("timetable.txt"))
        .unwrap_or_else(|err| panic!("sample timetable should parse: {err}"));
    let line_up = read_line_up(data_dir().join("lineup.txt"))
        .unwrap_or_else(|err| panic!("sample line-up should parse: {err}"));
    (DayPlanner::new(&timetable), line_up)
}

fn plan(line_up: &LineUp, acts: &[&str]) -> Vec<Event> {
    acts.iter()
        .map(|act| {
            line_up
                .iter()
                .find(|e| e.act() == *act)
                .cloned()
                .unwrap_or_else(|| panic!("no act {act} in sample line-up"))
        })
        .collect()
}

#[test]
fn sample_files_load() {
    let (planner, line_up) = load();
    assert_eq!(planner.timetable().len(), 7);
    assert_eq!(planner.timetable().venues().len(), 3);
    assert_eq!(line_up.len(), 5);
}

#[test]
fn sample_plan_via_shuttles_and_waiting() {
    let (planner, line_up) = load();
    let day = plan(
        &line_up,
        &["The Openers", "DJ Kite", "Acoustic Set", "Late Night Trio"],
    );
    assert!(planner.compatible(&day));
}

#[test]
fn sample_plan_with_two_hops() {
    let (planner, line_up) = load();
    let day = plan(&line_up, &["The Openers", "Brass Band 7"]);
    assert!(planner.compatible(&day));
}

#[test]
fn sample_plan_stranded_at_field() {
    let (planner, line_up) = load();
    let day = plan(
        &line_up,
        &["The Openers", "DJ Kite", "Brass Band 7", "Late Night Trio"],
    );
    assert_eq!(planner.check(&day), PlanVerdict::Unreachable { index: 3 });
}

#[test]
fn sample_plan_clashing_sessions() {
    let (planner, line_up) = load();
    let day = plan(&line_up, &["Brass Band 7", "Acoustic Set"]);
    assert_eq!(planner.check(&day), PlanVerdict::SameSession { index: 1 });
}
