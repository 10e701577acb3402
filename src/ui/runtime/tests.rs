use std::sync::Arc;

use ratatui::{Terminal, backend::TestBackend};
use searchviz_steps::{Algorithm, RunOutcome, Snapshot};

use crate::dataset::{DatasetGenerator, DatasetOptions};
use crate::ui::App;
use crate::worker::RunEvent;

const SCENARIO: [i64; 6] = [2, 5, 8, 12, 19, 25];

fn scenario_app() -> App {
    let options = DatasetOptions {
        values: Some(SCENARIO.to_vec()),
        ..DatasetOptions::default()
    };
    let mut app = App::new(DatasetGenerator::new(options).expect("valid dataset"));
    app.generate_data();
    app
}

fn binary_steps() -> Vec<Snapshot<i64>> {
    Algorithm::Binary
        .steps(Arc::<[i64]>::from(SCENARIO), 12)
        .collect::<Result<Vec<_>, _>>()
        .expect("integers always compare")
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn empty_canvas_prompts_for_data() {
    let options = DatasetOptions::default();
    let mut app = App::new(DatasetGenerator::new(options).expect("valid dataset"));
    let view = render(&mut app, 100, 20);
    assert!(view.contains("No data. Press g to generate a dataset"));
    assert!(view.contains("Algorithm: Linear Search"));
    assert!(view.contains("Delay: 0.5s"));
}

#[test]
fn probe_snapshot_is_described_in_the_chart_title() {
    let mut app = scenario_app();
    app.set_algorithm(Algorithm::Binary);
    app.active = Some((Algorithm::Binary, 12));
    app.pending
        .push_back(RunEvent::Step(binary_steps()[0].clone()));
    app.pump_run_events();

    let view = render(&mut app, 120, 24);
    assert!(
        view.contains("Binary Search • step 1/≤3 • comparing index 2 (8) • range [0, 5]"),
        "unexpected view:\n{view}"
    );
    for value in SCENARIO {
        assert!(view.contains(&value.to_string()), "missing bar label {value}");
    }
}

#[test]
fn each_event_is_shown_for_its_own_frame() {
    let mut app = scenario_app();
    app.active = Some((Algorithm::Binary, 12));
    for snapshot in binary_steps() {
        app.pending.push_back(RunEvent::Step(snapshot));
    }
    app.pending
        .push_back(RunEvent::Finished(RunOutcome::Found { index: 3, steps: 4 }));

    let mut titles = Vec::new();
    while !app.pending.is_empty() {
        app.pump_run_events();
        titles.push(app.snapshot().map(Snapshot::step));
    }

    assert_eq!(titles, vec![Some(1), Some(2), Some(3), Some(4), Some(4)]);
    let view = render(&mut app, 120, 24);
    assert!(view.contains("found at index 3"));
    assert!(view.contains("Binary Search found 12 at index 3 after 4 steps"));
}

#[test]
fn log_pane_splits_the_screen() {
    let mut app = scenario_app();
    app.show_log = true;
    let view = render(&mut app, 120, 24);
    assert!(view.contains(" Log "));
    assert!(view.contains("Generated 6 values"));
}

#[test]
fn status_line_is_snapshotted() {
    let mut app = scenario_app();
    app.start_search();
    app.reset();
    insta::assert_snapshot!(app.status().message.as_str(), @"Visualizer has been reset!");
}

fn small_binary_app() -> (App, Vec<Snapshot<i64>>) {
    let options = DatasetOptions {
        values: Some(vec![1, 2, 3, 4]),
        ..DatasetOptions::default()
    };
    let mut app = App::new(DatasetGenerator::new(options).expect("valid dataset"));
    app.generate_data();
    app.set_algorithm(Algorithm::Binary);
    app.set_target(3);
    app.active = Some((Algorithm::Binary, 3));
    let steps = Algorithm::Binary
        .steps(Arc::<[i64]>::from(vec![1, 2, 3, 4]), 3)
        .collect::<Result<Vec<_>, _>>()
        .expect("integers always compare");
    (app, steps)
}

#[test]
fn comparison_frame_is_snapshotted() {
    let (mut app, steps) = small_binary_app();
    app.pending.push_back(RunEvent::Step(steps[0].clone()));
    app.pump_run_events();

    insta::assert_snapshot!(render(&mut app, 72, 11), @r#"
    " Algorithm: Binary Search  │  Delay: 0.5s  │  Target: 3▏                "
    " ┌ Binary Search • step 1/≤3 • comparing index 1 (2) • range [0, 3] ──┐ "
    " │                                                   ████████████████ │ "
    " │                                  ████████████████ ████████████████ │ "
    " │                 ████████████████ ████████████████ ████████████████ │ "
    " │███████1████████ ███████2████████ ███████3████████ ███████4████████ │ "
    " │       0                1                2                3         │ "
    " └────────────────────────────────────────────────────────────────────┘ "
    " ■ comparing   ■ in range   ■ eliminated   ■ found   ■ not found        "
    " Generated 4 values                                                     "
    " g generate  enter start  c cancel  r reset  tab algorithm  ←/→ delay   "
    "#);
}

#[test]
fn finished_frame_is_snapshotted() {
    let (mut app, steps) = small_binary_app();
    for snapshot in steps {
        app.pending.push_back(RunEvent::Step(snapshot));
    }
    app.pending
        .push_back(RunEvent::Finished(RunOutcome::Found { index: 2, steps: 3 }));
    while !app.pending.is_empty() {
        app.pump_run_events();
    }

    insta::assert_snapshot!(render(&mut app, 72, 11), @r#"
    " Algorithm: Binary Search  │  Delay: 0.5s  │  Target: 3▏                "
    " ┌ Binary Search • found at index 2 • 3 steps ────────────────────────┐ "
    " │                                                   ████████████████ │ "
    " │                                  ████████████████ ████████████████ │ "
    " │                 ████████████████ ████████████████ ████████████████ │ "
    " │███████1████████ ███████2████████ ███████3████████ ███████4████████ │ "
    " │       0                1                2                3         │ "
    " └────────────────────────────────────────────────────────────────────┘ "
    " ■ comparing   ■ in range   ■ eliminated   ■ found   ■ not found        "
    " Binary Search found 3 at index 2 after 3 steps                         "
    " g generate  enter start  c cancel  r reset  tab algorithm  ←/→ delay   "
    "#);
}
