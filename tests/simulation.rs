//! End-to-end runs through the public API.

use std::time::Duration;

use disk_schedule::animation::{Driver, Player, TickOutcome, VirtualClock};
use disk_schedule::config::{ConfigStore, FormState, MemoryStore, Settings};
use disk_schedule::display::{MemoryDisplay, Notice, SvgDisplay};
use disk_schedule::models::RunState;
use disk_schedule::policy::{Direction, SweepMode};
use disk_schedule::render::Renderer;
use disk_schedule::Error;

fn form(head: &str, requests: &str, algorithm: &str) -> FormState {
    FormState {
        head: head.into(),
        requests: requests.into(),
        algorithm: algorithm.into(),
        workload: "random".into(),
    }
}

#[test]
fn fcfs_end_to_end() {
    let mut driver = Driver::default();
    let mut display = MemoryDisplay::new();
    let ticket = driver.start(&form("50", "10,20,30", "fcfs"), &mut display).unwrap();
    assert_eq!(driver.sequence(), &[10, 20, 30]);

    let record = Player::new(VirtualClock::new())
        .play(&mut driver, ticket, &mut display)
        .unwrap();
    assert_eq!(record.seek_time, 60);
    assert_eq!(record.throughput, 3);
    assert_eq!(record.response_label(), "20.00");
    assert_eq!(display.panel.policy, "FCFS");
    assert_eq!(display.panel.seek_time, "60");
    assert!((display.panel.progress - 100.0).abs() < 1e-9);

    // Metrics at step k cover exactly the first k requests.
    let seeks: Vec<u64> = display.published.iter().map(|m| m.seek_time).collect();
    assert_eq!(seeks, vec![40, 50, 60]);
    let throughput: Vec<usize> = display.published.iter().map(|m| m.throughput).collect();
    assert_eq!(throughput, vec![1, 2, 3]);
}

#[test]
fn comparison_history_in_completion_order() {
    let mut driver = Driver::default();
    let mut display = MemoryDisplay::new();
    let mut player = Player::new(VirtualClock::new());
    let queue = "98,183,37,122,14,124,65,67";

    for policy in ["fcfs", "sstf", "ai"] {
        let ticket = driver.start(&form("53", queue, policy), &mut display).unwrap();
        player.play(&mut driver, ticket, &mut display).unwrap();
    }

    let seeks: Vec<(String, u64)> = driver
        .history()
        .records()
        .iter()
        .map(|r| (r.policy_label(), r.seek_time))
        .collect();
    assert_eq!(
        seeks,
        vec![("FCFS".into(), 640), ("SSTF".into(), 236), ("AI".into(), 208)]
    );
    assert!(driver.history().render_table().contains("SSTF"));
}

#[test]
fn directional_look_via_settings() {
    let settings = Settings::default().with_sweep_mode(SweepMode::Directional(Direction::Up));
    let mut driver = Driver::new(settings);
    let mut display = MemoryDisplay::new();
    driver.start(&form("53", "98,183,37,122,14,124,65,67", "look"), &mut display).unwrap();
    assert_eq!(driver.sequence(), &[65, 67, 98, 122, 124, 183, 37, 14]);
}

#[test]
fn paused_tick_is_a_no_op() {
    let mut driver = Driver::default();
    let mut display = MemoryDisplay::new();
    let first = driver.start(&form("50", "10,20,30", "fcfs"), &mut display).unwrap();
    let TickOutcome::Stepped { next, .. } = driver.tick(first, &mut display) else {
        panic!("expected a step");
    };
    driver.pause().unwrap();

    assert_eq!(driver.tick(next, &mut display), TickOutcome::Cancelled);
    assert_eq!(driver.cursor(), 1);
    assert_eq!(display.published.len(), 1);

    let resumed = driver.resume().unwrap();
    assert_eq!(resumed.delay(), Duration::ZERO);
    let record = Player::new(VirtualClock::new())
        .play(&mut driver, resumed, &mut display)
        .unwrap();
    assert_eq!(record.seek_time, 60);
    assert_eq!(driver.state(), RunState::Completed);
}

#[test]
fn rejected_inputs_never_start() {
    let mut driver = Driver::default();
    let mut display = MemoryDisplay::new();

    assert!(matches!(
        driver.start(&form("50", "", "fcfs"), &mut display),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        driver.start(&form("50", "a, b", "fcfs"), &mut display),
        Err(Error::Validation(_))
    ));
    assert_eq!(driver.state(), RunState::Idle);
    assert_eq!(
        display.notices,
        vec![
            Notice::InvalidInput("Please enter disk requests!".into()),
            Notice::InvalidInput("Invalid requests format!".into()),
        ]
    );
}

#[test]
fn saved_form_drives_a_run() {
    let mut store = MemoryStore::new();
    store.save(&form("53", "98,183,37", "sstf").to_saved()).unwrap();

    let mut loaded = FormState::default();
    assert!(loaded.apply_saved(&store));

    let mut driver = Driver::default();
    let mut display = SvgDisplay::new(Renderer::default());
    let ticket = driver.start(&loaded, &mut display).unwrap();
    let record = Player::new(VirtualClock::new())
        .play(&mut driver, ticket, &mut display)
        .unwrap();
    // 53 → 37 → 98 → 183
    assert_eq!(record.seek_time, 16 + 61 + 85);
    assert_eq!(display.frames_drawn(), 3);
    assert!(display.current_svg().unwrap().contains("<polyline"));
}

#[test]
fn extreme_tracks_complete_with_saturated_seek() {
    let mut driver = Driver::default();
    let mut display = MemoryDisplay::new();
    let start = form(
        &i64::MIN.to_string(),
        &format!("{},{}", i64::MAX, i64::MIN),
        "fcfs",
    );
    let ticket = driver.start(&start, &mut display).unwrap();

    let record = Player::new(VirtualClock::new())
        .play(&mut driver, ticket, &mut display)
        .unwrap();
    assert_eq!(driver.state(), RunState::Completed);
    assert_eq!(record.seek_time, u64::MAX);
    assert_eq!(record.throughput, 2);
    assert_eq!(display.published[0].seek_time, u64::MAX);
}
