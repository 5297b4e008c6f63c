use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use timeroller::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load the configuration (optional TOML path as the first argument).
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PickerConfig::load(config_path.as_deref())?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    // 3. Create the coordinator, collecting every commit.
    let commits = Arc::new(Mutex::new(Vec::new()));
    let sink = commits.clone();
    let mut clock = ClockCoordinator::from_config(&config, move |time| {
        if let Ok(mut commits) = sink.lock() {
            commits.push(time);
        }
    })?;

    // 4. Print the event stream from a background task.
    spawn_event_listener(&clock);

    // 5. Replay a few gestures across the tricky boundaries.
    run_gestures(&mut clock)?;

    // Give the listener a moment to drain before exiting.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let labels = clock.labels().clone();
    println!("{}", "Committed times:".cyan().bold());
    if let Ok(commits) = commits.lock() {
        for time in commits.iter() {
            println!("  {}", time.format_with(&labels).yellow());
        }
    }
    Ok(())
}

/// Spawns a task that logs every `PickerEvent` the coordinator broadcasts.
fn spawn_event_listener(clock: &ClockCoordinator) {
    let mut event_rx = clock.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            info!("[PICKER] => {:?}", event);
        }
    });
}

/// Drives the coordinator the way a user dragging the rollers would.
fn run_gestures(clock: &mut ClockCoordinator) -> Result<()> {
    // --- Minute roller: 12:59 AM rolled forward one step ---
    clock.set_baseline(SelectedTime::new(12, 59, true)?);
    clock.minute_index_difference_changing(1);
    info!(
        "[MINUTE] hour roller now shows {}, AM/PM shows {}",
        clock.hour_roller().value,
        clock.am_pm_picker().selected_label()
    );
    clock.commit_minute(0)?;

    // --- Hour roller: 1:00 PM rolled back one step ---
    clock.hour_index_difference_changing(-1);
    clock.commit_hour(12)?;

    // --- Minute roller: two full laps backwards, then released ---
    let minutes = RollerRange::MINUTES;
    let start = clock.minute_roller().value;
    for step in 1..=120 {
        clock.minute_index_difference_changing(-step);
    }
    clock.commit_minute(minutes.value_at(minutes.index_of(start) - 120))?;

    // --- AM/PM picker ---
    let is_am = clock.am_pm_picker().is_am;
    clock.commit_am_pm(!is_am)?;
    Ok(())
}
