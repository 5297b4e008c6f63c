use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::highlight::Highlighter;
use rustyline::Editor;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::env;
use timeroller::prelude::*;
use timeroller::{ENGINE_NAME, VERSION as LIB_VERSION};
use tracing::info;

const SHELL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A custom helper struct for rustyline that enables syntax highlighting.
#[derive(Completer, Helper, Hinter, Validator)]
struct MyHighlighter;

impl Highlighter for MyHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if let Some((command, rest)) = line.split_once(' ') {
            let colored_command = command.yellow().bold();
            let colored_rest = rest.yellow();
            Cow::Owned(format!("{} {}", colored_command, colored_rest))
        } else {
            Cow::Owned(line.yellow().bold().to_string())
        }
    }
    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn print_banner() {
    if env::var("QUIET_MODE").is_ok() {
        return;
    }
    println!("{}", format!("  {} shell", ENGINE_NAME).cyan().bold());

    let version_string = format!(
        "          Shell   v{:<8} Library   v{:<8}",
        SHELL_VERSION, LIB_VERSION
    );

    println!("{}", "-----------------------------------------------------------------".dimmed());

    let license_blurb = "
    This software is provided 'as is', without warranty of any kind.
    Distributed under the MIT OR Apache-2.0 license. Use at your own risk.
    ";

    println!("{}", version_string);
    println!("{}", license_blurb.dimmed());

    println!("{}", "-----------------------------------------------------------------".dimmed());
}

/// Spawns a task printing every event the coordinator broadcasts.
fn spawn_event_listener(clock: &ClockCoordinator) {
    let mut event_rx = clock.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = event_rx.recv().await {
            println!("<-- [PICKER EVENT] {:?}", event);
        }
    });
}

/// A simulated drag on one numeric roller.
#[derive(Debug, Clone, Copy)]
struct Drag {
    start: i64,
    index_difference: i64,
}

impl Drag {
    /// The value the roller lands on when released.
    fn landing_value(&self, range: RollerRange) -> i64 {
        range.value_at(range.index_of(self.start) + self.index_difference)
    }
}

/// The shell's state: the coordinator plus the simulated roller positions.
struct Shell {
    clock: ClockCoordinator,
    hour_drag: Option<Drag>,
    minute_drag: Option<Drag>,
}

impl Shell {
    fn drag_hour(&mut self, index_difference: i64) {
        if self.clock.driver() == GestureDriver::Minute {
            println!("--> The minute roller owns this gesture; hour drag ignored.");
            return;
        }
        let start = self.clock.hour_roller().value;
        let drag = self.hour_drag.get_or_insert(Drag {
            start,
            index_difference: 0,
        });
        drag.index_difference = index_difference;
        self.clock.hour_index_difference_changing(index_difference);
    }

    fn drag_minute(&mut self, index_difference: i64) {
        let start = self.clock.minute_roller().value;
        let drag = self.minute_drag.get_or_insert(Drag {
            start,
            index_difference: 0,
        });
        drag.index_difference = index_difference;
        self.clock.minute_index_difference_changing(index_difference);
    }

    fn release(&mut self, roller: RollerKind) -> Result<SelectedTime> {
        let time = match roller {
            RollerKind::Hour => {
                let value = self
                    .hour_drag
                    .map(|drag| drag.landing_value(RollerRange::HOURS))
                    .unwrap_or(self.clock.hour_roller().value);
                self.clock.commit_hour(value)?
            }
            RollerKind::Minute => {
                let value = self
                    .minute_drag
                    .map(|drag| drag.landing_value(RollerRange::MINUTES))
                    .unwrap_or(self.clock.minute_roller().value);
                self.clock.commit_minute(value)?
            }
            RollerKind::AmPm => anyhow::bail!("the AM/PM picker is not dragged; use 'ampm'"),
        };
        self.reset_drags();
        Ok(time)
    }

    fn reset_drags(&mut self) {
        self.hour_drag = None;
        self.minute_drag = None;
    }

    fn show(&self) {
        let labels = self.clock.labels();
        println!(
            "  baseline     {}",
            self.clock.baseline().format_with(labels).green()
        );
        println!(
            "  showing      {}",
            self.clock.provisional_time().format_with(labels).yellow()
        );
        println!(
            "  rollers      hour={} minute={} {}",
            self.clock.hour_roller().value,
            self.clock.minute_roller().value,
            self.clock.am_pm_picker().selected_label()
        );
        println!(
            "  gesture      {:?} (carry {:+})",
            self.clock.driver(),
            self.clock.changing_hour()
        );
        println!("  hour key     {:?}", self.clock.hour_roller().key);
        println!("  minute key   {:?}", self.clock.minute_roller().key);
    }
}

/// Parses `HH:MM` plus `am`/`pm` into a `SelectedTime`.
fn parse_time(clock: &str, meridiem: &str) -> Result<SelectedTime> {
    let (hour, minute) = clock
        .split_once(':')
        .context("expected a time like 12:59")?;
    let is_am = match meridiem.to_ascii_lowercase().as_str() {
        "am" => true,
        "pm" => false,
        other => anyhow::bail!("expected 'am' or 'pm', got '{}'", other),
    };
    Ok(SelectedTime::new(
        hour.parse().context("hour must be a number")?,
        minute.parse().context("minute must be a number")?,
        is_am,
    )?)
}

fn print_help() {
    println!("Available commands:");
    println!("  hour <DIFF>           - Drag the hour roller to index difference DIFF.");
    println!("  minute <DIFF>         - Drag the minute roller to index difference DIFF.");
    println!("  release hour|minute   - Let go of a roller and commit where it landed.");
    println!("  ampm am|pm            - Pick AM or PM.");
    println!("  cancel                - Abandon the current gesture.");
    println!("  set <HH:MM> am|pm     - Replace the selected time.");
    println!("  show                  - Print the coordinator state.");
    println!("  exit                  - Quits the shell.");
}

/// Runs one shell command. Returns `false` when the shell should exit.
fn handle_command(shell: &mut Shell, args: &[&str]) -> Result<bool> {
    let Some(command) = args.first() else {
        return Ok(true);
    };
    match *command {
        "hour" | "minute" => {
            let diff_str = args
                .get(1)
                .with_context(|| format!("Usage: {} <DIFF>", command))?;
            let diff: i64 = diff_str
                .parse()
                .with_context(|| format!("'{}' is not a valid index difference", diff_str))?;
            if *command == "hour" {
                shell.drag_hour(diff);
            } else {
                shell.drag_minute(diff);
            }
            let labels = shell.clock.labels();
            println!(
                "--> Showing {}",
                shell.clock.provisional_time().format_with(labels).yellow()
            );
        }
        "release" => {
            let roller = match args.get(1) {
                Some(&"hour") => RollerKind::Hour,
                Some(&"minute") => RollerKind::Minute,
                _ => anyhow::bail!("Usage: release hour|minute"),
            };
            let time = shell.release(roller)?;
            println!("--> Committed {}", time.format_with(shell.clock.labels()).green());
        }
        "ampm" => {
            let is_am = match args.get(1) {
                Some(&"am") => true,
                Some(&"pm") => false,
                _ => anyhow::bail!("Usage: ampm am|pm"),
            };
            let time = shell.clock.commit_am_pm(is_am)?;
            shell.reset_drags();
            println!("--> Committed {}", time.format_with(shell.clock.labels()).green());
        }
        "cancel" => {
            shell.clock.cancel_gesture();
            shell.reset_drags();
            println!("--> Gesture abandoned.");
        }
        "set" => {
            let (Some(clock), Some(meridiem)) = (args.get(1), args.get(2)) else {
                anyhow::bail!("Usage: set <HH:MM> am|pm");
            };
            let time = parse_time(clock, meridiem)?;
            shell.clock.set_baseline(time);
            shell.reset_drags();
            println!("--> Selected time is now {}", time.format_with(shell.clock.labels()));
        }
        "show" => shell.show(),
        "help" => print_help(),
        "exit" => return Ok(false),
        other => println!("Unknown command: '{}'. Type 'help'.", other),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    print_banner();

    let config_path = env::var("TIMEROLLER_CONFIG").ok().map(std::path::PathBuf::from);
    let config = PickerConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    let clock = ClockCoordinator::from_config(&config, |time| {
        info!("Selected time changed to {}", time);
    })?;
    spawn_event_listener(&clock);

    let mut shell = Shell {
        clock,
        hour_drag: None,
        minute_drag: None,
    };

    let mut rl = Editor::new()?;
    let helper = MyHighlighter {};
    rl.set_helper(Some(helper));

    println!("{} is running. Type 'help' for commands or 'exit' to quit.", ENGINE_NAME.cyan());

    loop {
        let prompt = format!("{}", ">> ".cyan().bold());
        let readline = rl.readline(&prompt);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let args = line.split_whitespace().collect::<Vec<_>>();
                match handle_command(&mut shell, &args) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => println!("Error: {:#}", e),
                }
                // Let the event listener print before the next prompt.
                tokio::task::yield_now().await;
            }
            Err(_) => {
                println!("Exiting rollershell...");
                break;
            }
        }
    }

    Ok(())
}
