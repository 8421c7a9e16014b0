//! console — interactive single-car demo.
//!
//! Reads call requests from stdin and drives a car with the default policies
//! on the wall clock, so transits and stops take real time.  Movement is
//! printed to the terminal and appended to `output/activity.csv`.
//!
//! Commands:
//!
//! | Input  | Meaning                                    |
//! |--------|--------------------------------------------|
//! | `7`    | Inside call: a rider wants to go to 7      |
//! | `5U`   | Outside call: a rider on 5 wants to go up  |
//! | `4D`   | Outside call: a rider on 4 wants down      |
//! | `q`    | Quit once the current route finishes       |

use std::fs;
use std::io::{BufRead, Write as _};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use lift_core::{CallRequest, CarConfig, Floor};
use lift_output::ActivityLogger;
use lift_sim::{CarBuilder, CarObserver, PassedFloor, StoppedAtFloor};

/// Prints movement events to the terminal as they happen.
struct PrintObserver;

impl CarObserver for PrintObserver {
    fn on_passed_floor(&mut self, event: &PassedFloor) {
        println!("  passing {} going {}", event.floor, event.direction);
    }

    fn on_stopped_at_floor(&mut self, event: &StoppedAtFloor) {
        println!("  stopped at {}", event.floor);
    }
}

/// Parse one input line into a call request, or `None` for a quit command.
fn parse_command(line: &str) -> Result<Option<CallRequest>> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    if let Some(digits) = line.strip_suffix(['U', 'u', 'D', 'd']) {
        let floor: i32 = digits
            .parse()
            .with_context(|| format!("bad outside call {line:?}"))?;
        return Ok(Some(CallRequest::outside(Floor(floor))));
    }
    let floor: i32 = line
        .parse()
        .with_context(|| format!("bad inside call {line:?}"))?;
    Ok(Some(CallRequest::inside(Floor(floor))))
}

fn main() -> Result<()> {
    let config = CarConfig::default();
    println!(
        "Single car serving floors {}..{} (transit {} ms, dwell {} ms).",
        config.min_floor, config.max_floor, config.floor_transit_ms, config.stop_dwell_ms
    );
    println!("Enter a floor (7), an outside call (5U / 4D), or q to quit.");

    fs::create_dir_all("output").context("create output directory")?;
    let logger = ActivityLogger::create(Path::new("output/activity.csv"))
        .context("open output/activity.csv")?;

    let car = Arc::new(CarBuilder::new(config).build()?);
    car.subscribe(Box::new(PrintObserver));
    car.subscribe(Box::new(logger));

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        let request = match parse_command(&line) {
            Ok(Some(request)) => request,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match car.submit(request) {
            Ok(()) => {
                if !car.is_executing() {
                    let runner = Arc::clone(&car);
                    thread::spawn(move || runner.execute_route());
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    // Let an in-flight route finish before exiting.
    while car.is_executing() {
        thread::sleep(Duration::from_millis(100));
    }
    println!("Car idle at {}. Activity logged to output/activity.csv.", car.current_floor());
    Ok(())
}
