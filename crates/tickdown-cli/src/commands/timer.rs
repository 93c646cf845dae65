use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::{Subcommand, ValueEnum};
use tickdown_core::{format_mm_ss, progress_pct, TimerEngine, TimerMode, TimerStatus};

use super::{load_engine, save_engine};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Work,
    Break,
}

impl From<ModeArg> for TimerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Work => TimerMode::Work,
            ModeArg::Break => TimerMode::Break,
        }
    }
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a countdown in the foreground (Ctrl-C pauses and persists)
    Start {
        /// Switch to this mode before starting
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Return to idle with the full duration for the current mode
    Reset,
    /// Switch the active mode (cancels a paused session)
    Switch {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Print the current timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut engine, _ticker) = load_engine()?;

    match action {
        TimerAction::Start { mode } => {
            if let Some(mode) = mode {
                engine.switch_mode(mode.into());
            }
            run_countdown(&mut engine)?;
        }
        TimerAction::Reset => {
            let event = engine.reset();
            save_engine(&engine)?;
            if let Some(event) = event {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Switch { mode } => {
            let event = engine.switch_mode(mode.into());
            save_engine(&engine)?;
            if let Some(event) = event {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }

    Ok(())
}

/// Drive the engine with one tick per wall second until completion or Ctrl-C.
fn run_countdown(engine: &mut TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    // A session left at zero restarts from the full duration.
    if engine.status() == TimerStatus::Idle && engine.remaining_secs() == 0 {
        engine.reset();
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    engine.start();
    render_line(engine);

    loop {
        thread::sleep(Duration::from_secs(1));

        if interrupted.load(Ordering::SeqCst) {
            engine.pause();
            save_engine(engine)?;
            println!("\npaused at {}", format_mm_ss(engine.remaining_secs()));
            return Ok(());
        }

        match engine.tick() {
            Some(event) => {
                render_line(engine);
                println!("\ntime's up!");
                println!("{}", serde_json::to_string_pretty(&event)?);
                save_engine(engine)?;
                return Ok(());
            }
            None => render_line(engine),
        }
    }
}

const BAR_WIDTH: usize = 20;

fn render_line(engine: &TimerEngine) {
    let pct = progress_pct(engine.remaining_secs(), engine.total_secs());
    let filled = (pct / 100.0 * BAR_WIDTH as f64) as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled.min(BAR_WIDTH)),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    );
    print!(
        "\r{} remaining [{}] {:.0}%",
        format_mm_ss(engine.remaining_secs()),
        bar,
        pct
    );
    let _ = std::io::stdout().flush();
}
