use clap::Subcommand;
use tickdown_core::{SettingsStore, TomlSettingsStore};

use super::{load_engine, save_engine};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings as TOML
    Show,
    /// Update one or more duration fields
    ///
    /// Values are parsed leniently: anything non-numeric counts as 0, and
    /// results are clamped to 0-99 minutes / 0-59 seconds.
    Set {
        #[arg(long)]
        work_minutes: Option<String>,
        #[arg(long)]
        work_seconds: Option<String>,
        #[arg(long)]
        break_minutes: Option<String>,
        #[arg(long)]
        break_seconds: Option<String>,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Show => {
            let store = TomlSettingsStore::open()?;
            print!("{}", toml::to_string_pretty(&store.load())?);
        }
        SettingsAction::Set {
            work_minutes,
            work_seconds,
            break_minutes,
            break_seconds,
        } => {
            let (mut engine, _ticker) = load_engine()?;
            let mut next = engine.settings();
            if let Some(raw) = work_minutes {
                next.work_minutes = lenient_u32(&raw);
            }
            if let Some(raw) = work_seconds {
                next.work_seconds = lenient_u32(&raw);
            }
            if let Some(raw) = break_minutes {
                next.break_minutes = lenient_u32(&raw);
            }
            if let Some(raw) = break_seconds {
                next.break_seconds = lenient_u32(&raw);
            }
            let event = engine.update_settings(next);
            // Refresh the snapshot too: an idle timer picks up the new total.
            save_engine(&engine)?;
            if let Some(event) = event {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }
    Ok(())
}

/// Parse a duration field the way the settings form did: non-numeric
/// input becomes 0; range clamping happens in the engine.
fn lenient_u32(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::lenient_u32;

    #[test]
    fn lenient_parse_falls_back_to_zero() {
        assert_eq!(lenient_u32("25"), 25);
        assert_eq!(lenient_u32(" 7 "), 7);
        assert_eq!(lenient_u32("abc"), 0);
        assert_eq!(lenient_u32(""), 0);
        assert_eq!(lenient_u32("-3"), 0);
    }
}
