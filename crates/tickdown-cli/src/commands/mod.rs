pub mod settings;
pub mod timer;

use tickdown_core::storage::data_dir;
use tickdown_core::{ManualTicker, TimerEngine, TimerSnapshot, TomlSettingsStore};

const SNAPSHOT_FILE: &str = "timer.json";

/// Build an engine from the durable settings and the persisted snapshot,
/// returning the ticker handle for drivers that run a delivery loop.
pub fn load_engine() -> Result<(TimerEngine, ManualTicker), Box<dyn std::error::Error>> {
    let store = TomlSettingsStore::open()?;
    let ticker = ManualTicker::new();
    let mut engine = TimerEngine::new(Box::new(store), Box::new(ticker.clone()));
    if let Some(snapshot) = load_snapshot()? {
        engine.restore(snapshot);
    }
    Ok((engine, ticker))
}

fn load_snapshot() -> Result<Option<TimerSnapshot>, Box<dyn std::error::Error>> {
    let path = data_dir()?.join(SNAPSHOT_FILE);
    match std::fs::read_to_string(path) {
        // A corrupt snapshot is discarded rather than surfaced.
        Ok(json) => Ok(serde_json::from_str(&json).ok()),
        Err(_) => Ok(None),
    }
}

pub fn save_engine(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(&engine.persistable())?;
    std::fs::write(data_dir()?.join(SNAPSHOT_FILE), json)?;
    Ok(())
}
