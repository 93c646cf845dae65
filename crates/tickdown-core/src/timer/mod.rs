mod engine;
mod settings;
mod ticker;

pub use engine::{TimerEngine, TimerSnapshot, TimerStatus};
pub use settings::{TimerMode, TimerSettings, MAX_MINUTES, MAX_SECONDS};
pub use ticker::{ManualTicker, TickSource};
