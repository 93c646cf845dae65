//! # Tickdown Core Library
//!
//! This library provides the core logic for the Tickdown countdown timer.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any GUI being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine over discrete one-second
//!   ticks; the caller (or an injected tick source driver) invokes `tick()`
//!   once per second while the timer is running
//! - **Storage**: TOML-based settings persistence behind a pluggable
//!   [`SettingsStore`] trait
//! - **Events**: every state change produces a typed [`Event`] for callers
//!   to render or log
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`TimerSettings`]: per-mode durations with clamping
//! - [`TomlSettingsStore`]: durable settings under `~/.config/tickdown/`

pub mod error;
pub mod events;
pub mod storage;
pub mod time;
pub mod timer;

pub use error::StoreError;
pub use events::Event;
pub use storage::{MemorySettingsStore, SettingsStore, TomlSettingsStore};
pub use time::{format_mm_ss, progress_pct, total_seconds};
pub use timer::{
    ManualTicker, TickSource, TimerEngine, TimerMode, TimerSettings, TimerSnapshot, TimerStatus,
};
