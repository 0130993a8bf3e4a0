//! yatzy-logging: append-only NDJSON game event log.
//!
//! One JSON object per line; schema carried by the `event` tag and a version
//! suffix on the struct name. Intended for post-game analysis, not for
//! transport.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event log schema version.
pub const EVENT_LOG_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

#[derive(Debug, Clone, Serialize)]
pub struct GameStartedV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub game_id: u64,
    /// Dice seed, when the game runs on a fixed seed.
    pub seed: Option<u64>,
}

impl GameStartedV1 {
    pub fn new(game_id: u64, seed: Option<u64>) -> Self {
        Self {
            event: "game_started",
            ts_ms: now_ms(),
            game_id,
            seed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RolledV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub game_id: u64,
    /// 1..=3 within the round.
    pub roll_count: u8,
    pub dice: [u8; 5],
}

impl RolledV1 {
    pub fn new(game_id: u64, roll_count: u8, dice: [u8; 5]) -> Self {
        Self {
            event: "rolled",
            ts_ms: now_ms(),
            game_id,
            roll_count,
            dice,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryLockedV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub game_id: u64,
    /// Wire name of the category (e.g. "threeOfAKind").
    pub category: String,
    pub score: i32,
    pub total_score: i32,
    pub rounds_left: u8,
}

impl CategoryLockedV1 {
    pub fn new(
        game_id: u64,
        category: impl Into<String>,
        score: i32,
        total_score: i32,
        rounds_left: u8,
    ) -> Self {
        Self {
            event: "category_locked",
            ts_ms: now_ms(),
            game_id,
            category: category.into(),
            score,
            total_score,
            rounds_left,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOverV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub game_id: u64,
    pub total_score: i32,
    /// True when the player ended the game before filling every category.
    pub ended_early: bool,
}

impl GameOverV1 {
    pub fn new(game_id: u64, total_score: i32, ended_early: bool) -> Self {
        Self {
            event: "game_over",
            ts_ms: now_ms(),
            game_id,
            total_score,
            ended_early,
        }
    }
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for NdjsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NdjsonError::Io(e) => write!(f, "io error: {}", e),
            NdjsonError::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for NdjsonError {}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
