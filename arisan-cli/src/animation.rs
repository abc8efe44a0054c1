//! Cosmetic spin shown after a draw.
//!
//! The winner is already decided and recorded when this runs. Frames use
//! their own thread-local generator and the last frame is always the
//! recorded winner.

use crate::config::AnimationConfig;
use arisan_core::Participant;
use rand::seq::SliceRandom;
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub fn spin(candidates: &[Participant], winner: &Participant, config: &AnimationConfig) -> io::Result<()> {
    if !config.enabled || candidates.len() < 2 {
        return Ok(());
    }

    let width = candidates
        .iter()
        .map(|p| p.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let frame = Duration::from_millis(config.frame_ms.max(1));
    let end = Instant::now() + Duration::from_millis(config.duration_ms);
    let mut rng = rand::thread_rng();
    let mut stdout = io::stdout();

    while Instant::now() < end {
        if let Some(name) = candidates.choose(&mut rng) {
            write!(stdout, "\r🎡 {:<width$}", name.as_str(), width = width)?;
            stdout.flush()?;
        }
        std::thread::sleep(frame);
    }

    writeln!(stdout, "\r🎡 {:<width$}", winner.as_str(), width = width)?;
    stdout.flush()
}
