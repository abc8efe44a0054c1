use crate::history::{DrawRecord, HistoryLedger, SeedOrigin};
use crate::random::{self, RandomSource};
use crate::sanitize::{sanitize_with, DedupPolicy, Participant, ParticipantSet};
use crate::{ArisanError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a successful undo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoResult {
    pub restored_round: u32,
    pub restored_winner: Participant,
}

/// Read-only projection for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleStatus {
    pub participant_count: usize,
    pub remaining_count: usize,
    /// Round about to be drawn, or the final round once the pool is empty
    pub current_round_display: u32,
}

/// Draw-cycle state for one session.
///
/// The round counter is the ledger length, so `round == history.len()`
/// cannot drift.
#[derive(Debug, Clone)]
pub struct CycleState {
    id: Uuid,
    dedup: DedupPolicy,
    participants: ParticipantSet,
    remaining: Vec<Participant>,
    history: HistoryLedger,
}

impl Default for CycleState {
    fn default() -> Self {
        Self::new(DedupPolicy::default())
    }
}

impl CycleState {
    pub fn new(dedup: DedupPolicy) -> Self {
        Self {
            id: Uuid::new_v4(),
            dedup,
            participants: ParticipantSet::default(),
            remaining: Vec::new(),
            history: HistoryLedger::new(),
        }
    }

    pub fn with_participants<I, S>(raw_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::default();
        state.set_participants(raw_names);
        state
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn participants(&self) -> &ParticipantSet {
        &self.participants
    }

    pub fn remaining(&self) -> &[Participant] {
        &self.remaining
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn round(&self) -> u32 {
        self.history.last_round()
    }

    pub fn is_cycle_complete(&self) -> bool {
        !self.participants.is_empty() && self.remaining.is_empty()
    }

    /// Replace the roster. Always starts a fresh cycle.
    pub fn set_participants<I, S>(&mut self, raw_names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.participants = sanitize_with(raw_names, self.dedup);
        self.remaining = self.participants.as_slice().to_vec();
        self.history.clear();

        tracing::info!(
            "Session {} roster set: {} participants",
            self.id,
            self.participants.len()
        );
    }

    /// Apply an interactive roster edit, resetting only if the roster changed
    pub fn apply_roster_edit<I, S>(&mut self, raw_names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let edited = sanitize_with(raw_names, self.dedup);
        if edited == self.participants {
            return false;
        }
        tracing::info!("Session {} roster edited, cycle reset", self.id);
        self.set_participants(edited.iter());
        true
    }

    /// Draw one winner and remove them from the pool
    pub fn draw_winner(&mut self, seed: Option<u64>) -> Result<DrawRecord> {
        if self.remaining.is_empty() {
            return Err(ArisanError::EmptyPool);
        }

        let (seed, seed_origin) = match seed {
            Some(seed) => (seed, SeedOrigin::UserSupplied),
            None => (u64::from(random::generate_seed()), SeedOrigin::Generated),
        };

        let pool_size = self.remaining.len();
        let idx = random::draw_index(&self.remaining, Some(seed)).ok_or(ArisanError::EmptyPool)?;

        let record = DrawRecord {
            round: self.history.next_round(),
            winner: self.remaining[idx].clone(),
            timestamp: Utc::now(),
            seed,
            seed_origin,
            pool_size,
            draw_index: idx,
        };

        // append validates, so nothing has changed if it fails
        self.history.append(record.clone())?;
        self.remaining.remove(idx);

        tracing::debug!(
            "Session {} round {}: {} (seed {})",
            self.id,
            record.round,
            record.winner,
            record.seed
        );

        Ok(record)
    }

    /// Undo the last draw, reinserting the winner at a random position
    pub fn undo_last_draw(&mut self) -> Result<UndoResult> {
        self.undo_last_draw_with(&mut RandomSource::from_entropy())
    }

    pub fn undo_last_draw_with(&mut self, source: &mut RandomSource) -> Result<UndoResult> {
        let last = self.history.pop_last().ok_or(ArisanError::EmptyHistory)?;

        let pos = source
            .next_index(self.remaining.len() + 1)
            .unwrap_or(self.remaining.len());
        self.remaining.insert(pos, last.winner.clone());

        tracing::info!(
            "Session {} round {} undone, {} back in the pool",
            self.id,
            last.round,
            last.winner
        );

        Ok(UndoResult {
            restored_round: last.round,
            restored_winner: last.winner,
        })
    }

    /// Put every participant back in the pool and clear the ledger
    pub fn reset_cycle(&mut self) {
        self.remaining = self.participants.as_slice().to_vec();
        self.history.clear();

        tracing::info!("Session {} cycle reset", self.id);
    }

    pub fn status(&self) -> CycleStatus {
        let round = self.round();
        CycleStatus {
            participant_count: self.participants.len(),
            remaining_count: self.remaining.len(),
            current_round_display: if self.remaining.is_empty() {
                round
            } else {
                round + 1
            },
        }
    }

    /// Replay every recorded draw against its stored index
    pub fn audit_history(&self) -> Result<()> {
        match self.history.records().iter().find(|r| !r.replays()) {
            Some(record) => Err(ArisanError::ReplayMismatch {
                round: record.round,
            }),
            None => Ok(()),
        }
    }
}
