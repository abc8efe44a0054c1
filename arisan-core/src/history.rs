use crate::sanitize::Participant;
use crate::{ArisanError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a recorded seed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedOrigin {
    UserSupplied,
    Generated,
}

/// One completed draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub round: u32,
    pub winner: Participant,
    pub timestamp: DateTime<Utc>,
    pub seed: u64,
    pub seed_origin: SeedOrigin,
    /// Remaining pool length when the draw happened
    pub pool_size: usize,
    pub draw_index: usize,
}

impl DrawRecord {
    /// Re-derive this draw's index from its seed and pool size
    pub fn replays(&self) -> bool {
        crate::random::replay(self.seed, self.pool_size) == Some(self.draw_index)
    }
}

/// Ordered log of draws in the current cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    records: Vec<DrawRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// Round of the latest draw, 0 when empty. Equals `len()` since rounds
    /// start at 1 with no gaps.
    pub fn last_round(&self) -> u32 {
        self.records.last().map_or(0, |r| r.round)
    }

    pub fn next_round(&self) -> u32 {
        self.last_round() + 1
    }

    /// Append a record. Rounds must continue the sequence without gaps.
    pub fn append(&mut self, record: DrawRecord) -> Result<()> {
        let expected = self.next_round();
        if record.round != expected {
            return Err(ArisanError::invalid_state(format!(
                "expected round {}, got {}",
                expected, record.round
            )));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn pop_last(&mut self) -> Option<DrawRecord> {
        self.records.pop()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn winners(&self) -> impl Iterator<Item = &Participant> {
        self.records.iter().map(|r| &r.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize;

    fn record(round: u32, name: &str) -> DrawRecord {
        let winner = sanitize([name]).iter().next().cloned().unwrap();
        DrawRecord {
            round,
            winner,
            timestamp: Utc::now(),
            seed: 42,
            seed_origin: SeedOrigin::UserSupplied,
            pool_size: 3,
            draw_index: crate::random::replay(42, 3).unwrap(),
        }
    }

    #[test]
    fn test_append_requires_sequential_rounds() {
        let mut ledger = HistoryLedger::new();
        assert_eq!(ledger.last_round(), 0);
        assert_eq!(ledger.next_round(), 1);

        ledger.append(record(1, "Ani")).unwrap();
        ledger.append(record(2, "Budi")).unwrap();
        assert_eq!(ledger.next_round(), 3);
        assert_eq!(ledger.last_round() as usize, ledger.len());

        assert!(ledger.append(record(2, "Cici")).is_err());
        assert!(ledger.append(record(4, "Cici")).is_err());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_pop_last() {
        let mut ledger = HistoryLedger::new();
        assert!(ledger.pop_last().is_none());

        ledger.append(record(1, "Ani")).unwrap();
        ledger.append(record(2, "Budi")).unwrap();

        let last = ledger.pop_last().unwrap();
        assert_eq!(last.round, 2);
        assert_eq!(last.winner, "Budi");
        assert_eq!(ledger.next_round(), 2);
    }

    #[test]
    fn test_record_replays() {
        let mut r = record(1, "Ani");
        assert!(r.replays());

        r.draw_index = (r.draw_index + 1) % 3;
        assert!(!r.replays());
    }
}
