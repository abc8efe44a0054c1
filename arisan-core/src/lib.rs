//! Arisan draw-cycle engine
//!
//! Draws sequential, non-repeating winners from a roster until the pool is
//! exhausted. Every draw records the seed that produced it, so any round can
//! be replayed and audited after the fact.

pub mod config;
pub mod cycle;
pub mod error;
pub mod export;
pub mod history;
pub mod random;
pub mod roster;
pub mod sanitize;
pub mod seed;

pub use config::ArisanConfig;
pub use cycle::{CycleState, CycleStatus, UndoResult};
pub use error::{ArisanError, Result};
pub use history::{DrawRecord, HistoryLedger, SeedOrigin};
pub use random::{draw_index, replay, RandomSource};
pub use sanitize::{sanitize, sanitize_with, DedupPolicy, Participant, ParticipantSet};
pub use seed::{parse_seed, parse_seed_lenient};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_cycle_then_undo_everything() {
        let mut state = CycleState::with_participants(["Budi", "Ani", "Cici"]);
        assert_eq!(state.participants().names(), vec!["Ani", "Budi", "Cici"]);

        let first = state.draw_winner(Some(42)).unwrap();
        let mut replayed = CycleState::with_participants(["Ani", "Budi", "Cici"]);
        assert_eq!(replayed.draw_winner(Some(42)).unwrap().winner, first.winner);

        state.draw_winner(None).unwrap();
        state.draw_winner(None).unwrap();
        assert!(state.remaining().is_empty());
        assert_eq!(state.round(), 3);

        let winners: HashSet<_> = state.history().winners().cloned().collect();
        assert_eq!(winners.len(), 3);

        let err = state.draw_winner(None).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(state.history().len(), 3);
        state.audit_history().unwrap();

        for round in (1..=3).rev() {
            let undo = state.undo_last_draw().unwrap();
            assert_eq!(undo.restored_round, round);
        }
        assert_eq!(state.round(), 0);
        assert!(state.history().is_empty());

        let remaining: HashSet<_> = state.remaining().iter().cloned().collect();
        let participants: HashSet<_> = state.participants().iter().cloned().collect();
        assert_eq!(remaining, participants);
        assert!(matches!(
            state.undo_last_draw(),
            Err(ArisanError::EmptyHistory)
        ));
    }

    #[test]
    fn test_recorded_draws_replay_from_history() {
        let mut state = CycleState::with_participants(["Ani", "Budi", "Cici", "Dedi", "Eko"]);
        while !state.remaining().is_empty() {
            state.draw_winner(None).unwrap();
        }

        for record in state.history().records() {
            assert_eq!(replay(record.seed, record.pool_size), Some(record.draw_index));
        }
    }
}
