pub mod draw;
pub mod roster;
pub mod session;

pub use draw::{handle_draw_command, handle_replay_command, DrawArgs, ReplayArgs};
pub use roster::{handle_roster_command, RosterCommands};
pub use session::{run_session, SessionArgs};

use arisan_core::export::history_rows;
use arisan_core::{ArisanError, CycleStatus, HistoryLedger, Participant, SeedOrigin};
use comfy_table::{presets::UTF8_FULL, Table};

pub(crate) fn names_table(header: &str, names: &[Participant]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", header]);
    for (i, name) in names.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), name.to_string()]);
    }
    table
}

pub(crate) fn history_table(history: &HistoryLedger) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Round", "Timestamp", "Seed", "Winner"]);
    for row in history_rows(history) {
        let seed = match row.seed_origin {
            SeedOrigin::UserSupplied => row.seed.to_string(),
            SeedOrigin::Generated => format!("{} (auto)", row.seed),
        };
        table.add_row(vec![row.round.to_string(), row.timestamp, seed, row.winner]);
    }
    table
}

pub(crate) fn print_status(status: CycleStatus) {
    println!(
        "Participants: {}  |  Remaining: {}  |  Current round: {}",
        status.participant_count, status.remaining_count, status.current_round_display
    );
}

// conversion from dialoguer errors, which the core crate does not know about
pub(crate) fn prompt_error(err: impl Into<dialoguer::Error>) -> ArisanError {
    ArisanError::dialog(err.into().to_string())
}
