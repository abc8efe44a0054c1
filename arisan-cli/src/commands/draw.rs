use super::history_table;
use crate::animation;
use crate::config::CliConfig;
use arisan_core::{export, parse_seed_lenient, replay, roster, ArisanError, CycleState, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct DrawArgs {
    /// Roster file (csv, xlsx, xls, ods or txt)
    pub path: PathBuf,
    /// Seed applied to every round; non-numeric input is ignored
    #[arg(short, long)]
    pub seed: Option<String>,
    /// Number of rounds to draw
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "all")]
    pub count: usize,
    /// Draw until the pool is empty
    #[arg(short, long)]
    pub all: bool,
    /// Export the history afterwards (xlsx, csv or json)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Seed recorded for the draw
    #[arg(long)]
    pub seed: u64,
    /// Remaining pool size when the draw happened
    #[arg(long)]
    pub pool_size: usize,
}

pub fn handle_draw_command(args: DrawArgs, config: &CliConfig) -> Result<()> {
    let raw = roster::import_file(&args.path, &config.core.name_column)?;
    let mut state = CycleState::new(config.core.dedup);
    state.set_participants(&raw);

    if state.participants().is_empty() {
        return Err(ArisanError::EmptyPool);
    }

    let seed = args.seed.as_deref().and_then(parse_seed_lenient);
    let rounds = if args.all {
        state.remaining().len()
    } else {
        args.count
    };

    for _ in 0..rounds {
        let pool = state.remaining().to_vec();
        let record = match state.draw_winner(seed) {
            Ok(record) => record,
            Err(ArisanError::EmptyPool) => {
                println!("Pool exhausted after round {}", state.round());
                break;
            }
            Err(e) => return Err(e),
        };
        animation::spin(&pool, &record.winner, &config.animation)?;
        println!("Round #{} winner: {}", record.round, record.winner);
    }

    state.audit_history()?;
    println!();
    println!("{}", history_table(state.history()));

    if let Some(path) = args.export {
        export::export_history(&path, state.history(), &config.core)?;
        println!("History exported to {}", path.display());
    }

    Ok(())
}

pub fn handle_replay_command(args: ReplayArgs) -> Result<()> {
    let idx = replay(args.seed, args.pool_size).ok_or(ArisanError::EmptyPool)?;

    println!(
        "Seed {} over a pool of {} selects index {} (entry #{} of the remaining list)",
        args.seed,
        args.pool_size,
        idx,
        idx + 1
    );
    Ok(())
}
