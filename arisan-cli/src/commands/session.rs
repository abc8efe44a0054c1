use super::{history_table, names_table, print_status, prompt_error};
use crate::animation;
use crate::config::CliConfig;
use arisan_core::{export, parse_seed, roster, ArisanError, CycleState, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "riwayat_arisan_nama.xlsx";

#[derive(Args)]
pub struct SessionArgs {
    /// Roster file to start with
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum Action {
    Draw,
    Undo,
    Reset,
    Remaining,
    History,
    EditRoster,
    Import,
    Export,
    Quit,
}

const ACTIONS: [(Action, &str); 9] = [
    (Action::Draw, "Draw this round's winner"),
    (Action::Undo, "Undo last draw"),
    (Action::Reset, "Reset cycle (everyone back in)"),
    (Action::Remaining, "Show remaining participants"),
    (Action::History, "Show history"),
    (Action::EditRoster, "Edit roster"),
    (Action::Import, "Import roster file"),
    (Action::Export, "Export history"),
    (Action::Quit, "Quit"),
];

/// Interactive draw session. One `CycleState` lives for the whole loop.
pub fn run_session(args: SessionArgs, config: &CliConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut state = CycleState::new(config.core.dedup);

    if let Some(path) = args.roster {
        import_roster(&mut state, &path, config)?;
    }

    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();

    loop {
        println!();
        print_status(state.status());

        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        let outcome = match ACTIONS[choice].0 {
            Action::Draw => draw(&mut state, config, &theme),
            Action::Undo => undo(&mut state),
            Action::Reset => {
                state.reset_cycle();
                println!("Cycle reset. Every participant is back in the draw.");
                Ok(())
            }
            Action::Remaining => {
                show_remaining(&state);
                Ok(())
            }
            Action::History => {
                show_history(&state);
                Ok(())
            }
            Action::EditRoster => edit_roster(&mut state, &theme),
            Action::Import => prompt_import(&mut state, config, &theme),
            Action::Export => prompt_export(&state, config, &theme),
            Action::Quit => break,
        };

        // nothing inside the session is fatal
        if let Err(e) = outcome {
            if e.is_recoverable() {
                println!("Warning: {}", e);
            } else {
                println!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn draw(state: &mut CycleState, config: &CliConfig, theme: &ColorfulTheme) -> Result<()> {
    if state.remaining().is_empty() {
        return Err(ArisanError::EmptyPool);
    }

    let input: String = Input::with_theme(theme)
        .with_prompt("Seed (optional, a number makes the draw repeatable)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let seed = match parse_seed(&input) {
        Ok(seed) => seed,
        Err(e) => {
            println!("Warning: {}. Ignored.", e);
            None
        }
    };

    let pool = state.remaining().to_vec();
    let record = state.draw_winner(seed)?;
    animation::spin(&pool, &record.winner, &config.animation)?;

    println!(
        "🏆 Round #{} winner: {} (seed {})",
        record.round, record.winner, record.seed
    );
    if state.is_cycle_complete() {
        println!("Everyone has won this cycle.");
    }
    Ok(())
}

fn undo(state: &mut CycleState) -> Result<()> {
    let undo = state.undo_last_draw()?;
    println!(
        "Round #{} undone. {} is back in the pool.",
        undo.restored_round, undo.restored_winner
    );
    Ok(())
}

fn show_remaining(state: &CycleState) {
    if state.remaining().is_empty() {
        println!("Nobody left in the pool this cycle.");
    } else {
        println!("{}", names_table("Not yet won", state.remaining()));
    }
}

fn show_history(state: &CycleState) {
    if state.history().is_empty() {
        println!("No draws yet.");
    } else {
        println!("{}", history_table(state.history()));
    }
}

fn import_roster(state: &mut CycleState, path: &Path, config: &CliConfig) -> Result<()> {
    // read fully before touching the state so a bad file leaves it alone
    let raw = roster::import_file(path, &config.core.name_column)?;
    state.set_participants(&raw);
    println!("Imported {} participants.", state.participants().len());
    Ok(())
}

fn prompt_import(state: &mut CycleState, config: &CliConfig, theme: &ColorfulTheme) -> Result<()> {
    let path: String = Input::with_theme(theme)
        .with_prompt("Roster file")
        .interact_text()
        .map_err(prompt_error)?;

    if !state.history().is_empty() {
        let proceed = Confirm::with_theme(theme)
            .with_prompt("Importing starts a new cycle and clears the history. Continue?")
            .default(false)
            .interact()
            .map_err(prompt_error)?;
        if !proceed {
            return Ok(());
        }
    }

    import_roster(state, Path::new(path.trim()), config)
}

fn prompt_export(state: &CycleState, config: &CliConfig, theme: &ColorfulTheme) -> Result<()> {
    if state.history().is_empty() {
        println!("No draws yet.");
        return Ok(());
    }

    let default_path = config.data_dir.join(HISTORY_FILE);
    let path: String = Input::with_theme(theme)
        .with_prompt("Export to (xlsx, csv or json)")
        .default(default_path.display().to_string())
        .interact_text()
        .map_err(prompt_error)?;

    let path = PathBuf::from(path.trim());
    export::export_history(&path, state.history(), &config.core)?;
    println!("History exported to {}", path.display());
    Ok(())
}

fn edit_roster(state: &mut CycleState, theme: &ColorfulTheme) -> Result<()> {
    let options = [
        "Edit in $EDITOR",
        "Add names",
        "Remove a name",
        "Clear everything",
        "Back",
    ];
    let choice = Select::with_theme(theme)
        .with_prompt("Any roster change restarts the cycle")
        .items(&options)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    let current = state.participants().names();
    let edited: Vec<String> = match choice {
        0 => {
            let text = Editor::new()
                .edit(&current.join("\n"))
                .map_err(prompt_error)?;
            match text {
                Some(text) => roster::parse_lines(&text),
                None => return Ok(()),
            }
        }
        1 => {
            let input: String = Input::with_theme(theme)
                .with_prompt("Names, separated by commas")
                .interact_text()
                .map_err(prompt_error)?;
            current
                .into_iter()
                .chain(input.split(',').map(|s| s.to_string()))
                .collect()
        }
        2 => {
            if current.is_empty() {
                println!("Roster is empty.");
                return Ok(());
            }
            let idx = Select::with_theme(theme)
                .with_prompt("Remove who?")
                .items(&current)
                .interact()
                .map_err(prompt_error)?;
            current
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, name)| name.clone())
                .collect()
        }
        3 => {
            let confirmed = Confirm::with_theme(theme)
                .with_prompt("Remove every participant and the history?")
                .default(false)
                .interact()
                .map_err(prompt_error)?;
            if confirmed {
                state.set_participants(Vec::<String>::new());
                println!("Roster cleared.");
            }
            return Ok(());
        }
        _ => return Ok(()),
    };

    if state.apply_roster_edit(&edited) {
        println!(
            "Roster changed, cycle reset: {} participants.",
            state.participants().len()
        );
    } else {
        println!("No changes.");
    }
    Ok(())
}
