//! Account picker - lookup widget demo
//!
//! Type to filter accounts by name; the search runs once typing pauses.
//! The status line shows the last `selectionChanged` event.
//!
//! # Usage
//!
//! ```sh
//! # Built-in sample accounts
//! cargo run -p picker
//!
//! # Own records, preselected, faster debounce
//! cargo run -p picker -- --records accounts.json --default-id 004 --debounce-ms 300
//! ```

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lookup::{records_from_json, EffectRuntime, EffectStoreWithMiddleware, LoggingMiddleware, LookupAction, LookupConfig};
use ratatui::{backend::CrosstermBackend, Terminal};

use picker::action::PickerAction;
use picker::reducer::reducer;
use picker::state::PickerState;
use picker::ui::PickerUi;

const SAMPLE_ACCOUNTS: &str = include_str!("../data/accounts.json");

/// Account picker - lookup widget demo
#[derive(Parser, Debug)]
#[command(name = "picker")]
#[command(about = "Pick an account with a debounced autocomplete lookup")]
struct Args {
    /// JSON array of records (each needs `id` and `name`)
    #[arg(long, short)]
    records: Option<PathBuf>,

    /// JSON widget configuration (camelCase keys)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Record id to preselect
    #[arg(long)]
    default_id: Option<String>,

    /// Debounce delay in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn load_config(args: &Args) -> Result<LookupConfig> {
    let mut config = match &args.config {
        Some(path) => LookupConfig::load(path)?,
        None => LookupConfig::new().with_label("Account").with_icon("account"),
    };

    if let Some(path) = &args.records {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records from {}", path.display()))?;
        config = config.with_records(records_from_json(&json)?);
    } else if args.config.is_none() {
        config = config.with_records(records_from_json(SAMPLE_ACCOUNTS)?);
    }

    if let Some(id) = &args.default_id {
        config = config.with_default_record_id(id.clone());
    }
    if let Some(ms) = args.debounce_ms {
        config = config.with_debounce(Duration::from_millis(ms));
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Fail on bad input before entering TUI mode
    let config = load_config(&args)?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result.context("picker terminal loop failed")
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: LookupConfig,
) -> io::Result<()> {
    let init = LookupAction::LookupInit {
        records: config.records.clone(),
        default_record_id: config.default_record_id.clone(),
    };

    let store = EffectStoreWithMiddleware::new(
        PickerState::new(config),
        reducer,
        LoggingMiddleware::new(),
    );
    let mut runtime = EffectRuntime::from_store(store);
    runtime.enqueue(PickerAction::Lookup(init));

    let ui = RefCell::new(PickerUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, PickerAction::Quit),
            picker::handle_effect,
        )
        .await
}
