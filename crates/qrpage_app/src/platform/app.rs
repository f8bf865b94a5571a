use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use page_logging::page_info;
use qrpage_core::{init, update, AppState, Msg};
use qrpage_engine::EngineSettings;
use ratatui::DefaultTerminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{self, Action};
use super::ui;

/// How long one loop iteration waits for terminal input before draining engine messages.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(config: &AppConfig, initial_query: Option<String>) -> anyhow::Result<()> {
    let options = config
        .encode
        .to_options()
        .context("invalid encode options in config")?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        msg_tx,
        EngineSettings {
            options,
            download_dir: config.download_dir.clone(),
        },
    )
    .context("failed to start engine")?;

    let state = AppState::with_debounce_window(Duration::from_millis(config.debounce_ms));
    let query = initial_query.unwrap_or_else(|| config.default_query.clone());
    let (state, effects) = init(state, &query);
    runner.enqueue(effects);
    page_info!("Page started with {} chars of initial text", query.len());

    let mut terminal = ratatui::try_init().context("failed to set up terminal")?;
    let _ = execute!(io::stdout(), EnableBracketedPaste);
    let result = event_loop(&mut terminal, state, &runner, &msg_rx);
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut state: AppState,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    terminal.draw(|frame| ui::render::draw(frame, &state.view()))?;

    loop {
        let mut inbox = Vec::new();
        let mut force_redraw = false;

        if event::poll(POLL_INTERVAL)? {
            let terminal_event = event::read()?;
            match input::translate(&terminal_event, state.raw_input()) {
                Some(Action::Quit) => {
                    page_info!("Quit requested");
                    return Ok(());
                }
                Some(Action::Msg(msg)) => inbox.push(msg),
                None => force_redraw = matches!(terminal_event, Event::Resize(..)),
            }
        }
        while let Ok(msg) = msg_rx.try_recv() {
            inbox.push(msg);
        }

        for msg in inbox {
            state = dispatch(state, msg, runner);
        }

        if state.consume_dirty() || force_redraw {
            terminal.draw(|frame| ui::render::draw(frame, &state.view()))?;
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}
