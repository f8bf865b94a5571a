use crate::{trim_query, AppState, Effect, EncodeOutcome, Msg};

/// Seeds the page with `query` and settles it immediately, without waiting
/// for the debounce window.
pub fn init(mut state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    state.set_raw_input(query.to_string());
    let effects = settle(&mut state);
    (state, effects)
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if !state.set_raw_input(text) {
                return (state, Vec::new());
            }
            let delay = state.debouncer_mut().window();
            let ticket = state.debouncer_mut().restart();
            vec![Effect::ScheduleSettle { ticket, delay }]
        }
        Msg::DebounceElapsed { ticket } => {
            if !state.debouncer_mut().settle(ticket) {
                return (state, Vec::new());
            }
            settle(&mut state)
        }
        Msg::EncodeFinished {
            generation,
            outcome,
        } => {
            let image = match outcome {
                EncodeOutcome::Encoded(image) => Some(image),
                EncodeOutcome::Failed => None,
            };
            // A stale result is dropped here; the newer request owns the display.
            state.apply_encoded(generation, image);
            Vec::new()
        }
        Msg::DownloadClicked => match state.image() {
            Some(image) => vec![Effect::SaveImage {
                image: image.clone(),
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished(outcome) => {
            state.set_last_download(outcome);
            Vec::new()
        }
    };

    (state, effects)
}

fn settle(state: &mut AppState) -> Vec<Effect> {
    let query = trim_query(state.raw_input()).to_string();
    if query == state.settled_query() {
        return Vec::new();
    }
    match state.settle_query(query.clone()) {
        Some(generation) => vec![Effect::Encode {
            generation,
            text: query,
        }],
        None => Vec::new(),
    }
}

