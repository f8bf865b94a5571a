use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use qrpage_core::{update, AppState, Effect, Msg, Ticket, DEFAULT_DEBOUNCE_WINDOW};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn type_text(state: AppState, text: &str) -> (AppState, Ticket) {
    let (state, effects) = update(state, Msg::InputChanged(text.to_string()));
    match effects.as_slice() {
        [Effect::ScheduleSettle { ticket, .. }] => (state, *ticket),
        other => panic!("expected a single ScheduleSettle, got {other:?}"),
    }
}

#[test]
fn input_change_schedules_settle_with_window() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::InputChanged("hello".into()));

    assert_eq!(
        effects,
        vec![Effect::ScheduleSettle {
            ticket: 1,
            delay: DEFAULT_DEBOUNCE_WINDOW,
        }]
    );
    assert_eq!(state.raw_input(), "hello");
    assert_eq!(state.settled_query(), "");
}

#[test]
fn custom_window_is_used_for_schedule() {
    init_logging();
    let state = AppState::with_debounce_window(Duration::from_millis(120));
    let (_state, effects) = update(state, Msg::InputChanged("a".into()));

    assert_eq!(
        effects,
        vec![Effect::ScheduleSettle {
            ticket: 1,
            delay: Duration::from_millis(120),
        }]
    );
}

#[test]
fn settled_query_is_trimmed_input() {
    init_logging();
    let (state, ticket) = type_text(AppState::new(), "  https://example.com \t");
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket });

    assert_eq!(state.settled_query(), "https://example.com");
    assert_eq!(
        effects,
        vec![Effect::Encode {
            generation: 1,
            text: "https://example.com".to_string(),
        }]
    );
}

#[test]
fn two_changes_within_window_settle_once_for_final_value() {
    init_logging();
    let (state, first) = type_text(AppState::new(), "ab");
    let (state, second) = type_text(state, "abc");
    assert_ne!(first, second);

    // The superseded timer fires anyway; it must not settle anything.
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: first });
    assert!(effects.is_empty());
    assert_eq!(state.settled_query(), "");

    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: second });
    assert_eq!(state.settled_query(), "abc");
    assert_eq!(effects.len(), 1);

    // Only one emission per quiet period.
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: second });
    assert!(effects.is_empty());
    assert_eq!(state.settled_query(), "abc");
}

#[test]
fn unchanged_input_does_not_reschedule() {
    init_logging();
    let (state, _ticket) = type_text(AppState::new(), "same");
    let (_state, effects) = update(state, Msg::InputChanged("same".into()));

    assert!(effects.is_empty());
}

#[test]
fn resettling_to_same_trimmed_text_does_not_reencode() {
    init_logging();
    let (state, ticket) = type_text(AppState::new(), "value");
    let (state, _effects) = update(state, Msg::DebounceElapsed { ticket });
    let generation = state.generation();

    let (state, ticket) = type_text(state, "value   ");
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket });

    assert!(effects.is_empty());
    assert_eq!(state.generation(), generation);
    assert_eq!(state.raw_input(), "value   ");
    assert_eq!(state.settled_query(), "value");
}

#[test]
fn whitespace_only_input_settles_to_empty() {
    init_logging();
    let (state, ticket) = type_text(AppState::new(), "x");
    let (state, _effects) = update(state, Msg::DebounceElapsed { ticket });
    let (state, ticket) = type_text(state, "   ");
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket });

    assert!(effects.is_empty());
    assert_eq!(state.settled_query(), "");
    assert!(!state.is_generating());
    assert!(state.image().is_none());
}

#[test]
fn byte_order_mark_is_trimmed_from_pasted_text() {
    init_logging();
    let (state, ticket) = type_text(AppState::new(), "\u{FEFF}abc");
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket });

    assert_eq!(state.settled_query(), "abc");
    assert_eq!(
        effects,
        vec![Effect::Encode {
            generation: 1,
            text: "abc".to_string(),
        }]
    );
}

#[test]
fn next_line_control_is_kept_when_settling() {
    init_logging();
    let (state, ticket) = type_text(AppState::new(), "abc\u{0085}");
    let (state, _effects) = update(state, Msg::DebounceElapsed { ticket });

    assert_eq!(state.settled_query(), "abc\u{0085}");
}
