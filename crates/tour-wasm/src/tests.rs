//! Tests for the WASM replay state machine

#[cfg(test)]
mod tests {
    use crate::replay::{ReplayState, ScreenState, MAX_DELAY_MS, MIN_DELAY_MS};
    use tour_core::{Searcher, Square, Tour};

    fn five_by_five() -> Tour {
        Searcher::with_size(5)
            .find_tour(Square::new(0, 0))
            .expect("in-bounds start")
    }

    #[test]
    fn test_new_replay_starts_at_first_square() {
        let state = ReplayState::new(five_by_five(), 500.0);
        assert_eq!(state.screen(), ScreenState::Replaying);
        assert_eq!(state.shown(), 1);
        assert_eq!(state.len(), 25);
        assert_eq!(state.current_square(), Some(Square::new(0, 0)));
    }

    #[test]
    fn test_empty_tour_has_nothing_to_replay() {
        let tour = Searcher::with_size(3).find_tour(Square::new(0, 0)).unwrap();
        let mut state = ReplayState::new(tour, 500.0);
        assert_eq!(state.screen(), ScreenState::Empty);
        assert_eq!(state.shown(), 0);
        assert_eq!(state.current_square(), None);

        // No key does anything without a tour
        assert!(!state.handle_key(" "));
        assert!(!state.handle_key("r"));
    }

    #[test]
    fn test_single_square_tour_finishes_immediately() {
        let tour = Searcher::with_size(1).find_tour(Square::new(0, 0)).unwrap();
        let state = ReplayState::new(tour, 500.0);
        assert_eq!(state.screen(), ScreenState::Finished);
        assert_eq!(state.shown(), 1);
    }

    #[test]
    fn test_tick_advances_on_delay() {
        let mut state = ReplayState::new(five_by_five(), 100.0);

        // First tick arms the timer
        state.tick(1000.0);
        assert_eq!(state.shown(), 1);

        // Not enough time has passed yet
        state.tick(1050.0);
        assert_eq!(state.shown(), 1);

        state.tick(1100.0);
        assert_eq!(state.shown(), 2);

        state.tick(1205.0);
        assert_eq!(state.shown(), 3);
    }

    #[test]
    fn test_tick_does_not_advance_while_paused() {
        let mut state = ReplayState::new(five_by_five(), 100.0);
        state.toggle_pause();
        assert_eq!(state.screen(), ScreenState::Paused);

        state.tick(1000.0);
        state.tick(2000.0);
        assert_eq!(state.shown(), 1);

        // Resuming re-arms the timer instead of stepping instantly
        state.toggle_pause();
        state.tick(3000.0);
        assert_eq!(state.shown(), 1);
        state.tick(3100.0);
        assert_eq!(state.shown(), 2);
    }

    #[test]
    fn test_step_once_pauses() {
        let mut state = ReplayState::new(five_by_five(), 500.0);
        state.step_once();
        assert_eq!(state.screen(), ScreenState::Paused);
        assert_eq!(state.shown(), 2);

        state.step_once();
        assert_eq!(state.shown(), 3);
    }

    #[test]
    fn test_replay_reaches_finished() {
        let mut state = ReplayState::new(five_by_five(), 500.0);
        for _ in 0..24 {
            state.step_once();
        }
        assert_eq!(state.shown(), 25);
        assert_eq!(state.screen(), ScreenState::Finished);

        // Stepping past the end does nothing
        state.step_once();
        assert_eq!(state.shown(), 25);

        // Enter restarts from the first square
        assert!(state.handle_key("Enter"));
        assert_eq!(state.shown(), 1);
        assert_eq!(state.screen(), ScreenState::Replaying);
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut state = ReplayState::new(five_by_five(), 500.0);

        assert!(state.handle_key(" "));
        assert_eq!(state.screen(), ScreenState::Paused);
        assert!(state.handle_key("p"));
        assert_eq!(state.screen(), ScreenState::Replaying);

        assert!(state.handle_key("ArrowRight"));
        assert_eq!(state.shown(), 2);
        assert!(state.handle_key("n"));
        assert_eq!(state.shown(), 3);

        assert!(state.handle_key("r"));
        assert_eq!(state.shown(), 1);

        assert!(state.handle_key("+"));
        assert_eq!(state.delay_ms(), 450.0);
        assert!(state.handle_key("-"));
        assert_eq!(state.delay_ms(), 500.0);

        assert!(!state.handle_key("x"));
    }

    #[test]
    fn test_delay_is_clamped() {
        let mut state = ReplayState::new(five_by_five(), 10_000.0);
        assert_eq!(state.delay_ms(), MAX_DELAY_MS);

        state.set_delay_ms(1.0);
        assert_eq!(state.delay_ms(), MIN_DELAY_MS);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = ReplayState::new(five_by_five(), 500.0);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"size\":5"));
        assert!(json.contains("\"shown\":1"));
        assert!(json.contains("\"len\":25"));
    }
}
