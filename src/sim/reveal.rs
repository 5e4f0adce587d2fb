//! Post-round reveal of the result sentence

use super::state::GameState;

/// Reveal one more glyph. Returns false once the whole sentence is visible.
pub fn reveal_step(state: &mut GameState) -> bool {
    if state.fully_revealed() {
        return false;
    }
    state.revealed_len += 1;
    !state.fully_revealed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_one_glyph_per_step() {
        let mut state = GameState::new();
        state.result_sentence = "品田遊".to_string();

        assert!(reveal_step(&mut state));
        assert_eq!(state.revealed_prefix(), "品");
        assert!(reveal_step(&mut state));
        assert_eq!(state.revealed_prefix(), "品田");
        assert!(!reveal_step(&mut state));
        assert_eq!(state.revealed_prefix(), "品田遊");

        // Further steps are inert
        assert!(!reveal_step(&mut state));
        assert_eq!(state.revealed_len, 3);
    }

    #[test]
    fn test_empty_sentence_is_already_revealed() {
        let mut state = GameState::new();
        assert!(!reveal_step(&mut state));
        assert_eq!(state.revealed_len, 0);
    }
}
