//! Points for catches and the end-of-round motif bonus

use serde::{Deserialize, Serialize};

use super::state::FallingGlyph;
use crate::consts::MOTIF_BONUS;
use crate::tuning::{Glyph, MOTIF, Tuning};

/// Points awarded for catching `glyph`
pub fn catch_points(glyph: &FallingGlyph, tuning: &Tuning) -> u64 {
    if glyph.rainbow {
        glyph.base_points * tuning.rainbow_multiplier
    } else {
        glyph.base_points
    }
}

/// Concatenate a catch sequence into its display sentence
pub fn sentence(caught: &[Glyph]) -> String {
    caught.iter().map(|g| g.as_char()).collect()
}

pub fn motif_str() -> String {
    sentence(&MOTIF)
}

/// Non-overlapping occurrences of the motif in `sentence`
pub fn motif_count(sentence: &str) -> usize {
    sentence.matches(motif_str().as_str()).count()
}

/// End-of-round bonus for a finished sentence
pub fn motif_bonus(sentence: &str) -> u64 {
    motif_count(sentence) as u64 * MOTIF_BONUS
}

/// A run of the result sentence, flagged when it is a motif occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub motif: bool,
}

/// Split `text` around motif occurrences so a renderer can emphasise them
pub fn highlight_segments(text: &str) -> Vec<Segment> {
    let motif = motif_str();
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(at) = rest.find(motif.as_str()) {
        if at > 0 {
            segments.push(Segment {
                text: rest[..at].to_string(),
                motif: false,
            });
        }
        segments.push(Segment {
            text: motif.clone(),
            motif: true,
        });
        rest = &rest[at + motif.len()..];
    }
    if !rest.is_empty() {
        segments.push(Segment {
            text: rest.to_string(),
            motif: false,
        });
    }
    segments
}
