use serde::{Deserialize, Serialize};

/// Weights for the chunk-parser scoring function. Lower total score wins.
///
/// Field names and roles match the scoring terms named by the tokenizer
/// design: each is a non-negative multiplier applied to one derived counter
/// of a `ParsedChunk`. Users may construct alternate profiles by value; the
/// DP parser never mutates one. `Deserialize` derives per-field defaults so
/// the CLI's `--profile` JSON override file only needs to name the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerProfile {
    pub unknown_weight: f64,
    pub words_weight: f64,
    pub freq_weight: f64,
    pub unknown_coverage_weight: f64,
    pub unknown_pos_count_weight: f64,
    pub initial_pos_arr_weight: f64,
    pub space_guide_weight: f64,
    pub preferred_pos_weight: f64,
    pub pos_count_weight: f64,
}

impl Default for TokenizerProfile {
    fn default() -> Self {
        TokenizerProfile {
            unknown_weight: 0.3,
            words_weight: 0.1,
            freq_weight: 0.2,
            unknown_coverage_weight: 0.5,
            unknown_pos_count_weight: 0.1,
            initial_pos_arr_weight: 0.2,
            space_guide_weight: 0.3,
            preferred_pos_weight: 0.2,
            pos_count_weight: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_non_negative() {
        let p = TokenizerProfile::default();
        for w in [
            p.unknown_weight,
            p.words_weight,
            p.freq_weight,
            p.unknown_coverage_weight,
            p.unknown_pos_count_weight,
            p.initial_pos_arr_weight,
            p.space_guide_weight,
            p.preferred_pos_weight,
            p.pos_count_weight,
        ] {
            assert!(w >= 0.0);
        }
    }

    #[test]
    fn partial_json_override_falls_back_to_defaults() {
        let profile: TokenizerProfile = serde_json::from_str(r#"{"unknown_weight": 1.0}"#).unwrap();
        assert_eq!(profile.unknown_weight, 1.0);
        assert_eq!(profile.words_weight, TokenizerProfile::default().words_weight);
    }
}
