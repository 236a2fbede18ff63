//! Derived ratios and the heuristic quality score
//!
//! # Scoring Formula
//!
//! ```text
//! score = 100
//! debt_density = (todos + 2 × fixmes + 3 × hacks) / code_lines × 1000
//! score -= min(debt_density × 2, 20)             (only when code_lines > 0)
//! score += 5    if 0.2 ≤ comment_ratio ≤ 0.5
//! score -= 10   if comment_ratio < 0.1
//! score -= min(large_files × 0.5, 15)
//! score  = clamp(round(score, 1), 0, 100)
//! ```
//!
//! The score is advisory only. It is a deterministic function of a few
//! aggregate counts and says nothing about correctness or maintainability.

/// Bonus/penalty weights
const DEBT_DENSITY_SCALE: f64 = 1000.0;
const MAX_DEBT_PENALTY: f64 = 20.0;
const COMMENT_BONUS: f64 = 5.0;
const LOW_COMMENT_PENALTY: f64 = 10.0;
const LARGE_FILE_PENALTY: f64 = 0.5;
const MAX_LARGE_FILE_PENALTY: f64 = 15.0;

/// Aggregates the quality score is computed from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityInputs {
    pub todos: usize,
    pub fixmes: usize,
    pub hacks: usize,
    pub code_lines: usize,
    /// Already rounded to three decimals
    pub comment_ratio: f64,
    pub large_file_count: usize,
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `numerator / denominator` rounded, or 0 when the denominator is 0
pub fn ratio(numerator: usize, denominator: usize, decimals: i32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round_to(numerator as f64 / denominator as f64, decimals)
    }
}

pub fn comment_to_code_ratio(comment_lines: usize, code_lines: usize) -> f64 {
    ratio(comment_lines, code_lines, 3)
}

pub fn avg_lines_per_file(total_lines: usize, total_files: usize) -> f64 {
    ratio(total_lines, total_files, 1)
}

/// Code lines divided by extracted class count. Class bodies are never
/// delimited, so this is only a rough proxy.
pub fn avg_lines_per_class(code_lines: usize, class_count: usize) -> f64 {
    ratio(code_lines, class_count, 1)
}

pub fn quality_score(inputs: &QualityInputs) -> f64 {
    let mut score = 100.0;

    if inputs.code_lines > 0 {
        let weighted = inputs.todos as f64 + inputs.fixmes as f64 * 2.0 + inputs.hacks as f64 * 3.0;
        let debt_density = weighted / inputs.code_lines as f64 * DEBT_DENSITY_SCALE;
        score -= (debt_density * 2.0).min(MAX_DEBT_PENALTY);
    }

    let ratio = inputs.comment_ratio;
    if (0.2..=0.5).contains(&ratio) {
        score += COMMENT_BONUS;
    } else if ratio < 0.1 {
        score -= LOW_COMMENT_PENALTY;
    }

    if inputs.large_file_count > 0 {
        score -= (inputs.large_file_count as f64 * LARGE_FILE_PENALTY).min(MAX_LARGE_FILE_PENALTY);
    }

    round_to(score, 1).clamp(0.0, 100.0)
}
