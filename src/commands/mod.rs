pub mod config;
pub mod password_gen;
pub mod templates;
pub mod testpass;

use rpassgen::strength::{StrengthResult, MAX_SCORE};

/// 强度条，已得分的格子实心显示
pub fn strength_bar(score: u8) -> String {
    let filled = score.min(MAX_SCORE) as usize;
    format!("{}{}", "■".repeat(filled), "□".repeat(MAX_SCORE as usize - filled))
}

pub fn format_strength(result: &StrengthResult) -> String {
    format!("{} [{}] (score: {}/{})", result.label, strength_bar(result.score), result.score, MAX_SCORE)
}
