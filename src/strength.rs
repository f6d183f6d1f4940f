//  ____   ____                     ____
// |  _ \ |  _ \   __ _  ___  ___  / ___|  ___  _ __
// | |_) || |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \
// |  _ < |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | |
// |_| \_\|_|     \__,_||___/|___/ \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength estimation

use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use zxcvbn::zxcvbn;

pub const MAX_SCORE: u8 = 4;

/// 强度标签，由弱到强排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very strong",
        }
    }

    /// Label for a raw (unclamped, unfloored) point total.
    pub fn from_raw(raw: f64) -> Self {
        if raw >= 4.0 {
            StrengthLabel::VeryStrong
        } else if raw >= 3.0 {
            StrengthLabel::Strong
        } else if raw >= 2.0 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Weak
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    pub const EMPTY: StrengthResult = StrengthResult { score: 0, label: StrengthLabel::None };
}

/// Heuristic point total in the range 0.0..=6.0.
///
/// Points are tallied in halves so the comparison against the 0.7
/// distinct-character ratio stays exact.
pub fn raw_points(password: &str) -> f64 {
    let length = password.chars().count();
    let mut halves: u32 = 0;

    // 长度
    if length >= 12 {
        halves += 2;
    }
    if length >= 16 {
        halves += 1;
    }

    // 字符类型
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        halves += 2;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        halves += 2;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        halves += 2;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        halves += 2;
    }

    // 不重复字符比例 >= 0.7
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct * 10 >= length * 7 {
        halves += 1;
    }

    f64::from(halves) / 2.0
}

/// Estimates the strength of any string, generated or not.
///
/// The label follows the raw total while the score is the floored total
/// capped at [`MAX_SCORE`], so a raw 6.0 still reports score 4.
pub fn estimate_strength(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::EMPTY;
    }

    let raw = raw_points(password);
    StrengthResult {
        score: (raw.floor() as u8).min(MAX_SCORE),
        label: StrengthLabel::from_raw(raw),
    }
}

/// zxcvbn 的改进建议，仅用于展示，不参与评分
pub fn zxcvbn_feedback(password: &str) -> Vec<String> {
    if password.is_empty() {
        return Vec::new();
    }
    let entropy = zxcvbn(password, &[]);
    entropy.feedback().map_or_else(Vec::new, |f| {
        f.warning()
            .map(|w| w.to_string())
            .into_iter()
            .chain(f.suggestions().iter().map(|s| s.to_string()))
            .collect()
    })
}
