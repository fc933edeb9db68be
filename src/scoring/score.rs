use crate::models::{Grade, Tier};

/// Points per trophy level. XP measures progress through the current span.
const LEVEL_SPAN: u64 = 50;

/// Presentation numbers derived from a raw score. Construction is the only
/// place level, XP, grade and tier are computed, so the four always agree.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSummary {
    pub score: u64,
    pub level: u64,
    pub xp_percent: u8,
    pub grade: Grade,
    pub tier: Tier,
}

impl ScoreSummary {
    pub fn from_score(score: u64) -> Self {
        let grade = Grade::from_score(score);
        let xp_percent = ((score % LEVEL_SPAN) * 2).min(100) as u8;

        Self {
            score,
            level: score / LEVEL_SPAN,
            xp_percent,
            grade,
            tier: grade.tier(),
        }
    }
}
