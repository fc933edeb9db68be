use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Letter rank derived from the total score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    APlus, // 300+
    A,     // 200-299
    B,     // 100-199
    C,     // 50-99
    D,     // 0-49
}

impl Grade {
    pub fn from_score(score: u64) -> Self {
        match score {
            s if s >= 300 => Grade::APlus,
            s if s >= 200 => Grade::A,
            s if s >= 100 => Grade::B,
            s if s >= 50 => Grade::C,
            _ => Grade::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Each grade maps to exactly one trophy tier.
    pub fn tier(&self) -> Tier {
        match self {
            Grade::APlus => Tier::Mythic,
            Grade::A => Tier::Legendary,
            Grade::B => Tier::Gold,
            Grade::C => Tier::Silver,
            Grade::D => Tier::Iron,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tier {
    Mythic,
    Legendary,
    Gold,
    Silver,
    Iron,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Mythic => "Mythic",
            Tier::Legendary => "Legendary",
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Iron => "Iron",
        }
    }
}

/// Aggregated, render-ready profile statistics. The renderer consumes this
/// struct as-is and never recomputes any derived field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,

    /// Stars summed over non-fork repositories.
    pub stars: u64,
    /// Public repository count reported by the profile, or the number of
    /// collected non-fork repositories when the profile omits it.
    pub repos: u64,
    pub followers: u64,

    /// Pre-formatted display strings with thousands separators.
    pub formatted_stars: String,
    pub formatted_repos: String,
    pub formatted_followers: String,

    pub score: u64,
    pub level: u64,
    /// Progress toward the next level, 0-100.
    pub xp_percent: u8,
    pub grade: Grade,
    pub tier: Tier,

    pub fetched_at: DateTime<Utc>,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            username: "unknown".to_string(),
            display_name: String::new(),
            avatar_url: None,
            stars: 0,
            repos: 0,
            followers: 0,
            formatted_stars: "0".to_string(),
            formatted_repos: "0".to_string(),
            formatted_followers: "0".to_string(),
            score: 0,
            level: 0,
            xp_percent: 0,
            grade: Grade::D,
            tier: Tier::Iron,
            fetched_at: Utc::now(),
        }
    }
}
