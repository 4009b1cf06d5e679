use serde::{Deserialize, Serialize};

/// Frequent-flyer tier, ordered by lifetime points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MemberLevel {
    Regular,
    Silver,
    Gold,
    Platinum,
}

impl MemberLevel {
    /// Lifetime points needed to hold this tier.
    pub fn threshold(&self) -> i64 {
        match self {
            MemberLevel::Regular => 0,
            MemberLevel::Silver => 5_000,
            MemberLevel::Gold => 20_000,
            MemberLevel::Platinum => 50_000,
        }
    }

    pub fn next(&self) -> Option<MemberLevel> {
        match self {
            MemberLevel::Regular => Some(MemberLevel::Silver),
            MemberLevel::Silver => Some(MemberLevel::Gold),
            MemberLevel::Gold => Some(MemberLevel::Platinum),
            MemberLevel::Platinum => None,
        }
    }
}

/// Highest tier whose threshold the member's lifetime points meet.
pub fn member_level_for(lifetime_points: i64) -> MemberLevel {
    [MemberLevel::Platinum, MemberLevel::Gold, MemberLevel::Silver]
        .into_iter()
        .find(|level| lifetime_points >= level.threshold())
        .unwrap_or(MemberLevel::Regular)
}

/// Where a member stands between their tier and the next
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelProgress {
    pub current_level: MemberLevel,
    pub next_level: Option<MemberLevel>,
    pub lifetime_points: i64,
    /// Points still to earn before the next tier; 0 at the top tier.
    pub points_needed: i64,
    /// Progress through the current band, 0-100.
    pub progress_percent: f64,
}

pub fn level_progress(lifetime_points: i64) -> LevelProgress {
    let current_level = member_level_for(lifetime_points);

    match current_level.next() {
        Some(next) => {
            let band = next.threshold() - current_level.threshold();
            let earned = lifetime_points - current_level.threshold();
            let progress = (earned as f64 / band as f64 * 100.0).clamp(0.0, 100.0);
            LevelProgress {
                current_level,
                next_level: Some(next),
                lifetime_points,
                points_needed: (next.threshold() - lifetime_points).max(0),
                progress_percent: progress,
            }
        }
        None => LevelProgress {
            current_level,
            next_level: None,
            lifetime_points,
            points_needed: 0,
            progress_percent: 100.0,
        },
    }
}
