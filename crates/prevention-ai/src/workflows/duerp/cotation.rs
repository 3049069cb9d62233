use serde::{Deserialize, Serialize};

/// Exposure frequency factor of the cotation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Rare,
    Intermittent,
    Frequent,
    Continuous,
}

impl Frequency {
    pub const fn weight(self) -> u8 {
        match self {
            Self::Rare => 1,
            Self::Intermittent => 2,
            Self::Frequent => 3,
            Self::Continuous => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rare => "Rare",
            Self::Intermittent => "Intermittente",
            Self::Frequent => "Fréquente",
            Self::Continuous => "Continue",
        }
    }
}

/// Damage gravity factor of the cotation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    Minor,
    Significant,
    Severe,
    Fatal,
}

impl Gravity {
    pub const fn weight(self) -> u8 {
        match self {
            Self::Minor => 1,
            Self::Significant => 2,
            Self::Severe => 3,
            Self::Fatal => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Minor => "Bénin",
            Self::Significant => "Significatif",
            Self::Severe => "Grave",
            Self::Fatal => "Mortel",
        }
    }
}

/// Effectiveness of the existing mitigation, multiplying the raw score down
/// to the residual score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mastery {
    Effective,
    Partial,
    Absent,
}

impl Mastery {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Effective => 0.5,
            Self::Partial => 0.75,
            Self::Absent => 1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Effective => "Maîtrise bonne",
            Self::Partial => "Maîtrise partielle",
            Self::Absent => "Maîtrise absente",
        }
    }
}

/// Frequency x gravity, always in 1..=16. Zero is not a reachable score.
pub fn raw_score(frequency: Frequency, gravity: Gravity) -> u8 {
    frequency.weight() * gravity.weight()
}

/// Raw score weighted by mastery, rounded to two decimals.
pub fn residual_score(frequency: Frequency, gravity: Gravity, mastery: Mastery) -> f64 {
    let weighted = f64::from(raw_score(frequency, gravity)) * mastery.multiplier();
    (weighted * 100.0).round() / 100.0
}

/// Qualitative level for a raw or residual score. The caller chooses which
/// score it maps; boundaries are inclusive on the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 4.0 {
            Self::Low
        } else if score <= 8.0 {
            Self::Medium
        } else if score <= 12.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Faible",
            Self::Medium => "Modéré",
            Self::High => "Important",
            Self::Critical => "Critique",
        }
    }
}
