use std::fmt;

use super::engine::Scores;
use crate::bank::{ScoreSource, SkillCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillStatus {
    Good,
    NeedsWork,
    Critical,
}

impl SkillStatus {
    /// GOOD at or above `required`, NEEDS WORK within 70% of it, CRITICAL below.
    pub fn classify(current: f64, required: f64) -> Self {
        if current >= required {
            SkillStatus::Good
        } else if current >= required * 0.7 {
            SkillStatus::NeedsWork
        } else {
            SkillStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillStatus::Good => "GOOD",
            SkillStatus::NeedsWork => "NEEDS WORK",
            SkillStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGap {
    pub name: String,
    pub current: f64,
    pub required: f64,
    pub status: SkillStatus,
}

fn source_score(scores: &Scores, source: ScoreSource) -> f64 {
    match source {
        ScoreSource::Psychometric => scores.psychometric,
        ScoreSource::Technical => scores.technical,
        other => other
            .category()
            .map(|c| scores.framework.get(c))
            .unwrap_or(0.0),
    }
}

/// Compare each configured skill against the scores it derives from.
pub fn assess_skills(scores: &Scores, checks: &[SkillCheck]) -> Vec<SkillGap> {
    checks
        .iter()
        .map(|check| {
            let current = (source_score(scores, check.source) * check.factor).round();
            SkillGap {
                name: check.name.clone(),
                current,
                required: check.required,
                status: SkillStatus::classify(current, check.required),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::FrameworkScores;

    fn check(source: ScoreSource, factor: f64, required: f64) -> SkillCheck {
        SkillCheck {
            name: "skill".to_string(),
            source,
            factor,
            required,
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(SkillStatus::classify(70.0, 70.0), SkillStatus::Good);
        assert_eq!(SkillStatus::classify(49.0, 70.0), SkillStatus::NeedsWork);
        assert_eq!(SkillStatus::classify(48.0, 70.0), SkillStatus::Critical);
    }

    #[test]
    fn test_factor_is_applied_and_rounded() {
        let scores = Scores {
            technical: 75.0,
            ..Scores::default()
        };
        let gaps = assess_skills(&scores, &[check(ScoreSource::Technical, 0.7, 70.0)]);
        // 75 * 0.7 = 52.5 -> 53
        assert_eq!(gaps[0].current, 53.0);
        assert_eq!(gaps[0].status, SkillStatus::NeedsWork);
    }

    #[test]
    fn test_framework_source() {
        let scores = Scores {
            framework: FrameworkScores {
                cognitive: 75.0,
                ..FrameworkScores::default()
            },
            ..Scores::default()
        };
        let gaps = assess_skills(&scores, &[check(ScoreSource::Cognitive, 1.0, 65.0)]);
        assert_eq!(gaps[0].current, 75.0);
        assert_eq!(gaps[0].status, SkillStatus::Good);
    }

    #[test]
    fn test_zero_scores_are_critical() {
        let gaps = assess_skills(&Scores::default(), &[check(ScoreSource::Psychometric, 0.8, 60.0)]);
        assert_eq!(gaps[0].status, SkillStatus::Critical);
    }
}
