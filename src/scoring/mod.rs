pub mod config;
pub mod engine;
pub mod recommendation;
pub mod skills;

pub use config::FrameworkAggregation;
pub use engine::{calculate_scores, AnswerCounts, FrameworkScores, Scores};
pub use recommendation::{recommend, Recommendation, ScoreBand, Verdict};
pub use skills::{assess_skills, SkillGap, SkillStatus};

use crate::bank::QuestionBank;
use crate::session::ResponseSet;

/// Scores plus everything derived from them, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub scores: Scores,
    pub recommendation: Recommendation,
    pub skills: Vec<SkillGap>,
}

/// Score `responses` and derive the recommendation and skill gaps.
pub fn assess(
    bank: &QuestionBank,
    responses: &ResponseSet,
    aggregation: FrameworkAggregation,
) -> Assessment {
    let scores = calculate_scores(bank, responses, aggregation);
    let recommendation = recommend(scores.overall);
    let skills = assess_skills(&scores, &bank.guidance.skills);
    tracing::debug!(
        overall = scores.overall,
        verdict = %recommendation.verdict,
        confidence = recommendation.confidence,
        "assessment scored"
    );
    Assessment {
        scores,
        recommendation,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;

    #[test]
    fn test_assess_without_responses() {
        let bank = builtin_bank();
        let result = assess(&bank, &ResponseSet::new(), FrameworkAggregation::LastWrite);
        assert_eq!(result.scores.overall, 0.0);
        assert_eq!(result.recommendation.verdict, Verdict::No);
        assert_eq!(result.recommendation.confidence, 40.0);
        assert_eq!(result.skills.len(), bank.guidance.skills.len());
        assert!(result.skills.iter().all(|s| s.status == SkillStatus::Critical));
    }
}
