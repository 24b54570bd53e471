use std::collections::HashMap;

use super::config::FrameworkAggregation;
use crate::bank::{Category, QuestionBank, SectionRole};
use crate::session::ResponseSet;

/// The six WISCAR sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameworkScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability: f64,
    pub real_world: f64,
}

impl FrameworkScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Will => self.will,
            Category::Interest => self.interest,
            Category::Skill => self.skill,
            Category::Cognitive => self.cognitive,
            Category::Ability => self.ability,
            Category::RealWorld => self.real_world,
        }
    }

    fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::Will => &mut self.will,
            Category::Interest => &mut self.interest,
            Category::Skill => &mut self.skill,
            Category::Cognitive => &mut self.cognitive,
            Category::Ability => &mut self.ability,
            Category::RealWorld => &mut self.real_world,
        };
        *slot = value;
    }

    /// Category/score pairs in WISCAR order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Unweighted mean of all six sub-scores (unanswered categories count as 0)
    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum::<f64>() / Category::ALL.len() as f64
    }
}

/// How many answers fed each dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerCounts {
    pub psychometric: usize,
    pub technical: usize,
    pub framework: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scores {
    pub psychometric: f64,
    pub technical: f64,
    pub framework: FrameworkScores,
    pub overall: f64,
    pub counts: AnswerCounts,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Score a response set against the bank.
///
/// Responses are partitioned by the role of the section that owns their
/// question; answers to questions the bank doesn't know are ignored.
pub fn calculate_scores(
    bank: &QuestionBank,
    responses: &ResponseSet,
    aggregation: FrameworkAggregation,
) -> Scores {
    let mut psychometric = Vec::new();
    let mut technical = Vec::new();
    let mut by_category: HashMap<Category, Vec<f64>> = HashMap::new();
    let mut framework = FrameworkScores::default();
    let mut framework_count = 0;

    for response in responses {
        let Some((section, question)) = bank.find_question(&response.question_id) else {
            tracing::debug!(question = %response.question_id, "response for unknown question ignored");
            continue;
        };

        match section.role {
            SectionRole::Psychometric => psychometric.push(response.value),
            SectionRole::Technical => technical.push(response.value),
            SectionRole::Framework => {
                let Some(category) = question.category else {
                    continue;
                };
                framework_count += 1;
                match aggregation {
                    FrameworkAggregation::LastWrite => framework.set(category, response.value),
                    FrameworkAggregation::Mean => {
                        by_category.entry(category).or_default().push(response.value)
                    }
                }
            }
            SectionRole::Info => {}
        }
    }

    if aggregation == FrameworkAggregation::Mean {
        for (category, values) in &by_category {
            framework.set(*category, mean(values));
        }
    }

    let psychometric_score = mean(&psychometric);
    let technical_score = mean(&technical);
    let overall = (psychometric_score + technical_score + framework.mean()) / 3.0;

    Scores {
        psychometric: psychometric_score,
        technical: technical_score,
        framework,
        overall,
        counts: AnswerCounts {
            psychometric: psychometric.len(),
            technical: technical.len(),
            framework: framework_count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{builtin_bank, AnswerOption, Guidance, Question, Section};

    fn opts() -> Vec<AnswerOption> {
        [0.0, 50.0, 60.0, 70.0, 80.0, 100.0]
            .iter()
            .map(|v| AnswerOption {
                id: format!("v{}", *v as u32),
                text: v.to_string(),
                value: *v,
            })
            .collect()
    }

    fn q(id: &str, category: Option<Category>) -> Question {
        Question {
            id: id.to_string(),
            prompt: id.to_string(),
            options: opts(),
            category,
        }
    }

    fn section(role: SectionRole, questions: Vec<Question>) -> Section {
        Section {
            title: role.label().to_string(),
            description: String::new(),
            role,
            questions,
            details: vec![],
        }
    }

    /// Scoring sections deliberately out of the usual order, to show that
    /// section role, not position, decides the dimension.
    fn bank() -> QuestionBank {
        QuestionBank {
            title: "t".to_string(),
            tagline: "t".to_string(),
            learn_more_url: None,
            features: vec![],
            stats: vec![],
            sections: vec![
                section(
                    SectionRole::Framework,
                    vec![
                        q("will", Some(Category::Will)),
                        q("will2", Some(Category::Will)),
                        q("interest", Some(Category::Interest)),
                        q("skill", Some(Category::Skill)),
                        q("cognitive", Some(Category::Cognitive)),
                        q("ability", Some(Category::Ability)),
                        q("real", Some(Category::RealWorld)),
                    ],
                ),
                section(SectionRole::Info, vec![]),
                section(SectionRole::Technical, vec![q("t1", None), q("t2", None)]),
                section(SectionRole::Psychometric, vec![q("p1", None), q("p2", None)]),
            ],
            guidance: Guidance::default(),
        }
    }

    #[test]
    fn test_no_responses_scores_zero() {
        let scores = calculate_scores(&bank(), &ResponseSet::new(), FrameworkAggregation::LastWrite);
        assert_eq!(scores, Scores::default());
    }

    #[test]
    fn test_empty_partition_scores_zero() {
        let mut responses = ResponseSet::new();
        responses.record("t1", "v80", 80.0);
        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.technical, 80.0);
        assert_eq!(scores.psychometric, 0.0);
        assert_eq!(scores.counts.psychometric, 0);
    }

    #[test]
    fn test_means_and_overall() {
        let mut responses = ResponseSet::new();
        responses.record("p1", "v100", 100.0);
        responses.record("p2", "v60", 60.0);
        responses.record("t1", "v50", 50.0);
        responses.record("t2", "v70", 70.0);
        for id in ["will", "interest", "skill", "cognitive", "ability", "real"] {
            responses.record(id, "v70", 70.0);
        }

        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.psychometric, 80.0);
        assert_eq!(scores.technical, 60.0);
        assert_eq!(scores.framework.mean(), 70.0);
        assert!((scores.overall - 70.0).abs() < 1e-9);
        assert_eq!(
            scores.counts,
            AnswerCounts {
                psychometric: 2,
                technical: 2,
                framework: 6
            }
        );
    }

    #[test]
    fn test_last_write_overwrites_category() {
        let mut responses = ResponseSet::new();
        responses.record("will", "v100", 100.0);
        responses.record("will2", "v0", 0.0);
        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.framework.will, 0.0);

        // Re-answering the first question makes it the latest write again
        responses.record("will", "v80", 80.0);
        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.framework.will, 80.0);
    }

    #[test]
    fn test_mean_aggregation_averages_category() {
        let mut responses = ResponseSet::new();
        responses.record("will", "v100", 100.0);
        responses.record("will2", "v0", 0.0);
        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::Mean);
        assert_eq!(scores.framework.will, 50.0);
        assert_eq!(scores.framework.interest, 0.0);
    }

    #[test]
    fn test_unknown_question_ignored() {
        let mut responses = ResponseSet::new();
        responses.record("ghost", "v100", 100.0);
        let scores = calculate_scores(&bank(), &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.overall, 0.0);
    }

    #[test]
    fn test_all_max_answers_on_builtin_bank() {
        let bank = builtin_bank();
        let mut responses = ResponseSet::new();
        for (_, question) in bank.questions() {
            let best = question
                .options
                .iter()
                .max_by(|a, b| a.value.total_cmp(&b.value))
                .unwrap();
            responses.record(&question.id, &best.id, best.value);
        }
        let scores = calculate_scores(&bank, &responses, FrameworkAggregation::LastWrite);
        assert_eq!(scores.overall, 100.0);
    }

    #[test]
    fn test_framework_iter_order() {
        let order: Vec<Category> = FrameworkScores::default().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
