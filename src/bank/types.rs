use serde::{Deserialize, Serialize};
use std::fmt;

/// What a section contributes to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    /// Introductory text only, never holds questions
    Info,
    Psychometric,
    Technical,
    /// WISCAR questions, one category tag per question
    Framework,
}

impl SectionRole {
    pub fn label(&self) -> &'static str {
        match self {
            SectionRole::Info => "info",
            SectionRole::Psychometric => "psychometric",
            SectionRole::Technical => "technical",
            SectionRole::Framework => "framework",
        }
    }
}

/// The six WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Will,
        Category::Interest,
        Category::Skill,
        Category::Cognitive,
        Category::Ability,
        Category::RealWorld,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Will => "Will",
            Category::Interest => "Interest",
            Category::Skill => "Skill",
            Category::Cognitive => "Cognitive",
            Category::Ability => "Ability",
            Category::RealWorld => "Real-world fit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    /// Points awarded when chosen (0-100)
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A headed block of bullet lines shown on informational sections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InfoBlock {
    pub heading: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub role: SectionRole,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<InfoBlock>,
}

impl Section {
    pub fn is_info(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Where a skill check reads its raw score from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Psychometric,
    Technical,
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl ScoreSource {
    pub fn category(&self) -> Option<Category> {
        match self {
            ScoreSource::Psychometric | ScoreSource::Technical => None,
            ScoreSource::Will => Some(Category::Will),
            ScoreSource::Interest => Some(Category::Interest),
            ScoreSource::Skill => Some(Category::Skill),
            ScoreSource::Cognitive => Some(Category::Cognitive),
            ScoreSource::Ability => Some(Category::Ability),
            ScoreSource::RealWorld => Some(Category::RealWorld),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCheck {
    pub name: String,
    pub source: ScoreSource,
    /// Multiplier applied to the source score
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Level (0-100) at which the skill counts as covered
    pub required: f64,
}

fn default_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CareerPath {
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LearningStage {
    pub stage: String,
    pub duration: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub headline: String,
    pub text: String,
}

/// A headline figure on the home view, e.g. "Assessment Time: 25-30 mins".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Everything the results view shows beyond the raw scores.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Guidance {
    #[serde(default)]
    pub skills: Vec<SkillCheck>,
    #[serde(default)]
    pub careers: Vec<CareerPath>,
    #[serde(default)]
    pub learning_path: Vec<LearningStage>,
}

/// The full questionnaire. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionBank {
    pub title: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_url: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub guidance: Guidance,
}

impl QuestionBank {
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// All questions in bank order, each paired with its section.
    pub fn questions(&self) -> impl Iterator<Item = (&Section, &Question)> {
        self.sections
            .iter()
            .flat_map(|s| s.questions.iter().map(move |q| (s, q)))
    }

    pub fn find_question(&self, question_id: &str) -> Option<(&Section, &Question)> {
        self.questions().find(|(_, q)| q.id == question_id)
    }

    /// Role of the section that owns `question_id`, if any.
    pub fn role_of(&self, question_id: &str) -> Option<SectionRole> {
        self.find_question(question_id).map(|(s, _)| s.role)
    }
}
