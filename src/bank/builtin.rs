//! The built-in "Should I learn Flutter?" questionnaire.

use super::types::*;

fn opt(id: &str, text: &str, value: f64) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        value,
    }
}

/// Five-point agreement scale used by the psychometric section
fn likert(id: &str, prompt: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: vec![
            opt("a", "Strongly disagree", 20.0),
            opt("b", "Disagree", 40.0),
            opt("c", "Neutral", 60.0),
            opt("d", "Agree", 80.0),
            opt("e", "Strongly agree", 100.0),
        ],
        category: None,
    }
}

fn choice(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
        category: None,
    }
}

fn wiscar(id: &str, category: Category, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
        category: Some(category),
    }
}

fn block(heading: &str, lines: &[&str]) -> InfoBlock {
    InfoBlock {
        heading: heading.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_bank() -> QuestionBank {
    QuestionBank {
        title: "Should I Learn Flutter?".to_string(),
        tagline: "Discover if Flutter development aligns with your skills, interests, and career goals.".to_string(),
        learn_more_url: Some("https://flutter.dev".to_string()),
        features: vec![
            Feature {
                headline: "Psychometric Analysis".to_string(),
                text: "Personality fit and learning motivation".to_string(),
            },
            Feature {
                headline: "Technical Assessment".to_string(),
                text: "Logical reasoning, programming fundamentals and Flutter concepts".to_string(),
            },
            Feature {
                headline: "WISCAR Framework".to_string(),
                text: "Will, Interest, Skill, Cognitive ability, Ability to learn, Real-world fit".to_string(),
            },
            Feature {
                headline: "Career Guidance".to_string(),
                text: "Flutter career paths and a learning roadmap".to_string(),
            },
        ],
        stats: vec![
            Stat {
                label: "Assessment Time".to_string(),
                value: "25-30 mins".to_string(),
            },
            Stat {
                label: "Career Paths".to_string(),
                value: "6+ roles".to_string(),
            },
        ],
        sections: vec![
            Section {
                title: "Introduction".to_string(),
                description: "What this assessment covers".to_string(),
                role: SectionRole::Info,
                questions: vec![],
                details: vec![
                    block(
                        "Purpose",
                        &["Assess whether Flutter aligns with your interests, mindset, current skills, and career goals."],
                    ),
                    block(
                        "What is Flutter?",
                        &["An open-source UI toolkit from Google for building natively compiled apps for mobile, web, and desktop from a single Dart codebase."],
                    ),
                    block(
                        "Careers associated with Flutter",
                        &[
                            "Flutter Developer",
                            "Mobile App Developer",
                            "Cross-platform Engineer",
                            "Frontend Developer",
                            "UI/UX Developer",
                            "App Architect",
                        ],
                    ),
                    block(
                        "Who thrives with Flutter?",
                        &[
                            "Problem-solvers with design & logic balance",
                            "Creatives who enjoy building interfaces",
                            "Developers who want efficient, scalable codebases",
                            "People who value fast results and tangible output",
                        ],
                    ),
                ],
            },
            Section {
                title: "Psychometric Evaluation".to_string(),
                description: "Personality fit and motivation".to_string(),
                role: SectionRole::Psychometric,
                questions: vec![
                    likert("psy_visual", "I enjoy building things I can see and interact with right away."),
                    likert("psy_detail", "I pay close attention to visual details like spacing, color, and alignment."),
                    likert("psy_persist", "When code doesn't work, I keep at it until I find the cause."),
                    likert("psy_learning", "I like learning a new language or framework on my own."),
                    likert("psy_users", "I care about how real people experience the software I build."),
                ],
                details: vec![],
            },
            Section {
                title: "Technical & Aptitude".to_string(),
                description: "Programming fundamentals and Flutter concepts".to_string(),
                role: SectionRole::Technical,
                questions: vec![
                    choice(
                        "tech_language",
                        "Which programming language is used to write Flutter apps?",
                        vec![
                            opt("a", "Kotlin", 0.0),
                            opt("b", "Dart", 100.0),
                            opt("c", "Swift", 0.0),
                            opt("d", "JavaScript", 0.0),
                        ],
                    ),
                    choice(
                        "tech_widget",
                        "In Flutter, almost everything on screen is a...",
                        vec![
                            opt("a", "Widget", 100.0),
                            opt("b", "View", 25.0),
                            opt("c", "Component", 25.0),
                            opt("d", "Fragment", 0.0),
                        ],
                    ),
                    choice(
                        "tech_state",
                        "A widget that can rebuild itself when its data changes is a...",
                        vec![
                            opt("a", "StatelessWidget", 0.0),
                            opt("b", "StatefulWidget", 100.0),
                            opt("c", "InheritedWidget", 50.0),
                            opt("d", "I'm not sure", 0.0),
                        ],
                    ),
                    choice(
                        "tech_logic",
                        "What does this loop print? for (i = 0; i < 3; i++) print(i * 2)",
                        vec![
                            opt("a", "0 2 4", 100.0),
                            opt("b", "2 4 6", 0.0),
                            opt("c", "0 1 2", 0.0),
                            opt("d", "0 2 4 6", 0.0),
                        ],
                    ),
                    choice(
                        "tech_async",
                        "How comfortable are you with async code (futures, promises, await)?",
                        vec![
                            opt("a", "Never used it", 0.0),
                            opt("b", "I've seen it", 30.0),
                            opt("c", "I use it sometimes", 70.0),
                            opt("d", "I use it daily", 100.0),
                        ],
                    ),
                ],
                details: vec![],
            },
            Section {
                title: "WISCAR Framework".to_string(),
                description: "Multi-dimensional readiness".to_string(),
                role: SectionRole::Framework,
                questions: vec![
                    wiscar(
                        "wiscar_will",
                        Category::Will,
                        "How much time can you commit to learning each week?",
                        vec![
                            opt("a", "Less than 2 hours", 25.0),
                            opt("b", "2-5 hours", 50.0),
                            opt("c", "5-10 hours", 75.0),
                            opt("d", "More than 10 hours", 100.0),
                        ],
                    ),
                    wiscar(
                        "wiscar_interest",
                        Category::Interest,
                        "How excited are you about building mobile and cross-platform apps?",
                        vec![
                            opt("a", "Not really", 25.0),
                            opt("b", "Somewhat", 50.0),
                            opt("c", "Quite excited", 75.0),
                            opt("d", "It's what I want to do", 100.0),
                        ],
                    ),
                    wiscar(
                        "wiscar_skill",
                        Category::Skill,
                        "How would you rate your current programming experience?",
                        vec![
                            opt("a", "Beginner", 25.0),
                            opt("b", "Some projects", 50.0),
                            opt("c", "Comfortable in one language", 75.0),
                            opt("d", "Professional", 100.0),
                        ],
                    ),
                    wiscar(
                        "wiscar_cognitive",
                        Category::Cognitive,
                        "How do you approach a problem you have never seen before?",
                        vec![
                            opt("a", "I wait for someone to show me", 25.0),
                            opt("b", "I search for a ready-made answer", 50.0),
                            opt("c", "I break it into smaller parts", 75.0),
                            opt("d", "I break it down, prototype, and iterate", 100.0),
                        ],
                    ),
                    wiscar(
                        "wiscar_ability",
                        Category::Ability,
                        "How do you respond to critical feedback on your work?",
                        vec![
                            opt("a", "It discourages me", 25.0),
                            opt("b", "I accept it reluctantly", 50.0),
                            opt("c", "I use it to improve", 75.0),
                            opt("d", "I actively ask for it", 100.0),
                        ],
                    ),
                    wiscar(
                        "wiscar_real_world",
                        Category::RealWorld,
                        "Which work environment appeals to you most?",
                        vec![
                            opt("a", "Back-end or data work", 25.0),
                            opt("b", "Anything, I'm undecided", 50.0),
                            opt("c", "Product teams shipping apps", 75.0),
                            opt("d", "Building user-facing apps for many platforms", 100.0),
                        ],
                    ),
                ],
                details: vec![],
            },
        ],
        guidance: Guidance {
            skills: vec![
                SkillCheck {
                    name: "Dart Programming".to_string(),
                    source: ScoreSource::Technical,
                    factor: 0.7,
                    required: 70.0,
                },
                SkillCheck {
                    name: "UI/UX Understanding".to_string(),
                    source: ScoreSource::Psychometric,
                    factor: 0.8,
                    required: 60.0,
                },
                SkillCheck {
                    name: "Logic/Algorithms".to_string(),
                    source: ScoreSource::Technical,
                    factor: 0.9,
                    required: 70.0,
                },
                SkillCheck {
                    name: "State Management".to_string(),
                    source: ScoreSource::Skill,
                    factor: 0.6,
                    required: 60.0,
                },
                SkillCheck {
                    name: "Problem Solving".to_string(),
                    source: ScoreSource::Cognitive,
                    factor: 1.0,
                    required: 65.0,
                },
            ],
            careers: vec![
                CareerPath {
                    role: "Flutter Developer".to_string(),
                    description: "Builds and ships cross-platform apps with Flutter and Dart".to_string(),
                    requirements: strings(&["Dart", "Widgets", "State Management"]),
                },
                CareerPath {
                    role: "Mobile App Developer".to_string(),
                    description: "Delivers iOS and Android apps end to end".to_string(),
                    requirements: strings(&["Mobile UX", "App Stores", "APIs"]),
                },
                CareerPath {
                    role: "Cross-platform Engineer".to_string(),
                    description: "Maintains one codebase across mobile, web, and desktop".to_string(),
                    requirements: strings(&["Architecture", "Platform Channels", "Testing"]),
                },
                CareerPath {
                    role: "UI/UX Developer".to_string(),
                    description: "Turns designs into polished, animated interfaces".to_string(),
                    requirements: strings(&["Design Systems", "Animations", "Accessibility"]),
                },
            ],
            learning_path: vec![
                LearningStage {
                    stage: "Beginner".to_string(),
                    duration: "4-6 weeks".to_string(),
                    topics: strings(&["Dart Basics", "Flutter Widgets", "Basic Layouts"]),
                },
                LearningStage {
                    stage: "Intermediate".to_string(),
                    duration: "6-8 weeks".to_string(),
                    topics: strings(&["Navigation", "State Management", "API Integration"]),
                },
                LearningStage {
                    stage: "Advanced".to_string(),
                    duration: "8-10 weeks".to_string(),
                    topics: strings(&["Animations", "Performance", "App Deployment"]),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::validate_bank;

    #[test]
    fn test_builtin_bank_is_valid() {
        assert!(validate_bank(&builtin_bank()).is_ok());
    }

    #[test]
    fn test_builtin_bank_covers_every_category_once() {
        let bank = builtin_bank();
        for category in Category::ALL {
            let count = bank
                .questions()
                .filter(|(_, q)| q.category == Some(category))
                .count();
            assert_eq!(count, 1, "{} should have exactly one question", category);
        }
    }

    #[test]
    fn test_builtin_bank_opens_with_info_section() {
        let bank = builtin_bank();
        assert_eq!(bank.sections[0].role, SectionRole::Info);
        assert!(bank.sections[0].is_info());
        assert_eq!(bank.total_questions(), 16);
    }
}
