use std::collections::HashSet;

use super::types::{QuestionBank, SectionRole};

/// Validate a question bank before use.
/// Returns all validation errors at once (not just the first).
pub fn validate_bank(bank: &QuestionBank) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if bank.sections.is_empty() {
        errors.push("sections: at least one section is required".to_string());
    }

    let mut seen_questions = HashSet::new();

    for (si, section) in bank.sections.iter().enumerate() {
        if section.role == SectionRole::Info && !section.questions.is_empty() {
            errors.push(format!(
                "sections[{}]: info section '{}' must not contain questions",
                si, section.title
            ));
        }

        for (qi, question) in section.questions.iter().enumerate() {
            let path = format!("sections[{}].questions[{}]", si, qi);

            if !seen_questions.insert(question.id.as_str()) {
                errors.push(format!("{}.id: duplicate question id '{}'", path, question.id));
            }

            if question.options.is_empty() {
                errors.push(format!("{}: question '{}' has no options", path, question.id));
            }

            let mut seen_options = HashSet::new();
            for (oi, option) in question.options.iter().enumerate() {
                if !seen_options.insert(option.id.as_str()) {
                    errors.push(format!(
                        "{}.options[{}].id: duplicate option id '{}'",
                        path, oi, option.id
                    ));
                }
                if !(0.0..=100.0).contains(&option.value) {
                    errors.push(format!(
                        "{}.options[{}].value: {} is outside 0-100",
                        path, oi, option.value
                    ));
                }
            }

            match (section.role, question.category) {
                (SectionRole::Framework, None) => errors.push(format!(
                    "{}.category: framework question '{}' needs a category",
                    path, question.id
                )),
                (role, Some(_)) if role != SectionRole::Framework => errors.push(format!(
                    "{}.category: only framework questions take a category ('{}' is in a {} section)",
                    path,
                    question.id,
                    role.label()
                )),
                _ => {}
            }
        }
    }

    for (i, skill) in bank.guidance.skills.iter().enumerate() {
        if !(0.0..=100.0).contains(&skill.required) {
            errors.push(format!(
                "guidance.skills[{}].required: {} is outside 0-100",
                i, skill.required
            ));
        }
        if !skill.factor.is_finite() || skill.factor < 0.0 {
            errors.push(format!(
                "guidance.skills[{}].factor: must be a non-negative number",
                i
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
