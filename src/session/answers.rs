//! Answers supplied on the command line as `QUESTION=OPTION` pairs.

use thiserror::Error;

use super::navigator::Session;

#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("malformed answer '{0}', expected QUESTION=OPTION")]
    Malformed(String),

    #[error("unknown question '{0}' (run `fitcheck questions` to list ids)")]
    UnknownQuestion(String),

    #[error("question '{question}' has no option '{option}' (valid: {valid})")]
    UnknownOption {
        question: String,
        option: String,
        valid: String,
    },
}

/// Split `QUESTION=OPTION` into its trimmed halves.
pub fn parse_answer(raw: &str) -> Result<(String, String), AnswerError> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| AnswerError::Malformed(raw.to_string()))?;
    let (question, option) = (question.trim(), option.trim());
    if question.is_empty() || option.is_empty() {
        return Err(AnswerError::Malformed(raw.to_string()));
    }
    Ok((question.to_string(), option.to_string()))
}

/// Apply answers in order; a repeated question replaces the earlier answer.
/// Stops at the first answer that doesn't resolve against the bank.
pub fn apply_answers(session: &mut Session, raw_answers: &[String]) -> Result<(), AnswerError> {
    for raw in raw_answers {
        let (question_id, option_id) = parse_answer(raw)?;

        let Some((_, question)) = session.bank().find_question(&question_id) else {
            return Err(AnswerError::UnknownQuestion(question_id));
        };
        if question.option(&option_id).is_none() {
            let valid = question
                .options
                .iter()
                .map(|o| o.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AnswerError::UnknownOption {
                question: question_id,
                option: option_id,
                valid,
            });
        }

        session.answer(&question_id, &option_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;
    use std::sync::Arc;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer(" tech_language = b ").unwrap(),
            ("tech_language".to_string(), "b".to_string())
        );
    }

    #[test]
    fn test_parse_answer_malformed() {
        assert!(matches!(parse_answer("tech_language"), Err(AnswerError::Malformed(_))));
        assert!(matches!(parse_answer("=b"), Err(AnswerError::Malformed(_))));
        assert!(matches!(parse_answer("q="), Err(AnswerError::Malformed(_))));
    }

    #[test]
    fn test_apply_answers_last_one_wins() {
        let mut session = Session::new(Arc::new(builtin_bank()));
        apply_answers(&mut session, &answers(&["tech_language=a", "tech_language=b"])).unwrap();
        assert_eq!(session.responses().len(), 1);
        assert_eq!(session.responses().get("tech_language").unwrap().value, 100.0);
    }

    #[test]
    fn test_apply_answers_unknown_question() {
        let mut session = Session::new(Arc::new(builtin_bank()));
        let err = apply_answers(&mut session, &answers(&["nope=a"])).unwrap_err();
        assert_eq!(err, AnswerError::UnknownQuestion("nope".to_string()));
    }

    #[test]
    fn test_apply_answers_unknown_option_lists_valid_ids() {
        let mut session = Session::new(Arc::new(builtin_bank()));
        let err = apply_answers(&mut session, &answers(&["tech_language=z"])).unwrap_err();
        assert!(err.to_string().contains("valid: a, b, c, d"));
    }
}
