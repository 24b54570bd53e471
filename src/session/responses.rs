/// One recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub question_id: String,
    pub option_id: String,
    pub value: f64,
}

/// Answers collected during a session, at most one per question.
///
/// Order reflects when each question was last answered, which matters for
/// last-write-wins framework scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    responses: Vec<Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: &str, option_id: &str, value: f64) {
        self.responses.retain(|r| r.question_id != question_id);
        self.responses.push(Response {
            question_id: question_id.to_string(),
            option_id: option_id.to_string(),
            value,
        });
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    /// Number of distinct answered questions
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Response> {
        self.responses.iter()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
