use std::fmt;

const YES_THRESHOLD: f64 = 75.0;
const MAYBE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    Maybe,
    No,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::Maybe => "MAYBE",
            Verdict::No => "NO",
        }
    }

    /// One-paragraph explanation shown under the verdict
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Yes => "Excellent! You show strong alignment. Your combination of motivation, aptitude, and interest suggests you'll thrive.",
            Verdict::Maybe => "You have potential, but some areas need strengthening. Focus on the skill gaps below to improve your readiness.",
            Verdict::No => "This might not be the best fit right now. Consider the alternative paths below or work on foundational skills first.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub verdict: Verdict,
    /// Percent, clamped to 0-100
    pub confidence: f64,
}

/// Map an overall score onto a verdict and confidence.
pub fn recommend(overall: f64) -> Recommendation {
    let (verdict, confidence) = if overall >= YES_THRESHOLD {
        (Verdict::Yes, 85.0 + (overall - YES_THRESHOLD))
    } else if overall >= MAYBE_THRESHOLD {
        (Verdict::Maybe, 60.0 + (overall - MAYBE_THRESHOLD))
    } else {
        (Verdict::No, 40.0 + overall * 0.5)
    };

    Recommendation {
        verdict,
        confidence: confidence.clamp(0.0, 100.0),
    }
}

/// Coarse quality band for a 0-100 score, used to colour every score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    /// Band of the score as displayed, i.e. after rounding to a whole number.
    pub fn of(score: f64) -> Self {
        let score = score.round();
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}
