/// A multiple-choice question; `answer` indexes into `options`.
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What is the first step in financial planning?",
        options: &["Setting a budget", "Investing in stocks", "Taking a loan", "Spending freely"],
        answer: 0,
    },
    Question {
        prompt: "Which investment type is the least risky?",
        options: &["Stocks", "Bonds", "Real Estate", "Cryptocurrency"],
        answer: 1,
    },
    Question {
        prompt: "What is a SIP (Systematic Investment Plan)?",
        options: &[
            "A type of insurance",
            "A method of investing in mutual funds",
            "A loan scheme",
            "A way to calculate EMI",
        ],
        answer: 1,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// More questions remain.
    InProgress,
    /// Terminal; the score is frozen. The final answer counts once, so a
    /// perfect run over N questions scores exactly N.
    Completed(u32),
}

/// Finite question sequencer. Terminal once completed; build a fresh
/// engine to play again.
pub struct QuizEngine {
    questions: &'static [Question],
    index: usize,
    score: u32,
    completed: bool,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS)
    }

    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self { questions, index: 0, score: 0, completed: false }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.questions.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score the chosen option and advance. Answering a completed quiz
    /// just reports the frozen score again.
    pub fn answer(&mut self, option: usize) -> Outcome {
        if self.completed {
            return Outcome::Completed(self.score);
        }
        if option == self.questions[self.index].answer {
            self.score += 1;
        }
        self.index += 1;
        if self.index >= self.questions.len() {
            self.completed = true;
            Outcome::Completed(self.score)
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Badge {
    pub title: &'static str,
    pub icon: &'static str,
    pub threshold: u32,
}

pub const BADGES: &[Badge] = &[
    Badge { title: "Beginner Saver", icon: "\u{1F949}", threshold: 1 },
    Badge { title: "Smart Investor", icon: "\u{1F948}", threshold: 2 },
    Badge { title: "Financial Guru", icon: "\u{1F947}", threshold: 3 },
];

impl Badge {
    pub fn earned(&self, score: u32) -> bool {
        score >= self.threshold
    }
}
