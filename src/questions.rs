use serde::{Deserialize, Serialize};
use std::fmt;

/// Question difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single interview question from the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    /// Catalogue id (1-based, stable)
    pub id: u32,

    /// The question itself
    pub text: String,

    /// Topic category (e.g. "Machine Learning")
    pub category: String,

    /// Difficulty rating shown alongside the question
    pub difficulty: Difficulty,
}

/// Ordered, static catalogue of interview questions.
///
/// Questions are served strictly in catalogue order; the caller owns the
/// cursor. Exhaustion is "interview complete", not an error.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<InterviewQuestion>,
}

impl QuestionBank {
    /// Build a bank from an explicit catalogue
    pub fn new(questions: Vec<InterviewQuestion>) -> Self {
        Self { questions }
    }

    /// The built-in technical interview catalogue
    pub fn builtin() -> Self {
        let questions = vec![
            InterviewQuestion {
                id: 1,
                text: "Explain the difference between supervised and unsupervised learning"
                    .to_string(),
                category: "Machine Learning".to_string(),
                difficulty: Difficulty::Medium,
            },
            InterviewQuestion {
                id: 2,
                text: "What is overfitting and how do you prevent it?".to_string(),
                category: "Machine Learning".to_string(),
                difficulty: Difficulty::Medium,
            },
            InterviewQuestion {
                id: 3,
                text: "Describe how a neural network works".to_string(),
                category: "Deep Learning".to_string(),
                difficulty: Difficulty::Hard,
            },
            InterviewQuestion {
                id: 4,
                text: "What are the trade-offs between an array and a linked list?".to_string(),
                category: "Data Structures".to_string(),
                difficulty: Difficulty::Easy,
            },
            InterviewQuestion {
                id: 5,
                text: "How does a hash table handle collisions?".to_string(),
                category: "Data Structures".to_string(),
                difficulty: Difficulty::Medium,
            },
        ];

        Self { questions }
    }

    /// Next unused question for the given cursor, or `None` once exhausted
    pub fn next_question(&self, cursor: usize) -> Option<&InterviewQuestion> {
        self.questions.get(cursor)
    }

    /// Number of questions in the catalogue
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
