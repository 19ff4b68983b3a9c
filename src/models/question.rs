use serde::Serialize;

pub const QUESTION_COUNT: usize = 5;

pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "How many times a week do you sincerely say \"thank you\"?",
    "Do you easily notice when someone makes an effort for you?",
    "Do you easily find positive things in your day?",
    "Do you naturally return the favour when someone helps you?",
    "Do you easily remember the kind gestures others have made towards you?",
];

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub index: usize,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

pub const LIKERT_SCALE: [LikertOption; 5] = [
    LikertOption { value: 1, label: "Never" },
    LikertOption { value: 2, label: "Rarely" },
    LikertOption { value: 3, label: "Sometimes" },
    LikertOption { value: 4, label: "Often" },
    LikertOption { value: 5, label: "Always" },
];

pub fn all_questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, prompt)| Question {
            index,
            prompt: (*prompt).to_string(),
        })
        .collect()
}
