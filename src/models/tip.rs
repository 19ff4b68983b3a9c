use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const GROWTH_TIPS: [Tip; 4] = [
    Tip {
        title: "Gratitude journal (5 min)",
        description: "Every evening, write down 3 things you are grateful for and why they matter.",
    },
    Tip {
        title: "Gratitude letter",
        description: "Write to someone who helped you and explain precisely the positive impact of what they did.",
    },
    Tip {
        title: "Gratitude meditation",
        description: "Breathe for 5 minutes while picturing a person or experience, and let yourself feel the gratitude.",
    },
    Tip {
        title: "Thank-you challenge",
        description: "Each day, sincerely thank a different person and notice the effect it has.",
    },
];
