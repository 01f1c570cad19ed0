//! Keyword-heuristic scoring for mental-health check-ins: lexicon
//! sentiment, emotion detection, a text stress estimate, the composite
//! wellness score and the canned response/tip selection.

use super::response_selector::ResponseSelector;
use crate::modules::mental_health::application::domain::entities::{Emotion, Mood};

/// Word valences for the base sentiment score. The summed valence of all
/// matched tokens is divided by 10 and clamped to [-1, 1].
const SENTIMENT_LEXICON: &[(&str, i32)] = &[
    // positive
    ("happy", 3),
    ("great", 3),
    ("good", 3),
    ("wonderful", 4),
    ("amazing", 4),
    ("fantastic", 4),
    ("excellent", 3),
    ("love", 3),
    ("loved", 3),
    ("joy", 3),
    ("excited", 3),
    ("fun", 4),
    ("calm", 2),
    ("relaxed", 2),
    ("hopeful", 2),
    ("proud", 2),
    ("fine", 2),
    ("okay", 2),
    ("better", 2),
    ("enjoyed", 2),
    ("grateful", 3),
    ("motivated", 2),
    // negative
    ("sad", -2),
    ("bad", -3),
    ("terrible", -3),
    ("awful", -3),
    ("horrible", -3),
    ("hate", -3),
    ("angry", -3),
    ("stressed", -2),
    ("anxious", -2),
    ("worried", -3),
    ("depressed", -2),
    ("tired", -2),
    ("exhausted", -2),
    ("overwhelmed", -2),
    ("miserable", -3),
    ("panic", -3),
    ("afraid", -2),
    ("scared", -2),
    ("lonely", -2),
    ("frustrated", -2),
    ("upset", -2),
    ("hopeless", -2),
    ("worse", -3),
    ("cry", -1),
    ("failed", -2),
];

/// Emotion keyword lists. Declaration order breaks ties: the first
/// category with the maximal match count wins.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy", "excited", "joyful", "cheerful", "delighted", "thrilled", "ecstatic",
            "great", "wonderful", "amazing", "fantastic",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad",
            "depressed",
            "unhappy",
            "miserable",
            "gloomy",
            "down",
            "blue",
            "heartbroken",
            "disappointed",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry",
            "frustrated",
            "annoyed",
            "irritated",
            "furious",
            "mad",
            "enraged",
            "outraged",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid",
            "scared",
            "anxious",
            "worried",
            "nervous",
            "terrified",
            "fearful",
            "panic",
            "frightened",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "surprised",
            "shocked",
            "amazed",
            "astonished",
            "startled",
            "unexpected",
        ],
    ),
];

const HIGH_STRESS_KEYWORDS: &[&str] = &[
    "overwhelmed",
    "exhausted",
    "burnout",
    "panic",
    "breaking down",
    "can't cope",
];

const MEDIUM_STRESS_KEYWORDS: &[&str] = &[
    "stressed", "anxious", "worried", "nervous", "tense", "pressure", "deadline",
];

const LOW_STRESS_KEYWORDS: &[&str] = &["tired", "busy", "rushed", "hectic", "concerned"];

#[derive(Debug, Clone)]
pub struct SentimentAnalysis {
    /// -1..1
    pub score: f32,
    pub primary_emotion: Emotion,
    /// Match count per category, in declaration order.
    pub emotion_counts: Vec<(Emotion, usize)>,
}

/// Lexicon sentiment plus emotion-category detection over the free-text
/// notes. Empty text scores 0 and is emotionally neutral.
pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    let lower = text.to_lowercase();

    let valence_sum: i32 = lower
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            SENTIMENT_LEXICON
                .iter()
                .find(|(word, _)| *word == token)
                .map(|(_, valence)| valence)
        })
        .sum();

    let score = (valence_sum as f32 / 10.0).clamp(-1.0, 1.0);

    let emotion_counts: Vec<(Emotion, usize)> = EMOTION_KEYWORDS
        .iter()
        .map(|(emotion, keywords)| {
            let count = keywords.iter().filter(|k| lower.contains(*k)).count();
            (*emotion, count)
        })
        .collect();

    // Strict greater-than keeps the earliest category on ties.
    let (primary_emotion, best_count) = emotion_counts.iter().fold(
        (Emotion::Neutral, 0usize),
        |(best, best_count), (emotion, count)| {
            if *count > best_count {
                (*emotion, *count)
            } else {
                (best, best_count)
            }
        },
    );

    SentimentAnalysis {
        score,
        primary_emotion: if best_count > 0 {
            primary_emotion
        } else {
            Emotion::Neutral
        },
        emotion_counts,
    }
}

/// Additive keyword stress estimate: +3 per high match, +2 per medium,
/// +1 per low, capped at 10. Each keyword counts once if it occurs.
pub fn stress_level_from_text(text: &str) -> u8 {
    let lower = text.to_lowercase();
    let mut score = 0u32;

    for keyword in HIGH_STRESS_KEYWORDS {
        if lower.contains(keyword) {
            score += 3;
        }
    }
    for keyword in MEDIUM_STRESS_KEYWORDS {
        if lower.contains(keyword) {
            score += 2;
        }
    }
    for keyword in LOW_STRESS_KEYWORDS {
        if lower.contains(keyword) {
            score += 1;
        }
    }

    score.min(10) as u8
}

fn mood_score(mood: Mood) -> f64 {
    match mood {
        Mood::Excellent => 100.0,
        Mood::Good => 80.0,
        Mood::Neutral => 60.0,
        Mood::Poor => 40.0,
        Mood::Terrible => 20.0,
    }
}

/// Composite 0-100 wellness score: mood 40%, inverse stress 30%, sleep
/// deviation from 8h 20%, activity count 10%.
pub fn wellness_score(stress_level: u8, sleep_hours: f32, mood: Mood, activity_count: usize) -> u8 {
    let mood_component = mood_score(mood) * 0.4;

    let stress_component = ((10.0 - f64::from(stress_level)) / 10.0 * 100.0) * 0.3;

    let ideal_sleep = 8.0;
    let sleep_component = (100.0 - (f64::from(sleep_hours) - ideal_sleep).abs() * 10.0).max(0.0) * 0.2;

    let activity_component = (activity_count as f64 * 20.0).min(100.0) * 0.1;

    let total = mood_component + stress_component + sleep_component + activity_component;

    total.round().clamp(0.0, 100.0) as u8
}

const EXCELLENT_RESPONSES: [&str; 3] = [
    "That's wonderful! 🌟 Your positive energy is inspiring! Keep maintaining this great momentum and remember to celebrate your wins!",
    "I'm so happy to hear you're doing excellent! ✨ Continue with what works for you and don't forget to share your positivity with others!",
    "Amazing! 🎉 You're in a great place right now. Use this energy to tackle your goals and enjoy the moment!",
];

const GOOD_RESPONSES: [&str; 3] = [
    "Glad to hear you're doing well! 💪 Keep up the good work and remember that consistency is key to maintaining this positive state!",
    "That's great! 😊 You're on the right track. Continue taking care of yourself and building on this positive momentum!",
    "Wonderful to hear! 🌈 Stay focused on what makes you feel good and keep nurturing your well-being!",
];

const NEUTRAL_RESPONSES: [&str; 3] = [
    "It's completely okay to have neutral days! 🤗 Focus on small victories and be kind to yourself. Every day is a new opportunity!",
    "I understand you're feeling in-between today. 📈 Try engaging in activities you enjoy or talking to someone you trust. Small steps matter!",
    "Neutral days are part of life's rhythm. 🌱 Consider this a chance to reflect and prepare for better days ahead. You've got this!",
];

const POOR_RESPONSES: [&str; 3] = [
    "I see you're going through a tough time. 💙 Remember that this too shall pass. Consider taking a break, doing something you enjoy, or reaching out to a friend!",
    "I'm sorry you're not feeling great. 🤝 It's okay to struggle sometimes. Try some self-care activities like deep breathing, a walk, or listening to music you love!",
    "Tough days happen to everyone. 🌤️ Be gentle with yourself and remember that reaching out for support is a sign of strength, not weakness!",
];

const TERRIBLE_RESPONSES: [&str; 3] = [
    "I'm genuinely concerned about how you're feeling. 💙 Please reach out to a mental health professional or your university's counseling services. Your well-being matters!",
    "I can see you're really struggling right now. 🆘 Please don't hesitate to seek help from a counselor or trusted person. You don't have to face this alone!",
    "Your feelings are valid, and you deserve support. 💙 Please contact your university's mental health services or a crisis helpline. Professional help can make a real difference!",
];

fn mood_responses(mood: Mood) -> &'static [&'static str; 3] {
    match mood {
        Mood::Excellent => &EXCELLENT_RESPONSES,
        Mood::Good => &GOOD_RESPONSES,
        Mood::Neutral => &NEUTRAL_RESPONSES,
        Mood::Poor => &POOR_RESPONSES,
        Mood::Terrible => &TERRIBLE_RESPONSES,
    }
}

fn emotion_sentence(emotion: Emotion) -> Option<&'static str> {
    match emotion {
        Emotion::Joy => Some("Your joy is contagious! Keep spreading that positive energy! 🌟"),
        Emotion::Sadness => Some(
            "It's okay to feel sad. Acknowledge your feelings and be gentle with yourself. 💙",
        ),
        Emotion::Anger => Some(
            "I sense you're feeling frustrated. Try some deep breathing or physical activity to channel that energy constructively. 🌬️",
        ),
        Emotion::Fear => Some(
            "Anxiety can be overwhelming. Remember to ground yourself with deep breaths. You're stronger than you think! 💪",
        ),
        Emotion::Surprise => Some("Life can be full of surprises! Take time to process and adapt. 🎭"),
        Emotion::Neutral => None,
    }
}

const HIGH_STRESS_ADVICE: &str = "⚠️ Your stress level seems quite high. Try the 4-7-8 breathing technique: breathe in for 4 counts, hold for 7, exhale for 8. Consider taking breaks using the Pomodoro technique (25 min work, 5 min rest).";
const MEDIUM_STRESS_ADVICE: &str = "⚡ You have some stress building up. Remember to take regular breaks, stay hydrated, and practice mindfulness. Even 5 minutes of meditation can help!";
const LOW_STRESS_ADVICE: &str = "✅ Great job managing your stress levels! Keep up with your healthy habits and continue monitoring your well-being!";

/// Canned response: one of three mood strings picked by the injected
/// selector, plus an emotion sentence when one was detected, plus a
/// stress-tier sentence (>7 high, >4 medium, else low).
pub fn generate_response(
    mood: Mood,
    stress_level: u8,
    primary_emotion: Emotion,
    selector: &dyn ResponseSelector,
) -> String {
    let responses = mood_responses(mood);
    let mut response = responses[selector.pick(responses.len())].to_string();

    if let Some(sentence) = emotion_sentence(primary_emotion) {
        response.push(' ');
        response.push_str(sentence);
    }

    response.push(' ');
    response.push_str(if stress_level > 7 {
        HIGH_STRESS_ADVICE
    } else if stress_level > 4 {
        MEDIUM_STRESS_ADVICE
    } else {
        LOW_STRESS_ADVICE
    });

    response
}

const STRESS_TIPS: [&str; 3] = [
    "🧘 Try a 10-minute guided meditation session",
    "🚶 Take a 15-minute walk to clear your mind",
    "📝 Journal your thoughts to process emotions",
];

const SLEEP_TIPS: [&str; 3] = [
    "😴 Aim for 7-8 hours of sleep tonight",
    "📱 Limit screen time 1 hour before bed",
    "☕ Reduce caffeine intake after 2 PM",
];

const SUPPORT_TIPS: [&str; 3] = [
    "💬 Reach out to a friend or family member",
    "🎵 Listen to your favorite uplifting music",
    "🤝 Consider speaking with a counselor",
];

const KEEP_IT_UP_TIPS: [&str; 3] = [
    "⭐ Keep up the great work with your well-being!",
    "📚 Continue your current healthy habits",
    "🎯 Set small achievable goals for today",
];

/// Up to three tips accumulated from independent threshold rules, in
/// rule-declaration order: stress > 7, sleep < 6, mood poor/terrible.
pub fn wellness_tips(stress_level: u8, sleep_hours: f32, mood: Mood) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();

    if stress_level > 7 {
        tips.extend(STRESS_TIPS);
    }
    if sleep_hours < 6.0 {
        tips.extend(SLEEP_TIPS);
    }
    if matches!(mood, Mood::Poor | Mood::Terrible) {
        tips.extend(SUPPORT_TIPS);
    }
    if tips.is_empty() {
        tips.extend(KEEP_IT_UP_TIPS);
    }

    tips.truncate(3);
    tips.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mental_health::application::services::response_selector::FixedSelector;

    #[test]
    fn empty_text_is_neutral_with_zero_score() {
        let analysis = analyze_sentiment("");
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.primary_emotion, Emotion::Neutral);
        assert!(analysis.emotion_counts.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn positive_text_scores_positive_with_joy() {
        let analysis = analyze_sentiment("I had an amazing and wonderful day, so happy");
        assert!(analysis.score > 0.0);
        assert!(analysis.score <= 1.0);
        assert_eq!(analysis.primary_emotion, Emotion::Joy);
    }

    #[test]
    fn negative_text_scores_negative() {
        let analysis = analyze_sentiment("terrible awful day, I feel depressed and miserable");
        assert!(analysis.score < 0.0);
        assert!(analysis.score >= -1.0);
        assert_eq!(analysis.primary_emotion, Emotion::Sadness);
    }

    #[test]
    fn score_is_clamped_to_unit_interval() {
        let text = "amazing wonderful fantastic great happy love joy excited amazing wonderful";
        assert_eq!(analyze_sentiment(text).score, 1.0);
    }

    #[test]
    fn emotion_ties_break_by_declaration_order() {
        // One joy keyword ("happy") and one sadness keyword ("sad"):
        // joy is declared first and must win.
        let analysis = analyze_sentiment("happy and sad at once");
        assert_eq!(analysis.primary_emotion, Emotion::Joy);
    }

    #[test]
    fn fear_keywords_dominate_when_most_frequent() {
        let analysis = analyze_sentiment("scared, worried and nervous before the exam");
        assert_eq!(analysis.primary_emotion, Emotion::Fear);
    }

    #[test]
    fn stress_text_scores_one_high_plus_one_medium() {
        let level = stress_level_from_text("I feel overwhelmed and stressed");
        assert!(level >= 5);
        assert!(level <= 10);
    }

    #[test]
    fn stress_level_of_empty_text_is_zero() {
        assert_eq!(stress_level_from_text(""), 0);
    }

    #[test]
    fn stress_score_is_capped_at_ten() {
        let level = stress_level_from_text(
            "overwhelmed exhausted burnout panic stressed anxious worried tired busy",
        );
        assert_eq!(level, 10);
    }

    #[test]
    fn stress_matching_is_case_insensitive() {
        assert_eq!(
            stress_level_from_text("OVERWHELMED"),
            stress_level_from_text("overwhelmed")
        );
    }

    #[test]
    fn mood_component_maps_to_documented_weights() {
        // Only the mood component varies: stress 10 and sleep far from 8
        // zero out nothing, so isolate via differences instead.
        let cases = [
            (Mood::Excellent, 100.0),
            (Mood::Good, 80.0),
            (Mood::Neutral, 60.0),
            (Mood::Poor, 40.0),
            (Mood::Terrible, 20.0),
        ];
        for (mood, score) in cases {
            assert_eq!(mood_score(mood), score);
        }
    }

    #[test]
    fn best_case_wellness_score_is_100() {
        assert_eq!(wellness_score(0, 8.0, Mood::Excellent, 5), 100);
    }

    #[test]
    fn worst_case_wellness_score() {
        // terrible mood: 20*0.4 = 8; stress 10: 0; sleep 0h: (100-80)*0.2 = 4;
        // no activities: 0 -> 12
        assert_eq!(wellness_score(10, 0.0, Mood::Terrible, 0), 12);
    }

    #[test]
    fn sleep_deviation_penalty_floors_at_zero() {
        // 20h sleep deviates by 12h -> penalty would be negative, floored.
        assert_eq!(wellness_score(10, 20.0, Mood::Terrible, 0), 8);
    }

    #[test]
    fn activity_component_caps_at_five_activities() {
        let five = wellness_score(5, 8.0, Mood::Neutral, 5);
        let fifty = wellness_score(5, 8.0, Mood::Neutral, 50);
        assert_eq!(five, fifty);
    }

    #[test]
    fn response_selection_is_deterministic_with_fixed_selector() {
        let first = generate_response(Mood::Good, 2, Emotion::Neutral, &FixedSelector(0));
        let again = generate_response(Mood::Good, 2, Emotion::Neutral, &FixedSelector(0));
        assert_eq!(first, again);
        assert!(first.starts_with(GOOD_RESPONSES[0]));
    }

    #[test]
    fn response_appends_emotion_and_stress_tier() {
        let response = generate_response(Mood::Poor, 9, Emotion::Sadness, &FixedSelector(1));
        assert!(response.starts_with(POOR_RESPONSES[1]));
        assert!(response.contains("okay to feel sad"));
        assert!(response.ends_with(HIGH_STRESS_ADVICE));
    }

    #[test]
    fn neutral_emotion_adds_no_emotion_sentence() {
        let response = generate_response(Mood::Neutral, 5, Emotion::Neutral, &FixedSelector(2));
        assert_eq!(
            response,
            format!("{} {}", NEUTRAL_RESPONSES[2], MEDIUM_STRESS_ADVICE)
        );
    }

    #[test]
    fn stress_tier_thresholds() {
        let high = generate_response(Mood::Neutral, 8, Emotion::Neutral, &FixedSelector(0));
        let medium = generate_response(Mood::Neutral, 5, Emotion::Neutral, &FixedSelector(0));
        let low = generate_response(Mood::Neutral, 4, Emotion::Neutral, &FixedSelector(0));
        assert!(high.ends_with(HIGH_STRESS_ADVICE));
        assert!(medium.ends_with(MEDIUM_STRESS_ADVICE));
        assert!(low.ends_with(LOW_STRESS_ADVICE));
    }

    #[test]
    fn tips_cap_at_three_in_rule_order() {
        // All three rules fire; only the stress tips survive the cut.
        let tips = wellness_tips(9, 3.0, Mood::Terrible);
        assert_eq!(tips.len(), 3);
        assert_eq!(tips, STRESS_TIPS.map(str::to_string).to_vec());
    }

    #[test]
    fn low_stress_bad_sleep_terrible_mood_mixes_sleep_and_support_tips() {
        let tips = wellness_tips(2, 3.0, Mood::Terrible);
        assert_eq!(tips.len(), 3);
        assert!(tips.iter().any(|t| SLEEP_TIPS.contains(&t.as_str())));
        // Sleep contributes all three before support tips get a slot with
        // this rule ordering, so assert on the boundary precisely.
        assert_eq!(tips, SLEEP_TIPS.map(str::to_string).to_vec());
    }

    #[test]
    fn no_rule_fired_returns_keep_it_up_tips() {
        let tips = wellness_tips(2, 8.0, Mood::Good);
        assert_eq!(tips, KEEP_IT_UP_TIPS.map(str::to_string).to_vec());
    }
}
