//! Mood label heuristics.
//!
//! Moods are free text typed by the user or produced by the assistant, in
//! English or Chinese. Matching is substring-based over ordered keyword
//! tables, so the first listed keyword contained in the label wins.

/// Emoji shown for moods that are missing or unrecognized.
pub const NEUTRAL_EMOJI: &str = "😐";

const MOOD_EMOJI: &[(&str, &str)] = &[
    ("happy", "😊"),
    ("joy", "😊"),
    ("joyful", "😊"),
    ("excited", "🤩"),
    ("great", "😄"),
    ("wonderful", "😄"),
    ("fantastic", "😄"),
    ("开心", "😊"),
    ("高兴", "😊"),
    ("快乐", "😊"),
    ("兴奋", "🤩"),
    ("激动", "🤩"),
    ("愉快", "😊"),
    ("幸福", "😊"),
    ("喜悦", "😊"),
    ("欣喜", "😊"),
    ("sad", "😢"),
    ("depressed", "😢"),
    ("down", "😢"),
    ("upset", "😢"),
    ("难过", "😢"),
    ("悲伤", "😢"),
    ("伤心", "😢"),
    ("沮丧", "😤"),
    ("失落", "😢"),
    ("angry", "😠"),
    ("mad", "😠"),
    ("furious", "😠"),
    ("生气", "😠"),
    ("愤怒", "😠"),
    ("恼火", "😠"),
    ("anxious", "😰"),
    ("worried", "😰"),
    ("nervous", "😰"),
    ("stressed", "😰"),
    ("焦虑", "😰"),
    ("担心", "😰"),
    ("紧张", "😰"),
    ("不安", "😰"),
    ("压力", "😰"),
    ("calm", "😌"),
    ("peaceful", "😌"),
    ("relaxed", "😌"),
    ("平静", "😌"),
    ("放松", "😌"),
    ("安心", "😌"),
    ("tired", "😴"),
    ("exhausted", "😴"),
    ("sleepy", "😴"),
    ("累", "😴"),
    ("疲惫", "😴"),
    ("疲倦", "😴"),
    ("困", "😴"),
    ("grateful", "🙏"),
    ("thankful", "🙏"),
    ("blessed", "🙏"),
    ("感激", "🙏"),
    ("感恩", "🙏"),
    ("感谢", "🙏"),
    ("content", "😊"),
    ("satisfied", "😊"),
    ("满足", "😊"),
    ("满意", "😊"),
    ("frustrated", "😤"),
    ("annoyed", "😤"),
    ("irritated", "😤"),
    ("烦恼", "😤"),
    ("烦躁", "😤"),
    ("confused", "😕"),
    ("unsure", "😕"),
    ("困惑", "😕"),
    ("迷茫", "😕"),
    ("疑惑", "😕"),
    ("surprised", "😮"),
    ("shocked", "😮"),
    ("惊讶", "😮"),
    ("吃惊", "😮"),
    ("震惊", "😮"),
    ("neutral", "😐"),
    ("okay", "😐"),
    ("fine", "😐"),
    ("meh", "😐"),
    ("中性", "😐"),
    ("一般", "😐"),
    ("普通", "😐"),
    ("还行", "😐"),
    ("love", "😍"),
    ("loved", "😍"),
    ("romantic", "😍"),
    ("爱", "😍"),
    ("喜欢", "😍"),
    ("恋爱", "😍"),
    ("proud", "😎"),
    ("confident", "😎"),
    ("骄傲", "😎"),
    ("自信", "😎"),
    ("自豪", "😎"),
    ("motivated", "💪"),
    ("energetic", "💪"),
    ("有动力", "💪"),
    ("充满活力", "💪"),
    ("精力充沛", "💪"),
    ("lonely", "😔"),
    ("孤独", "😔"),
    ("孤单", "😔"),
    ("bored", "😑"),
    ("无聊", "😑"),
    ("无趣", "😑"),
    ("disappointed", "😞"),
    ("失望", "😞"),
    ("overwhelmed", "😵"),
    ("不知所措", "😵"),
    ("崩溃", "😵"),
    ("sick", "🤒"),
    ("ill", "🤒"),
    ("生病", "🤒"),
    ("不舒服", "🤒"),
];

/// Broad emotional category used for colouring mood badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodTone {
    Positive,
    Sad,
    Anxious,
    Angry,
    Calm,
    Tired,
    Neutral,
}

const TONE_KEYWORDS: &[(MoodTone, &[&str])] = &[
    (
        MoodTone::Positive,
        &[
            "happy", "joy", "excited", "great", "wonderful", "fantastic", "content",
            "satisfied", "love", "proud", "confident", "grateful", "开心", "高兴", "快乐",
            "兴奋", "激动", "愉快", "幸福", "满足", "满意", "感激", "感恩", "感谢", "爱",
            "喜欢", "恋爱", "骄傲", "自信", "自豪", "有动力", "充满活力", "精力充沛",
        ],
    ),
    (
        MoodTone::Sad,
        &[
            "sad", "depressed", "down", "upset", "lonely", "disappointed", "难过", "悲伤",
            "伤心", "沮丧", "失落", "失望", "孤独", "孤单",
        ],
    ),
    (
        MoodTone::Anxious,
        &[
            "anxious", "worried", "nervous", "stressed", "overwhelmed", "焦虑", "担心", "紧张",
            "不安", "压力", "不知所措", "崩溃",
        ],
    ),
    (
        MoodTone::Angry,
        &[
            "angry", "mad", "furious", "frustrated", "annoyed", "irritated", "生气", "愤怒",
            "恼火", "烦恼", "烦躁",
        ],
    ),
    (
        MoodTone::Calm,
        &["calm", "peaceful", "relaxed", "平静", "放松", "安心"],
    ),
    (
        MoodTone::Tired,
        &["tired", "exhausted", "sleepy", "累", "疲惫", "疲倦", "困"],
    ),
];

/// Quick mood choices offered when writing a diary entry.
pub const QUICK_MOODS: [(&str, &str); 4] = [
    ("😊", "happy"),
    ("😌", "calm"),
    ("😔", "sad"),
    ("😤", "frustrated"),
];

fn normalize(mood: Option<&str>) -> Option<String> {
    let mood = mood?.trim().to_lowercase();
    if mood.is_empty() {
        None
    } else {
        Some(mood)
    }
}

/// Emoji for a mood label.
pub fn mood_emoji(mood: Option<&str>) -> &'static str {
    let Some(mood) = normalize(mood) else {
        return NEUTRAL_EMOJI;
    };

    MOOD_EMOJI
        .iter()
        .find(|(keyword, _)| mood.contains(keyword))
        .map_or(NEUTRAL_EMOJI, |(_, emoji)| emoji)
}

/// Tone category for a mood label.
pub fn mood_tone(mood: Option<&str>) -> MoodTone {
    let Some(mood) = normalize(mood) else {
        return MoodTone::Neutral;
    };

    TONE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| mood.contains(keyword)))
        .map_or(MoodTone::Neutral, |(tone, _)| *tone)
}

/// ASCII-only version of a mood label, `None` if nothing remains.
pub fn english_label(mood: &str) -> Option<String> {
    let label: String = mood.chars().filter(char::is_ascii).collect();
    let label = label.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_mood_is_neutral() {
        assert_eq!(mood_emoji(None), NEUTRAL_EMOJI);
        assert_eq!(mood_emoji(Some("   ")), NEUTRAL_EMOJI);
        assert_eq!(mood_tone(None), MoodTone::Neutral);
    }

    #[test]
    fn english_moods_match_case_insensitively() {
        assert_eq!(mood_emoji(Some("  HAPPY ")), "😊");
        assert_eq!(mood_emoji(Some("Anxious")), "😰");
        assert_eq!(mood_emoji(Some("so tired today")), "😴");
        assert_eq!(mood_emoji(Some("grateful")), "🙏");
    }

    #[test]
    fn chinese_moods_match() {
        assert_eq!(mood_emoji(Some("今天很开心")), "😊");
        assert_eq!(mood_emoji(Some("焦虑")), "😰");
        assert_eq!(mood_emoji(Some("有点累")), "😴");
    }

    #[test]
    fn frustration_keyword_keeps_sad_tone() {
        assert_eq!(mood_emoji(Some("沮丧")), "😤");
        assert_eq!(mood_tone(Some("沮丧")), MoodTone::Sad);
    }

    #[test]
    fn first_listed_keyword_wins() {
        // "excited" is listed after "happy"
        assert_eq!(mood_emoji(Some("happy and excited")), "😊");
        assert_eq!(mood_emoji(Some("excited")), "🤩");
    }

    #[test]
    fn unknown_mood_falls_back_to_neutral() {
        assert_eq!(mood_emoji(Some("purple")), NEUTRAL_EMOJI);
        assert_eq!(mood_tone(Some("purple")), MoodTone::Neutral);
    }

    #[test]
    fn tones_follow_group_order() {
        assert_eq!(mood_tone(Some("Joyful")), MoodTone::Positive);
        assert_eq!(mood_tone(Some("lonely")), MoodTone::Sad);
        assert_eq!(mood_tone(Some("overwhelmed")), MoodTone::Anxious);
        assert_eq!(mood_tone(Some("frustrated")), MoodTone::Angry);
        assert_eq!(mood_tone(Some("peaceful")), MoodTone::Calm);
        assert_eq!(mood_tone(Some("疲惫")), MoodTone::Tired);
    }

    #[test]
    fn english_label_strips_non_ascii() {
        assert_eq!(english_label("Happy 😊").as_deref(), Some("Happy"));
        assert_eq!(english_label("开心"), None);
        assert_eq!(english_label("  "), None);
    }
}
