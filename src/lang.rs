// src/lang.rs
// Script detection and localized strings for the assistant.

/// Language the assistant starts in when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en-IN";

/// Input languages offered by the recognizer language cycler.
pub const DEFAULT_INPUT_LANGUAGES: [&str; 3] = ["en-IN", "hi-IN", "te-IN"];

/// Disjoint Unicode block ranges mapped to regional language tags.
/// The first character of the text that falls in a block decides the tag.
const SCRIPT_RANGES: [(u32, u32, &str); 9] = [
    (0x0900, 0x097F, "hi-IN"), // Devanagari
    (0x0980, 0x09FF, "bn-IN"), // Bengali
    (0x0A00, 0x0A7F, "pa-IN"), // Gurmukhi
    (0x0A80, 0x0AFF, "gu-IN"), // Gujarati
    (0x0B00, 0x0B7F, "or-IN"), // Odia
    (0x0B80, 0x0BFF, "ta-IN"), // Tamil
    (0x0C00, 0x0C7F, "te-IN"), // Telugu
    (0x0C80, 0x0CFF, "kn-IN"), // Kannada
    (0x0D00, 0x0D7F, "ml-IN"), // Malayalam
];

/// Picks a language tag for a reply so the synthesizer can choose a voice.
/// Latin-script text (and anything unrecognized) falls back to English.
pub fn detect_language_tag(text: &str) -> &'static str {
    for ch in text.chars() {
        let code_point = ch as u32;
        for &(start, end, tag) in SCRIPT_RANGES.iter() {
            if code_point >= start && code_point <= end {
                return tag;
            }
        }
    }
    DEFAULT_LANGUAGE
}

/// "hi-IN" -> "hi"
pub fn base_language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// "hi-IN" -> Some("IN")
pub fn region(tag: &str) -> Option<&str> {
    tag.split('-').nth(1)
}

/// Chat bubble shown (and spoken) when the endpoint cannot be reached.
pub fn chat_failure_message(tag: &str) -> &'static str {
    match base_language(tag) {
        "hi" => "सर्वर से संपर्क नहीं हो पा रहा है। कृपया थोड़ी देर बाद फिर से प्रयास करें।",
        "te" => "సర్వర్‌కు కనెక్ట్ కాలేకపోతున్నాం. దయచేసి కాసేపటి తర్వాత మళ్లీ ప్రయత్నించండి.",
        _ => "I could not reach the complaint assistant service. Please try again in a moment.",
    }
}

/// Banner shown when a recognition session fails. The session is over at
/// that point; the user has to start the microphone again.
pub fn recognition_failure_message(tag: &str) -> &'static str {
    match base_language(tag) {
        "hi" => "आवाज़ पहचानने में समस्या आई। कृपया माइक दोबारा शुरू करें।",
        "te" => "వాయిస్ గుర్తింపులో సమస్య వచ్చింది. దయచేసి మైక్ మళ్లీ ప్రారంభించండి.",
        _ => "Something went wrong while listening. Please start the microphone again.",
    }
}

/// Welcome text for an empty chat history.
pub fn assistant_greeting(tag: &str) -> &'static str {
    match base_language(tag) {
        "hi" => "नमस्ते! मैं आपका नागरिक शिकायत सहायक हूँ। सड़क, पानी, बिजली या सफ़ाई से जुड़ी शिकायत बताइए।",
        "te" => "నమస్తే! నేను మీ పౌర ఫిర్యాదు సహాయకుడిని. రోడ్లు, నీరు, విద్యుత్ లేదా పారిశుద్ధ్యం గురించి అడగండి.",
        _ => "Hello! I am your civic complaint assistant. Ask me about roads, water, power or sanitation issues in your area.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_text_defaults_to_english() {
        assert_eq!(detect_language_tag("The garbage was not collected"), "en-IN");
        assert_eq!(detect_language_tag(""), "en-IN");
        assert_eq!(detect_language_tag("123 !?"), "en-IN");
    }

    #[test]
    fn test_devanagari_maps_to_hindi() {
        assert_eq!(detect_language_tag("सड़क टूटी हुई है"), "hi-IN");
        // Mixed text: the first Indic character decides.
        assert_eq!(detect_language_tag("Ward 12: सड़क"), "hi-IN");
    }

    #[test]
    fn test_telugu_and_tamil_blocks_map_to_their_tags() {
        assert_eq!(detect_language_tag("రోడ్డు బాగా లేదు"), "te-IN");
        assert_eq!(detect_language_tag("சாலை சேதம்"), "ta-IN");
    }

    #[test]
    fn test_tag_helpers_split_correctly() {
        assert_eq!(base_language("hi-IN"), "hi");
        assert_eq!(base_language("en"), "en");
        assert_eq!(region("te-IN"), Some("IN"));
        assert_eq!(region("en"), None);
    }

    #[test]
    fn test_localized_strings_fall_back_to_english() {
        assert!(chat_failure_message("fr-FR").starts_with("I could not reach"));
        assert!(chat_failure_message("hi-IN").contains("सर्वर"));
        assert!(recognition_failure_message("te-IN").contains("వాయిస్"));
    }
}
