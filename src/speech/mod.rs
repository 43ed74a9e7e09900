// src/speech/mod.rs
// Speech-to-text and text-to-speech as injected capabilities. The real
// platform engines live behind the two traits; the bundled backends are
// scripted stand-ins so the assistant loop runs anywhere.

pub mod scripted;

use crate::lang;
use std::sync::{Arc, Mutex};

pub use scripted::{MockSynthesizer, MutedSynthesizer, ScriptedRecognizer};

/// Events a recognizer session delivers while it is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// A partial transcript, replaced as more audio arrives.
    Interim(String),
    /// The first finalized transcript segment. The session stops after this.
    Final(String),
    /// The session failed (permission denied, no speech, engine fault).
    Error(String),
    /// The session is over, with or without a final transcript.
    Ended,
}

/// A synthesis voice as enumerated by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub language: String,
}

impl Voice {
    pub fn new(name: &str, language: &str) -> Self {
        Self {
            name: name.to_string(),
            language: language.to_string(),
        }
    }
}

pub trait SpeechRecognizer: Send {
    /// Starts a continuous session with interim results enabled.
    fn start(&mut self, language_tag: &str) -> Result<(), String>;
    /// Stops the session. Safe to call when idle.
    fn stop(&mut self);
    fn is_listening(&self) -> bool;
}

pub trait SpeechSynthesizer: Send {
    /// Cancels any in-flight utterance, then speaks this one.
    fn speak(&mut self, text: &str, language_tag: &str) -> Result<(), String>;
    fn cancel(&mut self);
    /// Text currently being spoken, if any.
    fn speaking(&self) -> Option<String>;
    fn voices(&self) -> Vec<Voice>;
}

/// Ordered preference chain for matching a language tag to an available
/// voice: exact tag, then base language, then a language-name substring in
/// the voice name, then same region, then any English voice, then whatever
/// is first.
pub fn pick_voice<'a>(voices: &'a [Voice], tag: &str) -> Option<&'a Voice> {
    let base = lang::base_language(tag).to_lowercase();
    let base_prefix = format!("{}-", base);

    if let Some(voice) = voices
        .iter()
        .find(|v| v.language.eq_ignore_ascii_case(tag))
    {
        return Some(voice);
    }

    if let Some(voice) = voices.iter().find(|v| {
        let language = v.language.to_lowercase();
        language == base || language.starts_with(&base_prefix)
    }) {
        return Some(voice);
    }

    let needle = language_search_word(&base);
    if let Some(voice) = voices
        .iter()
        .find(|v| v.name.to_lowercase().contains(needle))
    {
        return Some(voice);
    }

    if let Some(region) = lang::region(tag) {
        let suffix = format!("-{}", region.to_lowercase());
        if let Some(voice) = voices
            .iter()
            .find(|v| v.language.to_lowercase().ends_with(&suffix))
        {
            return Some(voice);
        }
    }

    if let Some(voice) = voices
        .iter()
        .find(|v| lang::base_language(&v.language).eq_ignore_ascii_case("en"))
    {
        return Some(voice);
    }

    voices.first()
}

fn language_search_word(base: &str) -> &str {
    match base {
        "en" => "english",
        "hi" => "hindi",
        "bn" => "bengali",
        "pa" => "punjabi",
        "gu" => "gujarati",
        "or" => "odia",
        "ta" => "tamil",
        "te" => "telugu",
        "kn" => "kannada",
        "ml" => "malayalam",
        other => other,
    }
}

/// Cloneable handle bundling both speech capabilities for the app.
#[derive(Clone)]
pub struct SpeechBridge {
    recognizer: Arc<Mutex<dyn SpeechRecognizer + Send>>,
    synthesizer: Arc<Mutex<dyn SpeechSynthesizer + Send>>,
}

impl std::fmt::Debug for SpeechBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechBridge").finish_non_exhaustive()
    }
}

impl SpeechBridge {
    pub fn new(
        recognizer: impl SpeechRecognizer + 'static,
        synthesizer: impl SpeechSynthesizer + 'static,
    ) -> Self {
        Self {
            recognizer: Arc::new(Mutex::new(recognizer)),
            synthesizer: Arc::new(Mutex::new(synthesizer)),
        }
    }

    pub fn start_listening(&self, language_tag: &str) -> Result<(), String> {
        self.recognizer.lock().unwrap().start(language_tag)
    }

    pub fn stop_listening(&self) {
        self.recognizer.lock().unwrap().stop();
    }

    pub fn is_listening(&self) -> bool {
        self.recognizer.lock().unwrap().is_listening()
    }

    pub fn speak(&self, text: &str, language_tag: &str) -> Result<(), String> {
        self.synthesizer.lock().unwrap().speak(text, language_tag)
    }

    pub fn cancel_speech(&self) {
        self.synthesizer.lock().unwrap().cancel();
    }

    pub fn now_speaking(&self) -> Option<String> {
        self.synthesizer.lock().unwrap().speaking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Voice> {
        vec![
            Voice::new("Samantha", "en-US"),
            Voice::new("Rishi", "en-IN"),
            Voice::new("Lekha", "hi-IN"),
            Voice::new("Geeta", "te-IN"),
        ]
    }

    #[test]
    fn test_pick_voice_exact_tag() {
        let voices = table();
        let picked = pick_voice(&voices, "hi-IN").unwrap();
        assert_eq!(picked.name, "Lekha");
    }

    #[test]
    fn test_pick_voice_base_language() {
        let voices = vec![
            Voice::new("Samantha", "en-US"),
            Voice::new("Hindi Female", "hi"),
        ];
        let picked = pick_voice(&voices, "hi-IN").unwrap();
        assert_eq!(picked.name, "Hindi Female");
    }

    #[test]
    fn test_pick_voice_name_substring() {
        let voices = vec![
            Voice::new("Samantha", "en-US"),
            Voice::new("Google Telugu", "und"),
        ];
        let picked = pick_voice(&voices, "te-IN").unwrap();
        assert_eq!(picked.name, "Google Telugu");
    }

    #[test]
    fn test_pick_voice_same_region() {
        let voices = vec![
            Voice::new("Samantha", "en-US"),
            Voice::new("Rishi", "en-IN"),
        ];
        // No Tamil voice anywhere; the en-IN voice wins on region.
        let picked = pick_voice(&voices, "ta-IN").unwrap();
        assert_eq!(picked.name, "Rishi");
    }

    #[test]
    fn test_pick_voice_english_fallback() {
        let voices = vec![
            Voice::new("Marie", "fr-FR"),
            Voice::new("Daniel", "en-GB"),
        ];
        let picked = pick_voice(&voices, "ta-IN").unwrap();
        assert_eq!(picked.name, "Daniel");
    }

    #[test]
    fn test_pick_voice_last_resort_is_first_voice() {
        let voices = vec![Voice::new("Marie", "fr-FR"), Voice::new("Anna", "de-DE")];
        let picked = pick_voice(&voices, "ta-IN").unwrap();
        assert_eq!(picked.name, "Marie");
    }

    #[test]
    fn test_pick_voice_empty_table() {
        assert!(pick_voice(&[], "en-IN").is_none());
    }
}
