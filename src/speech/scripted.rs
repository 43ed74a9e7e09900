// src/speech/scripted.rs
// Stand-in speech backends. The recognizer replays scripted utterances
// word by word the way a live engine streams interim results; the
// synthesizer logs what it would say and tracks the in-flight utterance.

use super::{pick_voice, SpeechEvent, SpeechRecognizer, SpeechSynthesizer, Voice};
use crate::assistant::signal::{AssistantSignal, SignalSender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DEFAULT_INTERIM_DELAY: Duration = Duration::from_millis(220);

fn default_scripts() -> Vec<String> {
    vec![
        "What is the status of road repairs in Madhapur".to_string(),
        "मेरे इलाके में पानी की समस्या है".to_string(),
        "When is garbage collected in Secunderabad this week".to_string(),
    ]
}

/// Replays canned utterances over the signal channel: a growing interim
/// transcript per word, one final transcript, then an end-of-session event.
pub struct ScriptedRecognizer {
    scripts: Vec<String>,
    cursor: usize,
    live: Arc<AtomicBool>,
    signals: SignalSender,
    interim_delay: Duration,
}

impl ScriptedRecognizer {
    pub fn new(signals: SignalSender) -> Self {
        Self::with_scripts(signals, default_scripts())
    }

    pub fn with_scripts(signals: SignalSender, scripts: Vec<String>) -> Self {
        let scripts = if scripts.is_empty() {
            default_scripts()
        } else {
            scripts
        };
        Self {
            scripts,
            cursor: 0,
            live: Arc::new(AtomicBool::new(false)),
            signals,
            interim_delay: DEFAULT_INTERIM_DELAY,
        }
    }

    pub fn with_interim_delay(mut self, delay: Duration) -> Self {
        self.interim_delay = delay;
        self
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(&mut self, language_tag: &str) -> Result<(), String> {
        if self.live.load(Ordering::SeqCst) {
            return Err("Recognizer session already active".to_string());
        }

        let transcript = self.scripts[self.cursor % self.scripts.len()].clone();
        self.cursor += 1;
        self.live.store(true, Ordering::SeqCst);
        tracing::debug!(language = language_tag, "recognizer session started");

        let live = Arc::clone(&self.live);
        let signals = self.signals.clone();
        let delay = self.interim_delay;
        tokio::spawn(async move {
            let words: Vec<&str> = transcript.split_whitespace().collect();
            let mut partial = String::new();
            for word in words {
                if !live.load(Ordering::SeqCst) {
                    break;
                }
                tokio::time::sleep(delay).await;
                if !partial.is_empty() {
                    partial.push(' ');
                }
                partial.push_str(word);
                let _ = signals.send(AssistantSignal::Speech(SpeechEvent::Interim(
                    partial.clone(),
                )));
            }
            // The first finalized segment ends the session, mirroring a
            // continuous engine stopped on its first final result.
            if live.load(Ordering::SeqCst) {
                let _ = signals.send(AssistantSignal::Speech(SpeechEvent::Final(partial)));
                live.store(false, Ordering::SeqCst);
            }
            let _ = signals.send(AssistantSignal::Speech(SpeechEvent::Ended));
        });

        Ok(())
    }

    fn stop(&mut self) {
        self.live.store(false, Ordering::SeqCst);
    }

    fn is_listening(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

/// Logs utterances instead of playing them, with a timed clear so the UI
/// can show what is "speaking" right now.
pub struct MockSynthesizer {
    voices: Vec<Voice>,
    rate: f32,
    pitch: f32,
    volume: f32,
    generation: u64,
    current: Arc<Mutex<Option<(u64, String)>>>,
}

impl MockSynthesizer {
    pub fn new(rate: f32, pitch: f32, volume: f32) -> Self {
        Self {
            voices: vec![
                Voice::new("Rishi", "en-IN"),
                Voice::new("Lekha", "hi-IN"),
                Voice::new("Geeta", "te-IN"),
                Voice::new("Daniel", "en-GB"),
                Voice::new("Samantha", "en-US"),
            ],
            rate: rate.clamp(0.1, 4.0),
            pitch: pitch.clamp(0.0, 2.0),
            volume: volume.clamp(0.0, 1.0),
            generation: 0,
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_voices(mut self, voices: Vec<Voice>) -> Self {
        self.voices = voices;
        self
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn speak(&mut self, text: &str, language_tag: &str) -> Result<(), String> {
        self.cancel();

        let voice = pick_voice(&self.voices, language_tag)
            .ok_or_else(|| "No synthesis voices available".to_string())?;
        tracing::info!(
            voice = %voice.name,
            language = %voice.language,
            rate = self.rate,
            pitch = self.pitch,
            volume = self.volume,
            "speaking: {text}"
        );

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        *self.current.lock().unwrap() = Some((generation, text.to_string()));

        // Clear the in-flight marker after a rough per-word playback time,
        // unless a newer utterance has replaced it.
        let words = text.split_whitespace().count().max(1) as u64;
        let millis = ((words * 300) as f32 / self.rate) as u64;
        let current = Arc::clone(&self.current);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis.max(500))).await;
            let mut slot = current.lock().unwrap();
            if matches!(&*slot, Some((gen, _)) if *gen == generation) {
                *slot = None;
            }
        });

        Ok(())
    }

    fn cancel(&mut self) {
        *self.current.lock().unwrap() = None;
    }

    fn speaking(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, text)| text.clone())
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }
}

/// Silent backend used when synthesis volume is configured to zero.
pub struct MutedSynthesizer;

impl SpeechSynthesizer for MutedSynthesizer {
    fn speak(&mut self, text: &str, _language_tag: &str) -> Result<(), String> {
        tracing::debug!("muted, not speaking: {text}");
        Ok(())
    }

    fn cancel(&mut self) {}

    fn speaking(&self) -> Option<String> {
        None
    }

    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }
}
