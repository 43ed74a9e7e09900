// src/assistant/mod.rs
// Owned state for the chat widget: message list, interaction phase,
// language selection, and the transition rules between them. Side effects
// (HTTP, speech, timers) stay with the app loop; this module only decides
// what should happen next.

pub mod chat;
pub mod signal;

use crate::config::Config;
use crate::lang;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

use chat::ChatRequest;
use signal::ChatOutcome;

/// Delay between a final transcript and the actual send, giving the user a
/// moment to see what was heard.
pub const VOICE_CONFIRM_DELAY: Duration = Duration::from_millis(600);

/// How long an error banner stays up before it clears itself.
pub const BANNER_TTL: Duration = Duration::from_secs(4);

const ERROR_SNIPPET_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantPhase {
    Idle,
    Listening,
    Transcribing,
    Sent,
    AwaitingReply,
}

impl AssistantPhase {
    pub fn label(self) -> &'static str {
        match self {
            AssistantPhase::Idle => "Idle",
            AssistantPhase::Listening => "Listening",
            AssistantPhase::Transcribing => "Transcribing",
            AssistantPhase::Sent => "Sending",
            AssistantPhase::AwaitingReply => "Waiting for reply",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub origin: Origin,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub via_voice: bool,
}

#[derive(Debug)]
pub struct Assistant {
    pub messages: Vec<ChatMessage>,
    pub phase: AssistantPhase,
    /// Typed input buffer.
    pub input: String,
    /// Live transcript while a recognizer session runs.
    pub interim: String,
    pub conversation_id: Option<String>,
    pub language: String,
    languages: Vec<String>,
    language_cursor: usize,
    pub user_id: String,
    pub scroll: u16,
    banner: Option<(String, Instant)>,
}

impl Assistant {
    pub fn new(config: &Config) -> Self {
        let languages = if config.speech.languages.is_empty() {
            lang::DEFAULT_INPUT_LANGUAGES
                .iter()
                .map(|tag| tag.to_string())
                .collect()
        } else {
            config.speech.languages.clone()
        };
        let language = config.speech.language.clone();
        let language_cursor = languages
            .iter()
            .position(|tag| tag == &language)
            .unwrap_or(0);

        let mut assistant = Self {
            messages: Vec::new(),
            phase: AssistantPhase::Idle,
            input: String::new(),
            interim: String::new(),
            conversation_id: None,
            language,
            languages,
            language_cursor,
            user_id: config.chat.user_id.clone(),
            scroll: 0,
            banner: None,
        };
        let greeting = lang::assistant_greeting(&assistant.language).to_string();
        assistant.push_assistant(greeting);
        assistant
    }

    fn push_message(&mut self, origin: Origin, text: String, via_voice: bool) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            origin,
            text,
            timestamp: Utc::now(),
            via_voice,
        });
    }

    fn push_user(&mut self, text: String, via_voice: bool) {
        self.push_message(Origin::User, text, via_voice);
    }

    fn push_assistant(&mut self, text: String) {
        self.push_message(Origin::Assistant, text, false);
    }

    fn build_request(&self, message: String) -> ChatRequest {
        ChatRequest {
            user_id: self.user_id.clone(),
            message,
            conversation_id: self.conversation_id.clone(),
            language_tag: self.language.clone(),
        }
    }

    /// Microphone activated; a recognizer session is now live.
    pub fn begin_listening(&mut self) {
        self.interim.clear();
        self.phase = AssistantPhase::Listening;
    }

    /// A partial transcript arrived.
    pub fn on_interim(&mut self, text: String) {
        if matches!(
            self.phase,
            AssistantPhase::Listening | AssistantPhase::Transcribing
        ) {
            self.phase = AssistantPhase::Transcribing;
            self.interim = text;
        }
    }

    /// The first finalized transcript arrived. Returns the transcript the
    /// caller should submit after [`VOICE_CONFIRM_DELAY`].
    pub fn on_final(&mut self, text: String) -> Option<String> {
        if !matches!(
            self.phase,
            AssistantPhase::Listening | AssistantPhase::Transcribing
        ) {
            return None;
        }
        if text.trim().is_empty() {
            self.phase = AssistantPhase::Idle;
            self.interim.clear();
            return None;
        }
        self.interim = text.clone();
        self.phase = AssistantPhase::Sent;
        Some(text)
    }

    /// The recognizer session failed. The session is over; the user has to
    /// start a new one by hand.
    pub fn on_recognizer_error(&mut self, detail: &str) {
        tracing::warn!("recognizer error: {detail}");
        self.set_banner(lang::recognition_failure_message(&self.language).to_string());
        self.interim.clear();
        self.phase = AssistantPhase::Idle;
    }

    /// The recognizer session ended. Only resets the phase when no final
    /// transcript made it out; an end event after a final is routine.
    pub fn on_recognizer_ended(&mut self) {
        if matches!(
            self.phase,
            AssistantPhase::Listening | AssistantPhase::Transcribing
        ) {
            self.interim.clear();
            self.phase = AssistantPhase::Idle;
        }
    }

    /// The voice confirmation delay elapsed. Returns the request to send,
    /// unless the pending submit was cancelled or replaced meanwhile.
    pub fn take_voice_submit(&mut self, transcript: String) -> Option<ChatRequest> {
        if self.phase != AssistantPhase::Sent {
            return None;
        }
        self.interim.clear();
        self.push_user(transcript.clone(), true);
        self.phase = AssistantPhase::AwaitingReply;
        Some(self.build_request(transcript))
    }

    /// Submits the typed input buffer. One request in flight at a time; a
    /// submit while busy is ignored.
    pub fn submit_typed(&mut self) -> Option<ChatRequest> {
        if self.phase != AssistantPhase::Idle {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input.clear();
        self.push_user(text.clone(), false);
        self.phase = AssistantPhase::AwaitingReply;
        Some(self.build_request(text))
    }

    /// Absorbs a chat outcome. Returns the text to speak aloud and the
    /// language tag to pick the voice with.
    pub fn on_reply(&mut self, outcome: ChatOutcome) -> (String, String) {
        self.phase = AssistantPhase::Idle;
        match outcome {
            ChatOutcome::Success {
                conversation_id,
                reply,
            } => {
                self.conversation_id = Some(conversation_id);
                let spoken_language = lang::detect_language_tag(&reply).to_string();
                self.push_assistant(reply.clone());
                (reply, spoken_language)
            }
            ChatOutcome::Failure { detail } => {
                tracing::warn!("chat request failed: {detail}");
                let fallback = format!(
                    "{} ({})",
                    lang::chat_failure_message(&self.language),
                    truncate_error(&detail)
                );
                self.push_assistant(fallback.clone());
                (fallback, self.language.clone())
            }
        }
    }

    pub fn cycle_language(&mut self) {
        self.language_cursor = (self.language_cursor + 1) % self.languages.len();
        self.language = self.languages[self.language_cursor].clone();
    }

    pub fn set_banner(&mut self, text: String) {
        self.banner = Some((text, Instant::now() + BANNER_TTL));
    }

    pub fn banner_text(&self) -> Option<&str> {
        self.banner.as_ref().map(|(text, _)| text.as_str())
    }

    /// Called on every tick to expire the banner.
    pub fn tick(&mut self) {
        self.expire_banner_at(Instant::now());
    }

    fn expire_banner_at(&mut self, now: Instant) {
        if matches!(&self.banner, Some((_, expires)) if *expires <= now) {
            self.banner = None;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

fn truncate_error(detail: &str) -> String {
    if detail.chars().count() > ERROR_SNIPPET_CHARS {
        format!(
            "{}...",
            detail.chars().take(ERROR_SNIPPET_CHARS).collect::<String>()
        )
    } else {
        detail.to_string()
    }
}
