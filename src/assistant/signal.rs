// src/assistant/signal.rs
// Channel carrying asynchronous assistant outcomes back into the app loop:
// recognizer events, the delayed voice submit, and chat replies.

use crate::speech::SpeechEvent;
use tokio::sync::mpsc;

/// Outcome of one chat request, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Success {
        conversation_id: String,
        reply: String,
    },
    Failure {
        detail: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantSignal {
    /// A recognizer session event.
    Speech(SpeechEvent),
    /// Fires after the voice confirmation delay with the transcript to send.
    VoiceSubmit(String),
    /// A chat request finished.
    Reply(ChatOutcome),
}

pub type SignalSender = mpsc::UnboundedSender<AssistantSignal>;
pub type SignalReceiver = mpsc::UnboundedReceiver<AssistantSignal>;

/// Cloneable publishing handle paired with a single receiving end owned by
/// the app loop.
#[derive(Debug, Clone)]
pub struct SignalBus {
    sender: SignalSender,
}

impl SignalBus {
    pub fn new() -> (Self, SignalReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Sends a signal, quietly dropping it if the app loop has shut down.
    pub fn publish(&self, signal: AssistantSignal) {
        let _ = self.sender.send(signal);
    }

    pub fn get_sender(&self) -> SignalSender {
        self.sender.clone()
    }
}
