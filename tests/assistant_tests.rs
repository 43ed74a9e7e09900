use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use civic_pulse::assistant::chat::{ChatClient, ChatRequest};
use civic_pulse::assistant::signal::{AssistantSignal, ChatOutcome, SignalBus};
use civic_pulse::assistant::{Assistant, AssistantPhase};
use civic_pulse::config::Config;
use civic_pulse::lang;
use civic_pulse::speech::scripted::ScriptedRecognizer;
use civic_pulse::speech::{SpeechEvent, SpeechRecognizer};

/// Minimal one-shot HTTP server. Accepts a single connection, captures the
/// raw request, and answers with the given status line and JSON body.
async fn spawn_chat_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, Arc<Mutex<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(String::new()));
    let capture = Arc::clone(&seen);

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);

            let Some(header_end) = find_subsequence(&raw, b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&raw[..header_end]).to_string();
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if raw.len() < header_end + 4 + content_length {
                continue;
            }

            *capture.lock().unwrap() = String::from_utf8_lossy(&raw).to_string();
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();
            break;
        }
    });

    (format!("http://{}", addr), seen)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[tokio::test]
async fn test_chat_round_trip_over_http() {
    let (base_url, seen) = spawn_chat_stub(
        "HTTP/1.1 200 OK",
        r#"{"conversationId":"conv-41","aiResponse":"Crews are scheduled this week."}"#,
    )
    .await;

    let client = ChatClient::new(&base_url);
    let request = ChatRequest {
        user_id: "citizen-demo".to_string(),
        message: "When will the pothole be fixed?".to_string(),
        conversation_id: None,
        language_tag: "en-IN".to_string(),
    };

    let reply = client.send(&request).await.unwrap();
    assert_eq!(reply.conversation_id, "conv-41");
    assert_eq!(reply.ai_response, "Crews are scheduled this week.");

    let wire = seen.lock().unwrap().clone();
    assert!(wire.starts_with("POST /api/chat "), "wire was: {wire}");
    assert!(wire.contains(r#""userId":"citizen-demo""#));
    assert!(wire.contains(r#""conversationId":null"#));
    assert!(wire.contains(r#""languageTag":"en-IN""#));
}

#[tokio::test]
async fn test_chat_error_status_surfaces_server_detail() {
    let (base_url, _seen) = spawn_chat_stub(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":"model backend offline"}"#,
    )
    .await;

    let client = ChatClient::new(&base_url);
    let request = ChatRequest {
        user_id: "citizen-demo".to_string(),
        message: "hello".to_string(),
        conversation_id: Some("conv-41".to_string()),
        language_tag: "en-IN".to_string(),
    };

    let err = client
        .send(&request)
        .await
        .expect_err("a 500 status should not parse as a reply");
    assert!(
        err.to_string().contains("model backend offline"),
        "error was: {err}"
    );
}

#[tokio::test]
async fn test_scripted_voice_session_reaches_awaiting_reply() {
    let (bus, mut signals) = SignalBus::new();
    let mut recognizer = ScriptedRecognizer::with_scripts(
        bus.get_sender(),
        vec!["the drain near the school is overflowing".to_string()],
    )
    .with_interim_delay(Duration::from_millis(1));

    let config = Config::default();
    let mut assistant = Assistant::new(&config);
    assert_eq!(assistant.phase, AssistantPhase::Idle);

    recognizer.start(&assistant.language).unwrap();
    assistant.begin_listening();
    assert_eq!(assistant.phase, AssistantPhase::Listening);

    // Drain the session exactly the way the app loop does.
    let mut pending_transcript = None;
    while let Some(signal) = signals.recv().await {
        match signal {
            AssistantSignal::Speech(SpeechEvent::Interim(text)) => assistant.on_interim(text),
            AssistantSignal::Speech(SpeechEvent::Final(text)) => {
                pending_transcript = assistant.on_final(text);
            }
            AssistantSignal::Speech(SpeechEvent::Ended) => {
                assistant.on_recognizer_ended();
                break;
            }
            other => panic!("unexpected signal: {other:?}"),
        }
    }

    // The end-of-session event after a final transcript must not reset the
    // pending submit.
    let transcript = pending_transcript.expect("the scripted session should finalize");
    assert_eq!(assistant.phase, AssistantPhase::Sent);

    let request = assistant
        .take_voice_submit(transcript)
        .expect("the confirmed transcript should produce a request");
    assert_eq!(assistant.phase, AssistantPhase::AwaitingReply);
    assert_eq!(request.message, "the drain near the school is overflowing");
    assert_eq!(request.conversation_id, None);
    assert_eq!(request.language_tag, assistant.language);

    let last = assistant.messages.last().unwrap();
    assert!(last.via_voice, "a voice submit should be marked as spoken");
    assert_eq!(last.text, "the drain near the school is overflowing");
}

#[tokio::test]
async fn test_language_cycle_tags_outgoing_requests() {
    let config = Config::default();
    let mut assistant = Assistant::new(&config);
    assert_eq!(assistant.language, "en-IN");

    assistant.cycle_language();
    assert_eq!(assistant.language, "hi-IN");

    assistant.input = "पानी कब आएगा?".to_string();
    let request = assistant
        .submit_typed()
        .expect("an idle assistant should accept a typed submit");
    assert_eq!(request.language_tag, "hi-IN");
    assert_eq!(request.message, "पानी कब आएगा?");
}

#[tokio::test]
async fn test_failed_reply_is_localized_and_keeps_conversation() {
    let config = Config::default();
    let mut assistant = Assistant::new(&config);
    assistant.conversation_id = Some("conv-9".to_string());

    assistant.input = "any update?".to_string();
    assistant.submit_typed().unwrap();
    assert_eq!(assistant.phase, AssistantPhase::AwaitingReply);

    let (spoken, spoken_language) = assistant.on_reply(ChatOutcome::Failure {
        detail: "connection refused".to_string(),
    });

    assert_eq!(assistant.phase, AssistantPhase::Idle);
    assert_eq!(
        assistant.conversation_id.as_deref(),
        Some("conv-9"),
        "a failed turn must not clobber the conversation"
    );
    assert!(spoken.starts_with(lang::chat_failure_message("en-IN")));
    assert!(spoken.contains("connection refused"));
    assert_eq!(spoken_language, "en-IN");
}
