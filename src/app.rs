use crate::analytics::predictor::{forecast_all, TrendForecast};
use crate::analytics::report::compose_report;
use crate::assistant::chat::{ChatClient, ChatRequest};
use crate::assistant::signal::{AssistantSignal, ChatOutcome, SignalBus, SignalReceiver};
use crate::assistant::{Assistant, AssistantPhase, VOICE_CONFIRM_DELAY};
use crate::config::Config;
use crate::event::{AppEvent, Event, EventHandler};
use crate::fixtures::{COMPLAINTS, DISTRICTS, SNAPSHOT};
use crate::speech::{
    MockSynthesizer, MutedSynthesizer, ScriptedRecognizer, SpeechBridge, SpeechEvent,
};
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};
use throbber_widgets_tui::ThrobberState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Dashboard,
    Assistant,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current screen.
    pub screen: AppScreen,

    pub config: Config,
    /// Chat widget state.
    pub assistant: Assistant,
    /// Injected speech capabilities.
    pub speech: SpeechBridge,
    pub chat_client: ChatClient,
    /// Trend projections computed once from the monthly series.
    pub forecasts: Vec<TrendForecast>,

    /// Selected row in the district table.
    pub selected_district: usize,
    pub show_report: bool,
    pub report_text: String,
    pub report_scroll: u16,
    pub throbber: ThrobberState,

    signals: SignalBus,
    signal_receiver: SignalReceiver,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub async fn new() -> Result<Self> {
        let config = Config::load()?;
        let (signals, signal_receiver) = SignalBus::new();

        // Synthesis at zero volume gets the silent backend.
        let speech = if config.speech.volume > 0.0 {
            SpeechBridge::new(
                ScriptedRecognizer::new(signals.get_sender()),
                MockSynthesizer::new(
                    config.speech.rate,
                    config.speech.pitch,
                    config.speech.volume,
                ),
            )
        } else {
            SpeechBridge::new(ScriptedRecognizer::new(signals.get_sender()), MutedSynthesizer)
        };

        let chat_client = ChatClient::new(&config.chat.base_url);
        let assistant = Assistant::new(&config);
        tracing::info!(endpoint = %chat_client.endpoint(), "civic pulse starting");

        Ok(Self {
            running: true,
            screen: AppScreen::Dashboard,
            assistant,
            speech,
            chat_client,
            forecasts: forecast_all(&SNAPSHOT.monthly),
            selected_district: 0,
            show_report: false,
            report_text: String::new(),
            report_scroll: 0,
            throbber: ThrobberState::default(),
            signals,
            signal_receiver,
            events: EventHandler::new(),
            config,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| {
                    frame.render_widget(&mut self, frame.area());
                })?;
                // save power
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event {
                        Ok(event) => match event {
                            Event::Tick => {
                                if self.on_tick() {
                                    needs_redraw = true;
                                }
                            }
                            Event::Crossterm(event) => {
                                if let crossterm::event::Event::Key(key_event) = event {
                                    self.handle_key_events(key_event)?;
                                    needs_redraw = true;
                                }
                            }
                            Event::App(app_event) => {
                                match app_event {
                                    AppEvent::NextScreen => self.next_screen(),
                                    AppEvent::NextDistrict => {
                                        self.selected_district =
                                            (self.selected_district + 1) % DISTRICTS.len();
                                    }
                                    AppEvent::PrevDistrict => {
                                        self.selected_district = self
                                            .selected_district
                                            .checked_sub(1)
                                            .unwrap_or(DISTRICTS.len() - 1);
                                    }
                                    AppEvent::ScrollUp => self.scroll_up(),
                                    AppEvent::ScrollDown => self.scroll_down(),
                                    AppEvent::Quit => self.quit(),
                                    AppEvent::ToggleReport => self.toggle_report(),
                                    AppEvent::ChatSubmit => {
                                        if let Some(request) = self.assistant.submit_typed() {
                                            self.dispatch_chat(request);
                                        }
                                    }
                                    AppEvent::ToggleVoice => self.toggle_voice(),
                                    AppEvent::CycleLanguage => self.assistant.cycle_language(),
                                }
                                needs_redraw = true;
                            }
                        },
                        Err(e) => tracing::error!("event error: {e}"),
                    }
                }
                signal = self.signal_receiver.recv() => {
                    if let Some(signal) = signal {
                        self.handle_signal(signal);
                        needs_redraw = true;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        // The assistant screen is a typing surface; plain characters edit
        // the input buffer.
        if self.screen == AppScreen::Assistant {
            match key_event.code {
                KeyCode::Esc => {
                    if self.speech.is_listening() {
                        self.events.send(AppEvent::ToggleVoice);
                    } else {
                        self.events.send(AppEvent::NextScreen);
                    }
                }
                KeyCode::Tab => self.events.send(AppEvent::NextScreen),
                KeyCode::Enter => self.events.send(AppEvent::ChatSubmit),
                KeyCode::F(2) => self.events.send(AppEvent::ToggleVoice),
                KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                    self.events.send(AppEvent::Quit)
                }
                KeyCode::Char('l' | 'L') if key_event.modifiers == KeyModifiers::CONTROL => {
                    self.events.send(AppEvent::CycleLanguage)
                }
                KeyCode::Backspace => {
                    self.assistant.input.pop();
                }
                KeyCode::PageUp | KeyCode::Up => self.events.send(AppEvent::ScrollUp),
                KeyCode::PageDown | KeyCode::Down => self.events.send(AppEvent::ScrollDown),
                KeyCode::Char(ch) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.assistant.input.push(ch);
                }
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc => {
                if self.show_report {
                    self.events.send(AppEvent::ToggleReport);
                } else {
                    self.events.send(AppEvent::Quit);
                }
            }
            KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Tab => self.events.send(AppEvent::NextScreen),
            KeyCode::Char('g') => self.events.send(AppEvent::ToggleReport),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.show_report {
                    self.events.send(AppEvent::ScrollUp);
                } else {
                    self.events.send(AppEvent::PrevDistrict);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.show_report {
                    self.events.send(AppEvent::ScrollDown);
                } else {
                    self.events.send(AppEvent::NextDistrict);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles the tick event of the terminal. Returns true when something
    /// animated changed and the frame should be redrawn.
    fn on_tick(&mut self) -> bool {
        let busy = self.assistant.phase != AssistantPhase::Idle || self.speech.is_listening();
        if busy {
            self.throbber.calc_next();
        }

        let had_banner = self.assistant.banner_text().is_some();
        self.assistant.tick();
        let banner_cleared = had_banner && self.assistant.banner_text().is_none();

        busy || banner_cleared || self.speech.now_speaking().is_some()
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn next_screen(&mut self) {
        self.screen = match self.screen {
            AppScreen::Dashboard => AppScreen::Assistant,
            AppScreen::Assistant => AppScreen::Dashboard,
        };
    }

    pub fn toggle_report(&mut self) {
        self.show_report = !self.show_report;
        if self.show_report {
            self.report_text = compose_report(&COMPLAINTS, &SNAPSHOT.monthly);
            self.report_scroll = 0;
        }
    }

    fn scroll_up(&mut self) {
        match self.screen {
            AppScreen::Assistant => self.assistant.scroll_up(),
            AppScreen::Dashboard if self.show_report => {
                self.report_scroll = self.report_scroll.saturating_sub(1);
            }
            AppScreen::Dashboard => {}
        }
    }

    fn scroll_down(&mut self) {
        match self.screen {
            AppScreen::Assistant => self.assistant.scroll_down(),
            AppScreen::Dashboard if self.show_report => {
                self.report_scroll = self.report_scroll.saturating_add(1);
            }
            AppScreen::Dashboard => {}
        }
    }

    /// Starts or stops a recognizer session from the microphone key.
    fn toggle_voice(&mut self) {
        if self.speech.is_listening() {
            self.speech.stop_listening();
            // The phase resets when the session's end event lands.
            return;
        }
        if self.assistant.phase != AssistantPhase::Idle {
            return;
        }
        self.speech.cancel_speech();
        match self.speech.start_listening(&self.assistant.language) {
            Ok(()) => self.assistant.begin_listening(),
            Err(e) => self.assistant.on_recognizer_error(&e),
        }
    }

    fn handle_signal(&mut self, signal: AssistantSignal) {
        match signal {
            AssistantSignal::Speech(event) => match event {
                SpeechEvent::Interim(text) => self.assistant.on_interim(text),
                SpeechEvent::Final(text) => {
                    if let Some(transcript) = self.assistant.on_final(text) {
                        self.schedule_voice_submit(transcript);
                    }
                }
                SpeechEvent::Error(detail) => self.assistant.on_recognizer_error(&detail),
                SpeechEvent::Ended => self.assistant.on_recognizer_ended(),
            },
            AssistantSignal::VoiceSubmit(transcript) => {
                if let Some(request) = self.assistant.take_voice_submit(transcript) {
                    self.dispatch_chat(request);
                }
            }
            AssistantSignal::Reply(outcome) => {
                let (spoken, language) = self.assistant.on_reply(outcome);
                if let Err(e) = self.speech.speak(&spoken, &language) {
                    tracing::warn!("speech synthesis unavailable: {e}");
                }
            }
        }
    }

    /// Queues the delayed submit that follows a final transcript.
    fn schedule_voice_submit(&self, transcript: String) {
        let signals = self.signals.clone();
        tokio::spawn(async move {
            tokio::time::sleep(VOICE_CONFIRM_DELAY).await;
            signals.publish(AssistantSignal::VoiceSubmit(transcript));
        });
    }

    /// Fires one chat request; the outcome comes back as a signal.
    fn dispatch_chat(&self, request: ChatRequest) {
        let client = self.chat_client.clone();
        let signals = self.signals.clone();
        tokio::spawn(async move {
            let outcome = match client.send(&request).await {
                Ok(reply) => ChatOutcome::Success {
                    conversation_id: reply.conversation_id,
                    reply: reply.ai_response,
                },
                Err(e) => ChatOutcome::Failure {
                    detail: e.to_string(),
                },
            };
            signals.publish(AssistantSignal::Reply(outcome));
        });
    }
}
