//! # Voice Commands
//!
//! Two independent pieces:
//!
//! - [`interpret`] maps a transcript to a [`VoiceCommand`] using an ordered rule
//!   table. The first rule whose prefix matches wins; nothing matching falls
//!   through to [`VoiceCommand::Unrecognized`].
//! - [`VoiceSession`] tracks the idle/listening state of a [`SpeechRecognizer`]
//!   and the transient status line shown to the user.
//!
//! Applying a command to the list is the command layer's job (`commands::voice`).

use crate::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;
use std::time::{Duration, Instant};

pub const LISTENING_PROMPT: &str = "Listening... say \"add [item]\" or \"remove [item]\"";
pub const PERMISSION_DENIED: &str = "Microphone access denied";
pub const NOT_SUPPORTED: &str =
    "Voice recognition is not supported here. Enable it with `goblin config voice true`.";

/// How long command feedback stays visible.
pub const FEEDBACK_LIFETIME: Duration = Duration::from_secs(2);
/// Unrecognized transcripts get a little longer, since the hint is longer.
pub const HINT_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCommand {
    Add(String),
    Remove(String),
    Unrecognized(String),
}

struct Rule {
    prefixes: &'static [&'static str],
    build: fn(String) -> VoiceCommand,
}

// "at" and "had" are what recognizers commonly hear for a clipped "add".
const RULES: &[Rule] = &[
    Rule {
        prefixes: &["add", "at", "had"],
        build: VoiceCommand::Add,
    },
    Rule {
        prefixes: &["remove", "delete"],
        build: VoiceCommand::Remove,
    },
];

/// Interprets a transcript. Matching is done on the lowercased, trimmed text.
pub fn interpret(transcript: &str) -> VoiceCommand {
    let heard = transcript.trim().to_lowercase();
    for rule in RULES {
        for prefix in rule.prefixes {
            if let Some(rest) = command_argument(&heard, prefix) {
                return (rule.build)(rest.to_string());
            }
        }
    }
    VoiceCommand::Unrecognized(heard)
}

/// `"<word> <argument>"` → `argument`. The word must be followed by whitespace
/// and a non-empty argument.
fn command_argument<'a>(heard: &'a str, word: &str) -> Option<&'a str> {
    let rest = heard.strip_prefix(word)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    (!rest.is_empty()).then_some(rest)
}

/// What applying a [`VoiceCommand`] did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutcome {
    Added(String),
    Removed(String),
    NotFound(String),
    Unrecognized(String),
}

impl VoiceOutcome {
    pub fn status_text(&self) -> String {
        match self {
            VoiceOutcome::Added(text) => format!("Added: {}", text),
            VoiceOutcome::Removed(text) => format!("Removed: {}", text),
            VoiceOutcome::NotFound(text) => format!("Couldn't find: {}", text),
            VoiceOutcome::Unrecognized(heard) => format!(
                "Heard: \"{}\" - try \"add [item]\" or \"remove [item]\"",
                heard
            ),
        }
    }

    pub fn lifetime(&self) -> Duration {
        match self {
            VoiceOutcome::Unrecognized(_) => HINT_LIFETIME,
            _ => FEEDBACK_LIFETIME,
        }
    }
}

/// A status message that may clear itself after a while.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    shown_at: Instant,
    lifetime: Option<Duration>,
}

impl Status {
    pub fn sticky(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            shown_at: now,
            lifetime: None,
        }
    }

    pub fn transient(text: impl Into<String>, now: Instant, lifetime: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: now,
            lifetime: Some(lifetime),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.lifetime
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    Started,
    Transcript(String),
    PermissionDenied,
    Failed(String),
    Ended,
}

/// A speech-to-text service producing one final transcript per session.
pub trait SpeechRecognizer {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self);
    /// Next pending event, or `None` when nothing more will arrive.
    fn poll(&mut self) -> Option<RecognizerEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

/// Drives at most one recognition session at a time.
pub struct VoiceSession<R: SpeechRecognizer> {
    recognizer: Option<R>,
    state: SessionState,
    status: Option<Status>,
}

impl<R: SpeechRecognizer> VoiceSession<R> {
    /// `None` means no recognizer is available; every other feature keeps working.
    pub fn new(recognizer: Option<R>) -> Self {
        Self {
            recognizer,
            state: SessionState::Idle,
            status: None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Starts listening, or stops if a session is already running.
    pub fn toggle(&mut self, now: Instant) -> Result<()> {
        let Some(recognizer) = self.recognizer.as_mut() else {
            self.status = Some(Status::sticky(NOT_SUPPORTED, now));
            return Ok(());
        };
        match self.state {
            SessionState::Listening => recognizer.stop(),
            SessionState::Idle => recognizer.start()?,
        }
        Ok(())
    }

    pub fn poll(&mut self) -> Option<RecognizerEvent> {
        self.recognizer.as_mut()?.poll()
    }

    /// Applies a recognizer event. Returns the transcript when one arrives.
    pub fn handle(&mut self, event: RecognizerEvent, now: Instant) -> Option<String> {
        match event {
            RecognizerEvent::Started => {
                self.state = SessionState::Listening;
                self.status = Some(Status::sticky(LISTENING_PROMPT, now));
                None
            }
            RecognizerEvent::Transcript(text) => Some(text.trim().to_lowercase()),
            RecognizerEvent::PermissionDenied => {
                self.state = SessionState::Idle;
                self.status = Some(Status::sticky(PERMISSION_DENIED, now));
                None
            }
            RecognizerEvent::Failed(reason) => {
                tracing::debug!(%reason, "speech recognition failed");
                self.state = SessionState::Idle;
                self.status = None;
                None
            }
            RecognizerEvent::Ended => {
                self.state = SessionState::Idle;
                // Command feedback outlives the session; only the prompt goes away.
                if self
                    .status
                    .as_ref()
                    .is_some_and(|status| status.text == LISTENING_PROMPT)
                {
                    self.status = None;
                }
                None
            }
        }
    }

    pub fn report(&mut self, outcome: &VoiceOutcome, now: Instant) {
        self.status = Some(Status::transient(
            outcome.status_text(),
            now,
            outcome.lifetime(),
        ));
    }

    /// The visible status, dropping it first if it has expired.
    pub fn status(&mut self, now: Instant) -> Option<&Status> {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
        self.status.as_ref()
    }
}

/// Treats each line of a reader as one spoken phrase.
///
/// This is how the terminal client "listens": the user (or a dictation tool
/// piping into stdin) supplies the transcript.
pub struct LineRecognizer<B: BufRead> {
    reader: B,
    pending: VecDeque<RecognizerEvent>,
    active: bool,
}

impl<B: BufRead> LineRecognizer<B> {
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            active: false,
        }
    }
}

impl<B: BufRead> SpeechRecognizer for LineRecognizer<B> {
    fn start(&mut self) -> Result<()> {
        self.active = true;
        self.pending.push_back(RecognizerEvent::Started);
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.pending.push_back(RecognizerEvent::Ended);
        }
    }

    fn poll(&mut self) -> Option<RecognizerEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if !self.active {
            return None;
        }
        self.active = false;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Some(RecognizerEvent::Ended),
            Ok(_) => {
                self.pending.push_back(RecognizerEvent::Ended);
                Some(RecognizerEvent::Transcript(line.trim().to_lowercase()))
            }
            Err(err) => {
                self.pending.push_back(RecognizerEvent::Ended);
                Some(RecognizerEvent::Failed(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn add_and_its_misrecognitions() {
        assert_eq!(interpret("add bread"), VoiceCommand::Add("bread".into()));
        assert_eq!(interpret("at bread"), VoiceCommand::Add("bread".into()));
        assert_eq!(interpret("had bread"), VoiceCommand::Add("bread".into()));
        assert_eq!(
            interpret("Add  Peanut Butter "),
            VoiceCommand::Add("peanut butter".into())
        );
    }

    #[test]
    fn remove_and_delete() {
        assert_eq!(interpret("remove milk"), VoiceCommand::Remove("milk".into()));
        assert_eq!(interpret("delete milk"), VoiceCommand::Remove("milk".into()));
    }

    #[test]
    fn prefix_must_be_a_whole_word() {
        assert_eq!(
            interpret("attach bread"),
            VoiceCommand::Unrecognized("attach bread".into())
        );
        assert_eq!(
            interpret("additional"),
            VoiceCommand::Unrecognized("additional".into())
        );
    }

    #[test]
    fn bare_command_word_is_unrecognized() {
        assert_eq!(interpret("add"), VoiceCommand::Unrecognized("add".into()));
        assert_eq!(
            interpret("remove "),
            VoiceCommand::Unrecognized("remove".into())
        );
    }

    #[test]
    fn unrecognized_keeps_the_transcript() {
        assert_eq!(
            interpret("hello goblin"),
            VoiceCommand::Unrecognized("hello goblin".into())
        );
    }

    #[test]
    fn outcome_texts_and_lifetimes() {
        let added = VoiceOutcome::Added("bread".into());
        assert_eq!(added.status_text(), "Added: bread");
        assert_eq!(added.lifetime(), FEEDBACK_LIFETIME);

        let heard = VoiceOutcome::Unrecognized("hi".into());
        assert_eq!(
            heard.status_text(),
            "Heard: \"hi\" - try \"add [item]\" or \"remove [item]\""
        );
        assert_eq!(heard.lifetime(), HINT_LIFETIME);

        assert_eq!(
            VoiceOutcome::NotFound("kale".into()).status_text(),
            "Couldn't find: kale"
        );
    }

    #[test]
    fn transient_status_expires() {
        let now = Instant::now();
        let status = Status::transient("Added: x", now, FEEDBACK_LIFETIME);
        assert!(!status.is_expired(now + Duration::from_millis(1999)));
        assert!(status.is_expired(now + FEEDBACK_LIFETIME));

        let sticky = Status::sticky(LISTENING_PROMPT, now);
        assert!(!sticky.is_expired(now + Duration::from_secs(3600)));
    }

    struct Scripted {
        events: VecDeque<RecognizerEvent>,
        starts: usize,
        stops: usize,
    }

    impl Scripted {
        fn new(events: Vec<RecognizerEvent>) -> Self {
            Self {
                events: events.into(),
                starts: 0,
                stops: 0,
            }
        }
    }

    impl SpeechRecognizer for Scripted {
        fn start(&mut self) -> Result<()> {
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }

        fn poll(&mut self) -> Option<RecognizerEvent> {
            self.events.pop_front()
        }
    }

    #[test]
    fn missing_recognizer_reports_unsupported() {
        let now = Instant::now();
        let mut session: VoiceSession<Scripted> = VoiceSession::new(None);
        assert!(!session.is_supported());
        session.toggle(now).unwrap();
        assert_eq!(session.status(now).unwrap().text, NOT_SUPPORTED);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn toggle_while_listening_stops() {
        let now = Instant::now();
        let mut session = VoiceSession::new(Some(Scripted::new(vec![])));
        session.toggle(now).unwrap();
        session.handle(RecognizerEvent::Started, now);
        assert_eq!(session.state(), SessionState::Listening);

        session.toggle(now).unwrap();
        let recognizer = session.recognizer.as_ref().unwrap();
        assert_eq!(recognizer.starts, 1);
        assert_eq!(recognizer.stops, 1);
    }

    #[test]
    fn full_session_flow() {
        let now = Instant::now();
        let mut session = VoiceSession::new(Some(Scripted::new(vec![
            RecognizerEvent::Started,
            RecognizerEvent::Transcript("  Add Bread ".into()),
            RecognizerEvent::Ended,
        ])));
        session.toggle(now).unwrap();

        let first = session.poll().unwrap();
        assert_eq!(session.handle(first, now), None);
        assert_eq!(session.status(now).unwrap().text, LISTENING_PROMPT);

        let second = session.poll().unwrap();
        assert_eq!(session.handle(second, now), Some("add bread".to_string()));
        session.report(&VoiceOutcome::Added("bread".into()), now);

        let third = session.poll().unwrap();
        session.handle(third, now);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.status(now).unwrap().text, "Added: bread");
        assert!(session.status(now + FEEDBACK_LIFETIME).is_none());
    }

    #[test]
    fn permission_denied_is_distinct_from_failure() {
        let now = Instant::now();
        let mut session = VoiceSession::new(Some(Scripted::new(vec![])));
        session.handle(RecognizerEvent::Started, now);
        session.handle(RecognizerEvent::PermissionDenied, now);
        assert_eq!(session.status(now).unwrap().text, PERMISSION_DENIED);

        session.handle(RecognizerEvent::Started, now);
        session.handle(RecognizerEvent::Failed("network".into()), now);
        assert!(session.status(now).is_none());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn line_recognizer_yields_one_transcript_per_session() {
        let mut recognizer = LineRecognizer::new(Cursor::new("Remove Milk\nadd eggs\n"));
        assert_eq!(recognizer.poll(), None);

        recognizer.start().unwrap();
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Started));
        assert_eq!(
            recognizer.poll(),
            Some(RecognizerEvent::Transcript("remove milk".into()))
        );
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Ended));
        assert_eq!(recognizer.poll(), None);
    }

    #[test]
    fn line_recognizer_ends_on_eof() {
        let mut recognizer = LineRecognizer::new(Cursor::new(""));
        recognizer.start().unwrap();
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Started));
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Ended));
        assert_eq!(recognizer.poll(), None);
    }

    #[test]
    fn line_recognizer_stop_before_reading() {
        let mut recognizer = LineRecognizer::new(Cursor::new("add eggs\n"));
        recognizer.start().unwrap();
        recognizer.stop();
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Started));
        assert_eq!(recognizer.poll(), Some(RecognizerEvent::Ended));
        assert_eq!(recognizer.poll(), None);
    }
}
