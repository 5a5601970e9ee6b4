//! Session controller
//!
//! The state machine tying user intent to the request builder, translation
//! client, history and side effects. State lives behind mutexes so editing
//! and language selection stay possible while a request is in flight; the
//! only await point is the remote call, taken without holding any lock.
//!
//! There is no cancellation and no timeout: once issued, a translate action
//! runs to completion, and a hung remote call leaves the session loading.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::time::Duration;

use crate::core::catalog;
use crate::core::client::Translator;
use crate::core::history::TranslationHistory;
use crate::core::request;
use crate::effects::clipboard::Clipboard;
use crate::effects::speech::SpeechSynthesizer;
use crate::shared::types::{HistoryEntry, SessionState, TranslationOutcome, MAX_INPUT_CHARS};

/// How long the copy confirmation stays raised.
pub const COPY_FLAG_WINDOW: Duration = Duration::from_secs(2);

pub struct SessionController {
    state: Mutex<SessionState>,
    history: Mutex<TranslationHistory>,
    client: Arc<dyn Translator>,
    clipboard: Arc<dyn Clipboard>,
    speech: Arc<dyn SpeechSynthesizer>,
    copy_success: Arc<AtomicBool>,
    // Bumped on every copy so a stale reversion timer can tell it has been
    // superseded and must not touch the flag.
    copy_generation: Arc<AtomicU64>,
}

impl SessionController {
    pub fn new(
        default_target_lang: String,
        client: Arc<dyn Translator>,
        clipboard: Arc<dyn Clipboard>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::new(default_target_lang)),
            history: Mutex::new(TranslationHistory::new()),
            client,
            clipboard,
            speech,
            copy_success: Arc::new(AtomicBool::new(false)),
            copy_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("[Session] State mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }

    fn lock_history(&self) -> MutexGuard<'_, TranslationHistory> {
        match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("[Session] History mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }

    /// Update the input text. Legal in any state; never triggers a
    /// translation. Truncates at the UI input limit.
    pub fn set_input(&self, text: &str) {
        let mut state = self.lock_state();
        if text.chars().count() > MAX_INPUT_CHARS {
            state.input_text = text.chars().take(MAX_INPUT_CHARS).collect();
        } else {
            state.input_text = text.to_string();
        }
    }

    /// Select the target language. Legal in any state; an in-flight request
    /// keeps the code captured when it started.
    pub fn select_language(&self, code: &str) {
        self.lock_state().target_lang = code.to_string();
    }

    /// Run one translate cycle: Idle -> Translating -> Idle.
    ///
    /// A no-op while a request is in flight or when the input is empty;
    /// empty input disables the action rather than erroring.
    pub async fn translate(&self) {
        let request = {
            let mut state = self.lock_state();
            if state.is_loading {
                println!("[Session] Translate ignored: a request is already in flight");
                return;
            }
            if state.input_text.is_empty() {
                return;
            }
            let request = match request::build(&state.input_text, &state.target_lang) {
                Ok(request) => request,
                Err(e) => {
                    // Unreachable through a well-behaved host; guard anyway.
                    eprintln!("[Session] Rejected translate request: {}", e);
                    return;
                }
            };
            state.is_loading = true;
            request
        };

        println!(
            "[Session] Translating {} chars to '{}'",
            request.text.chars().count(),
            request.target_lang
        );

        let outcome = self.client.translate(&request).await;

        let mut state = self.lock_state();
        match outcome {
            TranslationOutcome::Success { translated_text } => {
                state.output_text = translated_text.clone();
                state.last_action_succeeded = true;
                let entry = HistoryEntry::new(
                    request.text,
                    translated_text,
                    catalog::display_name(&request.target_lang),
                );
                self.lock_history().push(entry);
            }
            TranslationOutcome::Failure { message } => {
                println!("[Session] Translation failed");
                state.output_text = message;
                state.last_action_succeeded = false;
            }
        }
        state.is_loading = false;
    }

    /// Reset input and output. Target language and history are untouched.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.input_text.clear();
        state.output_text.clear();
    }

    /// Copy the current output to the clipboard and raise the confirmation
    /// flag for [`COPY_FLAG_WINDOW`]. A no-op when the output is empty.
    pub fn copy_output(&self) {
        let output = self.lock_state().output_text.clone();
        if output.is_empty() {
            return;
        }

        // The clipboard is modeled as always succeeding; a write error is an
        // operator concern, not session state.
        if let Err(e) = self.clipboard.write_text(&output) {
            eprintln!("[Session] Clipboard write failed: {}", e);
        }

        self.copy_success.store(true, Ordering::SeqCst);
        let generation = self.copy_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let flag = Arc::clone(&self.copy_success);
        let generations = Arc::clone(&self.copy_generation);
        tokio::spawn(async move {
            tokio::time::sleep(COPY_FLAG_WINDOW).await;
            // A newer copy supersedes this timer.
            if generations.load(Ordering::SeqCst) == generation {
                flag.store(false, Ordering::SeqCst);
            }
        });
    }

    /// Submit the current output to speech synthesis, fire-and-forget.
    /// A no-op when the output is empty.
    pub fn speak_output(&self) {
        let output = self.lock_state().output_text.clone();
        if output.is_empty() {
            return;
        }
        self.speech.speak(&output);
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// Snapshot of the history, most recent first.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.lock_history().entries().to_vec()
    }

    pub fn copy_success(&self) -> bool {
        self.copy_success.load(Ordering::SeqCst)
    }
}
