//! Speech synthesis seam
//!
//! Fire-and-forget: the controller never observes completion, and playback
//! errors are logged only.

use std::sync::{Arc, Mutex};

use crate::shared::error::AppResult;

pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str);
}

/// System text-to-speech via the platform speech command, spawned detached.
pub struct SystemSpeech;

impl SystemSpeech {
    #[cfg(target_os = "macos")]
    const SPEECH_COMMAND: &'static str = "say";
    #[cfg(not(target_os = "macos"))]
    const SPEECH_COMMAND: &'static str = "espeak";

    fn spawn_speech(text: &str) -> AppResult<()> {
        let mut command = tokio::process::Command::new(Self::SPEECH_COMMAND);
        command
            .arg(text)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null());
        command.spawn()?;
        Ok(())
    }
}

impl SpeechSynthesizer for SystemSpeech {
    fn speak(&self, text: &str) {
        if let Err(e) = Self::spawn_speech(text) {
            eprintln!("[Speech] Failed to start playback: {}", e);
        }
    }
}

/// Silent implementation for headless hosts.
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn speak(&self, _text: &str) {}
}

/// Records spoken text instead of playing it; used by tests.
#[derive(Default)]
pub struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<String> {
        match self.spoken.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn speak(&self, text: &str) {
        let mut guard = match self.spoken.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_speech_captures_text() {
        let speech = RecordingSpeech::new();
        speech.speak("Hola");
        speech.speak("Bonjour");
        assert_eq!(speech.spoken(), vec!["Hola", "Bonjour"]);
    }
}
