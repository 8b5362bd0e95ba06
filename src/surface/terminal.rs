/*!
 * Terminal implementations of the surface collaborators.
 *
 * Used by the CLI binary: notices go through the logger, the clipboard is
 * backed by the platform clipboard utility with a stdout fallback, and
 * speech shells out to the platform speech command.
 */

use std::io::Write;
use std::process::{Command, Stdio};

use log::{error, info, warn};

use crate::errors::CapabilityError;
use crate::speech::SpeechRequest;
use crate::surface::{Clipboard, NoticeKind, NoticeSink, SpeechSynthesizer, ToastNotice};

/// Notice sink that renders through the logger
#[derive(Debug, Default)]
pub struct TerminalNotices;

impl NoticeSink for TerminalNotices {
    fn notify(&self, notice: ToastNotice) {
        match notice.kind {
            NoticeKind::Info => info!("{}", notice.message),
            NoticeKind::Success => info!("{}", notice.message),
            NoticeKind::Error => warn!("{}", notice.message),
        }
    }
}

/// Candidate clipboard commands, tried in order
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("pbcopy", &[]),
];

/// Clipboard backed by the platform clipboard utility
#[derive(Debug, Default)]
pub struct CommandClipboard;

impl CommandClipboard {
    fn pipe_to(command: &str, args: &[&str], text: &str) -> Result<(), CapabilityError> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CapabilityError::Failed(format!("{}: {}", command, e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CapabilityError::Failed(format!("{}: {}", command, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| CapabilityError::Failed(format!("{}: {}", command, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(CapabilityError::Failed(format!(
                "{} exited with {}",
                command, status
            )))
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write(&self, text: &str) -> Result<(), CapabilityError> {
        let mut last_error = None;
        for (command, args) in CLIPBOARD_COMMANDS {
            match Self::pipe_to(command, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error
            .unwrap_or_else(|| CapabilityError::Unsupported("Clipboard".to_string())))
    }

    /// Legacy path: print the text so the user can select it manually
    fn write_fallback(&self, text: &str) -> Result<(), CapabilityError> {
        println!("{}", text);
        Ok(())
    }
}

/// Candidate speech commands; text is passed as the final argument
const SPEECH_COMMANDS: &[&str] = &["espeak", "say"];

/// Speech synthesis backed by the platform speech command
#[derive(Debug, Default)]
pub struct CommandSpeech;

impl CommandSpeech {
    fn locate(&self) -> Option<&'static str> {
        SPEECH_COMMANDS.iter().copied().find(|command| {
            Command::new(command)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok()
        })
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn is_available(&self) -> bool {
        self.locate().is_some()
    }

    fn speak(&self, request: &SpeechRequest) -> Result<(), CapabilityError> {
        let command = self
            .locate()
            .ok_or_else(|| CapabilityError::Unsupported("Speech synthesis".to_string()))?;

        // Locale, rate, pitch and volume are tuned for the speech API; the
        // terminal commands only take a voice hint, so pass the locale where
        // the command supports one.
        let status = match command {
            "espeak" => Command::new(command)
                .arg("-v")
                .arg(request.locale.to_lowercase())
                .arg(&request.text)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status(),
            _ => Command::new(command)
                .arg(&request.text)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status(),
        }
        .map_err(|e| CapabilityError::Failed(format!("{}: {}", command, e)))?;

        if status.success() {
            Ok(())
        } else {
            let message = format!("{} exited with {}", command, status);
            error!("Speech playback failed: {}", message);
            Err(CapabilityError::Failed(message))
        }
    }
}
