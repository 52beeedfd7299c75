//! Handing a finished command over to the user.
//!
//! Nothing in here can fail the session: the command has already been
//! generated, so clipboard and notification problems are reported as warnings.

use log::{debug, info, warn};

use crate::config::NOTIFICATION_TITLE;
use crate::error::{Error, Result};
use crate::prompt::{Prompter, Tone};

/// Somewhere a generated command can be copied to.
pub trait ClipboardWriter {
    /// # Errors
    ///
    /// Returns an error if the text could not be written.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Desktop notifications.
pub trait Notifier {
    /// # Errors
    ///
    /// Returns an error if the notification could not be sent.
    fn notify(&mut self, title: &str, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub copy: bool,
    pub silent: bool,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            copy: true,
            silent: false,
        }
    }
}

/// What actually happened during delivery.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub copied: bool,
    pub notified: bool,
}

/// Shows the command, then copies it and sends a notification as requested.
///
/// # Errors
///
/// Returns an error only if reading the confirmation fails for a reason other
/// than closed input.
pub fn deliver(
    command: &str,
    options: &DeliveryOptions,
    prompter: &mut dyn Prompter,
    clipboard: &mut dyn ClipboardWriter,
    notifier: &mut dyn Notifier,
) -> Result<DeliveryReport> {
    let mut report = DeliveryReport::default();

    prompter.show(Tone::Success, &format!("Generated! Command: {command}"));

    if options.copy {
        match prompter.ask_text("Press Enter to copy to clipboard...") {
            Ok(_) => {}
            Err(Error::InputClosed) => {
                debug!("Input closed at the copy confirmation, copying anyway")
            }
            Err(e) => return Err(e),
        }

        match clipboard.write(command) {
            Ok(()) => {
                info!("Copied command to clipboard");
                prompter.show(Tone::Success, "✓ Command copied to clipboard!");
                report.copied = true;
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                prompter.show(
                    Tone::Warning,
                    &format!("✗ Failed to copy command to clipboard ({e})"),
                );
            }
        }
    }

    if !options.silent {
        let message = if report.copied {
            format!("Command copied to clipboard: {command}")
        } else {
            format!("Command generated: {command}")
        };

        match notifier.notify(NOTIFICATION_TITLE, &message) {
            Ok(()) => report.notified = true,
            Err(e) => {
                warn!("Notification failed: {}", e);
                prompter.show(Tone::Warning, &format!("✗ Failed to send notification ({e})"));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write(&mut self, text: &str) -> Result<()> {
            if self.broken {
                return Err(Error::ClipboardUnavailable("xclip".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Vec<(String, String)>,
        broken: bool,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, title: &str, message: &str) -> Result<()> {
            if self.broken {
                return Err(Error::NotifierUnavailable);
            }
            self.sent.push((title.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_copy_and_notify() {
        let mut prompter = ScriptedPrompter::new([""]);
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();

        let report = deliver(
            "/say hi",
            &DeliveryOptions::default(),
            &mut prompter,
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();

        assert_eq!(report, DeliveryReport { copied: true, notified: true });
        assert_eq!(clipboard.contents.as_deref(), Some("/say hi"));
        assert_eq!(notifier.sent[0].0, "mccmd");
        assert_eq!(
            prompter.messages(Tone::Success),
            vec!["Generated! Command: /say hi", "✓ Command copied to clipboard!"]
        );
        assert_eq!(prompter.questions(), ["Press Enter to copy to clipboard..."]);
    }

    #[test]
    fn test_no_copy_and_silent() {
        let mut prompter = ScriptedPrompter::default();
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();
        let options = DeliveryOptions { copy: false, silent: true };

        let report =
            deliver("/say hi", &options, &mut prompter, &mut clipboard, &mut notifier).unwrap();

        assert_eq!(report, DeliveryReport::default());
        assert!(clipboard.contents.is_none());
        assert!(notifier.sent.is_empty());
        assert!(prompter.questions().is_empty());
    }

    #[test]
    fn test_failures_are_warnings() {
        let mut prompter = ScriptedPrompter::new([""]);
        let mut clipboard = RecordingClipboard { broken: true, ..Default::default() };
        let mut notifier = RecordingNotifier { broken: true, ..Default::default() };

        let report = deliver(
            "/say hi",
            &DeliveryOptions::default(),
            &mut prompter,
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();

        assert_eq!(report, DeliveryReport::default());
        let warnings = prompter.messages(Tone::Warning);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("✗ Failed to copy command to clipboard"));
    }

    #[test]
    fn test_closed_input_still_copies() {
        let mut prompter = ScriptedPrompter::default();
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();
        let options = DeliveryOptions { copy: true, silent: true };

        let report =
            deliver("/say hi", &options, &mut prompter, &mut clipboard, &mut notifier).unwrap();
        assert!(report.copied);
    }
}
