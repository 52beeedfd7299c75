use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::delivery::{ClipboardWriter, Notifier};
use crate::error::{Error, Result};

struct ClipboardTool<'a> {
    program: &'a str,
    args: &'a [&'a str],
}

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[ClipboardTool<'static>] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(windows)]
const CLIPBOARD_TOOLS: &[ClipboardTool<'static>] = &[ClipboardTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", windows)))]
const CLIPBOARD_TOOLS: &[ClipboardTool<'static>] = &[
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Pipes `text` into the command's stdin and waits for it to exit.
///
/// The child is always reaped, even when writing to it fails.
fn pipe_into(mut command: Command, text: &str) -> std::io::Result<bool> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped before waiting so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;

    match written {
        Ok(()) => Ok(status.success()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e),
    }
}

/// Tries each tool in order until one of them accepts `text`.
fn copy_with(tools: &[ClipboardTool<'_>], text: &str) -> Result<()> {
    let mut failed = Vec::new();

    for tool in tools {
        let mut command = Command::new(tool.program);
        command.args(tool.args);

        match pipe_into(command, text) {
            Ok(true) => {
                info!("Copied with `{}`", tool.program);
                return Ok(());
            }
            Ok(false) => {
                warn!("Clipboard tool `{}` failed, trying the next one", tool.program);
                failed.push(tool.program);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Clipboard tool `{}` not found", tool.program);
            }
            Err(e) => {
                warn!("Clipboard tool `{}` could not run: {}", tool.program, e);
                failed.push(tool.program);
            }
        }
    }

    if failed.is_empty() {
        Err(Error::ClipboardUnavailable(tools.iter().map(|tool| tool.program).join(", ")))
    } else {
        Err(Error::ClipboardFailed(failed.iter().join(", ")))
    }
}

/// Copies through the first platform clipboard tool on the `PATH` that succeeds.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        copy_with(CLIPBOARD_TOOLS, text)
    }
}

/// Sends notifications through `osascript` on macOS and `notify-send` elsewhere.
#[derive(Debug, Default)]
pub struct SystemNotifier;

impl SystemNotifier {
    #[cfg(target_os = "macos")]
    fn command(title: &str, message: &str) -> Result<Command> {
        let script = format!(
            "display notification {} with title {}",
            serde_json::to_string(message)?,
            serde_json::to_string(title)?
        );
        let mut command = Command::new("osascript");
        command.args(["-e", script.as_str()]);
        Ok(command)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(title: &str, message: &str) -> Result<Command> {
        let mut command = Command::new("notify-send");
        command.args([title, message]);
        Ok(command)
    }

    #[cfg(not(unix))]
    fn command(_title: &str, _message: &str) -> Result<Command> {
        Err(Error::NotifierUnavailable)
    }
}

impl Notifier for SystemNotifier {
    fn notify(&mut self, title: &str, message: &str) -> Result<()> {
        let mut command = Self::command(title, message)?;
        let program = command.get_program().to_string_lossy().into_owned();

        let status = match command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NotifierUnavailable),
            Err(e) => return Err(Error::Stdio(e)),
        };

        if status.success() {
            debug!("Notification sent with `{}`", program);
            Ok(())
        } else {
            Err(Error::NotifyFailed(program))
        }
    }
}
