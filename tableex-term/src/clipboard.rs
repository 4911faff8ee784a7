//! Clipboard sink for the terminal: a clipboard program when one is
//! installed, an OSC 52 escape sequence otherwise.

use std::io::{self, Write};
use std::process::Stdio;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tableex::{ClipboardError, ClipboardSink};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A clipboard program reading the text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const CANDIDATES: &[ClipCommand] = &[
    ClipCommand {
        program: "wl-copy",
        args: &[],
    },
    ClipCommand {
        program: "pbcopy",
        args: &[],
    },
    ClipCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[derive(Debug, Default)]
pub struct TermClipboard {
    command: Option<ClipCommand>,
}

impl TermClipboard {
    /// Use the first clipboard program found on `PATH`.
    pub fn detect() -> Self {
        let command = CANDIDATES.iter().find(|c| on_path(c.program)).cloned();
        match &command {
            Some(c) => log::info!("[clipboard] using {}", c.program),
            None => log::info!("[clipboard] no clipboard program found, using OSC 52"),
        }
        Self { command }
    }

    /// Always use the OSC 52 fallback.
    pub fn osc52() -> Self {
        Self { command: None }
    }
}

impl ClipboardSink for TermClipboard {
    fn has_async_writer(&self) -> bool {
        self.command.is_some()
    }

    fn write_text_async(&mut self, text: String) {
        let Some(command) = self.command.clone() else {
            return;
        };
        tokio::spawn(async move {
            if let Err(e) = pipe_to(&command, &text).await {
                log::warn!("[clipboard] {} failed: {}", command.program, e);
            }
        });
    }

    fn copy_sync(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

async fn pipe_to(command: &ClipCommand, text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin closes the pipe so the program sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(ClipboardError::WriteFailed(format!(
            "{} exited with {}",
            command.program, status
        )));
    }
    Ok(())
}

fn on_path(program: &str) -> bool {
    std::env::var_os("PATH")
        .is_some_and(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
}
