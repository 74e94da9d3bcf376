use anyhow::Result;
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;

pub const DAEMON_FLAG: &str = "__clipboard_daemon";

/// Destination for the serialized selection. The real sink is
/// [`SystemClipboard`]; tests capture the payload instead.
pub trait ClipboardSink {
    fn write(&mut self, text: String) -> Result<()>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: String) -> Result<()> {
        copy_text_to_clipboard(text)
    }
}

#[cfg(target_os = "linux")]
fn run_daemon_mode() -> Result<()> {
    let text = std::io::read_to_string(std::io::stdin())?;

    let mut clipboard = Clipboard::new()?;
    match clipboard.set().wait().text(text) {
        Ok(_waiter) => {
            // On X11/Wayland the selection dies with the owning process, so
            // this forked child has to outlive the TUI. Park forever; the
            // display server side replaces the selection eventually.
            std::thread::park();
            unreachable!("daemon parks indefinitely");
        }
        Err(e) => Err(anyhow::Error::from(e)),
    }
}

/// Checks the process args for [`DAEMON_FLAG`]; if present, serves the
/// clipboard until replaced. Returns Ok(true) when daemon mode handled the
/// process, Ok(false) when normal startup should continue.
pub fn check_and_run_daemon_if_requested() -> Result<bool> {
    if std::env::args().any(|a| a == DAEMON_FLAG) {
        #[cfg(target_os = "linux")]
        {
            run_daemon_mode()?;
            return Ok(true);
        }
        #[cfg(not(target_os = "linux"))]
        {
            eprintln!(
                "Warning: {} flag used on non-Linux system. Ignoring.",
                DAEMON_FLAG
            );
            std::process::exit(0);
        }
    }
    Ok(false)
}

fn copy_text_to_clipboard(text: String) -> Result<()> {
    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
    }

    #[cfg(target_os = "linux")]
    {
        use std::io::Write;
        use std::process::{Command, Stdio};

        // Re-exec ourselves as a detached daemon that owns the selection;
        // the payload travels over its stdin.
        let mut child = Command::new(std::env::current_exe()?)
            .arg(DAEMON_FLAG)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .current_dir("/")
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
            stdin.flush()?;
        } else {
            return Err(anyhow::anyhow!("Failed to get stdin for clipboard daemon"));
        }
    }
    Ok(())
}
