use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use filemgr_fs::{FileRecord, StoreError};

use crate::commands::{CREATE_USAGE, DELETE_USAGE, INFO_USAGE, READ_USAGE, SERVER_USAGE};

pub const PROMPT: &str = "file-manager> ";

const COMMANDS: &[(&str, &str)] = &[
    (CREATE_USAGE, "Create a new file"),
    (READ_USAGE, "Read file content"),
    (DELETE_USAGE, "Delete a file"),
    ("list", "List all files"),
    (INFO_USAGE, "Get file information"),
    (SERVER_USAGE, "Start HTTP server"),
    ("help", "Show this help"),
    ("exit", "Exit the program"),
];

/// Human-readable console output for the prompt.
///
/// Failures go to `err`, everything else to `out`.
pub struct ConsolePrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
}

impl ConsolePrinter<io::Stdout, io::Stderr> {
    /// Printer on stdout/stderr, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        Self::new(io::stdout(), io::stderr(), io::stdout().is_terminal())
    }
}

impl<W: Write, E: Write> ConsolePrinter<W, E> {
    pub fn new(out: W, err: E, use_color: bool) -> Self {
        Self {
            out,
            err,
            use_color,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== File Management Tool ===")?;
        self.help()?;
        writeln!(self.out)
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Available commands:")?;
        for (usage, what) in COMMANDS {
            writeln!(self.out, "  {:<28} - {}", usage, what)?;
        }
        Ok(())
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }

    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        let mark = self.paint("✓", "32");
        writeln!(self.out, "{mark} {msg}")
    }

    pub fn failure(&mut self, msg: &str) -> io::Result<()> {
        let mark = self.paint("✗", "31");
        writeln!(self.err, "{mark} {msg}")
    }

    /// Report a failed store call. `action` reads like "creating file".
    pub fn store_error(&mut self, action: &str, err: &StoreError) -> io::Result<()> {
        match err {
            StoreError::NotFound { .. } | StoreError::InvalidName { .. } => {
                self.failure(&err.to_string())
            }
            _ => self.failure(&format!("Error {action}: {err}")),
        }
    }

    pub fn file_content(&mut self, name: &str, content: &str) -> io::Result<()> {
        writeln!(self.out, "\n--- Content of '{name}' ---")?;
        writeln!(self.out, "{content}")?;
        writeln!(self.out, "--- End of '{name}' ---\n")
    }

    pub fn file_list(&mut self, records: &[FileRecord]) -> io::Result<()> {
        if records.is_empty() {
            return writeln!(self.out, "No files found in the directory");
        }

        writeln!(self.out, "\n--- Files in directory ---")?;
        for rec in records {
            writeln!(
                self.out,
                "{} ({} bytes, modified: {})",
                rec.name,
                rec.size,
                format_time(rec.modified_at)
            )?;
        }
        writeln!(self.out, "--- End of file list ---\n")
    }

    pub fn file_info(&mut self, rec: &FileRecord) -> io::Result<()> {
        let kind = if rec.is_regular_file {
            "regular file"
        } else {
            "not a regular file"
        };
        let extension = if rec.extension.is_empty() {
            "(none)"
        } else {
            rec.extension.as_str()
        };

        writeln!(self.out, "\n--- File Info for '{}' ---", rec.name)?;
        writeln!(self.out, "name:      {}", rec.name)?;
        writeln!(self.out, "path:      {}", rec.path.display())?;
        writeln!(self.out, "size:      {} bytes", rec.size)?;
        writeln!(self.out, "created:   {}", format_time(rec.created_at))?;
        writeln!(self.out, "modified:  {}", format_time(rec.modified_at))?;
        writeln!(self.out, "accessed:  {}", format_time(rec.accessed_at))?;
        writeln!(self.out, "type:      {}", kind)?;
        writeln!(self.out, "extension: {}", extension)?;
        writeln!(self.out, "--- End of file info ---\n")
    }

    fn paint(&self, text: &str, ansi: &str) -> String {
        if self.use_color {
            format!("\x1b[{ansi}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }
}

fn format_time(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unavailable".to_owned(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
