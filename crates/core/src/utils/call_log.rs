//! Call logging wrapper.
//!
//! [`CallLogger::call`] runs a unit of work and appends one timestamped line
//! describing its arguments and outcome:
//!
//! ```text
//! 2024-03-01 12:00:00 add(3, 5) -> ok: 8
//! 2024-03-01 12:00:01 mask_card("123") -> error: card number must contain exactly 16 digits, got 3
//! ```

use chrono::Local;
use log::{debug, warn};
use std::fmt::{Debug, Display};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::settings::Settings;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where call log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Appended to this file, created on first write
    File(PathBuf),
    Stdout,
}

impl LogDestination {
    /// Picks the explicit path, then the configured one, then stdout.
    /// Blank paths are ignored.
    pub fn resolve(explicit: Option<&Path>, settings: &Settings) -> Self {
        explicit
            .filter(|p| !is_blank(p))
            .map(Path::to_path_buf)
            .or_else(|| {
                settings
                    .call_log_path
                    .clone()
                    .filter(|p| !is_blank(p))
            })
            .map(LogDestination::File)
            .unwrap_or(LogDestination::Stdout)
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

#[derive(Debug, Clone)]
pub struct CallLogger {
    destination: LogDestination,
}

impl CallLogger {
    pub fn new(destination: LogDestination) -> Self {
        Self { destination }
    }

    pub fn from_settings(explicit: Option<&Path>, settings: &Settings) -> Self {
        Self::new(LogDestination::resolve(explicit, settings))
    }

    pub fn destination(&self) -> &LogDestination {
        &self.destination
    }

    /// Runs `work`, logs `name(a, b) -> ok: value` or `name(a, b) -> error: e`,
    /// and hands back the work's result untouched. Each argument is rendered
    /// with `Debug`.
    pub fn call<T, E, F>(&self, name: &str, args: &[&dyn Debug], work: F) -> Result<T, E>
    where
        T: Debug,
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        let result = work();
        let outcome = match &result {
            Ok(value) => format!("ok: {:?}", value),
            Err(e) => format!("error: {}", e),
        };
        let args = args
            .iter()
            .map(|arg| format!("{:?}", arg))
            .collect::<Vec<_>>()
            .join(", ");
        self.write_line(&format!(
            "{} {}({}) -> {}",
            Local::now().format(TIMESTAMP_FORMAT),
            name,
            args,
            outcome
        ));
        result
    }

    /// Appends `message` as a line. Write failures are logged and swallowed.
    pub fn write_line(&self, message: &str) {
        debug!("call log: {}", message);
        if let Err(e) = self.append(message) {
            warn!("Cannot write call log to {:?}: {}", self.destination, e);
        }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        match &self.destination {
            LogDestination::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}", message)
            }
            LogDestination::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::{mask_card, MaskError};
    use std::cell::Cell;
    use std::fs;

    fn file_logger(dir: &tempfile::TempDir) -> (CallLogger, PathBuf) {
        let path = dir.path().join("calls.log");
        (CallLogger::new(LogDestination::File(path.clone())), path)
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let settings = Settings {
            call_log_path: Some(PathBuf::from("from_settings.log")),
            ..Settings::default()
        };
        assert_eq!(
            LogDestination::resolve(Some(Path::new("explicit.log")), &settings),
            LogDestination::File(PathBuf::from("explicit.log"))
        );
        assert_eq!(
            LogDestination::resolve(None, &settings),
            LogDestination::File(PathBuf::from("from_settings.log"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_stdout() {
        let settings = Settings::default();
        assert_eq!(LogDestination::resolve(None, &settings), LogDestination::Stdout);
        assert_eq!(
            LogDestination::resolve(Some(Path::new("   ")), &settings),
            LogDestination::Stdout
        );
    }

    #[test]
    fn test_write_line_appends() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);

        logger.write_line("Первая строка");
        logger.write_line("Вторая строка");

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Первая строка", "Вторая строка"]);
    }

    #[test]
    fn test_call_logs_success() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);

        let masked = logger.call("mask_card", &[&"7000792289606361"], || {
            mask_card("7000792289606361")
        });
        assert_eq!(masked.unwrap(), "7000 79** **** 6361");

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains(r#"mask_card("7000792289606361") -> ok: "7000 79** **** 6361""#));
    }

    #[test]
    fn test_call_logs_and_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);

        let result = logger.call("mask_card", &[&"123"], || mask_card("123"));
        assert!(matches!(result, Err(MaskError::InvalidLength { .. })));

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains(r#" mask_card("123") -> error:"#));
        assert!(content.contains("-> error: card number must contain exactly 16 digits, got 3"));
    }

    #[test]
    fn test_call_line_starts_with_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);

        let _ = logger.call("add", &[&3, &5], || Ok::<_, String>(3 + 5));

        let content = fs::read_to_string(path).unwrap();
        let line = content.lines().next().unwrap();
        let (date, rest) = line.split_at(19);
        assert!(chrono::NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, " add(3, 5) -> ok: 8");
    }

    #[test]
    fn test_single_argument_has_no_trailing_comma() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);

        let _ = logger.call("mask_account", &[&"73654108430135874305"], || {
            crate::masks::mask_account("73654108430135874305")
        });
        let _ = logger.call("counter", &[], || Ok::<_, String>(0));

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().map(|l| &l[20..]).collect();
        assert_eq!(
            lines,
            vec![
                r#"mask_account("73654108430135874305") -> ok: "**4305""#,
                "counter() -> ok: 0",
            ]
        );
    }

    #[test]
    fn test_multiple_calls_each_logged() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = file_logger(&dir);
        let counter = Cell::new(0);

        let results: Vec<i32> = (0..3)
            .map(|_| {
                logger
                    .call("counter", &[], || {
                        counter.set(counter.get() + 1);
                        Ok::<_, String>(counter.get())
                    })
                    .unwrap()
            })
            .collect();
        assert_eq!(results, vec![1, 2, 3]);

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().filter(|l| !l.trim().is_empty()).count(), 3);
    }

    #[test]
    fn test_unwritable_destination_does_not_change_result() {
        let dir = tempfile::tempdir().unwrap();
        let logger = CallLogger::new(LogDestination::File(dir.path().join("missing/calls.log")));

        let result = logger.call("add", &[&1, &2], || Ok::<_, String>(3));
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_stdout_destination() {
        let logger = CallLogger::from_settings(None, &Settings::default());
        assert_eq!(logger.destination(), &LogDestination::Stdout);
        assert_eq!(logger.call("noop", &[], || Ok::<_, String>(())), Ok(()));
    }
}
