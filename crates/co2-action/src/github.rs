//! GitHub Actions host boundary: named outputs and workflow commands.
//!
//! Everything here is a thin wrapper over environment variables and
//! stdout; the rest of the workspace never talks to the runner
//! directly.

use std::fs::OpenOptions;
use std::io::Write as _;

use tracing::warn;

/// Publish a named output.
///
/// Appends `name=value` to the file named by `$GITHUB_OUTPUT`; when
/// that variable is unset (local runs) the pair goes to stdout so the
/// value is still observable.
pub fn set_output(name: &str, value: &str) {
    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let appended = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| writeln!(file, "{name}={value}"));
        if let Err(error) = appended {
            warn!("could not write to GITHUB_OUTPUT at {path}: {error}");
        }
    } else {
        println!("{name}={value}");
    }
}

/// Emit a `::warning::` workflow command (annotated in the runner UI).
pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an `::error::` workflow command.
pub fn error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Escape message data per the workflow-command rules.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_escaping_covers_percent_and_newlines() {
        assert_eq!(escape_data("plain"), "plain");
        assert_eq!(escape_data("50% done\nnext"), "50%25 done%0Anext");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }
}
