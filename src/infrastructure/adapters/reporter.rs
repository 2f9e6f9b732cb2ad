//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 상태 색상을 켠다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }

    fn decorate(&self, message: &str) -> String {
        if self.interactive {
            colorize_status(message)
        } else {
            message.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<8}] {}", scope, self.decorate(message));
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

fn colorize_status(message: &str) -> String {
    if message.ends_with("posted") {
        format!("\x1b[32m{message}\x1b[0m")
    } else if message.starts_with("fetching")
        || message.starts_with("requesting")
        || message.starts_with("posting")
    {
        format!("\x1b[33m{message}\x1b[0m")
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_status_is_green() {
        assert_eq!(colorize_status("review posted"), "\x1b[32mreview posted\x1b[0m");
    }

    #[test]
    fn in_progress_status_is_yellow() {
        assert_eq!(
            colorize_status("requesting review"),
            "\x1b[33mrequesting review\x1b[0m"
        );
    }

    #[test]
    fn non_interactive_output_is_plain() {
        let reporter = ConsoleReporter { interactive: false };
        assert_eq!(reporter.decorate("review posted"), "review posted");
    }
}
