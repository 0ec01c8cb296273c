//! Console reporting for the one-shot commands and session start/exit.
//!
//! Every line is a coloured status tag, a title, and optional details. Warnings and errors
//! go to stderr so `submit` output on stdout stays pipeable.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Info,
    Warn,
    Error,
    Success,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Info => "INFO",
            Status::Warn => "WARN",
            Status::Error => "ERROR",
            Status::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Status::Info => "\x1b[1;36m",
            Status::Warn => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
            Status::Success => "\x1b[1;32m",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Warn | Status::Error)
    }
}

pub fn format_report(status: Status, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", status.color(), status.tag(), title);
    if !details.is_empty() {
        line.push_str(": ");
        line.push_str(details);
    }
    line
}

pub fn report(status: Status, title: &str, details: &str) {
    let line = format_report(status, title, details);
    if status.is_failure() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// `report!(Error, "Endpoint not saved", "{}", e)`
#[macro_export]
macro_rules! report {
    ($status:ident, $title:expr) => {
        $crate::cli_messages::report($crate::cli_messages::Status::$status, $title, "")
    };
    ($status:ident, $title:expr, $($details:tt)+) => {
        $crate::cli_messages::report(
            $crate::cli_messages::Status::$status,
            $title,
            &format!($($details)+),
        )
    };
}
