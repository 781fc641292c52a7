#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl LogLevel {
    fn stream(&self) -> Stream {
        match self {
            LogLevel::Error => Stream::Stderr,
            LogLevel::Debug => Stream::Stdout,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// A logger that also prints `Debug` messages.
    pub fn verbose(verbose: bool) -> Self {
        Logger { verbose }
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        if level == LogLevel::Debug && !self.verbose {
            return;
        }
        let stream = level.stream();
        let line = format!(
            "{} {} {}",
            self.language_signature(stream),
            self.format_status(level, stream),
            message
        );
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }

    fn use_color(stream: Stream) -> bool {
        if cfg!(not(feature = "cli")) || std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[cfg(feature = "cli")]
    fn language_signature(&self, stream: Stream) -> String {
        if !Self::use_color(stream) {
            return "[plugin-bump]".to_string();
        }

        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("plugin-bump");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }

    #[cfg(not(feature = "cli"))]
    fn language_signature(&self, _stream: Stream) -> String {
        "[plugin-bump]".to_string()
    }

    fn status_label(level: LogLevel) -> &'static str {
        match level {
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel, stream: Stream) -> String {
        let status = Self::status_label(level);
        if !Self::use_color(stream) {
            return format!("[{}]", status);
        }

        let color = match level {
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Debug => Color::Rgb {
                r: 103,
                g: 58,
                b: 183,
            },
        };

        let mut s = String::new();
        s.push('[');
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str(status);
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel, _stream: Stream) -> String {
        format!("[{}]", Self::status_label(level))
    }
}
