// command.rs - Command vocabulary
//
// First whitespace token picks the command (case-insensitive), the second is
// the scan target. Anything after that is ignored.

pub const DEFAULT_TARGET: &str = "local-network";

pub const HELP: [&str; 6] = [
    "Available commands: help, scan [target], clear, download-report",
    "\nhelp - show this help message",
    "scan [target] - run a quick network scan (simulated)",
    "clear - clear the terminal output",
    "download-report - download the last generated scan report (if any)",
    "\nI will help those who got scammed. If you were scammed, contact support@intelx.example for guidance.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Clear,
    Scan { target: String },
    DownloadReport,
    /// Carries the whole input line for the error message
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let mut parts = input.split_whitespace();
        let Some(name) = parts.next() else {
            return Command::Empty;
        };

        match name.to_lowercase().as_str() {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "scan" => Command::Scan {
                target: parts.next().unwrap_or(DEFAULT_TARGET).to_string(),
            },
            "download-report" | "report" => Command::DownloadReport,
            _ => Command::Unknown(input.to_string()),
        }
    }
}

pub fn unknown_message(input: &str) -> String {
    format!("Unknown command: {input}. Type \"help\" for available commands.")
}
