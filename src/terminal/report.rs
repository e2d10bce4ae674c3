// report.rs - Fabricated scan results
//
// Hosts are fixed. Only the target and the timestamp vary.

use std::fmt::Write;

struct Host {
    ip: &'static str,
    ports: &'static [u16],
}

const HOSTS: [Host; 3] = [
    Host { ip: "192.168.0.2", ports: &[22, 80] },
    Host { ip: "192.168.0.10", ports: &[80] },
    Host { ip: "192.168.0.15", ports: &[22, 443, 3306] },
];

/// Source of the wall-clock stamp embedded in reports (ISO 8601, UTC)
pub trait WallClock {
    fn iso_now(&self) -> String;
}

/// Always reports the same instant
pub struct FixedClock(pub String);

impl WallClock for FixedClock {
    fn iso_now(&self) -> String {
        self.0.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
    pub filename: String,
    pub text: String,
    pub summary: String,
}

impl ScanReport {
    pub fn generate(target: &str, generated_at: &str) -> Self {
        let filename = format!("intelx-scan-{}.txt", file_safe(generated_at));

        let mut text = String::new();
        let _ = writeln!(text, "INTELX Scan Report");
        let _ = writeln!(text, "Target: {target}");
        let _ = writeln!(text, "Generated: {generated_at}");
        let _ = writeln!(text);
        let _ = writeln!(text, "Discovered hosts:");
        for host in &HOSTS {
            let ports: Vec<String> = host.ports.iter().map(u16::to_string).collect();
            let _ = writeln!(text, "- {}  open ports: {}", host.ip, ports.join(","));
        }
        let _ = writeln!(text);
        let _ = write!(text, "Summary: {} hosts found.", HOSTS.len());

        Self {
            filename,
            text,
            summary: format!("{} hosts found", HOSTS.len()),
        }
    }
}

/// Colons and periods become hyphens
fn file_safe(stamp: &str) -> String {
    stamp.chars().map(|c| if c == ':' || c == '.' { '-' } else { c }).collect()
}
