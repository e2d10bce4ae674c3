// args.rs - Command-line flags

pub struct Args {
    pub seed: u32,
    /// Virtual milliseconds to simulate
    pub duration: f64,
    /// Virtual milliseconds per frame
    pub step: f64,
    /// Gap between scripted commands
    pub gap: f64,
    pub show_live: bool,
    pub save: bool,
    pub commands: Vec<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: 0xDEADBEEF,
            duration: 20_000.0,
            step: 16.0,
            gap: 3000.0,
            show_live: false,
            save: false,
            commands: Vec::new(),
        }
    }
}

pub const USAGE: &str = "\
Usage: intelx-replay [--seed N] [--duration MS] [--step MS] [--gap MS] [--live] [--save] [COMMAND]...

Runs the terminal headlessly on a virtual clock and prints every committed
line. Each COMMAND is submitted GAP ms after the previous one, e.g.

    intelx-replay 'scan target-x' download-report";

pub fn parse(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "--seed" => { args.seed = value(raw, i)?; i += 2; }
            "--duration" => { args.duration = value(raw, i)?; i += 2; }
            "--step" => { args.step = value(raw, i)?; i += 2; }
            "--gap" => { args.gap = value(raw, i)?; i += 2; }
            "--live" => { args.show_live = true; i += 1; }
            "--save" => { args.save = true; i += 1; }
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}\n\n{USAGE}")),
            cmd => { args.commands.push(cmd.to_string()); i += 1; }
        }
    }
    if args.step <= 0.0 {
        return Err("--step must be positive".into());
    }
    Ok(args)
}

fn value<T: std::str::FromStr>(raw: &[String], i: usize) -> Result<T, String> {
    let flag = &raw[i];
    raw.get(i + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?
        .parse()
        .map_err(|_| format!("bad value for {flag}"))
}
