// intelx-replay - Drive the fake terminal without a browser
//
// Steps a virtual clock frame by frame, submits the given commands one gap
// apart and prints each committed line with its timestamp. `--save` writes
// offered reports to the working directory instead of a browser download.
//
// Usage: cargo run --bin intelx-replay -- [flags] [COMMAND]...

#[cfg(not(target_arch = "wasm32"))]
mod args;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use intelx_fx::terminal::{Effect, Entry, Key, Terminal, WallClock};
    use intelx_fx::FxConfig;
    use tracing_subscriber::EnvFilter;

    struct SystemClock;

    impl WallClock for SystemClock {
        fn iso_now(&self) -> String {
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match args::parse(&raw) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let mut term = Terminal::new(&FxConfig::default(), args.seed, Box::new(SystemClock));
    term.start(0.0);

    let mut queue = args.commands.iter();
    let mut next_cmd = args.gap;
    let mut now = 0.0;

    loop {
        for effect in term.drain_effects() {
            match effect {
                Effect::Append(Entry::Line(line)) => println!("{:>8.0} | {line}", now),
                Effect::Append(Entry::Link(link)) => {
                    if args.save {
                        match std::fs::write(&link.filename, &link.text) {
                            Ok(()) => println!("{:>8.0} | [saved {}]", now, link.filename),
                            Err(err) => eprintln!("could not save {}: {err}", link.filename),
                        }
                    } else {
                        println!("{:>8.0} | {}", now, link.label());
                    }
                }
                Effect::Clear => println!("{:>8.0} | ---- clear ----", now),
                Effect::Live(text) if args.show_live && !text.is_empty() => {
                    println!("{:>8.0} > {text}", now)
                }
                Effect::Live(_) => {}
                Effect::RevealBanner => println!("{:>8.0} | [banner shown]", now),
            }
        }

        if now >= args.duration {
            break;
        }
        now += args.step;

        if now >= next_cmd {
            if let Some(cmd) = queue.next() {
                for c in cmd.chars() {
                    term.key(now, Key::Char(c));
                }
                term.key(now, Key::Enter);
            }
            next_cmd += args.gap;
        }
        term.tick(now);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
