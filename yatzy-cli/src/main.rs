//! yatzy: CLI for the solo Yatzy engine.
//!
//! Subcommands:
//! - play: interactive game on stdin/stdout
//! - sim: run many greedy games and print score statistics

use std::env;
use std::path::PathBuf;
use std::process;

use yatzy_core::Config;
use yatzy_logging::NdjsonWriter;

mod play;
mod sim;

fn load_config(path: Option<&PathBuf>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", p.display(), e);
            process::exit(1);
        }),
        None => Config::default(),
    }
}

fn open_event_log(cfg: &Config) -> Option<NdjsonWriter> {
    let path = cfg.log.events_path.as_ref()?;
    match NdjsonWriter::open_append_with_flush(path, cfg.log.flush_every_lines) {
        Ok(w) => Some(w),
        Err(e) => {
            eprintln!("Failed to open event log {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn cmd_play(args: &[String]) {
    let mut seed: Option<u64> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yatzy play

USAGE:
    yatzy play [--seed S] [--config PATH]

OPTIONS:
    --seed S        Dice RNG seed (default: config, else OS entropy)
    --config PATH   YAML config file
"#
                );
                return;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--config" => {
                config_path = Some(PathBuf::from(require_value(args, i, "--config")));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yatzy play`: {}", other);
                eprintln!("Run `yatzy play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let cfg = load_config(config_path.as_ref());
    let seed = seed.or(cfg.game.seed);
    let log = open_event_log(&cfg);

    let mut session = play::PlaySession::new(seed, log);
    if let Err(e) = session.run() {
        eprintln!("I/O error: {}", e);
        process::exit(1);
    }
}

fn cmd_sim(args: &[String]) {
    let mut games: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut no_hist = false;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yatzy sim

USAGE:
    yatzy sim [--games N] [--seed S] [--no-hist] [--config PATH]

OPTIONS:
    --games N       Number of games to simulate (default: 10000)
    --seed S        Base RNG seed (default: 0)
    --no-hist       Skip printing the histogram
    --config PATH   YAML config file
"#
                );
                return;
            }
            "--games" => {
                games = Some(parse_value(args, i, "--games"));
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            "--config" => {
                config_path = Some(PathBuf::from(require_value(args, i, "--config")));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yatzy sim`: {}", other);
                eprintln!("Run `yatzy sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let cfg = load_config(config_path.as_ref());
    let games = games.unwrap_or(cfg.sim.games);
    let seed = seed.unwrap_or(cfg.sim.seed);
    let show_hist = !no_hist && cfg.sim.histogram;
    let mut log = open_event_log(&cfg);

    println!("Simulating {} greedy games (seed {})...", games, seed);
    let report = sim::run(games, seed, log.as_mut());
    if let Some(w) = &mut log {
        let _ = w.flush();
    }

    let s = &report.summary;
    println!();
    println!("Evaluation:");
    println!("  - Games: {}", games);
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        s.mean, s.median, s.std_dev, s.min, s.max
    );

    if show_hist {
        sim::print_histogram(&report.scores);
    }
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    &args[i + 1]
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = require_value(args, i, flag);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        process::exit(1);
    })
}

fn print_help() {
    eprintln!(
        r#"yatzy - solo Yatzy engine CLI

USAGE:
    yatzy <COMMAND> [OPTIONS]

COMMANDS:
    play    Play an interactive game
    sim     Simulate greedy games and print statistics

OPTIONS:
    -h, --help          Print this help message

Run `yatzy <COMMAND> --help` for command options."#
    );
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("play") => cmd_play(&args[1..]),
        Some("sim") => cmd_sim(&args[1..]),
        Some("--help") | Some("-h") => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
        None => {
            print_help();
            process::exit(1);
        }
    }
}
