//! Offline arena CLI.
//!
//! Plays cube games between the search chooser and random movers, without
//! a game server, and prints per-game results plus a summary.
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --games N          Number of games to play (default: 10)
//!   --turns N          Turns per game (default: 294)
//!   --seed N           Base random seed (default: 1)
//!   --search-sides N   How many sides run the search, 0-3 (default: 1)
//!   --specials N       Special-move charges per agent (default: 2)
//!   --special-rate X   Chance a search side spends a charge (default: 0)
//!   --quiet            Suppress per-game output

use std::env;
use std::time::Instant;

use facepaint::arena::{self, ArenaConfig, Policy};
use facepaint::board::Side;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ArenaConfig::default();
    let mut search_sides = 1usize;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = args[i].parse().expect("invalid --games value");
            }
            "--turns" => {
                i += 1;
                config.turns = args[i].parse().expect("invalid --turns value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--search-sides" => {
                i += 1;
                search_sides = args[i].parse().expect("invalid --search-sides value");
                assert!(search_sides <= 3, "--search-sides takes 0 to 3");
            }
            "--specials" => {
                i += 1;
                config.special_charges = args[i].parse().expect("invalid --specials value");
            }
            "--special-rate" => {
                i += 1;
                config.special_rate = args[i].parse().expect("invalid --special-rate value");
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    for (index, policy) in config.policies.iter_mut().enumerate() {
        *policy = if index < search_sides { Policy::Search } else { Policy::Random };
    }

    if !quiet {
        eprintln!(
            "Arena: {} games, {} turns, {} search side(s), seed {}",
            config.games, config.turns, search_sides, config.seed
        );
    }

    let start = Instant::now();
    let reports = arena::run(&config);
    let elapsed = start.elapsed();

    if !quiet {
        for (game, report) in reports.iter().enumerate() {
            println!(
                "game {:3}  score {:?}  area {:?}  winner {}",
                game,
                report.score,
                report.area,
                outcome_name(report.winner)
            );
        }
    }

    let summary = arena::summarize(&reports);
    println!(
        "wins {:?}  draws {}  mean score {:.1?}  mean area {:.1?}",
        summary.wins, summary.draws, summary.mean_score, summary.mean_area
    );
    eprintln!(
        "Completed {} games in {:.1}s",
        reports.len(),
        elapsed.as_secs_f64()
    );
}

fn outcome_name(winner: Option<Side>) -> &'static str {
    match winner {
        Some(Side::Red) => "red",
        Some(Side::Green) => "green",
        Some(Side::Blue) => "blue",
        None => "draw",
    }
}

fn print_usage() {
    eprintln!("Usage: arena [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N          Number of games to play (default: 10)");
    eprintln!("  --turns N          Turns per game (default: 294)");
    eprintln!("  --seed N           Base random seed (default: 1)");
    eprintln!("  --search-sides N   How many sides run the search, 0-3 (default: 1)");
    eprintln!("  --specials N       Special-move charges per agent (default: 2)");
    eprintln!("  --special-rate X   Chance a search side spends a charge (default: 0)");
    eprintln!("  --quiet            Suppress per-game output");
    eprintln!("  --help             Show this help");
}
