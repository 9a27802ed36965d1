use log::{error, info};
use notefont::player::LogBackend;
use notefont::{NoteSequence, SessionConfig};
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: notefont <session.yaml> [launches]");
        process::exit(1);
    }

    let session = match SessionConfig::load(&args[1]) {
        Ok(session) => session,
        Err(e) => {
            error!("Error reading session '{}': {}", args[1], e);
            process::exit(1);
        }
    };

    let launches = match args.get(2) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Launch count must be a nonnegative integer, got '{}'", arg);
                process::exit(1);
            }
        },
        None => session.launches,
    };

    let player = match session.load_player(LogBackend) {
        Ok(player) => player,
        Err(e) => {
            error!("Instrument failed to load: {}", e);
            process::exit(1);
        }
    };

    let mut sequence = match session.sequence.build(&player) {
        Ok(sequence) => sequence,
        Err(e) => {
            error!("Invalid sequence: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Loaded {} sprites from '{}'; simulating {} launches",
        player.sprites().len(),
        player.asset().name(),
        launches
    );

    for _ in 0..launches {
        sequence.play_note();
    }
}
