//! Headless runner
//!
//! Plays one demo-pilot game against a logging display and prints the final
//! state as JSON.
//!
//! Usage: chromescape [CONFIG.json] [--seed N] [--ticks N] [--size WxH]

use chromescape::renderer::LogSink;
use chromescape::{Config, Session, TITLE};

const DEFAULT_TICKS: u64 = 60 * 60 * 10;

struct Args {
    config_path: Option<String>,
    seed: Option<u64>,
    ticks: u64,
    width: f32,
    height: f32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        seed: None,
        ticks: DEFAULT_TICKS,
        width: 400.0,
        height: 400.0,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| iter.next().ok_or(format!("{} needs a value", name));
        match arg.as_str() {
            "--seed" => {
                let v = value("--seed")?;
                args.seed = Some(v.parse().map_err(|_| format!("bad seed: {}", v))?);
            }
            "--ticks" => {
                let v = value("--ticks")?;
                args.ticks = v.parse().map_err(|_| format!("bad tick count: {}", v))?;
            }
            "--size" => {
                let v = value("--size")?;
                let (w, h) = v
                    .split_once('x')
                    .ok_or(format!("size must look like 400x400, got {}", v))?;
                args.width = w.parse().map_err(|_| format!("bad width: {}", w))?;
                args.height = h.parse().map_err(|_| format!("bad height: {}", h))?;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
            path => args.config_path = Some(path.to_string()),
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", TITLE);

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let config = match &args.config_path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = match Session::new(config, args.width, args.height, LogSink::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    session.autopilot = true;

    for _ in 0..args.ticks {
        if session.is_game_over() {
            break;
        }
        session.run_tick();
    }

    let state = session.state();
    log::info!(
        "Stopped at tick {}: {}, {} lives, {} scene operations",
        state.round.tick,
        state.score_label(),
        state.lives(),
        session.sink().operations
    );

    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
