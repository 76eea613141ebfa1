use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fadecue::{CueHost, CueSession, CueSheet, Tick};

#[derive(Parser, Debug)]
#[command(name = "fadecue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a cue sheet JSON without playing it.
    Check(CheckArgs),
    /// Play a cue sheet in the terminal in real time.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input cue sheet JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input cue sheet JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback loop rate in ticks per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Time multiplier (2.0 plays twice as fast).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let sheet = CueSheet::from_path(&args.in_path)
        .with_context(|| format!("load cue sheet '{}'", args.in_path.display()))?;
    sheet.validate()?;
    eprintln!("ok: {} entries", sheet.entry_count());
    Ok(())
}

struct TerminalHost;

impl CueHost for TerminalHost {
    fn sequence_complete(&mut self) {
        eprintln!("(sequence complete)");
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be >= 1");
    }
    if !args.speed.is_finite() || args.speed <= 0.0 {
        anyhow::bail!("--speed must be finite and > 0");
    }

    let sheet = CueSheet::from_path(&args.in_path)
        .with_context(|| format!("load cue sheet '{}'", args.in_path.display()))?;
    let sequencer = sheet.into_sequencer()?;

    let mut session = CueSession::new(sequencer);
    let mut host = TerminalHost;
    session.activate(&mut host);

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let mut shown = usize::MAX;
    let mut last = Instant::now();
    loop {
        if let Ok(d) = session.display() {
            let cursor = session.sequencer().cursor();
            if cursor != shown {
                shown = cursor;
                println!();
                if !d.header.is_empty() {
                    println!("== {} ==", d.header);
                }
                println!("{}", d.item);
            }
        }

        std::thread::sleep(frame);
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64() * args.speed;
        last = now;

        match session.frame(dt, &mut host) {
            Tick::Active => {}
            Tick::Complete | Tick::Terminal => break,
        }
    }

    session.deactivate(&mut host);
    Ok(())
}
