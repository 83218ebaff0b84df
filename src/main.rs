//! dicebot - roll dice from the command line or a line-based chat feed

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dicebot::{BotConfig, DiceBot, Message, Roller};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dice roll bot
#[derive(Parser, Debug)]
#[command(name = "dicebot", version, about = "Roll dice expressions like 4d20+3")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fixed random seed (overrides the configuration)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll one expression, e.g. `dicebot roll 2d6+1`
    Roll {
        #[arg(required = true)]
        expression: Vec<String>,
    },
    /// Roll the first expression found in some text
    Scan {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Read `<target> <text>` lines from stdin and answer like a chat bot
    Listen,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries replies only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dicebot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = BotConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    match args.command {
        Command::Roll { expression } => {
            let mut roller = Roller::with_seed(config.seed);
            match roller.roll(&expression.join(" ")) {
                Ok(reply) => println!("{}", reply),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Scan { text } => {
            let mut roller = Roller::with_seed(config.seed);
            if let Some(reply) = roller.scan(&text.join(" "), true) {
                println!("{}", reply);
            }
        }
        Command::Listen => listen(DiceBot::new(config))?,
    }

    Ok(())
}

fn listen(bot: DiceBot) -> Result<()> {
    info!(
        "listening on stdin (prefix {:?}, auto-roll default {}, private {}, {} channel overrides)",
        bot.config().command_prefix,
        bot.config().auto_roll.default,
        bot.config().auto_roll.private,
        bot.config().auto_roll.channels.len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let Some((target, text)) = line.split_once(' ') else {
            continue;
        };

        let message = Message::new(target, text);
        if let Some(reply) = bot.handle(&message) {
            writeln!(stdout, "{} {}", message.target, reply)?;
            stdout.flush()?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
