//! Replays one hand through the pot-odds staking agent.
//!
//! Reads configuration from `.env` and `AGENT_*` variables, plays the first
//! round against the seeded pot, then the second round against the given
//! highest bet.

use std::path::PathBuf;

use anyhow::{Context, Error};
use odds_poker::game::Usd;
use op_agent::{AgentConfig, DEFAULT_HIGHEST_BET, render, run};
use pico_args::Arguments;

const HELP: &str = "\
Classify a poker hand and replay the two betting rounds

USAGE:
  op_agent --hand CARDS [OPTIONS]

OPTIONS:
  --hand         CARDS    Hand to play, e.g. \"Ah Kh Qh Jh 10h\"  [required]
  --highest-bet  N        Table's highest bet in round two  [default: 50]
  --preset       NAME     standard or capped  [default: env AGENT_PRESET or standard]
  --odds-table   PATH     JSON odds table  [default: env AGENT_ODDS_TABLE or built-in]

FLAGS:
  --json                  Print the report as JSON
  -h, --help              Print help information

ENVIRONMENT:
  AGENT_STACK             Starting stack
  AGENT_SEED_POT          Pot size before the first round
  AGENT_MIN_BET           Minimum bet and first-round call
  AGENT_BET_CAP           \"stack\" or a fixed chip cap
  RUST_LOG                Log filter (e.g. debug)
";

struct Args {
    hand: String,
    highest_bet: Usd,
    preset: Option<String>,
    odds_table: Option<PathBuf>,
    json: bool,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        json: pargs.contains("--json"),
        hand: pargs
            .value_from_str("--hand")
            .context("--hand is required (try --help)")?,
        highest_bet: pargs
            .opt_value_from_str("--highest-bet")?
            .unwrap_or(DEFAULT_HIGHEST_BET),
        preset: pargs.opt_value_from_str("--preset")?,
        odds_table: pargs.opt_value_from_str("--odds-table")?,
    };

    env_logger::builder().format_target(false).init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unused arguments: {remaining:?}");
    }

    let config = AgentConfig::from_env(args.preset.as_deref(), args.odds_table)?;
    let report = run(&config, &args.hand, args.highest_bet)?;
    println!("{}", render(&report, args.json)?);

    Ok(())
}
