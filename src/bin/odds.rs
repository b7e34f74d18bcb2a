use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use tumbler::data::LotteryConfig;
use tumbler::mc::DEFAULT_TRIALS;
use tumbler::odds::OddsEngine;
use tumbler::print;

/// Tabulates the odds of every participant landing in every draft position.
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file holding the lottery config
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// comma-separated chance weights, worst record first
    #[clap(short = 'c', long)]
    chances: Option<String>,

    /// number of draft positions decided by the lottery
    #[clap(short = 'p', long)]
    picks: Option<usize>,

    /// compute exactly even if deemed too slow
    #[clap(long)]
    force_exact: bool,

    /// Monte Carlo trials used when exact computation is infeasible
    #[clap(long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.is_none() && self.chances.is_none() {
            bail!("either a config file or inline chances must be specified");
        }
        Ok(())
    }

    fn config(&self) -> anyhow::Result<LotteryConfig> {
        let mut config = match &self.file {
            Some(file) => LotteryConfig::read_json_file(file)?,
            None => {
                let chances = self
                    .chances
                    .as_ref()
                    .ok_or_else(|| anyhow!("chances must be specified"))?;
                let picks = self
                    .picks
                    .ok_or_else(|| anyhow!("picks must be specified with inline chances"))?;
                LotteryConfig::new(parse_chances(chances)?, picks)
            }
        };
        if let Some(picks) = self.picks {
            config.num_to_pick = picks;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_chances(chances: &str) -> anyhow::Result<Vec<f64>> {
    chances
        .split(',')
        .map(|chance| {
            chance
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid chance weight {chance:?}"))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");
    let config = args.config()?;

    let engine = OddsEngine::default().with_trials(args.trials);
    let odds = engine.compute(&config.chances, config.num_to_pick, args.force_exact);
    if odds.approximate {
        info!(
            "exact enumeration is infeasible at this size; estimated from {} trials",
            args.trials
        );
    }
    println!("{}", Console::default().render(&print::tabulate(&odds.matrix)));
    Ok(())
}
