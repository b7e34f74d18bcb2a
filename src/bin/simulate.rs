use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail};
use clap::Parser;
use tinyrand::{Seeded, StdRand};
use tracing::debug;

use tumbler::data::LotteryConfig;
use tumbler::draw;
use tumbler::print;

/// Runs one draft lottery draw and prints the resulting order.
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

    /// seed for a reproducible draw; defaults to the system clock
    #[clap(long)]
    seed: Option<u64>,
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

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    let mut rand = StdRand::seed(seed);
    let order = draw::draw_once(&config.chances, config.num_to_pick, &mut rand);
    for (position, &participant) in order.iter().enumerate() {
        let lottery_tag = if position < config.num_to_pick.min(order.len()) {
            " (lottery)"
        } else {
            ""
        };
        println!(
            "{:>5}: #{}{lottery_tag}",
            print::ordinal(position + 1),
            participant + 1
        );
    }
    Ok(())
}
