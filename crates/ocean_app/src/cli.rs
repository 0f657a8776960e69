use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use log::LevelFilter;

use crate::logging::LogDestination;

const DEFAULT_CONFIG_FILE: &str = "oceandash.ron";
const CONFIG_ENV: &str = "OCEANDASH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config_path: PathBuf,
    pub seed: Option<u64>,
    pub log: LogDestination,
    pub log_level: LevelFilter,
    pub no_samples: bool,
    pub show_help: bool,
    pub print_example: bool,
}

impl Options {
    fn with_config(config_path: PathBuf) -> Self {
        Self {
            config_path,
            seed: None,
            log: LogDestination::File,
            log_level: LevelFilter::Info,
            no_samples: false,
            show_help: false,
            print_example: false,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn parse_args<I>(args: I, default_config: PathBuf) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::with_config(default_config);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.show_help = true,
            "--print-example-config" => options.print_example = true,
            "--no-samples" => options.no_samples = true,
            "--verbose" => options.log_level = LevelFilter::Debug,
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a path"))?;
                options.config_path = PathBuf::from(value);
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed requires a number"))?;
                let seed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid --seed value {value:?}"))?;
                options.seed = Some(seed);
            }
            "--log" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--log requires terminal, file or both"))?;
                options.log = LogDestination::parse(&value)
                    .ok_or_else(|| anyhow!("unknown --log destination {value:?}"))?;
            }
            other => bail!("unknown argument {other:?}; run `oceandash --help`"),
        }
    }

    Ok(options)
}

pub fn print_help() {
    println!(
        "oceandash - simulated oceanographic assistant dashboard

USAGE:
    oceandash [OPTIONS]

OPTIONS:
    --config <PATH>           RON config file (default: ${CONFIG_ENV} or ./{DEFAULT_CONFIG_FILE})
    --seed <N>                seed the progress step generator
    --log <terminal|file|both>
                              log destination (default: file)
    --verbose                 log at debug level
    --no-samples              start without the sample chat, jobs and history
    --print-example-config    print a config with every default and exit
    -h, --help                show this help

Type /help once running for the interactive commands."
    );
}
