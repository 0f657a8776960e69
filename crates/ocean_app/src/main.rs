mod app;
mod cli;
mod input;
mod logging;
mod render;

use anyhow::{Context, Result};
use ocean_engine::SimConfig;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = cli::parse_args(std::env::args().skip(1), cli::default_config_path())?;
    if options.show_help {
        cli::print_help();
        return Ok(());
    }
    if options.print_example {
        print!("{}", SimConfig::default().to_ron()?);
        return Ok(());
    }

    logging::initialize(options.log, options.log_level);

    let config = SimConfig::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `oceandash --print-example-config` for a template",
            options.config_path.display()
        )
    })?;

    app::run(&options, &config)
}
