use anyhow::Result;
use twiml::cli;
use twiml::config::Config;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    cli::run(&config)
}
