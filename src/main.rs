use clap::Parser;
use mirra::config::Cli;
use mirra::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    println!("mirra v{}", mirra::VERSION);
    println!("  Source:   {}", config.source.display());
    println!("  Replica:  {}", config.replica.display());
    println!("  Interval: {}s", config.interval.as_secs());
    println!("  Log file: {}", config.log_file.display());

    mirra::commands::sync::run(&config);

    Ok(())
}
