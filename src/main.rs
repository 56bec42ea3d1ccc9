use clap::Parser;
use str_match::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("str_match=debug,info")
    } else {
        EnvFilter::new("str_match=warn")
    };

    // Results go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::search::run(cli.search, cli.format)?;

    Ok(())
}
