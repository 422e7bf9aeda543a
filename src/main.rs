use anyhow::Result;
use autochart::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();
    autochart::telemetry::init_tracing(cli.debug);

    // Run the main application logic from the library
    if let Err(e) = autochart::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
