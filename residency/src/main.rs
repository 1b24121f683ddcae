use {
    anyhow::{Context, Result},
    flexi_logger::Logger,
    log::info,
};

fn run() -> Result<()> {
    // Log lines go to stderr; stdout is only for the greeting.
    let _logger = Logger::try_with_env_or_str("warn")
        .context("Could not read the logging configuration")?
        .start()
        .context("Logger initialization failed")?;

    info!("starting up");
    println!("Hello World");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("Error: {e}");
        for cause in e.chain().skip(1) {
            println!("\tcaused by: {cause}");
        }
        std::process::exit(1);
    }
}
