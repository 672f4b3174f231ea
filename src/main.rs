use env_logger::Env;
use fndoc::{Config, generate_functions_doc, version};
use log::{debug, info};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("fndoc v{}", version());

    let config = Config::from_current_dir()?;
    info!("Source directory: {:?}", config.source_dir);
    info!("Output file: {:?}", config.output_file);

    let start_time = Instant::now();

    // Failures are already logged where they happen; the run itself still
    // completes normally.
    if let Err(e) = generate_functions_doc(&config) {
        debug!("Report not written: {}", e);
    }

    info!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}
