use anyhow::Result;
use enable_ci::{config::Config, parameters::Parameters, parse_args};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.verbose);

    // Command line values win over the defaults file
    let mut raw = args.raw_parameters();
    if let Some(path) = &args.config {
        let config = Config::from_file(path)?;
        debug!("Loaded defaults from {}", path.display());
        raw = raw.or(config.into());
    }

    let parameters = Parameters::try_from(raw)?;
    info!(?parameters, "Parameters validated");

    println!(
        "✅ Ready to enable CI for application {} in {}",
        parameters.application_name(),
        parameters.project().display()
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "enable_ci=debug" } else { "enable_ci=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logging may already be initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
