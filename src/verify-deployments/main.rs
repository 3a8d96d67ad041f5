//!
//! The deployment verifier binary.
//!

pub mod arguments;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => deployment_verifier::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{:?}", error);
            deployment_verifier::EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
/// Only invalid arguments make the process fail. Contract verification failures are
/// reported and counted in the summary.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();
    arguments.validate()?;

    let log_level = if arguments.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let (network, config) = arguments.try_into_config()?;
    log::debug!("Using {:?}", config);

    match deployment_verifier::verify_network(network, config) {
        Ok(summary) => println!("{}", summary),
        Err(error) => println!("Failed to get contract file paths: {}", error),
    }

    Ok(())
}
