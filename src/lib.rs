//!
//! The hardhat deployment artifacts verification library.
//!

pub mod arguments_file;
pub mod artifact;
pub mod config;
pub mod error;
pub mod locator;
pub mod runner;
pub mod session;
pub mod verifier;


pub use self::arguments_file::style::Style as ArgumentsStyle;
pub use self::arguments_file::ArgumentsFile;
pub use self::artifact::Artifact;
pub use self::config::Config;
pub use self::error::Error;
pub use self::locator::Locator;
pub use self::runner::output::Output;
pub use self::runner::ICommandRunner;
pub use self::runner::SystemRunner;
pub use self::session::summary::Summary;
pub use self::session::Session;
pub use self::verifier::report::Report;
pub use self::verifier::Verifier;

/// The successful process exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed process exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// Verifies all contracts deployed to `network` with real verifier processes.
///
pub fn verify_network(network: String, config: Config) -> Result<Summary, Error> {
    Session::new(network, config, SystemRunner).run()
}
