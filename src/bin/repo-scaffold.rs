use anyhow::Result;
use clap::Parser;
use repo_scaffold::cli::RepoScaffoldCli;
use repo_scaffold::modules::{init_tracing, AuthError, Logger};
use std::process;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = RepoScaffoldCli::parse();

    init_tracing(cli.verbose);
    let logger = Logger::new(cli.verbose);

    logger.debug(format_args!(
        "Starting repo-scaffold v{}",
        env!("CARGO_PKG_VERSION")
    ));

    if let Err(error) = cli.command.run(&logger).await {
        if let Some(auth_error) = error.downcast_ref::<AuthError>() {
            logger.log(auth_error);
            process::exit(1);
        }
        return Err(error);
    }

    Ok(())
}
