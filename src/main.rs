//! appboot - inspect and edit named JSON config files
//!
//! A small host program built on the appboot lifecycle.

use appboot::cli::{Cli, FlagSet, FlagStore};
use appboot::{App, AppOptions, Result};
use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    // Registered flags are added on top of the derived CLI
    let flags = FlagSet::new();
    let matches = flags.augment(Cli::command()).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let store = flags.store_from_matches(&matches);

    if let Err(e) = run(cli, store).await {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, store: FlagStore) -> Result<()> {
    let mut options = AppOptions::from_env();
    cli.apply_options(&mut options);

    let mut app = App::new(options, store);
    app.set_pre_fn(|registry| async move {
        let names = registry.names().await;
        debug!("Loaded configs: {:?}", names);
        Ok(())
    });

    app.start().await?;
    let result = cli.execute(&app).await;
    app.close().await?;

    result
}
