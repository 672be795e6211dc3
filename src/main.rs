mod clients;
mod landmark;
mod maps;
mod nearby;
mod report;
mod session;
#[cfg(test)]
mod testutil;
mod types;

use std::io;
use std::path::Path;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // logs go to stderr; stdout belongs to the interactive prompts
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let client = clients::maps_client_from_env()?;
    session::run(&client, &mut io::stdin().lock(), Path::new(".")).await
}
