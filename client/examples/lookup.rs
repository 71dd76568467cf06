use std::env;
use std::process;

use anyhow::Result;
use pokedex_client::{Pokedex, RenderOptions, render_profile};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut query = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => query = Some(arg),
        }
    }

    let Some(query) = query else {
        eprintln!("Usage: lookup [--json] <name or number>");
        process::exit(2);
    };

    let dex = Pokedex::from_env()?;

    match dex.fetch_profile(&query).await {
        Ok(profile) if json => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Ok(profile) => {
            let options = RenderOptions {
                color: true,
                ..RenderOptions::default()
            };
            println!("{}", render_profile(&profile, &options));
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Lookup failed");
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    }

    Ok(())
}
