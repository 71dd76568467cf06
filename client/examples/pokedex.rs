use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use pokedex_client::{Pokedex, RenderOptions, render_state};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Commands:");
    println!("  <name or number> - Look up a Pokemon");
    println!("  /show            - Show the current result again");
    println!("  /color           - Toggle colored output");
    println!("  /clear           - Clear the current result");
    println!("  /quit            - Exit");
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn options(color: &AtomicBool) -> RenderOptions {
    RenderOptions {
        color: color.load(Ordering::Relaxed),
        ..RenderOptions::default()
    }
}

fn handle_input(line: &str, dex: &Pokedex, color: &Arc<AtomicBool>) -> io::Result<bool> {
    let line = line.trim();
    if line.is_empty() {
        prompt()?;
        return Ok(true);
    }

    if let Some(cmd) = line.strip_prefix('/') {
        match cmd.trim() {
            "help" => print_help(),
            "show" => println!("{}", render_state(&dex.state(), &options(color))),
            "color" => {
                let enabled = !color.fetch_xor(true, Ordering::Relaxed);
                println!("Color {}", if enabled { "on" } else { "off" });
            }
            "clear" => dex.reset(),
            "quit" | "exit" => return Ok(false),
            other => println!("Unknown command: /{}. Type /help for commands.", other),
        }
        prompt()?;
        return Ok(true);
    }

    // Searches run in the background so a new query can be typed before
    // the previous one resolves.
    let dex = dex.clone();
    let color = color.clone();
    let query = line.to_string();
    println!("Searching for {}...", query);
    tokio::spawn(async move {
        let state = dex.search(&query).await;
        println!("\n{}\n", render_state(&state, &options(&color)));
        if let Err(e) = prompt() {
            tracing::warn!(error = %e, "Failed to flush stdout");
        }
    });

    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Pokedex");
    println!("=======");

    let dex = Pokedex::from_env()?;
    tracing::info!(base_url = %dex.base_url(), policy = ?dex.policy(), "Pokedex ready");

    let color = Arc::new(AtomicBool::new(true));
    print_help();
    prompt()?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if !handle_input(&line, &dex, &color)? {
            break;
        }
    }

    Ok(())
}
