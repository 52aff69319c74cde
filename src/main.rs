//! go-link: send stones to a local Go game server.
//!
//! ## Usage
//!
//! - `go-link` - Place a white stone at D6
//! - `go-link place <intersection> <color>` - Place a stone
//! - `go-link board` - Print the server's board
//! - `go-link reset` - Clear the server's board

use anyhow::Result;
use clap::{Parser, Subcommand};
use url::Url;

use go_link::client::Client;
use go_link::constants::{DEFAULT_SERVER, DEMO_COLOR, DEMO_INTERSECTION};

/// go-link: place stones on a Go game server
#[derive(Parser)]
#[command(name = "go-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the game server
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: Url,

    /// Write a debug log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a stone at an intersection, e.g. `place D6 white`
    Place {
        /// Board coordinate, sent as given
        intersection: String,
        /// `black` or `white`, any case
        color: String,
    },
    /// Print the current board
    Board,
    /// Clear the board
    Reset,
    /// Place a white stone at D6
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        setup_logger(log_file)?;
    }

    let client = Client::with_server(cli.server)?;

    match cli.command {
        Some(Commands::Place {
            intersection,
            color,
        }) => place(&client, &intersection, &color),
        Some(Commands::Board) => {
            let board = client.board()?;
            print!("{board}");
            Ok(())
        }
        Some(Commands::Reset) => {
            println!("{}", client.reset()?);
            Ok(())
        }
        Some(Commands::Demo) | None => place(&client, DEMO_INTERSECTION, DEMO_COLOR),
    }
}

fn place(client: &Client, intersection: &str, color: &str) -> Result<()> {
    let placement = client.place(intersection, color)?;
    println!("{}", placement.request);
    println!("{}", placement.response);
    Ok(())
}

fn setup_logger(file_name: &str) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(file_name)?)
        .apply()?;
    Ok(())
}
