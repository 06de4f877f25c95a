use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Headerless CSV of `name,capital,latitude,longitude` lines.
    #[arg(long)]
    #[arg(default_value = "data/countries.csv")]
    pub countries: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the solver over HTTP.
    Serve {
        #[arg(long)]
        #[arg(default_value = "0.0.0.0:3030")]
        listen_address: SocketAddr,
        #[arg(long = "allowed-origin")]
        #[arg(default_values_t = [String::from("http://127.0.0.1:3000"), String::from("http://localhost:3000")])]
        allowed_origins: Vec<String>,
    },
    /// Solve a puzzle interactively from the terminal.
    Play,
}
