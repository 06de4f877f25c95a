use crate::app_context::AppContext;
use crate::cli::{Args, Command};
use crate::ranker::Ranker;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod countries;
mod geodesy;
mod health;
mod http;
mod logging;
mod ranker;
mod repl;
mod solver;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    let countries = match countries::loader::load(&args.countries) {
        Ok(countries) => countries,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if countries.is_empty() {
        tracing::warn!("The countries file is empty, every query will come back empty.");
    }
    let ranker = Ranker::new(countries);
    tracing::info!("Ranking over {} countries.", ranker.len());

    let result = match args.command {
        Command::Serve {
            listen_address,
            allowed_origins,
        } => serve(listen_address, &allowed_origins, ranker).await,
        Command::Play => tokio::task::spawn_blocking(move || {
            repl::run(&ranker, io::stdin().lock(), io::stdout().lock())
        })
        .await
        .unwrap_or_else(|err| Err(io::Error::other(err))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(
    listen_address: std::net::SocketAddr,
    allowed_origins: &[String],
    ranker: Ranker,
) -> io::Result<()> {
    let app_context = AppContext::new(ranker);
    let router = http::router::new(allowed_origins, app_context);
    let listener = TcpListener::bind(listen_address).await?;
    tracing::info!("Listening on {listen_address}.");
    axum::serve(listener, router).await
}
