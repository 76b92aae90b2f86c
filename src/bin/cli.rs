// src/bin/cli.rs
use job_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(std::env::args().skip(1))
}
