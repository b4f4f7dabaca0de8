// src/bin/favicon.rs
use clap::Parser;
use offer_pages::cli::FaviconArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    FaviconArgs::parse().run()?;
    Ok(())
}
