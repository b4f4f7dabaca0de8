// src/bin/extract_offers.rs
use clap::Parser;
use offer_pages::cli::ExtractArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    ExtractArgs::parse().run()?;
    Ok(())
}
