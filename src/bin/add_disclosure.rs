// src/bin/add_disclosure.rs
use clap::Parser;
use offer_pages::cli::DisclosureArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    DisclosureArgs::parse().run()?;
    Ok(())
}
