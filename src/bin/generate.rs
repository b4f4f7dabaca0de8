// src/bin/generate.rs
use clap::Parser;
use offer_pages::cli::GenerateArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    GenerateArgs::parse().run()?;
    Ok(())
}
