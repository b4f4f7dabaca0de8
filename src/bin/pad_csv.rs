// src/bin/pad_csv.rs
use clap::Parser;
use offer_pages::cli::PadCsvArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    PadCsvArgs::parse().run()?;
    Ok(())
}
