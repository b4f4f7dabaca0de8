// src/bin/fix_csv.rs
use clap::Parser;
use offer_pages::cli::FixCsvArgs;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    offer_pages::log::init();
    FixCsvArgs::parse().run()?;
    Ok(())
}
