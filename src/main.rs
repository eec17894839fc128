mod error;
mod icon;
mod logo;
mod raster;

use anyhow::Context;
use clap::Parser;
use icon::{read_entries, write_icon, ICON_SIZES};
use log::info;
use logo::render;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "russell-klein-favicon.ico";

#[derive(Parser, Debug)]
#[command(name = "sawtooth-favicon")]
#[command(version, about = "Render the sawtooth logo into a multi-resolution .ico", long_about = None)]
struct Cli {
    /// Where to write the icon
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Side length of the master render the entries are downsampled from
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..=1024))]
    master_size: u32,

    /// Also save the master render as a PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Read the written icon back and log its entries
    #[arg(long)]
    verify: bool,
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    info!("Rendering {0}x{0} master...", cli.master_size);
    let master = render(cli.master_size);

    if let Some(png) = &cli.png {
        master
            .save(png)
            .with_context(|| format!("failed to save preview {}", png.display()))?;
        info!("Preview saved as {}", png.display());
    }

    write_icon(&master, &ICON_SIZES, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if cli.verify {
        let entries = read_entries(&cli.output)
            .with_context(|| format!("failed to read back {}", cli.output.display()))?;
        for (width, height) in entries {
            info!("entry {width}x{height}");
        }
    }

    Ok(cli.output.clone())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let path = run(&cli)?;
    println!("{}", path.display());
    Ok(())
}
