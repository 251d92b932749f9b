//! mkmd CLI - clients overview Markdown generator

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use mkmd::AssembleOptions;

#[derive(Parser)]
#[command(name = "mkmd")]
#[command(version)]
#[command(about = "Generate the clients overview Markdown from a YAML description", long_about = None)]
struct Cli {
    /// Input clients YAML file
    #[arg(short, long, value_name = "FILE", default_value = "clients.yaml")]
    input: PathBuf,

    /// Output Markdown file (no file is written if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not write the document to standard output
    #[arg(long)]
    no_stdout: bool,

    /// Verify that referenced icon assets exist, then exit
    #[arg(long)]
    check_icons: bool,

    /// Root directory for icon asset lookup
    #[arg(long, value_name = "DIR", default_value = ".")]
    assets_root: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), mkmd::Error> {
    let config = mkmd::load_config(&cli.input)?;

    if cli.check_icons {
        mkmd::check_icons(&config, &cli.assets_root)?;
        println!("{}: all referenced icon assets exist", "OK".green().bold());
        return Ok(());
    }

    // Render completely before touching any sink, so an error never
    // leaves a partial file behind.
    let markdown = mkmd::generate(&config, &AssembleOptions::default())?;

    if let Some(output) = &cli.output {
        fs::write(output, &markdown)?;
        log::info!("wrote {}", output.display());
    }
    if !cli.no_stdout {
        print!("{markdown}");
    }
    Ok(())
}
