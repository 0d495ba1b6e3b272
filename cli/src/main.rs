use anyhow::Result;
use clap::Parser;
use console::style;
use wikigen_core::{WikiScaffolder, pages};

mod instructions;

#[derive(Parser)]
#[command(name = "wikigen")]
#[command(about = "Scaffold a GitHub wiki structure with placeholder pages", long_about = None)]
struct Cli;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let scaffolder = WikiScaffolder::new(std::env::current_dir()?);
    for page in pages::PAGES {
        scaffolder.write_page(page)?;
        println!("{} {}", style("Created").green(), page);
    }

    instructions::print_next_steps();

    Ok(())
}
