mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_summary};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in searchviz::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;
    for warning in &resolved.warnings {
        eprintln!("warning: {warning}");
    }

    if cli.print_config {
        resolved.print_summary();
    }

    run(&cli, resolved)
}

/// Run headless or interactively and print output in the chosen format.
fn run(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
    let workflow = SearchWorkflow::from_config(settings)?;

    if !cli.headless {
        let summary = workflow.run_interactive()?;
        print_summary(&summary);
        return Ok(());
    }

    let transcript = workflow.run_headless()?;
    match cli.output {
        OutputFormat::Plain => print_plain(&transcript),
        OutputFormat::Json => print_json(&transcript)?,
    }

    Ok(())
}
