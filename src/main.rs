use clap::Parser;
use form_autofill::cli::commands::{cmd_fields, cmd_fill, cmd_match};
use form_autofill::cli::config::{Cli, Commands, load_config, resolve_fill_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Fill {
            page,
            profile,
            format,
            output,
        } => {
            let settings = resolve_fill_settings(
                &config,
                profile.as_deref(),
                format.as_deref(),
                cli.trace.as_deref(),
            );
            let filled = cmd_fill(&page, &settings, output.as_deref(), cli.verbose)?;
            if filled == 0 {
                // Callers poll and retry late-rendering pages on this
                std::process::exit(2);
            }
        }
        Commands::Match { page } => {
            cmd_match(&page, cli.verbose)?;
        }
        Commands::Fields => cmd_fields(),
    }

    Ok(())
}
