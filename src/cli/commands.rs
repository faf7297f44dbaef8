use crate::cli::config::FillSettings;
use crate::dom::writer::NativeWriter;
use crate::fill::error::FillError;
use crate::fill::orchestrator::{fill_page_with, fillable_elements};
use crate::fill::report::format_console_report;
use crate::load_page;
use crate::matching::catalog::FIELD_DEFINITIONS;
use crate::matching::matcher::{hint_text, match_field};
use crate::resolve::profile::Profile;
use crate::trace::logger::TraceLogger;

// ============================================================================
// fill subcommand
// ============================================================================

/// Fill a page snapshot and return how many distinct fields were written.
pub fn cmd_fill(
    page: &str,
    settings: &FillSettings,
    output: Option<&str>,
    verbose: u8,
) -> Result<usize, Box<dyn std::error::Error>> {
    let profile_path = settings
        .profile
        .as_deref()
        .ok_or("No profile given (use --profile or fill.profile in the config file)")?;

    let profile = Profile::load(profile_path)?;
    profile.require_name()?;

    if verbose > 0 {
        for key in profile.unknown_keys() {
            eprintln!("Ignoring unknown profile key: {}", key);
        }
    }

    let mut doc = load_page(page)?;
    let tracer = match settings.trace.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    if verbose > 0 {
        eprintln!("Filling {} from {}...", page, profile_path);
        if let Some(path) = tracer.path() {
            eprintln!("Tracing decisions to {}", path.display());
        }
    }

    let report = fill_page_with(&mut doc, &profile, &NativeWriter::platform(), &tracer);

    let output_content = match settings.format.as_str() {
        "json" => {
            let mut json = serde_json::to_string_pretty(&report).map_err(|source| {
                FillError::JsonSerialize {
                    context: "fill report".to_string(),
                    source,
                }
            })?;
            json.push('\n');
            json
        }
        _ => format_console_report(&report, &doc, verbose),
    };

    // Write or print
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(report.filled_count())
}

// ============================================================================
// match subcommand
// ============================================================================

pub fn cmd_match(page: &str, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_page(page)?;
    let elements = fillable_elements(&doc);

    if verbose > 0 {
        eprintln!("{} fillable elements in {}", elements.len(), page);
    }

    for (el, kind) in elements {
        let name = doc.describe(el);
        match match_field(&doc, el) {
            Some(m) => println!(
                "{:<32} {:<10} {:<20} via {:?} \"{}\"",
                name,
                format!("{:?}", kind),
                m.field_key,
                m.source,
                m.keyword
            ),
            None => println!("{:<32} {:<10} {:<20}", name, format!("{:?}", kind), "-"),
        }

        if verbose > 1 {
            println!("    hints: {}", hint_text(&doc, el));
        }
    }

    Ok(())
}

// ============================================================================
// fields subcommand
// ============================================================================

pub fn cmd_fields() {
    for def in FIELD_DEFINITIONS {
        println!("{:<22} {}", def.key, def.keywords.join(", "));
    }
}
