//! Lang Select - pick items out of language-model output.

use clap::Parser;
use lang_select_cli::{input, output, Cli, CliError, Config, Formatter, Selector};
use lang_select_core::{extract_simple, Extractor};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let json = cli.json;
    if let Err(e) = run(cli) {
        if json {
            println!("{}", output::failure_json(&e.to_string()));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only selections and JSON.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LANG_SELECT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> lang_select_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let text = input::read_input(&cli.file, cli.recent.as_deref())?;

    let color_enabled = !cli.no_color && config.settings.color;
    let view = cli.view.map(Into::into).unwrap_or(config.settings.view);
    let formatter = Formatter::new(view, color_enabled);

    if let Some(path) = &cli.save_recent {
        if let Err(e) = input::save_recent(path, &text) {
            warn!("Could not save recent text to {}: {}", path.display(), e);
            eprintln!("{}", formatter.warning(&format!("Recent text not saved: {}", e)));
        }
    }

    let simple = cli.simple && !view.needs_structure();
    if cli.simple && !simple {
        debug!("Ignoring --simple: the {:?} view needs structured extraction", view);
    }

    let items = if simple {
        extract_simple(&text)
    } else {
        Extractor::new(config.extractor.clone())?.extract(&text)
    };

    if items.is_empty() {
        return Err(CliError::NoItems);
    }

    debug!("Found {} selectable items", items.len());
    for item in &items {
        debug!(
            "  {} marker={:?} kind={} section={:?} level={} parent={:?}",
            item,
            item.marker,
            item.marker_kind,
            item.section,
            item.level,
            item.parent_id.map(|id| id.get())
        );
    }

    if cli.print_only {
        if cli.json {
            println!("{}", formatter.format_items_json(&items)?);
        } else {
            println!("{}", formatter.format_items(&items));
        }
        return Ok(());
    }

    let tool = cli.tool.map(Into::into).unwrap_or(config.settings.tool);
    let selected = Selector::new(tool, cli.multi).select(&items, &formatter)?;

    if selected.is_empty() {
        return Err(CliError::NoSelection);
    }

    if cli.json {
        println!("{}", formatter.format_selection_json(&selected, cli.multi)?);
    } else {
        println!("{}", formatter.format_selection(&selected));
    }

    Ok(())
}
