//! pick-search - Query the emoji catalog from the command line

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use libemojipick::logging;
use libemojipick::matcher::search_ranked;
use libemojipick::{
    Catalog, Config, Emoji, FileRecentsStore, FilterSettings, MatchTier, PickError, RecencyList,
    RecentsStore,
};

#[derive(Parser, Debug)]
#[command(name = "pick-search")]
#[command(version, about = "Search the emoji catalog")]
#[command(long_about = r#"Search the emoji catalog, list recently picked emojis, or dump the
whole catalog.

EXAMPLES:
    # Best matches for a query
    pick-search party

    # Only the glyph of the best match
    pick-search --limit 1 --format text thumbs | cut -f1

    # Hide skin-tone and gender variants
    pick-search --no-skin-tones --no-genders hand

    # Only emojis available up to Emoji 11
    pick-search --max-version 11 face

    # Recently picked emojis
    pick-search --recents

    # The whole catalog, ignoring filters
    pick-search --all --limit 0 --format jsonl

OUTPUT FORMATS:
    text  - glyph, name and aliases separated by tabs (default)
    json  - JSON array
    jsonl - JSON lines, one object per line

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (configuration or recents file unreadable)
    3 - Invalid input
"#)]
struct Args {
    /// Search query; omit it to list every allowed emoji
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long, default_value = "20", value_name = "N")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// List recently picked emojis instead of searching
    #[arg(short, long, conflicts_with_all = ["query", "all"])]
    recents: bool,

    /// List the whole catalog in declaration order, ignoring filters
    #[arg(short, long, conflicts_with = "query")]
    all: bool,

    /// Hide skin-tone variants
    #[arg(long)]
    no_skin_tones: bool,

    /// Hide gender variants
    #[arg(long)]
    no_genders: bool,

    /// Hide emojis newer than this Unicode emoji version (negative: no cutoff)
    #[arg(long, value_name = "VERSION", allow_hyphen_values = true)]
    max_version: Option<i64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// One line of output
#[derive(Debug, Serialize)]
struct Hit {
    glyph: String,
    name: String,
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<MatchTier>,
    min_version: u32,
    skin_tone_variant: bool,
    gender_variant: bool,
}

impl Hit {
    fn new(emoji: &Emoji, tier: Option<MatchTier>) -> Self {
        Self {
            glyph: emoji.glyph().to_string(),
            name: emoji.name().to_string(),
            aliases: emoji.aliases().to_vec(),
            tier,
            min_version: emoji.min_version(),
            skin_tone_variant: emoji.is_skin_tone_variant(),
            gender_variant: emoji.is_gender_variant(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut log_config = logging::default_config();
    log_config.verbose = args.verbose;
    log_config.init();

    tracing::debug!("pick-search started with args: {:?}", args);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        let code = e.downcast_ref::<PickError>().map_or(1, PickError::exit_code);
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let catalog = Catalog::builtin().with_custom_aliases(&config.aliases);

    let hits: Vec<Hit> = if args.recents {
        let store = FileRecentsStore::new(config.recents_path()?);
        let snapshot = store
            .load(&catalog)
            .with_context(|| format!("Failed to read recents from {}", store.path().display()))?;
        let recents = RecencyList::from_snapshot(config.recents_capacity(), snapshot);
        recents.iter().map(|e| Hit::new(e, None)).collect()
    } else if args.all {
        catalog.all().iter().map(|e| Hit::new(e, None)).collect()
    } else {
        let query = match args.query.as_deref() {
            Some(q) if q.trim().is_empty() => {
                return Err(PickError::InvalidInput(
                    "query is blank; omit it to list the catalog".to_string(),
                )
                .into());
            }
            Some(q) => q,
            None => "",
        };
        let settings = effective_settings(&config, &args);
        search_ranked(query, &catalog, &settings)
            .into_iter()
            .map(|(tier, e)| Hit::new(e, (!query.is_empty()).then_some(tier)))
            .collect()
    };

    let hits = if args.limit == 0 {
        hits
    } else {
        hits.into_iter().take(args.limit).collect()
    };
    tracing::debug!(count = hits.len(), "Writing results");

    print_hits(&hits, &args.format)
}

/// Command-line flags override the configuration file
fn effective_settings(config: &Config, args: &Args) -> FilterSettings {
    let base = config.filter_settings();
    let max_version = match args.max_version {
        Some(v) => FilterSettings::new(false, false, Some(v)).max_version,
        None => base.max_version,
    };
    FilterSettings {
        skin_tones_disabled: base.skin_tones_disabled || args.no_skin_tones,
        genders_disabled: base.genders_disabled || args.no_genders,
        max_version,
    }
}

fn print_hits(hits: &[Hit], format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(hits)?;
            println!("{}", json);
        }
        "jsonl" => {
            for hit in hits {
                let json = serde_json::to_string(hit)?;
                println!("{}", json);
            }
        }
        _ => {
            for hit in hits {
                let others = hit.aliases.get(1..).unwrap_or_default().join(", ");
                println!("{}\t{}\t{}", hit.glyph, hit.name, others);
            }
        }
    }
    Ok(())
}
