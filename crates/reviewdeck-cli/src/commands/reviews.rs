use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use review_agg_config::{Config, CredentialStore, PathManager};
use review_agg_core::{AggregatedReviews, ReviewAggregator};
use review_agg_models::{ReviewFilter, SortOrder};
use review_agg_sources::SourceRegistry;
use tracing::debug;

pub struct ReviewsArgs {
    pub business: String,
    pub platform: String,
    pub rating: String,
    pub date_from: String,
    pub date_to: String,
    pub answered: bool,
    pub unanswered: bool,
    pub sort: SortOrder,
}

pub async fn run_reviews(args: ReviewsArgs, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    if !config_file.exists() {
        return Err(eyre!(
            "Configuration file not found at {}. Run 'reviewdeck config google' first",
            config_file.display()
        ));
    }

    let config = Config::load_from_file(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

    let mut credentials = CredentialStore::new(path_manager.credentials_file());
    credentials.load().map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let entry = config
        .find_business(&args.business)
        .ok_or_else(|| eyre!("Unknown business id '{}'. See 'reviewdeck businesses'", args.business))?;

    let registry = SourceRegistry::new();
    let sources = registry
        .create_enabled_sources(&config, &credentials)
        .map_err(|e| eyre!("{}", e))?;
    if sources.is_empty() {
        return Err(eyre!(
            "No review platforms are enabled. Run 'reviewdeck config google' or 'reviewdeck config facebook'"
        ));
    }
    debug!(
        "Fetching reviews for {} from {} enabled source(s)",
        entry.id,
        sources.len()
    );

    // Answered/unanswered flags fold into the tri-state response filter.
    let has_response = if args.answered {
        Some(true)
    } else if args.unanswered {
        Some(false)
    } else {
        None
    };

    let mut filter = ReviewFilter::from_params(
        &args.platform,
        &args.rating,
        &args.date_from,
        &args.date_to,
    );
    filter.has_response = has_response;
    filter.sort = args.sort;

    let aggregator = ReviewAggregator::new(sources);
    let result = aggregator.fetch_business(entry, &filter).await?;

    match output.format() {
        OutputFormat::Human => print_human(&result, output),
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&result)?);
        }
    }

    Ok(())
}

fn print_human(result: &AggregatedReviews, output: &Output) {
    if output.is_quiet() {
        return;
    }

    if result.business.is_empty() {
        output.warn("No business summary available from any provider");
    } else {
        println!(
            "\n{}  {} ({} reviews on record)",
            result.business.name.bold(),
            format!("★ {:.1}", result.business.rating).yellow(),
            result.business.review_count
        );
    }

    if result.reviews.is_empty() {
        output.info("No reviews match the current filter");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Date").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Platform").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Author").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Review").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Replied").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for review in &result.reviews {
        table.add_row(vec![
            Cell::new(review.date.format("%Y-%m-%d").to_string()),
            Cell::new(review.platform.to_string()),
            Cell::new("★".repeat(review.rating as usize)),
            Cell::new(&review.author),
            Cell::new(truncate(&review.content, 60)),
            Cell::new(if review.response.is_some() { "yes" } else { "no" }),
        ]);
    }

    println!("{}", table);
    println!("{} reviews shown", result.reviews.len());
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
