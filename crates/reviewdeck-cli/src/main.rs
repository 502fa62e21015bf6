use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{businesses, config, reviews};
use review_agg_models::SortOrder;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reviewdeck")]
#[command(about = "ReviewDeck - All of your customer reviews in one place")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, filter, and display reviews for a business
    #[command(long_about = "Fetch reviews from every platform the business is linked to, merge them into one collection, and display it filtered and sorted. Provider outages degrade to an empty contribution rather than failing the whole command.")]
    Reviews {
        /// Business id from the [[businesses]] section of config.toml
        #[arg(long)]
        business: String,

        /// Only show reviews from one platform (google, facebook, trustpilot, yelp), or 'all'
        #[arg(long, default_value = "all")]
        platform: String,

        /// Only show reviews with this exact star rating (1-5; 0 disables the filter)
        #[arg(long, default_value = "0")]
        rating: String,

        /// Only show reviews on or after this date (YYYY-MM-DD or RFC 3339)
        #[arg(long, default_value = "")]
        date_from: String,

        /// Only show reviews on or before this date (YYYY-MM-DD or RFC 3339)
        #[arg(long, default_value = "")]
        date_to: String,

        /// Only show reviews the business has replied to
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "unanswered")]
        answered: bool,

        /// Only show reviews without a reply
        #[arg(long, action = ArgAction::SetTrue)]
        unanswered: bool,

        /// Sort order
        #[arg(long, default_value = "newest-first", value_enum)]
        sort: SortArg,
    },

    /// Configure credentials and settings
    #[command(long_about = "Manage configuration and credentials for ReviewDeck. Use subcommands to view settings or store API credentials for Google Places and Facebook.")]
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },

    /// List businesses linked in the configuration
    Businesses,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks sensitive data)
    Show {
        /// Show full configuration including masked secrets
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Configure the Google Places API key
    #[command(long_about = "Store the Google Places API key and enable the Google source. The key is kept in the credentials file, not in config.toml.")]
    Google {
        /// API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Configure the Facebook Graph access token
    #[command(long_about = "Store the Facebook Graph API page access token and enable the Facebook source. The token is kept in the credentials file, not in config.toml.")]
    Facebook {
        /// Page access token (if not provided, will prompt)
        #[arg(long)]
        access_token: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    NewestFirst,
    OldestFirst,
    HighestRating,
    LowestRating,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NewestFirst => SortOrder::NewestFirst,
            SortArg::OldestFirst => SortOrder::OldestFirst,
            SortArg::HighestRating => SortOrder::HighestRating,
            SortArg::LowestRating => SortOrder::LowestRating,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;
    let out = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Reviews {
            business,
            platform,
            rating,
            date_from,
            date_to,
            answered,
            unanswered,
            sort,
        } => {
            let args = reviews::ReviewsArgs {
                business,
                platform,
                rating,
                date_from,
                date_to,
                answered,
                unanswered,
                sort: sort.into(),
            };
            reviews::run_reviews(args, &out).await?;
        }
        Commands::Config { cmd } => config::run_config(cmd, &out)?,
        Commands::Businesses => businesses::run_businesses(&out)?,
    }

    Ok(())
}
