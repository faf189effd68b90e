use clap::Parser;
use rhyme_finder::app::report;
use rhyme_finder::core::syllables::syllable_label;
use rhyme_finder::utils::error::ErrorCategory;
use rhyme_finder::utils::logger::{self, LogFormat};
use rhyme_finder::utils::validation::Validate;
use rhyme_finder::{
    filter_outcome, CliArgs, DatamuseClient, EncodedBlockList, SearchError, SyllableFilter,
    WordSearch,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = args.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let request = args.search_request();
    if request.syllable_count > 0 && !request.syllable_filter_enabled() {
        tracing::warn!("--syllables has no effect without --rhyme");
    }

    let mut block_list = EncodedBlockList::bundled();
    if let Some(path) = &args.blocklist {
        block_list.extend(EncodedBlockList::load_file(path)?);
    }

    let client = DatamuseClient::new(&args.client_config()?)?;
    let search = WordSearch::new(client);

    let outcome = match search.search(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "Search failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let filter = if request.syllable_filter_enabled() {
        SyllableFilter::from_request(&request)
    } else {
        SyllableFilter::default()
    };
    let filtered = filter_outcome(&outcome, &block_list, filter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    tracing::info!("{}", report::summary(&outcome));
    println!("{}", report::summary(&outcome));
    if filter.is_active() {
        println!(
            "Filtered to {} {} {}.",
            match filter.comparison {
                rhyme_finder::SyllableComparison::Exact => "exactly",
                rhyme_finder::SyllableComparison::LessThan => "fewer than",
            },
            filter.requested,
            syllable_label(filter.requested)
        );
    }
    if let Some(table) = report::render_table(&filtered) {
        println!();
        println!("{}", table);
    }

    Ok(())
}

fn exit_code(error: &SearchError) -> i32 {
    match error.category() {
        ErrorCategory::Input | ErrorCategory::Config => 1,
        ErrorCategory::Upstream => 2,
        ErrorCategory::Transport => 3,
    }
}
