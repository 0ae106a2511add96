use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use bs_app::{CatalogStatus, CatalogViewState, DetailStatus, DetailViewState, SummarizeOutcome};
use bs_core::BookId;
use booksum_lib::bootstrap::config::DEFAULT_CONFIG_FILE;
use booksum_lib::{apply_env_overrides, init_tracing_subscriber, load_config, wire_dependencies};

#[derive(Parser)]
#[command(name = "booksum")]
#[command(about = "Browse public-domain books and request AI summaries", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print the controller state as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Search term; lists the whole catalog when omitted
        term: Option<String>,
        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one book's details
    Show {
        /// Catalog id of the book
        id: u64,
    },
    /// Summarize a book up to a page
    Summarize {
        /// Catalog id of the book
        id: u64,
        /// Page to summarize up to (1-5000)
        #[arg(short, long)]
        page: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    apply_env_overrides(&mut config)?;
    init_tracing_subscriber(config.logging.log_dir.as_deref())?;

    let deps = wire_dependencies(&config)?;

    match cli.command {
        Commands::Search { term, page } => {
            let controller = deps.catalog_query();
            controller.set_search_term(term.unwrap_or_default());
            controller.submit_search().await;
            while controller.state().query.current_page() < page {
                if !controller.next_page().await {
                    break;
                }
            }
            let state = controller.state();
            emit(cli.json, &state, render_catalog)?;
            if let Some(error) = state.error {
                bail!(error.message);
            }
        }
        Commands::Show { id } => {
            let controller = deps.book_detail();
            controller.load_detail(BookId::new(id)).await;
            let state = controller.state();
            emit(cli.json, &state, render_detail)?;
            if let Some(error) = state.load_error {
                bail!(error.message);
            }
        }
        Commands::Summarize { id, page } => {
            let controller = deps.book_detail();
            controller.load_detail(BookId::new(id)).await;
            if let Some(page) = page {
                controller.set_page_number(&page);
            }
            let outcome = controller.summarize().await;
            let state = controller.state();
            emit(cli.json, &state, render_summary)?;
            if outcome != SummarizeOutcome::Completed {
                if let Some(error) = state.load_error.or(state.summary_error) {
                    bail!(error.message);
                }
                bail!("Summary was not generated.");
            }
        }
    }

    Ok(())
}

fn emit<T: Serialize>(json: bool, state: &T, render: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        render(state);
    }
    Ok(())
}

fn render_catalog(state: &CatalogViewState) {
    if state.status != CatalogStatus::Loaded {
        return;
    }
    if let Some(message) = state.empty_result_message() {
        println!("{message}");
        return;
    }
    for book in &state.books {
        println!("{:>8}  {}  ({})", book.id, book.title, book.author_line());
    }
    if state.show_pagination() {
        println!();
        println!("{}", state.page_label());
    }
}

fn render_detail(state: &DetailViewState) {
    let Some(book) = state.book.as_ref() else {
        if state.detail_status == DetailStatus::NotFound {
            println!("Book {} is not in the catalog.", display_id(state));
        }
        return;
    };

    println!("{}", book.title());
    println!("by {}", book.author_line());
    if !book.languages.is_empty() {
        println!("Languages: {}", book.languages.join(", "));
    }
    if !book.subjects.is_empty() {
        println!("Subjects: {}", book.subjects.join("; "));
    }
    if let Some(downloads) = book.download_count {
        println!("Downloads: {downloads}");
    }
    if let Some(cover) = book.book.cover_image_url() {
        println!("Cover: {cover}");
    }
    match book.book.plain_text_url() {
        Some(url) => println!("Plain text: {url}"),
        None => println!("Plain text: not available"),
    }
}

fn render_summary(state: &DetailViewState) {
    let (Some(heading), Some(byline), Some(summary)) = (
        state.summary_heading(),
        state.summary_byline(),
        state.summary.as_ref(),
    ) else {
        return;
    };

    println!("{heading}");
    println!("{byline}");
    println!();
    println!("{}", summary.summary);
    if let Some(original) = state.original_text.as_deref() {
        println!();
        println!("--- Original text ---");
        println!("{original}");
    }
}

fn display_id(state: &DetailViewState) -> String {
    state
        .book_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string())
}
