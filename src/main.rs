//! Command-line front end: searches a data-source snapshot and prints JSON.

use std::env;

use clap::{Args, Parser, Subcommand};
use config::Config;
use dotenvy::dotenv;
use serde::Serialize;

use crm_search::forms::search::SearchForm;
use crm_search::models::config::SearchConfig;
use crm_search::repository::JsonRepository;
use crm_search::search::SearchMatcher;
use crm_search::services::{ServiceError, ServiceResult, customers, tickets};

#[derive(Debug, Parser)]
#[command(name = "crm-search")]
#[command(about = "Search tickets and customers in a data-source snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search tickets
    Tickets {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Search customers
    Customers {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the ticket board counters
    Stats,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Free-text query; words are joined with single spaces
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    #[arg(long)]
    page: Option<usize>,

    #[arg(long)]
    per_page: Option<usize>,
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Keep only tickets carrying this tag (repeatable)
    #[arg(long = "tag", value_name = "NAME")]
    tags: Vec<String>,

    #[arg(long)]
    show_completed: bool,

    #[arg(long)]
    show_deleted: bool,
}

impl SearchArgs {
    fn into_form(self) -> SearchForm {
        SearchForm {
            search: (!self.query.is_empty()).then(|| self.query.join(" ")),
            page: self.page,
            per_page: self.per_page,
            ..SearchForm::default()
        }
    }
}

impl ViewArgs {
    fn apply(self, form: SearchForm) -> SearchForm {
        SearchForm {
            tags: self.tags,
            show_completed: self.show_completed,
            show_deleted: self.show_deleted,
            ..form
        }
    }
}

fn print_json<T: Serialize>(result: ServiceResult<T>) -> Result<(), String> {
    let payload = result.map_err(|err| err.to_string())?;
    let json = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn run(command: Command, config: &SearchConfig) -> Result<(), String> {
    let locale = config
        .locale()
        .map_err(|err| ServiceError::from(err).to_string())?;
    let page_size = config
        .page_size()
        .map_err(|err| ServiceError::from(err).to_string())?;
    let repo = JsonRepository::new(&config.data_path);
    let matcher = SearchMatcher::new(locale);

    log::info!(
        "Running {command:?} against {} with locale {locale}",
        repo.path().display()
    );

    match command {
        Command::Stats => print_json(tickets::ticket_stats(&repo, chrono::Utc::now())),
        Command::Tickets { search, view } => {
            let query = view
                .apply(search.into_form())
                .into_query(page_size)
                .map_err(|err| ServiceError::from(err).to_string())?;
            print_json(tickets::search_tickets(&repo, &matcher, query))
        }
        Command::Customers { search } => {
            let query = search
                .into_form()
                .into_query(page_size)
                .map_err(|err| ServiceError::from(err).to_string())?;
            print_json(customers::search_customers(&repo, &matcher, query))
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let search_config = match settings.try_deserialize::<SearchConfig>() {
        Ok(search_config) => search_config,
        Err(err) => {
            log::error!("Error loading search config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli.command, &search_config) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
