use anyhow::{Context, Result};
use catalog::{Catalog, Category, Movie};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use grid_filter::{
    CategoryList, MovieList, NumericPolicy, parse_category_filters, parse_movie_filters,
};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

/// FilmGrid - search and filter a film catalog
#[derive(Parser)]
#[command(name = "film-grid")]
#[command(about = "Search and filter movies and categories from a JSON catalog", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    data: PathBuf,

    /// What to do with filter bounds that are not numbers
    #[arg(long, value_enum, default_value_t = PolicyArg::Exclude)]
    numeric_policy: PolicyArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the movie list
    Movies {
        /// Case-sensitive substring to search titles for
        #[arg(long)]
        search: Option<String>,

        /// Structured filters as JSON, e.g. '{"year":{"type":"range","filter":2000,"filterTo":2010}}'
        #[arg(long)]
        filters: Option<String>,
    },

    /// Filter the category list
    Categories {
        /// Case-sensitive substring to search category names for
        #[arg(long)]
        search: Option<String>,

        /// Structured filters as JSON, e.g. '{"name":{"type":"valueSet","values":["Drama"]}}'
        #[arg(long)]
        filters: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Fail the query
    Reject,
    /// Keep the filter, match no records
    Exclude,
    /// Ignore the bad bound
    Coerce,
}

impl From<PolicyArg> for NumericPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reject => NumericPolicy::Reject,
            PolicyArg::Exclude => NumericPolicy::Exclude,
            PolicyArg::Coerce => NumericPolicy::Coerce,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let policy = NumericPolicy::from(cli.numeric_policy);

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;
    tracing::debug!("Catalog loaded in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Movies { search, filters } => {
            handle_movies(catalog.movies, search, filters.as_deref(), policy)?
        }
        Commands::Categories { search, filters } => {
            handle_categories(catalog.categories, search, filters.as_deref())?
        }
    }

    Ok(())
}

fn parse_filter_arg(filters: &str) -> Result<Value> {
    serde_json::from_str(filters).context("--filters is not valid JSON")
}

/// Handle the 'movies' command
fn handle_movies(
    movies: Vec<Movie>,
    search: Option<String>,
    filters: Option<&str>,
    policy: NumericPolicy,
) -> Result<()> {
    let mut list = MovieList::new(movies);

    if let Some(search) = search {
        list.apply_search_value(search);
    }
    if let Some(filters) = filters {
        let doc = parse_filter_arg(filters)?;
        let filters = parse_movie_filters(&doc, policy).context("Invalid movie filters")?;
        list.apply_filters_value(filters);
    }

    let filtered = list.get_filtered_movies();
    println!(
        "{}",
        format!("Movies ({} of {}):", filtered.len(), list.movies().len()).bold().blue()
    );
    for (rank, movie) in filtered.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), format_movie(movie));
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(
    categories: Vec<Category>,
    search: Option<String>,
    filters: Option<&str>,
) -> Result<()> {
    let mut list = CategoryList::new(categories);

    if let Some(search) = search {
        list.apply_search_value(search);
    }
    if let Some(filters) = filters {
        let doc = parse_filter_arg(filters)?;
        let filters = parse_category_filters(&doc).context("Invalid category filters")?;
        list.apply_filters_value(filters);
    }

    let filtered = list.get_filtered_categories();
    println!(
        "{}",
        format!("Categories ({} of {}):", filtered.len(), list.categories().len()).bold().blue()
    );
    for category in &filtered {
        println!("{} {} ({} movies)", "•".green(), category.name, category.movies.len());
        for movie in &category.movies {
            println!("    - {}", format_movie(movie));
        }
    }
    Ok(())
}

/// One-line summary: title, year, rating and awards if any
fn format_movie(movie: &Movie) -> String {
    let mut line = format!("{} ({}) - Rating: {:.1}", movie.title, movie.year, movie.rating);
    if !movie.awards.is_empty() {
        line.push_str(&format!(" [{}]", movie.awards.join(", ")));
    }
    line
}
