use clap::{Parser, Subcommand};
use omdb_client::{
    DEFAULT_BASE_URL, Details, LookupResult, MetadataLookup, OmdbClient, OmdbError, Query,
    SearchResponse,
};
use std::process;
use std::time::Duration;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "omdb")]
#[command(about = "Look up movies, series and episodes on the OMDb API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        long,
        global = true,
        env = "OMDB_API_KEY",
        hide_env_values = true,
        help = "OMDb API key"
    )]
    api_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "OMDB_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        help = "API endpoint"
    )]
    base_url: String,

    #[arg(long, global = true, default_value = "30", help = "Request timeout in seconds")]
    timeout: u64,

    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Look up a record by IMDb ID")]
    Id {
        #[arg(help = "IMDb ID (e.g., tt0083658)")]
        imdb_id: String,
    },

    #[command(about = "Look up a record by its exact title")]
    Title {
        title: String,

        #[arg(long = "type", help = "movie, series or episode")]
        search_type: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long, help = "short or full")]
        plot: Option<String>,
    },

    #[command(about = "Search by free text")]
    Search {
        text: String,

        #[arg(long = "type", help = "movie, series or episode")]
        search_type: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long, help = "Result page, 1 to 100")]
        page: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Omdb(#[from] OmdbError),

    #[error("Failed to set up HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_details(details: &Details) {
    println!("{} ({})", details.title, details.year);
    println!("  IMDb ID:  {}", details.imdb_id);
    println!("  Rated:    {}", details.rated);
    println!("  Released: {}", details.released);
    println!("  Runtime:  {}", details.runtime);
    println!("  Genre:    {}", details.genre);
    println!("  Director: {}", details.director);
    println!("  Writer:   {}", details.writer);
    println!("  Actors:   {}", details.actors);
    println!("  Language: {}", details.language);
    println!("  Country:  {}", details.country);
    println!("  Awards:   {}", details.awards);
    println!(
        "  IMDb:     {} ({} votes), Metascore {}",
        details.imdb_rating, details.imdb_votes, details.metascore
    );
    for rating in &details.ratings {
        println!("  {}: {}", rating.source, rating.value);
    }
    println!("\n{}", details.plot);
}

fn print_lookup(result: &LookupResult) {
    println!("=== {} ===\n", result.kind());
    print_details(result.details());
    println!();

    match result {
        LookupResult::Movie(movie) => {
            println!("DVD:        {}", movie.dvd);
            println!("Box office: {}", movie.box_office);
            println!("Production: {}", movie.production);
            println!("Website:    {}", movie.website);
        }
        LookupResult::Series(series) => {
            println!("Seasons: {}", series.total_seasons);
        }
        LookupResult::Episode(episode) => {
            println!(
                "Season {}, episode {} of series {}",
                episode.season, episode.episode, episode.series_id
            );
        }
    }
}

fn print_search(response: &SearchResponse) {
    println!("=== Search Results ===\n");
    for (index, hit) in response.search.iter().enumerate() {
        println!(
            "{:>3}. {} ({}) [{}] {}",
            index + 1,
            hit.title,
            hit.year,
            hit.kind,
            hit.imdb_id
        );
    }
    println!(
        "\nShowing {} of {} result(s).",
        response.search.len(),
        response.total_results
    );
}

fn run(cli: Cli) -> Result<(), CliError> {
    let http = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;

    let client =
        OmdbClient::new(cli.api_key.unwrap_or_default(), http).with_base_url(cli.base_url);

    match cli.command {
        Commands::Id { imdb_id } => {
            let result = client.lookup_by_id(&Query::by_id(imdb_id))?;
            render_lookup(result.as_ref(), cli.json)?;
        }
        Commands::Title {
            title,
            search_type,
            year,
            plot,
        } => {
            let query = Query {
                title: Some(title),
                search_type,
                year,
                plot,
                ..Query::default()
            };
            let result = client.lookup_by_title(&query)?;
            render_lookup(result.as_ref(), cli.json)?;
        }
        Commands::Search {
            text,
            search_type,
            year,
            page,
        } => {
            let query = Query {
                title: Some(text),
                search_type,
                year,
                page,
                ..Query::default()
            };
            let response = client.search_by_text(&query)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_search(&response);
            }
        }
    }

    Ok(())
}

fn render_lookup(result: Option<&LookupResult>, json: bool) -> Result<(), CliError> {
    match result {
        Some(result) if json => println!("{}", serde_json::to_string_pretty(result)?),
        Some(result) => print_lookup(result),
        None => println!("The API returned a record of an unsupported type."),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
