//! Terminal presentation layer: card list, detail view, and the interactive
//! browse loop.
//!
//! This is the consumer side of the pipeline. It owns a [`BrowseSession`]
//! (filters, search, current page, open detail view) and renders whatever
//! the cache → filter → paginate chain produces. Loading and error states
//! are rendered explicitly; an error is a dead end that the user re-triggers
//! by re-running the command.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};

use crate::application::filter::{FilmFilter, HomeworldFilter, SpeciesFilter};
use crate::application::pagination::Page;
use crate::application::session::BrowseSession;
use crate::domain::entities::{AggregateResult, Character, Planet};
use crate::domain::measurement::Measurement;
use crate::state::AppState;

/// Browse-and-filter catalog for the galactic character dataset.
#[derive(Parser)]
#[command(name = "swapi-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the remote API base URL (also: SWAPI_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List characters with optional search and filters
    List {
        /// Free-text name search (case-insensitive substring)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Species filter
        #[arg(long, value_enum, default_value_t)]
        species: SpeciesFilter,

        /// Homeworld filter
        #[arg(long, value_enum, default_value_t)]
        homeworld: HomeworldFilter,

        /// Film filter by episode id (1, 2, 3)
        #[arg(long)]
        film: Option<u64>,

        /// Page to display (12 characters per page)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show one character with homeworld detail
    Show {
        /// Character name (case-insensitive substring, first match wins)
        name: String,
    },

    /// Browse the catalog interactively
    Browse,
}

/// Dispatches a parsed command against the wired pipeline.
pub async fn run(command: Commands, state: AppState) -> Result<()> {
    match command {
        Commands::List {
            search,
            species,
            homeworld,
            film,
            page,
        } => run_list(&state, search, species, homeworld, film, page).await,
        Commands::Show { name } => run_show(&state, &name).await,
        Commands::Browse => run_browse(&state).await,
    }
}

/// Fetches the aggregate through the session cache, rendering loading and
/// error states.
async fn load_catalog(state: &AppState) -> Result<Arc<AggregateResult>> {
    println!(
        "{}",
        "Loading characters from a galaxy far, far away...".dimmed()
    );

    match state.cache.get().await {
        Ok(aggregate) => Ok(aggregate),
        Err(e) => {
            println!();
            println!(
                "{}",
                "Failed to load characters. The Force is not with us right now."
                    .red()
                    .bold()
            );
            Err(anyhow::anyhow!(e))
        }
    }
}

async fn run_list(
    state: &AppState,
    search: String,
    species: SpeciesFilter,
    homeworld: HomeworldFilter,
    film: Option<u64>,
    page: u32,
) -> Result<()> {
    let aggregate = load_catalog(state).await?;

    let mut session = BrowseSession::new();
    session.set_search(search);
    session.set_species(species);
    session.set_homeworld(homeworld);
    session.set_film(film.map(FilmFilter::Episode).unwrap_or_default());
    session.go_to_page(page, &aggregate.results);

    let view = session.visible(&aggregate.results);
    print_card_page(&view, session.page());

    Ok(())
}

async fn run_show(state: &AppState, name: &str) -> Result<()> {
    let aggregate = load_catalog(state).await?;

    let query = name.trim().to_lowercase();
    let Some(character) = aggregate
        .results
        .iter()
        .find(|c| c.name.to_lowercase().contains(&query))
    else {
        println!("{} {}", "No character matches".red(), name.bold());
        return Ok(());
    };

    let mut session = BrowseSession::new();
    session.select(&character.url);
    print_detail(state, &session, character).await;

    Ok(())
}

async fn run_browse(state: &AppState) -> Result<()> {
    let aggregate = load_catalog(state).await?;
    let mut session = BrowseSession::new();

    loop {
        let view = session.visible(&aggregate.results);
        print_card_page(&view, session.page());

        let choices = [
            "Next page",
            "Previous page",
            "Search",
            "Filter: species",
            "Filter: homeworld",
            "Filter: film",
            "Inspect character",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("Action")
            .items(&choices)
            .default(0)
            .interact()?;

        match choice {
            0 => session.next_page(&aggregate.results),
            1 => session.previous_page(&aggregate.results),
            2 => {
                let query: String = Input::new()
                    .with_prompt("Search name (empty clears)")
                    .allow_empty(true)
                    .interact_text()?;
                session.set_search(query);
            }
            3 => {
                let options = ["all", "human", "droid", "wookiee"];
                let picked = Select::new()
                    .with_prompt("Species")
                    .items(&options)
                    .default(0)
                    .interact()?;
                session.set_species(match picked {
                    1 => SpeciesFilter::Human,
                    2 => SpeciesFilter::Droid,
                    3 => SpeciesFilter::Wookiee,
                    _ => SpeciesFilter::All,
                });
            }
            4 => {
                let options = ["all", "tatooine", "alderaan", "naboo"];
                let picked = Select::new()
                    .with_prompt("Homeworld")
                    .items(&options)
                    .default(0)
                    .interact()?;
                session.set_homeworld(match picked {
                    1 => HomeworldFilter::Tatooine,
                    2 => HomeworldFilter::Alderaan,
                    3 => HomeworldFilter::Naboo,
                    _ => HomeworldFilter::All,
                });
            }
            5 => {
                let options = ["all", "episode 1", "episode 2", "episode 3"];
                let picked = Select::new()
                    .with_prompt("Film")
                    .items(&options)
                    .default(0)
                    .interact()?;
                session.set_film(match picked {
                    n @ 1..=3 => FilmFilter::Episode(n as u64),
                    _ => FilmFilter::All,
                });
            }
            6 => {
                if view.items.is_empty() {
                    println!("{}", "Nothing on this page to inspect".yellow());
                    continue;
                }
                let names: Vec<&str> = view.items.iter().map(|c| c.name.as_str()).collect();
                let picked = Select::new()
                    .with_prompt("Character")
                    .items(&names)
                    .default(0)
                    .interact()?;
                let character = view.items[picked];

                session.select(&character.url);
                print_detail(state, &session, character).await;
                session.close_detail();
            }
            _ => break,
        }
    }

    Ok(())
}

/// Renders one page of the card grid with a pagination footer.
fn print_card_page(view: &Page<&Character>, current_page: u32) {
    println!();

    if view.items.is_empty() {
        println!("{}", "No characters match the current filters".yellow());
    }

    for character in &view.items {
        let height = Measurement::parse(&character.height);
        println!(
            "  {}  {}",
            character.name.bright_yellow().bold(),
            format!(
                "{} | born {} | {} | {} film(s)",
                character.gender,
                character.birth_year,
                height.format_height(),
                character.films.len()
            )
            .dimmed()
        );
    }

    println!();
    let mut footer = format!("page {current_page}/{}", view.total_pages);
    if view.has_previous {
        footer = format!("< {footer}");
    }
    if view.has_next {
        footer = format!("{footer} >");
    }
    println!("  {}", footer.bright_blue());
    println!();
}

/// Renders the detail view, fetching homeworld (and species label) on demand.
///
/// Detail fetch failures are reported here and never affect the character
/// list; the session's staleness guard drops responses for a character that
/// is no longer selected.
async fn print_detail(state: &AppState, session: &BrowseSession, character: &Character) {
    println!();
    println!("  {}", character.name.bright_yellow().bold());
    println!(
        "    {}  {}",
        "Height:".bright_white(),
        Measurement::parse(&character.height).format_height()
    );
    println!(
        "    {}    {}",
        "Mass:".bright_white(),
        Measurement::parse(&character.mass).format_mass()
    );
    println!("    {}   {}", "Birth:".bright_white(), character.birth_year);
    println!(
        "    {}   {}",
        "Added:".bright_white(),
        character.created.format("%d-%m-%Y")
    );
    println!(
        "    {}   {} film(s)",
        "Films:".bright_white(),
        character.films.len()
    );

    let species_label = match state.catalog.get_species(character).await {
        Ok(Some(species)) => species.name,
        // An empty species list means a baseline human in the source data.
        Ok(None) => "Human".to_string(),
        Err(_) => "Unknown".to_string(),
    };
    println!("    {} {}", "Species:".bright_white(), species_label);

    println!();
    println!("  {}", "Homeworld".bright_white().bold());
    println!("    {}", "loading...".dimmed());

    match state.catalog.get_homeworld(character).await {
        Ok(planet) => match session.accept_detail(&character.url, planet) {
            Some(planet) => print_homeworld(&planet),
            None => println!("    {}", "(view closed before data arrived)".dimmed()),
        },
        Err(_) => println!("    {}", "Unable to load homeworld data".red()),
    }
    println!();
}

fn print_homeworld(planet: &Planet) {
    println!("    {}       {}", "Name:".bright_white(), planet.name);
    println!(
        "    {} {}",
        "Population:".bright_white(),
        planet.population().format_population()
    );
    println!("    {}    {}", "Terrain:".bright_white(), planet.terrain);
    println!("    {}    {}", "Climate:".bright_white(), planet.climate);
}
