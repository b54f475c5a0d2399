//! REPL Commands
//!
//! The state shared across commands and the handler behind each one.
//! Handlers print straight to stdout; the prompt loop owns error
//! reporting, so they only return errors.

use rand::Rng;

use crate::api::PokeApiClient;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::pokedex::Pokedex;
use crate::repl::registry;

// == Constants ==
/// Base experience at which the catch chance bottoms out.
const MAX_BASE_EXPERIENCE: f64 = 350.0;
/// Catch chance floor for very strong pokemon.
const MIN_CATCH_CHANCE: f64 = 0.01;
/// Column the help descriptions line up on.
const HELP_PADDING: usize = 10;

// == App State ==
/// State carried across commands for one REPL session.
#[derive(Debug)]
pub struct AppState {
    /// API access, with the response cache behind it.
    pub client: PokeApiClient,
    /// Pokemon caught so far.
    pub pokedex: Pokedex,
    /// URL of the next location page, if any.
    pub next_page: Option<String>,
    /// URL of the previous location page, if any.
    pub prev_page: Option<String>,
}

impl AppState {
    /// Builds the session state. The map cursor starts at the first
    /// page of location areas.
    ///
    /// # Arguments
    /// * `config` - Runtime configuration
    ///
    /// # Returns
    /// * `Result<Self>` - The state, or an error if the client could
    ///   not be built
    pub fn new(config: &Config) -> Result<Self> {
        let client = PokeApiClient::new(config)?;
        let next_page = Some(client.first_location_page_url());

        Ok(Self {
            client,
            pokedex: Pokedex::new(),
            next_page,
            prev_page: None,
        })
    }
}

// == Help ==
/// Prints the welcome banner and the command table.
pub fn command_help() -> Result<()> {
    println!("Welcome to the Pokedex!");
    println!("Usage:");

    for command in registry::COMMANDS {
        let spaces = " ".repeat(HELP_PADDING.saturating_sub(command.name.len()));
        println!("\t{}:{}{}", command.name, spaces, command.description);
    }

    println!();
    Ok(())
}

// == Map ==
/// Prints the next page of location areas and advances the cursor.
///
/// # Errors
/// Returns `NoMoreLocations` when the last page has already been shown.
pub async fn command_map(state: &mut AppState) -> Result<()> {
    let url = state.next_page.clone().ok_or(PokedexError::NoMoreLocations)?;
    print_location_page(state, &url).await
}

// == Map Back ==
/// Prints the previous page of location areas and moves the cursor back.
///
/// # Errors
/// Returns `NoPreviousLocations` on the first page.
pub async fn command_map_back(state: &mut AppState) -> Result<()> {
    let url = state.prev_page.clone().ok_or(PokedexError::NoPreviousLocations)?;
    print_location_page(state, &url).await
}

/// Fetches one page of location areas, prints its names, and repoints
/// both cursors at the page's neighbours.
async fn print_location_page(state: &mut AppState, url: &str) -> Result<()> {
    let page = state.client.fetch_location_page(url).await?;

    for area in &page.results {
        println!("{}", area.name);
    }

    state.next_page = page.next;
    state.prev_page = page.previous;

    Ok(())
}

// == Explore ==
/// Lists the pokemon that can be encountered at a location area.
///
/// # Arguments
/// * `args` - The location area name as the first word
///
/// # Errors
/// Returns `MissingArgument` when no location was given.
pub async fn command_explore(state: &AppState, args: &[&str]) -> Result<()> {
    let area = args.first().ok_or(PokedexError::MissingArgument(
        "pass in the location you would like to explore",
    ))?;

    let detail = state.client.fetch_location_area(area).await?;

    println!("Exploring {}...", area);
    println!("Found Pokemon:");
    for encounter in &detail.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }

    Ok(())
}

// == Catch ==
/// Throws a pokeball at the named pokemon. Weaker pokemon are easier to
/// catch; a successful throw records it in the pokedex.
///
/// # Arguments
/// * `args` - The pokemon name as the first word
///
/// # Errors
/// Returns `MissingArgument` when no name was given.
pub async fn command_catch(state: &mut AppState, args: &[&str]) -> Result<()> {
    let name = args.first().ok_or(PokedexError::MissingArgument(
        "must pass in the name of the pokemon to catch",
    ))?;

    let pokemon = state.client.fetch_pokemon(name).await?;

    println!("Throwing a Pokeball at {}... ", name);

    if rand::thread_rng().gen::<f64>() > catch_chance(&pokemon) {
        println!("{} escaped!", name);
        return Ok(());
    }

    println!("{} was caught!", name);
    state.pokedex.record(*name, pokemon);

    Ok(())
}

/// Chance in (0, 1] of catching a pokemon, scaled down by its base
/// experience and floored so nothing is uncatchable.
fn catch_chance(pokemon: &Pokemon) -> f64 {
    let base_xp = f64::from(pokemon.base_experience.unwrap_or(0));
    let chance = 1.0 - base_xp / MAX_BASE_EXPERIENCE;

    if chance <= 0.0 {
        MIN_CATCH_CHANCE
    } else {
        chance
    }
}

// == Inspect ==
/// Prints the stats of a pokemon that has already been caught.
///
/// # Arguments
/// * `args` - The pokemon name as the first word
///
/// # Errors
/// Returns `MissingArgument` when no name was given and `NotCaught`
/// when the pokemon is not in the pokedex.
pub fn command_inspect(state: &AppState, args: &[&str]) -> Result<()> {
    let name = args.first().ok_or(PokedexError::MissingArgument(
        "pass in the name of the pokemon to inspect",
    ))?;

    let pokemon = state.pokedex.get(name).ok_or(PokedexError::NotCaught)?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);

    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  - {}: {}", stat.stat.name, stat.base_stat);
    }

    println!("Types:");
    for pokemon_type in &pokemon.types {
        println!("  - {}", pokemon_type.kind.name);
    }

    Ok(())
}

// == Pokedex ==
/// Lists every caught pokemon by name.
pub fn command_pokedex(state: &AppState) -> Result<()> {
    println!("Your Pokedex:");
    for name in state.pokedex.names() {
        println!("  - {}", name);
    }

    Ok(())
}
