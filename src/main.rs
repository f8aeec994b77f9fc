//! Gamedex CLI application entry point
//!
//! This is the main executable for the gamedex catalog browser. It fetches
//! the FreeToGame game list once per invocation, derives the genre filter
//! from it, and renders result cards in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! gamedex
//! gamedex browse
//!
//! # Print the whole catalog, or one genre
//! gamedex list
//! gamedex list --genre Shooter
//!
//! # Print the genres present in the catalog
//! gamedex genres
//!
//! # Quiet mode (tab-separated title/url pairs, for scripting)
//! gamedex -q list
//! ```
//!
//! # Configuration
//!
//! The catalog endpoint and relay prefix live in the user's config directory
//! (`~/.config/gamedex/config.toml` on Linux), created with defaults on
//! first run.

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};

use gamedex::{
    GamedexError,
    catalog::{CatalogClient, GameSource},
    cli::{Cli, Commands},
    config::GamedexConfig,
    facets::{build_facets, facet_label},
    session::BrowseSession,
    ui::TerminalUi,
};

type Result<T> = std::result::Result<T, GamedexError>;

/// Handle the browse command - interactive genre filter over the catalog
///
/// Loads the catalog once, then loops: the user picks a genre facet, the
/// matching cards are re-rendered from the in-memory collection, and they
/// may pick a game to open in the system browser. Escape (or the quit
/// entry) leaves the loop.
///
/// # Errors
///
/// Returns `GamedexError` if a prompt fails or the browser cannot be
/// spawned. Catalog failures are not errors here: the session degrades to
/// an empty result set.
fn handle_browse_command(source: &dyn GameSource, quiet: bool) -> Result<()> {
    let mut ui = TerminalUi::new(quiet);
    let mut session = BrowseSession::new();
    session.load(source, &mut ui);

    loop {
        let mut labels: Vec<String> = session
            .facets()
            .iter()
            .map(|facet| facet_label(facet).to_string())
            .collect();
        labels.push("Quit".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Filter by genre")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(index) = choice else { break };
        if index == session.facets().len() {
            break;
        }

        let facet = &session.facets()[index];
        session.on_facet_change(facet, &mut ui);

        let visible = session.filtered(facet);
        if visible.is_empty() {
            continue;
        }

        let titles: Vec<&str> = visible.iter().map(|game| game.title.as_str()).collect();
        let pick = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Open a game in your browser (Esc to skip)")
            .items(&titles)
            .interact_opt()?;

        if let Some(picked) = pick {
            open::that(&visible[picked].game_url)?;
        }
    }

    Ok(())
}

/// Handle the list command - one-shot fetch and render
///
/// # Errors
///
/// Currently infallible; kept fallible for symmetry with the other
/// handlers.
fn handle_list_command(source: &dyn GameSource, genre: Option<String>, quiet: bool) -> Result<()> {
    let mut ui = TerminalUi::new(quiet);
    let mut session = BrowseSession::new();

    match genre {
        Some(genre) => session.load_with_facet(source, &mut ui, &genre),
        None => session.load(source, &mut ui),
    }

    Ok(())
}

/// Handle the genres command - print the derived facet values
///
/// # Errors
///
/// Currently infallible; catalog failures degrade to an empty genre list.
fn handle_genres_command(source: &dyn GameSource, quiet: bool) -> Result<()> {
    let games = match source.load() {
        Ok(games) => games,
        Err(e) => {
            eprintln!("{}", format!("Catalog fetch failed: {e}").red());
            Vec::new()
        }
    };

    // Skip the synthetic "all" marker; it is not a genre
    let genres: Vec<String> = build_facets(&games).into_iter().skip(1).collect();

    if genres.is_empty() {
        if !quiet {
            println!("No genres found. The catalog may be unavailable.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} genre(s):", genres.len());
    }
    for genre in genres {
        if quiet {
            println!("{genre}");
        } else {
            let count = games.iter().filter(|game| game.genre == genre).count();
            println!("  {genre} ({count} game(s))");
        }
    }

    Ok(())
}

/// Main entry point for the gamedex application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `GamedexError` if configuration loading fails, the HTTP client
/// cannot be built, or any command handler returns an error.
fn main() -> Result<()> {
    let config = GamedexConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Completions { shell } => {
            Cli::generate_completions(shell);
            Ok(())
        }
        command => {
            let client = CatalogClient::new(config.api_url.clone(), config.relay_url.clone())?;

            match command {
                Commands::Browse => handle_browse_command(&client, quiet),
                Commands::List { genre } => handle_list_command(&client, genre, quiet),
                Commands::Genres => handle_genres_command(&client, quiet),
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }
}
