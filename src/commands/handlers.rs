//! Command handlers
//!
//! Each handler takes the session explicitly and returns the lines to print.

use tracing::info;

use crate::commands::{ExploredArea, Reply, Session, COMMANDS};
use crate::error::{CommandError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

pub(super) fn help() -> Reply {
    let mut lines = vec![
        "Welcome to the Pokedex!".to_string(),
        "Usage:".to_string(),
        String::new(),
    ];
    lines.extend(
        COMMANDS
            .iter()
            .map(|info| format!("{}: {}", info.usage, info.description)),
    );
    Reply::Lines(lines)
}

/// Shows the next page of location areas, starting over after the last one.
pub(super) async fn map(session: &mut Session) -> Result<Reply> {
    let url = session
        .next_url
        .clone()
        .unwrap_or_else(|| session.client.first_page_url());

    let page: LocationAreaPage = session.client.fetch_cached(&session.cache, &url).await?;
    Ok(show_page(session, url, page))
}

/// Shows the page before the current one.
pub(super) async fn map_back(session: &mut Session) -> Result<Reply> {
    let url = session.prev_url.clone().ok_or(CommandError::NoPreviousPage)?;

    let page: LocationAreaPage = session.client.fetch_cached(&session.cache, &url).await?;
    Ok(show_page(session, url, page))
}

fn show_page(session: &mut Session, url: String, page: LocationAreaPage) -> Reply {
    session.next_url = page.next;
    session.prev_url = page.previous;
    session.current_url = Some(url);

    Reply::Lines(page.results.into_iter().map(|area| area.name).collect())
}

pub(super) async fn explore(session: &mut Session, area: String) -> Result<Reply> {
    let url = session.client.location_area_url(&area)?;
    let detail: LocationAreaDetail = session.client.fetch_cached(&session.cache, &url).await?;

    let pokemon = detail.pokemon_names();
    let mut lines = vec![format!("Exploring {}...", area)];
    if pokemon.is_empty() {
        lines.push("No pokemon found in this area".to_string());
    } else {
        lines.push("Found Pokemon:".to_string());
        lines.extend(pokemon.iter().map(|name| format!(" - {}", name)));
    }

    session.current_area = Some(ExploredArea {
        name: area,
        pokemon,
    });
    Ok(Reply::Lines(lines))
}

/// Catches a pokemon that lives in the explored area.
pub(super) async fn catch(session: &mut Session, name: String) -> Result<Reply> {
    let area = session
        .current_area
        .as_ref()
        .ok_or(CommandError::NoAreaExplored)?;
    if !area.has_pokemon(&name) {
        return Err(CommandError::NotLocalToArea {
            pokemon: name,
            area: area.name.clone(),
        });
    }
    if session.pokedex.contains(&name) {
        return Err(CommandError::AlreadyCaught(name));
    }

    let url = session.client.pokemon_url(&name)?;
    let pokemon: Pokemon = session.client.fetch_cached(&session.cache, &url).await?;
    session.pokedex.add(pokemon);
    info!(pokemon = %name, "Caught pokemon");

    Ok(Reply::Lines(vec![
        format!("Throwing a Pokeball at {}...", name),
        format!("{} was caught!", name),
        "You may now inspect it with the inspect command.".to_string(),
    ]))
}

pub(super) fn inspect(session: &Session, name: &str) -> Result<Reply> {
    let caught = session.pokedex.get(name)?;
    let pokemon = &caught.pokemon;

    let mut lines = vec![
        format!("Name: {}", pokemon.name),
        format!("Height: {}", pokemon.height),
        format!("Weight: {}", pokemon.weight),
    ];
    if let Some(experience) = pokemon.base_experience {
        lines.push(format!("Base experience: {}", experience));
    }
    lines.push("Stats:".to_string());
    lines.extend(
        pokemon
            .stats
            .iter()
            .map(|stat| format!("  - {}: {}", stat.stat.name, stat.base_stat)),
    );
    lines.push("Types:".to_string());
    lines.extend(
        pokemon
            .types
            .iter()
            .map(|kind| format!("  - {}", kind.kind.name)),
    );
    lines.push(format!(
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    Ok(Reply::Lines(lines))
}

pub(super) fn pokedex(session: &Session) -> Reply {
    if session.pokedex.is_empty() {
        return Reply::Lines(vec!["Your Pokedex is empty".to_string()]);
    }

    let mut lines = vec!["Your Pokedex:".to_string()];
    lines.extend(
        session
            .pokedex
            .list()
            .map(|caught| format!(" - {}", caught.name())),
    );
    Reply::Lines(lines)
}
