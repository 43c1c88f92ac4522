//! Random start positions for both actors.

use game_core::{DungeonMap, Position, Role, Terrain};
use rand::Rng;

use crate::api::{Result, RuntimeError};

/// Random draws before falling back to a row-major scan.
const SPAWN_ATTEMPTS: usize = 1_000;

/// Chooses starting cells for the explorer and then the bot.
///
/// The explorer never starts on gold and the bot never starts on the
/// explorer; nobody starts on a wall.
pub fn spawn_positions<R: Rng + ?Sized>(map: &DungeonMap, rng: &mut R) -> Result<(Position, Position)> {
    let explorer = spawn(map, rng, Role::Explorer, |_, terrain| terrain != Terrain::Gold)?;
    let bot = spawn(map, rng, Role::Bot, |position, _| position != explorer)?;
    tracing::debug!("Spawned explorer at {} and bot at {}", explorer, bot);
    Ok((explorer, bot))
}

fn spawn<R, F>(map: &DungeonMap, rng: &mut R, role: Role, accept: F) -> Result<Position>
where
    R: Rng + ?Sized,
    F: Fn(Position, Terrain) -> bool,
{
    let dimensions = map.dimensions();
    let allowed = |position: Position| {
        map.terrain(position)
            .is_some_and(|terrain| terrain.is_passable() && accept(position, terrain))
    };

    for _ in 0..SPAWN_ATTEMPTS {
        let position = Position::new(
            rng.gen_range(0..dimensions.height) as i32,
            rng.gen_range(0..dimensions.width) as i32,
        );
        if allowed(position) {
            return Ok(position);
        }
    }

    map.positions()
        .find(|position| allowed(*position))
        .ok_or(RuntimeError::NoSpawnTile { role })
}
