//! Authoritative game rules.
//!
//! The [`GameEngine`] owns the dungeon map and both actor positions. It
//! answers looks with value-copied windows, resolves moves against the map,
//! tracks the explorer's gold and decides when the game is over.

mod errors;

pub use errors::EngineError;

use crate::action::{MoveOutcome, Pickup, Role};
use crate::config::GameConfig;
use crate::env::{DungeonMap, LocalView};
use crate::state::{Direction, Position, Terrain, Tile};

/// Lifecycle of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    Running,
    /// The explorer left through an exit carrying enough gold.
    Won,
    /// The bot caught the explorer.
    Lost,
    /// The explorer gave up.
    Quit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

pub struct GameEngine {
    map: DungeonMap,
    config: GameConfig,
    explorer: Position,
    bot: Position,
    gold_owned: u32,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a running game with both actors placed.
    pub fn new(
        map: DungeonMap,
        config: GameConfig,
        explorer: Position,
        bot: Position,
    ) -> Result<Self, EngineError> {
        Self::validate_spawn(&map, Role::Explorer, explorer)?;
        Self::validate_spawn(&map, Role::Bot, bot)?;
        if explorer == bot {
            return Err(EngineError::SpawnOverlap(explorer));
        }

        Ok(Self {
            map,
            config,
            explorer,
            bot,
            gold_owned: 0,
            status: GameStatus::Running,
        })
    }

    fn validate_spawn(map: &DungeonMap, role: Role, position: Position) -> Result<(), EngineError> {
        match map.terrain(position) {
            None => Err(EngineError::SpawnOffMap { role, position }),
            Some(Terrain::Wall) => Err(EngineError::SpawnOnWall { role, position }),
            Some(_) => Ok(()),
        }
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn gold_owned(&self) -> u32 {
        self.gold_owned
    }

    pub fn position(&self, role: Role) -> Position {
        match role {
            Role::Explorer => self.explorer,
            Role::Bot => self.bot,
        }
    }

    /// Gold the explorer still needs before an exit lets them out.
    pub fn hello(&self) -> u32 {
        self.map.gold_required().saturating_sub(self.gold_owned)
    }

    /// Window centred on `role`.
    ///
    /// Cells off the map read as walls. The explorer is always marked; the
    /// bot is only marked when the explorer is looking.
    pub fn look(&self, role: Role) -> LocalView {
        let radius = self.config.view_radius as i32;
        let size = self.config.window_size();
        let centre = self.position(role);

        let mut cells = Vec::with_capacity(size * size);
        for d_row in -radius..=radius {
            for d_col in -radius..=radius {
                let global = Position::new(centre.row + d_row, centre.col + d_col);
                let tile = if global == self.explorer {
                    Tile::Explorer
                } else if global == self.bot && role == Role::Explorer {
                    Tile::Bot
                } else {
                    self.map.terrain(global).map_or(Tile::Wall, Tile::from)
                };
                cells.push(tile);
            }
        }

        LocalView::from_square(size, cells)
    }

    /// Resolves one step of `role` along `direction`.
    pub fn move_actor(&mut self, role: Role, direction: Direction) -> MoveOutcome {
        if self.status.is_over() {
            return MoveOutcome::Failure;
        }

        let destination = self.position(role).step(direction);
        let Some(terrain) = self.map.terrain(destination) else {
            return MoveOutcome::Failure;
        };

        if role == Role::Explorer
            && terrain == Terrain::Exit
            && self.gold_owned >= self.map.gold_required()
        {
            self.explorer = destination;
            self.status = GameStatus::Won;
            return MoveOutcome::SuccessGameEnd;
        }

        if !terrain.is_passable() {
            return MoveOutcome::Failure;
        }

        match role {
            Role::Explorer => self.explorer = destination,
            Role::Bot => self.bot = destination,
        }

        if self.explorer == self.bot {
            self.status = GameStatus::Lost;
            return MoveOutcome::SuccessGameEnd;
        }

        MoveOutcome::Success
    }

    /// Picks up gold under the explorer.
    pub fn pickup(&mut self) -> Pickup {
        let picked = self.status == GameStatus::Running && self.map.remove_gold(self.explorer);
        if picked {
            self.gold_owned += 1;
        }
        Pickup {
            picked,
            gold_owned: self.gold_owned,
        }
    }

    pub fn quit(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Quit;
        }
    }

    /// Whole board with both actors drawn in, for diagnostics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut last_row = None;
        for position in self.map.positions() {
            if last_row.is_some_and(|row| row != position.row) {
                out.push('\n');
            }
            last_row = Some(position.row);
            let glyph = if position == self.explorer {
                Tile::Explorer.glyph()
            } else if position == self.bot {
                Tile::Bot.glyph()
            } else {
                self.map.terrain(position).map_or('?', Terrain::glyph)
            };
            out.push(glyph);
        }
        out.push('\n');
        out
    }
}
