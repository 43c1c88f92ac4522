//! What the pursuer currently believes about its surroundings.

use game_core::{Direction, LocalView, Position, Tile};

/// Persistent memory of the pursuer.
///
/// Every coordinate lives in the space of the last captured window. The
/// state is created once per bot and overwritten field by field; only the
/// owning [`super::DecisionEngine`] mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeliefState {
    pub(crate) window: Option<LocalView>,
    pub(crate) self_position: Position,
    pub(crate) target: Option<Position>,
    pub(crate) current_heading: Direction,
    pub(crate) last_heading: Direction,
    pub(crate) forbidden_heading: Option<Direction>,
    pub(crate) needs_observation: bool,
    pub(crate) turns_since_observation: u32,
}

impl BeliefState {
    /// Fresh belief: nothing seen yet, so the first action is a look.
    pub fn new(heading: Direction) -> Self {
        Self {
            window: None,
            self_position: Position::ORIGIN,
            target: None,
            current_heading: heading,
            last_heading: heading,
            forbidden_heading: None,
            needs_observation: true,
            turns_since_observation: 0,
        }
    }

    pub fn window(&self) -> Option<&LocalView> {
        self.window.as_ref()
    }

    pub fn self_position(&self) -> Position {
        self.self_position
    }

    /// Remembered explorer position, if one was seen in the last window.
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn current_heading(&self) -> Direction {
        self.current_heading
    }

    pub fn last_heading(&self) -> Direction {
        self.last_heading
    }

    pub fn forbidden_heading(&self) -> Option<Direction> {
        self.forbidden_heading
    }

    pub fn needs_observation(&self) -> bool {
        self.needs_observation
    }

    pub fn turns_since_observation(&self) -> u32 {
        self.turns_since_observation
    }

    /// Replaces the remembered window and recentres on it.
    ///
    /// The target is taken from the new window alone; a marker remembered
    /// from an older window is meaningless in the new coordinate space.
    pub(crate) fn observe(&mut self, view: LocalView) {
        self.self_position = view.centre();
        self.target = view.find(Tile::Explorer);
        self.window = Some(view);
        self.needs_observation = false;
        self.forbidden_heading = None;
    }

    /// Tile at `position`, [`Tile::Unknown`] outside the window or before
    /// the first look.
    pub fn tile_at(&self, position: Position) -> Tile {
        self.window
            .as_ref()
            .map_or(Tile::Unknown, |window| window.tile(position))
    }

    pub fn tile_ahead(&self, heading: Direction) -> Tile {
        self.tile_at(self.self_position.step(heading))
    }

    /// Whether `heading` may be attempted from the current position.
    ///
    /// Unknown ground is optimistically passable. A believed wall never is.
    /// Anything else is fine unless it reverses the last replan, which only
    /// `allow_backtrack` overrides.
    pub fn is_feasible(&self, heading: Direction, allow_backtrack: bool) -> bool {
        match self.tile_ahead(heading) {
            Tile::Unknown => true,
            Tile::Wall => false,
            _ => allow_backtrack || self.forbidden_heading != Some(heading),
        }
    }

    /// Whether the bot still stands inside the remembered window.
    pub fn is_inside_window(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|window| window.contains(self.self_position))
    }
}
