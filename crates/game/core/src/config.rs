/// Game rule parameters shared by the engine and every participant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of tiles visible in each direction from the observer.
    /// A radius of 2 yields the classic 5×5 look window.
    pub view_radius: u32,
}

impl GameConfig {
    pub const DEFAULT_VIEW_RADIUS: u32 = 2;

    pub fn new() -> Self {
        Self {
            view_radius: Self::DEFAULT_VIEW_RADIUS,
        }
    }

    pub fn with_view_radius(view_radius: u32) -> Self {
        Self { view_radius }
    }

    /// Side length of the square look window.
    pub fn window_size(&self) -> usize {
        self.view_radius as usize * 2 + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tunables for the autonomous pursuer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// Moves allowed between two observations before a look is forced.
    pub look_interval: u32,

    /// Rejected random samples before the heading search accepts backtracking.
    pub heading_sample_limit: u32,

    /// Weight assigned to every edge touching a believed wall.
    /// Large enough to dominate any wall-free route inside the window.
    pub wall_penalty: u64,
}

impl BotConfig {
    pub const DEFAULT_LOOK_INTERVAL: u32 = 5;
    pub const DEFAULT_HEADING_SAMPLE_LIMIT: u32 = 100;
    pub const DEFAULT_WALL_PENALTY: u64 = 99_999;

    pub fn new() -> Self {
        Self {
            look_interval: Self::DEFAULT_LOOK_INTERVAL,
            heading_sample_limit: Self::DEFAULT_HEADING_SAMPLE_LIMIT,
            wall_penalty: Self::DEFAULT_WALL_PENALTY,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration file layout (`[game]` and `[bot]` tables).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DungeonConfig {
    pub game: GameConfig,
    pub bot: BotConfig,
}
