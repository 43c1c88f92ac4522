//! Full rounds through the session orchestrator.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use game_core::{
    Action, BotConfig, Direction, DungeonMap, Feedback, GameStatus, LocalView, MoveOutcome,
    Pickup, Position, Role, Tile,
};
use runtime::{BotParticipant, Participant, Result, RuntimeError, ScriptedParticipant, Session};

/// Scripted explorer whose log outlives the session that owns it.
#[derive(Clone, Default)]
struct Recorder {
    script: Arc<Mutex<VecDeque<Action>>>,
    views: Arc<Mutex<Vec<LocalView>>>,
    feedback: Arc<Mutex<Vec<Feedback>>>,
}

impl Recorder {
    fn new(script: impl IntoIterator<Item = Action>) -> Self {
        let recorder = Self::default();
        recorder.script.lock().unwrap().extend(script);
        recorder
    }

    fn feedback(&self) -> Vec<Feedback> {
        self.feedback.lock().unwrap().clone()
    }

    fn views(&self) -> Vec<LocalView> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl Participant for Recorder {
    async fn request_action(&mut self) -> Result<Action> {
        Ok(self.script.lock().unwrap().pop_front().unwrap_or(Action::Pass))
    }

    fn deliver_observation(&mut self, view: LocalView) {
        self.views.lock().unwrap().push(view);
    }

    fn report_outcome(&mut self, feedback: Feedback) {
        self.feedback.lock().unwrap().push(feedback);
    }
}

fn vault() -> DungeonMap {
    DungeonMap::from_glyphs("vault", 1, &["#######", "#.GE..#", "#######"]).unwrap()
}

fn corridor() -> DungeonMap {
    DungeonMap::from_glyphs("corridor", 0, &["#######", "#.....#", "#######"]).unwrap()
}

#[tokio::test]
async fn explorer_collects_gold_and_escapes() {
    let explorer = Recorder::new([
        Action::Hello,
        Action::Move(Direction::East),
        Action::Pickup,
        Action::Move(Direction::East),
    ]);
    let mut session = Session::builder()
        .map(vault())
        .explorer(explorer.clone())
        .bot(ScriptedParticipant::idle())
        .spawns(Position::new(1, 1), Position::new(1, 5))
        .build()
        .unwrap();

    assert_eq!(session.run().await.unwrap(), GameStatus::Won);
    assert_eq!(session.rounds(), 4);
    assert_eq!(session.engine().gold_owned(), 1);
    assert_eq!(
        explorer.feedback(),
        vec![
            Feedback::GoldRemaining(1),
            Feedback::Move(MoveOutcome::Success),
            Feedback::Pickup(Pickup {
                picked: true,
                gold_owned: 1
            }),
            Feedback::Move(MoveOutcome::SuccessGameEnd),
            Feedback::GameOver(GameStatus::Won),
        ]
    );
}

#[tokio::test]
async fn exit_without_gold_is_just_floor() {
    let explorer = Recorder::new([
        Action::Move(Direction::East),
        Action::Move(Direction::East),
        Action::Move(Direction::North),
    ]);
    let mut session = Session::builder()
        .map(vault())
        .explorer(explorer.clone())
        .bot(ScriptedParticipant::idle())
        .spawns(Position::new(1, 1), Position::new(1, 5))
        .build()
        .unwrap();

    for _ in 0..3 {
        assert_eq!(session.step().await.unwrap(), GameStatus::Running);
    }
    assert_eq!(session.engine().position(Role::Explorer), Position::new(1, 3));
    assert_eq!(
        explorer.feedback(),
        vec![
            Feedback::Move(MoveOutcome::Success),
            Feedback::Move(MoveOutcome::Success),
            Feedback::Move(MoveOutcome::Failure),
        ]
    );
}

#[tokio::test]
async fn bot_hunts_down_idle_explorer() {
    let explorer = Recorder::new([]);
    let mut session = Session::builder()
        .map(corridor())
        .explorer(explorer.clone())
        .bot(BotParticipant::new(BotConfig::default(), Some(17)))
        .spawns(Position::new(1, 1), Position::new(1, 3))
        .build()
        .unwrap();

    // Look, step west, step onto the explorer.
    assert_eq!(session.run().await.unwrap(), GameStatus::Lost);
    assert_eq!(session.rounds(), 3);
    assert_eq!(
        explorer.feedback(),
        vec![Feedback::GameOver(GameStatus::Lost)]
    );
}

#[tokio::test]
async fn scripted_bot_stepping_onto_explorer_ends_the_game() {
    let explorer = Recorder::new([]);
    let mut session = Session::builder()
        .map(corridor())
        .explorer(explorer.clone())
        .bot(ScriptedParticipant::new([Action::Move(Direction::West)]))
        .spawns(Position::new(1, 1), Position::new(1, 2))
        .build()
        .unwrap();

    assert_eq!(session.step().await.unwrap(), GameStatus::Lost);
    assert_eq!(session.engine().position(Role::Bot), Position::new(1, 1));
    assert_eq!(
        explorer.feedback(),
        vec![Feedback::GameOver(GameStatus::Lost)]
    );
}

#[tokio::test]
async fn explorer_sees_bot_but_bot_sees_only_explorer() {
    let explorer = Recorder::new([Action::Observe]);
    let mut session = Session::builder()
        .map(corridor())
        .explorer(explorer.clone())
        .bot(ScriptedParticipant::idle())
        .spawns(Position::new(1, 2), Position::new(1, 4))
        .build()
        .unwrap();

    session.step().await.unwrap();
    let views = explorer.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].tile(views[0].centre()), Tile::Explorer);
    assert_eq!(views[0].find(Tile::Bot), Some(Position::new(2, 4)));
    // Two rows up is past the map edge and reads as wall.
    assert_eq!(views[0].tile(Position::new(0, 2)), Tile::Wall);

    let bot_view = session.engine().look(Role::Bot);
    assert_eq!(bot_view.find(Tile::Bot), None);
    assert_eq!(bot_view.find(Tile::Explorer), Some(Position::new(2, 0)));
}

#[tokio::test]
async fn quitting_ends_the_game_before_the_bot_moves() {
    let explorer = Recorder::new([Action::Quit]);
    let mut session = Session::builder()
        .map(corridor())
        .explorer(explorer.clone())
        .bot(BotParticipant::new(BotConfig::default(), Some(2)))
        .spawns(Position::new(1, 1), Position::new(1, 5))
        .build()
        .unwrap();

    assert_eq!(session.step().await.unwrap(), GameStatus::Quit);
    assert_eq!(session.engine().position(Role::Bot), Position::new(1, 5));
    // Further steps are no-ops.
    assert_eq!(session.step().await.unwrap(), GameStatus::Quit);
    assert_eq!(session.rounds(), 1);
    assert_eq!(explorer.feedback(), vec![Feedback::GameOver(GameStatus::Quit)]);
}

#[tokio::test]
async fn seeded_spawns_on_default_map_play_out() {
    let map = game_content::default_map();
    let mut session = Session::builder()
        .map(map)
        .explorer(ScriptedParticipant::idle())
        .bot(BotParticipant::new(BotConfig::default(), Some(99)))
        .seed(99)
        .build()
        .unwrap();

    let explorer = session.engine().position(Role::Explorer);
    assert_ne!(
        session.engine().map().terrain(explorer),
        Some(game_core::Terrain::Gold)
    );

    for _ in 0..200 {
        let status = session.step().await.unwrap();
        assert!(matches!(status, GameStatus::Running | GameStatus::Lost));
        if status.is_over() {
            break;
        }
    }
}

#[test]
fn builder_reports_missing_pieces() {
    let err = Session::builder()
        .explorer(ScriptedParticipant::idle())
        .bot(ScriptedParticipant::idle())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, RuntimeError::MissingMap));

    let err = Session::builder()
        .map(corridor())
        .explorer(ScriptedParticipant::idle())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, RuntimeError::ParticipantNotSet { role: Role::Bot }));

    let err = Session::builder()
        .map(corridor())
        .explorer(ScriptedParticipant::idle())
        .bot(ScriptedParticipant::idle())
        .spawns(Position::new(0, 0), Position::new(1, 1))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, RuntimeError::Engine(_)));
}
