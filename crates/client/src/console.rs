//! Line-oriented console explorer.
//!
//! Reads one command per line, answers with the classic text replies and
//! prints every look window as a glyph grid.
use std::fmt;
use std::io::Write;

use async_trait::async_trait;
use game_core::{Action, Direction, Feedback, GameStatus, LocalView, MoveOutcome, Pickup};
use runtime::{Participant, Result};
use tokio::io::{AsyncBufRead, Lines};

/// Every command the console accepts, in the order `COMMANDS` lists them.
pub const COMMANDS: [&str; 10] = [
    "HELLO", "LOOK", "MOVE N", "MOVE S", "MOVE E", "MOVE W", "PICKUP", "QUIT", "PASS", "COMMANDS",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    /// Print [`COMMANDS`] and ask again.
    ListCommands,
}

/// Parses one input line. Surrounding whitespace and case are ignored.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_ascii_uppercase();
    let action = match line.as_str() {
        "HELLO" => Action::Hello,
        "LOOK" => Action::Observe,
        "PICKUP" => Action::Pickup,
        "QUIT" => Action::Quit,
        "PASS" => Action::Pass,
        "COMMANDS" => return Some(Command::ListCommands),
        other => {
            let direction = other.strip_prefix("MOVE ")?.trim();
            Action::Move(direction.parse::<Direction>().ok()?)
        }
    };
    Some(Command::Play(action))
}

/// Explorer driven by a human at a terminal.
pub struct ConsoleExplorer<R, W> {
    input: Lines<R>,
    output: W,
}

impl<R, W> ConsoleExplorer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: Lines<R>, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.output, "\n{message}\n") {
            tracing::warn!("Console write failed: {}", err);
        }
    }

    fn list_commands(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nAvailable commands:")?;
        for command in COMMANDS {
            writeln!(self.output, "\"{command}\"")?;
        }
        writeln!(self.output)
    }
}

#[async_trait]
impl<R, W> Participant for ConsoleExplorer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn request_action(&mut self) -> Result<Action> {
        loop {
            let Some(line) = self.input.next_line().await? else {
                tracing::info!("Console input closed; quitting");
                return Ok(Action::Quit);
            };

            match parse_command(&line) {
                Some(Command::Play(action)) => {
                    tracing::debug!("Console command {:?}", action);
                    return Ok(action);
                }
                Some(Command::ListCommands) => self.list_commands()?,
                None => writeln!(self.output, "Invalid")?,
            }
        }
    }

    fn deliver_observation(&mut self, view: LocalView) {
        if let Err(err) = write!(self.output, "\n{view}\n") {
            tracing::warn!("Console write failed: {}", err);
        }
    }

    fn report_outcome(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Move(MoveOutcome::Failure) => self.say(format_args!("FAIL")),
            Feedback::Move(_) => self.say(format_args!("SUCCESS")),
            Feedback::GoldRemaining(gold) => self.say(format_args!("Gold to win: {gold}")),
            Feedback::Pickup(Pickup { picked, gold_owned }) => {
                let verdict = if picked { "SUCCESS" } else { "FAIL" };
                self.say(format_args!("{verdict}. Gold owned: {gold_owned}."));
            }
            Feedback::GameOver(GameStatus::Won) => self.say(format_args!(
                "Congratulations! You've exited the dungeon with enough treasure to last you a lifetime!"
            )),
            Feedback::GameOver(GameStatus::Lost) => self.say(format_args!(
                "Too bad, you got horribly ripped to death by the bot of terror."
            )),
            Feedback::GameOver(GameStatus::Quit) => self.say(format_args!("QUITTING GAME")),
            Feedback::GameOver(GameStatus::Running) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncBufReadExt;

    fn explorer(input: &'static str) -> ConsoleExplorer<&'static [u8], Vec<u8>> {
        ConsoleExplorer::new(input.as_bytes().lines(), Vec::new())
    }

    fn printed(explorer: ConsoleExplorer<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(explorer.into_output()).unwrap()
    }

    #[test]
    fn parses_commands_leniently() {
        assert_eq!(parse_command("hello"), Some(Command::Play(Action::Hello)));
        assert_eq!(parse_command("  look "), Some(Command::Play(Action::Observe)));
        assert_eq!(
            parse_command("move w"),
            Some(Command::Play(Action::Move(Direction::West)))
        );
        assert_eq!(
            parse_command("MOVE N"),
            Some(Command::Play(Action::Move(Direction::North)))
        );
        assert_eq!(parse_command("Commands"), Some(Command::ListCommands));
        assert_eq!(parse_command("MOVE"), None);
        assert_eq!(parse_command("MOVE X"), None);
        assert_eq!(parse_command("dance"), None);
    }

    #[tokio::test]
    async fn reprompts_until_a_valid_command() {
        let mut console = explorer("jump\nCOMMANDS\npickup\n");
        assert_eq!(console.request_action().await.unwrap(), Action::Pickup);

        let out = printed(console);
        assert!(out.starts_with("Invalid\n"));
        assert!(out.contains("\"MOVE E\""));
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let mut console = explorer("");
        assert_eq!(console.request_action().await.unwrap(), Action::Quit);
    }

    #[test]
    fn prints_replies_and_views() {
        let mut console = explorer("");
        console.report_outcome(Feedback::GoldRemaining(2));
        console.report_outcome(Feedback::Move(MoveOutcome::Failure));
        console.report_outcome(Feedback::Pickup(Pickup {
            picked: true,
            gold_owned: 1,
        }));
        console.deliver_observation(LocalView::from_glyphs(&["#..", ".P.", "..B"]).unwrap());
        console.report_outcome(Feedback::GameOver(GameStatus::Lost));

        let out = printed(console);
        assert!(out.contains("Gold to win: 2"));
        assert!(out.contains("\nFAIL\n"));
        assert!(out.contains("SUCCESS. Gold owned: 1."));
        assert!(out.contains("#..\n.P.\n..B\n"));
        assert!(out.contains("ripped to death"));
    }
}
