use common::games::tictactoe::PlayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; the player types 1-9.
    Place(usize),
    PlayAgain,
    ResetMatch,
    ClearStats,
    SetMode(PlayMode),
    ShowStats,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::PlayAgain);
    };

    match head.to_ascii_lowercase().as_str() {
        "n" | "new" | "again" => Ok(Command::PlayAgain),
        "r" | "reset" => Ok(Command::ResetMatch),
        "c" | "clear" => Ok(Command::ClearStats),
        "s" | "stats" => Ok(Command::ShowStats),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "m" | "mode" => {
            let mode = parts
                .next()
                .ok_or_else(|| "Usage: mode <two_player|easy|hard>".to_string())?;
            Ok(Command::SetMode(mode.parse()?))
        }
        key => match key.parse::<usize>() {
            Ok(n @ 1..=9) => Ok(Command::Place(n - 1)),
            _ => Err(format!("Unknown command '{}'. Type 'help' for commands.", trimmed)),
        },
    }
}

pub const HELP: &str = "\
Commands:
  1-9          place your mark (cells numbered left to right, top to bottom)
  n / <enter>  play again (keeps the score)
  r            reset the match score
  c            clear all statistics
  m <mode>     switch mode: two_player, easy, hard
  s            show statistics
  q            quit";
