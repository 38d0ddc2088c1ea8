use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::TicTacToeSession;
use common::{log, log_debug, log_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP, parse_command};
use crate::terminal::TerminalBroadcaster;

/// Drives a session from line-based input until `quit` or end of input.
///
/// The bot reply waits `bot_delay` after the human move has been rendered.
/// Input is not read while the reply is pending.
pub async fn run_game<R, W>(
    session: &mut TicTacToeSession<TerminalBroadcaster<W>>,
    input: R,
    bot_delay: Duration,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if session.is_bot_turn() {
            if !bot_delay.is_zero() {
                tokio::time::sleep(bot_delay).await;
            }
            if let Err(e) = session.play_bot_turn() {
                log_warn!("Bot could not move: {}", e);
                session.broadcaster_mut().show_message(&e.to_string());
            }
            continue;
        }

        let Some(line) = lines.next_line().await? else {
            log_debug!("Input closed");
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                session.broadcaster_mut().show_message(&message);
                continue;
            }
        };

        match command {
            Command::Place(index) => {
                let Some(mover) = session.current_mover() else {
                    session
                        .broadcaster_mut()
                        .show_message("Round is over. Press <enter> to play again.");
                    continue;
                };
                if let Err(e) = session.submit_move(index, mover) {
                    session.broadcaster_mut().show_message(&e.to_string());
                }
            }
            Command::PlayAgain => session.start_new_round(),
            Command::ResetMatch => session.reset_match(),
            Command::ClearStats => session.clear_stats(),
            Command::SetMode(mode) => session.set_mode(mode),
            Command::ShowStats => session.broadcaster_mut().show_stats(),
            Command::Help => session.broadcaster_mut().show_message(HELP),
            Command::Quit => break,
        }
    }

    log!(
        "Session ended after {} games ({} moves)",
        session.stats().games_played,
        session.stats().total_moves
    );
    Ok(())
}
