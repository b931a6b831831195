//! Operator console: reads one command per line from stdin.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::thread::JoinHandle;

use chargesim_core::commands::OperatorCommand;

use crate::error::AppResult;
use crate::state::{CommandSender, GameLoopCommand};

/// Spawn a thread that feeds console lines to the game loop until EOF,
/// `quit`, or the loop going away. Replies go to `out`.
pub fn spawn_console<R, W>(input: R, mut out: W, commands: CommandSender) -> AppResult<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let handle = std::thread::Builder::new()
        .name("chargesim-console".into())
        .spawn(move || run_console(input, &mut out, &commands))?;
    Ok(handle)
}

fn run_console<R: BufRead, W: Write>(input: R, out: &mut W, commands: &CommandSender) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        if handle_line(&line, out, commands).is_break() {
            return;
        }
    }
    tracing::debug!("console input closed");
}

/// Act on one console line.
pub fn handle_line<W: Write>(line: &str, out: &mut W, commands: &CommandSender) -> ControlFlow<()> {
    if line.trim().is_empty() {
        return ControlFlow::Continue(());
    }
    let command = match line.parse::<OperatorCommand>() {
        Ok(command) => command,
        Err(e) => {
            let _ = writeln!(out, "{e} ({})", OperatorCommand::HELP);
            return ControlFlow::Continue(());
        }
    };
    if command == OperatorCommand::Help {
        let _ = writeln!(out, "{}", OperatorCommand::HELP);
        return ControlFlow::Continue(());
    }
    if commands.send(GameLoopCommand::Operator(command)).is_err() {
        return ControlFlow::Break(());
    }
    if command == OperatorCommand::Quit {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    fn forwarded(rx: &mpsc::Receiver<GameLoopCommand>) -> Vec<OperatorCommand> {
        rx.try_iter()
            .filter_map(|c| match c {
                GameLoopCommand::Operator(op) => Some(op),
                GameLoopCommand::Shutdown => None,
            })
            .collect()
    }

    #[test]
    fn test_help_is_answered_locally() {
        let (tx, rx) = mpsc::channel();
        let mut out = Vec::new();
        assert!(handle_line("h", &mut out, &tx).is_continue());
        assert!(String::from_utf8(out).unwrap().contains("q: quit"));
        assert!(forwarded(&rx).is_empty());
    }

    #[test]
    fn test_unknown_and_blank_lines() {
        let (tx, rx) = mpsc::channel();
        let mut out = Vec::new();
        assert!(handle_line("   ", &mut out, &tx).is_continue());
        assert!(out.is_empty());
        assert!(handle_line("x", &mut out, &tx).is_continue());
        assert!(String::from_utf8(out).unwrap().contains("unknown command"));
        assert!(forwarded(&rx).is_empty());
    }

    #[test]
    fn test_console_forwards_until_quit() {
        let (tx, rx) = mpsc::channel();
        let input = Cursor::new("f\nslower\n\np\nq\nf\n");
        let mut out = Vec::new();
        run_console(input, &mut out, &tx);
        assert_eq!(
            forwarded(&rx),
            vec![
                OperatorCommand::Faster,
                OperatorCommand::Slower,
                OperatorCommand::Pause,
                OperatorCommand::Quit,
            ]
        );
    }

    #[test]
    fn test_console_stops_when_loop_is_gone() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut out = Vec::new();
        assert!(handle_line("f", &mut out, &tx).is_break());
    }
}
