use crossterm::event::{self, Event, KeyEvent, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use snake_engine::{Direction, SessionCommand};

pub fn map_key_event(key_event: &KeyEvent) -> Option<SessionCommand> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match key_event.code {
        KeyCode::Up | KeyCode::Char('w') => Some(SessionCommand::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(SessionCommand::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(SessionCommand::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(SessionCommand::Turn(Direction::Right)),
        KeyCode::Char(' ') => Some(SessionCommand::TogglePause),
        KeyCode::Enter => Some(SessionCommand::Start),
        KeyCode::Char('r') => Some(SessionCommand::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// Reads key events on a dedicated thread and forwards them as session
/// commands. The thread stops once the session side hangs up or quit is sent.
pub fn spawn_input_thread(sender: mpsc::UnboundedSender<SessionCommand>) {
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key_event)) => {
                    if let Some(command) = map_key_event(&key_event) {
                        let quit = command == SessionCommand::Quit;
                        if sender.send(command).is_err() || quit {
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}
