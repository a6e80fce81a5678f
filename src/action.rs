use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Confirm,
  Down,
  Escape,
  Insert(char),
  Quit,
  Toggle,
  Up,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
        KeyCode::Char(c) => Some(Self::Insert(c)),
        KeyCode::Down => Some(Self::Down),
        KeyCode::Enter => Some(Self::Confirm),
        KeyCode::Esc => Some(Self::Escape),
        KeyCode::Tab => Some(Self::Toggle),
        KeyCode::Up => Some(Self::Up),
        _ => None,
      },
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crossterm::event::KeyEvent};

  fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Press,
      state: crossterm::event::KeyEventState::NONE,
    })
  }

  #[test]
  fn from_event_char() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char(';'), KeyModifiers::NONE)),
      Some(Action::Insert(';'))
    );
  }

  #[test]
  fn from_event_space() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
      Some(Action::Insert(' '))
    );
  }

  #[test]
  fn from_event_ctrl_c() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
      Some(Action::Quit)
    );
  }

  #[test]
  fn from_event_escape() {
    assert_eq!(
      Action::from_event(key(KeyCode::Esc, KeyModifiers::NONE)),
      Some(Action::Escape)
    );
  }

  #[test]
  fn from_event_tab() {
    assert_eq!(
      Action::from_event(key(KeyCode::Tab, KeyModifiers::NONE)),
      Some(Action::Toggle)
    );
  }

  #[test]
  fn from_event_navigation() {
    assert_eq!(
      Action::from_event(key(KeyCode::Up, KeyModifiers::NONE)),
      Some(Action::Up)
    );
    assert_eq!(
      Action::from_event(key(KeyCode::Down, KeyModifiers::NONE)),
      Some(Action::Down)
    );
    assert_eq!(
      Action::from_event(key(KeyCode::Enter, KeyModifiers::NONE)),
      Some(Action::Confirm)
    );
  }

  #[test]
  fn from_event_release_is_ignored() {
    assert_eq!(
      Action::from_event(Event::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: crossterm::event::KeyEventState::NONE,
      })),
      None
    );
  }

  #[test]
  fn from_event_unsupported_key() {
    assert_eq!(
      Action::from_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
      None
    );
  }

  #[test]
  fn from_event_non_key_event() {
    assert_eq!(
      Action::from_event(Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
      })),
      None
    );
  }
}
