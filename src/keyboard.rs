use super::*;

const PRESS_DURATION: Duration = Duration::from_millis(100);

const QWERTY: [&str; 3] = ["qwertyuiop", "asdfghjkl;", "zxcvbnm,./"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct KeyHandle {
  pub(crate) column: usize,
  pub(crate) row: usize,
}

/// Finds the on-screen key that produces a character.
pub(crate) trait KeyLookup {
  fn locate(&self, c: char) -> Option<KeyHandle>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyStyle {
  Next,
  Plain,
  Pressed,
}

#[derive(Clone, Debug)]
pub(crate) struct Keyboard {
  rows: Vec<Vec<char>>,
}

impl Keyboard {
  pub(crate) fn qwerty() -> Self {
    let mut rows = QWERTY
      .iter()
      .map(|row| row.chars().collect())
      .collect::<Vec<Vec<char>>>();

    rows.push(vec![' ']);

    Self { rows }
  }

  pub(crate) fn rows(&self) -> &[Vec<char>] {
    &self.rows
  }
}

impl KeyLookup for Keyboard {
  fn locate(&self, c: char) -> Option<KeyHandle> {
    let c = c.to_ascii_lowercase();

    self.rows.iter().enumerate().find_map(|(row, keys)| {
      keys
        .iter()
        .position(|key| *key == c)
        .map(|column| KeyHandle { column, row })
    })
  }
}

/// Short-lived highlight of keys the user just pressed.
#[derive(Clone, Debug, Default)]
pub(crate) struct Feedback {
  pressed: Vec<(KeyHandle, Instant)>,
}

impl Feedback {
  pub(crate) fn is_pressed(&self, handle: KeyHandle, now: Instant) -> bool {
    self
      .pressed
      .iter()
      .any(|(pressed, at)| *pressed == handle && now.saturating_duration_since(*at) < PRESS_DURATION)
  }

  /// Lights up the key for `c`. A character without a key is logged and
  /// otherwise ignored.
  pub(crate) fn press(&mut self, lookup: &impl KeyLookup, c: char, now: Instant) {
    self
      .pressed
      .retain(|(_, at)| now.saturating_duration_since(*at) < PRESS_DURATION);

    match lookup.locate(c) {
      Some(handle) => self.pressed.push((handle, now)),
      None => warn!(character = %c.escape_debug(), "no key for character"),
    }
  }

  pub(crate) fn style(
    &self,
    handle: KeyHandle,
    next: Option<KeyHandle>,
    now: Instant,
  ) -> KeyStyle {
    if self.is_pressed(handle, now) {
      KeyStyle::Pressed
    } else if next == Some(handle) {
      KeyStyle::Next
    } else {
      KeyStyle::Plain
    }
  }
}
