use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
  Ended,
  Paused,
  Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
  Correct,
  Incorrect,
  Unseen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Tally {
  pub(crate) error_length: usize,
  pub(crate) test_string_length: usize,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Flow {
  Continuing,
  Ended,
  Quit,
}

/// One typing attempt over a generated paragraph.
#[derive(Clone, Debug)]
pub(crate) struct Session {
  cursor: usize,
  elapsed: u64,
  errors: usize,
  marks: Vec<Mark>,
  slots: Vec<CharacterSlot>,
  state: State,
  tally: Option<Tally>,
  test_type: TestType,
  time_limit: u64,
}

impl Session {
  pub(crate) fn new(slots: Vec<CharacterSlot>, test_type: TestType, time_limit: u64) -> Self {
    Self {
      cursor: 0,
      elapsed: 0,
      errors: 0,
      marks: vec![Mark::Unseen; slots.len()],
      slots,
      state: State::Paused,
      tally: None,
      test_type,
      time_limit,
    }
  }

  /// Starts a session from the stored configuration. An unrecognized test type
  /// refuses to produce a session.
  pub(crate) fn from_config<R: Rng + ?Sized>(
    config: &Config,
    max_length: usize,
    time_limit: u64,
    rng: &mut R,
  ) -> Result<Self, Error> {
    let test_type = config.test_type()?;

    let session = Self::new(
      generator::generate_paragraph(max_length, rng),
      test_type,
      time_limit,
    );

    info!(%test_type, length = session.slots.len(), time_limit, "session created");

    Ok(session)
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn elapsed(&self) -> u64 {
    self.elapsed
  }

  fn end(&mut self) {
    if self.state == State::Ended {
      return;
    }

    self.state = State::Ended;

    let tally = Tally {
      error_length: self.errors,
      test_string_length: self.cursor,
    };

    info!(
      elapsed = self.elapsed,
      characters = tally.test_string_length,
      errors = tally.error_length,
      "session ended"
    );

    self.tally = Some(tally);
  }

  pub(crate) fn expected(&self) -> Option<char> {
    match self.state {
      State::Ended => None,
      _ => self.slots.get(self.cursor).map(|slot| slot.character),
    }
  }

  pub(crate) fn handle_action(&mut self, action: Action) -> Flow {
    match (self.state, action) {
      (_, Action::Quit) => return Flow::Quit,
      (State::Running, Action::Escape | Action::Toggle) => {
        self.pause();
      }
      (State::Running, Action::Insert(c)) => self.type_char(c),
      (State::Paused, Action::Insert(' ') | Action::Toggle) => {
        self.resume();
      }
      _ => {}
    }

    match self.state {
      State::Ended => Flow::Ended,
      _ => Flow::Continuing,
    }
  }

  pub(crate) fn mark(&self, index: usize) -> Mark {
    self.marks.get(index).copied().unwrap_or(Mark::Unseen)
  }

  pub(crate) fn pause(&mut self) -> bool {
    if self.state != State::Running {
      return false;
    }

    debug!(elapsed = self.elapsed, "session paused");
    self.state = State::Paused;

    true
  }

  /// Seconds left before a time-based session ends.
  pub(crate) fn remaining(&self) -> Option<u64> {
    match self.test_type {
      TestType::TimeBased => Some(self.time_limit.saturating_sub(self.elapsed)),
      TestType::ParagraphBased => None,
    }
  }

  pub(crate) fn resume(&mut self) -> bool {
    if self.state != State::Paused {
      return false;
    }

    debug!(elapsed = self.elapsed, "session resumed");
    self.state = State::Running;

    true
  }

  pub(crate) fn slots(&self) -> &[CharacterSlot] {
    &self.slots
  }

  pub(crate) fn state(&self) -> State {
    self.state
  }

  pub(crate) fn tally(&self) -> Option<Tally> {
    self.tally
  }

  pub(crate) fn tick(&mut self) {
    if self.state != State::Running {
      return;
    }

    self.elapsed += 1;

    if self.test_type == TestType::TimeBased && self.elapsed >= self.time_limit {
      self.end();
    }
  }

  pub(crate) fn type_char(&mut self, c: char) {
    if self.state != State::Running {
      return;
    }

    let Some(slot) = self.slots.get(self.cursor) else {
      return;
    };

    if slot.character == c {
      self.marks[self.cursor] = Mark::Correct;
    } else {
      self.marks[self.cursor] = Mark::Incorrect;
      self.errors += 1;
    }

    self.cursor += 1;

    if self.cursor >= self.slots.len() {
      self.end();
    }
  }
}
