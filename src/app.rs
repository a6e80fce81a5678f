use super::*;

const IDLE: Duration = Duration::from_millis(100);

const TICK: Duration = Duration::from_secs(1);

/// Restores cooked mode when dropped, including on early returns.
pub(crate) struct RawMode;

impl RawMode {
  pub(crate) fn enable() -> Result<Self> {
    terminal::enable_raw_mode()?;
    Ok(Self)
  }
}

impl Drop for RawMode {
  fn drop(&mut self) {
    if let Err(error) = terminal::disable_raw_mode() {
      warn!(%error, "failed to restore terminal mode");
    }
  }
}

pub(crate) struct App {
  feedback: Feedback,
  input_attached: bool,
  keyboard: Keyboard,
  session: Session,
  timer: Timer,
}

impl App {
  pub(crate) fn new(session: Session) -> Self {
    let mut app = Self {
      feedback: Feedback::default(),
      input_attached: false,
      keyboard: Keyboard::qwerty(),
      session,
      timer: Timer::new(TICK),
    };

    app.sync_input();

    app
  }

  fn attach_input(&mut self) {
    if !self.input_attached {
      debug!("session input attached");
      self.input_attached = true;
    }
  }

  fn detach_input(&mut self) {
    if self.input_attached {
      debug!(state = ?self.session.state(), "session input detached");
      self.input_attached = false;
    }
  }

  fn display(&self, now: Instant) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    let (width, _) = terminal::size()?;

    self.display_header()?;

    let slots = self.session.slots();

    for line in lines(slots, usize::from(width).saturating_sub(1).max(1)) {
      for slot in line {
        command!(SetForegroundColor(self.slot_color(&slot)))?;
        print!("{}", slot.character);
      }

      print!("\r\n");
    }

    command!(ResetColor)?;
    print!("\r\n");

    self.display_keyboard(now)?;

    if let Some(tally) = self.session.tally() {
      print!(
        "\r\n{}\r\n\r\nPress Esc or Enter to exit\r\n",
        Statistics::new(tally, self.session.elapsed())?
      );
    }

    stdout().flush()?;

    Ok(())
  }

  fn display_header(&self) -> Result {
    print!("homerow");

    if let Some(remaining) = self.session.remaining() {
      print!("  {}", statistics::format_remaining(remaining));
    }

    let hint = match self.session.state() {
      State::Ended => "",
      State::Paused => "[Space] Start",
      State::Running => "[Esc] Pause",
    };

    command!(SetForegroundColor(Color::DarkGrey))?;
    print!("  {hint}\r\n\r\n");
    command!(ResetColor)?;

    Ok(())
  }

  fn display_keyboard(&self, now: Instant) -> Result {
    let next = self
      .session
      .expected()
      .and_then(|c| self.keyboard.locate(c));

    for (row, keys) in self.keyboard.rows().iter().enumerate() {
      print!("{}", " ".repeat(row * 2));

      for (column, key) in keys.iter().enumerate() {
        let handle = KeyHandle { column, row };

        command!(SetForegroundColor(
          match self.feedback.style(handle, next, now) {
            KeyStyle::Next => Color::Yellow,
            KeyStyle::Plain => Color::White,
            KeyStyle::Pressed => Color::Cyan,
          }
        ))?;

        match key {
          ' ' => print!("[{:^21}]", "space"),
          key => print!("[{}]", key.to_ascii_uppercase()),
        }
      }

      command!(ResetColor)?;
      print!("\r\n");
    }

    Ok(())
  }

  fn handle_action(&mut self, action: Action, now: Instant) -> Flow {
    if !self.input_attached {
      return match action {
        Action::Confirm | Action::Escape | Action::Quit => Flow::Quit,
        _ => Flow::Ended,
      };
    }

    if let (State::Running, Action::Insert(c)) = (self.session.state(), &action) {
      self.feedback.press(&self.keyboard, *c, now);
    }

    let flow = self.session.handle_action(action);

    self.sync(now);

    flow
  }

  pub(crate) fn run(&mut self) -> Result {
    loop {
      self.display(Instant::now())?;

      if event::poll(self.timer.timeout(Instant::now(), IDLE))? {
        if let Some(action) = Action::from_event(event::read()?) {
          if self.handle_action(action, Instant::now()) == Flow::Quit {
            break;
          }
        }
      }

      self.tick(Instant::now());
    }

    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    if let Some(tally) = self.session.tally() {
      print!("{}\r\n", Statistics::new(tally, self.session.elapsed())?);
    }

    Ok(())
  }

  fn slot_color(&self, slot: &CharacterSlot) -> Color {
    if self.session.state() != State::Ended && slot.index == self.session.cursor() {
      return Color::Yellow;
    }

    match self.session.mark(slot.index) {
      Mark::Correct => Color::Green,
      Mark::Incorrect => Color::Red,
      Mark::Unseen => Color::White,
    }
  }

  /// Follows the session state: input stays attached until the session ends.
  fn sync(&mut self, now: Instant) {
    self.sync_timer(now);
    self.sync_input();
  }

  fn sync_input(&mut self) {
    match self.session.state() {
      State::Ended => self.detach_input(),
      State::Paused | State::Running => self.attach_input(),
    }
  }

  /// Keeps exactly one tick schedule armed while the session runs.
  fn sync_timer(&mut self, now: Instant) {
    let running = self.session.state() == State::Running;

    if running != self.timer.is_running() {
      debug!(running, elapsed = self.session.elapsed(), "timer toggled");
    }

    if running {
      self.timer.start(now);
    } else {
      self.timer.stop(now);
    }
  }

  fn tick(&mut self, now: Instant) {
    for _ in 0..self.timer.poll(now) {
      self.session.tick();
    }

    self.sync(now);
  }
}

/// Lays out slots into lines of at most `width` characters without splitting
/// words. A word longer than a line is split anyway.
pub(crate) fn lines(slots: &[CharacterSlot], width: usize) -> Vec<Vec<CharacterSlot>> {
  let mut lines = vec![Vec::new()];

  for word in generator::group_by_word(slots) {
    let Some(line) = lines.last_mut() else {
      break;
    };

    let visible = word.iter().filter(|slot| !slot.is_space()).count();

    if !line.is_empty() && line.len() + visible > width {
      lines.push(Vec::new());
    }

    for slot in word {
      if let Some(line) = lines.last_mut() {
        if line.len() == width && !slot.is_space() {
          lines.push(vec![slot]);
          continue;
        }

        line.push(slot);
      }
    }
  }

  lines
}
