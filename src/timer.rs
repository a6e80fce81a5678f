use super::*;

/// Deadline-based periodic tick source. At most one schedule is ever armed.
/// Stopping keeps the part of the period already run, so short runs between
/// stops still add up to whole ticks.
#[derive(Clone, Debug)]
pub(crate) struct Timer {
  next: Option<Instant>,
  period: Duration,
  remaining: Option<Duration>,
}

impl Timer {
  pub(crate) fn new(period: Duration) -> Self {
    Self {
      next: None,
      period,
      remaining: None,
    }
  }

  pub(crate) fn is_running(&self) -> bool {
    self.next.is_some()
  }

  /// Number of whole periods that have elapsed since the last delivered tick.
  pub(crate) fn poll(&mut self, now: Instant) -> u32 {
    let Some(mut next) = self.next else {
      return 0;
    };

    let mut ticks = 0;

    while next <= now {
      ticks += 1;
      next += self.period;
    }

    self.next = Some(next);

    ticks
  }

  pub(crate) fn start(&mut self, now: Instant) {
    if self.next.is_none() {
      self.next = Some(now + self.remaining.take().unwrap_or(self.period));
    }
  }

  pub(crate) fn stop(&mut self, now: Instant) {
    if let Some(next) = self.next.take() {
      self.remaining = Some(next.saturating_duration_since(now));
    }
  }

  /// How long to wait for input before the next tick is due.
  pub(crate) fn timeout(&self, now: Instant, idle: Duration) -> Duration {
    self
      .next
      .map_or(idle, |next| next.saturating_duration_since(now).min(idle))
  }
}
