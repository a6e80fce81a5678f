use super::*;

#[derive(Debug, Clone)]
pub(crate) struct Statistics {
  pub(crate) accuracy: f64,
  pub(crate) characters: usize,
  pub(crate) elapsed_time: u64,
  pub(crate) errors: usize,
  pub(crate) wpm: f64,
}

impl Statistics {
  pub(crate) fn new(tally: Tally, elapsed_time: u64) -> Result<Self> {
    Ok(Self {
      accuracy: accuracy(tally)?,
      characters: tally.test_string_length,
      elapsed_time,
      errors: tally.error_length,
      wpm: if elapsed_time == 0 {
        0.0
      } else {
        wpm(tally.test_string_length, elapsed_time)?
      },
    })
  }
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {:.1} | Characters: {} | Errors: {} | Accuracy: {:.1}% | Elapsed Time: {}s",
      self.wpm, self.characters, self.errors, self.accuracy, self.elapsed_time
    )
  }
}

fn accuracy(tally: Tally) -> Result<f64> {
  if tally.test_string_length == 0 {
    return Ok(100.00);
  }

  let correct_chars = tally
    .test_string_length
    .checked_sub(tally.error_length)
    .ok_or_else(|| anyhow!("character count underflow"))?;

  let accuracy = (correct_chars as f64 / tally.test_string_length as f64) * 100.0;

  if accuracy.is_finite() {
    Ok(accuracy)
  } else {
    Err(anyhow!("accuracy calculation produced invalid result"))
  }
}

fn wpm(characters: usize, elapsed_time: u64) -> Result<f64> {
  if elapsed_time == 0 {
    bail!("no time has elapsed since starting");
  }

  let words = characters as f64 / 5.0;

  let minutes = elapsed_time as f64 / 60.0;

  let wpm = words / minutes;

  if wpm.is_finite() {
    Ok(wpm)
  } else {
    Err(anyhow!("wpm calculation produced invalid result"))
  }
}

/// Seconds left in `M:SS` form.
pub(crate) fn format_remaining(remaining: u64) -> String {
  format!("{}:{:02}", remaining / 60, remaining % 60)
}
