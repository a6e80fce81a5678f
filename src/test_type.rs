use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TestType {
  ParagraphBased,
  TimeBased,
}

impl TestType {
  pub(crate) const ALL: [Self; 2] = [Self::TimeBased, Self::ParagraphBased];

  pub(crate) fn name(self) -> &'static str {
    match self {
      Self::ParagraphBased => "Paragraph based",
      Self::TimeBased => "Time based",
    }
  }
}

impl Display for TestType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for TestType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|test_type| test_type.name() == s)
      .ok_or_else(|| Error::InvalidTestType(s.into()))
  }
}
