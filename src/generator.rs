use super::*;

pub(crate) const CHARACTERS: [char; 8] = ['a', 's', 'd', 'f', 'j', 'k', 'l', ';'];

const MIN_WORD_LENGTH: usize = 3;
const MAX_WORD_LENGTH: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CharacterSlot {
  pub(crate) character: char,
  pub(crate) index: usize,
}

impl CharacterSlot {
  pub(crate) fn is_space(&self) -> bool {
    self.character == ' '
  }
}

/// Draws a home-row character. A first draw landing on the last character is
/// drawn again, which slightly lowers its frequency.
pub(crate) fn generate_char<R: Rng + ?Sized>(rng: &mut R) -> char {
  let mut index = rng.gen_range(0..CHARACTERS.len());

  if index == CHARACTERS.len() - 1 {
    index = rng.gen_range(0..CHARACTERS.len());
  }

  CHARACTERS[index]
}

/// A word of 3 to 7 characters starting at `position`, cut short so it never
/// crosses `max_length`.
pub(crate) fn generate_word<R: Rng + ?Sized>(
  position: usize,
  max_length: usize,
  rng: &mut R,
) -> Vec<CharacterSlot> {
  let size = rng
    .gen_range(MIN_WORD_LENGTH..=MAX_WORD_LENGTH)
    .min(max_length.saturating_sub(position));

  (0..size)
    .map(|offset| CharacterSlot {
      character: generate_char(rng),
      index: position + offset,
    })
    .collect()
}

pub(crate) fn generate_paragraph<R: Rng + ?Sized>(
  max_length: usize,
  rng: &mut R,
) -> Vec<CharacterSlot> {
  let mut paragraph = Vec::with_capacity(max_length);

  while paragraph.len() < max_length {
    let word = generate_word(paragraph.len(), max_length, rng);
    paragraph.extend(word);

    if paragraph.len() + 1 < max_length {
      paragraph.push(CharacterSlot {
        character: ' ',
        index: paragraph.len(),
      });
    }
  }

  paragraph
}

/// Splits slots into words so a renderer can wrap lines between words. Each
/// space stays with the word it terminates.
pub(crate) fn group_by_word(slots: &[CharacterSlot]) -> Vec<Vec<CharacterSlot>> {
  let mut groups = vec![Vec::new()];

  for slot in slots {
    if let Some(last) = groups.last_mut() {
      last.push(*slot);
    }

    if slot.is_space() {
      groups.push(Vec::new());
    }
  }

  groups
}
