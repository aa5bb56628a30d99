/// Cursor over a fully materialised input.
#[derive(Debug, Clone)]
pub struct CharacterSource {
    buffer: Vec<char>,
    position: usize,
}

impl CharacterSource {
    pub fn new(source: &str) -> CharacterSource {
        CharacterSource {
            buffer: source.chars().collect(),
            position: 0,
        }
    }

    /// Yields the next character, or `None` once the input is used up.
    /// Running off the end is not an error and leaves the cursor in place.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.buffer.get(self.position).copied()?;
        self.position += 1;
        Some(ch)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.buffer.len()
    }
}
