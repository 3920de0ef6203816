#[derive(Debug, Clone)]
pub enum OutputBlock {
    /// Room header line.
    Title(String),
    /// Ordinary status line: descriptions, listings, command feedback.
    Text(String),
    /// Session-level event: a win, a death, a world completion note.
    Event(String),
}

/// Buffered turn output. Handlers append blocks instead of printing so the
/// I/O boundary owns presentation.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// Flattened view of the buffered lines, in order. Convenient for tests
    /// that assert on what the player would see.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .map(|b| match b {
                OutputBlock::Title(s) | OutputBlock::Text(s) | OutputBlock::Event(s) => s.as_str(),
            })
            .collect()
    }
}
