use std::collections::HashMap;

/// Display-number sequence shared by every report generated from one model.
///
/// Numbers start at 1 and are handed out in order of first request; once an
/// id has a number it keeps it for the life of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonNumbering {
    numbers: HashMap<String, u32>,
    next: u32,
}

impl Default for PersonNumbering {
    fn default() -> Self {
        Self { numbers: HashMap::new(), next: 1 }
    }
}

impl PersonNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number for `id`, assigning the next free one on first use.
    pub fn number_for(&mut self, id: &str) -> u32 {
        if let Some(&number) = self.numbers.get(id) {
            return number;
        }
        let number = self.next;
        self.numbers.insert(id.to_string(), number);
        self.next += 1;
        number
    }

    /// Number already assigned to `id`, without assigning one.
    pub fn get(&self, id: &str) -> Option<u32> {
        self.numbers.get(id).copied()
    }

    pub fn assigned(&self) -> usize {
        self.numbers.len()
    }
}
