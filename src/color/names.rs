//! Named colour lookup table
//!
//! Built once at startup from an X11 style `rgb.txt` listing:
//!
//! ```text
//! 240 248 255 alice blue
//! 242 120 120 Pinea Red
//! ```
//!
//! Name words are joined without separators and lowercased, so the second
//! line is found under `pineared`.

use std::collections::HashMap;

use super::Rgb;

/// Immutable index from lowercase colour name to colour.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: HashMap<String, Rgb>,
}

impl NameTable {
    /// Build the table from a newline separated `R G B Name...` listing.
    ///
    /// Blank, comment and malformed lines are skipped. A name that appears
    /// twice keeps the later colour.
    pub fn parse(listing: &str) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for (index, line) in listing.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((name, colour)) => {
                    entries.insert(name, colour);
                }
                None => {
                    skipped += 1;
                    tracing::debug!(line = index + 1, content = line, "Skipping colour name line");
                }
            }
        }

        tracing::debug!(names = entries.len(), skipped, "Built colour name table");

        Self { entries }
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, name: &str) -> Option<Rgb> {
        self.entries.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(String, Rgb)> {
    let mut tokens = line.split_whitespace();
    let mut channel = || tokens.next()?.parse::<u8>().ok();
    let colour = Rgb::new(channel()?, channel()?, channel()?);

    let name = tokens.collect::<String>().to_lowercase();
    if name.is_empty() {
        return None;
    }

    Some((name, colour))
}
