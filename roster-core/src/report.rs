//! Ordered listing of live members
//!
//! Order is by the code point of the first character of each name only.
//! Case is not folded, so every upper-case initial sorts before every
//! lower-case one. Names sharing an initial keep bucket order.

use crate::probe_table::ProbeTable;
use crate::record::Record;
use std::fmt;

const BANNER: &str = "############################################";

/// Live members, or an explicit marker for an empty table
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    NoEntries,
    Entries(Vec<&'a Record>),
}

impl<'a> Listing<'a> {
    pub fn len(&self) -> usize {
        match self {
            Listing::NoEntries => 0,
            Listing::Entries(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoEntries)
    }
}

/// Read-only view rendering a table for display
pub struct Reporter<'a> {
    table: &'a ProbeTable,
}

impl<'a> Reporter<'a> {
    pub fn new(table: &'a ProbeTable) -> Self {
        Reporter { table }
    }

    /// Live records sorted by first character
    pub fn listing(&self) -> Listing<'a> {
        let mut records: Vec<&'a Record> = self.table.iter().collect();
        if records.is_empty() {
            return Listing::NoEntries;
        }

        records.sort_by_key(|record| first_char_code(record.name()));
        Listing::Entries(records)
    }
}

fn first_char_code(name: &str) -> u32 {
    name.chars().next().map_or(0, |c| c as u32)
}

impl fmt::Display for Reporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "                 DATABASE                   ")?;
        writeln!(f, "{}", BANNER)?;

        match self.listing() {
            Listing::NoEntries => writeln!(f, "No entries...")?,
            Listing::Entries(records) => {
                for record in records {
                    writeln!(f, "{}", record)?;
                }
            }
        }

        writeln!(f, "{}", BANNER)?;
        writeln!(f, "Load factor is at %{}", self.table.load_factor_percent())?;
        writeln!(f, "Size {}", self.table.len())?;
        writeln!(f, "{}", BANNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(names: &[&str]) -> ProbeTable {
        let mut table = ProbeTable::new(31).unwrap();
        for name in names {
            table.put(Record::new(*name, "Uni").unwrap()).unwrap();
        }
        table
    }

    fn names<'a>(listing: &Listing<'a>) -> Vec<&'a str> {
        match listing {
            Listing::NoEntries => Vec::new(),
            Listing::Entries(records) => records.iter().copied().map(Record::name).collect(),
        }
    }

    #[test]
    fn test_empty_listing() {
        let table = ProbeTable::new(11).unwrap();
        let listing = Reporter::new(&table).listing();
        assert_eq!(listing, Listing::NoEntries);
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_orders_by_raw_first_character() {
        let table = table_with(&["Bob", "alice", "Carol"]);
        let listing = Reporter::new(&table).listing();
        assert_eq!(names(&listing), vec!["Bob", "Carol", "alice"]);
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn test_only_first_character_compared() {
        let table = table_with(&["Zed", "Anna", "Abe", "Mia"]);
        let listing = Reporter::new(&table).listing();
        let ordered = names(&listing);

        assert_eq!(ordered.len(), 4);
        assert!(ordered[..2].contains(&"Anna"));
        assert!(ordered[..2].contains(&"Abe"));
        assert_eq!(&ordered[2..], &["Mia", "Zed"]);
    }

    #[test]
    fn test_listing_skips_removed() {
        let mut table = table_with(&["Bob", "Carol"]);
        table.remove("Bob").unwrap();
        assert_eq!(names(&Reporter::new(&table).listing()), vec!["Carol"]);

        table.remove("Carol").unwrap();
        assert_eq!(Reporter::new(&table).listing(), Listing::NoEntries);
    }

    #[test]
    fn test_display() {
        let table = ProbeTable::new(10).unwrap();
        let rendered = Reporter::new(&table).to_string();
        assert!(rendered.contains("DATABASE"));
        assert!(rendered.contains("No entries..."));
        assert!(rendered.contains("Size 0"));

        let mut table = ProbeTable::new(10).unwrap();
        table.put(Record::new("Alice", "UniA").unwrap()).unwrap();
        let rendered = Reporter::new(&table).to_string();
        assert!(rendered.contains("Alice <> UniA\n"));
        assert!(rendered.contains("Load factor is at %10\n"));
        assert!(rendered.contains("Size 1\n"));
    }
}
