//! # Instance
//!
//! A 0/1 knapsack problem instance: an ordered list of items and the sack capacity.
//! The number of items is also the population size used by the evolution.
//!
//! ## Text format
//!
//! ```text
//! N capacity
//! profit weight
//! ...            (N rows)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use knapga::instance::Instance;
//!
//! let text = "10 50\n60 10\n100 20\n120 30\n50 5\n70 15\n30 5\n90 25\n40 10\n80 20\n20 5\n";
//! let instance = Instance::parse(text).unwrap();
//!
//! assert_eq!(instance.len(), 10);
//! assert_eq!(instance.capacity(), 50);
//! assert_eq!(instance.items()[2].profit, 120);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{GeneticError, Result, ResultExt};

/// An item that may be put into the sack.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub profit: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(profit: u64, weight: u64) -> Self {
        Self { profit, weight }
    }
}

impl From<(u64, u64)> for Item {
    fn from((profit, weight): (u64, u64)) -> Self {
        Self { profit, weight }
    }
}

/// Items plus the capacity of the sack. Immutable once built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    items: Vec<Item>,
    capacity: u64,
}

impl Instance {
    /// Creates an instance from items and a capacity.
    ///
    /// The item count is not checked here; the launcher rejects counts that are
    /// not a positive multiple of ten before a run starts.
    pub fn new<I>(items: I, capacity: u64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            capacity,
        }
    }

    /// Parses the text format described in the module documentation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidInstance` if the header or any row is missing,
    /// a token is not a non-negative integer, or the item count is zero or not
    /// divisible by ten.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let count = next_number(&mut tokens, "item count")?;
        let capacity = next_number(&mut tokens, "sack capacity")?;

        let count = usize::try_from(count).map_err(|_| {
            GeneticError::InvalidInstance(format!("Item count {} is too large", count))
        })?;

        if count == 0 || count % 10 != 0 {
            return Err(GeneticError::InvalidInstance(format!(
                "Item count must be a positive multiple of 10, got {}",
                count
            )));
        }

        let items = (0..count)
            .map(|row| {
                let profit = next_number(&mut tokens, &format!("profit of item {}", row))?;
                let weight = next_number(&mut tokens, &format!("weight of item {}", row))?;
                Ok(Item { profit, weight })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { items, capacity })
    }

    /// Reads and parses an instance from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Loads an instance from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Cannot open {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the population size.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<u64>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| GeneticError::InvalidInstance(format!("Missing {}", what)))?;

    token.parse::<u64>().map_err(|e| {
        GeneticError::InvalidInstance(format!("Invalid {} '{}': {}", what, token, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> String {
        (0..count)
            .map(|i| format!("{} {}\n", i + 1, i + 2))
            .collect::<String>()
    }

    #[test]
    fn test_parse_valid_instance() {
        let text = format!("10 25\n{}", rows(10));
        let instance = Instance::parse(&text).unwrap();

        assert_eq!(instance.len(), 10);
        assert_eq!(instance.capacity(), 25);
        assert_eq!(instance.items()[0], Item::new(1, 2));
        assert_eq!(instance.items()[9], Item::new(10, 11));
    }

    #[test]
    fn test_parse_rejects_count_not_divisible_by_ten() {
        let text = format!("5 25\n{}", rows(5));

        match Instance::parse(&text) {
            Err(GeneticError::InvalidInstance(msg)) => assert!(msg.contains("multiple of 10")),
            other => panic!("Expected InvalidInstance error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_zero_items() {
        assert!(matches!(
            Instance::parse("0 10\n"),
            Err(GeneticError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_parse_rejects_missing_rows() {
        let text = format!("10 25\n{}", rows(9));

        match Instance::parse(&text) {
            Err(GeneticError::InvalidInstance(msg)) => assert!(msg.contains("item 9")),
            other => panic!("Expected InvalidInstance error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Instance::parse("ten 25"),
            Err(GeneticError::InvalidInstance(_))
        ));
        assert!(matches!(
            Instance::parse("10 -3"),
            Err(GeneticError::InvalidInstance(_))
        ));
        assert!(matches!(
            Instance::parse(""),
            Err(GeneticError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let text = format!("10 7\n{}", rows(10));
        let instance = Instance::from_reader(text.as_bytes()).unwrap();
        assert_eq!(instance.capacity(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Instance::load("/definitely/not/here.txt");
        assert!(matches!(result, Err(GeneticError::Other(_))));
    }
}
