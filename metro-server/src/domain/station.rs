//! Station identity type.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A station on a single line.
///
/// Identity is the `(name, line)` pair. The same physical interchange
/// appears once per line it serves, as separate `Station` values that share
/// a name. `index` is positional data only and takes no part in equality or
/// hashing.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let a = Station::new("Rajiv Chowk", "Blue", 28);
/// let b = Station::new("Rajiv Chowk", "Blue", 3);
/// let c = Station::new("Rajiv Chowk", "Yellow", 15);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    /// Human-readable name, not unique across lines.
    pub name: String,

    /// Name of the line this station belongs to.
    pub line: String,

    /// Position of the station's record in its line's source file.
    pub index: usize,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, line: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            line: line.into(),
            index,
        }
    }

    /// Lowercased name, as used for case-insensitive lookups.
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// True if both stations lie on the same line.
    pub fn shares_line_with(&self, other: &Station) -> bool {
        self.line == other.line
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.line == other.line
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.line.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.line)
    }
}
