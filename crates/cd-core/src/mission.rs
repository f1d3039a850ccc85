//! The `Mission` value type: one parsed line of the missions input.

use std::fmt;

use crate::CityName;

/// A request to move one vehicle `source → middle → destination`.
///
/// `drop_positions` are taken verbatim from input; how they map onto cargo
/// indices depends on [`IndexBase`][crate::IndexBase].  Duplicates and
/// out-of-range positions are the engine's concern, not the parser's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    pub source:         CityName,
    pub middle:         CityName,
    pub destination:    CityName,
    /// Packages to load at the source.
    pub load_at_source: usize,
    /// Packages to load at the middle city.
    pub load_at_middle: usize,
    pub drop_positions: Vec<usize>,
}

impl Mission {
    /// A mission over the given route that loads and drops nothing.
    pub fn new(
        source:      impl Into<CityName>,
        middle:      impl Into<CityName>,
        destination: impl Into<CityName>,
    ) -> Self {
        Self {
            source:         source.into(),
            middle:         middle.into(),
            destination:    destination.into(),
            load_at_source: 0,
            load_at_middle: 0,
            drop_positions: Vec::new(),
        }
    }

    pub fn loading(mut self, at_source: usize, at_middle: usize) -> Self {
        self.load_at_source = at_source;
        self.load_at_middle = at_middle;
        self
    }

    pub fn dropping(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.drop_positions = positions.into_iter().collect();
        self
    }

    /// The three city names in visiting order.
    pub fn route(&self) -> [&CityName; 3] {
        [&self.source, &self.middle, &self.destination]
    }
}

/// Formats in the missions-file syntax, e.g. `X-Y-Z-2-1-0,1`.
impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}-",
            self.source, self.middle, self.destination, self.load_at_source, self.load_at_middle
        )?;
        for (i, p) in self.drop_positions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
