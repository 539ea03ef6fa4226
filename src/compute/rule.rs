//! Elementary rule evaluation.
//!
//! A rule is Wolfram's 8-bit lookup table: bit `p` holds the next state for
//! neighbourhood pattern `p = left * 4 + center * 2 + right`.

use crate::schema::ConfigError;

/// Validated rule number (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule(pub u8);

impl Rule {
    /// Next state for a 3-bit neighbourhood pattern.
    #[inline]
    pub fn output(self, pattern: u8) -> bool {
        (self.0 >> (pattern & 0b111)) & 1 == 1
    }

    /// Neighbourhood pattern around column `i`. Cells outside the row are dead.
    #[inline]
    pub fn pattern_at(row: &[bool], i: usize) -> u8 {
        let left = i.checked_sub(1).is_some_and(|l| row[l]);
        let center = row[i];
        let right = row.get(i + 1).copied().unwrap_or(false);
        ((left as u8) << 2) | ((center as u8) << 1) | right as u8
    }
}

impl TryFrom<u32> for Rule {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Rule)
            .map_err(|_| ConfigError::InvalidRule(value))
    }
}

impl From<u8> for Rule {
    fn from(value: u8) -> Self {
        Rule(value)
    }
}

/// Compute the next generation of `row` under `rule`.
pub fn next_row(row: &[bool], rule: Rule) -> Vec<bool> {
    (0..row.len())
        .map(|i| rule.output(Rule::pattern_at(row, i)))
        .collect()
}

/// Write the next generation of `row` into `out`, which must have the same length.
pub fn next_row_into(row: &[bool], rule: Rule, out: &mut [bool]) {
    debug_assert_eq!(row.len(), out.len());
    for (i, cell) in out.iter_mut().enumerate() {
        *cell = rule.output(Rule::pattern_at(row, i));
    }
}
