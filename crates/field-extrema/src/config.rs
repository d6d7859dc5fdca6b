use crate::error::ExtremaError;
use crate::extrema::ExtremumKind;

/// What happens to a qualifying cell once its coordinate list is full.
///
/// The same policy applies to maxima and minima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Skip the cell entirely, map write included. Map and lists stay in
    /// one-to-one correspondence.
    #[default]
    Truncate,
    /// Still mark the cell in the map; only the list entry is dropped.
    MarkOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum number of maxima coordinates recorded.
    pub max_capacity: usize,
    /// Maximum number of minima coordinates recorded.
    pub min_capacity: usize,
    pub overflow: OverflowPolicy,
    /// `scan_par` stays sequential below this many interior rows.
    pub par_min_rows: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_capacity: usize::MAX,
            min_capacity: usize::MAX,
            overflow: OverflowPolicy::Truncate,
            par_min_rows: 64,
        }
    }
}

impl ScanConfig {
    /// Same capacity for both lists.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            max_capacity: capacity,
            min_capacity: capacity,
            ..Self::default()
        }
    }

    /// Accepts a signed capacity as handed over by foreign callers.
    pub fn try_with_capacity(raw: i64) -> Result<Self, ExtremaError> {
        let capacity = usize::try_from(raw).map_err(|_| ExtremaError::InvalidCapacity(raw))?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn capacity(&self, kind: ExtremumKind) -> usize {
        match kind {
            ExtremumKind::Maximum => self.max_capacity,
            ExtremumKind::Minimum => self.min_capacity,
        }
    }
}
