#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Registered but never observed by a compute pass.
    #[default]
    Init,
    Dirty,
    Clean,
}

impl StateSyncStatus {
    /// Dependents of a stale value must be recomputed.
    pub fn is_stale(self) -> bool {
        matches!(self, Self::Init | Self::Dirty)
    }
}
