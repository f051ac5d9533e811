//! Diff plan container and statistics

use crate::types::SyncAction;

/// The ordered set of replica mutations for one pass.
///
/// Actions are appended in phase order (create dirs, copy/update, delete
/// files, delete dirs) and executed front to back. The additive-before-
/// destructive sequencing is a contract: a moved file's new path must land
/// before its old parent directory is considered for deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffPlan {
    /// Replica mutations, in execution order
    pub actions: Vec<SyncAction>,

    /// Aggregate statistics about the plan
    pub stats: PlanStats,
}

impl DiffPlan {
    /// Create a new empty diff plan
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            stats: PlanStats::default(),
        }
    }

    /// Add an action to the plan and update statistics
    pub fn add_action(&mut self, action: SyncAction) {
        match &action {
            SyncAction::CreateDir(_) => {
                self.stats.create_dir_count += 1;
            }
            SyncAction::CopyOrUpdate(entry) => {
                self.stats.copy_count += 1;
                self.stats.total_bytes += entry.size;
            }
            SyncAction::DeleteFile(_) => {
                self.stats.delete_file_count += 1;
            }
            SyncAction::DeleteDir(_) => {
                self.stats.delete_dir_count += 1;
            }
        }

        self.actions.push(action);
    }

    /// Record a file pair the oracle judged equal (no action emitted)
    pub fn record_skip(&mut self) {
        self.stats.skip_count += 1;
    }

    /// True when the plan contains no mutations
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sort actions by path within each phase for stable log output.
    ///
    /// Enumeration order is unspecified, so logs would otherwise jitter
    /// between passes. Phases themselves are never reordered.
    pub fn sort_each_phase(&mut self) {
        self.actions
            .sort_by(|a, b| phase_rank(a).cmp(&phase_rank(b)).then_with(|| a.path().cmp(b.path())));
    }
}

fn phase_rank(action: &SyncAction) -> u8 {
    match action {
        SyncAction::CreateDir(_) => 0,
        SyncAction::CopyOrUpdate(_) => 1,
        SyncAction::DeleteFile(_) => 2,
        SyncAction::DeleteDir(_) => 3,
    }
}

impl Default for DiffPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a diff plan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanStats {
    /// Number of CreateDir actions
    pub create_dir_count: usize,

    /// Number of CopyOrUpdate actions
    pub copy_count: usize,

    /// Number of DeleteFile actions
    pub delete_file_count: usize,

    /// Number of DeleteDir actions
    pub delete_dir_count: usize,

    /// File pairs judged equal and left untouched
    pub skip_count: usize,

    /// Total bytes to copy (CopyOrUpdate only)
    pub total_bytes: u64,
}
