//! Synchronization pass and polling loop

use crate::diff::{generate_sync_plan, PlanStats};
use crate::executor::{execute_plan, ExecutionStats};
use crate::logging::EventLog;
use crate::scanner::scan_tree;
use crate::scheduler::Scheduler;
use crate::types::{SyncAction, SyncError};
use crate::Config;
use std::fs;

/// What one synchronization pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// The replica root was missing and got created this pass
    pub created_replica_root: bool,

    /// Plan-level counts (creates, copies, deletes, skips)
    pub plan: PlanStats,

    /// Execution counts and copied bytes
    pub execution: ExecutionStats,
}

impl PassSummary {
    /// True when the pass changed nothing (the trees already matched)
    pub fn is_noop(&self) -> bool {
        !self.created_replica_root && self.execution.total_actions == 0
    }
}

/// Run one complete synchronization pass.
///
/// Scans both trees fresh (no state survives between passes), plans the
/// difference, and applies it in phase order, logging one line per action
/// and a completion marker at the end. The first failure aborts the pass;
/// the caller decides whether to retry (the polling loop always does).
pub fn run_pass(config: &Config, log: &EventLog) -> Result<PassSummary, SyncError> {
    let mut summary = PassSummary::default();

    if !config.replica.exists() {
        fs::create_dir_all(&config.replica).map_err(|e| SyncError::CreateDir {
            path: config.replica.clone(),
            source: e,
        })?;
        log.log(&format!(
            "Created replica directory: {}",
            config.replica.display()
        ));
        summary.created_replica_root = true;
    }

    let src_tree = scan_tree(&config.source)?;
    let replica_tree = scan_tree(&config.replica)?;

    let plan = generate_sync_plan(&src_tree, &replica_tree)?;
    summary.plan = plan.stats.clone();

    let on_action = |action: &SyncAction| {
        log.log(&format!("{}: {}", action.label(), action.path().display()));
    };
    summary.execution = execute_plan(&plan, &config.source, &config.replica, Some(&on_action))?;

    log.log("Synchronization completed.");

    Ok(summary)
}

/// Run the polling loop forever (until the scheduler is stopped).
///
/// Each tick is one pass; a failed pass is logged as an error event and the
/// loop simply waits for the next tick. Only startup validation may
/// terminate the process, never a pass error.
pub fn run_with_scheduler(config: &Config, scheduler: &Scheduler, log: &EventLog) {
    scheduler.run(|| {
        if let Err(err) = run_pass(config, log) {
            log.log(&format!("Error: {}", err));
        }
    });
}

/// Build the logger and scheduler from the config and enter the loop.
pub fn run(config: &Config) {
    let log = EventLog::new(&config.log_file);
    let scheduler = Scheduler::new(config.interval);
    run_with_scheduler(config, &scheduler, &log);
}
