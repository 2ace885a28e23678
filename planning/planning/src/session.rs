use tracing::info;

use crate::assignment::AssignmentLedger;
use crate::batch::BatchId;
use crate::work_table::WorkTable;

/// The whole mutable state of one planning session: work table, assignment
/// ledger and the single-slot undo token.
///
/// Operations take `&mut Session` explicitly; there is no ambient state.
/// The exclusive borrow is also what enforces the single-writer rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Session {
    #[serde(default)]
    pub work_table: WorkTable,

    #[serde(default)]
    pub ledger: AssignmentLedger,

    /// Batch id of the most recent assignment, overwritten by every new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_batch: Option<BatchId>,

    #[serde(default)]
    batch_counter: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_batch_id(&mut self) -> BatchId {
        self.batch_counter += 1;
        BatchId::new(self.batch_counter)
    }

    /// Clears the work table and the ledger. The batch counter is retained
    /// so ids stay unique across resets within one session.
    pub fn reset(&mut self) {
        self.work_table.clear();
        self.ledger.clear();
        self.last_batch = None;
        info!("Session reset.");
    }
}
