//! Calculation history access.

use std::path::Path;
use tc_results::{CalculationRecord, CalculationStore};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Open the history store: an explicit directory wins, otherwise the default
/// directory next to the input file.
pub fn history_store(
    input_path: Option<&Path>,
    history_dir: Option<&Path>,
) -> AppResult<CalculationStore> {
    match (history_dir, input_path) {
        (Some(dir), _) => Ok(CalculationStore::new(dir.to_path_buf())?),
        (None, Some(path)) => Ok(CalculationStore::for_inputs(path)?),
        (None, None) => Err(AppError::InvalidInput(
            "history requires an input file or a history directory".to_string(),
        )),
    }
}

/// Most recent calculations first.
pub fn list_calculations(
    store: &CalculationStore,
    limit: usize,
) -> AppResult<Vec<CalculationRecord>> {
    Ok(store.list(limit)?)
}

pub fn load_calculation(store: &CalculationStore, id: &str) -> AppResult<CalculationRecord> {
    Ok(store.load(id)?)
}

pub fn delete_calculation(store: &CalculationStore, id: &str) -> AppResult<()> {
    store.delete(id)?;
    info!(id, "deleted calculation");
    Ok(())
}
