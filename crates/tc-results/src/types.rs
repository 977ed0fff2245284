//! History record types.

use serde::{Deserialize, Serialize};
use tc_calc::TransformerResults;
use tc_project::TransformerInputs;

pub type CalculationId = String;

/// One stored calculation: the input snapshot and everything computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: CalculationId,
    /// RFC 3339, UTC.
    pub created_at: String,
    pub engine_version: String,
    pub inputs: TransformerInputs,
    pub results: TransformerResults,
}

impl CalculationRecord {
    pub fn new(
        id: CalculationId,
        engine_version: &str,
        inputs: TransformerInputs,
        results: TransformerResults,
    ) -> Self {
        Self {
            id,
            created_at: chrono::Utc::now().to_rfc3339(),
            engine_version: engine_version.to_string(),
            inputs,
            results,
        }
    }

    /// One-line description for listings.
    pub fn summary(&self) -> String {
        let client = self.inputs.client_name.as_deref().unwrap_or("-");
        let short_id: String = self.id.chars().take(12).collect();
        format!(
            "{}  {}  {}  {} kVA  {}/{} V",
            short_id,
            self.created_at,
            client,
            self.inputs.power_kva,
            self.inputs.primary_voltage,
            self.inputs.secondary_voltage
        )
    }
}
