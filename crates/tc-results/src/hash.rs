//! Content-based hashing for calculation IDs.

use sha2::{Digest, Sha256};
use tc_project::TransformerInputs;

/// SHA-256 over the serialized inputs and the engine version, hex encoded.
pub fn compute_calculation_id(inputs: &TransformerInputs, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let inputs_json = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);

        let hash1 = compute_calculation_id(&inputs, "v1");
        let hash2 = compute_calculation_id(&inputs, "v1");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let a = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        let mut b = a.clone();
        b.client_name = Some("ACME".to_string());

        assert_ne!(
            compute_calculation_id(&a, "v1"),
            compute_calculation_id(&b, "v1")
        );
    }

    #[test]
    fn hash_differs_for_engine_version() {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        assert_ne!(
            compute_calculation_id(&inputs, "v1"),
            compute_calculation_id(&inputs, "v2")
        );
    }
}
