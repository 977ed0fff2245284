//! Translation table from internal field names to report template fields.
//!
//! Keys are the serialized names of `TransformerInputs` fields and of the
//! result section fields; values are the AcroForm field names of the report
//! template and must match it exactly.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const FIELD_TABLE: &[(&str, &str)] = &[
    // Header
    ("client_name", "client"),
    ("project_name", "reference"),
    ("transformer_type", "type"),
    ("installation_type", "installation"),
    ("Date", "Date"),
    ("reference", "reference"),
    ("revision", "revision"),
    // Electrical characteristics
    ("power_kva", "kVA"),
    ("frequency_hz", "frequence"),
    ("primary_voltage", "U1n(V)"),
    ("secondary_voltage", "U20 (V)"),
    ("max_temperature_rise", "Variation"),
    ("primary_coupling", "Couplage"),
    // Technical parameters
    ("core_material", "ClU(KV)"),
    ("current_density", "Densite"),
    ("b_max", "Induction"),
    ("sheet_type", "ToleMagnetique"),
    ("winding_material", "NatureBob"),
    ("cooling_type", "DureeCC"),
    // Losses and performance
    ("core_losses", "PerteVide"),
    ("no_load_current", "I0Vide"),
    ("copper_losses", "Pcc"),
    ("short_circuit_voltage", "Ucc"),
    ("total_losses", "PertesTot"),
    ("temperature_rise", "echauffement"),
    // Calculated electrical values
    ("tensionLignePrim", "tensionLignePrim"),
    ("tensionLigneSec", "tensionLigneSec"),
    ("tensionPhasePrim", "tensionPhasePrim"),
    ("tensionPhaseSec", "tensionPhaseSec"),
    ("CourantLignePrim", "CourantLignePrim"),
    ("CourantLigneSec", "CourantLigneSec"),
    ("CourantPhasePrim", "CourantPhasePrim"),
    ("CourantPhaseSec", "CourantPhaseSec"),
    ("ClasseTensionPrim", "ClasseTensionPrim"),
    ("ClasseTensionSec", "ClasseTensionSec"),
    ("ClasseTensionlast", "classeTensionlast"),
    // Winding steps
    ("largeurA", "largeurA"),
    ("largeurB", "largeurB"),
    ("largeurC", "largeurC"),
    ("largeurD", "largeurD"),
    ("largeurE", "largeurE"),
    ("largeurF", "largeurF"),
    ("largeurG", "largeurG"),
    ("largeurH", "largeurH"),
    ("largeurI", "largeurI"),
    ("largeurJ", "largeurJ"),
    ("largeurK", "largeurK"),
    ("gradinA", "gradinA"),
    ("gradinB", "gradinB"),
    ("gradinC", "gradinC"),
    ("gradinD", "gradinD"),
    ("gradinE", "gradinE"),
    ("gradinF", "gradinF"),
    ("gradinG", "gradinG"),
    ("gradinH", "gradinH"),
    ("gradinI", "gradinI"),
    ("gradinJ", "gradinJ"),
    ("gradinK", "gradinK"),
    // Core geometry
    ("ColonnesSnette", "ColonnesSnette"),
    ("ColonnesBT", "ColonnesBT"),
    ("ColonnesMasse", "ColonnesMasse"),
    ("4emeColonneSnette", "4emeColonneSnette"),
    ("4emeColonneMasse", "4emeColonneMasse"),
    ("CulasseSnette", "CulasseSnette"),
    ("CulasseBT", "CulasseBT"),
    ("CulasseMasse", "CulasseMasse"),
    ("EPCM", "EPCM"),
    ("MasseCulplusCol", "MasseCulplusCol"),
    ("MasseTotale", "MasseTotale"),
    // Winding parameters
    ("spiresVsp", "spiresVsp"),
    ("N1", "N1"),
    ("N2", "N2"),
    ("BobSectionduConducteurprim1", "BobSectionduConducteurprim1"),
    ("BobSectionduConducteurSec", "BobSectionduConducteurSec"),
    ("DensiteCourantPrim", "DensiteCourantPrim"),
    ("DensiteCourantSec", "DensiteCourantSec"),
    ("nbCoucherPrim", "nbCoucherPrim"),
    ("nbCoucherSec", "nbCoucherSec"),
    ("SpiresCouchePrim", "SpiresCouchePrim"),
    ("SpiresCoucheSec", "SpiresCoucheSec"),
    // Short circuit
    ("PCC75", "PCC75"),
    ("addi", "addi"),
    ("Ucca", "Ucca"),
    ("Uccr", "Uccr"),
    ("Ucc75", "Ucc75"),
    ("UccCorrigee", "UccCorrigee"),
    ("ResistanceBT75", "ResistanceBT75"),
    ("ResistanceMT75", "ResistanceMT75"),
];

static FIELD_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FIELD_TABLE.iter().copied().collect());

/// Report field for an internal name, if the template has one.
pub fn report_field(internal: &str) -> Option<&'static str> {
    FIELD_MAP.get(internal).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn internal_names_are_unique() {
        let keys: HashSet<&str> = FIELD_TABLE.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), FIELD_TABLE.len());
    }

    #[test]
    fn lookups() {
        assert_eq!(report_field("power_kva"), Some("kVA"));
        assert_eq!(report_field("secondary_voltage"), Some("U20 (V)"));
        assert_eq!(report_field("ClasseTensionlast"), Some("classeTensionlast"));
        assert_eq!(report_field("4emeColonneMasse"), Some("4emeColonneMasse"));
        assert_eq!(report_field("hourly_index"), None);
    }
}
