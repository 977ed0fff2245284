//! Bill of materials and cost of ownership.

use crate::constants::*;
use crate::results::BomLine;
use tc_core::{round2, round_count};
use tc_project::{TransformerInputs, WindingMaterial};

pub const CORE_COMPONENT: &str = "Noyau magnétique";
pub const INSULATION_COMPONENT: &str = "Isolation";

/// Conductor price, €/kg.
pub fn conductor_price(material: WindingMaterial) -> f64 {
    match material {
        WindingMaterial::Cuivre => COPPER_PRICE_EUR_PER_KG,
        WindingMaterial::Aluminium => ALUMINIUM_PRICE_EUR_PER_KG,
    }
}

fn winding_line(inputs: &TransformerInputs, side: &str, kg_per_kva: f64) -> BomLine {
    let price = conductor_price(inputs.winding_material);
    let mass = inputs.power_kva * kg_per_kva;
    BomLine {
        component: format!("{} {side}", inputs.winding_material.as_str()),
        quantity: round_count(mass),
        unit_cost: price,
        // priced on the unrounded mass
        total_cost: round2(mass * price),
    }
}

/// Core, primary conductor, secondary conductor and insulation, in that order.
pub fn bill_of_materials(inputs: &TransformerInputs) -> Vec<BomLine> {
    let core_cost = inputs.power_kva * CORE_COST_EUR_PER_KVA;
    let insulation_cost = inputs.power_kva * INSULATION_COST_EUR_PER_KVA;

    vec![
        BomLine {
            component: CORE_COMPONENT.to_string(),
            quantity: 1,
            unit_cost: core_cost,
            total_cost: core_cost,
        },
        winding_line(inputs, "primaire", PRIMARY_CONDUCTOR_KG_PER_KVA),
        winding_line(inputs, "secondaire", SECONDARY_CONDUCTOR_KG_PER_KVA),
        BomLine {
            component: INSULATION_COMPONENT.to_string(),
            quantity: 1,
            unit_cost: insulation_cost,
            total_cost: insulation_cost,
        },
    ]
}

pub fn bom_cost(lines: &[BomLine]) -> f64 {
    lines.iter().map(|line| line.total_cost).sum()
}

/// Purchase plus flat operating cost over the service life, €, rounded.
pub fn lifetime_cost(inputs: &TransformerInputs, bom_total: f64) -> f64 {
    let operating = inputs.power_kva * OPERATING_COST_EUR_PER_KVA_YEAR * SERVICE_LIFE_YEARS;
    (bom_total + operating).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_bom_of_100_kva() {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        let lines = bill_of_materials(&inputs);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].component, "Noyau magnétique");
        assert_eq!(lines[0].total_cost, 450.0);
        assert_eq!(lines[1].component, "cuivre primaire");
        assert_eq!(lines[1].quantity, 25);
        assert_eq!(lines[1].unit_cost, 8.5);
        assert_eq!(lines[1].total_cost, 212.5);
        assert_eq!(lines[2].component, "cuivre secondaire");
        assert_eq!(lines[2].quantity, 20);
        assert_eq!(lines[2].total_cost, 170.0);
        assert_eq!(lines[3].component, "Isolation");
        assert_eq!(lines[3].total_cost, 85.0);

        assert!((bom_cost(&lines) - 917.5).abs() < 1e-9);
        assert_eq!(lifetime_cost(&inputs, bom_cost(&lines)), 30918.0);
    }

    #[test]
    fn aluminium_is_priced_lower() {
        let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        inputs.winding_material = WindingMaterial::Aluminium;
        let lines = bill_of_materials(&inputs);
        assert_eq!(lines[1].component, "aluminium primaire");
        assert_eq!(lines[1].unit_cost, 6.2);
        assert_eq!(lines[1].total_cost, 155.0);
    }

    #[test]
    fn quantity_rounds_but_cost_uses_exact_mass() {
        // 0.25 · 10 = 2.5 kg → qty 3, cost 2.5 · 8.5
        let lines = bill_of_materials(&TransformerInputs::rated(10.0, 20_000.0, 400.0));
        assert_eq!(lines[1].quantity, 3);
        assert_eq!(lines[1].total_cost, 21.25);
    }
}
