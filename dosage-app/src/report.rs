//! Text and Markdown renditions of a dosage result.

use dosage_schemas::{
    inputs::DosageInputs,
    results::{DosageResults, PadiolaSpecs, Trace},
};

fn trace_line(trace: &Trace) -> String {
    format!(
        "{:.0} : {:.2} : {:.2} : {:.2}",
        trace.cement, trace.sand, trace.gravel, trace.water
    )
}

fn padiola_line(padiola: &PadiolaSpecs) -> String {
    format!(
        "{} x ({:.0} x {:.0} x {:.1} cm)",
        padiola.count, padiola.width_cm, padiola.length_cm, padiola.height_cm
    )
}

pub fn render_text(label: &str, inputs: &DosageInputs, results: &DosageResults) -> String {
    let sacks = &results.sack_trace;
    let mut out = String::new();

    out.push_str(&format!("\n--- [Dosage Report] {} ---\n", label));
    out.push_str("========================================\n");
    out.push_str(&format!(
        "Volume: {:.2} m³ | fck: {:.1} MPa | Cement: {} | Slump: {:.0} mm | Dmax: {} mm\n",
        inputs.project.volume_total_m3,
        inputs.project.fck_mpa,
        inputs.cement.class.label(),
        inputs.project.slump_mm,
        inputs.aggregates.max_size_mm,
    ));
    out.push_str("----------------------------------------\n");
    out.push_str(&format!("  - fc28:               {:.1} MPa\n", results.fc28_mpa));
    out.push_str(&format!(
        "  - w/c ratio:          {:.3} (strength {:.3}, durability {:.2})\n",
        results.water_cement_ratio, results.strength_wc_ratio, results.durability_wc_ratio
    ));
    out.push_str(&format!("  - Cement content:     {:.0} kg/m³\n", results.cement_content_kg));
    out.push_str(&format!("  - Effective water:    {:.1} L/m³\n", results.water_corrected_l));

    out.push_str("\nMaterials (dry kg/m³ | wet kg/m³ | total kg):\n");
    out.push_str(&format!(
        "  - Cement:  {:>10.2} | {:>10.2} | {:>12.1}\n",
        results.cement_content_kg, results.per_m3.cement, results.total.cement
    ));
    out.push_str(&format!(
        "  - Sand:    {:>10.2} | {:>10.2} | {:>12.1}\n",
        results.sand_mass_dry_corrected_kg, results.per_m3.sand_wet, results.total.sand_wet
    ));
    out.push_str(&format!(
        "  - Gravel:  {:>10.2} | {:>10.2} | {:>12.1}\n",
        results.gravel_mass_dry_corrected_kg, results.per_m3.gravel, results.total.gravel
    ));
    out.push_str(&format!(
        "  - Water:   {:>10.2} | {:>10.2} | {:>12.1} L\n",
        results.water_demand_l, results.per_m3.water, results.total.water
    ));

    out.push_str(&format!(
        "\nWeight trace (cement : sand : gravel : w/c):  {}\n",
        trace_line(&results.weight_trace)
    ));
    out.push_str(&format!(
        "Volume trace (cement : sand : gravel : water): {}\n",
        trace_line(&results.volume_trace)
    ));

    out.push_str("\nPer 50 kg sack:\n");
    out.push_str(&format!("  - Sacks needed:  {:.1}\n", sacks.cement_sacks));
    out.push_str(&format!(
        "  - Wet sand:      {:.1} cans ({:.1} x 18 L, ~{:.1} L)\n",
        sacks.sand_cans_rounded, sacks.sand_cans_per_sack, sacks.sand_volume_per_sack_l
    ));
    out.push_str(&format!(
        "  - Gravel:        {:.1} cans ({:.1} x 18 L, ~{:.1} L)\n",
        sacks.gravel_cans_rounded, sacks.gravel_cans_per_sack, sacks.gravel_volume_per_sack_l
    ));
    out.push_str(&format!("  - Water:         {:.1} L\n", sacks.water_volume_per_sack_l));
    out.push_str(&format!(
        "  - Padiola sand:   {}\n",
        padiola_line(&results.padiolas.sand)
    ));
    out.push_str(&format!(
        "  - Padiola gravel: {}\n",
        padiola_line(&results.padiolas.gravel)
    ));

    out.push_str(&format!(
        "\nNote: the {:.1} L of water already discount the sand moisture. Adjust on site with the slump test.\n",
        results.water_corrected_l
    ));
    out.push_str("========================================\n");
    out
}

pub fn render_markdown(label: &str, results: &DosageResults) -> String {
    let mut table = format!("# Dosage: {}\n\n", label);

    table.push_str("| Material | Dry (kg/m³) | Wet (kg/m³) | Total |\n");
    table.push_str("|----------|-------------|-------------|-------|\n");
    table.push_str(&format!(
        "| Cement | {:.2} | {:.2} | {:.1} kg |\n",
        results.cement_content_kg, results.per_m3.cement, results.total.cement
    ));
    table.push_str(&format!(
        "| Sand | {:.2} | {:.2} | {:.1} kg |\n",
        results.sand_mass_dry_corrected_kg, results.per_m3.sand_wet, results.total.sand_wet
    ));
    table.push_str(&format!(
        "| Gravel | {:.2} | {:.2} | {:.1} kg |\n",
        results.gravel_mass_dry_corrected_kg, results.per_m3.gravel, results.total.gravel
    ));
    table.push_str(&format!(
        "| Water | {:.2} | {:.2} | {:.1} L |\n",
        results.water_demand_l, results.per_m3.water, results.total.water
    ));

    table.push_str("\n| Trace | Cement | Sand | Gravel | Water |\n");
    table.push_str("|-------|--------|------|--------|-------|\n");
    for (name, trace) in [
        ("Weight", &results.weight_trace),
        ("Volume", &results.volume_trace),
    ] {
        table.push_str(&format!(
            "| {} | {:.0} | {:.2} | {:.2} | {:.2} |\n",
            name, trace.cement, trace.sand, trace.gravel, trace.water
        ));
    }

    table.push_str("\n| Padiola | Trips | Width (cm) | Length (cm) | Height (cm) |\n");
    table.push_str("|---------|-------|------------|-------------|-------------|\n");
    for (name, padiola) in [
        ("Sand", &results.padiolas.sand),
        ("Gravel", &results.padiolas.gravel),
    ] {
        table.push_str(&format!(
            "| {} | {} | {:.0} | {:.0} | {:.1} |\n",
            name, padiola.count, padiola.width_cm, padiola.length_cm, padiola.height_cm
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosage_core::compute;

    #[test]
    fn text_report_carries_the_summary_figures() {
        let inputs = DosageInputs::default();
        let results = compute(&inputs);
        let text = render_text("default", &inputs, &results);

        assert!(text.contains("fc28:               34.1 MPa"));
        assert!(text.contains("w/c ratio:          0.466"));
        assert!(text.contains("Cement content:     414 kg/m³"));
        assert!(text.contains("Effective water:    171.7 L/m³"));
        assert!(text.contains("1 : 1.71 : 2.58 : 0.47"));
        assert!(text.contains("1 : 1.64 : 2.50 : 0.58"));
        assert!(text.contains("Sacks needed:  82.9"));
        assert!(text.contains("2 x (35 x 45 x 18.5 cm)"));
    }

    #[test]
    fn markdown_report_has_one_row_per_material() {
        let results = compute(&DosageInputs::default());
        let markdown = render_markdown("default", &results);

        assert!(markdown.starts_with("# Dosage: default"));
        for material in ["| Cement |", "| Sand |", "| Gravel |", "| Water |"] {
            let rows = markdown
                .lines()
                .filter(|line| line.starts_with(material))
                .filter(|line| line.ends_with(" kg |") || line.ends_with(" L |"))
                .count();
            assert_eq!(rows, 1, "{material}");
        }
        assert!(markdown.contains("| Gravel | 2 | 35 | 45 | 28.0 |"));
    }
}
