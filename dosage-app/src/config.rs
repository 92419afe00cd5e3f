use anyhow::{Context, Result};
use dosage_schemas::{
    file_formats::{DosageRequestFile, CURRENT_SCHEMA_VERSION},
    inputs::DosageInputs,
};
use std::{fs, path::Path};
use tracing::{info, warn};

/// Reads and parses a YAML dosage request.
pub fn load_request(path: &Path) -> Result<DosageRequestFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {:?}", path))?;
    let request: DosageRequestFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

    if request.schema_version != CURRENT_SCHEMA_VERSION {
        warn!(
            found = %request.schema_version,
            expected = CURRENT_SCHEMA_VERSION,
            "request schema version differs, parsing anyway"
        );
    }
    Ok(request)
}

/// A request with the default inputs, rendered as YAML.
pub fn template_yaml(label: &str) -> Result<String> {
    let request = DosageRequestFile::new(label, DosageInputs::default());
    serde_yaml::to_string(&request).context("Failed to render the request template")
}

pub fn write_template(output: Option<&Path>, label: &str) -> Result<()> {
    let yaml = template_yaml(label)?;
    match output {
        Some(path) => {
            fs::write(path, yaml)
                .with_context(|| format!("Failed to write template to {:?}", path))?;
            info!(path = ?path, "request template written");
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosage_schemas::{cement::CementClass, project::StructureType};

    #[test]
    fn template_loads_back_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        write_template(Some(&path), "slab").unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.label, "slab");
        assert_eq!(request.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(request.inputs, DosageInputs::default());
    }

    #[test]
    fn hand_written_request_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beam.yaml");
        fs::write(
            &path,
            r#"
schema_version: "1.0"
label: beam
inputs:
  project:
    volume_total_m3: 4.0
    fck_mpa: 30.0
    sd_control: rigorous
    slump_mm: 80.0
    exposure: ordinary
    structure_type: thin
  cement:
    class: CP-40
    specific_mass: 3.15
    unit_mass: 1.42
  aggregates:
    max_size_mm: 25.0
    sand:
      specific_mass: 2.62
      unit_mass: 1.52
      moisture_pct: 4.5
    gravel:
      specific_mass: 2.7
      unit_mass: 1.48
  coefficients:
    dry_mortar_pct: 52.0
    fine_total_pct: 38.0
    real_mortar_pct: 58.0
"#,
        )
        .unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.inputs.cement.class, CementClass::Cp40);
        assert_eq!(request.inputs.project.structure_type, StructureType::Thin);
        assert_eq!(request.inputs.aggregates.sand.moisture_pct, 4.5);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_request(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.yaml"));
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "label: [unterminated").unwrap();
        let err = load_request(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse YAML"));
    }
}
