use crate::error::DosageError;
use csv::Writer;
use dosage_schemas::{inputs::DosageInputs, results::DosageResults};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// One row of the calculation log.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub label: String,
    pub volume_total_m3: f64,
    pub fck_mpa: f64,
    pub cement_class: String,
    pub slump_mm: f64,
    pub max_size_mm: f64,
    pub fc28_mpa: f64,
    pub water_cement_ratio: f64,
    pub cement_content_kg: f64,
    pub sand_wet_kg: f64,
    pub gravel_kg: f64,
    pub water_corrected_l: f64,
    pub cement_sacks: f64,
    pub weight_trace: String,
    pub volume_trace: String,
    pub inputs_json: String,
}

/// Appends one CSV row per computed dosage.
pub struct CalculationLogger<W: io::Write> {
    target: String,
    writer: Writer<W>,
}

impl CalculationLogger<fs::File> {
    /// Opens `path` for appending. The header is written only when the file
    /// is new or empty.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DosageError> {
        let path = path.as_ref();
        let target = path.display().to_string();
        let is_empty = fs::metadata(path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| DosageError::FileIO(target.clone(), e))?;

        let writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);
        Ok(Self { target, writer })
    }
}

impl<W: io::Write> CalculationLogger<W> {
    /// Logs into any writer; `target` names it in error messages.
    pub fn from_writer(target: &str, inner: W) -> Self {
        Self {
            target: target.to_string(),
            writer: Writer::from_writer(inner),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn log_dosage(
        &mut self,
        label: &str,
        inputs: &DosageInputs,
        results: &DosageResults,
    ) -> Result<(), DosageError> {
        let weight = &results.weight_trace;
        let volume = &results.volume_trace;

        let entry = LogEntry {
            label: label.to_string(),
            volume_total_m3: inputs.project.volume_total_m3,
            fck_mpa: inputs.project.fck_mpa,
            cement_class: inputs.cement.class.label().to_string(),
            slump_mm: inputs.project.slump_mm,
            max_size_mm: inputs.aggregates.max_size_mm,
            fc28_mpa: results.fc28_mpa,
            water_cement_ratio: results.water_cement_ratio,
            cement_content_kg: results.cement_content_kg,
            sand_wet_kg: results.per_m3.sand_wet,
            gravel_kg: results.per_m3.gravel,
            water_corrected_l: results.water_corrected_l,
            cement_sacks: results.sack_trace.cement_sacks,
            weight_trace: format!(
                "1:{:.2}:{:.2}:{:.3}",
                weight.sand, weight.gravel, weight.water
            ),
            volume_trace: format!(
                "1:{:.2}:{:.2}:{:.2}",
                volume.sand, volume.gravel, volume.water
            ),
            inputs_json: serde_json::to_string(inputs)?,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| DosageError::CsvError(self.target.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| DosageError::FileIO(self.target.clone(), e))?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, DosageError> {
        let target = self.target;
        self.writer
            .into_inner()
            .map_err(|e| DosageError::FileIO(target, e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dosage::engine::compute;

    #[test]
    fn logs_one_row_per_dosage() {
        let inputs = DosageInputs::default();
        let results = compute(&inputs);

        let mut logger = CalculationLogger::from_writer("memory", Vec::new());
        logger.log_dosage("slab A", &inputs, &results).unwrap();
        logger.log_dosage("slab B", &inputs, &results).unwrap();
        let bytes = logger.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<LogEntry> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "slab A");
        assert_eq!(rows[1].cement_class, "CP-32");
        assert_eq!(rows[0].cement_content_kg, results.cement_content_kg);
        assert_eq!(rows[0].weight_trace, "1:1.71:2.58:0.466");

        let logged: DosageInputs = serde_json::from_str(&rows[0].inputs_json).unwrap();
        assert_eq!(logged, inputs);
    }

    struct BrokenSink;

    impl io::Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn write_failures_name_the_log() {
        let inputs = DosageInputs::default();
        let results = compute(&inputs);

        let mut logger = CalculationLogger::from_writer("site.csv", BrokenSink);
        let err = logger.log_dosage("slab A", &inputs, &results).unwrap_err();
        assert!(matches!(&err, DosageError::FileIO(target, _) if target == "site.csv"));
        assert!(err.to_string().contains("site.csv"));
    }

    #[test]
    fn opening_a_log_in_a_missing_directory_fails_with_its_path() {
        let path = std::env::temp_dir()
            .join("dosage-core-missing-dir")
            .join("nested")
            .join("log.csv");
        let err = match CalculationLogger::new(&path) {
            Err(err) => err,
            Ok(_) => panic!("log opened in a missing directory"),
        };
        assert!(matches!(&err, DosageError::FileIO(target, _) if target.ends_with("log.csv")));
    }

    #[test]
    fn appending_to_an_existing_log_skips_the_header() {
        let path = std::env::temp_dir().join(format!("dosage-core-log-{}.csv", std::process::id()));
        let _ = fs::remove_file(&path);
        let inputs = DosageInputs::default();
        let results = compute(&inputs);

        for label in ["first", "second"] {
            let mut logger = CalculationLogger::new(&path).unwrap();
            assert_eq!(logger.target(), path.display().to_string());
            logger.log_dosage(label, &inputs, &results).unwrap();
        }

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(log.lines().count(), 3);
        assert_eq!(log.matches("label,").count(), 1);
    }
}
