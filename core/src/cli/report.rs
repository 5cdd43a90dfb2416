use crate::api::PhaseOutcome;
use crate::catalog::CatalogSummary;
use crate::staging::StageReport;
use serde_json::json;
use std::fmt;

/// Text report formatter for a pipeline phase
pub struct TextReport<'a> {
    outcome: &'a PhaseOutcome,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(outcome: &'a PhaseOutcome) -> Self {
        Self { outcome }
    }

    fn fmt_stage(f: &mut fmt::Formatter<'_>, report: &StageReport) -> fmt::Result {
        writeln!(f, "Biopsy Staging")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Rois:           {}", report.paths.rois.display())?;
        writeln!(f, "Staging:        {}", report.paths.staging.display())?;
        writeln!(f, "Files Staged:   {}", report.staged.len())?;
        writeln!(f, "Volumes:        {}", report.volume_count())?;
        writeln!(f)?;
        writeln!(f, "Found {} biopsy files", report.candidate_count())
    }

    fn fmt_catalog(f: &mut fmt::Formatter<'_>, summary: &CatalogSummary) -> fmt::Result {
        writeln!(f, "Biopsy Catalog")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Catalog:        {}", summary.catalog_file.display())?;
        writeln!(f, "Records:        {}", summary.records.len())?;
        writeln!(f)?;
        for record in &summary.records {
            writeln!(f, "{}: {}", record.name, record.centroid())?;
        }
        if !summary.records.is_empty() {
            writeln!(f)?;
        }
        writeln!(
            f,
            "Biopsy list JSON file \"biopsy_lists.json\" created successfully."
        )
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            PhaseOutcome::Staged(report) => Self::fmt_stage(f, report),
            PhaseOutcome::Cataloged(summary) => Self::fmt_catalog(f, summary),
        }
    }
}

/// Renders a phase outcome as a pretty-printed JSON summary
pub fn json_summary(outcome: &PhaseOutcome) -> Result<String, serde_json::Error> {
    let value = match outcome {
        PhaseOutcome::Staged(report) => json!({
            "phase": outcome.phase().simple_name(),
            "rois_path": report.paths.rois,
            "staging_path": report.paths.staging,
            "staged": report.staged,
            "candidate_count": report.candidate_count(),
            "volume_count": report.volume_count(),
        }),
        PhaseOutcome::Cataloged(summary) => json!({
            "phase": outcome.phase().simple_name(),
            "rois_path": summary.paths.rois,
            "catalog_file": summary.catalog_file,
            "records": summary.records,
        }),
    };
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogRecord, Centroid, RoiPaths};
    use std::path::PathBuf;

    fn stage_outcome() -> PhaseOutcome {
        let paths = RoiPaths::resolve("/data/case1");
        PhaseOutcome::Staged(StageReport {
            staged: vec![
                paths.staging.join("t1_a_b-1.idf"),
                paths.staging.join("t1_a_b-1.nii.gz"),
            ],
            paths,
        })
    }

    fn catalog_outcome() -> PhaseOutcome {
        let paths = RoiPaths::resolve("/data/case1");
        PhaseOutcome::Cataloged(CatalogSummary {
            catalog_file: paths.catalog_file(),
            paths,
            records: vec![CatalogRecord::new(
                Centroid::new(10.0, 10.0, 10.5),
                "t1_a_b-1",
                2,
                "This is a tumor.",
            )],
        })
    }

    #[test]
    fn test_stage_report_format() {
        let outcome = stage_outcome();
        let output = format!("{}", TextReport::new(&outcome));

        assert!(output.contains("Biopsy Staging"));
        assert!(output.contains("Staging:        /data/case1/rois/temp"));
        assert!(output.contains("Files Staged:   2"));
        assert!(output.contains("Volumes:        1"));
        assert!(output.contains("Found 1 biopsy files"));
    }

    #[test]
    fn test_catalog_report_format() {
        let outcome = catalog_outcome();
        let output = format!("{}", TextReport::new(&outcome));

        assert!(output.contains("Catalog:        /data/case1/rois/biopsy_lists.json"));
        assert!(output.contains("Records:        1"));
        assert!(output.contains("t1_a_b-1: (10, 10, 10.5)"));
        assert!(output.contains("created successfully"));
    }

    #[test]
    fn test_json_summary() {
        let json = json_summary(&catalog_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["phase"], "catalog");
        assert_eq!(value["records"][0]["z"], 10.5);
        assert_eq!(
            PathBuf::from(value["catalog_file"].as_str().unwrap()),
            PathBuf::from("/data/case1/rois/biopsy_lists.json")
        );

        let json = json_summary(&stage_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["candidate_count"], 1);
        assert_eq!(value["staged"].as_array().unwrap().len(), 2);
    }
}
