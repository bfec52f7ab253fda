//! Integration tests for Guidebox
//!
//! End-to-end imports through `GuideImporter` into a store.
//!
mod common;
use common::*;
use guidebox::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_markdown_import_persists_positions() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();

        let outcome = importer
            .import_markdown(&mut store, "onboarding", SETUP_MARKDOWN)
            .expect("markdown is never rejected");

        assert!(outcome.is_success());
        assert_eq!(outcome.flow_boxes_created(), 2);
        assert_eq!(outcome.steps_created(), 2);

        let boxes = store.flow_boxes("onboarding");
        assert_eq!(boxes[0].title, "Setup");
        assert_eq!(boxes[0].description, "Get ready");
        assert_eq!(boxes[0].position, 1);
        assert_eq!(boxes[1].position, 2);
        let steps = store.steps(boxes[1].id);
        assert_eq!(steps[0].title, "Set env vars");
        assert_eq!(steps[0].content, "Add API_KEY to .env");
        assert_eq!(steps[0].position, 1);
    }

    #[test]
    fn test_second_import_appends_after_existing_content() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();
        importer
            .import_markdown(&mut store, "onboarding", SETUP_MARKDOWN)
            .unwrap();
        importer
            .import_csv(&mut store, "onboarding", SAMPLE_CSV)
            .unwrap();
        // Another guide does not shift positions.
        importer
            .import_markdown(&mut store, "other", "## Elsewhere\n")
            .unwrap();

        let positions: Vec<_> = store
            .flow_boxes("onboarding")
            .iter()
            .map(|fb| (fb.title.clone(), fb.position))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("Setup".to_string(), 1),
                ("Configure".to_string(), 2),
                ("A".to_string(), 3),
                ("B".to_string(), 4),
            ]
        );
        assert_eq!(store.flow_boxes("other")[0].position, 1);
    }

    #[test]
    fn test_csv_summary_lists_flows() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();

        let outcome = importer.import_csv(&mut store, "g", SAMPLE_CSV).unwrap();
        let ImportOutcome::Imported(summary) = outcome else {
            panic!("expected a successful import");
        };
        assert_eq!(summary.flow_boxes_created, 2);
        assert_eq!(summary.steps_created, 3);
        assert_eq!(summary.flows[0].name, "A");
        assert_eq!(summary.flows[0].step_count, 2);
        assert_eq!(summary.flows[1].name, "B");
        assert_eq!(summary.flows[1].step_count, 1);
        assert_eq!(
            summary.message,
            "Successfully imported 2 flow boxes with 3 steps"
        );
    }

    #[test]
    fn test_validation_errors_propagate_before_any_write() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();

        let err = importer
            .import_csv(&mut store, "g", "Flow Name,Step Title\nA,S1\n")
            .expect_err("header is invalid");
        assert!(matches!(err, ImportError::Validation(_)));
        assert!(store.guides().is_empty());

        let err = importer
            .import_csv(&mut store, "g", "Flow Name,Flow Description,Step Title,Content")
            .expect_err("no data rows");
        assert!(err.to_string().contains("at least a header and one data row"));
    }

    #[test]
    fn test_no_valid_rows_is_a_caught_failure() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();

        let outcome = importer
            .import_csv(
                &mut store,
                "g",
                "Flow Name,Flow Description,Step Title,Content\nA,d,S1\n",
            )
            .expect("row problems are reported, not thrown");

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "No valid data rows found");
        assert!(store.guides().is_empty());
    }

    #[test]
    fn test_storage_failure_is_caught_with_partial_counts() {
        let importer = GuideImporter::default();
        // One flow box and one step succeed, the second step fails.
        let mut store = FlakyStore::new(2);

        let outcome = importer
            .import_csv(&mut store, "g", SAMPLE_CSV)
            .expect("storage failures are reported, not thrown");

        let ImportOutcome::Failed(failure) = &outcome else {
            panic!("expected a failed import");
        };
        assert!(failure.message.contains("connection reset"));
        assert_eq!(failure.flow_boxes_created, 1);
        assert_eq!(failure.steps_created, 1);
    }

    #[test]
    fn test_empty_markdown_imports_nothing_successfully() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();

        let outcome = importer
            .import_markdown(&mut store, "g", "no headings here")
            .unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.flow_boxes_created(), 0);
        assert_eq!(outcome.message(), "No flow boxes found to import");
    }

    #[test]
    fn test_json_report_shape() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();
        let outcome = importer.import_csv(&mut store, "g", SAMPLE_CSV).unwrap();

        let json = outcome.to_json();
        assert_eq!(json["success"], true);
        assert_eq!(json["results"]["flowBoxesCreated"], 2);
        assert_eq!(json["results"]["stepsCreated"], 3);
        assert_eq!(json["results"]["flows"][0]["name"], "A");
        assert_eq!(json["results"]["flows"][0]["stepCount"], 2);
        assert!(json["importedAt"].as_str().unwrap().ends_with('Z'));

        let mut flaky = FlakyStore::new(0);
        let failed = importer.import_csv(&mut flaky, "g", SAMPLE_CSV).unwrap();
        let json = failed.to_json();
        assert_eq!(json["success"], false);
        assert_eq!(json["results"]["flowBoxesCreated"], 0);
    }

    #[test]
    fn test_text_report() {
        let importer = GuideImporter::default();
        let mut store = MemoryStore::new();
        let outcome = importer.import_csv(&mut store, "g", SAMPLE_CSV).unwrap();

        let report = ReportFormatter::format(&outcome);
        assert!(report.starts_with("Import succeeded"));
        assert!(report.contains("  -> A (2 steps)"));
        assert!(report.contains("  -> B (1 step)"));
        assert!(report.contains("Created 2 flow boxes and 3 steps"));

        let mut flaky = FlakyStore::new(1);
        let failed = importer.import_csv(&mut flaky, "g", SAMPLE_CSV).unwrap();
        let report = ReportFormatter::format(&failed);
        assert!(report.starts_with("Import failed: Storage failed: connection reset"));
        assert!(report.contains("1 flow box and 0 steps were written"));
    }
}
