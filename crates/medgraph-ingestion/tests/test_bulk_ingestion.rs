//! End-to-end bulk ingestion: parse an upload, apply it, query the graph.

use medgraph_core::MedicalGraph;
use medgraph_ingestion::{apply_records, parse_upload, UploadFormat};
use pretty_assertions::assert_eq;

const CSV_FIXTURE: &[u8] = b"source,relation,target,source_type,target_type\n\
    headache,indicates,migraine,symptom,disease\n\
    migraine,treated by,ibuprofen,disease,treatment\n\
    migraine,managed by,neurologist,disease,specialist\n\
    headache,indicates,migraine,symptom,disease\n";

#[test]
fn test_csv_upload_end_to_end() {
    let records = parse_upload(UploadFormat::Csv, CSV_FIXTURE).unwrap();
    assert_eq!(records.len(), 4);

    let mut graph = MedicalGraph::new();
    let report = apply_records(&mut graph, &records);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.duplicates, 1); // repeated headache→migraine triple
    assert!(report.skipped.is_empty());

    let answer = graph.diagnoses_for_symptom("Headach").unwrap();
    let labels: Vec<&str> = answer.results.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["migraine"]);

    let specialists = graph.specialists_for_entity("migraine").unwrap();
    assert_eq!(specialists.results.len(), 1);
    assert_eq!(specialists.results[0].label, "neurologist");
}

#[test]
fn test_json_upload_with_bad_record_skips_and_continues() {
    let body = br#"[
        {"source":"chest pain","relation":"indicates","target":"angina",
         "source_type":"symptom","target_type":"disease"},
        {"source":"  ","relation":"indicates","target":"angina",
         "source_type":"symptom","target_type":"disease"},
        {"source":"angina","relation":"treated by","target":"nitroglycerin",
         "source_type":"disease","target_type":"treatment"}
    ]"#;
    let records = parse_upload(UploadFormat::Json, body).unwrap();

    let mut graph = MedicalGraph::new();
    let report = apply_records(&mut graph, &records);
    assert_eq!(report.inserted, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);

    let answer = graph.treatments_for_disease("angina").unwrap();
    assert_eq!(answer.results[0].label, "nitroglycerin");
}

#[test]
fn test_type_conflict_skips_record_preserving_first_type() {
    let body = br#"[
        {"source":"migraine","relation":"treated by","target":"ibuprofen",
         "source_type":"disease","target_type":"treatment"},
        {"source":"migraine","relation":"indicates","target":"stroke",
         "source_type":"symptom","target_type":"disease"}
    ]"#;
    let records = parse_upload(UploadFormat::Json, body).unwrap();

    let mut graph = MedicalGraph::new();
    let report = apply_records(&mut graph, &records);
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].reason.contains("already registered"));

    // first registration (disease) still answers treatment queries
    assert!(graph.treatments_for_disease("migraine").is_ok());
}
