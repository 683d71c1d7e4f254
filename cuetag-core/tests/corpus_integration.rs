use std::io::Write;

use cuetag_core::corpus;
use cuetag_core::validate::{self, ValidationIssue};
use cuetag_core::{classify, evaluate, variant, CuetagError, Script};

fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_eval_from_csv_file() {
    let csv = "\u{feff}user_prompt,output\n\
               그는 내일 발표할 예정이다,\"Predictive,Neutral,Future,Uncertain\"\n\
               회사는 지난해 손실을 기록했다,\"사실형,부정,과거,확실\"\n\
               ,\"Factual,Neutral,Present,Certain\"\n\
               라벨이 이상하다,\"Factual;Neutral\"\n";
    let file = write_temp(csv, ".csv");

    let records = corpus::load(file.path()).unwrap();
    assert_eq!(records.len(), 4);

    let cfg = variant::lookup("26_C").unwrap();
    let metrics = evaluate(&records, cfg, None);
    assert_eq!(
        metrics.summary_line(cfg.name),
        "variant=26_C samples=2 type=1.0000 pol=1.0000 tense=1.0000 cert=0.5000 avg=0.8750"
    );
}

#[test]
fn test_variants_diverge_on_mitigated_negative() {
    let csv = "user_prompt,output\n손실 폭이 둔화됐다,\"Factual,Positive,Past,Certain\"\n";
    let file = write_temp(csv, ".csv");
    let records = corpus::load(file.path()).unwrap();

    let reverse = evaluate(&records, variant::lookup("27_A").unwrap(), None);
    let neutralize = evaluate(&records, variant::lookup("27_B").unwrap(), None);
    assert_eq!(reverse.polarity_accuracy, 1.0);
    assert_eq!(neutralize.polarity_accuracy, 0.0);
}

#[test]
fn test_predictions_pass_validation() {
    let csv = "user_prompt,output\n\
               그는 내일 발표할 예정이다,\"Predictive,Neutral,Future,Uncertain\"\n\
               회사는 지난해 손실을 기록했다,\"Factual,Negative,Past,Certain\"\n\
               수출 호조가 이어질 전망이다,\"Predictive,Positive,Future,Uncertain\"\n";
    let records = corpus::read_records(csv.as_bytes()).unwrap();
    let cfg = variant::lookup("26_C").unwrap();

    for script in [Script::English, Script::Korean] {
        let lines: Vec<String> = corpus::labeled_rows(&records)
            .enumerate()
            .map(|(i, row)| classify(row.text, cfg).to_line(i + 1, script))
            .collect();
        assert_eq!(lines.len(), 3);

        let file = write_temp(&(lines.join("\n") + "\n"), ".txt");
        assert!(validate::validate_file(file.path()).unwrap().is_empty());
    }
}

#[test]
fn test_validate_file_reports_every_bad_line() {
    let content = "1. Factual,Positive,Past,Certain\n\
                   3. Inferential,Neutral,Present,Uncertain\n\
                   3. Factual, Positive,Past,Certain\n";
    let file = write_temp(content, ".txt");

    let issues = validate::validate_file(file.path()).unwrap();
    assert_eq!(
        issues,
        vec![
            ValidationIssue::Numbering { line: 2, expected: 2, actual: "3".to_string() },
            ValidationIssue::Format {
                line: 3,
                text: "3. Factual, Positive,Past,Certain".to_string()
            },
            ValidationIssue::Spacing {
                line: 3,
                text: "3. Factual, Positive,Past,Certain".to_string()
            },
        ]
    );
}

#[test]
fn test_validate_empty_file() {
    let file = write_temp("", ".txt");
    assert_eq!(
        validate::validate_file(file.path()).unwrap(),
        vec![ValidationIssue::Empty]
    );
}

#[test]
fn test_validate_missing_file_is_io_error() {
    let err = validate::validate_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, CuetagError::Io(_)));
}
