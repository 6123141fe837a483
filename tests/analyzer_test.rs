// End-to-end tests: real files on disk, full analysis, rendered output

use pystyle_rs::analyzer::StyleChecker;
use pystyle_rs::reporter;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_analyze_basic() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("main.py");
    let mut file = File::create(&file_path).unwrap();
    write!(
        file,
        "class foo:\n    def  Bad(self, Arg):\n        pass\n"
    )
    .unwrap();

    let checker = StyleChecker::new();
    let result = checker.analyze(dir.path()).unwrap();

    assert_eq!(result.analysis_summary.total_files, 1);
    assert_eq!(result.failures.len(), 0);
    assert_eq!(result.reports.len(), 1);

    let report = &result.reports[0];
    let rendered: Vec<String> = report
        .diagnostics
        .iter()
        .map(|d| reporter::render(&report.file, d))
        .collect();
    let shown = file_path.display();
    assert_eq!(
        rendered,
        vec![
            format!("{shown}: Line 1: S008 Class name 'foo' should use CamelCase"),
            format!("{shown}: Line 2: S007 Too many spaces after 'def'"),
            format!("{shown}: Line 2: S009 Function name 'Bad' should use snake_case"),
            format!("{shown}: Line 2: S010 Argument name 'Arg' should be snake_case"),
        ]
    );
}

#[test]
fn test_mutable_default_scenario() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("defaults.py");
    let mut file = File::create(&file_path).unwrap();
    // Pad so the offending default lands on line 10.
    let mut content = String::new();
    for i in 1..=8 {
        content.push_str(&format!("v_{i} = {i}\n"));
    }
    content.push('\n');
    content.push_str("def append(item, bucket=[]):\n    pass\n");
    write!(file, "{content}").unwrap();

    let checker = StyleChecker::new();
    let result = checker.analyze(&file_path).unwrap();

    let report = &result.reports[0];
    let line = report
        .diagnostics
        .iter()
        .find(|d| d.code == 12)
        .expect("mutable default should be reported");
    assert_eq!(line.line, 10);
    assert_eq!(
        reporter::render(&report.file, line),
        format!(
            "{}: Line 10: S012 Default argument value is mutable",
            file_path.display()
        )
    );
}

#[test]
fn test_analyze_is_idempotent() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("sample.py");
    let mut file = File::create(&file_path).unwrap();
    write!(file, "x = 1;\n\n\n\n\ndef  f():\n    pass\n").unwrap();

    let checker = StyleChecker::new();
    let render_all = || {
        let result = checker.analyze(dir.path()).unwrap();
        result
            .reports
            .iter()
            .flat_map(|r| r.diagnostics.iter().map(|d| reporter::render(&r.file, d)))
            .collect::<Vec<String>>()
    };

    let first = render_all();
    let second = render_all();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_non_python_files_are_skipped() {
    let dir = tempdir().unwrap();
    let mut notes = File::create(dir.path().join("notes.txt")).unwrap();
    write!(notes, "x = 1;\n").unwrap();
    let mut script = File::create(dir.path().join("clean.py")).unwrap();
    write!(script, "x = 1\n").unwrap();

    let checker = StyleChecker::new();
    let result = checker.analyze(dir.path()).unwrap();

    assert_eq!(result.analysis_summary.total_files, 1);
    assert_eq!(result.reports.len(), 1);
    assert!(result.reports[0].diagnostics.is_empty());
}

#[test]
fn test_parse_failure_does_not_abort_the_batch() {
    let dir = tempdir().unwrap();
    let mut broken = File::create(dir.path().join("broken.py")).unwrap();
    write!(broken, "def broken(:\n").unwrap();
    let mut good = File::create(dir.path().join("good.py")).unwrap();
    write!(good, "x = 1\n").unwrap();

    let checker = StyleChecker::new();
    let result = checker.analyze(dir.path()).unwrap();

    assert_eq!(result.analysis_summary.total_files, 2);
    assert_eq!(result.failures.len(), 1);
    assert!(result.failures[0].file.ends_with("broken.py"));
    assert!(result.failures[0].error.contains("parse"));
    assert_eq!(result.reports.len(), 1);
    assert!(result.reports[0].file.ends_with("good.py"));
}

#[test]
fn test_unrecognized_path_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let checker = StyleChecker::new();
    let missing = dir.path().join("does_not_exist");
    assert!(checker.analyze(&missing).is_err());
}

#[test]
fn test_single_file_mode() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("one.py");
    let mut file = File::create(&file_path).unwrap();
    write!(file, "class bar:\n    pass\n").unwrap();

    let checker = StyleChecker::new();
    let result = checker.analyze(&file_path).unwrap();

    assert_eq!(result.reports.len(), 1);
    let diags = &result.reports[0].diagnostics;
    assert_eq!(diags.len(), 1);
    assert_eq!((diags[0].line, diags[0].code, diags[0].detail.as_str()), (1, 8, "bar"));
}

#[test]
fn test_batch_order_is_sorted_by_file_name() {
    let dir = tempdir().unwrap();
    for name in ["b.py", "a.py", "c.py"] {
        let mut f = File::create(dir.path().join(name)).unwrap();
        write!(f, "x = 1\n").unwrap();
    }

    let checker = StyleChecker::new();
    let result = checker.analyze(dir.path()).unwrap();

    let names: Vec<String> = result
        .reports
        .iter()
        .map(|r| r.file.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.py", "b.py", "c.py"]);
}
