use crate::diagnostics::{Diagnostic, DiagnosticSet};
use crate::rules::blank::check_blank_runs;
use crate::rules::line::LINE_RULES;
use crate::rules::tree::TreeVisitor;
use crate::utils::LineIndex;
use anyhow::{bail, Context, Result};
use rustpython_parser::{parse, Mode};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Holds the results of one run.
/// This struct is serialized to JSON if requested.
#[derive(Serialize)]
pub struct AnalysisResult {
    /// Per-file reports, in batch order.
    pub reports: Vec<FileReport>,
    /// Files that could not be analyzed (unreadable or unparsable).
    pub failures: Vec<FileFailure>,
    /// Summary statistics of the run.
    pub analysis_summary: AnalysisSummary,
}

/// The sorted diagnostics of one analyzed file.
#[derive(Serialize)]
pub struct FileReport {
    /// The analyzed file.
    pub file: PathBuf,
    /// Diagnostics sorted ascending by `(line, code, detail)`.
    pub diagnostics: Vec<Diagnostic>,
}

/// A file that failed analysis. The batch continues past it.
#[derive(Serialize)]
pub struct FileFailure {
    /// The offending file.
    pub file: PathBuf,
    /// The rendered cause, including read or parse context.
    pub error: String,
}

/// Summary statistics for the analysis result.
#[derive(Serialize)]
pub struct AnalysisSummary {
    /// Number of Python files considered.
    pub total_files: usize,
    /// Total diagnostics across all reports.
    pub diagnostic_count: usize,
    /// Number of files that failed to read or parse.
    pub failure_count: usize,
}

/// The style checker. It carries no configuration: the rule set is fixed,
/// and each file owns its own lines, tree, and collector.
#[derive(Default)]
pub struct StyleChecker;

impl StyleChecker {
    /// Creates a new `StyleChecker` instance.
    pub fn new() -> Self {
        Self
    }

    /// Runs the checker over the given path.
    ///
    /// A directory contributes every regular file directly inside it (no
    /// recursion); a file is the sole candidate. Candidates without the `.py`
    /// suffix are silently skipped. A path that is neither is a usage error.
    /// Read and parse failures are collected per file and never abort the
    /// batch.
    pub fn analyze(&self, path: &Path) -> Result<AnalysisResult> {
        let candidates: Vec<PathBuf> = if path.is_dir() {
            WalkDir::new(path)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .collect()
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            bail!("no such file or directory: {}", path.display());
        };

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        let mut total_files = 0;

        for file in candidates {
            if !file.extension().map_or(false, |ext| ext == "py") {
                continue;
            }
            total_files += 1;
            match self.check_file(&file) {
                Ok(report) => reports.push(report),
                Err(err) => failures.push(FileFailure {
                    file,
                    error: format!("{:#}", err),
                }),
            }
        }

        let diagnostic_count = reports.iter().map(|r| r.diagnostics.len()).sum();
        let failure_count = failures.len();
        Ok(AnalysisResult {
            reports,
            failures,
            analysis_summary: AnalysisSummary {
                total_files,
                diagnostic_count,
                failure_count,
            },
        })
    }

    /// Analyzes a single file: line rules over the physical lines, the
    /// blank-run rule over the whole sequence, then tree rules over the
    /// parsed module. All rules feed one collector keyed by
    /// `(line, code, detail)`; the report drains it in sorted order.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut diagnostics = DiagnosticSet::new();

        // First pass: physical lines, trailing newlines kept.
        let lines: Vec<&str> = source.split_inclusive('\n').collect();
        for (i, line) in lines.iter().enumerate() {
            for rule in LINE_RULES {
                rule(i, line, &mut diagnostics);
            }
        }
        check_blank_runs(&lines, &mut diagnostics);

        // Second pass: the same text as a syntax tree.
        let ast = parse(&source, Mode::Module, &path.to_string_lossy())
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let rustpython_ast::Mod::Module(module) = &ast {
            let line_index = LineIndex::new(&source);
            let visitor = TreeVisitor::new(&line_index);
            visitor.walk(&module.body, &mut diagnostics);
        }

        Ok(FileReport {
            file: path.to_path_buf(),
            diagnostics: diagnostics.into_sorted(),
        })
    }
}
