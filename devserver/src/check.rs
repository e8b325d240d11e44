//! Builds every template in turn and reports which ones made it.

use std::fmt;
use std::time::Duration;

use log::{error, info};

use crate::bundle::{self, BundleReport};
use crate::variant::Variant;

const ERROR_PREVIEW_CHARS: usize = 100;

#[derive(Debug)]
pub enum Outcome {
    Pass(BundleReport),
    Fail(String),
}

#[derive(Debug)]
pub struct TemplateResult {
    pub variant: Variant,
    pub outcome: Outcome,
}

impl TemplateResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass(_))
    }
}

impl fmt::Display for TemplateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Pass(report) => write!(
                f,
                "PASS {}: {} files, {} bytes in {:.1?}",
                self.variant, report.files, report.total_bytes, report.elapsed
            ),
            Outcome::Fail(message) => {
                let preview: String = message.chars().take(ERROR_PREVIEW_CHARS).collect();
                let ellipsis = if preview.len() < message.len() { "..." } else { "" };
                write!(f, "FAIL {}: {preview}{ellipsis}", self.variant)
            }
        }
    }
}

/// Runs `build` for each variant, collecting failures instead of stopping
/// at the first one.
pub fn check_all<F>(variants: &[Variant], mut build: F) -> Vec<TemplateResult>
where
    F: FnMut(Variant) -> bundle::Result<BundleReport>,
{
    variants
        .iter()
        .map(|&variant| {
            info!("checking the {variant} template");
            let outcome = match build(variant) {
                Ok(report) => Outcome::Pass(report),
                Err(err) => {
                    error!("{variant} template failed: {err}");
                    Outcome::Fail(err.to_string())
                }
            };
            TemplateResult { variant, outcome }
        })
        .collect()
}

/// Totals, per-template lines, pass rate and total build time.
pub struct Summary<'a>(pub &'a [TemplateResult]);

impl Summary<'_> {
    pub fn failed(&self) -> usize {
        self.0.iter().filter(|result| !result.passed()).count()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.len();
        if total == 0 {
            return writeln!(f, "no templates checked");
        }
        let failed = self.failed();
        let passed = total - failed;
        writeln!(f, "total: {total} | passed: {passed} | failed: {failed}")?;
        for result in self.0 {
            writeln!(f, "  {result}")?;
        }

        let build_time: Duration = self
            .0
            .iter()
            .filter_map(|result| match &result.outcome {
                Outcome::Pass(report) => Some(report.elapsed),
                Outcome::Fail(_) => None,
            })
            .sum();
        writeln!(f, "pass rate: {:.1}%", passed as f64 * 100.0 / total as f64)?;
        writeln!(f, "total build time: {build_time:.1?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::BundleError;
    use std::path::PathBuf;

    fn report(files: usize, total_bytes: u64, millis: u64) -> BundleReport {
        BundleReport {
            out_dir: PathBuf::from("target/www"),
            files,
            total_bytes,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn keeps_going_after_a_failure() {
        let mut built = Vec::new();
        let results = check_all(&[Variant::Script, Variant::Component], |variant| {
            built.push(variant);
            match variant {
                Variant::Script => Err(BundleError::MissingArtifact(PathBuf::from("script.wasm"))),
                Variant::Component => Ok(report(4, 2048, 1500)),
            }
        });

        assert_eq!(built, [Variant::Script, Variant::Component]);
        assert!(!results[0].passed());
        assert!(results[1].passed());
        assert_eq!(results[0].to_string(), "FAIL script: build artifact not found: script.wasm");
        assert!(results[1].to_string().starts_with("PASS component: 4 files, 2048 bytes in "));
    }

    #[test]
    fn summary_counts_and_rates() {
        let results = check_all(&Variant::ALL, |variant| match variant {
            Variant::Component => Ok(report(4, 2048, 1000)),
            Variant::Script => Ok(report(3, 1024, 500)),
        });
        let summary = Summary(&results);
        let text = summary.to_string();

        assert_eq!(summary.failed(), 0);
        assert!(text.starts_with("total: 2 | passed: 2 | failed: 0\n"), "{text}");
        assert!(text.contains("pass rate: 100.0%"), "{text}");
        assert!(text.contains("total build time: 1.5s"), "{text}");
    }

    #[test]
    fn long_errors_are_cut_short() {
        let result = TemplateResult {
            variant: Variant::Script,
            outcome: Outcome::Fail("x".repeat(300)),
        };
        let line = result.to_string();
        assert_eq!(line, format!("FAIL script: {}...", "x".repeat(ERROR_PREVIEW_CHARS)));
    }

    #[test]
    fn empty_summary() {
        assert_eq!(Summary(&[]).to_string(), "no templates checked\n");
    }
}
