// crates/core/src/adapters.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use recipe_stats_domain::report::Report;
use recipe_stats_infra::output::write_json_report;
use recipe_stats_ports::notifier::AggregationNotifier;
use recipe_stats_shared_kernel::{InfrastructureError, Result};
use recipe_stats_usecase::ReportPresenter;

/// Emits the finished report as JSON to stdout or a file.
pub struct JsonReportEmitter {
    output: Option<PathBuf>,
    include_total: bool,
}

impl JsonReportEmitter {
    #[must_use]
    pub fn new(output: Option<PathBuf>, include_total: bool) -> Self {
        Self { output, include_total }
    }
}

impl ReportPresenter for JsonReportEmitter {
    fn present(&self, report: &Report) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|err| report_write(path, err))?;
                let mut writer = BufWriter::new(file);
                write_json_report(report, self.include_total, &mut writer)?;
                writer.flush().map_err(|err| report_write(path, err))?;
                Ok(())
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_json_report(report, self.include_total, &mut handle)
            }
        }
    }
}

fn report_write(path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::ReportWrite { path: path.to_path_buf(), source }
}

/// Routes aggregation progress and warnings to stderr.
pub struct ConsoleNotifier;

impl AggregationNotifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{message}");
    }
}
