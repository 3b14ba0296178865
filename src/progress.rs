//! Progress output for the staging pipeline

use console::Style;

/// Write-only sink for human-readable progress lines
pub trait ProgressSink {
    fn print(&mut self, line: &str);
}

/// Sink that writes styled lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn print(&mut self, line: &str) {
        println!("{}", Style::new().cyan().apply_to(line));
    }
}

/// Sink that captures lines in memory for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturedSink {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl ProgressSink for CapturedSink {
    fn print(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
