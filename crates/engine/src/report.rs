use serde::Serialize;

/// Summary of one run: the total number of lines read and the lines that met
/// the length threshold, in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    project_name: String,
    line_count: usize,
    filtered_lines: Vec<String>,
}

impl Report {
    /// Build a report, keeping lines whose length in chars is at least
    /// `min_line_length`.
    #[must_use]
    pub fn build(project_name: impl Into<String>, lines: Vec<String>, min_line_length: usize) -> Self {
        let line_count = lines.len();
        let filtered_lines = lines
            .into_iter()
            .filter(|line| line.chars().count() >= min_line_length)
            .collect();

        Self {
            project_name: project_name.into(),
            line_count,
            filtered_lines,
        }
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    #[must_use]
    pub fn filtered_lines(&self) -> &[String] {
        &self.filtered_lines
    }
}
