//! Append-only log of completed runs.
//!
//! Lives for the process only; nothing here is persisted.

use crate::models::RunRecord;

const HEADERS: [&str; 4] = ["ALGORITHM", "SEEK", "RESPONSE", "THROUGHPUT"];

/// Completed runs in completion order.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<RunRecord>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed run.
    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&RunRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Table rows as display strings: policy (uppercased), seek, response, throughput.
    pub fn rows(&self) -> Vec<[String; 4]> {
        self.records
            .iter()
            .map(|r| {
                [
                    r.policy_label(),
                    r.seek_time.to_string(),
                    r.response_label(),
                    r.throughput.to_string(),
                ]
            })
            .collect()
    }

    /// Renders a column-aligned text table with a header row.
    pub fn render_table(&self) -> String {
        let rows = self.rows();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        push_row(&mut out, &HEADERS, &widths);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        push_row(&mut out, &rule, &widths);
        for row in &rows {
            push_row(&mut out, row, &widths);
        }
        out
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(policy: &str, seek: u64, response: f64, throughput: usize) -> RunRecord {
        RunRecord {
            policy: policy.into(),
            seek_time: seek,
            response_time: response,
            throughput,
        }
    }

    #[test]
    fn test_append_order() {
        let mut log = HistoryLog::new();
        log.push(record("fcfs", 60, 20.0, 3));
        log.push(record("sstf", 236, 29.5, 8));
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].policy, "fcfs");
        assert_eq!(log.last().unwrap().policy, "sstf");
    }

    #[test]
    fn test_rows_uppercase() {
        let mut log = HistoryLog::new();
        log.push(record("ai", 10, 3.333, 3));
        assert_eq!(
            log.rows(),
            vec![["AI".to_string(), "10".into(), "3.33".into(), "3".into()]]
        );
    }

    #[test]
    fn test_render_table() {
        let mut log = HistoryLog::new();
        log.push(record("fcfs", 60, 20.0, 3));
        let table = log.render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ALGORITHM | SEEK | RESPONSE | THROUGHPUT");
        assert!(lines[1].starts_with("---------"));
        assert_eq!(lines[2], "FCFS      | 60   | 20.00    | 3");
    }

    #[test]
    fn test_empty_table_has_header() {
        assert_eq!(HistoryLog::new().render_table().lines().count(), 2);
    }
}
