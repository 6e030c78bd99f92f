//! Report output formatting.

use std::io;
use std::path::Path;

/// Format a float with the shortest representation that round-trips,
/// keeping a trailing `.0` on integral values (`2344.0`, `1498.6`).
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Format a slice as a bracketed, comma-separated list.
#[must_use]
pub fn format_vector(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_float(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Format worker counts as a bracketed list.
#[must_use]
pub fn format_workers(workers: &[u64]) -> String {
    let items: Vec<String> = workers.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Write a rendered report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report_to_file(path: &Path, report: &[u8]) -> io::Result<()> {
    std::fs::write(path, report)?;
    tracing::info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_float_integral_keeps_point() {
        assert_eq!(format_float(2344.0), "2344.0");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn format_float_fractional() {
        assert_eq!(format_float(1498.6), "1498.6");
        assert_eq!(format_float(-87.800_000_000_000_18), "-87.80000000000018");
    }

    #[test]
    fn format_float_tiny() {
        let s = format_float(2.763_934_609_651_760_5e-6);
        assert!(s.starts_with("2.76393460965176"));
        assert!(s.contains("e-6"));
    }

    #[test]
    fn format_vector_brackets() {
        assert_eq!(format_vector(&[2344.0, 1498.6]), "[2344.0, 1498.6]");
        assert_eq!(format_vector(&[]), "[]");
    }

    #[test]
    fn format_workers_list() {
        assert_eq!(format_workers(&[1, 2, 4]), "[1, 2, 4]");
    }

    #[test]
    fn write_report_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        write_report_to_file(&path, b"hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn write_report_bad_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(write_report_to_file(&path, b"x").is_err());
    }
}
