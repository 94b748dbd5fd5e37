//! Terminal output helpers for the medrec CLI
//!
//! Tables and JSON go to stdout; status lines, spinners and errors go to
//! stderr.
//!
//! # Quiet Mode
//!
//! Spinners are suppressed when:
//! - `--quiet` flag is passed
//! - `MEDREC_QUIET=1` environment variable is set
//! - stderr is not a TTY (piped output)

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use medrec_core::models::{BillingRecord, HistoryEntry, Patient, TreatmentPlan};

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flags and environment
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("MEDREC_QUIET").map(|v| v == "1").unwrap_or(false)
        || !std::io::stderr().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

/// Create a spinner that respects quiet mode
pub fn spinner(msg: impl Into<String>) -> Option<ProgressBar> {
    if is_quiet() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Clear a spinner without leaving a line behind
pub fn finish(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Run a future with a spinner shown while it is pending
pub async fn with_spinner_async<T, E>(
    msg: impl Into<String>,
    f: impl std::future::Future<Output = Result<T, E>>,
) -> Result<T, E> {
    let pb = spinner(msg);
    let result = f.await;
    finish(pb);
    result
}

pub fn success(msg: impl Display) {
    eprintln!("✓ {}", msg);
}

/// One-line failure report
pub fn error(msg: impl Display) {
    eprintln!("✗ {}", msg);
}

/// Something that renders as one table row
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for Patient {
    const HEADERS: &'static [&'static str] =
        &["Patient ID", "Name", "Age", "Gender", "Contact", "Address"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.gender.to_string(),
            self.contact.clone(),
            self.address.clone(),
        ]
    }
}

impl Tabular for HistoryEntry {
    const HEADERS: &'static [&'static str] =
        &["History ID", "Patient ID", "Diagnosis", "Medications", "Allergies"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.patient_id.to_string(),
            self.diagnosis.clone(),
            self.medications.clone(),
            self.allergies.clone(),
        ]
    }
}

impl Tabular for TreatmentPlan {
    const HEADERS: &'static [&'static str] =
        &["Plan ID", "Patient ID", "Description", "Start Date", "End Date"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.patient_id.to_string(),
            self.description.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
    }
}

impl Tabular for BillingRecord {
    const HEADERS: &'static [&'static str] = &["Bill ID", "Patient ID", "Amount", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.patient_id.to_string(),
            format!("{:.2}", self.amount),
            self.status.to_string(),
        ]
    }
}

/// Lay out rows under headers with padded columns
pub fn render_table<T: Tabular>(items: &[T]) -> String {
    let rows: Vec<Vec<String>> = items.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = vec![line(&headers)];
    out.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    if rows.is_empty() {
        out.push("(no rows)".to_string());
    }
    out.extend(rows.iter().map(|row| line(row)));
    out.join("\n")
}

pub fn print_table<T: Tabular>(items: &[T]) {
    println!("{}", render_table(items));
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrec_core::models::BillingStatus;

    #[test]
    fn table_pads_columns() {
        let bills = vec![
            BillingRecord {
                id: 1,
                patient_id: 12,
                amount: 5.0,
                status: BillingStatus::Paid,
            },
            BillingRecord {
                id: 2,
                patient_id: 12,
                amount: 1250.5,
                status: BillingStatus::Pending,
            },
        ];

        let table = render_table(&bills);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Bill ID  Patient ID  Amount   Status");
        assert_eq!(lines[2], "1        12          5.00     Paid");
        assert_eq!(lines[3], "2        12          1250.50  Pending");
    }

    #[test]
    fn empty_table_says_so() {
        let table = render_table::<HistoryEntry>(&[]);
        assert!(table.starts_with("History ID"));
        assert!(table.ends_with("(no rows)"));
    }
}
