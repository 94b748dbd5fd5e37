//! Billing records (append-only)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::value::{Columns, SqlValue};
use super::ValidationError;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BillingStatus {
    Pending,
    Paid,
}

impl BillingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(ValidationError::InvalidVariant {
                field: "status",
                value: s.to_owned(),
            }),
        }
    }
}

/// Parse a billing amount, rejecting negatives.
///
/// This is an input-time check; the data layer stores whatever it is given.
pub fn parse_amount(s: &str) -> std::result::Result<f64, ValidationError> {
    let amount: f64 = s.trim().parse().map_err(|_| ValidationError::InvalidFormat {
        field: "amount",
        reason: "must be a number",
    })?;
    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "amount",
            reason: "must be a finite number",
        });
    }
    if amount < 0.0 {
        return Err(ValidationError::Negative { field: "amount" });
    }
    // -0 passes the sign check; fold it into 0
    Ok(amount + 0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBill {
    pub patient_id: i64,
    pub amount: f64,
    pub status: BillingStatus,
}

impl NewBill {
    pub(crate) fn params(&self) -> Vec<SqlValue> {
        vec![
            self.patient_id.into(),
            self.amount.into(),
            self.status.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingRecord {
    pub id: i64,
    pub patient_id: i64,
    pub amount: f64,
    pub status: BillingStatus,
}

impl BillingRecord {
    pub const COLUMNS: &'static [&'static str] = &["bill_id", "patient_id", "amount", "status"];

    pub fn from_row(row: &[SqlValue]) -> Result<Self> {
        let cols = Columns::new(row, Self::COLUMNS);
        Ok(Self {
            id: cols.int(0)?,
            patient_id: cols.int(1)?,
            amount: cols.float(2)?,
            status: cols.parsed(3, "Pending or Paid")?,
        })
    }
}
