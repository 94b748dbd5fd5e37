//! Patient model and the shared patient form validation
//!
//! Both the insert and the update path go through [`PatientForm::validate`],
//! so the two can never disagree about what a valid patient looks like.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::value::{Columns, SqlValue};
use super::ValidationError;
use crate::error::{DataError, Result};

/// Exactly ten ASCII digits, nothing else.
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("invalid contact regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "gender",
                value: s.to_owned(),
            })
    }
}

/// Validated contact number (exactly 10 digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// # Example
    /// ```
    /// use medrec_core::models::ContactNumber;
    ///
    /// assert!(ContactNumber::new("0123456789").is_ok());
    /// assert!(ContactNumber::new("123").is_err());
    /// assert!(ContactNumber::new("12345abcde").is_err());
    /// ```
    pub fn new(s: &str) -> std::result::Result<Self, ValidationError> {
        if !CONTACT_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "contact",
                reason: "must be exactly 10 digits",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated patient name (not blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatientName(String);

impl PatientName {
    /// The name is stored as entered; only blankness is rejected.
    pub fn new(s: &str) -> std::result::Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw patient input as typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
}

impl PatientForm {
    /// Run the contact and name checks, in that order.
    pub fn validate(&self) -> std::result::Result<NewPatient, ValidationError> {
        let contact = ContactNumber::new(&self.contact)?;
        let name = PatientName::new(&self.name)?;
        Ok(NewPatient {
            name,
            age: self.age,
            gender: self.gender,
            contact,
            address: self.address.clone(),
        })
    }
}

/// Prefill a form from a stored row.
///
/// Fails on a stored age that no form could have produced, so an edit
/// never rewrites it behind the operator's back.
impl TryFrom<&Patient> for PatientForm {
    type Error = DataError;

    fn try_from(p: &Patient) -> Result<Self> {
        let age =
            u32::try_from(p.age).map_err(|_| DataError::decode("age", "non-negative integer"))?;
        Ok(Self {
            name: p.name.clone(),
            age,
            gender: p.gender,
            contact: p.contact.clone(),
            address: p.address.clone(),
        })
    }
}

/// A patient that passed validation and may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: PatientName,
    pub age: u32,
    pub gender: Gender,
    pub contact: ContactNumber,
    pub address: String,
}

impl NewPatient {
    /// Bind order: name, age, gender, contact, address.
    pub(crate) fn params(&self) -> Vec<SqlValue> {
        vec![
            self.name.as_str().into(),
            self.age.into(),
            self.gender.as_str().into(),
            self.contact.as_str().into(),
            self.address.as_str().into(),
        ]
    }
}

/// Patient row as stored.
///
/// Contact is kept as a plain string: rows written around the form
/// validation are still readable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
}

impl Patient {
    pub const COLUMNS: &'static [&'static str] =
        &["patient_id", "name", "age", "gender", "contact", "address"];

    pub fn from_row(row: &[SqlValue]) -> Result<Self> {
        let cols = Columns::new(row, Self::COLUMNS);
        Ok(Self {
            id: cols.int(0)?,
            name: cols.text(1)?.to_owned(),
            age: cols.int(2)?,
            gender: cols.parsed(3, "Male, Female or Other")?,
            contact: cols.text(4)?.to_owned(),
            address: cols.text_or_empty(5)?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, contact: &str) -> PatientForm {
        PatientForm {
            name: name.into(),
            age: 34,
            gender: Gender::Female,
            contact: contact.into(),
            address: "12 Harbour Road".into(),
        }
    }

    #[test]
    fn contact_accepts_exactly_ten_digits() {
        assert!(ContactNumber::new("0123456789").is_ok());
        assert!(ContactNumber::new("9999999999").is_ok());
    }

    #[test]
    fn contact_rejects_everything_else() {
        for bad in [
            "",
            "123",
            "12345678901",
            "12345abcde",
            " 0123456789",
            "0123456789 ",
            "01234-56789",
            "０１２３４５６７８９",
            "٠١٢٣٤٥٦٧٨٩",
        ] {
            let err = ContactNumber::new(bad).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "contact", .. }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn name_rejects_blank() {
        for blank in ["", " ", "\t\n", "   "] {
            assert_eq!(
                PatientName::new(blank).unwrap_err(),
                ValidationError::Empty { field: "name" }
            );
        }
        assert_eq!(PatientName::new(" Ada ").unwrap().as_str(), " Ada ");
    }

    #[test]
    fn form_checks_contact_before_name() {
        let err = form("", "123").validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = form("  ", "0123456789").validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let ok = form("Ada Lovelace", "0123456789").validate().unwrap();
        assert_eq!(ok.name.as_str(), "Ada Lovelace");
        assert_eq!(ok.params().len(), 5);
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn patient_from_row() {
        let row = vec![
            SqlValue::Int(7),
            SqlValue::Text("Grace".into()),
            SqlValue::Int(61),
            SqlValue::Text("Female".into()),
            SqlValue::Text("5550001111".into()),
            SqlValue::Null,
        ];
        let p = Patient::from_row(&row).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.address, "");

        let form = PatientForm::try_from(&p).unwrap();
        assert_eq!(form.age, 61);
        assert_eq!(form.contact, "5550001111");

        let negative = Patient { age: -5, ..p };
        let err = PatientForm::try_from(&negative).unwrap_err();
        assert!(matches!(err, DataError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn patient_from_row_rejects_bad_gender() {
        let row = vec![
            SqlValue::Int(7),
            SqlValue::Text("Grace".into()),
            SqlValue::Int(61),
            SqlValue::Text("?".into()),
            SqlValue::Text("5550001111".into()),
            SqlValue::Text("".into()),
        ];
        let err = Patient::from_row(&row).unwrap_err();
        assert!(matches!(err, DataError::Decode { ref column, .. } if column == "gender"));
    }
}
