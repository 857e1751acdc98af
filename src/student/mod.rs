//! Student - the single record type held by the registry.
//!
//! A `Student` is identified two ways: the generated numeric `id`, and the
//! externally supplied `roll`. Lookups always go through the roll, compared
//! after [`normalize_roll`].
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use student_registry::{NewStudent, StudentPatch};
//!
//! let new = NewStudent::from_json(&json!({ "roll": " A1 ", "name": "Ann" }));
//! assert_eq!(new.roll, "A1");
//!
//! let patch = StudentPatch::from_json(&json!({ "year": "not a number" }));
//! assert_eq!(patch.year, None);
//! ```

mod coerce;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use coerce::{coerce_text, coerce_year};

/// Year assigned when none (or nothing usable) is supplied at creation.
pub const DEFAULT_YEAR: i64 = 1;

fn default_year() -> i64 {
    DEFAULT_YEAR
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub roll: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default = "default_year")]
    pub year: i64,
    /// Records written without a timestamp load as the Unix epoch.
    #[serde(default)]
    pub created_at: NaiveDateTime,
}

impl Student {
    /// Build a record from validated creation input.
    pub fn new(id: u64, input: NewStudent) -> Self {
        Student {
            id,
            roll: input.roll,
            name: input.name,
            email: input.email,
            department: input.department,
            year: input.year.unwrap_or(DEFAULT_YEAR),
            created_at: now(),
        }
    }

    /// Whether this record's roll matches `roll` after normalization.
    pub fn has_roll(&self, roll: &str) -> bool {
        normalize_roll(&self.roll) == normalize_roll(roll)
    }
}

/// Canonical form of a roll used for every comparison: trimmed, lowercased.
pub fn normalize_roll(roll: &str) -> String {
    roll.trim().to_lowercase()
}

/// Local wall-clock time truncated to microseconds.
fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Creation input, decoded leniently from a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub roll: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: Option<i64>,
}

impl NewStudent {
    /// Decode from an arbitrary JSON body. Non-object bodies decode as empty.
    ///
    /// Text fields are stringified and trimmed. A `year` of zero counts as
    /// absent.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key).map(coerce_text).unwrap_or_default();
        NewStudent {
            roll: field("roll"),
            name: field("name"),
            email: field("email"),
            department: field("department"),
            year: body.get("year").and_then(coerce_year).filter(|y| *y != 0),
        }
    }

    /// `roll` and `name` are both non-empty.
    pub fn is_complete(&self) -> bool {
        !self.roll.is_empty() && !self.name.is_empty()
    }
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub year: Option<i64>,
}

impl StudentPatch {
    /// Decode from an arbitrary JSON body.
    ///
    /// Only keys present in the body produce `Some`. A `year` that does not
    /// coerce to an integer is dropped rather than rejected.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key).map(coerce_text);
        StudentPatch {
            name: field("name"),
            email: field("email"),
            department: field("department"),
            year: body.get("year").and_then(coerce_year),
        }
    }

    /// Apply onto `student`. Blank names are ignored.
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = self.name.as_ref().filter(|n| !n.trim().is_empty()) {
            student.name = name.trim().to_string();
        }
        if let Some(email) = &self.email {
            student.email = email.trim().to_string();
        }
        if let Some(department) = &self.department {
            student.department = department.trim().to_string();
        }
        if let Some(year) = self.year {
            student.year = year;
        }
    }
}
