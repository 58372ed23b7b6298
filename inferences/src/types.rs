use serde::{Deserialize, Serialize};

use crate::coerce::{CoerceError, Numeric};

/// One loan application, as posted by clients.
///
/// Categorical attributes arrive already integer-encoded. Values are not
/// range-checked; only their types are enforced.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(try_from = "RawLoanInput")]
pub struct LoanInput {
    pub gender: i64,
    pub married: i64,
    pub dependents: i64,
    pub education: i64,
    pub self_employed: i64,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term: f64,
    pub credit_history: f64,
    pub property_area: i64,
}

#[derive(Deserialize)]
struct RawLoanInput {
    gender: Numeric,
    married: Numeric,
    dependents: Numeric,
    education: Numeric,
    self_employed: Numeric,
    applicant_income: Numeric,
    coapplicant_income: Numeric,
    loan_amount: Numeric,
    loan_term: Numeric,
    credit_history: Numeric,
    property_area: Numeric,
}

impl TryFrom<RawLoanInput> for LoanInput {
    type Error = CoerceError;

    fn try_from(raw: RawLoanInput) -> Result<Self, Self::Error> {
        Ok(LoanInput {
            gender: raw.gender.to_int("gender")?,
            married: raw.married.to_int("married")?,
            dependents: raw.dependents.to_int("dependents")?,
            education: raw.education.to_int("education")?,
            self_employed: raw.self_employed.to_int("self_employed")?,
            applicant_income: raw.applicant_income.to_float("applicant_income")?,
            coapplicant_income: raw.coapplicant_income.to_float("coapplicant_income")?,
            loan_amount: raw.loan_amount.to_float("loan_amount")?,
            loan_term: raw.loan_term.to_float("loan_term")?,
            credit_history: raw.credit_history.to_float("credit_history")?,
            property_area: raw.property_area.to_int("property_area")?,
        })
    }
}

impl LoanInput {
    pub const FEATURE_COUNT: usize = 11;

    /// Column order the scaler and classifier were fitted on.
    pub const FEATURE_NAMES: [&'static str; Self::FEATURE_COUNT] = [
        "gender",
        "married",
        "dependents",
        "education",
        "self_employed",
        "applicant_income",
        "coapplicant_income",
        "loan_amount",
        "loan_term",
        "credit_history",
        "property_area",
    ];

    pub fn to_features(&self) -> [f64; Self::FEATURE_COUNT] {
        [
            self.gender as f64,
            self.married as f64,
            self.dependents as f64,
            self.education as f64,
            self.self_employed as f64,
            self.applicant_income,
            self.coapplicant_income,
            self.loan_amount,
            self.loan_term,
            self.credit_history,
            self.property_area as f64,
        ]
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Approved,
    Rejected,
}

impl LoanStatus {
    /// Class `1` is the positive (approved) outcome.
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            LoanStatus::Approved
        } else {
            LoanStatus::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
        }
    }
}

/// Outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub status: LoanStatus,
    pub class: i64,
    pub decision: f64,
    pub probability: f64,
}
