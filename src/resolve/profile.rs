use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fill::error::FillError;

/// Every key the profile editor knows how to store.
#[rustfmt::skip]
pub const PROFILE_KEYS: &[&str] = &[
    // Personal
    "salutation", "gender", "firstName", "middleName", "lastName",
    "dob", "maritalStatus", "dependents", "email", "phone", "citizenship",
    // Address
    "address1", "address2", "suburb", "state", "postcode", "yearsAtAddress", "residentialStatus",
    // Employment
    "employmentStatus", "employmentType", "employer", "employerPhone", "occupation", "industry", "yearsAtEmployer",
    // Income
    "annualIncome", "otherIncome",
    // Expenses
    "rentMortgage", "groceries", "transport", "utilities", "insurance", "entertainment", "childcare", "education", "monthlyExpenses",
    // Assets & liabilities
    "propertyValue", "vehicleValue", "savings", "totalCreditLimit", "creditCardBalance", "numCreditCards", "loanBalance", "loanRepayment", "bnplBalance",
    // Identity
    "licenceNumber", "licenceState", "passportNumber", "passportCountry", "medicareNumber", "medicareRef",
];

/// Keys entered with thousands separators.
#[rustfmt::skip]
pub const MONEY_KEYS: &[&str] = &[
    "annualIncome", "otherIncome", "rentMortgage", "groceries", "transport", "utilities", "insurance",
    "entertainment", "childcare", "education", "monthlyExpenses", "propertyValue", "vehicleValue",
    "savings", "totalCreditLimit", "creditCardBalance", "loanBalance", "loanRepayment", "bnplBalance",
];

/// The user's stored answers, keyed by field key. Empty and null values count
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>", into = "BTreeMap<String, String>")]
pub struct Profile {
    values: BTreeMap<String, String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Non-empty value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Keys present in the profile that no form field maps to.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !PROFILE_KEYS.contains(k))
            .collect()
    }

    /// Trim every value and drop thousands separators from money fields.
    pub fn sanitized(mut self) -> Self {
        for (key, value) in self.values.iter_mut() {
            let trimmed = value.trim();
            *value = if MONEY_KEYS.contains(&key.as_str()) {
                trimmed.replace(',', "")
            } else {
                trimmed.to_string()
            };
        }
        self
    }

    /// A fill needs at least a first or last name to be worth starting.
    pub fn require_name(&self) -> Result<(), FillError> {
        if self.get("firstName").is_none() && self.get("lastName").is_none() {
            return Err(FillError::ProfileMissingName);
        }
        Ok(())
    }

    /// Parse a profile from JSON or YAML text and sanitize it.
    pub fn parse(content: &str) -> Result<Self, FillError> {
        let profile: Profile =
            serde_yaml::from_str(content).map_err(|source| FillError::ProfileParse {
                context: "profile".to_string(),
                source,
            })?;
        Ok(profile.sanitized())
    }

    pub fn load(path: &str) -> Result<Self, FillError> {
        let content = std::fs::read_to_string(path).map_err(|source| FillError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|e| match e {
            FillError::ProfileParse { source, .. } => FillError::ProfileParse {
                context: path.to_string(),
                source,
            },
            other => other,
        })
    }
}

// Null entries (`~`, JSON `null`, a bare `key:`) are dropped
impl From<BTreeMap<String, Option<String>>> for Profile {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        raw.into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }
}

impl From<Profile> for BTreeMap<String, String> {
    fn from(profile: Profile) -> Self {
        profile.values
    }
}

impl FromIterator<(String, String)> for Profile {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
