use crate::resolve::profile::Profile;

/// Country written when the profile does not say otherwise.
pub const DEFAULT_COUNTRY: &str = "Australia";

const EXPENSE_KEYS: [&str; 10] = [
    "rentMortgage",
    "groceries",
    "transport",
    "utilities",
    "insurance",
    "entertainment",
    "childcare",
    "education",
    "monthlyExpenses",
    "loanRepayment",
];

const ASSET_KEYS: [&str; 3] = ["propertyValue", "vehicleValue", "savings"];

const LIABILITY_KEYS: [&str; 3] = ["creditCardBalance", "loanBalance", "bnplBalance"];

/// Field keys whose value is computed rather than read verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    FullName,
    MonthlyIncome,
    TotalMonthlyExpenses,
    TotalAssets,
    TotalLiabilities,
    DobDay,
    DobMonth,
    DobYear,
    Country,
    PassportCountry,
}

impl DerivedField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fullName" => Some(Self::FullName),
            "monthlyIncome" => Some(Self::MonthlyIncome),
            "totalMonthlyExpenses" => Some(Self::TotalMonthlyExpenses),
            "totalAssets" => Some(Self::TotalAssets),
            "totalLiabilities" => Some(Self::TotalLiabilities),
            "dobDay" => Some(Self::DobDay),
            "dobMonth" => Some(Self::DobMonth),
            "dobYear" => Some(Self::DobYear),
            "country" => Some(Self::Country),
            "passportCountry" => Some(Self::PassportCountry),
            _ => None,
        }
    }

    fn resolve(self, profile: &Profile) -> String {
        match self {
            Self::FullName => ["firstName", "middleName", "lastName"]
                .iter()
                .filter_map(|k| profile.get(k))
                .collect::<Vec<_>>()
                .join(" "),
            Self::MonthlyIncome => {
                let annual = parse_money(profile.get("annualIncome").unwrap_or(""));
                if annual == 0.0 {
                    String::new()
                } else {
                    format_number((annual / 12.0).round())
                }
            }
            Self::TotalMonthlyExpenses => sum_or_empty(profile, &EXPENSE_KEYS),
            Self::TotalAssets => sum_or_empty(profile, &ASSET_KEYS),
            Self::TotalLiabilities => sum_or_empty(profile, &LIABILITY_KEYS),
            Self::DobDay => dob_part(profile, 0),
            Self::DobMonth => dob_part(profile, 1),
            Self::DobYear => dob_part(profile, 2),
            // Single-market policy: the form's country is always the default
            Self::Country => DEFAULT_COUNTRY.to_string(),
            Self::PassportCountry => profile
                .get("passportCountry")
                .unwrap_or(DEFAULT_COUNTRY)
                .to_string(),
        }
    }
}

/// Value to write for `field_key`. An empty string means "nothing to write".
pub fn resolve_value(field_key: &str, profile: &Profile) -> String {
    match DerivedField::from_key(field_key) {
        Some(derived) => derived.resolve(profile),
        None => profile.get(field_key).unwrap_or("").to_string(),
    }
}

/// Read a money-like figure: everything but digits and `.` is dropped;
/// empty or unparsable text counts as zero.
pub fn parse_money(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Render without a trailing `.0` for whole numbers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn sum_or_empty(profile: &Profile, keys: &[&str]) -> String {
    let total: f64 = keys
        .iter()
        .map(|k| parse_money(profile.get(k).unwrap_or("")))
        .sum();

    if total == 0.0 {
        String::new()
    } else {
        format_number(total)
    }
}

/// `dob` is stored as day/month/year.
fn dob_part(profile: &Profile, index: usize) -> String {
    profile
        .get("dob")
        .and_then(|dob| dob.split('/').nth(index))
        .unwrap_or("")
        .to_string()
}

/// `d/m/y` -> `y-m-d`, the format date inputs accept. Needs exactly three parts.
pub fn dob_to_iso(dob: &str) -> Option<String> {
    let parts: Vec<&str> = dob.split('/').collect();
    match parts.as_slice() {
        [day, month, year] => Some(format!("{}-{}-{}", year, month, day)),
        _ => None,
    }
}
