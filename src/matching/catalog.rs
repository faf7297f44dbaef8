use once_cell::sync::Lazy;

use crate::text::normalize::normalize;

/// One semantic profile slot and the phrases that identify it on a form.
#[derive(Debug)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
}

/// Catalog order matters: on equal keyword length the earlier definition wins.
#[rustfmt::skip]
pub static FIELD_DEFINITIONS: &[FieldDefinition] = &[
    // ---- income ----
    FieldDefinition { key: "annualIncome", keywords: &["gross annual income", "annual income", "annual_income", "yearly income", "income per annum", "gross income", "salary per year", "pa income", "total income before tax", "income before tax"] },
    FieldDefinition { key: "otherIncome", keywords: &["other income", "additional income", "secondary income", "rental income", "investment income", "bonus income"] },
    FieldDefinition { key: "monthlyIncome", keywords: &["gross monthly income", "monthly income", "monthly_income", "income per month", "monthly salary"] },

    // ---- living expenses ----
    FieldDefinition { key: "rentMortgage", keywords: &["rent or mortgage", "rent mortgage", "monthly rent", "mortgage payment", "rent payment", "housing costs", "accommodation costs", "housing expense"] },
    FieldDefinition { key: "groceries", keywords: &["groceries", "food expenses", "food and groceries", "supermarket", "grocery expenses"] },
    FieldDefinition { key: "transport", keywords: &["transport", "transportation", "travel expenses", "commute", "petrol", "fuel", "car expenses", "public transport"] },
    FieldDefinition { key: "utilities", keywords: &["utilities", "utility bills", "electricity", "gas and electricity", "water rates", "phone and internet", "energy bills"] },
    FieldDefinition { key: "insurance", keywords: &["insurance", "insurance premiums", "health insurance", "car insurance", "home insurance", "life insurance"] },
    FieldDefinition { key: "entertainment", keywords: &["entertainment", "recreation", "leisure", "dining out", "subscriptions", "streaming services", "hobbies"] },
    FieldDefinition { key: "childcare", keywords: &["childcare", "child care", "daycare", "day care", "nanny costs", "babysitting"] },
    FieldDefinition { key: "education", keywords: &["education", "school fees", "tuition", "university fees", "education expenses", "school expenses"] },
    FieldDefinition { key: "monthlyExpenses", keywords: &["other expenses", "other monthly expenses", "miscellaneous expenses", "monthly expenses", "living expenses", "monthly living costs", "total monthly expenses", "household expenses"] },

    // ---- assets ----
    FieldDefinition { key: "propertyValue", keywords: &["property value", "home value", "real estate value", "property worth", "house value", "estimated property value"] },
    FieldDefinition { key: "vehicleValue", keywords: &["vehicle value", "car value", "motor vehicle value", "vehicle worth", "cars and vehicles"] },
    FieldDefinition { key: "savings", keywords: &["savings", "savings balance", "bank savings", "cash savings", "total savings", "money in bank"] },

    // ---- liabilities ----
    FieldDefinition { key: "totalCreditLimit", keywords: &["total credit limit", "credit card limits", "existing credit limits", "combined credit limit", "current credit limit"] },
    FieldDefinition { key: "creditCardBalance", keywords: &["credit card balance", "credit card debt", "outstanding credit card", "credit card owing", "amount owing on credit cards"] },
    FieldDefinition { key: "numCreditCards", keywords: &["number of credit cards", "how many credit cards", "credit cards held", "existing credit cards"] },
    FieldDefinition { key: "loanBalance", keywords: &["loan balance", "personal loan balance", "car loan balance", "other loans", "outstanding loans", "loan amount owing"] },
    FieldDefinition { key: "loanRepayment", keywords: &["loan repayment", "monthly loan repayment", "loan payment", "personal loan repayment", "car loan repayment"] },
    FieldDefinition { key: "bnplBalance", keywords: &["buy now pay later", "bnpl balance", "bnpl", "afterpay", "zip pay", "klarna", "humm", "buy now pay later balance"] },

    // ---- computed totals ----
    FieldDefinition { key: "totalMonthlyExpenses", keywords: &["total monthly expenses", "total expenses", "total living expenses", "combined expenses", "all expenses"] },
    FieldDefinition { key: "totalAssets", keywords: &["total assets", "total asset value", "combined assets", "net assets"] },
    FieldDefinition { key: "totalLiabilities", keywords: &["total liabilities", "total debts", "combined liabilities", "total debt", "outstanding debts"] },

    // ---- employment ----
    FieldDefinition { key: "employmentStatus", keywords: &["employment status", "employment_status", "employment situation", "your employment", "current employment"] },
    FieldDefinition { key: "employmentType", keywords: &["employment type", "type of employment", "employment basis", "full time part time", "work type"] },
    FieldDefinition { key: "yearsAtEmployer", keywords: &["years with employer", "years at employer", "length of employment", "time at employer", "years employed", "how long employed", "time with current employer"] },
    FieldDefinition { key: "employer", keywords: &["employer name", "current employer", "employer", "company name", "business name", "name of employer"] },
    FieldDefinition { key: "employerPhone", keywords: &["employer phone", "employer contact", "work phone", "employer telephone", "business phone"] },
    FieldDefinition { key: "occupation", keywords: &["occupation", "job title", "job_title", "your occupation", "profession", "position title", "role"] },
    FieldDefinition { key: "industry", keywords: &["industry", "sector", "industry type", "field of work", "business type"] },

    // ---- address ----
    FieldDefinition { key: "address2", keywords: &["address line 2", "address_line_2", "addressline2", "unit number", "apartment number", "suite", "flat number", "unit flat"] },
    FieldDefinition { key: "address1", keywords: &["street address", "address line 1", "address_line_1", "addressline1", "residential address", "home address", "current address", "street name and number", "address"] },
    FieldDefinition { key: "yearsAtAddress", keywords: &["years at this address", "years at address", "length of residence", "how long at address", "time at current address", "years at current address"] },
    FieldDefinition { key: "residentialStatus", keywords: &["residential status", "living situation", "housing status", "home ownership", "do you own or rent", "accommodation type"] },

    // ---- personal ----
    FieldDefinition { key: "firstName", keywords: &["first name", "first_name", "firstname", "given name", "given_name", "givenname", "first names", "fname"] },
    FieldDefinition { key: "middleName", keywords: &["middle name", "middle_name", "middlename", "middle names", "other names"] },
    FieldDefinition { key: "lastName", keywords: &["last name", "last_name", "lastname", "surname", "family name", "family_name", "familyname", "last names", "lname"] },
    FieldDefinition { key: "fullName", keywords: &["full name", "fullname", "full legal name", "your full name"] },
    FieldDefinition { key: "salutation", keywords: &["salutation", "title", "prefix", "honourific", "honorific"] },
    FieldDefinition { key: "dob", keywords: &["date of birth", "dateofbirth", "date_of_birth", "dob", "birth date", "birthdate"] },
    FieldDefinition { key: "dobDay", keywords: &["day of birth", "birth day", "dob day", "day (dd)", "day born"] },
    FieldDefinition { key: "dobMonth", keywords: &["month of birth", "birth month", "dob month", "month (mm)", "month born"] },
    FieldDefinition { key: "dobYear", keywords: &["year of birth", "birth year", "dob year", "year (yyyy)", "year born"] },
    FieldDefinition { key: "gender", keywords: &["gender", "sex"] },
    FieldDefinition { key: "maritalStatus", keywords: &["marital status", "relationship status", "married single", "are you married"] },
    FieldDefinition { key: "dependents", keywords: &["number of dependents", "dependents", "dependants", "number of dependants", "how many dependents"] },
    FieldDefinition { key: "citizenship", keywords: &["citizenship", "citizenship status", "residency status", "australian citizen", "permanent resident", "visa status"] },
    FieldDefinition { key: "email", keywords: &["email address", "email", "e-mail", "electronic mail"] },
    FieldDefinition { key: "phone", keywords: &["mobile phone number", "mobile phone", "mobile number", "phone number", "phone", "mobile", "contact number", "cell phone"] },

    // ---- location ----
    FieldDefinition { key: "postcode", keywords: &["postcode", "post code", "postal code", "post_code", "zip code", "zipcode"] },
    FieldDefinition { key: "suburb", keywords: &["suburb", "suburb/city", "city", "town", "locality"] },
    FieldDefinition { key: "state", keywords: &["state/territory", "state territory", "state_territory", "state", "territory"] },
    FieldDefinition { key: "country", keywords: &["country of residence", "country"] },

    // ---- identity documents ----
    FieldDefinition { key: "licenceNumber", keywords: &["driver licence number", "drivers licence", "licence number", "license number", "driving licence", "dl number"] },
    FieldDefinition { key: "licenceState", keywords: &["licence state", "license state", "licence issued", "state of issue", "issuing state"] },
    FieldDefinition { key: "passportNumber", keywords: &["passport number", "passport no", "passport"] },
    FieldDefinition { key: "passportCountry", keywords: &["passport country", "country of issue", "passport issued"] },
    FieldDefinition { key: "medicareNumber", keywords: &["medicare number", "medicare card number", "medicare"] },
    FieldDefinition { key: "medicareRef", keywords: &["medicare reference", "medicare ref", "reference number on medicare", "irn", "individual reference number"] },
];

/// A keyword in comparison form, tied back to its definition.
#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    pub key: &'static str,
    pub normalized: String,
}

/// Every keyword of every definition, normalized once, in catalog order.
pub static COMPILED_KEYWORDS: Lazy<Vec<CompiledKeyword>> = Lazy::new(|| {
    FIELD_DEFINITIONS
        .iter()
        .flat_map(|def| {
            def.keywords.iter().map(move |kw| CompiledKeyword {
                key: def.key,
                normalized: normalize(kw),
            })
        })
        .collect()
});

pub fn definition(key: &str) -> Option<&'static FieldDefinition> {
    FIELD_DEFINITIONS.iter().find(|d| d.key == key)
}
