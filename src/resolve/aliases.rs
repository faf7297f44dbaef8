/// Ordered mapping from a canonical closed-vocabulary value to the spellings
/// forms use for it. Lookups resolve to the first canonical entry that
/// matches, so overlapping aliases are allowed.
#[derive(Debug)]
pub struct AliasTable {
    pub entries: &'static [(&'static str, &'static [&'static str])],
}

impl AliasTable {
    /// Canonical entry for an already-folded value (lowercased, trimmed).
    pub fn canonical(&self, folded: &str) -> Option<(&'static str, &'static [&'static str])> {
        self.entries
            .iter()
            .find(|(canon, aliases)| *canon == folded || aliases.contains(&folded))
            .copied()
    }

    /// Canonical value followed by all of its aliases.
    pub fn candidates(&self, folded: &str) -> Option<Vec<&'static str>> {
        let (canon, aliases) = self.canonical(folded)?;
        let mut all = Vec::with_capacity(aliases.len() + 1);
        all.push(canon);
        all.extend_from_slice(aliases);
        Some(all)
    }
}

#[rustfmt::skip]
pub static STATE_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("NSW", &["nsw", "new south wales"]),
        ("VIC", &["vic", "victoria"]),
        ("QLD", &["qld", "queensland"]),
        ("SA", &["sa", "south australia"]),
        ("WA", &["wa", "western australia"]),
        ("TAS", &["tas", "tasmania"]),
        ("NT", &["nt", "northern territory"]),
        ("ACT", &["act", "australian capital territory"]),
    ],
};

#[rustfmt::skip]
pub static EMPLOYMENT_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("employed", &["employed", "full-time", "full time", "fulltime", "part-time", "part time", "parttime", "casual"]),
        ("self_employed", &["self-employed", "self employed", "selfemployed"]),
        ("unemployed", &["unemployed", "not employed"]),
        ("retired", &["retired", "pension", "pensioner"]),
        ("student", &["student", "studying"]),
        ("homemaker", &["homemaker", "stay at home"]),
    ],
};

#[rustfmt::skip]
pub static EMPLOYMENT_TYPE_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("full_time", &["full time", "full-time", "fulltime", "permanent full time"]),
        ("part_time", &["part time", "part-time", "parttime", "permanent part time"]),
        ("casual", &["casual", "casual employment"]),
        ("contract", &["contract", "contractor", "fixed term", "temporary"]),
    ],
};

#[rustfmt::skip]
pub static SALUTATION_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("mr", &["mr", "mr.", "mister"]),
        ("mrs", &["mrs", "mrs."]),
        ("ms", &["ms", "ms."]),
        ("miss", &["miss"]),
        ("dr", &["dr", "dr.", "doctor"]),
    ],
};

#[rustfmt::skip]
pub static GENDER_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("male", &["male", "m"]),
        ("female", &["female", "f"]),
        ("other", &["other", "prefer not to say", "do not wish to disclose"]),
    ],
};

#[rustfmt::skip]
pub static MARITAL_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("single", &["single", "never married", "unmarried"]),
        ("married", &["married"]),
        ("de_facto", &["de facto", "defacto", "de-facto", "domestic partner", "partner"]),
        ("divorced", &["divorced"]),
        ("widowed", &["widowed", "widow", "widower"]),
        ("separated", &["separated"]),
    ],
};

#[rustfmt::skip]
pub static CITIZENSHIP_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("citizen", &["australian citizen", "citizen", "aus citizen"]),
        ("permanent_resident", &["permanent resident", "pr", "permanent visa"]),
        ("visa_holder", &["visa holder", "temporary resident", "temporary visa", "work visa", "student visa"]),
    ],
};

#[rustfmt::skip]
pub static RESIDENTIAL_ALIASES: AliasTable = AliasTable {
    entries: &[
        ("own", &["own", "owner", "own outright", "fully owned", "own home"]),
        ("mortgage", &["mortgage", "mortgaged", "paying off mortgage", "home loan"]),
        ("rent", &["rent", "renting", "tenant", "renter"]),
        ("board", &["board", "boarding", "boarder"]),
        ("parents", &["parents", "living with parents", "family home", "with family"]),
        ("other", &["other"]),
    ],
};

#[rustfmt::skip]
pub static COUNTRY_ALIASES: AliasTable = AliasTable {
    entries: &[("australia", &["australia", "aus"])],
};

/// Alias table used to resolve constrained choices for `field_key`.
pub fn alias_table_for(field_key: &str) -> Option<&'static AliasTable> {
    match field_key {
        "state" | "licenceState" => Some(&STATE_ALIASES),
        "employmentStatus" => Some(&EMPLOYMENT_ALIASES),
        "employmentType" => Some(&EMPLOYMENT_TYPE_ALIASES),
        "salutation" => Some(&SALUTATION_ALIASES),
        "gender" => Some(&GENDER_ALIASES),
        "maritalStatus" => Some(&MARITAL_ALIASES),
        "citizenship" => Some(&CITIZENSHIP_ALIASES),
        "residentialStatus" => Some(&RESIDENTIAL_ALIASES),
        "country" | "passportCountry" => Some(&COUNTRY_ALIASES),
        _ => None,
    }
}
