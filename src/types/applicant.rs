use serde::Serialize;
use std::fmt;

/// A closed set of labels an applicant attribute can take.
///
/// Every variant carries the label used by the source dataset
/// (`"Civil marriage"`, `"House / apartment"`) and a kebab-case slug.
/// Parsing accepts either spelled exactly; `"WORKING"` matches nothing.
pub trait Category: Copy + Sized + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn slug(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| raw == candidate.label() || raw == candidate.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyStatus {
    Married,
    CivilMarriage,
    Single,
    Widow,
    Separated,
}

impl Category for FamilyStatus {
    const FIELD: &'static str = "family_status";
    const ALL: &'static [Self] = &[
        Self::Married,
        Self::CivilMarriage,
        Self::Single,
        Self::Widow,
        Self::Separated,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Married => "Married",
            Self::CivilMarriage => "Civil marriage",
            Self::Single => "Single",
            Self::Widow => "Widow",
            Self::Separated => "Separated",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::CivilMarriage => "civil-marriage",
            Self::Single => "single",
            Self::Widow => "widow",
            Self::Separated => "separated",
        }
    }
}

impl FamilyStatus {
    /// Whether a partner counts towards the household.
    pub fn has_partner(self) -> bool {
        matches!(self, Self::Married | Self::CivilMarriage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeType {
    Working,
    CommercialAssociate,
    Pensioner,
    StateServant,
    Student,
}

impl Category for IncomeType {
    const FIELD: &'static str = "income_type";
    const ALL: &'static [Self] = &[
        Self::Working,
        Self::CommercialAssociate,
        Self::Pensioner,
        Self::StateServant,
        Self::Student,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::CommercialAssociate => "Commercial associate",
            Self::Pensioner => "Pensioner",
            Self::StateServant => "State servant",
            Self::Student => "Student",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::CommercialAssociate => "commercial-associate",
            Self::Pensioner => "pensioner",
            Self::StateServant => "state-servant",
            Self::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingType {
    HouseApartment,
    WithParents,
    MunicipalApartment,
    RentedApartment,
    OfficeApartment,
    CoOpApartment,
}

impl Category for HousingType {
    const FIELD: &'static str = "housing_type";
    const ALL: &'static [Self] = &[
        Self::HouseApartment,
        Self::WithParents,
        Self::MunicipalApartment,
        Self::RentedApartment,
        Self::OfficeApartment,
        Self::CoOpApartment,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::HouseApartment => "House / apartment",
            Self::WithParents => "With parents",
            Self::MunicipalApartment => "Municipal apartment",
            Self::RentedApartment => "Rented apartment",
            Self::OfficeApartment => "Office apartment",
            Self::CoOpApartment => "Co-op apartment",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::HouseApartment => "house-apartment",
            Self::WithParents => "with-parents",
            Self::MunicipalApartment => "municipal-apartment",
            Self::RentedApartment => "rented-apartment",
            Self::OfficeApartment => "office-apartment",
            Self::CoOpApartment => "co-op-apartment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationType {
    LowerSecondary,
    IncompleteHigher,
    SecondarySpecial,
    HigherEducation,
    AcademicDegree,
}

impl Category for EducationType {
    const FIELD: &'static str = "education_type";
    const ALL: &'static [Self] = &[
        Self::LowerSecondary,
        Self::IncompleteHigher,
        Self::SecondarySpecial,
        Self::HigherEducation,
        Self::AcademicDegree,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::LowerSecondary => "Lower secondary",
            Self::IncompleteHigher => "Incomplete higher",
            Self::SecondarySpecial => "Secondary / secondary special",
            Self::HigherEducation => "Higher education",
            Self::AcademicDegree => "Academic degree",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::LowerSecondary => "lower-secondary",
            Self::IncompleteHigher => "incomplete-higher",
            Self::SecondarySpecial => "secondary-special",
            Self::HigherEducation => "higher-education",
            Self::AcademicDegree => "academic-degree",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OccupationType {
    Laborers,
    CoreStaff,
    SalesStaff,
    Managers,
    Drivers,
    HighSkillTech,
    MedicineStaff,
    Accountants,
    LowSkillLaborers,
    ItStaff,
    SecurityStaff,
    RealtyAgents,
    CookingStaff,
    CleaningStaff,
    PrivateServiceStaff,
}

impl Category for OccupationType {
    const FIELD: &'static str = "occupation_type";
    const ALL: &'static [Self] = &[
        Self::Laborers,
        Self::CoreStaff,
        Self::SalesStaff,
        Self::Managers,
        Self::Drivers,
        Self::HighSkillTech,
        Self::MedicineStaff,
        Self::Accountants,
        Self::LowSkillLaborers,
        Self::ItStaff,
        Self::SecurityStaff,
        Self::RealtyAgents,
        Self::CookingStaff,
        Self::CleaningStaff,
        Self::PrivateServiceStaff,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Laborers => "Laborers",
            Self::CoreStaff => "Core staff",
            Self::SalesStaff => "Sales staff",
            Self::Managers => "Managers",
            Self::Drivers => "Drivers",
            Self::HighSkillTech => "High skill tech staff",
            Self::MedicineStaff => "Medicine staff",
            Self::Accountants => "Accountants",
            Self::LowSkillLaborers => "Low-skill Laborers",
            Self::ItStaff => "IT staff",
            Self::SecurityStaff => "Security staff",
            Self::RealtyAgents => "Realty agents",
            Self::CookingStaff => "Cooking staff",
            Self::CleaningStaff => "Cleaning staff",
            Self::PrivateServiceStaff => "Private service staff",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Laborers => "laborers",
            Self::CoreStaff => "core-staff",
            Self::SalesStaff => "sales-staff",
            Self::Managers => "managers",
            Self::Drivers => "drivers",
            Self::HighSkillTech => "high-skill-tech",
            Self::MedicineStaff => "medicine-staff",
            Self::Accountants => "accountants",
            Self::LowSkillLaborers => "low-skill-laborers",
            Self::ItStaff => "it-staff",
            Self::SecurityStaff => "security-staff",
            Self::RealtyAgents => "realty-agents",
            Self::CookingStaff => "cooking-staff",
            Self::CleaningStaff => "cleaning-staff",
            Self::PrivateServiceStaff => "private-service-staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    YoungAdults,
    Adult,
    MidAge,
    Senior,
}

impl Category for AgeGroup {
    const FIELD: &'static str = "age_group";
    const ALL: &'static [Self] = &[Self::YoungAdults, Self::Adult, Self::MidAge, Self::Senior];

    fn label(self) -> &'static str {
        match self {
            Self::YoungAdults => "young_adults",
            Self::Adult => "adult",
            Self::MidAge => "mid_age",
            Self::Senior => "senior",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::YoungAdults => "young-adults",
            Self::Adult => "adult",
            Self::MidAge => "mid-age",
            Self::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FamilySizeBin {
    Singleton,
    Small,
    Large,
}

impl FamilySizeBin {
    pub fn from_household_size(size: u32) -> Self {
        if size <= 1 {
            Self::Singleton
        } else if size <= 4 {
            Self::Small
        } else {
            Self::Large
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Singleton => "Singleton",
            Self::Small => "Small",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for FamilySizeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applicant as seen by the scoring engine.
///
/// Numeric fields are expected to be finite and non-negative; the input
/// boundary in [`crate::record`] enforces that. Categorical fields are
/// `None` when the value was omitted or not recognized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Applicant {
    pub annual_income: f64,
    pub years_employed: f64,
    pub child_count: u32,
    pub family_status: Option<FamilyStatus>,
    pub income_type: Option<IncomeType>,
    pub housing_type: Option<HousingType>,
    pub education_type: Option<EducationType>,
    pub occupation_type: Option<OccupationType>,
    pub age_group: Option<AgeGroup>,
}

impl Applicant {
    pub fn household_adults(&self) -> u32 {
        match self.family_status {
            Some(status) if status.has_partner() => 2,
            _ => 1,
        }
    }

    pub fn household_size(&self) -> u32 {
        self.household_adults().saturating_add(self.child_count)
    }

    pub fn family_size_bin(&self) -> FamilySizeBin {
        FamilySizeBin::from_household_size(self.household_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dataset_labels_and_slugs() {
        assert_eq!(
            FamilyStatus::parse("Civil marriage"),
            Some(FamilyStatus::CivilMarriage)
        );
        assert_eq!(
            FamilyStatus::parse("civil-marriage"),
            Some(FamilyStatus::CivilMarriage)
        );
        assert_eq!(
            HousingType::parse("House / apartment"),
            Some(HousingType::HouseApartment)
        );
        assert_eq!(
            EducationType::parse("Secondary / secondary special"),
            Some(EducationType::SecondarySpecial)
        );
        assert_eq!(AgeGroup::parse("young_adults"), Some(AgeGroup::YoungAdults));
        assert_eq!(AgeGroup::parse("mid-age"), Some(AgeGroup::MidAge));
        assert_eq!(
            OccupationType::parse("Low-skill Laborers"),
            Some(OccupationType::LowSkillLaborers)
        );
        assert_eq!(OccupationType::parse("IT staff"), Some(OccupationType::ItStaff));
    }

    #[test]
    fn parse_is_case_and_spacing_sensitive() {
        assert_eq!(IncomeType::parse("WORKING"), None);
        assert_eq!(IncomeType::parse("state servant"), None);
        assert_eq!(OccupationType::parse(" IT staff "), None);
        assert_eq!(AgeGroup::parse("young adults"), None);
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(IncomeType::parse("Astronaut"), None);
        assert_eq!(IncomeType::parse(""), None);
        assert_eq!(FamilyStatus::parse("Single / not married"), None);
    }

    #[test]
    fn every_variant_round_trips_through_its_label() {
        for status in FamilyStatus::ALL {
            assert_eq!(FamilyStatus::parse(status.label()), Some(*status));
        }
        for occupation in OccupationType::ALL {
            assert_eq!(OccupationType::parse(occupation.slug()), Some(*occupation));
        }
        assert_eq!(OccupationType::ALL.len(), 15);
    }

    #[test]
    fn household_counts_partner_only_when_married_or_civil() {
        let mut applicant = Applicant {
            child_count: 2,
            family_status: Some(FamilyStatus::Married),
            ..Applicant::default()
        };
        assert_eq!(applicant.household_adults(), 2);
        assert_eq!(applicant.household_size(), 4);

        applicant.family_status = Some(FamilyStatus::Widow);
        assert_eq!(applicant.household_size(), 3);

        applicant.family_status = None;
        assert_eq!(applicant.household_adults(), 1);
    }

    #[test]
    fn family_size_bin_thresholds() {
        assert_eq!(FamilySizeBin::from_household_size(0), FamilySizeBin::Singleton);
        assert_eq!(FamilySizeBin::from_household_size(1), FamilySizeBin::Singleton);
        assert_eq!(FamilySizeBin::from_household_size(2), FamilySizeBin::Small);
        assert_eq!(FamilySizeBin::from_household_size(4), FamilySizeBin::Small);
        assert_eq!(FamilySizeBin::from_household_size(5), FamilySizeBin::Large);
    }
}
