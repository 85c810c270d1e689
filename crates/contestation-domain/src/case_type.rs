//! Case type module - the closed set of petition categories

use std::fmt;

/// Category of a petition
///
/// Every record carries exactly one case type. Classification picks the first
/// matching category in declaration order, with `Other` as the catch-all:
/// - BaggageLoss: lost or mishandled baggage
/// - FlightDelay: compensation for a delayed flight
/// - MoralDamages: non-material damages
/// - Other: anything else
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseType {
    /// "Extravio de Bagagens"
    BaggageLoss,

    /// "Indenização por atraso de voo"
    FlightDelay,

    /// "Indenização por Danos Morais"
    MoralDamages,

    /// "Outros" (fallback)
    #[default]
    Other,
}

impl CaseType {
    /// All case types, in classification priority order
    pub const ALL: [CaseType; 4] = [
        CaseType::BaggageLoss,
        CaseType::FlightDelay,
        CaseType::MoralDamages,
        CaseType::Other,
    ];

    /// Label used for display, storage and template lookup
    pub fn label(&self) -> &'static str {
        match self {
            CaseType::BaggageLoss => "Extravio de Bagagens",
            CaseType::FlightDelay => "Indenização por atraso de voo",
            CaseType::MoralDamages => "Indenização por Danos Morais",
            CaseType::Other => "Outros",
        }
    }

    /// Short ASCII identifier, used for CLI arguments and template file names
    pub fn slug(&self) -> &'static str {
        match self {
            CaseType::BaggageLoss => "baggage-loss",
            CaseType::FlightDelay => "flight-delay",
            CaseType::MoralDamages => "moral-damages",
            CaseType::Other => "other",
        }
    }

    /// Map a stored label back to a case type
    ///
    /// The mapping is total: unrecognized labels fall back to `Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contestation_domain::CaseType;
    ///
    /// assert_eq!(CaseType::from_label("Extravio de Bagagens"), CaseType::BaggageLoss);
    /// assert_eq!(CaseType::from_label("Trabalhista"), CaseType::Other);
    /// ```
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|case_type| case_type.label() == label)
            .unwrap_or(CaseType::Other)
    }

    /// Parse a case type from a slug or a label (strict)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|case_type| {
            case_type.slug() == needle || case_type.label().to_lowercase() == needle
        })
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid case type: {}", s))
    }
}
