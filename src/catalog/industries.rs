//! Industry profiles with benchmark defaults for the estimator inputs.

use serde::{Deserialize, Serialize};

use crate::core::EstimateInputs;

/// Industry profiles shipped with chatroi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    FamilyMedicine,
    DentalClinic,
    Chiropractic,
    PhysicalTherapy,
    Optometry,
    UrgentCare,
    MentalHealth,
    Dermatology,
    MedicalSpa,
    Podiatry,
    OtherHealth,
}

/// Benchmark defaults for one industry.
///
/// `base_conversion_rate` and `conversion_rate_lift` are only used when the
/// preset is selected, to seed the editable conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndustryPreset {
    pub business_hour_messages: f64,
    pub after_hour_messages: f64,
    pub missed_message_rate: f64,
    pub avg_lead_value: f64,
    pub conversion_rate_lift: f64,
    pub sales_message_percentage: f64,
    pub base_conversion_rate: f64,
    pub human_hourly_wage: f64,
    pub human_overhead_percentage: f64,
    pub automation_coverage: f64,
}

impl Industry {
    /// Selector order.
    pub const ALL: [Industry; 11] = [
        Industry::FamilyMedicine,
        Industry::DentalClinic,
        Industry::Chiropractic,
        Industry::PhysicalTherapy,
        Industry::Optometry,
        Industry::UrgentCare,
        Industry::MentalHealth,
        Industry::Dermatology,
        Industry::MedicalSpa,
        Industry::Podiatry,
        Industry::OtherHealth,
    ];

    pub const DEFAULT: Industry = Industry::FamilyMedicine;

    /// Resolve a catalog key, falling back to [`Industry::DEFAULT`].
    pub fn lookup(key: &str) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            log::warn!(
                "Unknown industry '{}', using '{}'",
                key,
                Self::DEFAULT.key()
            );
            Self::DEFAULT
        })
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "medicina_familiar" => Some(Industry::FamilyMedicine),
            "clinica_dental" => Some(Industry::DentalClinic),
            "quiropractico" | "quiropráctico" => Some(Industry::Chiropractic),
            "terapia_fisica" => Some(Industry::PhysicalTherapy),
            "optometrista" => Some(Industry::Optometry),
            "urgencias" => Some(Industry::UrgentCare),
            "salud_mental" => Some(Industry::MentalHealth),
            "dermatologia" => Some(Industry::Dermatology),
            "spa_medico" => Some(Industry::MedicalSpa),
            "podologia" => Some(Industry::Podiatry),
            "otro_salud" => Some(Industry::OtherHealth),
            _ => None,
        }
    }

    /// Catalog key.
    pub fn key(self) -> &'static str {
        match self {
            Industry::FamilyMedicine => "medicina_familiar",
            Industry::DentalClinic => "clinica_dental",
            Industry::Chiropractic => "quiropractico",
            Industry::PhysicalTherapy => "terapia_fisica",
            Industry::Optometry => "optometrista",
            Industry::UrgentCare => "urgencias",
            Industry::MentalHealth => "salud_mental",
            Industry::Dermatology => "dermatologia",
            Industry::MedicalSpa => "spa_medico",
            Industry::Podiatry => "podologia",
            Industry::OtherHealth => "otro_salud",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Industry::FamilyMedicine => "Medicina Familiar",
            Industry::DentalClinic => "Clínica Dental",
            Industry::Chiropractic => "Quiropráctico",
            Industry::PhysicalTherapy => "Terapia Física",
            Industry::Optometry => "Optometrista",
            Industry::UrgentCare => "Urgencias",
            Industry::MentalHealth => "Salud Mental",
            Industry::Dermatology => "Dermatología",
            Industry::MedicalSpa => "Spa Médico",
            Industry::Podiatry => "Podología",
            Industry::OtherHealth => "Otro Sector Salud",
        }
    }

    pub fn preset(self) -> IndustryPreset {
        match self {
            Industry::FamilyMedicine => preset(37.0, 10.0, 10.0, 650.0, 40.0, 25.0, 70.0, 80.0, 20.0),
            Industry::DentalClinic => preset(40.0, 15.0, 10.0, 2500.0, 42.0, 65.0, 22.0, 97.0, 30.0),
            Industry::Chiropractic => preset(30.0, 10.0, 6.0, 1850.0, 52.0, 45.0, 37.0, 102.0, 27.0),
            Industry::PhysicalTherapy => preset(57.0, 17.0, 12.0, 1350.0, 37.0, 55.0, 47.0, 90.0, 24.0),
            Industry::Optometry => preset(17.0, 4.0, 10.0, 2250.0, 40.0, 35.0, 27.0, 85.0, 22.0),
            Industry::UrgentCare => preset(100.0, 37.0, 4.0, 4750.0, 62.0, 85.0, 75.0, 115.0, 32.0),
            Industry::MentalHealth => preset(47.0, 30.0, 15.0, 2250.0, 32.0, 40.0, 30.0, 107.0, 27.0),
            Industry::Dermatology => preset(25.0, 5.0, 10.0, 2500.0, 40.0, 55.0, 35.0, 125.0, 30.0),
            Industry::MedicalSpa => preset(15.0, 6.0, 10.0, 4500.0, 40.0, 45.0, 17.0, 140.0, 32.0),
            Industry::Podiatry => preset(12.0, 3.0, 10.0, 1175.0, 40.0, 40.0, 35.0, 97.0, 24.0),
            Industry::OtherHealth => preset(20.0, 5.0, 10.0, 1000.0, 0.0, 40.0, 25.0, 97.0, 30.0),
        }
    }
}

/// Every shipped profile starts with 70% automation coverage.
const DEFAULT_AUTOMATION_COVERAGE: f64 = 70.0;

#[allow(clippy::too_many_arguments)]
const fn preset(
    business_hour_messages: f64,
    after_hour_messages: f64,
    missed_message_rate: f64,
    avg_lead_value: f64,
    conversion_rate_lift: f64,
    sales_message_percentage: f64,
    base_conversion_rate: f64,
    human_hourly_wage: f64,
    human_overhead_percentage: f64,
) -> IndustryPreset {
    IndustryPreset {
        business_hour_messages,
        after_hour_messages,
        missed_message_rate,
        avg_lead_value,
        conversion_rate_lift,
        sales_message_percentage,
        base_conversion_rate,
        human_hourly_wage,
        human_overhead_percentage,
        automation_coverage: DEFAULT_AUTOMATION_COVERAGE,
    }
}

impl IndustryPreset {
    /// Conversion rate seeded at selection time: the base rate lifted by
    /// `conversion_rate_lift` percent, capped at 100 and rounded.
    pub fn initial_conversion_rate(&self) -> f64 {
        let lifted = self.base_conversion_rate * (1.0 + self.conversion_rate_lift / 100.0);
        lifted.min(100.0).round()
    }

    /// Overwrite every preset-backed field of `inputs`.
    ///
    /// The schedule and staffed hours are not part of a preset and are left
    /// untouched.
    pub fn apply_to(&self, inputs: &mut EstimateInputs) {
        inputs.business_hour_messages = self.business_hour_messages;
        inputs.after_hour_messages = self.after_hour_messages;
        inputs.missed_message_rate = self.missed_message_rate;
        inputs.automation_percentage = self.automation_coverage;
        inputs.sales_message_percentage = self.sales_message_percentage;
        inputs.avg_lead_value = self.avg_lead_value;
        inputs.conversion_rate = self.initial_conversion_rate();
        inputs.human_hourly_wage = self.human_hourly_wage;
        inputs.human_overhead_percentage = self.human_overhead_percentage;
    }

    /// Full input record built from this preset on top of the defaults.
    pub fn to_inputs(&self) -> EstimateInputs {
        let mut inputs = EstimateInputs::default();
        self.apply_to(&mut inputs);
        inputs
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::parse(s).ok_or_else(|| {
            let keys: Vec<&str> = Industry::ALL.iter().map(|i| i.key()).collect();
            format!(
                "Invalid industry: '{}'. Valid options: {}",
                s,
                keys.join(", ")
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DaysOpen;

    #[test]
    fn test_keys_round_trip() {
        for industry in Industry::ALL {
            assert_eq!(Industry::parse(industry.key()), Some(industry));
        }
    }

    #[test]
    fn test_accented_key_is_accepted() {
        assert_eq!(Industry::parse("quiropráctico"), Some(Industry::Chiropractic));
        assert_eq!(Industry::parse("Clinica_Dental"), Some(Industry::DentalClinic));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(Industry::lookup("veterinaria"), Industry::FamilyMedicine);
        assert_eq!(Industry::lookup(""), Industry::DEFAULT);
    }

    #[test]
    fn test_initial_conversion_rate_applies_lift() {
        // 70 * 1.40 = 98
        assert_eq!(Industry::FamilyMedicine.preset().initial_conversion_rate(), 98.0);
        // 22 * 1.42 = 31.24 -> 31
        assert_eq!(Industry::DentalClinic.preset().initial_conversion_rate(), 31.0);
        // 25 with no lift
        assert_eq!(Industry::OtherHealth.preset().initial_conversion_rate(), 25.0);
    }

    #[test]
    fn test_initial_conversion_rate_is_capped() {
        // 75 * 1.62 = 121.5, capped at 100
        assert_eq!(Industry::UrgentCare.preset().initial_conversion_rate(), 100.0);
    }

    #[test]
    fn test_apply_keeps_schedule_and_hours() {
        let mut inputs = EstimateInputs {
            days_open: DaysOpen::AllDays,
            human_hours_per_week: 25.0,
            ..Default::default()
        };
        Industry::Dermatology.preset().apply_to(&mut inputs);

        assert_eq!(inputs.days_open, DaysOpen::AllDays);
        assert_eq!(inputs.human_hours_per_week, 25.0);
        assert_eq!(inputs.business_hour_messages, 25.0);
        assert_eq!(inputs.avg_lead_value, 2500.0);
        assert_eq!(inputs.automation_percentage, 70.0);
        // 35 * 1.40 = 49
        assert_eq!(inputs.conversion_rate, 49.0);
    }
}
