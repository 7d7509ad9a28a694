use serde::{Deserialize, Serialize};

use crate::core::TierFees;

/// Pricing plans of the messaging platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Essential functionality
    Basic,
    /// Advanced features and support
    Professional,
    /// Custom solutions, starting price
    Enterprise,
}

/// Display metadata and fees of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingTier {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub setup_fee: f64,
    pub monthly_fee: f64,
}

impl PricingTier {
    pub fn fees(&self) -> TierFees {
        TierFees::new(self.setup_fee, self.monthly_fee)
    }
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Professional, Tier::Enterprise];

    pub const DEFAULT: Tier = Tier::Professional;

    /// Resolve a catalog key, falling back to [`Tier::DEFAULT`].
    pub fn lookup(key: &str) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            log::warn!("Unknown tier '{}', using '{}'", key, Self::DEFAULT.key());
            Self::DEFAULT
        })
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "basico" | "básico" => Some(Tier::Basic),
            "professional" | "profesional" => Some(Tier::Professional),
            "enterprise" | "empresarial" => Some(Tier::Enterprise),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        self.pricing().key
    }

    pub fn pricing(self) -> PricingTier {
        match self {
            Tier::Basic => PricingTier {
                key: "basic",
                name: "Básico",
                description: "Funcionalidad esencial",
                setup_fee: 15_000.0,
                monthly_fee: 8_000.0,
            },
            Tier::Professional => PricingTier {
                key: "professional",
                name: "Profesional",
                description: "Funciones avanzadas y soporte",
                setup_fee: 42_500.0,
                monthly_fee: 21_500.0,
            },
            Tier::Enterprise => PricingTier {
                key: "enterprise",
                name: "Empresarial",
                description: "Soluciones personalizadas (A partir de)",
                setup_fee: 120_000.0,
                monthly_fee: 42_500.0,
            },
        }
    }

    pub fn fees(self) -> TierFees {
        self.pricing().fees()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::parse(s).ok_or_else(|| {
            format!(
                "Invalid tier: '{}'. Valid options: basic, professional, enterprise",
                s
            )
        })
    }
}
