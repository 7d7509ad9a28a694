//! Key takeaways derived from an [`Estimate`].
//!
//! Each insight carries the number it talks about so writers can style it,
//! and renders its own sentence in the configured language.

use serde::Serialize;

use crate::core::{Estimate, PaybackPeriod, Roi};
use crate::formatting::{
    format_count, format_payback, format_roi, FormattingConfig, Language,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Revenue recovered over a year from captured messages
    YearlyRevenue { amount: f64 },
    /// Recurring yearly savings plus yearly revenue
    AnnualBenefit { amount: f64 },
    /// Annual benefit minus the setup fee
    FirstYearReturn { amount: f64 },
    /// Monthly net benefit (or cost when negative)
    MonthlyNet { amount: f64 },
    Payback { setup_fee: f64, period: PaybackPeriod },
    NotRecoverable,
    CapturedRevenue { amount: f64, customers: f64 },
    /// Saving (or extra cost when negative) against current staffing
    StaffSavings { amount: f64 },
    MonthlyRoi { roi: Roi },
    /// Yearly revenue alone against the first-year platform bill
    RevenueVsPlatformCost { amount: f64 },
}

impl Insight {
    pub fn tone(&self) -> Tone {
        match self {
            Insight::YearlyRevenue { .. } | Insight::CapturedRevenue { .. } => Tone::Positive,
            Insight::Payback { .. } => Tone::Positive,
            Insight::NotRecoverable => Tone::Negative,
            Insight::AnnualBenefit { amount }
            | Insight::FirstYearReturn { amount }
            | Insight::MonthlyNet { amount }
            | Insight::StaffSavings { amount }
            | Insight::RevenueVsPlatformCost { amount } => Tone::of(*amount),
            Insight::MonthlyRoi { roi } => match roi.percent() {
                Some(value) => Tone::of(value),
                None => Tone::Neutral,
            },
        }
    }

    pub fn message(&self, fmt: &FormattingConfig) -> String {
        let money = |value: f64| fmt.money(value);
        let es = fmt.language == Language::Es;

        match self {
            Insight::YearlyRevenue { amount } => {
                if es {
                    format!("Ingresos anuales adicionales potenciales: {}", money(*amount))
                } else {
                    format!("Potential additional yearly revenue: {}", money(*amount))
                }
            }
            Insight::AnnualBenefit { amount } => {
                if es {
                    format!("Beneficio anual potencial (continuo): {}", money(*amount))
                } else {
                    format!("Ongoing potential annual benefit: {}", money(*amount))
                }
            }
            Insight::FirstYearReturn { amount } => {
                if es {
                    format!("Retorno neto del primer año: {}", money(*amount))
                } else {
                    format!("First-year net return: {}", money(*amount))
                }
            }
            Insight::MonthlyNet { amount } => {
                let value = money(amount.abs());
                match (es, *amount >= 0.0) {
                    (false, true) => format!("Projected monthly net benefit of {} versus the status quo.", value),
                    (false, false) => format!("Projected monthly net cost of {} versus the status quo.", value),
                    (true, true) => format!("Beneficio neto mensual proyectado de {} vs. status quo.", value),
                    (true, false) => format!("Costo neto mensual proyectado de {} vs. status quo.", value),
                }
            }
            Insight::Payback { setup_fee, period } => {
                let when = format_payback(*period, fmt.language);
                if es {
                    format!(
                        "La inversión inicial de {} se recupera en {}.",
                        money(*setup_fee),
                        when
                    )
                } else {
                    format!(
                        "The initial setup investment of {} is recovered in {}.",
                        money(*setup_fee),
                        when
                    )
                }
            }
            Insight::NotRecoverable => {
                if es {
                    "Con los datos actuales no se proyecta recuperar la inversión inicial.".to_string()
                } else {
                    "With the current inputs the initial investment is not projected to be recovered."
                        .to_string()
                }
            }
            Insight::CapturedRevenue { amount, customers } => {
                let customers = format_count(*customers, 1);
                if es {
                    format!(
                        "Capturar mensajes perdidos podría generar {} al mes, recuperando unos {} clientes.",
                        money(*amount),
                        customers
                    )
                } else {
                    format!(
                        "Capturing missed messages could add {} per month, recovering about {} customers.",
                        money(*amount),
                        customers
                    )
                }
            }
            Insight::StaffSavings { amount } => {
                let value = money(amount.abs());
                match (es, *amount >= 0.0) {
                    (false, true) => format!("Against current staffing this is a monthly saving of {}.", value),
                    (false, false) => format!("Against current staffing this is an extra monthly cost of {}.", value),
                    (true, true) => format!("Frente al personal actual representa un ahorro mensual de {}.", value),
                    (true, false) => format!("Frente al personal actual representa un costo adicional mensual de {}.", value),
                }
            }
            Insight::MonthlyRoi { roi } => {
                if es {
                    format!("ROI mensual potencial de {}.", format_roi(*roi))
                } else {
                    format!("Potential monthly ROI of {}.", format_roi(*roi))
                }
            }
            Insight::RevenueVsPlatformCost { amount } => {
                let value = money(amount.abs());
                match (es, *amount >= 0.0) {
                    (false, true) => format!("Yearly added revenue alone beats the first-year platform cost by {} (staff savings excluded).", value),
                    (false, false) => format!("Yearly added revenue alone falls short of the first-year platform cost by {} (staff savings excluded).", value),
                    (true, true) => format!("Solo los ingresos adicionales anuales dan una ganancia neta de {} frente al costo del primer año (sin ahorros de personal).", value),
                    (true, false) => format!("Solo los ingresos adicionales anuales dan una pérdida neta de {} frente al costo del primer año (sin ahorros de personal).", value),
                }
            }
        }
    }
}

/// Insights that apply to `estimate`, in display order.
pub fn derive(estimate: &Estimate) -> Vec<Insight> {
    let mut insights = Vec::new();

    if estimate.yearly_potential_revenue > 0.0 {
        insights.push(Insight::YearlyRevenue {
            amount: estimate.yearly_potential_revenue,
        });
    }
    insights.push(Insight::AnnualBenefit {
        amount: estimate.yearly_net_benefit,
    });
    insights.push(Insight::FirstYearReturn {
        amount: estimate.first_year_net_return,
    });
    insights.push(Insight::MonthlyNet {
        amount: estimate.net_benefit,
    });

    if estimate.payback.is_recoverable() {
        insights.push(Insight::Payback {
            setup_fee: estimate.ai_setup_fee,
            period: estimate.payback,
        });
    } else if estimate.payback == PaybackPeriod::Never && estimate.net_benefit <= 0.0 {
        insights.push(Insight::NotRecoverable);
    }

    if estimate.potential_revenue > 0.0 {
        insights.push(Insight::CapturedRevenue {
            amount: estimate.potential_revenue,
            customers: estimate.converted_patients_lost,
        });
    }
    if estimate.cost_savings != 0.0 {
        insights.push(Insight::StaffSavings {
            amount: estimate.cost_savings,
        });
    }
    if matches!(estimate.roi, Roi::Percent(value) if value.is_finite() && value != 0.0) {
        insights.push(Insight::MonthlyRoi { roi: estimate.roi });
    }
    insights.push(Insight::RevenueVsPlatformCost {
        amount: estimate.first_year_revenue_vs_ai_cost,
    });

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Industry, Tier};
    use crate::core::{EstimateInputs, TierFees};
    use crate::estimator::compute;

    fn kinds(insights: &[Insight]) -> Vec<&'static str> {
        insights
            .iter()
            .map(|insight| match insight {
                Insight::YearlyRevenue { .. } => "yearly_revenue",
                Insight::AnnualBenefit { .. } => "annual_benefit",
                Insight::FirstYearReturn { .. } => "first_year_return",
                Insight::MonthlyNet { .. } => "monthly_net",
                Insight::Payback { .. } => "payback",
                Insight::NotRecoverable => "not_recoverable",
                Insight::CapturedRevenue { .. } => "captured_revenue",
                Insight::StaffSavings { .. } => "staff_savings",
                Insight::MonthlyRoi { .. } => "monthly_roi",
                Insight::RevenueVsPlatformCost { .. } => "revenue_vs_platform_cost",
            })
            .collect()
    }

    #[test]
    fn test_profitable_practice_gets_full_list() {
        let estimate = compute(&Industry::DentalClinic.preset().to_inputs(), &Tier::Professional.fees());
        let insights = derive(&estimate);

        assert_eq!(
            kinds(&insights),
            vec![
                "yearly_revenue",
                "annual_benefit",
                "first_year_return",
                "monthly_net",
                "payback",
                "captured_revenue",
                "staff_savings",
                "monthly_roi",
                "revenue_vs_platform_cost",
            ]
        );
    }

    #[test]
    fn test_no_revenue_means_not_recoverable() {
        let inputs = EstimateInputs {
            human_hours_per_week: 0.0,
            ..Default::default()
        };
        let estimate = compute(&inputs, &Tier::Basic.fees());
        let insights = derive(&estimate);

        assert_eq!(
            kinds(&insights),
            vec![
                "annual_benefit",
                "first_year_return",
                "monthly_net",
                "not_recoverable",
                "staff_savings",
                "monthly_roi",
                "revenue_vs_platform_cost",
            ]
        );
        assert!(insights.iter().all(|i| i.tone() == Tone::Negative));
    }

    #[test]
    fn test_immediate_payback_is_not_listed() {
        let estimate = compute(&Industry::Optometry.preset().to_inputs(), &TierFees::new(0.0, 0.0));
        let insights = derive(&estimate);
        let kinds = kinds(&insights);

        assert!(!kinds.contains(&"payback"));
        assert!(!kinds.contains(&"not_recoverable"));
        // Unbounded ROI is not a finite ratio
        assert!(!kinds.contains(&"monthly_roi"));
    }

    #[test]
    fn test_messages_follow_language() {
        let insight = Insight::MonthlyNet { amount: -1500.0 };
        let en = FormattingConfig::plain();
        let es = FormattingConfig::plain().with_language(Language::Es);

        assert_eq!(
            insight.message(&en),
            "Projected monthly net cost of $1,500.00 versus the status quo."
        );
        assert_eq!(
            insight.message(&es),
            "Costo neto mensual proyectado de $1,500.00 vs. status quo."
        );
    }

    #[test]
    fn test_payback_message_uses_duration_formatter() {
        let insight = Insight::Payback {
            setup_fee: 42_500.0,
            period: PaybackPeriod::Months(13.5),
        };
        assert_eq!(
            insight.message(&FormattingConfig::plain()),
            "The initial setup investment of $42,500.00 is recovered in 1 year 2 months."
        );
    }
}
