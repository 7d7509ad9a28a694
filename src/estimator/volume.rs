//! Monthly message volume and the missed-opportunity estimate.
//!
//! The two missed-rate bases differ on purpose: the handled volume applies
//! the missed rate to everything received, while the opportunity estimate
//! applies it to business-hour traffic only and then counts every
//! after-hours message as missed. Keep them separate.

use crate::core::EstimateInputs;

/// After-hours traffic is counted every day of the month, whatever the
/// business schedule.
pub const AFTER_HOURS_DAYS_PER_MONTH: f64 = 30.0;

/// Multiplier for the back-and-forth of a conversation.
pub const CONVERSATION_OVERHEAD: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageVolume {
    pub days_per_month: f64,
    pub monthly_business_messages: f64,
    pub monthly_after_hour_messages: f64,
    pub total_received: f64,
    pub missed_component: f64,
    pub total_messages_handled: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissedOpportunity {
    pub missed_business_hour_messages: f64,
    pub total_missed_messages: f64,
    pub sales_missed_messages: f64,
    pub potential_revenue: f64,
    pub converted_patients_lost: f64,
}

pub fn message_volume(inputs: &EstimateInputs) -> MessageVolume {
    let days_per_month = inputs.days_open.days_per_month();
    let monthly_business_messages = inputs.business_hour_messages * days_per_month;
    let monthly_after_hour_messages = inputs.after_hour_messages * AFTER_HOURS_DAYS_PER_MONTH;
    let total_received = monthly_business_messages + monthly_after_hour_messages;
    let missed_component = total_received * (inputs.missed_message_rate / 100.0);
    let total_messages_handled = (total_received + missed_component) * CONVERSATION_OVERHEAD;

    MessageVolume {
        days_per_month,
        monthly_business_messages,
        monthly_after_hour_messages,
        total_received,
        missed_component,
        total_messages_handled,
    }
}

pub fn missed_opportunity(inputs: &EstimateInputs, volume: &MessageVolume) -> MissedOpportunity {
    let missed_business_hour_messages =
        volume.monthly_business_messages * (inputs.missed_message_rate / 100.0);
    let total_missed_messages = missed_business_hour_messages + volume.monthly_after_hour_messages;
    let sales_missed_messages = total_missed_messages * (inputs.sales_message_percentage / 100.0);
    let potential_revenue = sales_missed_messages * inputs.avg_lead_value;
    let converted_patients_lost = sales_missed_messages * (inputs.conversion_rate / 100.0);

    MissedOpportunity {
        missed_business_hour_messages,
        total_missed_messages,
        sales_missed_messages,
        potential_revenue,
        converted_patients_lost,
    }
}
