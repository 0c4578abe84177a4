//! Text shown on the dashboard for a subscription

use cachorro_core::{Subscription, SubscriptionStatus};
use std::fmt;

/// Shown when the backend reports `status: "none"`
pub const NO_SUBSCRIPTION_MESSAGE: &str = "Você ainda não possui assinatura ativa.";

pub const STATUS_ACTIVE: &str = "✅ Em dia";
pub const STATUS_LAPSED: &str = "❌ Vencida";

/// Replaces a negative day count
pub const OVERDUE_LABEL: &str = "Vencido";

/// Placeholder for fields the backend left out
pub const MISSING_VALUE: &str = "-";

/// Dashboard rows for a subscription, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionView {
    pub status: &'static str,
    pub due_date: String,
    pub days_remaining: String,
    pub monthly_amount: String,
}

impl SubscriptionView {
    pub fn new(subscription: &Subscription) -> Self {
        Self {
            status: status_label(&subscription.status),
            due_date: subscription
                .next_due_date
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            days_remaining: subscription
                .days_remaining
                .map_or_else(|| MISSING_VALUE.to_string(), days_label),
            monthly_amount: subscription
                .amount_cents
                .map_or_else(|| format!("R$ {MISSING_VALUE}"), format_brl),
        }
    }

    /// `(label, value)` pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Status:", self.status),
            ("Vencimento:", &self.due_date),
            ("Dias restantes:", &self.days_remaining),
            ("Valor mensal:", &self.monthly_amount),
        ]
    }
}

impl fmt::Display for SubscriptionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{label} {value}")?;
        }
        Ok(())
    }
}

fn status_label(status: &SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => STATUS_ACTIVE,
        _ => STATUS_LAPSED,
    }
}

fn days_label(days: i64) -> String {
    if days >= 0 {
        days.to_string()
    } else {
        OVERDUE_LABEL.to_string()
    }
}

/// `4990` -> `R$ 49.90`
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("R$ {sign}{}.{:02}", cents / 100, cents % 100)
}
