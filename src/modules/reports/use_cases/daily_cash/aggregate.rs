// Daily cash summary: money collected per payment type on one day.
//
// Purpose
// - Sum live, paid appointments per payment-type label.
//
// Responsibilities
// - Group labels in order of first appearance.
// - Put the house payment methods first, in their fixed order, and everything else after.

use crate::modules::reports::core::appointment::AppointmentRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Labels listed before all others, in this order.
pub const PAYMENT_TYPE_PRIORITY: [&str; 3] = ["Cupón", "EFECTIVO", "Yape"];

pub fn payment_type_rank(label: &str) -> Option<usize> {
    PAYMENT_TYPE_PRIORITY.iter().position(|known| *known == label)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashTotal {
    pub payment_type: String,
    pub total_payment: f64,
}

pub fn daily_cash(date: NaiveDate, records: &[AppointmentRecord]) -> Vec<CashTotal> {
    let mut grouped: Vec<(&str, Decimal)> = Vec::new();
    for (label, amount) in records
        .iter()
        .filter(|r| r.is_active_on(date))
        .filter_map(AppointmentRecord::labelled_payment)
    {
        match grouped.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, total)) => *total += amount,
            None => grouped.push((label, amount)),
        }
    }

    let (mut ranked, others): (Vec<_>, Vec<_>) = grouped
        .into_iter()
        .partition(|(label, _)| payment_type_rank(label).is_some());
    ranked.sort_by_key(|(label, _)| payment_type_rank(label));

    ranked
        .into_iter()
        .chain(others)
        .map(|(label, total)| CashTotal {
            payment_type: label.to_string(),
            total_payment: total.to_f64().unwrap_or_default(),
        })
        .collect()
}
