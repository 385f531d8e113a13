//! SuperMoney statement grammar.
//!
//! Line-oriented: a line carrying both a DD/MM/YYYY date and a currency-
//! prefixed amount (`INR`, `Rs.` or `₹`) is a transaction. An explicit sign
//! before the currency prefix wins; otherwise directional keywords in the
//! line imply a debit; otherwise the amount is an inflow.

use anyhow::Result;
use regex::Regex;

use super::Grammar;
use crate::types::{Provider, RawCandidate, implies_debit};

pub struct SuperMoneyGrammar;

impl Grammar for SuperMoneyGrammar {
    fn provider(&self) -> Provider {
        Provider::SuperMoney
    }

    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>> {
        let date_re = Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b")?;
        let amount_re = Regex::new(r"([+-])?\s*(?:INR|Rs\.?|₹)\s*([\d,]+\.?\d*)")?;

        let mut out = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Some(date) = date_re.captures(line) else {
                continue;
            };
            let Some(amount_caps) = amount_re.captures(line) else {
                continue;
            };
            let Ok(magnitude) = amount_caps[2].replace(',', "").parse::<f64>() else {
                continue;
            };

            let amount = match amount_caps.get(1).map(|m| m.as_str()) {
                Some("-") => -magnitude,
                Some(_) => magnitude,
                None if implies_debit(line) => -magnitude,
                None => magnitude,
            };

            let description = line.split_whitespace().collect::<Vec<_>>().join(" ");
            out.push(RawCandidate::new(date[1].to_string(), amount, description));
        }
        Ok(out)
    }
}
