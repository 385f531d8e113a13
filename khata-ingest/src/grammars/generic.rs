//! Generic statement grammar.
//!
//! For statements no other grammar claims. Two alternative patterns run over
//! the whole text and every match from both is accepted:
//!   1. month-name date, description, optional explicit DEBIT/CREDIT/Dr/Cr
//!      marker, currency-prefixed amount
//!   2. relaxed day-first date with a bare amount and no marker
//!
//! Sign precedence: a marker captured next to the amount wins; otherwise
//! directional keywords anywhere in the match imply a debit; otherwise the
//! amount's own sign stands.

use anyhow::Result;
use khata_core::RawType;
use regex::Regex;

use super::Grammar;
use crate::types::{Provider, RawCandidate, clean_amount, implies_debit};

pub struct GenericGrammar;

impl Grammar for GenericGrammar {
    fn provider(&self) -> Provider {
        Provider::Generic
    }

    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>> {
        // Comprehensive: explicit marker allowed between description and amount.
        let comprehensive = Regex::new(concat!(
            r"(?si)(?P<date>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s*\d{1,2},\s*\d{4})\s*",
            r"(?P<desc>.*?)",
            r"(?P<type>DEBIT|CREDIT|Dr|Cr)?\s*",
            r"(?:₹|Rs\.?)\s*(?P<amount>[\d,]+\.?\d*)"
        ))?;

        // Relaxed: day-first date, no marker, optional bare sign.
        let relaxed = Regex::new(concat!(
            r"(?si)(?P<date>\d{1,2}\s*(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s*\d{4})\s*",
            r"(?P<desc>.*?)",
            r"(?P<amount>[-+]?₹?\s*[\d,]+\.?\d*)"
        ))?;

        let mut out = Vec::new();
        for pattern in [&comprehensive, &relaxed] {
            for caps in pattern.captures_iter(text) {
                let Some(mut amount) = clean_amount(&caps["amount"]) else {
                    continue;
                };

                let raw_type = caps.name("type").map(|m| match m.as_str().to_lowercase().as_str() {
                    "debit" | "dr" => RawType::Debit,
                    _ => RawType::Credit,
                });

                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or("");
                match raw_type {
                    Some(RawType::Debit) => amount = -amount.abs(),
                    Some(RawType::Credit) => amount = amount.abs(),
                    None if implies_debit(matched) => amount = -amount.abs(),
                    None => {}
                }

                let description = caps["desc"].split_whitespace().collect::<Vec<_>>().join(" ");
                out.push(RawCandidate {
                    raw_type,
                    ..RawCandidate::new(caps["date"].trim(), amount, description)
                });
            }
        }
        Ok(out)
    }
}
