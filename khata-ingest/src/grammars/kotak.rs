//! Kotak tabular bank ledger grammar.
//!
//! Kotak rows wrap: narration text continues on lines that do not start with
//! a DD-MM-YYYY date. Continuation lines are first joined back onto the
//! preceding row, then each joined row is matched against the fixed
//! five-field pattern: date, narration/cheque-ref, amount with a trailing
//! `(Cr)`/`(Dr)`, and running balance with a trailing `(Cr)`/`(Dr)`. The
//! amount's suffix decides the sign.

use anyhow::Result;
use khata_core::RawType;
use regex::Regex;

use super::Grammar;
use crate::types::{Provider, RawCandidate};

pub struct KotakGrammar;

impl Grammar for KotakGrammar {
    fn provider(&self) -> Provider {
        Provider::Kotak
    }

    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>> {
        let row_start_re = Regex::new(r"^\d{2}-\d{2}-\d{4}")?;
        let row_re = Regex::new(
            r"^(\d{2}-\d{2}-\d{4})\s+(.+?)\s+([\d,]+\.\d{2})\((Cr|Dr)\)\s+([\d,]+\.\d{2})\((Cr|Dr)\)$",
        )?;

        // Re-join wrapped narration lines onto their row.
        let mut joined: Vec<String> = Vec::new();
        let mut buffer = String::new();
        for line in text.lines() {
            if row_start_re.is_match(line) {
                if !buffer.trim().is_empty() {
                    joined.push(buffer.trim().to_string());
                }
                buffer = line.to_string();
            } else {
                buffer.push(' ');
                buffer.push_str(line);
            }
        }
        if !buffer.trim().is_empty() {
            joined.push(buffer.trim().to_string());
        }

        let mut out = Vec::new();
        for row in &joined {
            let Some(caps) = row_re.captures(row) else {
                continue;
            };
            let Ok(magnitude) = caps[3].replace(',', "").parse::<f64>() else {
                continue;
            };
            let (amount, raw_type) = if &caps[4] == "Dr" {
                (-magnitude, RawType::Debit)
            } else {
                (magnitude, RawType::Credit)
            };
            let balance = caps[5].replace(',', "").parse::<f64>().ok();

            out.push(RawCandidate {
                raw_type: Some(raw_type),
                balance,
                ..RawCandidate::new(caps[1].to_string(), amount, caps[2].trim())
            });
        }
        Ok(out)
    }
}
