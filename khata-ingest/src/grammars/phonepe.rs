//! PhonePe statement grammar.
//!
//! Line-oriented state machine keyed on the compound transaction-start
//! pattern: month-name date, a "Received from"/"Paid to" description, an
//! explicit CREDIT/DEBIT marker, and a following numeral. Once a transaction
//! is open, subsequent lines are scanned for the time + transaction ID, the
//! UTR number, and the closing "Credited to"/"Paid by" confirmation that
//! finalizes it. A trailing open transaction is flushed at end of input.
//!
//! If the state machine yields nothing, a looser document-wide pattern runs
//! as a fallback.

use anyhow::Result;
use khata_core::RawType;
use regex::Regex;
use tracing::debug;

use super::Grammar;
use crate::types::{Provider, RawCandidate};

pub struct PhonePeGrammar;

const MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

impl Grammar for PhonePeGrammar {
    fn provider(&self) -> Provider {
        Provider::PhonePe
    }

    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>> {
        let start_re = Regex::new(&format!(
            r"(?i)((?:{MONTHS})\s+\d{{2}},\s+\d{{4}})\s+((?:Received from|Paid to).*?)\s+(CREDIT|DEBIT)\s+.*?(\d+(?:,\d+)*(?:\.\d+)?)"
        ))?;
        let time_txn_re =
            Regex::new(r"(?i)(\d{1,2}:\d{2}\s*(?:am|pm))\s+Transaction\s+ID\s+(\w+)")?;
        let utr_re = Regex::new(r"UTR\s+No\.\s+(\d+)")?;
        let confirm_re = Regex::new(r"(Credited to|Paid by)\s+(\w+)")?;

        let mut out = Vec::new();
        let mut current: Option<RawCandidate> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(caps) = start_re.captures(line) {
                // A new start line closes whatever was still open.
                if let Some(open) = current.take() {
                    out.push(open);
                }

                let Ok(magnitude) = caps[4].replace(',', "").parse::<f64>() else {
                    continue;
                };
                let (amount, raw_type) = if caps[3].eq_ignore_ascii_case("DEBIT") {
                    (-magnitude, RawType::Debit)
                } else {
                    (magnitude, RawType::Credit)
                };

                current = Some(RawCandidate {
                    raw_type: Some(raw_type),
                    ..RawCandidate::new(caps[1].to_string(), amount, caps[2].trim())
                });
                continue;
            }

            let Some(open) = current.as_mut() else {
                continue;
            };
            if let Some(caps) = time_txn_re.captures(line) {
                open.time = Some(caps[1].to_string());
                continue;
            }
            if utr_re.is_match(line) {
                continue;
            }
            if confirm_re.is_match(line) {
                // Confirmation line finalizes the open transaction.
                if let Some(done) = current.take() {
                    out.push(done);
                }
            }
        }
        if let Some(open) = current {
            out.push(open);
        }

        if out.is_empty() {
            debug!("state machine found nothing, trying loose fallback pattern");
            out = self.extract_loose(text)?;
        }
        Ok(out)
    }
}

impl PhonePeGrammar {
    /// Document-wide fallback for statements the state machine cannot read.
    fn extract_loose(&self, text: &str) -> Result<Vec<RawCandidate>> {
        let loose_re = Regex::new(&format!(
            r"(?si)((?:{MONTHS})\s+\d{{2}},\s+\d{{4}}).*?(CREDIT|DEBIT).*?(\d+(?:,\d+)*(?:\.\d+)?)"
        ))?;

        let mut out = Vec::new();
        for caps in loose_re.captures_iter(text) {
            let Ok(magnitude) = caps[3].replace(',', "").parse::<f64>() else {
                continue;
            };
            let (amount, raw_type) = if caps[2].eq_ignore_ascii_case("DEBIT") {
                (-magnitude, RawType::Debit)
            } else {
                (magnitude, RawType::Credit)
            };
            out.push(RawCandidate {
                raw_type: Some(raw_type),
                ..RawCandidate::new(caps[1].to_string(), amount, "PhonePe transaction")
            });
        }
        Ok(out)
    }
}
