//! Paytm UPI statement grammar.
//!
//! Line-oriented state machine. The header is skipped until the literal
//! "Date & Time Transaction Details" section marker; after that, a line
//! matching a day + month-name date opens a new transaction buffer, and
//! every following line accumulates into that buffer until the next date
//! line. The signed amount (`+`/`-` then `Rs.<amount>`) is pulled from the
//! buffered text when a transaction closes. The final buffer is flushed
//! explicitly at end of input.
//!
//! Paytm date lines carry no year. The statement year is sniffed from the
//! header (first 20xx run before the marker), falling back to 2024.

use anyhow::Result;
use chrono::NaiveDate;
use khata_core::RawType;
use regex::Regex;

use super::Grammar;
use crate::types::{Provider, RawCandidate};

const SECTION_MARKER: &str = "Date & Time Transaction Details";
const FALLBACK_YEAR: i32 = 2024;

pub struct PaytmGrammar;

impl Grammar for PaytmGrammar {
    fn provider(&self) -> Provider {
        Provider::Paytm
    }

    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>> {
        let date_re = Regex::new(
            r"(?i)\b(\d{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\b",
        )?;
        let amount_re = Regex::new(r"([+-])\s*Rs\.(\d+(?:,\d+)*\.\d{2})")?;
        let year_re = Regex::new(r"\b(20\d{2})\b")?;

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let marker_idx = lines.iter().position(|l| l.contains(SECTION_MARKER));
        let (header, body) = match marker_idx {
            Some(i) => (&lines[..i], &lines[i + 1..]),
            None => (&lines[..0], &lines[..]),
        };

        let year = header
            .iter()
            .find_map(|l| year_re.captures(l))
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(FALLBACK_YEAR);

        let mut out = Vec::new();
        let mut current_date: Option<String> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in body {
            let date = date_re.captures(line).and_then(|caps| {
                let day: u32 = caps[1].parse().ok()?;
                let month = month_number(&caps[2])?;
                // Reject impossible days so e.g. "40 Jan" stays a buffer line.
                NaiveDate::from_ymd_opt(year, month, day)?;
                Some(format!("{day:02} {} {year}", titlecase_month(&caps[2])))
            });

            match date {
                Some(date) => {
                    flush(&mut out, &current_date, &buffer, &amount_re);
                    current_date = Some(date);
                    buffer = vec![line];
                }
                None if current_date.is_some() => buffer.push(line),
                None => {}
            }
        }
        flush(&mut out, &current_date, &buffer, &amount_re);

        Ok(out)
    }
}

/// Close the open buffer into a candidate, if it holds a signed amount.
fn flush(out: &mut Vec<RawCandidate>, date: &Option<String>, buffer: &[&str], amount_re: &Regex) {
    let Some(date) = date else { return };
    if buffer.is_empty() {
        return;
    }
    let full_desc = buffer.join(" ");
    let Some(caps) = amount_re.captures(&full_desc) else {
        return;
    };
    let Ok(magnitude) = caps[2].replace(',', "").parse::<f64>() else {
        return;
    };
    let (amount, raw_type) = if &caps[1] == "-" {
        (-magnitude, RawType::Debit)
    } else {
        (magnitude, RawType::Credit)
    };

    let description = full_desc.split_whitespace().collect::<Vec<_>>().join(" ");
    out.push(RawCandidate {
        raw_type: Some(raw_type),
        ..RawCandidate::new(date.clone(), amount, description)
    });
}

fn month_number(name: &str) -> Option<u32> {
    let n = match name.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

fn titlecase_month(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}
