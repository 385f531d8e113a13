//! Shared ingestion types: the provider discriminator and the raw candidate
//! a grammar emits before normalization.

use khata_core::RawType;

/// Known statement layouts. Selected by filename/content sniffing; `Generic`
/// is the default when nothing identifies the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Generic,
    Paytm,
    SuperMoney,
    Kotak,
    PhonePe,
}

impl Provider {
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Generic => "Generic",
            Provider::Paytm => "Paytm",
            Provider::SuperMoney => "SuperMoney",
            Provider::Kotak => "Kotak",
            Provider::PhonePe => "PhonePe",
        }
    }

    /// Sniff a provider from a filename. Returns `None` when the name gives
    /// nothing away.
    pub fn sniff_filename(filename: &str) -> Option<Provider> {
        let lower = filename.to_lowercase();
        if lower.contains("paytm") {
            Some(Provider::Paytm)
        } else if lower.contains("supermoney") {
            Some(Provider::SuperMoney)
        } else if lower.contains("kotak") {
            Some(Provider::Kotak)
        } else if lower.contains("phonepe") {
            Some(Provider::PhonePe)
        } else {
            None
        }
    }

    /// Sniff a provider from extracted text when the filename was mute.
    pub fn sniff_content(text: &str) -> Option<Provider> {
        if text.contains("Date & Time Transaction Details") {
            return Some(Provider::Paytm);
        }
        let lower = text.to_lowercase();
        if lower.contains("kotak") {
            Some(Provider::Kotak)
        } else if lower.contains("phonepe") || lower.contains("phone pe") {
            Some(Provider::PhonePe)
        } else if lower.contains("supermoney") {
            Some(Provider::SuperMoney)
        } else {
            None
        }
    }

    /// Interpret the caller's provider-context string (e.g. the analyzer the
    /// user has open). Unknown strings map to `None`, not an error.
    pub fn from_context(context: &str) -> Option<Provider> {
        Provider::sniff_filename(context)
    }
}

/// An unvalidated transaction guess extracted from text, pre-normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandidate {
    /// Date exactly as the grammar saw it; the resolver deals with shape.
    pub date_str: String,
    /// Signed amount per the grammar's sign rule.
    pub amount: f64,
    pub description: String,
    pub raw_type: Option<RawType>,
    /// Time-of-day when the layout prints one (PhonePe does).
    pub time: Option<String>,
    /// Running balance when the layout is a bank ledger (Kotak does).
    pub balance: Option<f64>,
}

impl RawCandidate {
    /// Candidate with only the common fields set.
    pub fn new(date_str: impl Into<String>, amount: f64, description: impl Into<String>) -> Self {
        RawCandidate {
            date_str: date_str.into(),
            amount,
            description: description.into(),
            raw_type: None,
            time: None,
            balance: None,
        }
    }
}

/// Strip currency symbols and thousands separators, keep an explicit sign.
pub fn clean_amount(raw: &str) -> Option<f64> {
    let cleaned = raw
        .replace('₹', "")
        .replace("Rs.", "")
        .replace("Rs", "")
        .replace("INR", "")
        .replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Directional keywords implying an outflow when no structural marker was
/// captured. Checked against the whole lowercased line.
pub fn implies_debit(description: &str) -> bool {
    let lower = description.to_lowercase();
    ["debit", "paid", "payment", "withdraw"]
        .iter()
        .any(|kw| lower.contains(kw))
}
