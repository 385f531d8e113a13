//! The top-level parse contract: bytes in, normalized ledger out.
//!
//! Validation and the provider guardrail run before any extraction. The
//! sniffed provider picks a grammar; every raw candidate then goes through
//! the date resolver and the categorizer; the final set is filtered, deduped,
//! sorted ascending by date, and aggregated. A statement that yields zero
//! transactions is an empty well-formed result, not an error.

use std::collections::HashSet;

use chrono::NaiveDate;
use khata_core::{Categorizer, ParseResult, Transaction, resolve_date};
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::extract::{extract_pdf_text, read_csv_rows};
use crate::grammars;
use crate::types::{Provider, RawCandidate};

/// Caller-supplied knobs. The provider context is the analyzer the user has
/// open (if any) and exists only for the mismatch guardrail; it is an
/// explicit argument, never ambient state.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub provider_context: Option<String>,
    pub max_file_bytes: u64,
    /// Parse-time "today" for date fallback and future-year clamping.
    /// Injectable so callers and tests get deterministic output.
    pub today: Option<NaiveDate>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            provider_context: None,
            max_file_bytes: 20 * 1024 * 1024,
            today: None,
        }
    }
}

/// Owns one parse invocation's collaborators. Stateless across calls apart
/// from the categorizer's memo cache.
#[derive(Debug, Default)]
pub struct StatementNormalizer {
    options: ParseOptions,
    categorizer: Categorizer,
}

impl StatementNormalizer {
    pub fn new(options: ParseOptions) -> Self {
        StatementNormalizer {
            options,
            categorizer: Categorizer::new(),
        }
    }

    /// Parse a statement file (PDF or CSV bytes plus its filename).
    pub fn parse(&self, bytes: &[u8], filename: &str) -> Result<ParseResult, ParseError> {
        let extension = self.validate(bytes, filename)?;

        if extension == "csv" {
            let rows = read_csv_rows(bytes)?;
            return Ok(self.finalize(rows.candidates, rows.warnings));
        }

        let extracted = extract_pdf_text(bytes)?;
        let provider = Provider::sniff_filename(filename)
            .or_else(|| Provider::sniff_content(&extracted.text))
            .unwrap_or(Provider::Generic);
        debug!(provider = provider.label(), pages = extracted.page_count, "dispatching grammar");

        let candidates = grammars::for_provider(provider).extract(&extracted.text)?;
        Ok(self.finalize(candidates, extracted.warnings))
    }

    /// Parse already-extracted statement text with a known provider. Used by
    /// callers that run their own extraction, and by tests.
    pub fn parse_extracted(
        &self,
        text: &str,
        provider: Provider,
    ) -> Result<ParseResult, ParseError> {
        let candidates = grammars::for_provider(provider).extract(text)?;
        Ok(self.finalize(candidates, Vec::new()))
    }

    /// Input validation and the provider-mismatch guardrail. Returns the
    /// lowercased extension on success.
    fn validate(&self, bytes: &[u8], filename: &str) -> Result<String, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::EmptyFile);
        }
        if bytes.len() as u64 > self.options.max_file_bytes {
            return Err(ParseError::FileTooLarge {
                actual_mb: bytes.len() as f64 / (1024.0 * 1024.0),
                limit_mb: self.options.max_file_bytes / (1024 * 1024),
            });
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if extension != "pdf" && extension != "csv" {
            return Err(ParseError::UnsupportedFormat { extension });
        }

        // A Paytm-named file in the PhonePe analyzer is user error, not a
        // parsing problem; reject with guidance before touching the bytes.
        if let Some(context) = &self.options.provider_context {
            if let (Some(expected), Some(found)) = (
                Provider::from_context(context),
                Provider::sniff_filename(filename),
            ) {
                if expected != found {
                    return Err(ParseError::ProviderMismatch {
                        found: found.label().to_string(),
                        expected: expected.label().to_string(),
                    });
                }
            }
        }

        Ok(extension)
    }

    /// Candidates to final result: resolve dates and categories, drop noise,
    /// dedup, sort, aggregate.
    fn finalize(&self, candidates: Vec<RawCandidate>, mut warnings: Vec<String>) -> ParseResult {
        let today = self
            .options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut transactions = Vec::with_capacity(candidates.len());
        let mut seen: HashSet<(NaiveDate, u64, String)> = HashSet::new();

        for candidate in candidates {
            if !candidate.amount.is_finite() {
                warn!(description = %candidate.description, "skipped candidate with non-finite amount");
                continue;
            }
            // Zero and absurd magnitudes are extraction noise.
            if candidate.amount.abs() < 0.005 || candidate.amount.abs() >= 1e9 {
                continue;
            }

            let resolved = resolve_date(&candidate.date_str, today);

            if !seen.insert((
                resolved.date,
                candidate.amount.to_bits(),
                candidate.description.clone(),
            )) {
                continue;
            }

            // Warn only for candidates that make it into the result.
            if resolved.defaulted {
                warnings.push(format!(
                    "date {:?} could not be parsed; defaulted to {today}",
                    candidate.date_str
                ));
            } else if resolved.clamped {
                warnings.push(format!(
                    "future year in date {:?} clamped to the current year",
                    candidate.date_str
                ));
            }

            let category = self.categorizer.categorize(&candidate.description);
            transactions.push(Transaction {
                date: resolved.date,
                amount: candidate.amount,
                description: candidate.description,
                category: category.to_string(),
                raw_type: candidate.raw_type,
                time: candidate.time,
            });
        }

        // Canonical order is ascending by date; stable sort keeps document
        // order within a day.
        transactions.sort_by_key(|t| t.date);

        if transactions.is_empty() {
            warnings.push("no transactions found in the statement".to_string());
        }
        ParseResult::from_transactions(transactions, warnings)
    }
}
