//! Text extraction from statement files.
//!
//! PDFs go through layered backends per page: lopdf first, processed in
//! bounded page chunks; any page that yields no text is retried against the
//! pdf-extract backend; a whole-document pdf-extract pass is the last resort
//! when no page yielded anything. A page that fails every backend is a
//! recorded warning, not a failure; the parse only dies when every page fails
//! under every backend. CSVs skip text extraction entirely and are read as
//! tabular rows.

use khata_core::RawType;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::types::{RawCandidate, clean_amount};

/// Pages per chunk when walking large documents.
const PAGE_CHUNK_SIZE: usize = 10;

/// Full plain text pulled out of a PDF, plus per-page extraction notes.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
    pub warnings: Vec<String>,
}

/// Rows pulled out of a CSV, already shaped as raw candidates.
#[derive(Debug, Clone)]
pub struct CsvRows {
    pub candidates: Vec<RawCandidate>,
    pub warnings: Vec<String>,
}

/// Extract best-effort full text from a PDF byte stream.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<ExtractedText, ParseError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ParseError::InvalidPdf(e.to_string()))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let page_count = page_numbers.len();
    if page_count == 0 {
        return Err(ParseError::InvalidPdf("the PDF has no pages".to_string()));
    }

    let mut warnings = Vec::new();
    let mut page_texts: Vec<(u32, Option<String>)> = Vec::with_capacity(page_count);

    for chunk in page_numbers.chunks(PAGE_CHUNK_SIZE) {
        debug!(pages = chunk.len(), "extracting page chunk");
        for &page in chunk {
            match doc.extract_text(&[page]) {
                Ok(page_text) if !page_text.trim().is_empty() => {
                    page_texts.push((page, Some(page_text)));
                }
                Ok(_) => {
                    warn!(page, "primary backend found no text on page");
                    page_texts.push((page, None));
                }
                Err(e) => {
                    warn!(page, error = %e, "primary backend failed on page");
                    page_texts.push((page, None));
                }
            }
        }
    }

    // Second backend, still per page: retry only the pages the primary
    // backend could not read, splicing recovered text back into place.
    if page_texts.iter().any(|(_, t)| t.is_none()) {
        debug!("retrying failed pages with fallback backend");
        match pdf_extract::extract_text_from_mem_by_pages(bytes) {
            Ok(fallback_pages) => {
                for (page, slot) in page_texts.iter_mut() {
                    if slot.is_some() {
                        continue;
                    }
                    // lopdf page numbers are 1-based.
                    let recovered = fallback_pages
                        .get(*page as usize - 1)
                        .filter(|t| !t.trim().is_empty());
                    match recovered {
                        Some(t) => {
                            warnings.push(format!(
                                "page {page}: recovered with fallback extraction backend"
                            ));
                            *slot = Some(t.clone());
                        }
                        None => warnings.push(format!(
                            "page {page}: no text could be extracted by any backend"
                        )),
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "fallback backend failed");
                for (page, _) in page_texts.iter().filter(|(_, t)| t.is_none()) {
                    warnings.push(format!(
                        "page {page}: no text could be extracted by any backend"
                    ));
                }
                warnings.push(format!("fallback extraction backend failed: {e}"));
            }
        }
    }

    let mut text = String::new();
    for (_, page_text) in &page_texts {
        if let Some(page_text) = page_text {
            text.push_str(page_text);
            text.push('\n');
        }
    }

    // Last resort: whole-document pass when no page yielded anything.
    if text.trim().is_empty() {
        debug!("no page yielded text, trying whole-document pass");
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(full) if !full.trim().is_empty() => {
                warnings.push(
                    "per-page extraction yielded no text; used whole-document fallback".into(),
                );
                text = full;
            }
            Ok(_) => {}
            Err(e) => {
                warnings.push(format!("whole-document fallback failed: {e}"));
            }
        }
    }

    if text.trim().is_empty() {
        return Err(ParseError::NoText);
    }

    Ok(ExtractedText {
        text,
        page_count,
        warnings,
    })
}

/// Read transaction rows directly from CSV bytes.
///
/// Column mapping is header-driven: the reader scans for a header row
/// containing a date column (statements often lead with blank or banner
/// rows), then maps date/amount/description and an optional type column.
pub fn read_csv_rows(bytes: &[u8]) -> Result<CsvRows, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(bytes);

    let mut candidates = Vec::new();
    let mut warnings = Vec::new();
    let mut columns: Option<CsvColumns> = None;

    for result in rdr.records() {
        let record = result?;

        // Skip until we find the header row
        let Some(cols) = &columns else {
            if let Some(found) = CsvColumns::from_header(&record) {
                columns = Some(found);
            }
            continue;
        };

        let date_str = record.get(cols.date).unwrap_or("").trim();
        if date_str.is_empty() {
            continue;
        }

        let amount_raw = record.get(cols.amount).unwrap_or("").trim();
        let Some(mut amount) = clean_amount(amount_raw) else {
            warnings.push(format!("skipped row with unparseable amount {amount_raw:?}"));
            continue;
        };

        let description = cols
            .description
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string();

        let raw_type = cols.raw_type.and_then(|i| record.get(i)).and_then(|v| {
            let v = v.trim().to_lowercase();
            if v.starts_with("dr") || v == "debit" {
                Some(RawType::Debit)
            } else if v.starts_with("cr") || v == "credit" {
                Some(RawType::Credit)
            } else {
                None
            }
        });

        // An explicit type marker wins over the amount's own sign.
        match raw_type {
            Some(RawType::Debit) => amount = -amount.abs(),
            Some(RawType::Credit) => amount = amount.abs(),
            None => {}
        }

        candidates.push(RawCandidate {
            raw_type,
            ..RawCandidate::new(date_str, amount, description)
        });
    }

    if columns.is_none() {
        warnings.push("no header row with a date column was found".to_string());
    }

    Ok(CsvRows {
        candidates,
        warnings,
    })
}

#[derive(Debug, Clone, Copy)]
struct CsvColumns {
    date: usize,
    amount: usize,
    description: Option<usize>,
    raw_type: Option<usize>,
}

impl CsvColumns {
    fn from_header(record: &csv::StringRecord) -> Option<CsvColumns> {
        let mut date = None;
        let mut amount = None;
        let mut description = None;
        let mut raw_type = None;

        for (i, cell) in record.iter().enumerate() {
            match cell.trim().to_lowercase().as_str() {
                "date" | "transaction date" | "txn date" => date = date.or(Some(i)),
                "amount" | "amount (inr)" | "transaction amount" => amount = amount.or(Some(i)),
                "description" | "narration" | "details" | "transaction details" | "remarks" => {
                    description = description.or(Some(i))
                }
                "type" | "dr/cr" | "cr/dr" | "transaction type" => raw_type = raw_type.or(Some(i)),
                _ => {}
            }
        }

        Some(CsvColumns {
            date: date?,
            amount: amount?,
            description,
            raw_type,
        })
    }
}
