//! End-to-end properties of the statement parsing pipeline, exercised
//! through the normalizer's public entry points.

use chrono::NaiveDate;
use khata_ingest::{ParseError, ParseOptions, Provider, StatementNormalizer};

fn normalizer() -> StatementNormalizer {
    StatementNormalizer::new(ParseOptions {
        today: NaiveDate::from_ymd_opt(2026, 8, 23),
        ..ParseOptions::default()
    })
}

const PAYTM_TEXT: &str = "\
Paytm UPI Statement
Date & Time Transaction Details
06 Nov
Received from Ramesh Kumar
UPI Ref 431200991122
+ Rs.1,200.00
07 Nov
Paid to Swiggy Bangalore
UPI Ref 431200991123
- Rs.300.00";

#[test]
fn test_paytm_scenario_from_end_to_end() {
    let result = normalizer()
        .parse_extracted(PAYTM_TEXT, Provider::Paytm)
        .unwrap();
    assert_eq!(result.transactions.len(), 2);

    let first = &result.transactions[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 11, 6).unwrap());
    assert_eq!(first.amount, 1200.0);

    // The trailing buffer is flushed, categorized, and signed.
    let second = &result.transactions[1];
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 11, 7).unwrap());
    assert_eq!(second.amount, -300.0);
    assert_eq!(second.category, "Food & Dining");

    assert_eq!(result.total_received, 1200.0);
    assert_eq!(result.total_spent, 300.0);
}

#[test]
fn test_totals_identity_holds() {
    let result = normalizer()
        .parse_extracted(PAYTM_TEXT, Provider::Paytm)
        .unwrap();
    let sum: f64 = result.transactions.iter().map(|t| t.amount).sum();
    assert!((result.total_received - result.total_spent - sum).abs() < 1e-9);
}

#[test]
fn test_breakdown_amounts_and_percentages() {
    let text = "\
Nov 06, 2024 Paid to Swiggy DEBIT Rs.300.00
Nov 07, 2024 Paid to Uber DEBIT Rs.100.00
Nov 08, 2024 Received refund CREDIT Rs.50.00";
    let result = normalizer()
        .parse_extracted(text, Provider::Generic)
        .unwrap();

    // Each category's amount matches the sum of its debit transactions.
    for (category, summary) in &result.category_breakdown {
        let expected: f64 = result
            .transactions
            .iter()
            .filter(|t| t.amount < 0.0 && &t.category == category)
            .map(|t| t.amount.abs())
            .sum();
        assert!((summary.amount - expected).abs() < 1e-9, "{category}");
        assert_eq!(
            summary.count,
            result
                .transactions
                .iter()
                .filter(|t| t.amount < 0.0 && &t.category == category)
                .count()
        );
    }

    // Percentages sum to ~100 when anything was spent.
    let pct_sum: f64 = result
        .category_breakdown
        .values()
        .map(|s| s.percentage)
        .sum();
    assert!((pct_sum - 100.0).abs() < 1e-6);
}

#[test]
fn test_misleading_credit_token_scenario() {
    let text = "Nov 06, 2024 Paid to Swiggy Bangalore, CREDIT, Rs.250.00";
    let result = normalizer()
        .parse_extracted(text, Provider::Generic)
        .unwrap();
    assert_eq!(result.transactions.len(), 1);
    let txn = &result.transactions[0];
    // "Paid" implies debit; the comma-separated CREDIT token is not a
    // structural marker and does not flip the sign.
    assert_eq!(txn.amount, -250.0);
    assert_eq!(txn.category, "Food & Dining");
}

#[test]
fn test_no_zero_amounts_and_no_duplicates_in_any_result() {
    let text = "\
Nov 06, 2024 Paid to Swiggy DEBIT Rs.250.00
Nov 06, 2024 Paid to Swiggy DEBIT Rs.250.00
Nov 07, 2024 Ghost entry DEBIT Rs.0.00";
    let result = normalizer()
        .parse_extracted(text, Provider::Generic)
        .unwrap();

    assert!(result.transactions.iter().all(|t| t.amount != 0.0));
    let mut keys: Vec<_> = result
        .transactions
        .iter()
        .map(|t| (t.date, t.amount.to_bits(), t.description.clone()))
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), result.transactions.len());
}

#[test]
fn test_csv_statement_end_to_end() {
    let csv = b"Date,Description,Amount,Type\n\
07/11/2024,Salary Credit ACME,50000,Cr\n\
06/11/2024,Swiggy order 1123,250.00,Dr\n";
    let result = normalizer().parse(csv, "bank_export.csv").unwrap();

    assert_eq!(result.transactions.len(), 2);
    // Ascending canonical order regardless of row order in the file.
    assert_eq!(
        result.transactions[0].date,
        NaiveDate::from_ymd_opt(2024, 11, 6).unwrap()
    );
    assert_eq!(result.transactions[0].amount, -250.0);
    assert_eq!(result.transactions[0].category, "Food & Dining");
    assert_eq!(result.transactions[1].amount, 50000.0);
    assert_eq!(result.total_received, 50000.0);
    assert_eq!(result.total_spent, 250.0);
}

#[test]
fn test_empty_file_rejected_before_extraction() {
    let err = normalizer().parse(b"", "statement.csv").unwrap_err();
    assert!(matches!(err, ParseError::EmptyFile));
}

#[test]
fn test_provider_mismatch_guidance() {
    let n = StatementNormalizer::new(ParseOptions {
        provider_context: Some("phonepe".to_string()),
        ..ParseOptions::default()
    });
    let err = n.parse(b"pdf bytes", "paytm_statement.pdf").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Paytm"));
    assert!(message.contains("PhonePe"));
}

#[test]
fn test_json_output_contract() {
    let result = normalizer()
        .parse_extracted(PAYTM_TEXT, Provider::Paytm)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["transactions"][0]["date"], "2024-11-06");
    assert!(json["transactions"][0]["amount"].is_number());
    assert!(json["transactions"][0]["description"].is_string());
    assert!(json["transactions"][0]["category"].is_string());
    assert!(json["totalReceived"].is_number());
    assert!(json["totalSpent"].is_number());
    assert!(json["categoryBreakdown"].is_object());
    assert!(json["parseWarnings"].is_array());
}

#[test]
fn test_phonepe_statement_through_normalizer() {
    let text = "\
Nov 06, 2024 Received from Ramesh Kumar CREDIT ₹1,500
08:15 pm Transaction ID T2411062015
UTR No. 431200991122
Credited to XX1234";
    let result = normalizer()
        .parse_extracted(text, Provider::PhonePe)
        .unwrap();
    assert_eq!(result.transactions.len(), 1);
    assert_eq!(result.transactions[0].amount, 1500.0);
    assert_eq!(result.transactions[0].time.as_deref(), Some("08:15 pm"));
}

#[test]
fn test_kotak_statement_through_normalizer() {
    let text = "\
06-11-2024 UPI/SWIGGY/431200991122/pay 250.00(Dr) 12,450.00(Cr)
07-11-2024 NEFT SALARY ACME 50,000.00(Cr) 62,450.00(Cr)";
    let result = normalizer()
        .parse_extracted(text, Provider::Kotak)
        .unwrap();
    assert_eq!(result.transactions.len(), 2);
    assert_eq!(
        result.transactions[0].date,
        NaiveDate::from_ymd_opt(2024, 11, 6).unwrap()
    );
    assert_eq!(result.transactions[0].amount, -250.0);
    assert_eq!(result.transactions[1].amount, 50000.0);
}

#[test]
fn test_supermoney_statement_through_normalizer() {
    let text = "\
01/03/2024 Salary Credit INR 50,000.00
02/03/2024 Rent Payment Rs. 15,000.00";
    let result = normalizer()
        .parse_extracted(text, Provider::SuperMoney)
        .unwrap();
    assert_eq!(result.transactions.len(), 2);
    assert_eq!(
        result.transactions[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert_eq!(result.transactions[0].amount, 50000.0);
    assert_eq!(result.transactions[1].amount, -15000.0);
}
