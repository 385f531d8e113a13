//! Provider-specific extraction grammars.
//!
//! Each grammar turns extracted statement text into raw transaction
//! candidates. They share one interface so the normalizer can dispatch on the
//! sniffed provider without knowing any layout details.

pub mod generic;
pub mod kotak;
pub mod paytm;
pub mod phonepe;
pub mod supermoney;

use anyhow::Result;

use crate::types::{Provider, RawCandidate};

/// A provider-specific extraction strategy.
pub trait Grammar {
    fn provider(&self) -> Provider;

    /// Walk the full extracted text and emit raw candidates in document
    /// order. Individual malformed lines are skipped, never fatal.
    fn extract(&self, text: &str) -> Result<Vec<RawCandidate>>;
}

/// Look up the grammar for a sniffed provider.
pub fn for_provider(provider: Provider) -> Box<dyn Grammar> {
    match provider {
        Provider::Generic => Box::new(generic::GenericGrammar),
        Provider::Paytm => Box::new(paytm::PaytmGrammar),
        Provider::SuperMoney => Box::new(supermoney::SuperMoneyGrammar),
        Provider::Kotak => Box::new(kotak::KotakGrammar),
        Provider::PhonePe => Box::new(phonepe::PhonePeGrammar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_provider() {
        for provider in [
            Provider::Generic,
            Provider::Paytm,
            Provider::SuperMoney,
            Provider::Kotak,
            Provider::PhonePe,
        ] {
            assert_eq!(for_provider(provider).provider(), provider);
        }
    }
}
