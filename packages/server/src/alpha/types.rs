//! Alpha-view token alert records.

use serde::{Deserialize, Serialize};

/// A token movement alert submitted by the alpha-view producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAlert {
    pub chain: i64,
    pub amount: i64,
    pub token_name: String,
    pub token_address: String,
    pub token_symbol: String,
    /// Fully Diluted Valuation
    pub fdv: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let raw = r#"{
            "chain": 1,
            "amount": 500,
            "tokenName": "Pepe",
            "tokenAddress": "0xabc",
            "tokenSymbol": "pepe",
            "fdv": 123456.78
        }"#;

        let parsed: TokenAlert = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token_symbol, "pepe");

        let back = serde_json::to_value(&parsed).unwrap();
        assert!(back.get("tokenAddress").is_some());
    }
}
