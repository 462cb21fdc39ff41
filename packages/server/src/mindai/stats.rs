//! Market overview statistics.
//!
//! The upstream values (per-token changes, mention counts) are opaque
//! inputs; these helpers only aggregate them for the overview block.

use super::types::MentionedTokenData;

/// Mean of the monthly changes across tokens, treating missing as zero.
pub fn overall_roa(tokens: &[MentionedTokenData]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let sum: f64 = tokens.iter().map(|t| t.monthly_change.unwrap_or(0.0)).sum();
    sum / tokens.len() as f64
}

/// Total mention count across tokens.
pub fn total_calls(tokens: &[MentionedTokenData]) -> i64 {
    tokens.iter().map(|t| t.cash_tag_mentions).sum()
}

/// Total of per-token active KOL counts.
pub fn active_kols(tokens: &[MentionedTokenData]) -> i64 {
    tokens.iter().map(|t| t.influencers_amount).sum()
}

/// Sentiment by sign majority of monthly changes.
pub fn market_sentiment(tokens: &[MentionedTokenData]) -> &'static str {
    let positive = tokens
        .iter()
        .filter(|t| t.monthly_change.unwrap_or(0.0) > 0.0)
        .count();
    let negative = tokens
        .iter()
        .filter(|t| t.monthly_change.unwrap_or(0.0) < 0.0)
        .count();

    if positive > negative {
        "🟢 Bullish"
    } else if negative > positive {
        "🔴 Bearish"
    } else {
        "⚪ Neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str, monthly: Option<f64>, mentions: i64, kols: i64) -> MentionedTokenData {
        MentionedTokenData {
            symbol: symbol.to_string(),
            cash_tag_mentions: mentions,
            influencers_amount: kols,
            daily_change: None,
            weekly_change: None,
            monthly_change: monthly,
        }
    }

    #[test]
    fn empty_input_is_all_zero_and_neutral() {
        assert_eq!(overall_roa(&[]), 0.0);
        assert_eq!(total_calls(&[]), 0);
        assert_eq!(active_kols(&[]), 0);
        assert_eq!(market_sentiment(&[]), "⚪ Neutral");
    }

    #[test]
    fn aggregates_across_tokens() {
        let tokens = vec![
            token("pepe", Some(30.0), 10, 4),
            token("doge", Some(-10.0), 5, 2),
            token("sol", None, 3, 1),
        ];

        assert!((overall_roa(&tokens) - 20.0 / 3.0).abs() < 1e-9);
        assert_eq!(total_calls(&tokens), 18);
        assert_eq!(active_kols(&tokens), 7);
    }

    #[test]
    fn sentiment_follows_sign_majority() {
        let bullish = vec![token("a", Some(5.0), 1, 1), token("b", Some(1.0), 1, 1)];
        let bearish = vec![token("a", Some(-5.0), 1, 1), token("b", Some(-1.0), 1, 1)];
        let mixed = vec![token("a", Some(5.0), 1, 1), token("b", Some(-5.0), 1, 1)];

        assert_eq!(market_sentiment(&bullish), "🟢 Bullish");
        assert_eq!(market_sentiment(&bearish), "🔴 Bearish");
        assert_eq!(market_sentiment(&mixed), "⚪ Neutral");
    }
}
