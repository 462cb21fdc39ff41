//! Bot message rendering for analytics responses.
//!
//! Templates mirror the bot's chat surface: emoji headers, medal ranks,
//! top-3 truncation, and silent suppression of fields the upstream API
//! did not populate.

use super::stats;
use super::types::{BestCallData, GainerData, InfluencerData, MentionedTokenData};

const MEDAL_EMOJIS: [&str; 3] = ["🥇", "🥈", "🥉"];
const COINGECKO_URL: &str = "https://www.coingecko.com/en/coins";

/// Top-performing KOLs list.
pub fn format_top_performing_kols(period: &str, influencers: &[InfluencerData]) -> String {
    if influencers.is_empty() {
        return format!("🏆 No top influencers found for {}.", period);
    }

    let mut lines = vec![format!(
        "🏆 Top Performing KOLs (Past {}):\n",
        capitalize(period)
    )];

    for (i, influencer) in influencers.iter().take(3).enumerate() {
        let mut entry = vec![format!(
            "{} {}. {}",
            medal(i),
            i + 1,
            influencer.influencer_tweeter_user_name
        )];
        entry.extend(percent_field("Avg ROA", Some(influencer.avg_roa_at_ath)));
        entry.extend(field("Total Calls", Some(influencer.total_mentions)));
        entry.extend(percent_field("Success Rate", Some(influencer.success_rate)));
        entry.extend(field("Unique Tokens", Some(influencer.unique_tokens)));
        entry.push("\n".to_string());

        lines.push(entry.join("\n"));
    }

    lines.join("\n")
}

/// Top gainers, one entry per token group (best call first in each group).
pub fn format_top_gainers(period: &str, gainers: &[Vec<GainerData>]) -> String {
    if gainers.is_empty() {
        return format!("📈 No top gainers found for {}.", period);
    }

    let mut lines = vec![format!("📈 Top Gainers (Past {}):\n", capitalize(period))];

    for (i, group) in gainers.iter().take(3).enumerate() {
        let Some(first) = group.first() else {
            continue;
        };

        let mut entry = vec![format!(
            "🔹 {}. {} ({})",
            i + 1,
            first.name,
            first.symbol.to_uppercase()
        )];
        entry.extend(percent_field("ROA at ATH", first.roa_at_ath_in_percentage));
        entry.extend(percent_field(
            "Current ROA",
            first.roa_at_current_price_in_percentage,
        ));
        entry.extend(field(
            "Mentioned by",
            first
                .influencer_tweeter_user_name
                .as_ref()
                .map(|u| format!("@{}", u)),
        ));
        entry.extend(field(
            "Mention Date",
            first
                .mention_date
                .as_deref()
                .map(|d| d.split('T').next().unwrap_or(d).to_string()),
        ));
        entry.push("\n".to_string());

        lines.push(entry.join("\n"));
    }

    lines.join("\n")
}

/// Most mentioned tokens, rendered as a market overview plus trending list.
pub fn format_top_mentioned_tokens(period: &str, tokens: &[MentionedTokenData]) -> String {
    if tokens.is_empty() {
        return format!("📊 No tokens mentioned for {}.", period);
    }

    let overall_roa = stats::overall_roa(tokens);

    let mut lines = vec![format!(
        "📊 Market Overview (Last {})\n\
         • Overall ROA: {:.2}%\n\
         • Total Calls: {}\n\
         • Active KOLs: {}\n\
         • Market Sentiment: {}\n",
        capitalize(period),
        overall_roa,
        stats::total_calls(tokens),
        stats::active_kols(tokens),
        stats::market_sentiment(tokens),
    )];

    lines.push(format!("\n📈 ROA Change: {:.2}%\n", overall_roa));
    lines.push("\n🔥 Trending Coins".to_string());

    for token in tokens.iter().take(5) {
        let mut entry = vec![format!("• ${}", token.symbol.to_uppercase())];
        entry.extend(percent_field("ROA Change", token.monthly_change));
        entry.extend(field("Calls", Some(token.cash_tag_mentions)));
        entry.extend(field("KOLs", Some(token.influencers_amount)));

        lines.push(entry.join("\n"));
    }

    lines.join("\n")
}

/// Best-performing calls list.
pub fn format_best_call(period: &str, calls: &[BestCallData]) -> String {
    if calls.is_empty() {
        return format!("🌟 No best-performing calls found for {}.", period);
    }

    let mut lines = vec![format!(
        "🌟 Best Performing Calls (Past {}):\n",
        capitalize(period)
    )];

    for (i, call) in calls.iter().take(3).enumerate() {
        let mut entry = vec![format!(
            "{} {}. {}",
            medal(i),
            i + 1,
            call.symbol.to_uppercase()
        )];
        entry.extend(percent_field("ROA at ATH", call.roa_at_ath_in_percentage));
        entry.extend(percent_field(
            "Current ROA",
            call.roa_at_current_price_in_percentage,
        ));
        entry.extend(field(
            "By",
            Some(format!("@{}", call.influencer_tweeter_user_name)),
        ));
        entry.extend(field(
            "Date",
            call.created_at
                .as_deref()
                .map(|d| d.split('T').next().unwrap_or(d).to_string()),
        ));
        entry.extend(field(
            "View on CoinGecko",
            call.coin_gecko_id
                .as_ref()
                .map(|id| format!("{}/{}", COINGECKO_URL, id)),
        ));

        lines.push(entry.join("\n"));
    }

    lines.join("\n")
}

fn medal(rank: usize) -> String {
    MEDAL_EMOJIS
        .get(rank)
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("#{}.", rank + 1))
}

/// Render "   • Label: value" only when the value exists.
fn field(label: &str, value: Option<impl std::fmt::Display>) -> Option<String> {
    value.map(|v| format!("   • {}: {}", label, v))
}

fn percent_field(label: &str, value: Option<f64>) -> Option<String> {
    value.map(|v| format!("   • {}: {:.2}%", label, v))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
