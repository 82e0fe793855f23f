//! Terminal rendering for analysis results

use colored::Colorize;

use crate::core::{RiskTier, TokenAnalysis};

/// Human-friendly large numbers: 2340000 -> "2.34M".
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.2}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}

fn tier_badge(tier: RiskTier) -> colored::ColoredString {
    match tier {
        RiskTier::Low => "🟢 LOW".green().bold(),
        RiskTier::Medium => "🟡 MEDIUM".yellow().bold(),
        RiskTier::High => "🔴 HIGH".red().bold(),
    }
}

pub fn print_analysis(analysis: &TokenAnalysis) {
    let report = &analysis.report;
    let sentiment = &report.sentiment;

    println!("\n{} {}", "🛡️", "TOKEN RISK REPORT".bold());
    println!("{}", "=".repeat(70));
    println!("   Token: {}", analysis.token.address);
    if let Some(symbol) = &analysis.token.symbol {
        println!("   Symbol: ${}", symbol);
    }
    println!(
        "   Risk Score: {} / 100   Tier: {}",
        format!("{:.1}", report.score).bold(),
        tier_badge(report.tier)
    );

    println!("\n{}", "📊 SENTIMENT SUMMARY:".bold());
    println!("   Mentions analyzed: {}", sentiment.mention_count);
    println!(
        "   Positive {:.0}% | Negative {:.0}% | Neutral {:.0}%",
        sentiment.positive_ratio * 100.0,
        sentiment.negative_ratio * 100.0,
        sentiment.neutral_ratio * 100.0
    );
    println!(
        "   Weighted sentiment: {:.3}   Total engagement: {}",
        sentiment.weighted_sentiment,
        format_number(sentiment.total_engagement as f64)
    );

    println!("\n{}", "⚠️ RISK FACTORS:".bold());
    for factor in &report.factors {
        let contribution = format!("{:>5.1}", factor.contribution);
        let contribution = if factor.contribution > 0.0 {
            contribution.red()
        } else {
            contribution.green()
        };
        println!("   {} {:<18} {}", contribution, factor.name, factor.rationale.dimmed());
    }

    if !analysis.influencers.is_empty() {
        println!("\n{}", "📣 TOP VOICES:".bold());
        for influencer in analysis.influencers.iter().take(3) {
            println!(
                "   @{:<16} {} followers",
                influencer.username,
                format_number(influencer.followers as f64)
            );
        }
    }
    println!("{}", "=".repeat(70));
}
