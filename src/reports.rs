//! Report engine: pure aggregations over a loaded set of call records.
//!
//! Every function here is total over an empty slice. Ratios go through
//! [`percent`], which returns 0.0 for an empty denominator, and grouped
//! results are built with maps, so a zero-row load renders as an all-zero
//! dashboard instead of failing the request.

use std::collections::BTreeMap;

use crate::models::{
    AgentConfirmed, CallRecord, CategoryCount, OverallMetrics, Site, SiteConfirmed, Subgroup,
    SubgroupConfirmed,
};

/// Brand tokens stripped from category and classification labels before
/// grouping. Longest first so "ALPHA GMM" never leaves a dangling "GMM".
const BRAND_TOKENS: [&str; 4] = ["ALPHA GMM", "OMEGA GMM", "ALPHA", "OMEGA"];

/// Remove brand tokens and normalize whitespace. Idempotent.
pub fn strip_campaign_tokens(label: &str) -> String {
    let mut cleaned = label.to_string();
    for token in BRAND_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Total, qualified, and unqualified counts with percentage rates.
pub fn overall_metrics(calls: &[CallRecord]) -> OverallMetrics {
    let total = calls.len() as u64;
    let qualified = calls.iter().filter(|c| c.is_qualified()).count() as u64;
    let unqualified = total - qualified;
    OverallMetrics {
        total,
        qualified,
        unqualified,
        qualified_pct: percent(qualified, total),
        unqualified_pct: percent(unqualified, total),
    }
}

/// Counts of qualified calls per cleaned (category, classification) pair,
/// sorted by category ascending then count descending.
pub fn category_breakdown(calls: &[CallRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();
    for call in calls {
        let Some(classification) = call.classification.as_deref() else {
            continue;
        };
        let key = (
            strip_campaign_tokens(&call.category),
            strip_campaign_tokens(classification),
        );
        *counts.entry(key).or_default() += 1;
    }

    let mut rows: Vec<CategoryCount> = counts
        .into_iter()
        .map(|((category, classification), count)| CategoryCount {
            category,
            classification,
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then(b.count.cmp(&a.count))
            .then(a.classification.cmp(&b.classification))
    });
    rows
}

/// Confirmed-sale totals for one site, split by subgroup. Subgroup shares are
/// percentages of the site total and 0.0 when the site has no confirmations.
pub fn site_confirmed(calls: &[CallRecord], site: Site) -> SiteConfirmed {
    let confirmed = calls
        .iter()
        .filter(|c| c.site == Some(site) && c.is_confirmed())
        .count() as u64;

    let subgroups = Subgroup::ALL
        .into_iter()
        .map(|subgroup| {
            let n = calls
                .iter()
                .filter(|c| {
                    c.site == Some(site) && c.subgroup == Some(subgroup) && c.is_confirmed()
                })
                .count() as u64;
            SubgroupConfirmed {
                subgroup,
                confirmed: n,
                share_pct: percent(n, confirmed),
            }
        })
        .collect();

    SiteConfirmed {
        site,
        confirmed,
        subgroups,
    }
}

/// Confirmed counts per agent for a site, optionally narrowed to a subgroup.
/// Sorted by count descending, agent name ascending as a stable tiebreak.
pub fn agents_confirmed(
    calls: &[CallRecord],
    site: Site,
    subgroup: Option<Subgroup>,
) -> Vec<AgentConfirmed> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for call in calls {
        if call.site != Some(site) || !call.is_confirmed() {
            continue;
        }
        if subgroup.is_some() && call.subgroup != subgroup {
            continue;
        }
        *counts.entry(call.agent_name.as_str()).or_default() += 1;
    }

    let mut rows: Vec<AgentConfirmed> = counts
        .into_iter()
        .map(|(agent, confirmed)| AgentConfirmed {
            agent: agent.to_string(),
            confirmed,
        })
        .collect();
    rows.sort_by(|a, b| b.confirmed.cmp(&a.confirmed).then(a.agent.cmp(&b.agent)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, classification: Option<&str>, agent: &str) -> CallRecord {
        CallRecord {
            call_time: None,
            site_id: "1".to_string(),
            site_name: String::new(),
            agent_id: "100".to_string(),
            agent_name: agent.to_string(),
            wait_seconds: 12,
            duration_seconds: 90,
            phone_number: "+5511999990000".to_string(),
            status: Some("ANSWERED".to_string()),
            deduced_status: None,
            callback_status: None,
            callback_date: None,
            category: category.to_string(),
            classification: classification.map(str::to_string),
            tags: None,
            site: Site::parse(category),
            subgroup: Subgroup::parse(category),
        }
    }

    fn sample() -> Vec<CallRecord> {
        vec![
            record("Toyota Nacoes ALPHA", Some("CONFIRMADO VENDA"), "Ana"),
            record("Toyota Nacoes ALPHA", Some("CONFIRMADO VENDA"), "Bruno"),
            record("Toyota Nacoes OMEGA", Some("CONFIRMADO AGENDADO"), "Ana"),
            record("Toyota Nacoes", Some("NAO TEM INTERESSE"), "Carla"),
            record("Toyota Morumbi ALPHA", Some("CONFIRMADO VENDA"), "Diego"),
            record("Toyota Morumbi OMEGA", Some("RETORNAR"), "Diego"),
            record("Toyota Nacoes ALPHA", None, "Ana"),
            record("Toyota Morumbi", None, "Elisa"),
            record("Toyota Nacoes OMEGA", None, "Bruno"),
            record("Toyota Morumbi OMEGA", None, "Carla"),
        ]
    }

    #[test]
    fn overall_counts_partition_the_dataset() {
        let metrics = overall_metrics(&sample());
        assert_eq!(metrics.total, 10);
        assert_eq!(metrics.qualified, 6);
        assert_eq!(metrics.unqualified, 4);
        assert_eq!(metrics.qualified + metrics.unqualified, metrics.total);
        assert_eq!(metrics.qualified_pct, 60.0);
        assert_eq!(metrics.unqualified_pct, 40.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred_within_rounding() {
        let mut calls = sample();
        calls.push(record("Toyota Nacoes", Some("RETORNAR"), "Fabio"));
        calls.push(record("Toyota Nacoes", None, "Fabio"));
        let metrics = overall_metrics(&calls);
        assert!((metrics.qualified_pct + metrics.unqualified_pct - 100.0).abs() < 0.011);
    }

    #[test]
    fn overall_metrics_on_empty_input_are_zero() {
        let metrics = overall_metrics(&[]);
        assert_eq!(metrics, OverallMetrics::default());
    }

    #[test]
    fn token_stripping_is_idempotent() {
        for label in [
            "Toyota Nacoes ALPHA",
            "CONFIRMADO VENDA ALPHA GMM",
            "OMEGA GMM OMEGA",
            "  Toyota   Morumbi  ",
            "",
        ] {
            let once = strip_campaign_tokens(label);
            assert_eq!(strip_campaign_tokens(&once), once, "label: {label:?}");
        }
    }

    #[test]
    fn longest_tokens_are_stripped_first() {
        assert_eq!(strip_campaign_tokens("Lead ALPHA GMM"), "Lead");
        assert_eq!(strip_campaign_tokens("Lead OMEGA GMM extra"), "Lead extra");
    }

    #[test]
    fn category_breakdown_groups_cleaned_labels() {
        let rows = category_breakdown(&sample());
        // Both ALPHA and the bare-site CONFIRMADO rows collapse onto the
        // cleaned "Toyota Nacoes" category.
        let nacoes_confirmed = rows
            .iter()
            .find(|r| r.category == "Toyota Nacoes" && r.classification == "CONFIRMADO VENDA")
            .expect("cleaned nacoes row");
        assert_eq!(nacoes_confirmed.count, 2);

        // Sorted by category asc, then count desc.
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        for pair in rows.windows(2) {
            if pair[0].category == pair[1].category {
                assert!(pair[0].count >= pair[1].count);
            }
        }
    }

    #[test]
    fn category_breakdown_ignores_unqualified_calls() {
        let calls = vec![record("Toyota Nacoes", None, "Ana")];
        assert!(category_breakdown(&calls).is_empty());
    }

    #[test]
    fn site_confirmed_counts_and_shares() {
        let report = site_confirmed(&sample(), Site::Nacoes);
        assert_eq!(report.confirmed, 3);
        let alpha = &report.subgroups[0];
        let omega = &report.subgroups[1];
        assert_eq!((alpha.subgroup, alpha.confirmed), (Subgroup::Alpha, 2));
        assert_eq!((omega.subgroup, omega.confirmed), (Subgroup::Omega, 1));
        assert_eq!(alpha.share_pct, 66.67);
        assert_eq!(omega.share_pct, 33.33);
    }

    #[test]
    fn subgroup_counts_never_exceed_site_total() {
        for site in Site::ALL {
            let report = site_confirmed(&sample(), site);
            let sum: u64 = report.subgroups.iter().map(|s| s.confirmed).sum();
            assert!(sum <= report.confirmed);
        }
    }

    #[test]
    fn site_confirmed_handles_zero_matches() {
        let calls = vec![record("Toyota Nacoes", Some("RETORNAR"), "Ana")];
        let report = site_confirmed(&calls, Site::Morumbi);
        assert_eq!(report.confirmed, 0);
        for sub in &report.subgroups {
            assert_eq!(sub.confirmed, 0);
            assert_eq!(sub.share_pct, 0.0);
        }
    }

    #[test]
    fn agents_sorted_by_confirmed_desc() {
        let rows = agents_confirmed(&sample(), Site::Nacoes, None);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].agent.as_str(), rows[0].confirmed), ("Ana", 2));
        assert_eq!((rows[1].agent.as_str(), rows[1].confirmed), ("Bruno", 1));
    }

    #[test]
    fn agents_narrowed_to_a_subgroup() {
        let rows = agents_confirmed(&sample(), Site::Nacoes, Some(Subgroup::Omega));
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].agent.as_str(), rows[0].confirmed), ("Ana", 1));
    }

    #[test]
    fn agents_on_empty_input_are_empty() {
        assert!(agents_confirmed(&[], Site::Morumbi, None).is_empty());
    }
}
