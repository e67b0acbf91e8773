//! # Evidence Matcher — Confidence Scoring
//!
//! Scores how strongly a piece of evidence supports a compliance
//! obligation. Five independent signals contribute additively; the sum is
//! clamped to `[0, 1]`. A candidate pairing is retained only at or above
//! [`MATCH_THRESHOLD`], and at most [`MAX_OBLIGATION_REFS`] retained
//! matches are attached to an artifact.
//!
//! ## Signals
//!
//! | Signal | Weight | Condition |
//! |--------|--------|-----------|
//! | Control-reference containment | +0.50 | the obligation's `control_ref` (lower-cased) contains any evidence tag (lower-cased) as a substring |
//! | Tag/keyword overlap | up to +0.20 | +0.05 per evidence tag found verbatim in the obligation's tags or as a substring of its title |
//! | Recency, trailing 12 months | +0.15 | period end within 12 calendar months of the evaluation instant |
//! | Integration-type relevance | +0.10 | the reference's system prefix maps to a keyword set intersecting either side's tags |
//! | Recency, trailing 3 months | +0.05 | period end within 3 calendar months of the evaluation instant |
//!
//! All signals are additive-only; a score can never go below the sum of
//! the signals that fired, so adding a qualifying signal never lowers it.
//!
//! ## Evaluation Instant
//!
//! Recency windows are evaluated against the `Matcher`'s pinned instant,
//! fixed at construction. Scoring a batch therefore sees one consistent
//! "now", and tests can pin any instant they like.

use std::collections::HashSet;

use ccmp_core::{ObligationId, Timestamp};

use crate::artifact::EvidenceArtifact;
use crate::obligation::Obligation;

/// Weight for the control-reference containment signal.
pub const CONTROL_REF_WEIGHT: f64 = 0.50;
/// Contribution of each overlapping tag.
pub const TAG_OVERLAP_STEP: f64 = 0.05;
/// Cap on the total tag-overlap contribution.
pub const TAG_OVERLAP_CAP: f64 = 0.20;
/// Weight for evidence ending within the trailing 12 months.
pub const RECENCY_YEAR_WEIGHT: f64 = 0.15;
/// Weight for the integration-type relevance signal.
pub const SOURCE_RELEVANCE_WEIGHT: f64 = 0.10;
/// Weight for evidence ending within the trailing 3 months.
pub const RECENCY_QUARTER_WEIGHT: f64 = 0.05;

/// Minimum score for a match to be retained.
pub const MATCH_THRESHOLD: f64 = 0.50;
/// Maximum number of obligation references attached to one artifact.
pub const MAX_OBLIGATION_REFS: usize = 3;

/// Keyword sets for the integration-relevance signal, keyed by the
/// case-sensitive system prefix of an [`IntegrationRef`](ccmp_core::IntegrationRef).
///
/// An unrecognized prefix is not an error — it simply earns no bonus.
fn relevance_keywords(system: &str) -> Option<&'static [&'static str]> {
    match system {
        "STP" => Some(&["stp", "payroll", "payg", "withholding"]),
        "SuperStream" => Some(&["super", "superannuation", "sg", "contributions"]),
        "BAS" => Some(&["bas", "tax", "gst", "payg"]),
        "PayrollTax" => Some(&["payroll tax", "state revenue", "threshold"]),
        "WorkersComp" => Some(&["workers compensation", "premium", "insurance"]),
        "LSL" => Some(&["long service", "leave", "lsl", "portable"]),
        "VEVO" => Some(&["visa", "work rights", "vevo", "immigration"]),
        "Stapled" => Some(&["stapled", "super", "choice of fund"]),
        "Payslip" => Some(&["payslip", "pay slip", "wages", "records"]),
        _ => None,
    }
}

/// A retained (obligation, score) pairing for one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    /// The matched obligation.
    pub obligation: ObligationId,
    /// Confidence in `[MATCH_THRESHOLD, 1.0]`.
    pub score: f64,
}

/// An artifact together with its full retained ranking. The artifact's
/// `obligation_refs`/`confidence` hold the attached top-N slice; `matches`
/// keeps every retained candidate for callers that want the long tail.
#[derive(Debug, Clone)]
pub struct MatchedArtifact {
    /// The artifact, with matcher output applied.
    pub artifact: EvidenceArtifact,
    /// All retained matches, best first.
    pub matches: Vec<ScoredMatch>,
}

/// The evidence-to-obligation matching engine.
///
/// Stateless apart from the pinned evaluation instant; scoring is a pure
/// function of its inputs and that instant.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    now: Timestamp,
}

impl Matcher {
    /// A matcher evaluating recency against the current instant.
    pub fn new() -> Self {
        Self {
            now: Timestamp::now(),
        }
    }

    /// A matcher with a pinned evaluation instant.
    pub fn at(now: Timestamp) -> Self {
        Self { now }
    }

    /// Score one evidence/obligation pairing. Always in `[0, 1]`.
    pub fn score(&self, evidence: &EvidenceArtifact, obligation: &Obligation) -> f64 {
        let evidence_tags: Vec<String> = evidence
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut score = 0.0;

        // Control-reference containment: the strongest signal. The register
        // code contains one of the evidence keywords, e.g. tag "bas" inside
        // control ref "BAS-001".
        if let Some(control_ref) = &obligation.control_ref {
            let control_ref = control_ref.to_lowercase();
            if evidence_tags.iter().any(|t| control_ref.contains(t)) {
                score += CONTROL_REF_WEIGHT;
            }
        }

        // Tag/keyword overlap, stepped and capped.
        let obligation_tags: HashSet<String> =
            obligation.tags.iter().map(|t| t.to_lowercase()).collect();
        let title = obligation.title.to_lowercase();
        let mut overlap = 0.0;
        for tag in &evidence_tags {
            if obligation_tags.contains(tag) || title.contains(tag.as_str()) {
                overlap += TAG_OVERLAP_STEP;
            }
        }
        score += overlap.min(TAG_OVERLAP_CAP);

        // Recency windows are cumulative: fresh evidence earns both.
        if evidence.period.ends_within_months(self.now, 12) {
            score += RECENCY_YEAR_WEIGHT;
        }
        if evidence.period.ends_within_months(self.now, 3) {
            score += RECENCY_QUARTER_WEIGHT;
        }

        // Integration-type relevance via the system prefix lookup.
        if let Some(integration_ref) = &evidence.integration_ref {
            if let Some(keywords) = relevance_keywords(integration_ref.system()) {
                let evidence_set: HashSet<&str> =
                    evidence_tags.iter().map(String::as_str).collect();
                if keywords
                    .iter()
                    .any(|k| evidence_set.contains(k) || obligation_tags.contains(*k))
                {
                    score += SOURCE_RELEVANCE_WEIGHT;
                }
            }
        }

        score.min(1.0)
    }

    /// Rank all obligations against one artifact: score each, retain those
    /// at or above [`MATCH_THRESHOLD`], and sort descending by score.
    ///
    /// The sort is stable, so equal scores keep the obligation list's input
    /// order.
    pub fn rank(&self, evidence: &EvidenceArtifact, obligations: &[Obligation]) -> Vec<ScoredMatch> {
        let mut retained: Vec<ScoredMatch> = obligations
            .iter()
            .filter_map(|obligation| {
                let score = self.score(evidence, obligation);
                (score >= MATCH_THRESHOLD).then(|| ScoredMatch {
                    obligation: obligation.id.clone(),
                    score,
                })
            })
            .collect();
        retained.sort_by(|a, b| b.score.total_cmp(&a.score));
        retained
    }

    /// Match a batch of artifacts against the obligation list.
    ///
    /// Each artifact gets its top-[`MAX_OBLIGATION_REFS`] retained matches
    /// attached (`obligation_refs` + `confidence`); artifacts with no
    /// retained match come back with both empty — never an error.
    pub fn match_batch(
        &self,
        artifacts: Vec<EvidenceArtifact>,
        obligations: &[Obligation],
    ) -> Vec<MatchedArtifact> {
        let matched: Vec<MatchedArtifact> = artifacts
            .into_iter()
            .map(|mut artifact| {
                let matches = self.rank(&artifact, obligations);
                artifact.apply_matches(&matches, MAX_OBLIGATION_REFS);
                MatchedArtifact { artifact, matches }
            })
            .collect();
        tracing::debug!(
            artifacts = matched.len(),
            with_matches = matched.iter().filter(|m| !m.matches.is_empty()).count(),
            obligations = obligations.len(),
            "evidence batch matched"
        );
        matched
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccmp_core::{IntegrationRef, IntegrationSource, ObligationId, Period};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_utc(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    /// Evaluation instant pinned for every test in this module.
    fn now() -> Timestamp {
        ts(2026, 8, 1)
    }

    fn evidence(tags: &[&str], end: Timestamp, integration_ref: Option<&str>) -> EvidenceArtifact {
        let start = ts(2010, 1, 1);
        EvidenceArtifact::new(
            "test evidence",
            IntegrationSource::Manual,
            Period::new(start, end).unwrap(),
            tags.iter().map(|t| t.to_string()).collect(),
            integration_ref.map(IntegrationRef::parse),
        )
    }

    fn obligation(control_ref: Option<&str>, tags: &[&str]) -> Obligation {
        Obligation::new("ob-1", "Lodge quarterly activity statements", control_ref, tags)
    }

    // ── Signal-by-signal ─────────────────────────────────────────────

    #[test]
    fn test_control_ref_containment() {
        let m = Matcher::at(now());
        let ev = evidence(&["BAS"], ts(2020, 6, 30), None);
        let ob = obligation(Some("BAS-001"), &[]);
        assert_eq!(m.score(&ev, &ob), CONTROL_REF_WEIGHT);
    }

    #[test]
    fn test_control_ref_is_containment_not_equality() {
        let m = Matcher::at(now());
        // Tag "001" is a substring of "BAS-001" as well.
        let ev = evidence(&["001"], ts(2020, 6, 30), None);
        let ob = obligation(Some("BAS-001"), &[]);
        assert_eq!(m.score(&ev, &ob), CONTROL_REF_WEIGHT);
    }

    #[test]
    fn test_empty_tag_earns_nothing() {
        // "BAS-001".contains("") is true; an empty tag must not ride that.
        let m = Matcher::at(now());
        let ev = evidence(&["", "   "], ts(2020, 6, 30), None);
        let ob = obligation(Some("BAS-001"), &[]);
        assert_eq!(m.score(&ev, &ob), 0.0);
    }

    #[test]
    fn test_tag_overlap_steps_and_cap() {
        let m = Matcher::at(now());
        let ob = obligation(None, &["payg", "super", "gst", "fbt", "stp"]);

        let two = evidence(&["payg", "super"], ts(2020, 6, 30), None);
        assert!((m.score(&two, &ob) - 2.0 * TAG_OVERLAP_STEP).abs() < 1e-9);

        let five = evidence(&["payg", "super", "gst", "fbt", "stp"], ts(2020, 6, 30), None);
        assert!((m.score(&five, &ob) - TAG_OVERLAP_CAP).abs() < 1e-9);
    }

    #[test]
    fn test_tag_matches_title_substring() {
        let m = Matcher::at(now());
        let ev = evidence(&["quarterly"], ts(2020, 6, 30), None);
        let ob = obligation(None, &[]);
        assert!((m.score(&ev, &ob) - TAG_OVERLAP_STEP).abs() < 1e-9);
    }

    #[test]
    fn test_recency_windows_are_cumulative() {
        let m = Matcher::at(now());
        let ob = obligation(None, &[]);

        let fresh = evidence(&[], ts(2026, 7, 1), None);
        assert!((m.score(&fresh, &ob) - (RECENCY_YEAR_WEIGHT + RECENCY_QUARTER_WEIGHT)).abs() < 1e-9);

        let this_year = evidence(&[], ts(2026, 1, 15), None);
        assert!((m.score(&this_year, &ob) - RECENCY_YEAR_WEIGHT).abs() < 1e-9);

        let stale = evidence(&[], ts(2024, 6, 30), None);
        assert_eq!(m.score(&stale, &ob), 0.0);
    }

    #[test]
    fn test_integration_relevance_from_evidence_tags() {
        let m = Matcher::at(now());
        let ev = evidence(&["visa"], ts(2020, 6, 30), Some("VEVO-CHK-1"));
        let ob = obligation(None, &[]);
        assert!((m.score(&ev, &ob) - SOURCE_RELEVANCE_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_integration_relevance_from_obligation_tags() {
        let m = Matcher::at(now());
        let ev = evidence(&[], ts(2020, 6, 30), Some("Stapled-2026"));
        let ob = obligation(None, &["stapled"]);
        assert!((m.score(&ev, &ob) - SOURCE_RELEVANCE_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_prefix_is_not_an_error() {
        let m = Matcher::at(now());
        let ev = evidence(&["visa"], ts(2020, 6, 30), Some("MYSTERY-1"));
        let ob = obligation(None, &[]);
        assert_eq!(m.score(&ev, &ob), 0.0);
    }

    #[test]
    fn test_prefix_lookup_is_case_sensitive() {
        let m = Matcher::at(now());
        let ev = evidence(&["visa"], ts(2020, 6, 30), Some("vevo-CHK-1"));
        let ob = obligation(None, &[]);
        assert_eq!(m.score(&ev, &ob), 0.0);
    }

    // ── Full-score scenario ──────────────────────────────────────────

    #[test]
    fn test_all_signals_clamp_to_one() {
        let m = Matcher::at(now());
        let ev = evidence(
            &["BAS", "tax", "GST", "PAYG", "ATO"],
            ts(2026, 7, 15),
            Some("BAS-Q3-2026"),
        );
        let ob = Obligation::new(
            "ob-bas",
            "Lodge BAS",
            Some("BAS-001"),
            &["BAS", "tax", "GST", "PAYG", "ATO"],
        );
        // 0.50 + 0.20 (capped) + 0.15 + 0.10 + 0.05 = 1.00
        assert_eq!(m.score(&ev, &ob), 1.0);
    }

    #[test]
    fn test_no_signal_scores_zero() {
        let m = Matcher::at(now());
        let ev = evidence(&["unrelated"], ts(2024, 3, 1), None);
        let ob = obligation(Some("WHS-004"), &["safety"]);
        assert_eq!(m.score(&ev, &ob), 0.0);
    }

    // ── Ranking ──────────────────────────────────────────────────────

    #[test]
    fn test_rank_filters_below_threshold() {
        let m = Matcher::at(now());
        // Recency alone (0.20) is below threshold; with control ref it clears.
        let ev = evidence(&["bas"], ts(2026, 7, 15), None);
        let weak = Obligation::new("weak", "Unrelated duty", None, &[]);
        let strong = Obligation::new("strong", "Lodge BAS", Some("BAS-001"), &[]);

        let ranked = m.rank(&ev, &[weak, strong]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].obligation, ObligationId::new("strong"));
        assert!(ranked[0].score >= MATCH_THRESHOLD);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let m = Matcher::at(now());
        let ev = evidence(&["bas"], ts(2026, 7, 15), None);
        let first = Obligation::new("first", "BAS duty", Some("BAS-001"), &[]);
        let second = Obligation::new("second", "BAS duty", Some("BAS-002"), &[]);

        let ranked = m.rank(&ev, &[first, second]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].obligation, ObligationId::new("first"));
        assert_eq!(ranked[1].obligation, ObligationId::new("second"));
    }

    #[test]
    fn test_match_batch_caps_refs_at_three() {
        let m = Matcher::at(now());
        let ev = evidence(&["bas"], ts(2026, 7, 15), None);
        let obligations: Vec<Obligation> = (0..5)
            .map(|i| Obligation::new(format!("ob-{i}"), "BAS duty", Some("BAS-001"), &[]))
            .collect();

        let matched = m.match_batch(vec![ev], &obligations);
        assert_eq!(matched.len(), 1);
        let artifact = &matched[0].artifact;
        assert_eq!(artifact.obligation_refs.len(), MAX_OBLIGATION_REFS);
        // All five retained; only three attached.
        assert_eq!(matched[0].matches.len(), 5);
        assert_eq!(artifact.confidence, Some(matched[0].matches[0].score));
    }

    #[test]
    fn test_match_batch_empty_obligations() {
        let m = Matcher::at(now());
        let ev = evidence(&["bas"], ts(2026, 7, 15), None);
        let matched = m.match_batch(vec![ev], &[]);
        assert!(matched[0].artifact.obligation_refs.is_empty());
        assert!(matched[0].artifact.confidence.is_none());
    }

    // ── Properties ───────────────────────────────────────────────────

    fn arb_tags() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-z]{0,8}", 0..6)
    }

    proptest! {
        /// Scores are always within [0, 1].
        #[test]
        fn score_is_bounded(
            ev_tags in arb_tags(),
            ob_tags in arb_tags(),
            control_ref in proptest::option::of("[A-Z]{2,4}-[0-9]{3}"),
            end_offset_days in 0i64..4000,
        ) {
            let m = Matcher::at(now());
            let end = Timestamp::from_utc(
                *ts(2015, 1, 1).as_datetime() + chrono::Duration::days(end_offset_days),
            );
            let ev = evidence(
                &ev_tags.iter().map(String::as_str).collect::<Vec<_>>(),
                end,
                Some("STP-RUN-1"),
            );
            let ob = Obligation::new(
                "ob",
                "Lodge quarterly returns",
                control_ref.as_deref(),
                &ob_tags.iter().map(String::as_str).collect::<Vec<_>>(),
            );
            let score = m.score(&ev, &ob);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Adding a qualifying overlap tag never lowers the score.
        #[test]
        fn extra_overlap_is_monotone(ev_tags in arb_tags()) {
            let m = Matcher::at(now());
            let ob = Obligation::new("ob", "Duty", None, &["payg"]);

            let base_tags: Vec<&str> = ev_tags.iter().map(String::as_str).collect();
            let base = m.score(&evidence(&base_tags, ts(2026, 7, 1), None), &ob);

            let mut more_tags = base_tags.clone();
            more_tags.push("payg");
            let more = m.score(&evidence(&more_tags, ts(2026, 7, 1), None), &ob);

            prop_assert!(more >= base);
        }

        /// A control-ref hit never lowers the score versus the same inputs
        /// without it.
        #[test]
        fn control_ref_hit_is_monotone(ev_tags in arb_tags()) {
            let m = Matcher::at(now());
            let mut tags: Vec<&str> = ev_tags.iter().map(String::as_str).collect();
            tags.push("whs");

            let without = Obligation::new("ob", "Duty", None, &[]);
            let with = Obligation::new("ob", "Duty", Some("WHS-004"), &[]);
            let ev = evidence(&tags, ts(2026, 7, 1), None);

            prop_assert!(m.score(&ev, &with) >= m.score(&ev, &without));
        }

        /// Satisfying a recency window never lowers the score.
        #[test]
        fn recency_is_monotone(ev_tags in arb_tags()) {
            let m = Matcher::at(now());
            let tags: Vec<&str> = ev_tags.iter().map(String::as_str).collect();
            let ob = Obligation::new("ob", "Duty", Some("WHS-004"), &["whs"]);

            let stale = m.score(&evidence(&tags, ts(2023, 1, 1), None), &ob);
            let recent = m.score(&evidence(&tags, ts(2026, 7, 1), None), &ob);

            prop_assert!(recent >= stale);
        }

        /// Every retained match clears the threshold and the ranking is
        /// descending with the cap applied downstream.
        #[test]
        fn rank_respects_threshold_and_order(ev_tags in arb_tags()) {
            let m = Matcher::at(now());
            let tags: Vec<&str> = ev_tags.iter().map(String::as_str).collect();
            let ev = evidence(&tags, ts(2026, 7, 1), Some("BAS-1"));
            let obligations: Vec<Obligation> = (0..6)
                .map(|i| Obligation::new(
                    format!("ob-{i}"),
                    "Lodge BAS returns",
                    Some("BAS-001"),
                    &["bas", "tax"],
                ))
                .collect();

            let ranked = m.rank(&ev, &obligations);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for entry in &ranked {
                prop_assert!(entry.score >= MATCH_THRESHOLD);
            }
        }
    }
}
