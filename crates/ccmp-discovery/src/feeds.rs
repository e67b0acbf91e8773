//! # Built-in Integration Feeds
//!
//! The nine feed adapters behind evidence discovery. Each one synthesizes
//! the records its upstream system would return for a reporting period;
//! none performs real network I/O, so output is deterministic for a fixed
//! period and footprint. The jurisdiction-scoped feeds (payroll tax,
//! workers compensation, long service leave) emit one record per state in
//! the footprint, in footprint order.
//!
//! Every record's `integration_ref` is prefixed with the feed's source
//! identifier — the matcher's relevance lookup keys off that prefix.

use std::sync::Arc;

use async_trait::async_trait;

use ccmp_core::{IntegrationRef, IntegrationSource, Period, StateFootprint};

use crate::adapter::{AdapterError, IntegrationAdapter, RawRecord};

/// All nine built-in adapters, in registry order.
pub fn builtin_adapters() -> Vec<Arc<dyn IntegrationAdapter>> {
    vec![
        Arc::new(StpFeed),
        Arc::new(SuperStreamFeed),
        Arc::new(BasFeed),
        Arc::new(PayrollTaxFeed),
        Arc::new(WorkersCompFeed),
        Arc::new(LslFeed),
        Arc::new(VevoFeed),
        Arc::new(StapledFeed),
        Arc::new(PayslipFeed),
    ]
}

/// Month-resolution label for record titles, e.g. `Jun 2026`.
fn period_label(period: &Period) -> String {
    period.end.as_datetime().format("%b %Y").to_string()
}

/// Reference suffix derived from the period end, e.g. `202606`.
fn ref_suffix(period: &Period) -> String {
    period.end.as_datetime().format("%Y%m").to_string()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

fn record(
    title: String,
    period: &Period,
    tag_items: &[&str],
    reference: String,
) -> RawRecord {
    RawRecord {
        title,
        period: *period,
        tags: tags(tag_items),
        integration_ref: Some(IntegrationRef::parse(reference)),
    }
}

// ─── National feeds ──────────────────────────────────────────────────

/// Single Touch Payroll lodgement feed.
#[derive(Debug, Default)]
pub struct StpFeed;

#[async_trait]
impl IntegrationAdapter for StpFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Stp
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![
            record(
                format!("STP pay event summary {}", period_label(period)),
                period,
                &["stp", "payroll", "payg", "withholding"],
                format!("STP-PEV-{}", ref_suffix(period)),
            ),
            record(
                format!("STP finalisation declaration {}", period_label(period)),
                period,
                &["stp", "payroll", "finalisation"],
                format!("STP-FIN-{}", ref_suffix(period)),
            ),
        ])
    }
}

/// SuperStream contribution clearing feed.
#[derive(Debug, Default)]
pub struct SuperStreamFeed;

#[async_trait]
impl IntegrationAdapter for SuperStreamFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::SuperStream
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![record(
            format!("SuperStream contribution remittance {}", period_label(period)),
            period,
            &["super", "superannuation", "sg", "contributions"],
            format!("SuperStream-CON-{}", ref_suffix(period)),
        )])
    }
}

/// Business Activity Statement lodgement feed.
#[derive(Debug, Default)]
pub struct BasFeed;

#[async_trait]
impl IntegrationAdapter for BasFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Bas
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![record(
            format!("BAS lodgement receipt {}", period_label(period)),
            period,
            &["bas", "tax", "gst", "payg"],
            format!("BAS-LDG-{}", ref_suffix(period)),
        )])
    }
}

/// VEVO work-rights verification feed.
#[derive(Debug, Default)]
pub struct VevoFeed;

#[async_trait]
impl IntegrationAdapter for VevoFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Vevo
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![record(
            format!("VEVO work rights check batch {}", period_label(period)),
            period,
            &["vevo", "visa", "work rights"],
            format!("VEVO-CHK-{}", ref_suffix(period)),
        )])
    }
}

/// Stapled super fund lookup feed.
#[derive(Debug, Default)]
pub struct StapledFeed;

#[async_trait]
impl IntegrationAdapter for StapledFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Stapled
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![record(
            format!("Stapled fund lookup results {}", period_label(period)),
            period,
            &["stapled", "super", "choice of fund"],
            format!("Stapled-REQ-{}", ref_suffix(period)),
        )])
    }
}

/// Payslip archive feed.
#[derive(Debug, Default)]
pub struct PayslipFeed;

#[async_trait]
impl IntegrationAdapter for PayslipFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Payslip
    }

    async fn fetch(
        &self,
        period: &Period,
        _footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(vec![record(
            format!("Payslip archive extract {}", period_label(period)),
            period,
            &["payslip", "wages", "records"],
            format!("Payslip-ARC-{}", ref_suffix(period)),
        )])
    }
}

// ─── Jurisdiction-scoped feeds ───────────────────────────────────────

/// State payroll tax return feed. One record per footprint state.
#[derive(Debug, Default)]
pub struct PayrollTaxFeed;

#[async_trait]
impl IntegrationAdapter for PayrollTaxFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::PayrollTax
    }

    async fn fetch(
        &self,
        period: &Period,
        footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(footprint
            .states
            .iter()
            .map(|state| {
                record(
                    format!("Payroll tax return {} {}", state.code(), period_label(period)),
                    period,
                    &["payroll tax", "state revenue", state.code()],
                    format!("PayrollTax-{}-{}", state.code(), ref_suffix(period)),
                )
            })
            .collect())
    }
}

/// Workers compensation policy feed. One record per footprint state.
#[derive(Debug, Default)]
pub struct WorkersCompFeed;

#[async_trait]
impl IntegrationAdapter for WorkersCompFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::WorkersComp
    }

    async fn fetch(
        &self,
        period: &Period,
        footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(footprint
            .states
            .iter()
            .map(|state| {
                record(
                    format!(
                        "Workers compensation certificate of currency {} {}",
                        state.code(),
                        period_label(period)
                    ),
                    period,
                    &["workers compensation", "premium", "insurance", state.code()],
                    format!("WorkersComp-{}-{}", state.code(), ref_suffix(period)),
                )
            })
            .collect())
    }
}

/// Long service leave scheme feed. One record per footprint state.
#[derive(Debug, Default)]
pub struct LslFeed;

#[async_trait]
impl IntegrationAdapter for LslFeed {
    fn source(&self) -> IntegrationSource {
        IntegrationSource::Lsl
    }

    async fn fetch(
        &self,
        period: &Period,
        footprint: &StateFootprint,
    ) -> Result<Vec<RawRecord>, AdapterError> {
        Ok(footprint
            .states
            .iter()
            .map(|state| {
                record(
                    format!("Long service leave accrual report {} {}", state.code(), period_label(period)),
                    period,
                    &["long service", "leave", "lsl", state.code()],
                    format!("LSL-{}-{}", state.code(), ref_suffix(period)),
                )
            })
            .collect())
    }
}
