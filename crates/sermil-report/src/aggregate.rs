//! Group-by, count and normalize records into per-region shares.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AggregateError;
use crate::io::SermilRecord;
use crate::regions::{region_for_uf, Region};

/// The two values observed in the `DISPENSA` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exemption {
    With,
    Without,
}

impl Exemption {
    pub fn label(&self) -> &'static str {
        match self {
            Exemption::With => "Com dispensa",
            Exemption::Without => "Sem dispensa",
        }
    }
}

impl fmt::Display for Exemption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Exemption {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Com dispensa" => Ok(Exemption::With),
            "Sem dispensa" => Ok(Exemption::Without),
            other => Err(AggregateError::UnexpectedFlag(other.to_string())),
        }
    }
}

/// Record counts keyed by `(region, exemption)`, plus the rows left out: UF
/// codes that did not resolve to a region and blank `DISPENSA` fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupCounts {
    pub counts: BTreeMap<(Region, Exemption), u64>,
    pub unmapped: BTreeMap<String, usize>,
    pub missing_flag: usize,
}

impl GroupCounts {
    pub fn get(&self, region: Region, exemption: Exemption) -> u64 {
        self.counts.get(&(region, exemption)).copied().unwrap_or(0)
    }

    pub fn unmapped_rows(&self) -> usize {
        self.unmapped.values().sum()
    }
}

/// Normalized exemption split for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region: Region,
    pub with_count: u64,
    pub without_count: u64,
    /// Percentage (0-100) of records with exemption.
    pub with_percent: f64,
    /// Percentage (0-100) of records without exemption.
    pub without_percent: f64,
}

impl RegionShare {
    pub fn total(&self) -> u64 {
        self.with_count + self.without_count
    }

    pub fn percent(&self, exemption: Exemption) -> f64 {
        match exemption {
            Exemption::With => self.with_percent,
            Exemption::Without => self.without_percent,
        }
    }
}

/// Per-region shares ordered by region name.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProportions {
    pub shares: Vec<RegionShare>,
    /// Rows dropped because their UF is not in the region table.
    pub unmapped_rows: usize,
}

impl RegionProportions {
    pub fn get(&self, region: Region) -> Option<&RegionShare> {
        self.shares.iter().find(|share| share.region == region)
    }

    pub fn regions(&self) -> Vec<Region> {
        self.shares.iter().map(|share| share.region).collect()
    }

    /// Percentages for one exemption value, in region order.
    pub fn percents(&self, exemption: Exemption) -> Vec<f64> {
        self.shares.iter().map(|share| share.percent(exemption)).collect()
    }
}

/// Count records by `(region, exemption)`.
///
/// Rows with an unknown UF are left out of the counts and tallied in
/// `GroupCounts::unmapped`; their exemption value is not inspected. Rows with
/// a known UF and a blank exemption value are tallied in
/// `GroupCounts::missing_flag`.
pub fn count_by_region<'a, I>(records: I) -> Result<GroupCounts, AggregateError>
where
    I: IntoIterator<Item = &'a SermilRecord>,
{
    let mut groups = GroupCounts::default();

    for record in records {
        let Some(region) = region_for_uf(&record.state_code) else {
            *groups
                .unmapped
                .entry(record.state_code.trim().to_string())
                .or_insert(0) += 1;
            continue;
        };
        if record.exemption_flag.trim().is_empty() {
            groups.missing_flag += 1;
            continue;
        }
        let exemption = record.exemption_flag.parse::<Exemption>()?;
        *groups.counts.entry((region, exemption)).or_insert(0) += 1;
    }

    if !groups.unmapped.is_empty() {
        let codes: Vec<&str> = groups.unmapped.keys().map(String::as_str).collect();
        log::warn!(
            "[SERMIL::Report] Dropped {} rows with unknown UF codes: {:?}",
            groups.unmapped_rows(),
            codes
        );
    }
    if groups.missing_flag > 0 {
        log::warn!(
            "[SERMIL::Report] Dropped {} rows with a blank exemption value",
            groups.missing_flag
        );
    }

    Ok(groups)
}

/// Turn counts into percentages per region.
///
/// Every region present in `groups` gets both values; a value with no rows
/// counts as zero, so the two percentages always sum to 100.
pub fn normalize(groups: &GroupCounts) -> Result<RegionProportions, AggregateError> {
    let mut totals: BTreeMap<Region, u64> = BTreeMap::new();
    for (&(region, _), &count) in &groups.counts {
        *totals.entry(region).or_insert(0) += count;
    }

    let shares: Vec<RegionShare> = totals
        .into_iter()
        .filter(|&(_, total)| total > 0)
        .map(|(region, total)| {
            let with_count = groups.get(region, Exemption::With);
            let without_count = groups.get(region, Exemption::Without);
            RegionShare {
                region,
                with_count,
                without_count,
                with_percent: with_count as f64 / total as f64 * 100.0,
                without_percent: without_count as f64 / total as f64 * 100.0,
            }
        })
        .collect();

    if shares.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    Ok(RegionProportions {
        shares,
        unmapped_rows: groups.unmapped_rows(),
    })
}

/// Count and normalize in one step.
pub fn aggregate_records<'a, I>(records: I) -> Result<RegionProportions, AggregateError>
where
    I: IntoIterator<Item = &'a SermilRecord>,
{
    let groups = count_by_region(records)?;
    normalize(&groups)
}
