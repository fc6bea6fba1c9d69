//! Static UF to region lookup.
use std::fmt;

/// The five macro-regions of Brazil.
///
/// Variants are declared in name order so that a sorted group-by over
/// regions lists them the same way the region names sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// UF code to region, sorted by UF.
pub const UF_REGIONS: [(&str, Region); 27] = [
    ("AC", Region::Norte),
    ("AL", Region::Nordeste),
    ("AM", Region::Norte),
    ("AP", Region::Norte),
    ("BA", Region::Nordeste),
    ("CE", Region::Nordeste),
    ("DF", Region::CentroOeste),
    ("ES", Region::Sudeste),
    ("GO", Region::CentroOeste),
    ("MA", Region::Nordeste),
    ("MG", Region::Sudeste),
    ("MS", Region::CentroOeste),
    ("MT", Region::CentroOeste),
    ("PA", Region::Norte),
    ("PB", Region::Nordeste),
    ("PE", Region::Nordeste),
    ("PI", Region::Nordeste),
    ("PR", Region::Sul),
    ("RJ", Region::Sudeste),
    ("RN", Region::Nordeste),
    ("RO", Region::Norte),
    ("RR", Region::Norte),
    ("RS", Region::Sul),
    ("SC", Region::Sul),
    ("SE", Region::Nordeste),
    ("SP", Region::Sudeste),
    ("TO", Region::Norte),
];

/// Resolve a UF code to its region. Surrounding whitespace is ignored;
/// codes are otherwise matched exactly.
pub fn region_for_uf(code: &str) -> Option<Region> {
    let code = code.trim();
    UF_REGIONS
        .binary_search_by(|(uf, _)| uf.cmp(&code))
        .ok()
        .map(|idx| UF_REGIONS[idx].1)
}
