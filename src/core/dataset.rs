use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RaceError, RaceResult};

/// One product's aggregated trade for a single year.
///
/// Identity is the HS6 `code`; records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: u32,
    pub name: Option<String>,
    /// Trade value in thousand USD.
    pub value_kusd: f64,
    /// Traded quantity in metric tons, when the source reports one.
    pub quantity_tons: Option<f64>,
}

// The document also carries a redundant zero-padded `hs6` string per
// product; it is derivable from `k` and ignored here.
#[derive(Debug, Clone, Deserialize)]
struct RawProduct {
    k: u32,
    #[serde(default)]
    name: Option<String>,
    v: f64,
    #[serde(default)]
    q: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawYearSlice {
    year: i32,
    products: Vec<RawProduct>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTimeSeries {
    #[serde(default)]
    meta: Option<serde_json::Value>,
    years: Vec<i32>,
    data: Vec<RawYearSlice>,
}

/// Immutable year-indexed trade time series.
///
/// Years are strictly ascending and unique; every listed year maps to a
/// (possibly empty) record list preserving document order.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeTimeSeries {
    years: Vec<i32>,
    by_year: IndexMap<i32, Vec<ProductRecord>>,
    meta: Option<serde_json::Value>,
}

impl TradeTimeSeries {
    pub fn from_json_str(input: &str) -> RaceResult<Self> {
        let raw: RawTimeSeries = serde_json::from_str(input).map_err(|e| {
            RaceError::MalformedDataset(format!("failed to parse time series document: {e}"))
        })?;
        Self::from_raw(raw)
    }

    pub fn from_reader(reader: impl std::io::Read) -> RaceResult<Self> {
        let raw: RawTimeSeries = serde_json::from_reader(reader).map_err(|e| {
            RaceError::MalformedDataset(format!("failed to parse time series document: {e}"))
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTimeSeries) -> RaceResult<Self> {
        if raw.years.is_empty() {
            return Err(RaceError::MalformedDataset(
                "document lists no years".to_owned(),
            ));
        }

        let mut by_year: IndexMap<i32, Vec<ProductRecord>> =
            IndexMap::with_capacity(raw.years.len());
        for window in raw.years.windows(2) {
            if window[1] <= window[0] {
                return Err(RaceError::MalformedDataset(format!(
                    "years must be strictly ascending: {} follows {}",
                    window[1], window[0]
                )));
            }
        }
        for year in &raw.years {
            by_year.insert(*year, Vec::new());
        }

        let mut record_count = 0usize;
        for slice in raw.data {
            let Some(slot) = by_year.get_mut(&slice.year) else {
                return Err(RaceError::MalformedDataset(format!(
                    "data entry for year {} absent from the years list",
                    slice.year
                )));
            };
            if !slot.is_empty() {
                return Err(RaceError::MalformedDataset(format!(
                    "duplicate data entry for year {}",
                    slice.year
                )));
            }

            slot.reserve(slice.products.len());
            for product in slice.products {
                if !product.v.is_finite() || product.v < 0.0 {
                    return Err(RaceError::MalformedDataset(format!(
                        "product {} in year {} has invalid value {}",
                        product.k, slice.year, product.v
                    )));
                }
                if let Some(q) = product.q
                    && q.is_finite()
                    && q < 0.0
                {
                    return Err(RaceError::MalformedDataset(format!(
                        "product {} in year {} has negative quantity {q}",
                        product.k, slice.year
                    )));
                }

                slot.push(ProductRecord {
                    code: product.k,
                    name: product.name.filter(|name| !name.trim().is_empty()),
                    value_kusd: product.v,
                    quantity_tons: product.q.filter(|q| q.is_finite()),
                });
                record_count += 1;
            }
        }

        debug!(
            years = raw.years.len(),
            records = record_count,
            "loaded trade time series"
        );

        Ok(Self {
            years: raw.years,
            by_year,
            meta: raw.meta,
        })
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Index of the last year; years are validated non-empty at load.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.years.len() - 1
    }

    #[must_use]
    pub fn year_at(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }

    #[must_use]
    pub fn records_for_year(&self, year: i32) -> &[ProductRecord] {
        match self.by_year.get(&year) {
            Some(records) => records,
            None => &[],
        }
    }

    #[must_use]
    pub fn records_at(&self, index: usize) -> &[ProductRecord] {
        match self.year_at(index) {
            Some(year) => self.records_for_year(year),
            None => &[],
        }
    }

    /// Opaque document metadata, carried through untouched.
    #[must_use]
    pub fn meta(&self) -> Option<&serde_json::Value> {
        self.meta.as_ref()
    }
}
