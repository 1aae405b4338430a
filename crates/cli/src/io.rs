//! JSON input/output for the `check` and `sample` commands.
//!
//! Input: `{ "polygons": [[[x, y], ...], ...], "queries": [[x, y], ...] }`.
//! Output: `{ "results": [{ "point": [x, y], "inside": [bool, ...] }, ...] }`,
//! one `inside` flag per polygon, in input order.

use anyhow::{Context, Result};
use polyray::geom2::{Coord, Point, Polygon, PolygonSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryFile<T> {
    pub polygons: Vec<Vec<[T; 2]>>,
    #[serde(default = "Vec::new")]
    pub queries: Vec<[T; 2]>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryResult<T> {
    pub point: [T; 2],
    pub inside: Vec<bool>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultFile<T> {
    pub results: Vec<QueryResult<T>>,
}

pub fn read_query_file<T: DeserializeOwned>(path: &Path) -> Result<QueryFile<T>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Build one polygon per entry; an empty vertex list is reported with its index.
pub fn build_set<T: Coord>(polygons: &[Vec<[T; 2]>]) -> Result<PolygonSet<T>> {
    polygons
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            let vertices = ring.iter().map(|&p| Point::from(p)).collect();
            Polygon::new(vertices).with_context(|| format!("polygon #{i}"))
        })
        .collect()
}

pub fn evaluate<T: Coord>(set: &PolygonSet<T>, queries: &[[T; 2]]) -> ResultFile<T> {
    let results = queries
        .iter()
        .map(|&raw| {
            let q = Point::from(raw);
            QueryResult {
                point: raw,
                inside: set.iter().map(|p| p.contains_point(&q)).collect(),
            }
        })
        .collect();
    ResultFile { results }
}

/// Write pretty JSON, creating parent directories as needed.
pub fn write_json<S: Serialize>(path: &Path, value: &S) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
