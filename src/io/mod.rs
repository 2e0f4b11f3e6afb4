use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{InterchangeError, Result};
use crate::geometry::{Gateway, Point};
use crate::operations::PathResult;

const DEFAULT_START: &str = "FROM";
const DEFAULT_END: &str = "TO";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PointRecord {
    label: String,
    x: f64,
    y: f64,
}

impl From<PointRecord> for Point {
    fn from(record: PointRecord) -> Self {
        Point::new(record.label, record.x, record.y)
    }
}

impl From<&Point> for PointRecord {
    fn from(point: &Point) -> Self {
        Self {
            label: point.label.clone(),
            x: point.x(),
            y: point.y(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    points: Vec<PointRecord>,
    #[serde(default = "default_start")]
    start: String,
    #[serde(default = "default_end")]
    end: String,
}

fn default_start() -> String {
    DEFAULT_START.to_owned()
}

fn default_end() -> String {
    DEFAULT_END.to_owned()
}

/// A parsed routing query.
///
/// Read from JSON of the shape
///
/// ```json
/// { "points": [ { "label": "A", "x": 1.0, "y": 2.0 } ], "start": "FROM", "end": "TO" }
/// ```
///
/// Every point other than the start and end becomes a gateway endpoint; see
/// [`pair_gateways`].
#[derive(Debug, Clone)]
pub struct RouteInput {
    /// Every point in the input, in file order.
    pub points: Vec<Point>,
    pub gateways: Vec<Gateway>,
    pub start: Point,
    pub end: Point,
}

impl RouteInput {
    /// Parses a route description from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] for malformed JSON and
    /// [`InterchangeError::UnknownLabel`] if the start or end label names no point.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: InputRecord = serde_json::from_str(json).map_err(InterchangeError::from)?;
        let points: Vec<Point> = record.points.into_iter().map(Point::from).collect();

        let start = find_point(&points, &record.start)?;
        let end = find_point(&points, &record.end)?;
        let endpoints: Vec<Point> = points
            .iter()
            .filter(|p| p.label != start.label && p.label != end.label)
            .cloned()
            .collect();
        let gateways = pair_gateways(endpoints);

        debug!(
            points = points.len(),
            gateways = gateways.len(),
            start = %start.label,
            end = %end.label,
            "route input parsed"
        );
        Ok(Self {
            points,
            gateways,
            start,
            end,
        })
    }

    /// Reads and parses a route description from a file.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`RouteInput::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| InterchangeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

fn find_point(points: &[Point], label: &str) -> std::result::Result<Point, InterchangeError> {
    points
        .iter()
        .find(|p| p.label == label)
        .cloned()
        .ok_or_else(|| InterchangeError::UnknownLabel(label.to_owned()))
}

/// Pairs gateway endpoints into ordered gateways.
///
/// Points are sorted by label; consecutive pairs `(0, 1)`, `(2, 3)`, … become
/// gateways `0`, `1`, … with the first of each pair as `left`. A trailing
/// unpaired point is dropped.
#[must_use]
pub fn pair_gateways(mut points: Vec<Point>) -> Vec<Gateway> {
    points.sort_by(|a, b| a.label.cmp(&b.label));
    if points.len() % 2 == 1 {
        if let Some(last) = points.last() {
            warn!(label = %last.label, "odd number of gateway points; last one ignored");
        }
    }

    (0u32..)
        .zip(points.chunks_exact(2))
        .map(|(order, pair)| Gateway::new(pair[0].clone(), pair[1].clone(), order))
        .collect()
}

#[derive(Debug, Serialize)]
struct OutputRecord {
    path: Vec<PointRecord>,
    total_distance: f64,
}

/// JSON view of a solved path.
pub struct PathExport<'a> {
    result: &'a PathResult,
}

impl<'a> PathExport<'a> {
    #[must_use]
    pub fn new(result: &'a PathResult) -> Self {
        Self { result }
    }

    /// Renders the path as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        let record = OutputRecord {
            path: self.result.path.iter().map(PointRecord::from).collect(),
            total_distance: self.result.total_distance,
        };
        Ok(serde_json::to_string_pretty(&record).map_err(InterchangeError::from)?)
    }

    /// Writes the JSON rendering to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Io`] if the file cannot be written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| InterchangeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "path exported");
        Ok(())
    }
}
