//! Dictionary representations.
//!
//! Each geometry type converts to and from a flat JSON object keyed by
//! capitalized field names (`X`, `Y`, `Width`, `Height`, ...). Decoding never
//! fails loudly: missing or non-numeric keys produce `None`.

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

use super::{EdgeInsets, Offset, Point, Rect, Size};

/// A flat key-value map.
pub type Dict = JsonMap<String, JsonValue>;

/// Conversion to and from a dictionary representation.
pub trait MapRepr: Sized {
    /// Encode as a dictionary.
    fn to_map(&self) -> Dict;

    /// Decode from a dictionary, returning `None` for absent or malformed
    /// input.
    fn from_map(map: &Dict) -> Option<Self>;
}

/// Encode a number. Non-finite values have no JSON form and become null.
fn number(v: f64) -> JsonValue {
    JsonNumber::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
}

/// Read a numeric key.
fn read(map: &Dict, key: &str) -> Option<f64> {
    map.get(key)?.as_f64()
}

/// Build a dictionary from key/value pairs.
fn dict(pairs: &[(&str, f64)]) -> Dict {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), number(*v)))
        .collect()
}

impl MapRepr for Point {
    fn to_map(&self) -> Dict {
        dict(&[("X", self.x), ("Y", self.y)])
    }

    fn from_map(map: &Dict) -> Option<Self> {
        Some(Self::new(read(map, "X")?, read(map, "Y")?))
    }
}

impl MapRepr for Size {
    fn to_map(&self) -> Dict {
        dict(&[("Width", self.width), ("Height", self.height)])
    }

    fn from_map(map: &Dict) -> Option<Self> {
        Some(Self::new(read(map, "Width")?, read(map, "Height")?))
    }
}

impl MapRepr for Rect {
    /// The null rect's origin is infinite and is written as null.
    fn to_map(&self) -> Dict {
        let o = self.origin();
        let s = self.size();
        dict(&[
            ("X", o.x),
            ("Y", o.y),
            ("Width", s.width),
            ("Height", s.height),
        ])
    }

    fn from_map(map: &Dict) -> Option<Self> {
        let x = map.get("X")?;
        let y = map.get("Y")?;
        if x.is_null() || y.is_null() {
            return Some(Self::Null);
        }
        Some(Self::new(
            x.as_f64()?,
            y.as_f64()?,
            read(map, "Width")?,
            read(map, "Height")?,
        ))
    }
}

impl MapRepr for EdgeInsets {
    fn to_map(&self) -> Dict {
        dict(&[
            ("Top", self.top),
            ("Left", self.left),
            ("Bottom", self.bottom),
            ("Right", self.right),
        ])
    }

    fn from_map(map: &Dict) -> Option<Self> {
        Some(Self::new(
            read(map, "Top")?,
            read(map, "Left")?,
            read(map, "Bottom")?,
            read(map, "Right")?,
        ))
    }
}

impl MapRepr for Offset {
    fn to_map(&self) -> Dict {
        dict(&[("Horizontal", self.horizontal), ("Vertical", self.vertical)])
    }

    fn from_map(map: &Dict) -> Option<Self> {
        Some(Self::new(read(map, "Horizontal")?, read(map, "Vertical")?))
    }
}
