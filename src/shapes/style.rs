use std::collections::BTreeMap;

/// Presentation attributes forwarded verbatim to the serializer.
///
/// Values are stored as text; `None`-like values are written as `"none"`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    attrs: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solid fill, no stroke.
    pub fn filled(color: impl Into<String>) -> Self {
        Self::new().with("fill", color).with("stroke", "none")
    }

    /// Stroke only, no fill.
    pub fn stroked(color: impl Into<String>, width: f64) -> Self {
        Self::new()
            .with("fill", "none")
            .with("stroke", color)
            .with("stroke-width", width.to_string())
    }

    pub fn filled_stroked(fill: impl Into<String>, stroke: impl Into<String>, width: f64) -> Self {
        Self::new()
            .with("fill", fill)
            .with("stroke", stroke)
            .with("stroke-width", width.to_string())
    }

    pub fn font(family: impl Into<String>, size: f64, fill: impl Into<String>) -> Self {
        Self::new()
            .with("font-family", family)
            .with("font-size", size.to_string())
            .with("fill", fill)
            .with("stroke", "none")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    pub fn dash_array(self, lengths: &[f64]) -> Self {
        let joined = lengths
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.with("stroke-dasharray", joined)
    }

    pub fn line_cap(self, cap: impl Into<String>) -> Self {
        self.with("stroke-linecap", cap)
    }

    pub fn line_join(self, join: impl Into<String>) -> Self {
        self.with("stroke-linejoin", join)
    }

    pub fn even_odd(self) -> Self {
        self.with("fill-rule", "evenodd")
    }

    pub fn font_weight(self, weight: impl Into<String>) -> Self {
        self.with("font-weight", weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
