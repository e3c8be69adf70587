// File: crates/passchart-core/src/result.rs
// Summary: Benchmark result model (ResultSet of named passes over shared parameter labels).

use serde::{Deserialize, Serialize};

/// One benchmark test to chart: parameter labels on X, one series per pass.
///
/// The serde field names are camelCase. The short keys used by older result
/// files (`test`, `id`, `parameters`, `type`, `max`) are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    #[serde(alias = "test")]
    pub test_name: String,
    #[serde(alias = "id")]
    pub canvas_id: String,
    #[serde(alias = "parameters")]
    pub parameter_labels: Vec<String>,
    pub passes: Vec<Pass>,
    /// Y axis type; `"linear"` when absent.
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
    /// Fixed Y axis maximum; auto-scaled when absent.
    #[serde(default, alias = "max", skip_serializing_if = "Option::is_none")]
    pub axis_max: Option<f64>,
}

/// One named series of measurements. `None` entries are gaps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub name: String,
    pub results: Vec<Option<f64>>,
    pub color: String,
}

impl ResultSet {
    pub fn new(
        test_name: impl Into<String>,
        canvas_id: impl Into<String>,
        parameter_labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            canvas_id: canvas_id.into(),
            parameter_labels: parameter_labels.into_iter().map(Into::into).collect(),
            passes: Vec::new(),
            axis_type: None,
            axis_max: None,
        }
    }

    pub fn with_pass(mut self, pass: Pass) -> Self {
        self.passes.push(pass);
        self
    }

    pub fn with_axis_type(mut self, axis_type: impl Into<String>) -> Self {
        self.axis_type = Some(axis_type.into());
        self
    }

    pub fn with_axis_max(mut self, max: f64) -> Self {
        self.axis_max = Some(max);
        self
    }

    /// Passes whose result count differs from the label count, as
    /// `(pass name, results len)`. Diagnostic only; charts still render.
    pub fn length_mismatches(&self) -> Vec<(&str, usize)> {
        let want = self.parameter_labels.len();
        self.passes
            .iter()
            .filter(|p| p.results.len() != want)
            .map(|p| (p.name.as_str(), p.results.len()))
            .collect()
    }
}

impl Pass {
    /// Pass with every value present.
    pub fn new(name: impl Into<String>, color: impl Into<String>, results: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            results: results.into_iter().map(Some).collect(),
            color: color.into(),
        }
    }

    /// Pass whose values may contain gaps.
    pub fn with_gaps(name: impl Into<String>, color: impl Into<String>, results: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), results, color: color.into() }
    }
}
