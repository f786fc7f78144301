/// Data layer: measurement input and the static preset table.
///
/// Architecture:
/// ```text
///   preset table ──┐
///                  ▼
///   ┌──────────────────┐
///   │ MeasurementForm  │  length / weight / ratio, clamped to bounds
///   └──────────────────┘
///            │
///            ▼
///   ┌──────────────────┐
///   │  FeatureVector   │  (length, weight, ratio), order fixed by the model
///   └──────────────────┘
/// ```

pub mod features;
pub mod presets;
