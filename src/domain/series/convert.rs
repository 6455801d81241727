//! Conversion: SeriesResponse → Series (band extraction).

use super::wire::SeriesResponse;
use super::{Band, Series};

impl From<SeriesResponse> for Series {
    fn from(source: SeriesResponse) -> Self {
        let n = source.timestamps.len();

        let mut bands = Vec::new();
        for (name, value) in source.values {
            let Some(raw) = value.as_array() else {
                // Scalar extras next to the arrays are not bands.
                continue;
            };
            if raw.len() != n {
                tracing::warn!(
                    band = %name,
                    len = raw.len(),
                    expected = n,
                    "skipping band with mismatched length"
                );
                continue;
            }

            let mut samples = Vec::with_capacity(n);
            let mut numeric = true;
            for v in raw {
                match v {
                    serde_json::Value::Null => samples.push(None),
                    serde_json::Value::Number(num) => {
                        samples.push(num.as_f64().filter(|x| x.is_finite()));
                    }
                    _ => {
                        numeric = false;
                        break;
                    }
                }
            }
            if !numeric {
                tracing::warn!(band = %name, "skipping non-numeric band");
                continue;
            }

            bands.push(Band {
                name,
                values: samples,
            });
        }

        Series {
            item_id: source.item_id,
            timestep_seconds: source.timestep_seconds,
            start_ts: source.start_ts,
            end_ts: source.end_ts,
            timestamps: source.timestamps,
            bands,
        }
    }
}
