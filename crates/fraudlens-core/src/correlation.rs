//! Sample data for the feature correlation heatmap.
//!
//! The heatmap is illustrative: a fresh random sample is drawn after every
//! successful prediction round trip.

use rand::Rng;

use crate::batch::round2;
use crate::models::correlation::CorrelationMatrix;

pub const HEATMAP_FEATURES: usize = 10;

/// Draw a `HEATMAP_FEATURES` square matrix labelled `V1..V10`, each cell
/// uniform in `[0, 1)` rounded to two decimals.
pub fn sample_matrix<R: Rng>(rng: &mut R) -> CorrelationMatrix {
    let labels = (1..=HEATMAP_FEATURES).map(|n| format!("V{n}")).collect();
    let values = (0..HEATMAP_FEATURES)
        .map(|_| {
            (0..HEATMAP_FEATURES)
                .map(|_| round2(rng.r#gen::<f64>()))
                .collect()
        })
        .collect();

    CorrelationMatrix { labels, values }
}
