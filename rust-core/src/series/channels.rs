//! Named instrument channels sharing one time axis
//!
//! Each channel is an independent series, so filtering fans out one
//! channel per rayon task with a single shared FFT plan.

use crate::error::FilterError;
use crate::filters::lanczos::LanczosFilter;
use crate::filters::spectral::SpectralFilter;
use ndarray::{Array2, ArrayView1, Axis};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Equal-length channels stored as a (channels, samples) matrix
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    names: Vec<String>,
    data: Array2<f64>,
    dt_days: f64,
}

impl ChannelSet {
    /// Build a set from `(name, samples)` columns sampled every `dt_days`
    pub fn from_columns<I, S>(dt_days: f64, columns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (name, samples) in columns {
            let name = name.into();
            if names.contains(&name) {
                return Err(FilterError::DuplicateChannel { name });
            }
            if let Some(first) = rows.first() {
                if samples.len() != first.len() {
                    return Err(FilterError::RaggedChannel {
                        name,
                        expected: first.len(),
                        actual: samples.len(),
                    });
                }
            }
            names.push(name);
            rows.push(samples);
        }

        let n_samples = rows.first().map_or(0, Vec::len);
        let mut data = Array2::zeros((rows.len(), n_samples));
        for (mut target, row) in data.axis_iter_mut(Axis(0)).zip(rows.iter()) {
            target.assign(&ArrayView1::from(row.as_slice()));
        }

        Ok(Self {
            names,
            data,
            dt_days,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn dt_days(&self) -> f64 {
        self.dt_days
    }

    pub fn num_channels(&self) -> usize {
        self.data.nrows()
    }

    pub fn num_samples(&self) -> usize {
        self.data.ncols()
    }

    /// Underlying (channels, samples) matrix
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn channel(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.data.row(i))
    }

    /// Low-pass every channel; the first failure aborts the whole set
    pub fn lowpass(&self, filter: &LanczosFilter) -> Result<ChannelSet, FilterError> {
        let results = self.filter_rows(filter)?;
        let columns = self
            .names
            .iter()
            .cloned()
            .zip(results)
            .map(|(name, result)| result.map(|filtered| (name, filtered)))
            .collect::<Result<Vec<_>, _>>()?;
        ChannelSet::from_columns(self.dt_days, columns)
    }

    /// Low-pass every channel, skipping the ones that fail
    ///
    /// # Returns
    /// The filtered channels plus each skipped channel with its error
    pub fn lowpass_lenient(
        &self,
        filter: &LanczosFilter,
    ) -> Result<(ChannelSet, Vec<(String, FilterError)>), FilterError> {
        let results = self.filter_rows(filter)?;

        let mut kept = Vec::new();
        let mut skipped = Vec::new();
        for (name, result) in self.names.iter().cloned().zip(results) {
            match result {
                Ok(filtered) => kept.push((name, filtered)),
                Err(err) => {
                    log::warn!("skipping channel `{}`: {}", name, err);
                    skipped.push((name, err));
                }
            }
        }

        Ok((ChannelSet::from_columns(self.dt_days, kept)?, skipped))
    }

    /// Columns keyed by channel name, for handing to an archive writer
    pub fn into_columns(self) -> BTreeMap<String, Vec<f64>> {
        self.names
            .into_iter()
            .zip(self.data.axis_iter(Axis(0)))
            .map(|(name, row)| (name, row.to_vec()))
            .collect()
    }

    fn filter_rows(
        &self,
        filter: &LanczosFilter,
    ) -> Result<Vec<Result<Vec<f64>, FilterError>>, FilterError> {
        let plan = SpectralFilter::new(self.num_samples())?;
        let dt_days = self.dt_days;

        log::debug!(
            "filtering {} channels of {} samples",
            self.num_channels(),
            self.num_samples()
        );

        let results = (0..self.num_channels())
            .into_par_iter()
            .map(|c| {
                let series = self.data.row(c).to_vec();
                filter.validate(&series, dt_days)?;
                filter
                    .run(&plan, &series, dt_days)
                    .map(|report| report.filtered)
            })
            .collect();

        Ok(results)
    }
}
