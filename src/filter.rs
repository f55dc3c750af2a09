//! The rotating time-window filter.
//!
//! An ordered ring of `duration + 1` Bloom slices, each covering one time
//! unit (hour or day). `cursor` marks the oldest live slice and
//! `window_start` the start of its window, so the ring covers the half-open
//! interval `[window_start, window_start + len * unit_seconds)`. Rotation is
//! lazy: every `add` first clears slices whose window has fully elapsed,
//! there is no background timer.

use crate::bloom::{ApproximateSet, BitVectorBloom};
use crate::clock::{Clock, SystemClock};
use crate::config::{ExpiryUnit, RotatingFilterConfig, RotatingFilterConfigBuilder};
use crate::decoder::TokenDecoder;
use crate::error::Result;
use tracing::{debug, warn};

pub struct RotatingWindowFilter<D, C = SystemClock> {
    slices: Vec<BitVectorBloom>,
    unit_seconds: u64,
    duration: usize,
    cursor: usize,
    window_start: u64,
    decoder: D,
    clock: C,
}

impl<D: TokenDecoder> RotatingWindowFilter<D, SystemClock> {
    /// Create a filter sized for `count` tokens over the whole retention
    /// window at the given false positive rate. The ring holds
    /// `duration + 1` slices of one `unit` each.
    pub fn create_optimal(
        count: usize,
        error_rate: f64,
        unit: ExpiryUnit,
        duration: usize,
        decoder: D,
    ) -> Result<Self> {
        let config = RotatingFilterConfigBuilder::default()
            .capacity(count)
            .false_positive_rate(error_rate)
            .unit(unit)
            .duration(duration)
            .build()
            .map_err(|e| e.to_string())?;
        Self::new(config, decoder)
    }

    pub fn new(config: RotatingFilterConfig, decoder: D) -> Result<Self> {
        Self::with_clock(config, decoder, SystemClock)
    }
}

impl<D: TokenDecoder, C: Clock> RotatingWindowFilter<D, C> {
    /// Construction path with an injected clock, used by tests to drive
    /// rotation synthetically.
    pub fn with_clock(
        config: RotatingFilterConfig,
        decoder: D,
        clock: C,
    ) -> Result<Self> {
        config.validate()?;

        let capacity_per_slice = config.capacity_per_slice();
        let slices = (0..=config.duration)
            .map(|_| {
                BitVectorBloom::new(
                    capacity_per_slice,
                    config.false_positive_rate,
                    config.hash_function,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let window_start = clock.now_seconds();

        Ok(Self {
            slices,
            unit_seconds: config.unit.seconds(),
            duration: config.duration,
            cursor: 0,
            window_start,
            decoder,
            clock,
        })
    }

    /// Expire slices whose entire window precedes `now`.
    ///
    /// Elapsed time beyond the full ring span clears every slice at once,
    /// so catch-up work after an idle gap is bounded by the ring length,
    /// not by the length of the gap. A clock that moved backwards
    /// (`now < window_start`) freezes rotation until it catches up.
    fn rotate(&mut self, now: u64) -> Result<()> {
        if now < self.window_start {
            debug!(
                now,
                window_start = self.window_start,
                "clock moved backwards, skipping rotation"
            );
            return Ok(());
        }

        let elapsed_units = (now - self.window_start) / self.unit_seconds;
        if elapsed_units == 0 {
            return Ok(());
        }

        let len = self.slices.len();
        if elapsed_units >= len as u64 {
            for slice in &mut self.slices {
                slice.clear()?;
            }
            self.cursor =
                (self.cursor + (elapsed_units % len as u64) as usize) % len;
            self.window_start += elapsed_units * self.unit_seconds;
            debug!(elapsed_units, "idle gap exceeded ring span, cleared all slices");
        } else {
            for _ in 0..elapsed_units {
                self.slices[self.cursor].clear()?;
                self.cursor = (self.cursor + 1) % len;
                self.window_start += self.unit_seconds;
            }
            debug!(elapsed_units, cursor = self.cursor, "rotated ring");
        }

        Ok(())
    }

    /// Record a token until its expiration.
    ///
    /// Tokens without a usable expiration, or already expired, are absorbed
    /// as a no-op with a warning. Tokens expiring beyond the filter's
    /// horizon are clamped into the newest slice, so they are forgotten at
    /// the horizon rather than at their true expiry.
    pub fn add(&mut self, token: &str) -> Result<()> {
        let now = self.clock.now_seconds();
        self.rotate(now)?;

        let Some(expiration) = self.decoder.decode(token) else {
            warn!("token has no usable expiration, skipping");
            return Ok(());
        };
        if expiration <= now {
            warn!(expiration, now, "token already expired, skipping");
            return Ok(());
        }

        // window_start can still exceed expiration under the frozen-clock
        // policy; saturate into the oldest slice in that case.
        let mut distance_units = (expiration.saturating_sub(self.window_start)
            / self.unit_seconds) as usize;
        if distance_units > self.duration {
            warn!(
                expiration,
                horizon_seconds = self.horizon_seconds(),
                "token outlives the retention horizon, clamping"
            );
            distance_units = self.duration;
        }

        let position = (self.cursor + distance_units) % self.slices.len();
        self.slices[position].add(token.as_bytes())
    }

    /// Check whether a token was seen and is still within the window.
    /// Read-only: does not rotate the ring.
    pub fn has(&self, token: &str) -> Result<bool> {
        for slice in &self.slices {
            if slice.contains(token.as_bytes())? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Wipe membership data from every slice. The ring's time alignment
    /// (`cursor`, `window_start`) is preserved.
    pub fn clear(&mut self) -> Result<()> {
        for slice in &mut self.slices {
            slice.clear()?;
        }
        Ok(())
    }

    pub fn num_slices(&self) -> usize {
        self.slices.len()
    }

    pub fn unit_seconds(&self) -> u64 {
        self.unit_seconds
    }

    /// Maximum future expiration distance representable, in seconds beyond
    /// the current window start.
    pub fn horizon_seconds(&self) -> u64 {
        self.duration as u64 * self.unit_seconds
    }

    pub fn window_start(&self) -> u64 {
        self.window_start
    }

    pub fn estimated_count(&self) -> usize {
        self.slices.iter().map(|s| s.estimated_count()).sum()
    }
}

impl<D, C> std::fmt::Debug for RotatingWindowFilter<D, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RotatingWindowFilter {{ slices: {}, unit_seconds: {}, cursor: {}, window_start: {} }}",
            self.slices.len(),
            self.unit_seconds,
            self.cursor,
            self.window_start
        )
    }
}
