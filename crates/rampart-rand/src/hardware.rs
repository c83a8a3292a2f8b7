// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Validated entropy on top of a raw hardware RNG.

use core::num::NonZeroUsize;

use rampart_zero::ZeroizingMutGuard;

use crate::error::EntropyError;
use crate::rdrand::Rdrand;
use crate::traits::{EntropySource, HardwareRng};

const WORD_LEN: usize = core::mem::size_of::<u64>();

/// How often a transient instruction failure is retried while filling one word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Spin until the instruction succeeds.
    #[default]
    Unbounded,
    /// Give up with [`EntropyError::EntropyExhausted`] after this many failed attempts.
    Bounded(NonZeroUsize),
}

/// A fully-set or fully-cleared word is a stuck-at fault, never entropy.
#[inline(always)]
fn is_stuck(value: u64) -> bool {
    value == 0 || value == u64::MAX
}

/// Entropy source backed by a hardware RNG.
///
/// Every successful draw is checked for the stuck-at patterns `0` and
/// `u64::MAX`; either one fails the whole request with
/// [`EntropyError::HardwareUnavailable`].
#[derive(Debug)]
pub struct HardwareEntropySource<R = Rdrand>
where
    R: HardwareRng,
{
    rng: R,
    retry: RetryPolicy,
}

impl HardwareEntropySource<Rdrand> {
    /// Source over `RDRAND` with [`RetryPolicy::Unbounded`].
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::HardwareUnavailable`] if the CPU lacks `RDRAND`.
    pub fn new() -> Result<Self, EntropyError> {
        Rdrand::detect()
            .map(Self::from_rng)
            .ok_or(EntropyError::HardwareUnavailable)
    }
}

impl<R> HardwareEntropySource<R>
where
    R: HardwareRng,
{
    /// Source over an arbitrary hardware RNG with [`RetryPolicy::Unbounded`].
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the retry policy used by bulk fills.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Current retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// The underlying hardware RNG.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Draws a single word with no retry.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::HardwareUnavailable`] if the instruction reports
    /// failure or yields `0` / `u64::MAX`.
    pub fn draw_u64(&self) -> Result<u64, EntropyError> {
        let (value, success) = self.rng.rdrand64();

        if !success {
            log::debug!("hardware RNG reported failure on single draw");
            return Err(EntropyError::HardwareUnavailable);
        }

        if is_stuck(value) {
            log::warn!("hardware RNG returned a stuck-at value");
            return Err(EntropyError::HardwareUnavailable);
        }

        Ok(value)
    }

    /// Fills `dest`, whose length must be a multiple of 8, one word at a time.
    ///
    /// Words are written in native byte order. A zero-length `dest` succeeds
    /// without touching the hardware. Transient failures are retried according
    /// to the [`RetryPolicy`].
    ///
    /// # Errors
    ///
    /// - [`EntropyError::UnalignedLength`] if `dest.len() % 8 != 0`
    /// - [`EntropyError::HardwareUnavailable`] on a stuck-at value
    /// - [`EntropyError::EntropyExhausted`] if a bounded retry budget runs out
    ///
    /// On error the contents of `dest` are unspecified.
    pub fn fill_multiple_of_8(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.len() % WORD_LEN != 0 {
            log::debug!(
                "bulk fill of {} bytes is not a multiple of {}",
                dest.len(),
                WORD_LEN
            );
            return Err(EntropyError::UnalignedLength);
        }

        for chunk in dest.chunks_exact_mut(WORD_LEN) {
            let mut word = self.draw_retrying()?;
            let mut bytes = word.to_ne_bytes();

            let _word_guard = ZeroizingMutGuard::from(&mut word);
            let bytes_guard = ZeroizingMutGuard::from(&mut bytes);

            chunk.copy_from_slice(&bytes_guard[..]);
        }

        Ok(())
    }

    fn draw_retrying(&self) -> Result<u64, EntropyError> {
        let mut failures = 0usize;

        loop {
            let (value, success) = self.rng.rdrand64();

            if success {
                if is_stuck(value) {
                    log::warn!("hardware RNG returned a stuck-at value, aborting fill");
                    return Err(EntropyError::HardwareUnavailable);
                }

                return Ok(value);
            }

            failures = failures.saturating_add(1);

            if let RetryPolicy::Bounded(max) = self.retry {
                if failures >= max.get() {
                    log::warn!("hardware RNG failed {} consecutive draws", failures);
                    return Err(EntropyError::EntropyExhausted);
                }
            }

            core::hint::spin_loop();
        }
    }
}

impl<R> EntropySource for HardwareEntropySource<R>
where
    R: HardwareRng,
{
    /// Bulk-fills the 8-aligned prefix, then covers the remaining 1..=7 bytes
    /// with one more word drawn under the same [`RetryPolicy`]; its unused
    /// bytes are wiped.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let aligned = dest.len() - dest.len() % WORD_LEN;
        let (head, tail) = dest.split_at_mut(aligned);

        self.fill_multiple_of_8(head)?;

        if !tail.is_empty() {
            let mut word = self.draw_retrying()?;
            let mut bytes = word.to_ne_bytes();

            let _word_guard = ZeroizingMutGuard::from(&mut word);
            let bytes_guard = ZeroizingMutGuard::from(&mut bytes);

            tail.copy_from_slice(&bytes_guard[..tail.len()]);
        }

        Ok(())
    }
}
