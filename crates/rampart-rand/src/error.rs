// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when drawing hardware entropy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The instruction is missing, reported failure, or returned a stuck-at value.
    #[error("hardware entropy unavailable")]
    HardwareUnavailable,

    /// The retry budget for a single word was spent without a successful draw.
    #[error("hardware entropy retry budget exhausted")]
    EntropyExhausted,

    /// Bulk fill called with a length that is not a multiple of 8.
    #[error("destination length is not a multiple of 8")]
    UnalignedLength,
}
