// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for the hardware RNG.

mod mock_hardware_rng;

pub use mock_hardware_rng::{MockHardwareRng, MockHardwareRngBehaviour};
