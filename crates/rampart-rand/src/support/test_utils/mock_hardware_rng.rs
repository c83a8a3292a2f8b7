// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::traits::HardwareRng;

/// Behaviour of [`MockHardwareRng`]. Draw numbers are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockHardwareRngBehaviour {
    /// Every draw succeeds with a deterministic, non-stuck value.
    None,
    /// Every draw reports failure.
    FailAlways,
    /// Every draw succeeds with the given value.
    StuckAt(u64),
    /// The first N draws report failure, later ones succeed.
    FailFirstN(usize),
    /// Draw N succeeds with the given value, the others behave as `None`.
    StuckAtNthDraw(usize, u64),
}

/// Scripted [`HardwareRng`] counting its draws.
#[derive(Debug)]
pub struct MockHardwareRng {
    behaviour: MockHardwareRngBehaviour,
    draw_count: Cell<usize>,
}

impl MockHardwareRng {
    /// Creates a new mock with the specified behavior.
    pub fn new(behaviour: MockHardwareRngBehaviour) -> Self {
        Self {
            behaviour,
            draw_count: Cell::new(0),
        }
    }

    /// The value a healthy draw number `n` returns.
    pub fn healthy_value(n: usize) -> u64 {
        (n as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockHardwareRngBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the draw counter.
    pub fn reset_count(&self) {
        self.draw_count.set(0);
    }

    /// Returns the number of draws so far.
    pub fn call_count(&self) -> usize {
        self.draw_count.get()
    }
}

impl HardwareRng for MockHardwareRng {
    fn rdrand64(&self) -> (u64, bool) {
        let n = self.draw_count.get() + 1;
        self.draw_count.set(n);

        match self.behaviour {
            MockHardwareRngBehaviour::None => (Self::healthy_value(n), true),
            MockHardwareRngBehaviour::FailAlways => (0, false),
            MockHardwareRngBehaviour::StuckAt(value) => (value, true),
            MockHardwareRngBehaviour::FailFirstN(k) if n <= k => (0, false),
            MockHardwareRngBehaviour::FailFirstN(_) => (Self::healthy_value(n), true),
            MockHardwareRngBehaviour::StuckAtNthDraw(k, value) if n == k => (value, true),
            MockHardwareRngBehaviour::StuckAtNthDraw(..) => (Self::healthy_value(n), true),
        }
    }
}
