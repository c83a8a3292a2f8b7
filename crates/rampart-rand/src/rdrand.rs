// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! x86_64 `RDRAND`.
//!
//! `RDRAND` reads from the processor's DRBG, which is reseeded from the
//! on-die entropy source. It sets CF on success and may transiently clear it
//! when the DRBG is drained; callers decide whether to retry.

use crate::traits::HardwareRng;

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(x86_64_rdrand_cpuid, "rdrand");

/// Handle to the `RDRAND` instruction.
///
/// Only obtainable through [`Rdrand::detect`], so holding one proves the CPU
/// supports the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rdrand {
    _detected: (),
}

impl Rdrand {
    /// Returns a handle if the CPU advertises `RDRAND` through CPUID.
    ///
    /// Always `None` on targets other than x86_64.
    pub fn detect() -> Option<Self> {
        #[cfg(target_arch = "x86_64")]
        {
            if x86_64_rdrand_cpuid::get() {
                return Some(Self { _detected: () });
            }
        }

        log::debug!("RDRAND not available on this CPU");
        None
    }
}

impl HardwareRng for Rdrand {
    #[cfg(target_arch = "x86_64")]
    #[inline]
    fn rdrand64(&self) -> (u64, bool) {
        let value: u64;
        let success: u8;

        // SAFETY: `Rdrand` exists only after CPUID reported RDRAND support.
        unsafe {
            core::arch::asm!(
                "rdrand {value}",
                "setc {success}",
                value = out(reg) value,
                success = out(reg_byte) success,
                options(nomem, nostack)
            );
        }

        (value, success != 0)
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn rdrand64(&self) -> (u64, bool) {
        // Unreachable: detect() never returns a handle here
        (0, false)
    }
}
