// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Build script for the PixMob IR tester firmware
//!
//! Places `memory.x` where `cortex-m-rt` expects it and tells cargo when to
//! rebuild. The script also runs for host unit tests; the linker arguments
//! that consume `memory.x` are only set for the embedded target in
//! `.cargo/config.toml`.
//!
//! # Memory Layout
//! `memory.x` describes the RP2350A: 4 MB of XIP flash at `0x1000_0000`, the
//! 512 KB striped SRAM at `0x2000_0000`, and the two 4 KB banks SRAM8/SRAM9
//! right after it. It also places the picotool `.bi_entries` and the image
//! start/end blocks the boot ROM looks for.
//!
//! # Linker Integration
//! `-Tlink.x` (from `cortex-m-rt`) includes `memory.x`; `-Tdefmt.x` places the
//! defmt string table. Both are passed in `.cargo/config.toml`.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Linker script copied next to the build artifacts.
const MEMORY_X: &str = "memory.x";

/// Copies `memory.x` into `OUT_DIR` and adds it to the linker search path.
///
/// # Errors
///
/// Fails the build if `OUT_DIR` is unset or `memory.x` cannot be written.
fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;
    fs::write(out_dir.join(MEMORY_X), include_bytes!("memory.x"))?;

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={MEMORY_X}");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
