//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lekh_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from any UI
    // shell integration.
    println!("lekh_core ping={}", lekh_core::ping());
    println!("lekh_core version={}", lekh_core::core_version());
}
