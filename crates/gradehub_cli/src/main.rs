//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradehub_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("gradehub_core ping={}", gradehub_core::ping());
    println!("gradehub_core version={}", gradehub_core::core_version());
    println!("gradehub_core classify(95)={}", gradehub_core::classify(95));
}
