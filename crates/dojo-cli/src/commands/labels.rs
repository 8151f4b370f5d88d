//! Labels command implementation.

use anyhow::Result;
use dojo_core::ConditionType;

/// Print every known condition code with its display label
pub fn run() -> Result<()> {
    for ty in ConditionType::known() {
        let lower = if ty.is_lower_better() { " (lower is better)" } else { "" };
        println!("{:<3} {}{}", ty.code(), ty.label(), lower);
    }
    Ok(())
}
