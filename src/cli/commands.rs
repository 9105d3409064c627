//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::grid::{decode_payload, AllSlotsEnabled, Bank, EffectConfig, EffectGrid, CELL_COUNT};
use crate::schema::{Catalog, FxPlacement, ParamKind};

/// List the effect types selectable in a placement context.
pub fn list_effects(placement: &str, bank: &str) -> Result<()> {
    let placement = parse_placement(placement);
    let bank = parse_bank(bank);

    info!("Listing effect types for {} at bank {}", placement, bank);

    let catalog = Catalog::builtin();
    let types = catalog.legal_effect_types(placement, bank);

    println!("=== Effect Types ({} @ {}) ===", placement, bank);
    for effect_type in &types {
        println!("  {}", effect_type);
    }
    println!("{} types", types.len());

    Ok(())
}

/// Print the resolved parameter list for an effect type.
pub fn show_params(effect_type: &str) -> Result<()> {
    info!("Resolving parameters for: {}", effect_type);

    let catalog = Catalog::builtin();
    let params = catalog.effect_parameters(effect_type);

    if params.is_empty() {
        println!("Unknown effect type: {}", effect_type);
        println!("Use 'fxgrid effects' to list the catalog.");
        return Ok(());
    }

    println!("=== {} ===", effect_type);
    println!("{} parameters", params.len());
    println!();
    println!("{:<14} {:<26} DEFAULT", "NAME", "KIND");
    println!("{:-<60}", "");

    for param in &params {
        let default = if param.is_header() {
            "-".to_string()
        } else {
            param.default_value().to_string()
        };
        println!(
            "{:<14} {:<26} {}",
            param.name,
            kind_summary(&param.kind),
            default
        );
    }

    Ok(())
}

/// Decode a legacy payload file and summarize its records.
pub fn inspect(path: &Path) -> Result<()> {
    info!("Inspecting payload: {}", path.display());

    let payload = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records = decode_payload(&payload)?;

    println!("=== FxGrid Payload ===");
    println!("File: {}", path.display());
    println!("Records: {}", records.len());
    println!();

    for (i, record) in records.iter().enumerate() {
        let (fx_group, bank, slot) = record.coordinates();
        let sw = if record.sw { "on" } else { "off" };
        println!(
            "{:>3}  {}/{}/{}  {:<16} sw={:<4} {:<7?} {} params",
            i + 1,
            fx_group,
            bank,
            slot,
            record.effect_type,
            sw,
            record.sw_mode,
            record.parameters.len()
        );
    }

    let grid = EffectGrid::from_legacy_array(records);
    let default = EffectConfig::default();
    let customized = EffectGrid::addresses()
        .filter(|(g, b, s)| grid.get(*g, *b, *s).map_or(true, |c| *c != default))
        .count();

    println!();
    println!("Grid: {} cells, {} differ from default", CELL_COUNT, customized);

    Ok(())
}

/// Re-encode a legacy payload in canonical form.
pub fn normalize(path: &Path, output: Option<&Path>) -> Result<()> {
    info!("Normalizing payload: {}", path.display());

    let payload = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let grid = EffectGrid::from_payload(&payload)?;
    let normalized = grid.to_payload(&AllSlotsEnabled)?;

    match output {
        Some(out) => {
            fs::write(out, &normalized)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Normalized payload written to {}", out.display());
        }
        None => println!("{}", normalized),
    }

    Ok(())
}

fn kind_summary(kind: &ParamKind) -> String {
    match kind {
        ParamKind::Range { min, max, step, .. } => format!(
            "range {}..{} step {}",
            format_number(*min),
            format_number(*max),
            format_number(*step)
        ),
        ParamKind::Select { options, .. } => format!("select ({} options)", options.len()),
        ParamKind::Text { .. } => "header".to_string(),
        ParamKind::Combined { options, .. } => format!("combined ({} options)", options.len()),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// Unrecognized context values fall back to the widest choice set rather
// than failing; the schema layer never rejects a lookup.
fn parse_placement(raw: &str) -> FxPlacement {
    match raw {
        "input" => FxPlacement::Input,
        "track" => FxPlacement::Track,
        "input-track" | "inputTrack" => FxPlacement::InputTrack,
        _ => FxPlacement::Single,
    }
}

fn parse_bank(raw: &str) -> Bank {
    match raw.to_ascii_uppercase().as_str() {
        "B" => Bank::B,
        "C" => Bank::C,
        "D" => Bank::D,
        _ => Bank::A,
    }
}
