use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use skirmish::api::{builtin_scenario, parse_scenario, Scenario, ScenarioFormat};

/// Reads a text file, honouring a UTF-8/UTF-16 BOM if present.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

/// A scenario from `--scenario <file>` or `--builtin <id>`; the file wins.
pub fn resolve_scenario(file: Option<&Path>, builtin: &str) -> Result<Scenario> {
    match file {
        Some(path) => {
            let text = read_text_auto(path)?;
            parse_scenario(&text, ScenarioFormat::from_path(path))
                .with_context(|| format!("invalid scenario: {}", path.display()))
        }
        None if builtin.is_empty() => bail!("no scenario given"),
        None => builtin_scenario(builtin),
    }
}
