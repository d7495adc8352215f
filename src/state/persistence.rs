use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::state::NutritionState;

/// Load tracking state from a JSON file.
///
/// A missing file is a first run and yields the default state.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<NutritionState> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no state file, starting fresh");
        return Ok(NutritionState::default());
    }

    let content = fs::read_to_string(path)?;
    let state: NutritionState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save tracking state as pretty-printed JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &NutritionState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved state");
    Ok(())
}
