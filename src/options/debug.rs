use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Developer-only debug toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the live color panel (web builds).
    #[schemars(title = "Show Panel")]
    pub show_panel: bool,
}
