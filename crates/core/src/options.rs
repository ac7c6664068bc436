use serde::{Deserialize, Serialize};

/// Renderer configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit `import type { ... }` instead of plain named imports
    pub type_only_imports: bool,
}
