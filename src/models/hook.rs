use serde::Deserialize;

// A missing key and an explicit `null` both mean "not provided".
#[derive(Deserialize, Debug, Default, Clone)]
pub struct HookWorkspace {
    #[serde(default)]
    pub current_dir: Option<String>,
}

/// Session descriptor piped in by the assistant shell on every refresh.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct HookJson {
    #[serde(default)]
    pub workspace: HookWorkspace,
    #[serde(default)]
    pub transcript_path: Option<String>,
}

impl HookJson {
    pub fn current_dir(&self) -> &str {
        self.workspace.current_dir.as_deref().unwrap_or("")
    }

    pub fn transcript_path(&self) -> &str {
        self.transcript_path.as_deref().unwrap_or("")
    }
}
