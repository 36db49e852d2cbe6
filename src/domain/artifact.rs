pub const PRIMARY_ARTIFACT: &str = "resultFinal.txt";
pub const RESTORED_ARTIFACT: &str = "lat.restored.txt";

/// Names of the result files requested from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub primary: String,
    pub restored: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            primary: PRIMARY_ARTIFACT.to_string(),
            restored: RESTORED_ARTIFACT.to_string(),
        }
    }
}
