/// Directory under `assets/` holding the scene manifest.
pub const RELATIVE_MANIFEST_PATH: &'static str = "scene";
