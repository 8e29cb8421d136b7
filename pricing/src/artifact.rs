use std::fs;
use std::io;
use std::path::Path;

use crate::model::LinearModel;

/// Default location of the serialized model, relative to the working
/// directory.
pub const ARTIFACT_PATH: &str = "fair_price_model.json";

/// Writes the fitted model as pretty JSON.
///
/// The artifact exists for inspection and reuse only; nothing reads it
/// back on the serving path, and callers treat failures as non-fatal.
///
/// # Errors
/// Returns the underlying I/O or serialization error.
pub fn write_model(path: impl AsRef<Path>, model: &LinearModel) -> io::Result<()> {
    let json = serde_json::to_string_pretty(model).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Reads a model back from a JSON artifact.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_model(path: impl AsRef<Path>) -> io::Result<LinearModel> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_preserves_the_model() {
        let model = LinearModel::new(12_345.6, vec![1_200.0, 40_000.0, -9_000.0]);
        let path = std::env::temp_dir().join("fair_price_artifact_test.json");

        write_model(&path, &model).unwrap();
        let back = read_model(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(model, back);
    }

    #[test]
    fn read_rejects_garbage() {
        let path = std::env::temp_dir().join("fair_price_artifact_garbage.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_model(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
