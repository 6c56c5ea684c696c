use std::path::Path;

use crate::engine::TaskModel;
use crate::error::EngineError;

/// Write a finalized model as pretty JSON for the external renderer.
pub fn save_model(model: &TaskModel, path: &Path) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(model).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a previously written model snapshot.
pub fn load_model(path: &Path) -> Result<TaskModel, EngineError> {
    let json = std::fs::read_to_string(path)?;
    let model = serde_json::from_str(&json).map_err(std::io::Error::from)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build_model, RawRow, ViewOptions};
    use crate::model::Granularity;
    use chrono::NaiveDate;

    #[test]
    fn snapshot_round_trips() {
        let rows = vec![RawRow {
            name: "Design".into(),
            project: "Alpha".into(),
            kind: "sub".into(),
            start: "2025-01-01".into(),
            finish: "2025-02-01".into(),
            status: "In process".into(),
            ..Default::default()
        }];
        let options = ViewOptions {
            granularity: Granularity::Quarterly,
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let model = build_model(&rows, &options, today);

        let path = std::env::temp_dir().join("model_snapshot.json");
        save_model(&model, &path).unwrap();
        let loaded = load_model(&path).unwrap();

        assert_eq!(loaded.tasks.len(), model.tasks.len());
        assert_eq!(loaded.span, model.span);
        assert_eq!(loaded.ticks, model.ticks);
        assert_eq!(loaded.tasks[0].progress, 0.5);
    }
}
