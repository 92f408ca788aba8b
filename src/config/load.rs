use anyhow::{Context, Result};

use super::types::SheetLayout;

/// Layout of the bundled Cisco icon sprite sheet.
const BUILTIN_LAYOUT: &str = include_str!("../../layouts/cisco-icons.json");

impl SheetLayout {
    /// Parse and validate a layout from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        let layout: SheetLayout =
            serde_json::from_str(content).context("failed to parse sheet layout")?;
        layout.validate()?;
        Ok(layout)
    }

    /// The layout compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LAYOUT).context("built-in layout is invalid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;

    #[test]
    fn test_builtin_layout() {
        let layout = SheetLayout::builtin().unwrap();

        assert_eq!(layout.cell_width, 128);
        assert_eq!(layout.padding_left, 8);
        assert_eq!(layout.padding_right, 8);
        assert_eq!(layout.columns(), 8);
        assert_eq!(layout.rows.len(), 6);
        assert_eq!(layout.expected_count(), 42);
        assert_eq!(layout.names[0][0].as_deref(), Some("meetingplace-express"));
        assert_eq!(layout.names[4][7], None);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let layout = SheetLayout::from_json(
            r#"{ "rows": [{ "top": 50, "bottom": 100 }], "names": [["hdtv", null]] }"#,
        )
        .unwrap();

        assert_eq!(layout.version, 1);
        assert_eq!(layout.cell_width, 128);
        assert_eq!(layout.names, vec![vec![Some("hdtv".to_string()), None]]);
    }

    #[test]
    fn test_from_json_rejects_invalid_layout() {
        let err = SheetLayout::from_json(
            r#"{ "cell_width": 10, "padding_left": 5, "padding_right": 5 }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        assert!(SheetLayout::from_json("{ \"rows\": 3 }").is_err());
    }
}
