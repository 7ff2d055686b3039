//! JSON layout files.
//!
//! ```json
//! {
//!   "Width": 1000,
//!   "Height": 800,
//!   "Seats": [[{"Width": 50, "Height": 50, "PositionX": 200, "PositionY": 200}]],
//!   "Goals": [{"Width": 40, "Height": 40, "PositionX": 500, "PositionY": 200}]
//! }
//! ```

use std::path::Path;

use log::debug;

use super::Layout;
use crate::error::LayoutError;

impl Layout {
    /// Parse and validate a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        debug!(
            "[Layout] parsed {}x{}: {} row groups, {} seats, {} exits",
            layout.width,
            layout.height,
            layout.seats.len(),
            layout.seat_count(),
            layout.goals.len()
        );
        Ok(layout)
    }

    /// Load a layout from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use std::io::Write;

    const THEATER: &str = r#"{
        "Width": 1000,
        "Height": 800,
        "Seats": [
            [
                {"Width": 50, "Height": 50, "PositionX": 200, "PositionY": 200},
                {"Width": 50, "Height": 50, "PositionX": 250, "PositionY": 200}
            ]
        ],
        "Goals": [{"Width": 40, "Height": 40, "PositionX": 500, "PositionY": 200}]
    }"#;

    #[test]
    fn test_from_json() {
        let layout = Layout::from_json(THEATER).unwrap();
        assert_eq!(layout.width, 1000);
        assert_eq!(layout.height, 800);
        assert_eq!(layout.seats.len(), 1);
        assert_eq!(layout.seats[0][1], Rect::new(50.0, 50.0, 250.0, 200.0));
        assert_eq!(layout.goals[0].position_x, 500.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let layout = Layout::from_json("{}").unwrap();
        assert_eq!(layout, Layout::default());
    }

    #[test]
    fn test_parse_error() {
        let err = Layout::from_json("{\"Seats\": 3}").unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn test_invalid_rectangle_rejected() {
        let json = r#"{"Goals": [{"Width": 0, "Height": 40, "PositionX": 5, "PositionY": 5}]}"#;
        assert!(matches!(
            Layout::from_json(json),
            Err(LayoutError::InvalidRectangle { group: None, index: 0 })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(THEATER.as_bytes()).unwrap();

        let layout = Layout::load(file.path()).unwrap();
        assert_eq!(layout.seat_count(), 2);

        let missing = Layout::load(std::path::Path::new("/nonexistent/layout.json"));
        assert!(matches!(missing, Err(LayoutError::Io(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_file_format() {
        let layout = Layout::from_json(THEATER).unwrap();
        let json = layout.to_json().unwrap();
        assert!(json.contains("\"PositionX\""));
        assert!(json.contains("\"Seats\""));
        assert_eq!(Layout::from_json(&json).unwrap(), layout);
    }
}
