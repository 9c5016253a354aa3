use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-icon parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconParams {
    /// Edge length of the square output in pixels
    pub size: u32,
    /// If true, keep the logo's aspect ratio and center it on a transparent square
    pub maintain_aspect: bool,
}

impl IconParams {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize { size: self.size });
        }
        Ok(())
    }
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            size: 1024,
            maintain_aspect: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_aspect_by_default() {
        let params = IconParams::new(48);
        assert_eq!(params.size, 48);
        assert!(params.maintain_aspect);
    }

    #[test]
    fn test_zero_size_rejected() {
        match IconParams::new(0).validate() {
            Err(Error::ZeroSize { size }) => assert_eq!(size, 0),
            other => panic!("expected ZeroSize error, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_from_json() {
        let params: IconParams =
            serde_json::from_str(r#"{"size":72,"maintain_aspect":false}"#).unwrap();
        assert_eq!(params.size, 72);
        assert!(!params.maintain_aspect);
    }
}
