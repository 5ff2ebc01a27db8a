//! Cell margin types

/// Padding inside every cell of a table, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMargins {
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
}

impl CellMargins {
    /// Create margins with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Same margin on all four sides
    pub fn all(margin: i32) -> Self {
        Self {
            top: Some(margin),
            left: Some(margin),
            right: Some(margin),
            bottom: Some(margin),
        }
    }

    /// Margins in top, left, right, bottom order
    pub fn to_array(&self) -> [Option<i32>; 4] {
        [self.top, self.left, self.right, self.bottom]
    }

    /// Check if no side is set
    pub fn is_empty(&self) -> bool {
        self.to_array().iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all() {
        let margins = CellMargins::all(100);
        assert_eq!(margins.to_array(), [Some(100); 4]);
        assert!(!margins.is_empty());
        assert!(CellMargins::new().is_empty());
    }

    #[test]
    fn test_single_side_is_not_empty() {
        let margins = CellMargins {
            bottom: Some(0),
            ..CellMargins::default()
        };
        assert!(!margins.is_empty());
    }
}
