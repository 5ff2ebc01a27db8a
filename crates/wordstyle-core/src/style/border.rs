//! Border style types
//!
//! Border sizes are in eighths of a point. Colors are kept exactly as
//! supplied (usually `RRGGBB` hex or `auto`).

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line thickness in eighths of a point
    pub size: Option<i32>,
    /// Line color
    pub color: Option<String>,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new<S: Into<String>>(size: i32, color: S) -> Self {
        Self {
            size: Some(size),
            color: Some(color.into()),
        }
    }

    /// Check if neither size nor color is set
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none()
    }
}

/// The four outer sides of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Top,
    Left,
    Right,
    Bottom,
}

impl BorderSide {
    /// All sides in the order used by the bulk accessors
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Top,
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Bottom,
    ];
}

/// Outer borders of an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderSides {
    /// Top border
    pub top: BorderEdge,
    /// Left border
    pub left: BorderEdge,
    /// Right border
    pub right: BorderEdge,
    /// Bottom border
    pub bottom: BorderEdge,
}

impl BorderSides {
    /// Create borders with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same edge on every side
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            top: edge.clone(),
            left: edge.clone(),
            right: edge.clone(),
            bottom: edge,
        }
    }

    /// Borrow the edge for a side
    pub fn edge(&self, side: BorderSide) -> &BorderEdge {
        match side {
            BorderSide::Top => &self.top,
            BorderSide::Left => &self.left,
            BorderSide::Right => &self.right,
            BorderSide::Bottom => &self.bottom,
        }
    }

    /// Mutably borrow the edge for a side
    pub fn edge_mut(&mut self, side: BorderSide) -> &mut BorderEdge {
        match side {
            BorderSide::Top => &mut self.top,
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Bottom => &mut self.bottom,
        }
    }

    /// Sizes in top, left, right, bottom order
    pub fn sizes(&self) -> [Option<i32>; 4] {
        BorderSide::ALL.map(|side| self.edge(side).size)
    }

    /// Colors in top, left, right, bottom order
    pub fn colors(&self) -> [Option<&str>; 4] {
        [
            self.top.color.as_deref(),
            self.left.color.as_deref(),
            self.right.color.as_deref(),
            self.bottom.color.as_deref(),
        ]
    }

    /// Check if every side is empty
    pub fn is_empty(&self) -> bool {
        BorderSide::ALL.iter().all(|side| self.edge(*side).is_empty())
    }
}

/// Border capability shared by styles that carry outer borders
///
/// Implementors only expose their [`BorderSides`]; the per-side
/// accessors are provided.
pub trait BorderStyle {
    /// Outer borders
    fn borders(&self) -> &BorderSides;

    /// Mutable outer borders
    fn borders_mut(&mut self) -> &mut BorderSides;

    /// Set the size of one side
    fn set_side_size(&mut self, side: BorderSide, size: i32) -> &mut Self {
        self.borders_mut().edge_mut(side).size = Some(size);
        self
    }

    /// Set (or clear) the color of one side
    fn set_side_color(&mut self, side: BorderSide, color: Option<&str>) -> &mut Self {
        self.borders_mut().edge_mut(side).color = color.map(str::to_string);
        self
    }

    fn border_top_size(&self) -> Option<i32> {
        self.borders().top.size
    }

    fn set_border_top_size(&mut self, size: i32) -> &mut Self {
        self.set_side_size(BorderSide::Top, size)
    }

    fn border_top_color(&self) -> Option<&str> {
        self.borders().top.color.as_deref()
    }

    fn set_border_top_color(&mut self, color: Option<&str>) -> &mut Self {
        self.set_side_color(BorderSide::Top, color)
    }

    fn border_left_size(&self) -> Option<i32> {
        self.borders().left.size
    }

    fn set_border_left_size(&mut self, size: i32) -> &mut Self {
        self.set_side_size(BorderSide::Left, size)
    }

    fn border_left_color(&self) -> Option<&str> {
        self.borders().left.color.as_deref()
    }

    fn set_border_left_color(&mut self, color: Option<&str>) -> &mut Self {
        self.set_side_color(BorderSide::Left, color)
    }

    fn border_right_size(&self) -> Option<i32> {
        self.borders().right.size
    }

    fn set_border_right_size(&mut self, size: i32) -> &mut Self {
        self.set_side_size(BorderSide::Right, size)
    }

    fn border_right_color(&self) -> Option<&str> {
        self.borders().right.color.as_deref()
    }

    fn set_border_right_color(&mut self, color: Option<&str>) -> &mut Self {
        self.set_side_color(BorderSide::Right, color)
    }

    fn border_bottom_size(&self) -> Option<i32> {
        self.borders().bottom.size
    }

    fn set_border_bottom_size(&mut self, size: i32) -> &mut Self {
        self.set_side_size(BorderSide::Bottom, size)
    }

    fn border_bottom_color(&self) -> Option<&str> {
        self.borders().bottom.color.as_deref()
    }

    fn set_border_bottom_color(&mut self, color: Option<&str>) -> &mut Self {
        self.set_side_color(BorderSide::Bottom, color)
    }
}

impl BorderStyle for BorderSides {
    fn borders(&self) -> &BorderSides {
        self
    }

    fn borders_mut(&mut self) -> &mut BorderSides {
        self
    }
}
