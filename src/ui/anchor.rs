use crate::{
    core::geo::{Point, Size},
    traits::HasSizeAndOffset,
};
use serde::{Deserialize, Serialize};

/// Plain anchor shape: a size and a pixel offset from the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorDescriptor {
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub offset: Point,
}

impl AnchorDescriptor {
    pub fn new(size: Size, offset: Point) -> Self {
        Self { size, offset }
    }

    /// Snapshot any anchor-like shape
    pub fn from_anchor(anchor: &impl HasSizeAndOffset) -> Self {
        Self::new(anchor.size(), anchor.offset())
    }
}

impl HasSizeAndOffset for AnchorDescriptor {
    fn size(&self) -> Size {
        self.size
    }

    fn offset(&self) -> Point {
        self.offset
    }
}

/// The anchor a popup is placed against, chosen once at construction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Anchor {
    /// Caller-supplied shape, usually a marker icon
    Provided(AnchorDescriptor),
    /// Zero size, zero offset
    #[default]
    Zero,
}

impl Anchor {
    pub fn is_zero(&self) -> bool {
        matches!(self, Anchor::Zero)
    }
}

impl From<Option<AnchorDescriptor>> for Anchor {
    fn from(descriptor: Option<AnchorDescriptor>) -> Self {
        match descriptor {
            Some(descriptor) => Anchor::Provided(descriptor),
            None => Anchor::Zero,
        }
    }
}

impl HasSizeAndOffset for Anchor {
    fn size(&self) -> Size {
        match self {
            Anchor::Provided(descriptor) => descriptor.size,
            Anchor::Zero => Size::zero(),
        }
    }

    fn offset(&self) -> Point {
        match self {
            Anchor::Provided(descriptor) => descriptor.offset,
            Anchor::Zero => Point::default(),
        }
    }
}
