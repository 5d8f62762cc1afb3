//! Quadrant-based placement for anchored popups
//!
//! A popup is placed in the quadrant of the visible extent opposite to the one
//! its anchor point falls in, so it grows toward the middle of the map rather
//! than off the nearest edge.

use crate::{
    core::geo::{Point, Quadrant, Size},
    traits::{HasSizeAndOffset, MapProjection},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Which side of the anchor point a popup occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePosition {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

impl RelativePosition {
    pub const TOP_LEFT: Self = Self::new(VerticalEdge::Top, HorizontalEdge::Left);
    pub const TOP_RIGHT: Self = Self::new(VerticalEdge::Top, HorizontalEdge::Right);
    pub const BOTTOM_LEFT: Self = Self::new(VerticalEdge::Bottom, HorizontalEdge::Left);
    pub const BOTTOM_RIGHT: Self = Self::new(VerticalEdge::Bottom, HorizontalEdge::Right);

    pub const fn new(vertical: VerticalEdge, horizontal: HorizontalEdge) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// The position occupying the diagonally opposite quadrant
    pub fn opposite_of(quadrant: Quadrant) -> Self {
        Self::from(quadrant.opposite())
    }

    pub fn is_top(&self) -> bool {
        self.vertical == VerticalEdge::Top
    }

    pub fn is_left(&self) -> bool {
        self.horizontal == HorizontalEdge::Left
    }

    pub fn code(&self) -> &'static str {
        Quadrant::from(*self).code()
    }
}

impl Default for RelativePosition {
    fn default() -> Self {
        Self::BOTTOM_RIGHT
    }
}

impl From<Quadrant> for RelativePosition {
    fn from(quadrant: Quadrant) -> Self {
        let vertical = if quadrant.is_top() {
            VerticalEdge::Top
        } else {
            VerticalEdge::Bottom
        };
        let horizontal = if quadrant.is_left() {
            HorizontalEdge::Left
        } else {
            HorizontalEdge::Right
        };
        Self::new(vertical, horizontal)
    }
}

impl From<RelativePosition> for Quadrant {
    fn from(position: RelativePosition) -> Self {
        Quadrant::from_edges(position.is_top(), position.is_left())
    }
}

impl FromStr for RelativePosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tl" => Ok(Self::TOP_LEFT),
            "tr" => Ok(Self::TOP_RIGHT),
            "bl" => Ok(Self::BOTTOM_LEFT),
            "br" => Ok(Self::BOTTOM_RIGHT),
            other => Err(Error::ParseError(format!(
                "unknown relative position '{}', expected one of tl, tr, bl, br",
                other
            ))),
        }
    }
}

impl TryFrom<String> for RelativePosition {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RelativePosition> for String {
    fn from(position: RelativePosition) -> Self {
        position.code().to_string()
    }
}

impl std::fmt::Display for RelativePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the relative position for a popup anchored at `px` (a layer pixel).
pub fn resolve_relative_position<M>(map: &M, px: &Point) -> RelativePosition
where
    M: MapProjection + ?Sized,
{
    RelativePosition::opposite_of(map.classify_quadrant(px))
}

/// Top-left pixel for a popup of `overlay_size` anchored at `px`.
///
/// Above or left of the anchor the popup is shifted back by its own size;
/// below or right of it the popup starts past the anchor's size.
pub fn destination_pixel<A>(
    px: Point,
    anchor: &A,
    overlay_size: Size,
    relative_position: RelativePosition,
) -> Point
where
    A: HasSizeAndOffset + ?Sized,
{
    let mut destination = px.add(&anchor.offset());
    let anchor_size = anchor.size();

    destination.y += if relative_position.is_top() {
        -overlay_size.height
    } else {
        anchor_size.height
    };

    destination.x += if relative_position.is_left() {
        -overlay_size.width
    } else {
        anchor_size.width
    };

    destination
}
