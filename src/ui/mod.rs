pub mod anchor;
pub mod anchored;
pub mod manager;
pub mod placement;
pub mod popup;

pub use anchor::{Anchor, AnchorDescriptor};

pub use anchored::{AnchoredPopup, PlacementState};

pub use manager::PopupManager;

pub use placement::{
    destination_pixel, resolve_relative_position, HorizontalEdge, RelativePosition, VerticalEdge,
};

pub use popup::{Popup, PopupElement};
