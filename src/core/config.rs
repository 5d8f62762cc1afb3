//! Configuration for anchored popups
//!
//! Options can be built in code or loaded from JSON; every field has a
//! default so partial documents are accepted.

use crate::{
    core::{
        constants::DEFAULT_POPUP_SIZE,
        geo::{LatLng, Size},
    },
    ui::{anchor::AnchorDescriptor, placement::RelativePosition},
    Error, Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchoredPopupOptions {
    /// Geographic coordinate the popup is attached to
    pub lat_lng: Option<LatLng>,
    pub size: Size,
    pub content: String,
    /// Shape to keep clear of; a zero anchor is used when absent
    pub anchor: Option<AnchorDescriptor>,
    pub close_box: bool,
    /// Position used until the first draw resolves one from the map
    pub initial_relative_position: RelativePosition,
}

impl Default for AnchoredPopupOptions {
    fn default() -> Self {
        Self {
            lat_lng: None,
            size: Size::from(DEFAULT_POPUP_SIZE),
            content: String::new(),
            anchor: None,
            close_box: false,
            initial_relative_position: RelativePosition::default(),
        }
    }
}

impl AnchoredPopupOptions {
    /// Parse options from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(lat_lng) = &self.lat_lng {
            if !lat_lng.is_valid() {
                return Err(Error::InvalidCoordinates(format!(
                    "popup coordinate out of range: {}, {}",
                    lat_lng.lat, lat_lng.lng
                )));
            }
        }

        if !self.size.is_valid() {
            return Err(Error::InvalidSize(format!(
                "popup size must be finite and non-negative, got {}x{}",
                self.size.width, self.size.height
            )));
        }

        if let Some(anchor) = &self.anchor {
            if !anchor.size.is_valid() {
                return Err(Error::InvalidSize(format!(
                    "anchor size must be finite and non-negative, got {}x{}",
                    anchor.size.width, anchor.size.height
                )));
            }
            if !anchor.offset.x.is_finite() || !anchor.offset.y.is_finite() {
                return Err(Error::InvalidCoordinates(
                    "anchor offset must be finite".to_string(),
                ));
            }
        }

        Ok(())
    }
}
