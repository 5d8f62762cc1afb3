pub mod marker;

pub use marker::{Icon, Marker};
