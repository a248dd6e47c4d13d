pub mod squarify;

pub use squarify::{layout, layout_with, Item, LayoutParams, PlacedItem, Rect};
