//! SVG-слой: дерево элементов, хост-документ, сборка фрагмента.

pub mod document;
pub mod element;
pub mod fragment;

pub use document::{Host, SvgDocument};
pub use element::Element;
pub use fragment::{num, render, unique_id, Frame};
