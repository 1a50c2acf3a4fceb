pub mod attribute_item;
pub mod header;
pub mod line_attributes;
pub mod loading_box;
pub mod minicart;
pub mod price_tag;
