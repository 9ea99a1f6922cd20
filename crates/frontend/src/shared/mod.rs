pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod number_format;
pub mod page_frame;
