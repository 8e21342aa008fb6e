pub mod cinematic_slider;
pub mod deep_parallax;
pub mod exploded_vision;
pub mod footer;
pub mod hero;
pub mod horizontal_scroll;
pub mod icons;
pub mod loader;
pub mod marquee;
pub mod media;
pub mod navbar;
pub mod parallax_grid;
pub mod product_carousel;
