pub mod style;
pub mod tab_bar;
