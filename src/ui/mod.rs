pub mod charts_view;
pub mod panels;
