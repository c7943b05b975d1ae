pub mod config;
pub mod generator;
pub mod logger;
pub mod post;
pub mod view;
pub mod writer;
mod text_utils;
mod test_data;
