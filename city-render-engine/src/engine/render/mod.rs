pub mod post_processing;
