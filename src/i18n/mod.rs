pub mod en;
