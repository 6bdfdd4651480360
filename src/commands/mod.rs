pub mod config;
pub mod dispatch;
pub mod menu;
pub mod show;
pub mod tree;
