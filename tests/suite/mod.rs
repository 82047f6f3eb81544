mod config;
mod widget;
