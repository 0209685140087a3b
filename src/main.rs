mod app;
mod components;
mod config;
mod error;
mod message;
mod model;
mod pages;
mod services;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
