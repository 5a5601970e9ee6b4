pub mod catalog;
pub mod client;
pub mod generator;
pub mod history;
pub mod request;
pub mod session;
