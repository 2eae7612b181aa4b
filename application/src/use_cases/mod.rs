//! Use cases for the application layer

pub mod feed_controller;
pub mod moderate_question;
pub mod question_collection;
pub mod request_helper;
