//! Bedrock Chatbot - HTTP backend that answers chat messages through Amazon
//! Bedrock text models.

pub mod bedrock;
pub mod config;
pub mod handlers;
pub mod response;
pub mod server;
