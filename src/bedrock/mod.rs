//! Amazon Bedrock integration: request shaping, transport, and the
//! responder service the HTTP handlers talk to.

mod adapter;
mod claude;
mod client;
mod error;
mod responder;
mod titan;

pub use adapter::{ModelAdapter, ModelFamily};
pub use client::{BedrockClient, BedrockRuntime};
pub use error::BedrockError;
pub use responder::Responder;
