//! Generation client for communicating with an external text-generation
//! service over gRPC.
//!
//! This crate provides:
//! - `GenerationClient`: connection management and the `Generate` RPC
//! - `prompts`: the prompt template for each flow
//! - `GenAiLookups`: a lookup backend that renders a prompt, calls the
//!   service and parses the JSON reply into a lookup response record

use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tonic::transport::Channel;
use tonic::Code;
use tracing::{debug, error, info};

pub mod backend;
pub mod prompts;

// Include the generated protobuf code
pub mod generation {
    tonic::include_proto!("ratefind.generation");
}

pub use backend::GenAiLookups;
pub use prompts::Flow;

use generation::{generator_client::GeneratorClient as GrpcGeneratorClient, GenerateRequest};

/// Errors that can occur when interacting with the generation service
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation service unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to generate: {0}")]
    GenerationFailed(String),

    #[error("Invalid response from generation service: {0}")]
    InvalidResponse(String),
}

/// Client for the generation service.
///
/// Wraps the auto-generated gRPC client. Cloning is cheap and clones share
/// the underlying channel.
#[derive(Clone)]
pub struct GenerationClient {
    client: GrpcGeneratorClient<Channel>,
}

impl GenerationClient {
    /// Connect to the generation service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50051")
    /// * `timeout` - Bounds both connecting and every request on the channel
    pub async fn connect(addr: impl Into<String>, timeout: Duration) -> Result<Self> {
        let addr = addr.into();
        info!("Connecting to generation service at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .context("Creating channel from address")?
            .connect_timeout(timeout)
            .timeout(timeout)
            .connect()
            .await
            .context("Connecting to generation service")?;
        debug!("Connected to generation service at {}", addr);

        Ok(GenerationClient {
            client: GrpcGeneratorClient::new(channel),
        })
    }

    /// Run one flow and return the raw model output.
    ///
    /// # Arguments
    /// * `flow` - Which flow the prompt belongs to
    /// * `prompt` - The rendered prompt
    /// * `input_json` - The structured flow input, JSON-encoded
    pub async fn generate(
        &self,
        flow: Flow,
        prompt: String,
        input_json: String,
    ) -> Result<String, GenerationError> {
        debug!("Generating {} ({} prompt bytes)", flow.name(), prompt.len());

        let request = tonic::Request::new(GenerateRequest {
            flow: flow.name().to_string(),
            prompt,
            input_json,
        });

        // Generated clients need &mut self; the clone shares the channel
        let mut client = self.client.clone();
        let response = client.generate(request).await.map_err(|status| {
            error!("gRPC error while generating {}: {}", flow.name(), status);
            match status.code() {
                // Channel timeouts surface as Cancelled
                Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => {
                    GenerationError::Unavailable(status.message().to_string())
                }
                _ => GenerationError::GenerationFailed(status.to_string()),
            }
        })?;

        let output = response.into_inner().output_json;
        if output.trim().is_empty() {
            error!("Empty output for flow {}", flow.name());
            return Err(GenerationError::InvalidResponse(format!(
                "empty output for flow {}",
                flow.name()
            )));
        }
        Ok(output)
    }
}
