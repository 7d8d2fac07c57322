//! Generative lookup backend.
//!
//! Every capability runs the same three steps:
//! 1. Render the flow's prompt from the request
//! 2. Call the generation service
//! 3. Parse the JSON object in the reply into the response record
//!
//! Transport failures become `LookupError::Failed` (or `Unavailable`);
//! a reply that is not the expected JSON becomes `LookupError::InvalidResponse`.

use async_trait::async_trait;
use lookups::{
    CastResponse, ImdbRatingResponse, Lookup, LookupError, RottenTomatoesResponse,
    SuggestionRequest, SuggestionResponse, TitleRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::prompts::{self, Flow};
use crate::{GenerationClient, GenerationError};

/// Lookup backend backed by the generation service
#[derive(Clone)]
pub struct GenAiLookups {
    client: GenerationClient,
}

impl GenAiLookups {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self, vars, input), fields(flow = flow.name()))]
    async fn run<Req, Resp>(
        &self,
        lookup: &str,
        flow: Flow,
        vars: &[(&str, &str)],
        input: &Req,
    ) -> Result<Resp, LookupError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned + Send,
    {
        let prompt = prompts::render(flow.template(), vars);
        let input_json =
            serde_json::to_string(input).map_err(|e| LookupError::failed(lookup, e))?;

        let output = self
            .client
            .generate(flow, prompt, input_json)
            .await
            .map_err(|e| match e {
                GenerationError::Unavailable(reason) => LookupError::unavailable(lookup, reason),
                other => LookupError::failed(lookup, other),
            })?;

        let json = prompts::extract_json(&output);
        debug!("{} replied with {} bytes of JSON", lookup, json.len());
        serde_json::from_str(json).map_err(|e| {
            warn!("{} reply was not valid JSON: {}", lookup, e);
            LookupError::invalid_response(lookup, e)
        })
    }
}

#[async_trait]
impl Lookup<TitleRequest, ImdbRatingResponse> for GenAiLookups {
    fn name(&self) -> &str {
        "genai:imdb"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<ImdbRatingResponse, LookupError> {
        let vars = [("movieTitle", request.movie_title.as_str())];
        self.run("genai:imdb", Flow::ImdbRating, &vars, &request)
            .await
    }
}

#[async_trait]
impl Lookup<TitleRequest, RottenTomatoesResponse> for GenAiLookups {
    fn name(&self) -> &str {
        "genai:rotten-tomatoes"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<RottenTomatoesResponse, LookupError> {
        let vars = [("movieTitle", request.movie_title.as_str())];
        self.run("genai:rotten-tomatoes", Flow::RottenTomatoesRating, &vars, &request)
            .await
    }
}

#[async_trait]
impl Lookup<TitleRequest, CastResponse> for GenAiLookups {
    fn name(&self) -> &str {
        "genai:cast"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<CastResponse, LookupError> {
        let vars = [("movieTitle", request.movie_title.as_str())];
        self.run("genai:cast", Flow::MovieCast, &vars, &request)
            .await
    }
}

#[async_trait]
impl Lookup<SuggestionRequest, SuggestionResponse> for GenAiLookups {
    fn name(&self) -> &str {
        "genai:suggestions"
    }

    async fn lookup(&self, request: SuggestionRequest) -> Result<SuggestionResponse, LookupError> {
        let vars = [("query", request.query.as_str())];
        self.run("genai:suggestions", Flow::MovieSuggestions, &vars, &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator_server::{Generator, GeneratorServer};
    use crate::generation::{GenerateRequest, GenerateResponse};
    use lookups::LookupSet;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio_stream::wrappers::TcpListenerStream;
    use tonic::transport::Server;
    use tonic::{Request, Response, Status};

    // ============================================================================
    // Mock Generation Service
    // ============================================================================

    /// Scripted generator: replies depend on flow and title
    #[derive(Default)]
    struct MockGenerator;

    #[tonic::async_trait]
    impl Generator for MockGenerator {
        async fn generate(
            &self,
            request: Request<GenerateRequest>,
        ) -> Result<Response<GenerateResponse>, Status> {
            let req = request.into_inner();

            // Prompts must arrive rendered
            if req.prompt.contains("{{") {
                return Err(Status::invalid_argument("unrendered prompt"));
            }
            if req.input_json.contains("Explode") {
                return Err(Status::internal("model exploded"));
            }
            if req.input_json.contains("Slow") {
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
            if req.input_json.contains("Overloaded") {
                return Err(Status::unavailable("model overloaded"));
            }

            let output = match req.flow.as_str() {
                "imdb_rating" => "```json\n{\"imdbRating\": \"8.7\"}\n```".to_string(),
                "rotten_tomatoes_rating" if req.input_json.contains("Garbled") => {
                    "I could not find that movie.".to_string()
                }
                "rotten_tomatoes_rating" => r#"{"rottenTomatoesRating": "83%"}"#.to_string(),
                "movie_cast" => r#"{"leadActor": "Keanu Reeves"}"#.to_string(),
                "movie_suggestions" => {
                    r#"Here you go: {"suggestions": ["The Matrix", "The Matrix Reloaded"]}"#
                        .to_string()
                }
                other => return Err(Status::unimplemented(other.to_string())),
            };

            Ok(Response::new(GenerateResponse {
                output_json: output,
            }))
        }
    }

    /// Start a mock generation service on a random port
    async fn start_mock_service() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock generation service");

        let addr = listener.local_addr().expect("Failed to get local address");
        let service = GeneratorServer::new(MockGenerator::default());

        let handle = tokio::spawn(async move {
            Server::builder()
                .add_service(service)
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
                .expect("Mock generation service failed");
        });

        (format!("http://{}", addr), handle)
    }

    async fn build_test_lookups() -> (LookupSet, tokio::task::JoinHandle<()>) {
        build_test_lookups_with_timeout(Duration::from_secs(5)).await
    }

    async fn build_test_lookups_with_timeout(
        timeout: Duration,
    ) -> (LookupSet, tokio::task::JoinHandle<()>) {
        let (addr, handle) = start_mock_service().await;
        let client = GenerationClient::connect(addr, timeout)
            .await
            .expect("Failed to connect");
        (LookupSet::from_backend(GenAiLookups::new(client)), handle)
    }

    #[tokio::test]
    async fn test_fenced_json_is_parsed() {
        let (lookups, handle) = build_test_lookups().await;

        let imdb = lookups
            .imdb
            .lookup(TitleRequest::new("The Matrix"))
            .await
            .expect("imdb lookup failed");
        assert_eq!(imdb.imdb_rating.as_deref(), Some("8.7"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_missing_field_is_none() {
        let (lookups, handle) = build_test_lookups().await;

        let cast = lookups
            .cast
            .lookup(TitleRequest::new("The Matrix"))
            .await
            .expect("cast lookup failed");
        assert_eq!(cast.lead_actor.as_deref(), Some("Keanu Reeves"));
        assert_eq!(cast.lead_actress, None);

        handle.abort();
    }

    #[tokio::test]
    async fn test_suggestions_surrounded_by_chatter() {
        let (lookups, handle) = build_test_lookups().await;

        let response = lookups
            .suggestions
            .lookup(SuggestionRequest::new("matr"))
            .await
            .expect("suggestion lookup failed");
        assert_eq!(response.suggestions, vec!["The Matrix", "The Matrix Reloaded"]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_response() {
        let (lookups, handle) = build_test_lookups().await;

        let err = lookups
            .rotten_tomatoes
            .lookup(TitleRequest::new("Garbled Title"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::InvalidResponse { ref lookup, .. } if lookup == "genai:rotten-tomatoes"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_error_is_failed_lookup() {
        let (lookups, handle) = build_test_lookups().await;

        let err = lookups
            .imdb
            .lookup(TitleRequest::new("Explode"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Failed { .. }));
        assert!(err.to_string().contains("model exploded"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_unavailable_service_keeps_reason() {
        let (lookups, handle) = build_test_lookups().await;

        let err = lookups
            .cast
            .lookup(TitleRequest::new("Overloaded"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::unavailable("genai:cast", "model overloaded")
        );
        assert_eq!(err.to_string(), "genai:cast is unavailable: model overloaded");

        handle.abort();
    }

    #[tokio::test]
    async fn test_request_timeout_is_unavailable() {
        let (lookups, handle) = build_test_lookups_with_timeout(Duration::from_millis(100)).await;

        let err = lookups
            .imdb
            .lookup(TitleRequest::new("Slow Burn"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, LookupError::Unavailable { ref lookup, .. } if lookup == "genai:imdb"),
            "unexpected error: {:?}",
            err
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_connect_to_missing_service_fails() {
        // Port 1 is never a generation service
        let result = GenerationClient::connect("http://127.0.0.1:1", Duration::from_millis(200)).await;
        assert!(result.is_err(), "Connecting to a closed port should fail");
    }
}
