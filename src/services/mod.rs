pub mod exchange_rate_client;
pub mod gemini_client;
pub mod serpapi_client;
pub mod transport;

pub use exchange_rate_client::ExchangeRateClient;
pub use gemini_client::{GeminiClient, GenerateContentRequest};
pub use serpapi_client::FlightSearchClient;
pub use transport::{HttpMethod, HttpTransport, OutboundRequest, Transport};
