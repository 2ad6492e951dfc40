//! The fan-out publisher.

use crate::registry::AdapterRegistry;
use futures_util::future::join_all;
use tintoretto_core::{Destination, DestinationOutcome, PublishRequest, PublisherConfig};
use tintoretto_error::{PublishErrorKind, TintorettoError, TintorettoErrorKind};
use tintoretto_interface::{CredentialStore, WireRequest, WireTransport};
use tracing::{debug, instrument, warn};

/// Publishes one request to every requested destination independently.
///
/// The publisher is generic over its transport and credential seams, so
/// tests can substitute a recording fake for the wire and an empty
/// credential store. Failure isolation is structural: every destination
/// maps to exactly one outcome future that cannot propagate an error, and
/// the results are gathered in request order.
///
/// # Examples
///
/// ```no_run
/// use tintoretto_core::{Destination, PublishRequest, TintorettoConfig};
/// use tintoretto_interface::StaticCredentials;
/// use tintoretto_social::FanoutPublisher;
/// use tintoretto_transport::HttpTransport;
///
/// # async fn publish() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TintorettoConfig::load()?;
/// let transport = HttpTransport::new(config.publisher())?;
/// let publisher = FanoutPublisher::new(
///     transport,
///     StaticCredentials::new("token"),
///     config.publisher(),
/// );
///
/// let request = PublishRequest::builder()
///     .content("hello")
///     .destinations(vec![Destination::Facebook, Destination::Mastodon])
///     .build()?;
/// let outcomes = publisher.publish(&request).await;
/// assert_eq!(outcomes.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct FanoutPublisher<T, C> {
    transport: T,
    credentials: C,
    registry: AdapterRegistry,
    api_base: String,
}

impl<T: WireTransport, C: CredentialStore> FanoutPublisher<T, C> {
    /// Create a publisher with the built-in adapter registry.
    pub fn new(transport: T, credentials: C, config: &PublisherConfig) -> Self {
        Self::with_registry(transport, credentials, config, AdapterRegistry::default())
    }

    /// Create a publisher with an explicit adapter registry.
    pub fn with_registry(
        transport: T,
        credentials: C,
        config: &PublisherConfig,
        registry: AdapterRegistry,
    ) -> Self {
        Self {
            transport,
            credentials,
            registry,
            api_base: config.api_base().clone(),
        }
    }

    /// The adapter registry in use.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Fan the request out to every requested destination.
    ///
    /// Returns exactly one outcome per destination, in request order. No
    /// destination's failure aborts a sibling; a missing credential fails
    /// every destination up front without touching the transport.
    #[instrument(skip(self, request), fields(destinations = request.destinations().len()))]
    pub async fn publish(&self, request: &PublishRequest) -> Vec<DestinationOutcome> {
        let Some(bearer) = self.credentials.bearer_token() else {
            warn!("No bearer credential available, failing all destinations");
            return request
                .destinations()
                .iter()
                .map(|destination| {
                    DestinationOutcome::failure(
                        *destination,
                        PublishErrorKind::MissingCredential.to_string(),
                    )
                })
                .collect();
        };

        let attempts = request
            .destinations()
            .iter()
            .map(|destination| self.publish_one(*destination, request, &bearer));
        join_all(attempts).await
    }

    async fn publish_one(
        &self,
        destination: Destination,
        request: &PublishRequest,
        bearer: &str,
    ) -> DestinationOutcome {
        let Some(spec) = self.registry.resolve(destination) else {
            debug!(destination = %destination, "No adapter registered");
            return DestinationOutcome::failure(
                destination,
                PublishErrorKind::UnsupportedDestination(destination.to_string()).to_string(),
            );
        };

        if let Err(reason) = spec.validate(request) {
            debug!(destination = %destination, reason = %reason, "Adapter rejected request locally");
            return DestinationOutcome::failure(
                destination,
                PublishErrorKind::ValidationFailed {
                    destination: destination.to_string(),
                    reason,
                }
                .to_string(),
            );
        }

        let wire = WireRequest::new(
            destination,
            spec.endpoint(&self.api_base),
            bearer,
            spec.build_payload(request),
        );
        match self.transport.dispatch(&wire).await {
            Ok(response) if response.is_success() => {
                debug!(destination = %destination, status = *response.status(), "Destination accepted publish");
                DestinationOutcome::success(
                    destination,
                    response
                        .body()
                        .clone()
                        .unwrap_or_else(|| serde_json::json!({})),
                )
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or_else(|| format!("HTTP {}", response.status()));
                warn!(destination = %destination, status = *response.status(), message = %message, "Destination rejected publish");
                DestinationOutcome::failure(
                    destination,
                    PublishErrorKind::RemoteRejected {
                        destination: destination.to_string(),
                        status: *response.status(),
                        message,
                    }
                    .to_string(),
                )
            }
            Err(error) => {
                warn!(destination = %destination, error = %error, "Transport failure reaching destination");
                DestinationOutcome::failure(
                    destination,
                    PublishErrorKind::Network(transport_message(&error)).to_string(),
                )
            }
        }
    }
}

/// Strip the wrapper noise from a transport error for user-visible output.
fn transport_message(error: &TintorettoError) -> String {
    match error.kind() {
        TintorettoErrorKind::Http(http) => http.message.clone(),
        other => other.to_string(),
    }
}
