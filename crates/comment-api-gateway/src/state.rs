//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use comment_api_auth::TokenValidator;
use comment_api_service::CommentService;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// Holds the injected service and validator. Handlers never mutate it.
pub struct GatewayState<C, V>
where
    C: CommentService,
    V: TokenValidator,
{
    /// The comment service handling every operation.
    pub service: Arc<C>,
    /// The validator used by the authentication gate.
    pub validator: Arc<V>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<C, V> GatewayState<C, V>
where
    C: CommentService,
    V: TokenValidator,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(service: Arc<C>, validator: Arc<V>, config: GatewayConfig) -> Self {
        Self {
            service,
            validator,
            config,
        }
    }
}

impl<C, V> Clone for GatewayState<C, V>
where
    C: CommentService,
    V: TokenValidator,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}
