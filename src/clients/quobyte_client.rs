// Quobyte management API client
// Every operation is one JSON-RPC call POSTed to the configured endpoint with basic auth
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Span, debug, field, instrument};

use super::rpc::{RpcRequest, RpcResponse};
use super::structs::*;
use crate::config::QuobyteSettings;
use crate::error::{QuobyteError, QuobyteResult};
use crate::utils::http_client::new_api_client;

const UNAUTHORIZED_MESSAGE: &str = "unable to authenticate with the Quobyte API service";

pub struct QuobyteClient {
    client: Client,
    url: String,
    username: String,
    password: String,
    next_id: AtomicU64,
}

impl fmt::Debug for QuobyteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuobyteClient")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl QuobyteClient {
    /// Creates a client with a default HTTP transport. Performs no I/O.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_http_client(url, username, password, Client::new())
    }

    /// Creates a client on top of a caller-configured transport, e.g. one
    /// with timeouts or a proxy. The transport may be shared with other code.
    pub fn with_http_client(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            username: username.into(),
            password: password.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_settings(settings: &QuobyteSettings) -> QuobyteResult<Self> {
        let client = new_api_client(settings)?;

        Ok(Self::with_http_client(
            settings.url.clone(),
            settings.username.clone(),
            settings.password.clone(),
            client,
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Calls `method` with `params` and decodes the reply's `result` into `R`.
    pub async fn invoke<P, R>(&self, method: &str, params: &P) -> QuobyteResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let (status, body) = self.dispatch(method, params).await?;

        let envelope: RpcResponse = serde_json::from_str(&body).map_err(QuobyteError::Decode)?;
        check_rpc_error(status, &envelope)?;

        match envelope.result {
            Some(result) => serde_json::from_value(result).map_err(QuobyteError::Decode),
            None => Err(QuobyteError::EmptyResponse {
                method: method.to_string(),
            }),
        }
    }

    /// Calls `method` for its side effect only. An `error` object in the
    /// reply still fails the call; any other body is discarded undecoded.
    pub async fn invoke_discarding<P>(&self, method: &str, params: &P) -> QuobyteResult<()>
    where
        P: Serialize,
    {
        let (status, body) = self.dispatch(method, params).await?;

        match serde_json::from_str::<RpcResponse>(&body) {
            Ok(envelope) => check_rpc_error(status, &envelope),
            Err(_) => Ok(()),
        }
    }

    /// Sends one request and returns the status and raw body of a 2xx reply.
    #[instrument(skip(self, params), fields(request_id = field::Empty))]
    async fn dispatch<P>(&self, method: &str, params: &P) -> QuobyteResult<(StatusCode, String)>
    where
        P: Serialize,
    {
        if method.is_empty() {
            return Err(QuobyteError::InvalidRequest(
                "method name must not be empty".to_string(),
            ));
        }

        let request_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Span::current().record("request_id", request_id);

        let body = serde_json::to_vec(&RpcRequest::new(method, params, request_id)).map_err(|e| {
            QuobyteError::InvalidRequest(format!("Failed to serialize {} request: {}", method, e))
        })?;

        debug!("Sending Quobyte API request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        debug!("Quobyte API responded with status {}", status);

        if !status.is_success() {
            return Err(map_http_error(status, &text));
        }

        Ok((status, text))
    }

    /// Creates a volume and returns its UUID.
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> QuobyteResult<String> {
        let response: VolumeUuid = self.invoke("createVolume", request).await?;
        Ok(response.volume_uuid)
    }

    pub async fn resolve_volume_name_to_uuid(
        &self,
        volume_name: &str,
        tenant: &str,
    ) -> QuobyteResult<String> {
        let request = ResolveVolumeNameRequest {
            volume_name: volume_name.to_string(),
            tenant_domain: non_empty(tenant),
        };

        let response: VolumeUuid = self.invoke("resolveVolumeName", &request).await?;
        Ok(response.volume_uuid)
    }

    pub async fn delete_volume(&self, volume_uuid: &str) -> QuobyteResult<()> {
        let request = VolumeUuid {
            volume_uuid: volume_uuid.to_string(),
        };

        self.invoke_discarding("deleteVolume", &request).await
    }

    /// Resolves the name first; if that fails nothing is deleted.
    pub async fn delete_volume_by_name(&self, volume_name: &str, tenant: &str) -> QuobyteResult<()> {
        let volume_uuid = self.resolve_volume_name_to_uuid(volume_name, tenant).await?;
        self.delete_volume(&volume_uuid).await
    }

    /// Lists clients with mounted volumes.
    pub async fn get_client_list(&self, tenant: &str) -> QuobyteResult<GetClientListResponse> {
        let request = GetClientListRequest {
            tenant_domain: non_empty(tenant),
        };

        self.invoke("getClientListRequest", &request).await
    }

    /// Lists devices. Empty slices mean no filter on that field.
    pub async fn get_device_list(
        &self,
        device_ids: &[u64],
        device_types: &[String],
    ) -> QuobyteResult<GetDeviceListResponse> {
        let request = GetDeviceListRequest {
            device_id: (!device_ids.is_empty()).then(|| device_ids.to_vec()),
            device_type: (!device_types.is_empty()).then(|| device_types.to_vec()),
        };

        self.invoke("getDeviceList", &request).await
    }

    /// Lists network endpoints of one device, or of all devices when
    /// `device_id` is 0.
    pub async fn get_device_network_endpoints(
        &self,
        device_id: u64,
    ) -> QuobyteResult<GetDeviceNetworkEndpointsResponse> {
        let request = GetDeviceNetworkEndpointsRequest {
            device_id: (device_id > 0).then_some(device_id),
        };

        self.invoke("getDeviceNetworkEndpoints", &request).await
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn check_rpc_error(status: StatusCode, envelope: &RpcResponse) -> QuobyteResult<()> {
    match &envelope.error {
        Some(error) => Err(QuobyteError::Api {
            status: status.as_u16(),
            code: Some(error.code),
            message: error.describe(),
        }),
        None => Ok(()),
    }
}

/// Map a non-2xx reply to an API error. A JSON-RPC error object in the body
/// wins, then the raw body text; only an empty body gets a local message.
fn map_http_error(status: StatusCode, body: &str) -> QuobyteError {
    if let Ok(RpcResponse { error: Some(error), .. }) = serde_json::from_str::<RpcResponse>(body) {
        return QuobyteError::Api {
            status: status.as_u16(),
            code: Some(error.code),
            message: error.describe(),
        };
    }

    let message = if !body.trim().is_empty() {
        body.to_string()
    } else if status == StatusCode::UNAUTHORIZED {
        UNAUTHORIZED_MESSAGE.to_string()
    } else {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    };

    QuobyteError::Api {
        status: status.as_u16(),
        code: None,
        message,
    }
}
