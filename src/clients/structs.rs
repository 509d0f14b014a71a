// Request and response payloads for the Quobyte management API
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// Volume Structs
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateVolumeRequest {
    pub name: String,
    pub root_user_id: Option<String>,
    pub root_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_device_ids: Vec<u64>,
    pub configuration_name: Option<String>,
    /// POSIX permission bits of the volume root directory.
    pub access_mode: Option<u32>,
    pub tenant_id: Option<String>,
}

impl CreateVolumeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn root_user_id(mut self, user: impl Into<String>) -> Self {
        self.root_user_id = Some(user.into());
        self
    }

    pub fn root_group_id(mut self, group: impl Into<String>) -> Self {
        self.root_group_id = Some(group.into());
        self
    }

    pub fn replica_device_ids(mut self, device_ids: Vec<u64>) -> Self {
        self.replica_device_ids = device_ids;
        self
    }

    pub fn configuration_name(mut self, configuration: impl Into<String>) -> Self {
        self.configuration_name = Some(configuration.into());
        self
    }

    pub fn access_mode(mut self, mode: u32) -> Self {
        self.access_mode = Some(mode);
        self
    }

    pub fn tenant_id(mut self, tenant: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeUuid {
    pub volume_uuid: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveVolumeNameRequest {
    pub volume_name: String,
    pub tenant_domain: Option<String>,
}

// Client Structs
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetClientListRequest {
    pub tenant_domain: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetClientListResponse {
    pub client: Vec<ClientMount>,
}

/// A host that currently has a volume mounted.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientMount {
    pub mount_user_name: Option<String>,
    pub mounted_volume_uuid: Option<String>,
}

// Device Structs
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetDeviceListRequest {
    pub device_id: Option<Vec<u64>>,
    pub device_type: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetDeviceListResponse {
    pub device_list: DeviceList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceList {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    pub device_id: u64,
    pub host_name: Option<String>,
    pub device_label: Option<String>,
    pub device_status: Option<String>,
    #[serde(default)]
    pub content: Vec<DeviceContent>,
}

/// What a device stores: `METADATA`, `DATA` or `REGISTRY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceContent {
    pub content_type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetDeviceNetworkEndpointsRequest {
    pub device_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetDeviceNetworkEndpointsResponse {
    pub endpoints: Vec<DeviceNetworkEndpoint>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceNetworkEndpoint {
    pub device_id: u64,
    pub hostname: Option<String>,
    pub endpoint_type: Option<String>,
    pub device_type: Option<String>,
    pub address: String,
    pub port: u16,
}
