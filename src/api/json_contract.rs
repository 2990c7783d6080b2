use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartPresentationConfig;

pub const PRESENTATION_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartPresentationConfig,
}

impl ChartPresentationConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PresentationConfigJsonContractV1 {
            schema_version: PRESENTATION_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize presentation config contract v1: {e}"
            ))
        })
    }

    /// Accepts both the bare config and the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse presentation config json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse presentation config: {e}"))
            });
        }

        let payload: PresentationConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!(
                    "failed to parse presentation config json payload: {e}"
                ))
            })?;
        if payload.schema_version != PRESENTATION_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported presentation config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
