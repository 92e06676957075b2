use schemars::{schema::RootSchema, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{any::type_name, sync::Arc};

use super::descriptor::provider_descriptor;

/// Cached schema information for a structured provider response.
///
/// Holds both the draft-7 JSON Schema (used for validation) and the
/// provider-facing descriptor sent as `responseSchema`.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    schema_json: Arc<Value>,
    descriptor: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema<T: 'static>(schema_name: &'static str, root: RootSchema) -> Self {
        let schema_json = serde_json::to_value(root).unwrap_or_else(|err| {
            panic!("failed to serialize schema for {}: {}", type_name::<T>(), err)
        });
        let descriptor = provider_descriptor(&schema_json);

        Self {
            schema_name,
            schema_json: Arc::new(schema_json),
            descriptor: Arc::new(descriptor),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    /// Descriptor in the provider's schema dialect (`OBJECT`, `STRING`, ...)
    pub fn descriptor(&self) -> &Value {
        self.descriptor.as_ref()
    }
}

/// A response type the provider is constrained to produce.
pub trait ResponseSchema: DeserializeOwned + JsonSchema + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}

/// Implement [`ResponseSchema`] for a `JsonSchema` type, caching the handle.
#[macro_export]
macro_rules! response_schema {
    ($ty:ty, $name:literal) => {
        impl $crate::schemas::ResponseSchema for $ty {
            fn schema() -> &'static $crate::schemas::SchemaHandle {
                static HANDLE: std::sync::OnceLock<$crate::schemas::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    let root = schemars::schema_for!($ty);
                    $crate::schemas::SchemaHandle::from_root_schema::<$ty>($name, root)
                })
            }
        }
    };
}
