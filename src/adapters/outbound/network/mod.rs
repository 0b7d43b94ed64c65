/// Network adapters for the npm registry and OSV
mod npm_registry_client;
mod osv_client;

pub use npm_registry_client::NpmRegistryClient;
pub use osv_client::OsvClient;
