/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: operating system,
/// file system, npm registry, OSV and console.
pub mod outbound;
