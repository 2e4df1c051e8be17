// Adapters layer: concrete implementations of the domain ports. The
// in-memory stores here are the default backing store; any durable
// store satisfying the port contracts can replace them.

pub mod memory;
