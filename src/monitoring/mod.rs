/*!
 * Monitoring Module
 * Logging setup for library consumers and the CLI
 */

pub mod tracer;

pub use tracer::init_tracing;
