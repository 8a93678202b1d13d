use std::time::Duration;

/// Fixed server-side deadline attached to every inbound request.
///
/// Deadlines are independent per hop, not nested: the client waits longer
/// than this, and the store's write window is shorter and computed from the
/// moment the persist starts. See DESIGN.md for the known latency-budget gap
/// this simple model carries.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(200);
