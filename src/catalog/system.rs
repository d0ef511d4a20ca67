// ABOUTME: System tools - NetBox health check and recent change log.
// ABOUTME: Read-only operations against status and extras endpoints.

use serde_json::{Value, json};

use super::support::pick_filters;
use crate::registry::ToolSpec;
use crate::schema::{Param, ReturnInfo};

pub(super) fn tools() -> anyhow::Result<Vec<ToolSpec>> {
    Ok(vec![health_check(), list_changes()])
}

fn health_check() -> ToolSpec {
    ToolSpec::new("netbox_health_check")
        .category("system")
        .doc("Check that the NetBox instance is reachable and report its version.

Returns:
    Reachability flag plus the raw /api/status/ payload.

Example:
    netbox_health_check()")
        .returns(ReturnInfo::of::<Value>("Reachability flag plus status payload"))
        .handler(|client, _args| async move {
            let status = client.status().await?;
            Ok(json!({
                "reachable": true,
                "status": status,
            }))
        })
}

fn list_changes() -> ToolSpec {
    ToolSpec::new("netbox_list_changes")
        .category("system")
        .doc("List recent object changes from the NetBox change log.

Args:
    user: Username that made the change.
    limit: Maximum number of results.

Returns:
    Paginated change log entries, newest first.")
        .param(Param::of::<Option<String>>("user").describe("Username filter"))
        .param(Param::of::<i64>("limit").default_value(20).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated change log entries"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["user", "limit"]);
            filters.entry("limit").or_insert(json!(20));
            Ok(client.list("extras/object-changes", &filters).await?)
        })
}
