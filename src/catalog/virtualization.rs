// ABOUTME: Virtualization tools - clusters and virtual machines.
// ABOUTME: VM creation follows the dry-run/confirm convention.

use serde_json::{Value, json};

use super::support::{confirmed, dry_run, pick_filters, require_id, require_str};
use crate::registry::ToolSpec;
use crate::schema::{Param, ReturnInfo};

pub(super) fn tools() -> anyhow::Result<Vec<ToolSpec>> {
    Ok(vec![
        list_clusters(),
        list_virtual_machines(),
        get_virtual_machine(),
        create_virtual_machine(),
    ])
}

fn list_clusters() -> ToolSpec {
    ToolSpec::new("netbox_list_clusters")
        .category("virtualization")
        .doc("List virtualization clusters.

Args:
    site: Site slug.
    limit: Maximum number of results.

Returns:
    Paginated cluster list.")
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated cluster list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["site", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("virtualization/clusters", &filters).await?)
        })
}

fn list_virtual_machines() -> ToolSpec {
    ToolSpec::new("netbox_list_virtual_machines")
        .category("virtualization")
        .doc("List virtual machines, optionally filtered by cluster or status.

Args:
    cluster: Cluster name.
    status: VM status, e.g. active or offline.
    limit: Maximum number of results.

Returns:
    Paginated virtual machine list.")
        .param(Param::of::<Option<String>>("cluster").describe("Cluster name filter"))
        .param(Param::of::<Option<String>>("status").describe("VM status filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated virtual machine list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["cluster", "status", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("virtualization/virtual-machines", &filters).await?)
        })
}

fn get_virtual_machine() -> ToolSpec {
    ToolSpec::new("netbox_get_virtual_machine")
        .category("virtualization")
        .doc("Retrieve a single virtual machine by numeric ID.

Args:
    id: Virtual machine ID.

Returns:
    The virtual machine object.")
        .param(Param::of::<u64>("id").describe("Virtual machine ID"))
        .returns(ReturnInfo::of::<Value>("The virtual machine object"))
        .handler(|client, args| async move {
            let id = require_id(&args, "id")?;
            Ok(client.get("virtualization/virtual-machines", id).await?)
        })
}

fn create_virtual_machine() -> ToolSpec {
    ToolSpec::new("netbox_create_virtual_machine")
        .category("virtualization")
        .doc("Create a new virtual machine in a cluster.

Without confirm=true this returns a dry-run preview and writes nothing.

Args:
    name: VM name.
    cluster: Cluster ID.
    vcpus: Virtual CPU count.
    memory: Memory in megabytes.
    confirm: Set true to apply the change.

Returns:
    The created virtual machine, or a dry-run preview.")
        .param(Param::of::<String>("name").describe("VM name"))
        .param(Param::of::<u64>("cluster").describe("Cluster ID"))
        .param(Param::of::<Option<u64>>("vcpus").describe("Virtual CPU count"))
        .param(Param::of::<Option<u64>>("memory").describe("Memory in megabytes"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("The created virtual machine, or a dry-run preview"))
        .handler(|client, args| async move {
            let mut payload = json!({
                "name": require_str(&args, "name")?,
                "cluster": require_id(&args, "cluster")?,
            });
            if let Some(vcpus) = args.get("vcpus").and_then(Value::as_u64) {
                payload["vcpus"] = json!(vcpus);
            }
            if let Some(memory) = args.get("memory").and_then(Value::as_u64) {
                payload["memory"] = json!(memory);
            }
            if !confirmed(&args) {
                return Ok(dry_run("create", "virtualization/virtual-machines", payload));
            }
            Ok(client.create("virtualization/virtual-machines", payload).await?)
        })
}
