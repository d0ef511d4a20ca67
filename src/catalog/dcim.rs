// ABOUTME: DCIM tools - sites, devices, and racks.
// ABOUTME: Mutating tools follow the dry-run/confirm convention.

use serde_json::{Value, json};

use super::support::{confirmed, dry_run, pick_filters, require_id, require_str};
use crate::registry::ToolSpec;
use crate::schema::{Param, ReturnInfo};

pub(super) fn tools() -> anyhow::Result<Vec<ToolSpec>> {
    Ok(vec![
        list_sites(),
        get_site(),
        create_site(),
        list_devices(),
        get_device(),
        create_device(),
        delete_device(),
        list_racks(),
    ])
}

fn list_sites() -> ToolSpec {
    ToolSpec::new("netbox_list_sites")
        .category("dcim")
        .doc("List sites, optionally filtered by region or status.

Args:
    region: Region slug to filter by.
    status: Site status, e.g. active or planned.
    limit: Maximum number of results.

Returns:
    Paginated site list as returned by NetBox.

Example:
    netbox_list_sites(region=\"emea\", status=\"active\")")
        .param(Param::of::<Option<String>>("region").describe("Region slug filter"))
        .param(Param::of::<Option<String>>("status").describe("Site status filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated site list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["region", "status", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("dcim/sites", &filters).await?)
        })
}

fn get_site() -> ToolSpec {
    ToolSpec::new("netbox_get_site")
        .category("dcim")
        .doc("Retrieve a single site by numeric ID.

Args:
    id: Site ID.

Returns:
    The site object.")
        .param(Param::of::<u64>("id").describe("Site ID"))
        .returns(ReturnInfo::of::<Value>("The site object"))
        .handler(|client, args| async move {
            let id = require_id(&args, "id")?;
            Ok(client.get("dcim/sites", id).await?)
        })
}

fn create_site() -> ToolSpec {
    ToolSpec::new("netbox_create_site")
        .category("dcim")
        .doc("Create a new site.

Without confirm=true this returns a dry-run preview and writes nothing.

Args:
    name: Site name.
    slug: URL-safe site slug.
    status: Initial status, defaults to active.
    confirm: Set true to apply the change.

Returns:
    The created site, or a dry-run preview.")
        .param(Param::of::<String>("name").describe("Site name"))
        .param(Param::of::<String>("slug").describe("URL-safe slug"))
        .param(Param::of::<Option<String>>("status").describe("Initial status"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("The created site, or a dry-run preview"))
        .handler(|client, args| async move {
            let payload = json!({
                "name": require_str(&args, "name")?,
                "slug": require_str(&args, "slug")?,
                "status": args.get("status").and_then(Value::as_str).unwrap_or("active"),
            });
            if !confirmed(&args) {
                return Ok(dry_run("create", "dcim/sites", payload));
            }
            Ok(client.create("dcim/sites", payload).await?)
        })
}

fn list_devices() -> ToolSpec {
    ToolSpec::new("netbox_list_devices")
        .category("dcim")
        .doc("List devices, optionally filtered by name, site, or role.

Args:
    name: Exact device name.
    site: Site slug.
    role: Device role slug.
    limit: Maximum number of results.

Returns:
    Paginated device list.

Example:
    netbox_list_devices(site=\"ams-dc1\", role=\"core-switch\")")
        .param(Param::of::<Option<String>>("name").describe("Exact device name"))
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<Option<String>>("role").describe("Device role slug filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated device list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["name", "site", "role", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("dcim/devices", &filters).await?)
        })
}

fn get_device() -> ToolSpec {
    ToolSpec::new("netbox_get_device")
        .category("dcim")
        .doc("Retrieve a single device by numeric ID.

Args:
    id: Device ID.

Returns:
    The device object.")
        .param(Param::of::<u64>("id").describe("Device ID"))
        .returns(ReturnInfo::of::<Value>("The device object"))
        .handler(|client, args| async move {
            let id = require_id(&args, "id")?;
            Ok(client.get("dcim/devices", id).await?)
        })
}

fn create_device() -> ToolSpec {
    ToolSpec::new("netbox_create_device")
        .category("dcim")
        .doc("Create a new device.

Without confirm=true this returns a dry-run preview and writes nothing.

Args:
    name: Device name.
    device_type: Device type ID.
    role: Device role ID.
    site: Site ID.
    confirm: Set true to apply the change.

Returns:
    The created device, or a dry-run preview.")
        .param(Param::of::<String>("name").describe("Device name"))
        .param(Param::of::<u64>("device_type").describe("Device type ID"))
        .param(Param::of::<u64>("role").describe("Device role ID"))
        .param(Param::of::<u64>("site").describe("Site ID"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("The created device, or a dry-run preview"))
        .handler(|client, args| async move {
            let payload = json!({
                "name": require_str(&args, "name")?,
                "device_type": require_id(&args, "device_type")?,
                "role": require_id(&args, "role")?,
                "site": require_id(&args, "site")?,
            });
            if !confirmed(&args) {
                return Ok(dry_run("create", "dcim/devices", payload));
            }
            Ok(client.create("dcim/devices", payload).await?)
        })
}

fn delete_device() -> ToolSpec {
    ToolSpec::new("netbox_delete_device")
        .category("dcim")
        .doc("Delete a device by numeric ID.

Without confirm=true this returns a dry-run preview and deletes nothing.

Args:
    id: Device ID.
    confirm: Set true to apply the change.

Returns:
    Null on success, or a dry-run preview.")
        .param(Param::of::<u64>("id").describe("Device ID"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("Null on success, or a dry-run preview"))
        .handler(|client, args| async move {
            let id = require_id(&args, "id")?;
            if !confirmed(&args) {
                return Ok(dry_run("delete", "dcim/devices", json!({ "id": id })));
            }
            Ok(client.delete("dcim/devices", id).await?)
        })
}

fn list_racks() -> ToolSpec {
    ToolSpec::new("netbox_list_racks")
        .category("dcim")
        .doc("List racks, optionally filtered by site.

Args:
    site: Site slug.
    limit: Maximum number of results.

Returns:
    Paginated rack list.")
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated rack list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["site", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("dcim/racks", &filters).await?)
        })
}
