// ABOUTME: IPAM tools - prefixes, IP addresses, and VLANs.
// ABOUTME: Includes the available-IPs lookup for a prefix.

use serde_json::{Map, Value, json};

use super::support::{confirmed, dry_run, pick_filters, require_id, require_str};
use crate::registry::ToolSpec;
use crate::schema::{Param, ReturnInfo};

pub(super) fn tools() -> anyhow::Result<Vec<ToolSpec>> {
    Ok(vec![
        list_prefixes(),
        get_prefix(),
        create_prefix(),
        available_ips(),
        list_ip_addresses(),
        create_ip_address(),
        list_vlans(),
    ])
}

fn list_prefixes() -> ToolSpec {
    ToolSpec::new("netbox_list_prefixes")
        .category("ipam")
        .doc("List prefixes, optionally filtered by site, VRF, or containment.

Args:
    site: Site slug.
    vrf_id: VRF ID.
    within: Parent prefix, e.g. 10.0.0.0/8.
    limit: Maximum number of results.

Returns:
    Paginated prefix list.

Example:
    netbox_list_prefixes(within=\"10.0.0.0/8\")")
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<Option<u64>>("vrf_id").describe("VRF ID filter"))
        .param(Param::of::<Option<String>>("within").describe("Parent prefix filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated prefix list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["site", "vrf_id", "within", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("ipam/prefixes", &filters).await?)
        })
}

fn get_prefix() -> ToolSpec {
    ToolSpec::new("netbox_get_prefix")
        .category("ipam")
        .doc("Retrieve a single prefix by numeric ID.

Args:
    id: Prefix ID.

Returns:
    The prefix object.")
        .param(Param::of::<u64>("id").describe("Prefix ID"))
        .returns(ReturnInfo::of::<Value>("The prefix object"))
        .handler(|client, args| async move {
            let id = require_id(&args, "id")?;
            Ok(client.get("ipam/prefixes", id).await?)
        })
}

fn create_prefix() -> ToolSpec {
    ToolSpec::new("netbox_create_prefix")
        .category("ipam")
        .doc("Create a new prefix.

Without confirm=true this returns a dry-run preview and writes nothing.

Args:
    prefix: CIDR notation, e.g. 10.20.0.0/24.
    status: Initial status, defaults to active.
    site: Site ID to scope the prefix to.
    confirm: Set true to apply the change.

Returns:
    The created prefix, or a dry-run preview.")
        .param(Param::of::<String>("prefix").describe("CIDR notation"))
        .param(Param::of::<Option<String>>("status").describe("Initial status"))
        .param(Param::of::<Option<u64>>("site").describe("Site ID scope"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("The created prefix, or a dry-run preview"))
        .handler(|client, args| async move {
            let mut payload = json!({
                "prefix": require_str(&args, "prefix")?,
                "status": args.get("status").and_then(Value::as_str).unwrap_or("active"),
            });
            if let Some(site) = args.get("site").and_then(Value::as_u64) {
                payload["site"] = json!(site);
            }
            if !confirmed(&args) {
                return Ok(dry_run("create", "ipam/prefixes", payload));
            }
            Ok(client.create("ipam/prefixes", payload).await?)
        })
}

fn available_ips() -> ToolSpec {
    ToolSpec::new("netbox_available_ips")
        .category("ipam")
        .doc("List free IP addresses inside a prefix.

Args:
    prefix_id: Prefix ID.
    limit: Maximum number of candidates.

Returns:
    Available IP addresses for the prefix.

Example:
    netbox_available_ips(prefix_id=17, limit=5)")
        .param(Param::of::<u64>("prefix_id").describe("Prefix ID"))
        .param(Param::of::<i64>("limit").default_value(10).describe("Maximum number of candidates"))
        .returns(ReturnInfo::of::<Value>("Available IP addresses"))
        .handler(|client, args| async move {
            let prefix_id = require_id(&args, "prefix_id")?;
            let mut filters = Map::new();
            filters.insert(
                "limit".to_string(),
                args.get("limit").cloned().unwrap_or(json!(10)),
            );
            let endpoint = format!("ipam/prefixes/{prefix_id}/available-ips");
            Ok(client.list(&endpoint, &filters).await?)
        })
}

fn list_ip_addresses() -> ToolSpec {
    ToolSpec::new("netbox_list_ip_addresses")
        .category("ipam")
        .doc("List IP addresses, optionally filtered by parent prefix or device.

Args:
    parent: Parent prefix, e.g. 10.20.0.0/24.
    device: Device name.
    limit: Maximum number of results.

Returns:
    Paginated IP address list.")
        .param(Param::of::<Option<String>>("parent").describe("Parent prefix filter"))
        .param(Param::of::<Option<String>>("device").describe("Device name filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated IP address list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["parent", "device", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("ipam/ip-addresses", &filters).await?)
        })
}

fn create_ip_address() -> ToolSpec {
    ToolSpec::new("netbox_create_ip_address")
        .category("ipam")
        .doc("Create a new IP address assignment.

Without confirm=true this returns a dry-run preview and writes nothing.

Args:
    address: Address with mask, e.g. 10.20.0.5/24.
    status: Initial status, defaults to active.
    dns_name: DNS name to record for the address.
    confirm: Set true to apply the change.

Returns:
    The created IP address, or a dry-run preview.")
        .param(Param::of::<String>("address").describe("Address with mask"))
        .param(Param::of::<Option<String>>("status").describe("Initial status"))
        .param(Param::of::<Option<String>>("dns_name").describe("DNS name"))
        .param(Param::of::<bool>("confirm").default_value(false).describe("Set true to apply the change"))
        .returns(ReturnInfo::of::<Value>("The created IP address, or a dry-run preview"))
        .handler(|client, args| async move {
            let mut payload = json!({
                "address": require_str(&args, "address")?,
                "status": args.get("status").and_then(Value::as_str).unwrap_or("active"),
            });
            if let Some(dns_name) = args.get("dns_name").and_then(Value::as_str) {
                payload["dns_name"] = json!(dns_name);
            }
            if !confirmed(&args) {
                return Ok(dry_run("create", "ipam/ip-addresses", payload));
            }
            Ok(client.create("ipam/ip-addresses", payload).await?)
        })
}

fn list_vlans() -> ToolSpec {
    ToolSpec::new("netbox_list_vlans")
        .category("ipam")
        .doc("List VLANs, optionally filtered by site or VLAN ID.

Args:
    site: Site slug.
    vid: 802.1Q VLAN ID.
    limit: Maximum number of results.

Returns:
    Paginated VLAN list.")
        .param(Param::of::<Option<String>>("site").describe("Site slug filter"))
        .param(Param::of::<Option<u64>>("vid").describe("802.1Q VLAN ID filter"))
        .param(Param::of::<i64>("limit").default_value(50).describe("Maximum number of results"))
        .returns(ReturnInfo::of::<Value>("Paginated VLAN list"))
        .handler(|client, args| async move {
            let mut filters = pick_filters(&args, &["site", "vid", "limit"]);
            filters.entry("limit").or_insert(json!(50));
            Ok(client.list("ipam/vlans", &filters).await?)
        })
}
