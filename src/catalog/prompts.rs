// ABOUTME: Guided workflow prompts - longer-running checklists that walk an
// ABOUTME: operator through multi-step NetBox procedures.

use serde_json::Value;

use crate::registry::PromptSpec;

pub(super) fn prompts() -> anyhow::Result<Vec<PromptSpec>> {
    Ok(vec![device_onboarding(), ip_allocation()])
}

fn arg(args: &serde_json::Map<String, Value>, key: &str, fallback: &str) -> String {
    args.get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn device_onboarding() -> PromptSpec {
    PromptSpec::new(
        "device_onboarding",
        "Step-by-step checklist for onboarding a new device into NetBox",
    )
    .doc("Guides an operator through registering a device: site and rack \
          placement, device type, role, and primary IP assignment.")
    .sync_handler(|args| {
        let device = arg(&args, "device", "<device name>");
        let site = arg(&args, "site", "<site slug>");
        Ok(format!(
            "Onboarding checklist for {device} at {site}:\n\
             1. Verify the site exists: netbox_list_sites(region=...)\n\
             2. Pick a rack with free units: netbox_list_racks(site=\"{site}\")\n\
             3. Preview the device record: netbox_create_device(name=\"{device}\", ...)\n\
             4. Re-run step 3 with confirm=true once the preview looks right.\n\
             5. Allocate a management IP: netbox_available_ips(prefix_id=...)\n\
             6. Assign it: netbox_create_ip_address(address=..., confirm=true)"
        ))
    })
}

fn ip_allocation() -> PromptSpec {
    PromptSpec::new(
        "ip_allocation",
        "Walkthrough for allocating an IP address from the right prefix",
    )
    .doc("Finds candidate prefixes for a site and walks through choosing a \
          free address and recording it with a DNS name.")
    .async_handler(|args| async move {
        let site = arg(&args, "site", "<site slug>");
        Ok(format!(
            "IP allocation for {site}:\n\
             1. Find prefixes scoped to the site: netbox_list_prefixes(site=\"{site}\")\n\
             2. List free addresses: netbox_available_ips(prefix_id=..., limit=5)\n\
             3. Preview the assignment: netbox_create_ip_address(address=..., dns_name=...)\n\
             4. Apply with confirm=true and verify via netbox_list_ip_addresses(parent=...)."
        ))
    })
}
