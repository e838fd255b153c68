//! Parse/format laws checked over generated IDs.

use arm_resourceids::{
    define_resource_id, Grammar, ParseMode, Parser, ResourceId, Segment,
};
use proptest::prelude::*;
use rstest::rstest;

static SUBNET: Grammar = Grammar::new(
    "Subnet",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_("staticVirtualNetworks", "virtualNetworks"),
        Segment::user_specified("virtualNetworkName"),
        Segment::static_("staticSubnets", "subnets"),
        Segment::user_specified("subnetName"),
    ],
);

define_resource_id!(
    /// A subnet within a virtual network.
    SubnetId, SUBNET, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        virtual_network_name: "virtualNetworkName",
        subnet_name: "subnetName",
    }
);

static SLOT: Grammar = Grammar::new(
    "Web App Slot",
    &[
        Segment::static_("staticSites", "sites"),
        Segment::user_specified("siteName"),
        Segment::constant("slotKind", &["slots", "deploymentSlots"]),
        Segment::user_specified("slotName"),
    ],
);

define_resource_id!(SlotId, SLOT, {
    site_name: "siteName",
    slot_kind: "slotKind",
    slot_name: "slotName",
});

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9._-]{0,23}"
}

fn subnet_id() -> impl Strategy<Value = SubnetId> {
    (value(), value(), value(), value())
        .prop_map(|(sub, rg, vnet, subnet)| SubnetId::new(sub, rg, vnet, subnet))
}

/// Applies a case mask to every literal segment of a canonical path.
fn permute_literal_case(grammar: &Grammar, path: &str, mask: &[bool]) -> String {
    let tokens: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let mut out = String::new();
    for (i, (segment, token)) in grammar.segments().iter().zip(tokens).enumerate() {
        out.push('/');
        if segment.is_literal() {
            let flip = mask.get(i).copied().unwrap_or(false);
            let permuted: String = token
                .chars()
                .enumerate()
                .map(|(j, c)| {
                    if flip ^ (j % 2 == 0) {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
            out.push_str(&permuted);
        } else {
            out.push_str(token);
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_format_then_strict_parse_roundtrips(id in subnet_id()) {
        let parsed = SubnetId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn prop_strict_parse_of_formatted_insensitive_parse_roundtrips(
        id in subnet_id(),
        mask in proptest::collection::vec(any::<bool>(), 10),
    ) {
        let drifted = permute_literal_case(&SUBNET, &id.id(), &mask);
        let recovered = SubnetId::parse_insensitively(&drifted).unwrap();
        prop_assert_eq!(&recovered, &id);
        prop_assert_eq!(SubnetId::parse(&recovered.id()).unwrap(), id);
    }

    #[test]
    fn prop_insensitive_accepts_whatever_strict_accepts(
        id in subnet_id(),
        mask in proptest::collection::vec(any::<bool>(), 10),
    ) {
        let parser = Parser::new(&SUBNET);
        let strict = parser.parse(&id.id(), ParseMode::Strict).unwrap();
        let drifted = permute_literal_case(&SUBNET, &id.id(), &mask);
        let insensitive = parser.parse(&drifted, ParseMode::Insensitive).unwrap();
        prop_assert_eq!(
            strict.iter().collect::<Vec<_>>(),
            insensitive.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_parse_is_deterministic(input in "(/[A-Za-z.]{0,12}){0,12}") {
        let parser = Parser::new(&SUBNET);
        prop_assert_eq!(
            parser.parse(&input, ParseMode::Insensitive),
            parser.parse(&input, ParseMode::Insensitive)
        );
    }
}

#[rstest]
#[case("/sites/app1/slots/staging", "slots")]
#[case("/sites/app1/deploymentSlots/staging", "deploymentSlots")]
#[case("/SITES/app1/DeploymentSLOTS/staging", "deploymentSlots")]
fn test_constant_segment_records_canonical_value(#[case] input: &str, #[case] kind: &str) {
    let id = SlotId::parse_insensitively(input).unwrap();
    assert_eq!(id.slot_kind, kind);
    assert_eq!(SlotId::parse(&id.id()).unwrap(), id);
}

#[rstest]
#[case("/sites/app1/Slots/staging")]
#[case("/sites/app1/instances/staging")]
fn test_constant_segment_strict_mismatch(#[case] input: &str) {
    assert!(SlotId::parse(input).unwrap_err().is_literal_mismatch());
}

#[test]
fn test_widget_scenario() {
    static WIDGET_PART: Grammar = Grammar::new(
        "Widget Part",
        &[
            Segment::static_("staticWidgets", "widgets"),
            Segment::user_specified("widgetId"),
            Segment::static_("staticParts", "parts"),
            Segment::user_specified("partName"),
        ],
    );
    define_resource_id!(WidgetPartId, WIDGET_PART, {
        widget_id: "widgetId",
        part_name: "partName",
    });

    let id = WidgetPartId::parse_insensitively("/Widgets/abc/Parts/screw1").unwrap();
    assert_eq!(id, WidgetPartId::new("abc", "screw1"));
    assert_eq!(id.to_string(), "/widgets/abc/parts/screw1");
}
