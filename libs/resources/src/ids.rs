//! ID kinds for the managed resources.
//!
//! Literal casing must agree across every grammar here: the identifier
//! registry rejects a literal registered with two different casings.

use arm_resourceids::{define_resource_id, Grammar, Segment};

pub static SUBSCRIPTION: Grammar = Grammar::new(
    "Subscription",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
    ],
);

define_resource_id!(
    /// A subscription.
    SubscriptionId, SUBSCRIPTION, { subscription_id: "subscriptionId" }
);

pub static RESOURCE_GROUP: Grammar = Grammar::new(
    "Resource Group",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
    ],
);

define_resource_id!(
    /// A resource group.
    ResourceGroupId, RESOURCE_GROUP, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
    }
);

pub static KUBERNETES_CLUSTER: Grammar = Grammar::new(
    "Kubernetes Cluster",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
        Segment::static_("staticManagedClusters", "managedClusters"),
        Segment::user_specified("managedClusterName"),
    ],
);

define_resource_id!(
    /// A managed Kubernetes cluster.
    KubernetesClusterId, KUBERNETES_CLUSTER, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        managed_cluster_name: "managedClusterName",
    }
);

pub static AGENT_POOL: Grammar = Grammar::new(
    "Agent Pool",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
        Segment::static_("staticManagedClusters", "managedClusters"),
        Segment::user_specified("managedClusterName"),
        Segment::static_("staticAgentPools", "agentPools"),
        Segment::user_specified("agentPoolName"),
    ],
);

define_resource_id!(
    /// A node pool of a managed Kubernetes cluster.
    AgentPoolId, AGENT_POOL, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        managed_cluster_name: "managedClusterName",
        agent_pool_name: "agentPoolName",
    }
);

pub static APPLICATION_GATEWAY: Grammar = Grammar::new(
    "Application Gateway",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_("staticApplicationGateways", "applicationGateways"),
        Segment::user_specified("applicationGatewayName"),
    ],
);

define_resource_id!(
    /// An application gateway.
    ApplicationGatewayId, APPLICATION_GATEWAY, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        application_gateway_name: "applicationGatewayName",
    }
);

pub static APP_SERVICE_PLAN: Grammar = Grammar::new(
    "App Service Plan",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_("staticServerFarms", "serverFarms"),
        Segment::user_specified("serverFarmName"),
    ],
);

define_resource_id!(
    /// An App Service plan.
    AppServicePlanId, APP_SERVICE_PLAN, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        server_farm_name: "serverFarmName",
    }
);

pub static MANAGED_DISK: Grammar = Grammar::new(
    "Managed Disk",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute"),
        Segment::static_("staticDisks", "disks"),
        Segment::user_specified("diskName"),
    ],
);

define_resource_id!(
    /// A managed disk.
    ManagedDiskId, MANAGED_DISK, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        disk_name: "diskName",
    }
);

pub static REDIS_CACHE: Grammar = Grammar::new(
    "Redis",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftCache", "Microsoft.Cache"),
        Segment::static_("staticRedis", "redis"),
        Segment::user_specified("redisName"),
    ],
);

define_resource_id!(
    /// A Redis cache.
    RedisCacheId, REDIS_CACHE, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        redis_name: "redisName",
    }
);

pub static SUBNET: Grammar = Grammar::new(
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
    /// A subnet of a virtual network.
    SubnetId, SUBNET, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        virtual_network_name: "virtualNetworkName",
        subnet_name: "subnetName",
    }
);

pub static WEB_APP_SLOT: Grammar = Grammar::new(
    "Web App Slot",
    &[
        Segment::static_("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_("staticSites", "sites"),
        Segment::user_specified("siteName"),
        Segment::static_("staticSlots", "slots"),
        Segment::user_specified("slotName"),
    ],
);

define_resource_id!(
    /// A deployment slot of a web or function app.
    WebAppSlotId, WEB_APP_SLOT, {
        subscription_id: "subscriptionId",
        resource_group_name: "resourceGroupName",
        site_name: "siteName",
        slot_name: "slotName",
    }
);

/// Every grammar in the catalog, in registration order.
pub static ALL: &[&Grammar] = &[
    &SUBSCRIPTION,
    &RESOURCE_GROUP,
    &KUBERNETES_CLUSTER,
    &AGENT_POOL,
    &APPLICATION_GATEWAY,
    &APP_SERVICE_PLAN,
    &MANAGED_DISK,
    &REDIS_CACHE,
    &SUBNET,
    &WEB_APP_SLOT,
];
