//! Module content registry: single source of truth for mapping the
//! active module to its page component.

use contracts::modules::ModuleId;
use leptos::prelude::*;

use crate::modules::dashboard::ui::DashboardPage;
use crate::modules::demand_pricing::ui::DemandPricingPage;
use crate::modules::digital_buying::ui::DigitalBuyingPage;
use crate::modules::inventory_allocation::ui::InventoryAllocationPage;
use crate::modules::market_intelligence::ui::MarketIntelligencePage;
use crate::modules::planning_plm::ui::PlanningPlmPage;

/// Resolves a raw module key at the navigation boundary.
///
/// The key set is closed, so an unknown value is a logic error; it is
/// logged and resolved to the Dashboard module rather than surfaced.
pub fn resolve_module(key: &str) -> ModuleId {
    ModuleId::parse(key).unwrap_or_else(|| {
        log::warn!("unknown module key '{key}', falling back to dashboard");
        ModuleId::default()
    })
}

/// Renders the page for the given module.
///
/// Exhaustive by construction: every `ModuleId` maps to exactly one
/// page component.
pub fn render_module_content(module: ModuleId) -> AnyView {
    match module {
        ModuleId::Dashboard => view! { <DashboardPage /> }.into_any(),
        ModuleId::MarketIntelligence => view! { <MarketIntelligencePage /> }.into_any(),
        ModuleId::PlanningPlm => view! { <PlanningPlmPage /> }.into_any(),
        ModuleId::DemandPricing => view! { <DemandPricingPage /> }.into_any(),
        ModuleId::InventoryAllocation => view! { <InventoryAllocationPage /> }.into_any(),
        ModuleId::DigitalBuying => view! { <DigitalBuyingPage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_module;
    use contracts::modules::ModuleId;

    #[test]
    fn resolves_every_known_key() {
        for module in ModuleId::ALL {
            assert_eq!(resolve_module(module.key()), module);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_dashboard() {
        assert_eq!(resolve_module("reporting"), ModuleId::Dashboard);
        assert_eq!(resolve_module(""), ModuleId::Dashboard);
        assert_eq!(resolve_module("Inventory-Allocation"), ModuleId::Dashboard);
    }
}
