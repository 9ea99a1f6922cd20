use serde::{Deserialize, Serialize};

/// Identifier of a top-level dashboard module.
///
/// The set is closed: navigation can only ever produce one of these six
/// values. Wire keys use kebab-case (`"market-intelligence"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    Dashboard,
    MarketIntelligence,
    PlanningPlm,
    DemandPricing,
    InventoryAllocation,
    DigitalBuying,
}

impl Default for ModuleId {
    fn default() -> Self {
        ModuleId::Dashboard
    }
}

impl ModuleId {
    /// All modules in sidebar order.
    pub const ALL: [ModuleId; 6] = [
        ModuleId::Dashboard,
        ModuleId::MarketIntelligence,
        ModuleId::PlanningPlm,
        ModuleId::DemandPricing,
        ModuleId::InventoryAllocation,
        ModuleId::DigitalBuying,
    ];

    /// Stable wire key, matching the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::MarketIntelligence => "market-intelligence",
            ModuleId::PlanningPlm => "planning-plm",
            ModuleId::DemandPricing => "demand-pricing",
            ModuleId::InventoryAllocation => "inventory-allocation",
            ModuleId::DigitalBuying => "digital-buying",
        }
    }

    /// Display label for the sidebar and page headers.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::MarketIntelligence => "Market Intelligence",
            ModuleId::PlanningPlm => "Planning & PLM",
            ModuleId::DemandPricing => "Demand & Pricing",
            ModuleId::InventoryAllocation => "Inventory & Allocation",
            ModuleId::DigitalBuying => "Digital Buying",
        }
    }

    /// Icon name resolved by the frontend `icon()` helper.
    pub fn icon(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "layout-dashboard",
            ModuleId::MarketIntelligence => "globe",
            ModuleId::PlanningPlm => "calendar",
            ModuleId::DemandPricing => "tag",
            ModuleId::InventoryAllocation => "boxes",
            ModuleId::DigitalBuying => "shopping-cart",
        }
    }

    /// Parses a wire key. Returns `None` for anything outside the
    /// closed set; callers decide the fallback policy.
    pub fn parse(key: &str) -> Option<ModuleId> {
        ModuleId::ALL.into_iter().find(|m| m.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dashboard() {
        assert_eq!(ModuleId::default(), ModuleId::Dashboard);
    }

    #[test]
    fn keys_round_trip() {
        for module in ModuleId::ALL {
            assert_eq!(ModuleId::parse(module.key()), Some(module));
        }
    }

    #[test]
    fn keys_are_unique() {
        for a in ModuleId::ALL {
            for b in ModuleId::ALL {
                if a != b {
                    assert_ne!(a.key(), b.key());
                }
            }
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(ModuleId::parse("reporting"), None);
        assert_eq!(ModuleId::parse(""), None);
        assert_eq!(ModuleId::parse("Dashboard"), None);
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        for module in ModuleId::ALL {
            let json = serde_json::to_string(&module).unwrap();
            assert_eq!(json, format!("\"{}\"", module.key()));
            let back: ModuleId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, module);
        }
    }

    #[test]
    fn labels_are_non_empty_and_unique() {
        let labels: Vec<_> = ModuleId::ALL.iter().map(|m| m.label()).collect();
        for label in &labels {
            assert!(!label.is_empty());
        }
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }
}
