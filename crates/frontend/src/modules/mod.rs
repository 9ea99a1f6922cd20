pub mod dashboard;
pub mod demand_pricing;
pub mod digital_buying;
pub mod inventory_allocation;
pub mod market_intelligence;
pub mod planning_plm;
