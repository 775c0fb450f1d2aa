// Core engine exports
pub mod age;
pub mod costs;
pub mod eligibility;
pub mod engine;
pub mod household;
pub mod recommend;
pub mod scoring;

pub use age::{get_age_bracket, get_standard_age_bracket};
pub use costs::{calculate_annual_cost, find_plan_costs, get_plan_cost, parse_iua_preference};
pub use eligibility::{find_eligible_plans, match_plan};
pub use engine::{PlanEngine, RecommendationResult};
pub use household::{household_for, infer_household_type, parse_household};
pub use recommend::aggregate;
pub use scoring::score_plans;
